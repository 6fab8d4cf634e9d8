use dotpath::{
    Map, Value,
    coerce::{coerce_float64, coerce_int64, coerce_string},
};

#[test]
fn test_coerce_int64_precedence() {
    assert_eq!(coerce_int64(&Value::from(7i32)), Some(7));
    assert_eq!(coerce_int64(&Value::from(7.8f32)), Some(7));
    assert_eq!(coerce_int64(&Value::Float(6.9)), Some(6));
    assert_eq!(coerce_int64(&Value::from("should be 0")), None);
}

#[test]
fn test_coerce_float64_precedence() {
    assert_eq!(coerce_float64(&Value::from(5)), Some(5.0));
    assert_eq!(coerce_float64(&Value::Float(6.5)), Some(6.5));
    assert_eq!(coerce_float64(&Value::from("6.5")), Some(6.5));
    assert_eq!(coerce_float64(&Value::from(true)), None);

    let narrowed = coerce_float64(&Value::from(7.8f32)).unwrap();
    assert_eq!((narrowed * 10.0).floor() / 10.0, 7.8);
}

#[test]
fn test_coerce_string_precedence() {
    assert_eq!(coerce_string(&Value::Float(89.12)).as_deref(), Some("89.12"));
    assert_eq!(coerce_string(&Value::from(8)).as_deref(), Some("8"));
    assert_eq!(coerce_string(&Value::from(true)).as_deref(), Some("true"));
    assert_eq!(coerce_string(&Value::from("0")).as_deref(), Some("0"));
}

#[test]
fn test_containers_never_coerce() {
    let map = Value::Map(Map::new().with("a", 1));
    assert_eq!(coerce_int64(&map), None);
    assert_eq!(coerce_float64(&map), None);
    assert_eq!(coerce_string(&map), None);
}

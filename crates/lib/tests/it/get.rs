//! Candidate fallback and typed getters.

use dotpath::{Map, Value, get, get_float64, get_int64, get_string};

use crate::helpers::{Config, Server, test_struct};

fn numbers() -> Value {
    let a = Map::new()
        .with("b", 5)
        .with("c", 6.5)
        .with("d", 7i32)
        .with("e", "should be 0")
        .with("f", 7.8f32);
    Value::Map(Map::new().with("a", a))
}

#[test]
fn test_get_int64() {
    let data = numbers();

    assert_eq!(get_int64(&data, ["a.b"]), 5);
    assert_eq!(get_int64(&data, ["a.c"]), 6);
    assert_eq!(get_int64(&data, ["a.d"]), 7);
    assert_eq!(get_int64(&data, ["a.e"]), 0);
    assert_eq!(get_int64(&data, ["a.missing"]), 0);
}

#[test]
fn test_get_float64() {
    let data = numbers();

    assert_eq!(get_float64(&data, ["a.b"]), 5.0);
    assert_eq!(get_float64(&data, ["a.c"]), 6.5);
    assert_eq!((get_float64(&data, ["a.f"]) * 10.0).floor() / 10.0, 7.8);
    assert_eq!(get_float64(&data, ["a.e"]), 0.0);
}

#[test]
fn test_get_string() {
    let data = Value::Map(Map::new().with("biz", "tammy"));
    assert_eq!(get_string(&data, ["biz"]), "tammy");
}

#[test]
fn test_get_string_fallback() {
    let data = Value::Map(Map::new().with("b", "todd"));
    assert_eq!(get_string(&data, ["a", "b"]), "todd");
    assert_eq!(get_string(&data, ["a", "c"]), "");
}

#[test]
fn test_typed_getters_skip_uncoercible_candidates() {
    let data = Value::Map(
        Map::new()
            .with("a", Map::new())
            .with("b", "x")
            .with("empty", "")
            .with("n", 3),
    );

    assert_eq!(get_string(&data, ["a", "b"]), "x");
    // Empty text is absent, so the search moves on
    assert_eq!(get_string(&data, ["empty", "n"]), "3");
    assert_eq!(get_int64(&data, ["b", "n"]), 3);
}

#[test]
fn test_get_stops_at_first_non_null_even_if_uncoercible() {
    let data = Value::Map(Map::new().with("a", Map::new()).with("b", "x"));

    let found = get(&data, ["a", "b"]).unwrap();
    assert_eq!(found, Some(Value::Map(Map::new())));
}

#[test]
fn test_get_null_short_circuits_candidate() {
    let data = Value::Map(Map::new().with("a", Value::Null).with("b", Map::new().with("c", 2)));

    assert_eq!(get(&data, ["a.c"]).unwrap(), None);
    assert_eq!(get(&data, ["a.c", "b.c"]).unwrap(), Some(Value::Int(2)));
}

#[test]
fn test_get_on_null_root() {
    let data = Value::Null;
    assert_eq!(get(&data, ["a"]).unwrap(), None);
    assert_eq!(get_string(&data, ["a"]), "");
}

#[test]
fn test_get_through_sequence_returns_sequence() {
    let list = vec![Value::Int(1), Value::Int(2)];
    let data = Value::Map(Map::new().with("list", list.clone()));

    assert_eq!(get(&data, ["list.0"]).unwrap(), Some(Value::List(list)));
}

#[test]
fn test_missing_field_error_surfaces_only_when_all_fail() {
    let record = test_struct();

    let err = get(&record, ["nope"]).unwrap_err();
    assert!(err.is_not_found());

    // A later success suppresses the earlier error
    assert_eq!(get(&record, ["nope", "c"]).unwrap(), Some(Value::from("4")));

    // A later clean miss does not clear it
    assert!(get(&record, ["nope", "b.missing"]).is_err());
}

#[test]
fn test_get_scalar_root_is_type_error() {
    let data = Value::Int(4);
    let err = get(&data, ["a"]).unwrap_err();
    assert!(err.is_type_error());
    assert_eq!(get_int64(&data, ["a"]), 0);
}

#[test]
fn test_get_from_nested_records() {
    let config = Config {
        name: "primary".to_string(),
        server: Server {
            host: "db.local".to_string(),
            port: 5432,
            weight: 0.5,
        },
        ..Default::default()
    };

    assert_eq!(get_string(&config, ["Server.Host"]), "db.local");
    assert_eq!(get_int64(&config, ["server.port"]), 5432);
    assert_eq!(get_float64(&config, ["server.weight"]), 0.5);
    assert_eq!(get(&config, ["backup.host"]).unwrap(), None);
}

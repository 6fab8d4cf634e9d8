//! Default-aware merging.

use dotpath::{Map, Value, extend, get, get_float64, get_int64, get_string};

use crate::helpers::{Config, Server, TestStruct};

#[test]
fn test_extend() {
    let mut x = Value::Map(
        Map::new()
            .with("A", 1)
            .with("C", Map::new().with("Z", 3))
            .with("F", false)
            .with("G", true)
            .with("H", "base")
            .with("I", "")
            .with("J", 0)
            .with("K", 9)
            .with("L", 0.0)
            .with("M", 18.9),
    );
    let y = Value::Map(
        Map::new()
            .with("B", 8)
            .with("C", Map::new().with("X", 6))
            .with("D", Map::new().with("Y", 2))
            .with("F", true)
            .with("G", false)
            .with("H", "")
            .with("I", "over")
            .with("J", 12)
            .with("K", 0)
            .with("L", 9.1)
            .with("M", 0.0),
    );

    extend(&mut x, &y).unwrap();

    assert_eq!(get_string(&x, ["A"]), "1");
    assert_eq!(get_string(&x, ["B"]), "8");
    assert_eq!(get_string(&x, ["C.Z"]), "3");
    assert_eq!(get_string(&x, ["C.X"]), "6");
    assert_eq!(get_int64(&x, ["D.Y"]), 2);

    // false never clobbers, true always does
    assert_eq!(get(&x, ["F"]).unwrap(), Some(Value::Bool(true)));
    assert_eq!(get(&x, ["G"]).unwrap(), Some(Value::Bool(true)));

    // "" does not clobber a meaningful value, and is clobbered by one
    assert_eq!(get_string(&x, ["H"]), "base");
    assert_eq!(get_string(&x, ["I"]), "over");

    // Same for integer and float zero
    assert_eq!(get_int64(&x, ["J"]), 12);
    assert_eq!(get_int64(&x, ["K"]), 9);
    assert_eq!(get_float64(&x, ["L"]), 9.1);
    assert_eq!(get_float64(&x, ["M"]), 18.9);

    // The source is untouched
    assert_eq!(get_int64(&y, ["K"]), 0);
}

#[test]
fn test_extend_fractions_below_one_do_not_clobber() {
    let mut to = Value::Map(Map::new().with("r", 7.5).with("s", 2.0).with("t", 0.25));
    let from = Value::Map(Map::new().with("r", 0.5).with("s", -0.75).with("t", 1.5));

    extend(&mut to, &from).unwrap();

    assert_eq!(get_float64(&to, ["r"]), 7.5);
    assert_eq!(get_float64(&to, ["s"]), 2.0);
    assert_eq!(get_float64(&to, ["t"]), 1.5);
}

#[test]
fn test_extend_skips_empty_containers_and_nulls() {
    let mut to = Value::Map(
        Map::new()
            .with("list", vec![Value::Int(1)])
            .with("map", Map::new().with("keep", 1))
            .with("n", "kept"),
    );
    let from = Value::Map(
        Map::new()
            .with("list", Vec::<Value>::new())
            .with("map", Map::new())
            .with("n", Value::Null),
    );

    let before = to.clone();
    extend(&mut to, &from).unwrap();
    assert_eq!(to, before);
}

#[test]
fn test_extend_copies_sequences_whole() {
    let mut to = Value::Map(Map::new().with("list", vec![Value::Int(1)]));
    let from = Value::Map(Map::new().with("list", vec![Value::Int(2), Value::Int(3)]));

    extend(&mut to, &from).unwrap();
    assert_eq!(
        get(&to, ["list"]).unwrap(),
        Some(Value::List(vec![Value::Int(2), Value::Int(3)]))
    );
}

#[test]
fn test_extend_preserves_dotted_and_padded_keys() {
    let mut to = Value::Map(Map::new());
    let from = Value::Map(
        Map::new()
            .with("v1.2", Map::new().with(" padded ", "x"))
            .with("plain", 1),
    );

    extend(&mut to, &from).unwrap();
    assert_eq!(to, from);
}

#[test]
fn test_extend_keeps_trailing_backslash_keys() {
    let mut to = Value::Map(Map::new());
    let from = Value::Map(Map::new().with("a\\", Map::new().with("b", 1)));

    extend(&mut to, &from).unwrap();
    assert_eq!(to, from);
}

#[test]
fn test_extend_into_record() {
    let mut config = Config {
        name: "primary".to_string(),
        server: Server {
            host: "db.local".to_string(),
            port: 5432,
            weight: 1.0,
        },
        ..Default::default()
    };
    let overrides = Value::Map(
        Map::new()
            .with("name", "")
            .with("server", Map::new().with("port", 6543).with("weight", 0.0))
            .with("labels", Map::new().with("env", "prod")),
    );

    extend(&mut config, &overrides).unwrap();

    assert_eq!(config.name, "primary");
    assert_eq!(config.server.host, "db.local");
    assert_eq!(config.server.port, 6543);
    assert_eq!(config.server.weight, 1.0);
    assert_eq!(get_string(&config, ["labels.env"]), "prod");
}

#[test]
fn test_extend_from_record() {
    let mut to = Value::Map(Map::new().with("c", "old").with("d", 1));
    let from = TestStruct {
        a: true,
        b: Map::new(),
        c: String::new(),
        d: 9,
    };

    extend(&mut to, &from).unwrap();

    assert_eq!(get(&to, ["a"]).unwrap(), Some(Value::Bool(true)));
    assert_eq!(get_string(&to, ["c"]), "old");
    assert_eq!(get_int64(&to, ["d"]), 9);
    assert_eq!(get(&to, ["b"]).unwrap(), None);
}

#[test]
fn test_extend_stops_on_first_error() {
    let mut to = TestStruct::default();
    let from = Value::Map(Map::new().with("d", "text"));

    let err = extend(&mut to, &from).unwrap_err();
    assert!(err.is_type_error());
}

use dotpath::{Map, Value, keys, keys_recursive, keys_recursive_leaves};

use crate::helpers::{Config, assert_same_keys, sample_map, test_struct};

#[test]
fn test_keys_of_non_containers() {
    assert!(keys(&Value::Null, None).is_empty());
    assert!(keys(&Value::Int(4), None).is_empty());
    assert!(keys(&Value::List(vec![Value::Int(1)]), None).is_empty());
}

#[test]
fn test_keys_of_map() {
    let data = sample_map();

    assert_same_keys(keys(&data, None), &["one", "two", "3", "a", "d", "j"]);
    assert_same_keys(
        keys(&data, Some("root.data")),
        &[
            "root.data.one",
            "root.data.two",
            "root.data.3",
            "root.data.a",
            "root.data.d",
            "root.data.j",
        ],
    );
}

#[test]
fn test_keys_of_record() {
    let record = test_struct();

    assert_same_keys(keys(&record, None), &["a", "b", "c", "d"]);
    assert_same_keys(
        keys(&record, Some("data.raw")),
        &["data.raw.a", "data.raw.b", "data.raw.c", "data.raw.d"],
    );
}

#[test]
fn test_keys_recursive() {
    let data = sample_map();

    let all = keys_recursive(&data, None);
    assert_eq!(all.len(), 10);
    assert_same_keys(
        all,
        &["one", "two", "3", "a", "d", "d.one", "d.two", "d.3", "d.a", "j"],
    );

    assert_same_keys(
        keys_recursive(&data, Some("top.root.node")),
        &[
            "top.root.node.one",
            "top.root.node.two",
            "top.root.node.3",
            "top.root.node.a",
            "top.root.node.d",
            "top.root.node.d.one",
            "top.root.node.d.two",
            "top.root.node.d.3",
            "top.root.node.d.a",
            "top.root.node.j",
        ],
    );
}

#[test]
fn test_keys_recursive_is_pre_order() {
    let data = Value::Map(Map::new().with("d", Map::new().with("x", Map::new().with("y", 1))));
    assert_eq!(keys_recursive(&data, None), vec!["d", "d.x", "d.x.y"]);
}

#[test]
fn test_keys_recursive_leaves() {
    let data = sample_map();

    assert_same_keys(
        keys_recursive_leaves(&data, None),
        &["one", "two", "3", "a", "d.one", "d.two", "d.3", "d.a", "j"],
    );

    let small = Value::Map(
        Map::new()
            .with("one", 1)
            .with("d", Map::new().with("x", 1).with("y", 2)),
    );
    assert_same_keys(keys_recursive_leaves(&small, None), &["one", "d.x", "d.y"]);
}

#[test]
fn test_keys_recursive_through_records() {
    let record = test_struct();

    assert_same_keys(keys_recursive(&record, None), &["a", "b", "b.A", "c", "d"]);
    assert_same_keys(keys_recursive_leaves(&record, None), &["a", "b.A", "c", "d"]);
}

#[test]
fn test_keys_recursive_nested_records() {
    let config = Config::default();

    assert_same_keys(
        keys_recursive_leaves(&config, None),
        &[
            "name",
            "server.host",
            "server.port",
            "server.weight",
            "backup",
            "tags",
            "labels",
            "extra",
        ],
    );
}

#[test]
fn test_keys_of_record_inside_value() {
    let data = Value::Map(Map::new().with("rec", Value::record(test_struct())));
    assert_same_keys(
        keys_recursive_leaves(&data, Some("p")),
        &["p.rec.a", "p.rec.b.A", "p.rec.c", "p.rec.d"],
    );
}

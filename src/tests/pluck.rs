#[cfg(test)]
mod pluck {
    use crate::tests::test_util::{json, value};
    use crate::traversal::traverse::{collapse, filter, pluck};
    use crate::traversal::utils::truthy;
    use crate::{Path, Value};

    #[test]
    fn pluck_values() {
        let data = value(r##"{
            "post-1": {"comments": {"tags": ["#foo", "#bar"]}},
            "post-2": {"comments": {"tags": ["#baz"]}}
        }"##);

        assert_eq!(json(&pluck(&data, "comments", None)), r##"[{"tags":["#foo","#bar"]},{"tags":["#baz"]}]"##);
        assert_eq!(json(&pluck(&data, "comments.tags", None)), r##"[["#foo","#bar"],["#baz"]]"##);
        assert_eq!(json(&pluck(&data, "foo", None)), "[null,null]");
        assert_eq!(json(&pluck(&data, "foo.bar", None)), "[null,null]");
    }

    #[test]
    fn pluck_missing_wildcard_path_keeps_length() {
        let data = value(r#"[{"a": 1}, {"b": 2}, {}]"#);
        assert_eq!(json(&pluck(&data, "x.*.y", None)), "[null,null,null]");
    }

    #[test]
    fn pluck_keyed() {
        let data = value(r#"[{"name": "taylor", "email": "foo"}, {"name": "dayle", "email": "bar"}]"#);
        assert_eq!(json(&pluck(&data, "name", None)), r#"["taylor","dayle"]"#);
        assert_eq!(
            json(&pluck(&data, "email", Some(Path::from("name")))),
            r#"{"taylor":"foo","dayle":"bar"}"#
        );
    }

    #[test]
    fn pluck_nested_keys() {
        let data = value(r#"[{"user": ["taylor", "otwell"]}, {"user": ["dayle", "rees"]}]"#);
        assert_eq!(json(&pluck(&data, "user.0", None)), r#"["taylor","dayle"]"#);
        assert_eq!(json(&pluck(&data, ["user", "0"], None)), r#"["taylor","dayle"]"#);
        assert_eq!(
            json(&pluck(&data, "user.1", Some(Path::from("user.0")))),
            r#"{"taylor":"otwell","dayle":"rees"}"#
        );
    }

    #[test]
    fn pluck_nested_wildcards() {
        let data = value(r#"[
            {"account": "a", "users": [{"first": "taylor", "email": "foo"}]},
            {"account": "b", "users": [{"first": "abigail"}, {"first": "dayle"}]}
        ]"#);
        assert_eq!(json(&pluck(&data, "users.*.first", None)), r#"[["taylor"],["abigail","dayle"]]"#);
        assert_eq!(
            json(&pluck(&data, "users.*.first", Some(Path::from("account")))),
            r#"{"a":["taylor"],"b":["abigail","dayle"]}"#
        );
        assert_eq!(json(&pluck(&data, "users.*.email", None)), r#"[["foo"],[null,null]]"#);
    }

    #[test]
    fn pluck_duplicate_key_last_write_wins() {
        let data = value(r#"[{"k": "x", "v": 1}, {"k": "y", "v": 2}, {"k": "x", "v": 3}]"#);
        let result = pluck(&data, "v", Some(Path::from("k")));
        assert_eq!(json(&result), r#"{"x":3,"y":2}"#);
    }

    #[test]
    fn pluck_missing_key_becomes_empty_key() {
        let data = value(r#"[{"v": 1}, {"k": "y", "v": 2}]"#);
        let result = pluck(&data, "v", Some(Path::from("k")));
        assert_eq!(result.entry(&Value::Empty), Some(&Value::I64(1)));
        assert_eq!(result.len(), 2);
    }

    #[test]
    fn collapse_lists() {
        assert_eq!(json(&collapse(&value(r#"[[1], [2, 3], "not-a-list", [4]]"#))), "[1,2,3,4]");
        assert_eq!(
            json(&collapse(&value(r#"[[1], [2], [3], ["foo", "bar"], ["baz", "boom"]]"#))),
            r#"[1,2,3,"foo","bar","baz","boom"]"#
        );
        assert_eq!(json(&collapse(&Value::from("scalar"))), "[]");
    }

    #[test]
    fn filter_with_predicate_keeps_positions() {
        let data = value(r#"[{"id": 1, "name": "Hello"}, {"id": 2, "name": "World"}]"#);
        let result = filter(&data, Some(&|item: &Value, _key: &Value| item.child("id") == Some(&Value::I64(2))));
        assert_eq!(json(&result), r#"{"1":{"id":2,"name":"World"}}"#);
        assert_eq!(result.keys(), vec![&Value::I64(1)]);
    }

    #[test]
    fn filter_without_predicate_drops_falsy() {
        let data = value(r#"["", "Hello", "", "World", 0, null, []]"#);
        let result = filter(&data, None);
        assert_eq!(json(&result), r#"{"1":"Hello","3":"World"}"#);
        assert!(result.pairs().all(|(_, v)| truthy(v)));
    }

    #[test]
    fn filter_by_key() {
        let data = value(r#"{"id": 1, "first": "Hello", "second": "World"}"#);
        let result = filter(&data, Some(&|_item: &Value, key: &Value| key != &Value::from("id")));
        assert_eq!(json(&result), r#"{"first":"Hello","second":"World"}"#);
    }
}

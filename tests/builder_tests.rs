use fauna_query::query::*;
use fauna_query::{BuildError, Expr, Path, encode_expr};
use serde_json::json;

fn wire(expr: &Expr) -> serde_json::Value {
    encode_expr(expr)
}

// ============================================================================
// Values
// ============================================================================

#[test]
fn test_bool_value() {
    assert_eq!(wire(&of_bool(true)), json!(true));
}

#[test]
fn test_ref_value() {
    assert_eq!(
        wire(&ref_("classes/widgets/123")),
        json!({"@ref": "classes/widgets/123"})
    );
}

#[test]
fn test_primitive_values() {
    assert_eq!(wire(&of_string("hello")), json!("hello"));
    assert_eq!(wire(&of_long(-7)), json!(-7));
    assert_eq!(wire(&of_double(2.5)), json!(2.5));
    assert_eq!(wire(&null()), json!(null));
}

#[test]
fn test_from_conversions_match_named_constructors() {
    assert_eq!(Expr::from("hello"), of_string("hello"));
    assert_eq!(Expr::from(42i64), of_long(42));
    assert_eq!(Expr::from(42), of_long(42));
    assert_eq!(Expr::from(1.5), of_double(1.5));
    assert_eq!(Expr::from(false), of_bool(false));
}

#[test]
fn test_non_finite_double_encodes_as_null() {
    assert_eq!(wire(&of_double(f64::NAN)), json!(null));
    assert_eq!(wire(&of_double(f64::INFINITY)), json!(null));
}

// ============================================================================
// Object and array literals
// ============================================================================

#[test]
fn test_object_literal_plain() {
    let literal = obj([("name", of_string("widget")), ("count", of_long(3))]).unwrap();
    assert_eq!(wire(&literal), json!({"name": "widget", "count": 3}));
    assert!(!literal.is_call());
}

#[test]
fn test_object_literal_reserved_key_is_escaped() {
    let literal = obj([("object", of_long(1))]).unwrap();
    assert_eq!(wire(&literal), json!({"object": {"object": 1}}));
}

#[test]
fn test_object_literal_with_function_name_key() {
    let literal = obj([("let", of_long(1)), ("name", of_string("x"))]).unwrap();
    assert_eq!(wire(&literal), json!({"object": {"let": 1, "name": "x"}}));
}

#[test]
fn test_object_literal_duplicate_key_rejected() {
    let err = obj([("a", of_long(1)), ("a", of_long(2))]).unwrap_err();
    assert_eq!(err, BuildError::DuplicateKey("a".to_string()));
}

#[test]
fn test_empty_object_literal() {
    assert_eq!(wire(&empty_obj()), json!({}));
}

#[test]
fn test_object_literal_holding_call_form_escapes_only_outer() {
    // The nested var form must stay a call; only the literal gets the envelope.
    let literal = obj([("if", var("x"))]).unwrap();
    assert_eq!(wire(&literal), json!({"object": {"if": {"var": "x"}}}));
}

#[test]
fn test_nested_object_literals_escaped_independently() {
    let inner = obj([("select", of_long(1))]).unwrap();
    let outer = obj([("data", inner)]).unwrap();
    assert_eq!(wire(&outer), json!({"data": {"object": {"select": 1}}}));
}

#[test]
fn test_array_literal_mixes_values_and_calls() {
    let array = arr([of_long(1), var("x"), of_string("s")]);
    assert_eq!(wire(&array), json!([1, {"var": "x"}, "s"]));
}

// ============================================================================
// Let / Var
// ============================================================================

#[test]
fn test_let_in() {
    let expr = let_([("x", of_long(1))]).unwrap().in_(var("x"));
    assert_eq!(wire(&expr), json!({"let": {"x": 1}, "in": {"var": "x"}}));
    assert!(expr.is_call());
}

#[test]
fn test_let_multiple_bindings() {
    let expr = let_([("x", of_long(1)), ("y", of_string("two"))])
        .unwrap()
        .in_(arr([var("x"), var("y")]));
    assert_eq!(
        wire(&expr),
        json!({"let": {"x": 1, "y": "two"}, "in": [{"var": "x"}, {"var": "y"}]})
    );
}

#[test]
fn test_let_binding_named_like_function_is_escaped() {
    let expr = let_([("if", of_long(1))]).unwrap().in_(var("if"));
    assert_eq!(
        wire(&expr),
        json!({"let": {"object": {"if": 1}}, "in": {"var": "if"}})
    );
}

#[test]
fn test_let_rejects_empty_bindings() {
    let bindings: Vec<(&str, Expr)> = Vec::new();
    assert_eq!(let_(bindings).unwrap_err(), BuildError::EmptyBindings);
}

#[test]
fn test_let_rejects_duplicate_binding() {
    let err = let_([("x", of_long(1)), ("x", of_long(2))]).unwrap_err();
    assert_eq!(err, BuildError::DuplicateBinding("x".to_string()));
}

#[test]
fn test_let_rejects_empty_name() {
    let err = let_([("", of_long(1))]).unwrap_err();
    assert_eq!(err, BuildError::EmptyVariableName);
}

// ============================================================================
// If
// ============================================================================

#[test]
fn test_if_then_else() {
    let expr = if_(of_bool(true)).then(of_string("yes")).elze(of_string("no"));
    assert_eq!(wire(&expr), json!({"if": true, "then": "yes", "else": "no"}));
}

#[test]
fn test_if_with_call_branches() {
    let expr = if_(exists(ref_("classes/widgets/1")))
        .then(get(ref_("classes/widgets/1")))
        .elze(null());
    assert_eq!(
        wire(&expr),
        json!({
            "if": {"exists": {"@ref": "classes/widgets/1"}},
            "then": {"get": {"@ref": "classes/widgets/1"}},
            "else": null
        })
    );
}

// ============================================================================
// Select / Contains
// ============================================================================

#[test]
fn test_select_field_path() {
    let doc = obj([("data", obj([("name", of_string("widget"))]).unwrap())]).unwrap();
    let expr = select(["data", "name"], doc).unwrap();
    assert_eq!(
        wire(&expr),
        json!({"select": ["data", "name"], "from": {"data": {"name": "widget"}}})
    );
}

#[test]
fn test_select_preserves_mixed_path_order() {
    let path = vec![
        Path::field("data"),
        Path::field("tags"),
        Path::index(3),
        Path::field("label"),
    ];
    let expr = select(path, var("doc")).unwrap();
    assert_eq!(
        wire(&expr),
        json!({"select": ["data", "tags", 3, "label"], "from": {"var": "doc"}})
    );
}

#[test]
fn test_select_rejects_empty_path() {
    let err = select(Vec::<Path>::new(), of_long(1)).unwrap_err();
    assert_eq!(err, BuildError::EmptyPath("select"));
}

#[test]
fn test_contains() {
    let expr = contains([Path::field("data"), Path::index(0)], var("doc")).unwrap();
    assert_eq!(
        wire(&expr),
        json!({"contains": ["data", 0], "in": {"var": "doc"}})
    );
    assert_eq!(
        contains(Vec::<Path>::new(), var("doc")).unwrap_err(),
        BuildError::EmptyPath("contains")
    );
}

// ============================================================================
// Function catalog
// ============================================================================

#[test]
fn test_basic_forms() {
    assert_eq!(
        wire(&do_([create(ref_("classes/a")), delete(ref_("classes/a/1"))])),
        json!({"do": [{"create": {"@ref": "classes/a"}}, {"delete": {"@ref": "classes/a/1"}}]})
    );
    assert_eq!(
        wire(&lambda("x", add([var("x"), of_long(1)]))),
        json!({"lambda": "x", "expr": {"add": [{"var": "x"}, 1]}})
    );
    assert_eq!(
        wire(&quote(var("x"))),
        json!({"quote": {"var": "x"}})
    );
}

#[test]
fn test_collection_forms() {
    let f = lambda("x", var("x"));
    let items = arr([1, 2, 3]);
    assert_eq!(
        wire(&map(f.clone(), items.clone())),
        json!({"map": {"lambda": "x", "expr": {"var": "x"}}, "collection": [1, 2, 3]})
    );
    assert_eq!(wire(&take(2, items.clone())), json!({"take": 2, "collection": [1, 2, 3]}));
    assert_eq!(wire(&drop(1, items.clone())), json!({"drop": 1, "collection": [1, 2, 3]}));
    assert_eq!(
        wire(&prepend(arr([0]), items.clone())),
        json!({"prepend": [0], "collection": [1, 2, 3]})
    );
    assert_eq!(
        wire(&append(arr([4]), items.clone())),
        json!({"append": [4], "collection": [1, 2, 3]})
    );
    assert!(wire(&foreach(f.clone(), items.clone())).get("foreach").is_some());
    assert!(wire(&filter(f, items)).get("filter").is_some());
}

#[test]
fn test_read_forms() {
    assert_eq!(wire(&count(var("s"))), json!({"count": {"var": "s"}}));

    let page: Expr = paginate(ref_("indexes/widgets")).into();
    assert_eq!(wire(&page), json!({"paginate": {"@ref": "indexes/widgets"}}));

    let page: Expr = paginate(ref_("indexes/widgets"))
        .ts(of_long(100))
        .cursor(before(ref_("classes/widgets/5")))
        .size(25)
        .events(true)
        .sources(true)
        .into();
    assert_eq!(
        wire(&page),
        json!({
            "paginate": {"@ref": "indexes/widgets"},
            "ts": 100,
            "before": {"@ref": "classes/widgets/5"},
            "size": 25,
            "events": true,
            "sources": true
        })
    );
}

#[test]
fn test_write_forms() {
    let params = obj([("data", obj([("name", of_string("w"))]).unwrap())]).unwrap();
    assert_eq!(
        wire(&create_with(ref_("classes/widgets"), params.clone())),
        json!({"create": {"@ref": "classes/widgets"}, "params": {"data": {"name": "w"}}})
    );
    assert_eq!(
        wire(&update(ref_("classes/widgets/1"), params.clone())).get("update"),
        Some(&json!({"@ref": "classes/widgets/1"}))
    );
    assert!(wire(&replace(ref_("classes/widgets/1"), params.clone())).get("params").is_some());
    assert_eq!(
        wire(&insert(ref_("classes/widgets/1"), 10, Action::Create, params)),
        json!({
            "insert": {"@ref": "classes/widgets/1"},
            "ts": 10,
            "action": "create",
            "params": {"data": {"name": "w"}}
        })
    );
    assert_eq!(
        wire(&remove(ref_("classes/widgets/1"), 10, Action::Delete)),
        json!({"remove": {"@ref": "classes/widgets/1"}, "ts": 10, "action": "delete"})
    );
}

#[test]
fn test_set_forms() {
    assert_eq!(
        wire(&match_(of_string("blue"), ref_("indexes/by_color"))),
        json!({"match": "blue", "index": {"@ref": "indexes/by_color"}})
    );
    assert_eq!(
        wire(&union([var("a"), var("b")])),
        json!({"union": [{"var": "a"}, {"var": "b"}]})
    );
    assert!(wire(&intersection([var("a")])).get("intersection").is_some());
    assert!(wire(&difference([var("a")])).get("difference").is_some());
    assert_eq!(
        wire(&join(var("s"), ref_("indexes/x"))),
        json!({"join": {"var": "s"}, "with": {"@ref": "indexes/x"}})
    );
}

#[test]
fn test_misc_forms() {
    assert_eq!(wire(&equals([1, 1])), json!({"equals": [1, 1]}));
    assert_eq!(wire(&concat(["a", "b"])), json!({"concat": ["a", "b"]}));
    assert_eq!(
        wire(&concat_with(["a", "b"], "-")),
        json!({"concat": ["a", "b"], "separator": "-"})
    );
    assert_eq!(wire(&subtract([5, 2])), json!({"subtract": [5, 2]}));
    assert_eq!(wire(&multiply([2, 3])), json!({"multiply": [2, 3]}));
    assert_eq!(wire(&divide([6, 3])), json!({"divide": [6, 3]}));
    assert_eq!(wire(&modulo([7, 2])), json!({"modulo": [7, 2]}));
    assert_eq!(wire(&and([true, false])), json!({"and": [true, false]}));
    assert_eq!(wire(&or([true, false])), json!({"or": [true, false]}));
    assert_eq!(wire(&not(true)), json!({"not": true}));
}

#[test]
fn test_auth_forms() {
    assert_eq!(
        wire(&login(ref_("classes/users/1"), obj([("password", of_string("pw"))]).unwrap())),
        json!({"login": {"@ref": "classes/users/1"}, "params": {"password": "pw"}})
    );
    assert_eq!(wire(&logout(true)), json!({"logout": true}));
    assert_eq!(
        wire(&identify(ref_("classes/users/1"), "pw")),
        json!({"identify": {"@ref": "classes/users/1"}, "password": "pw"})
    );
}

#[test]
fn test_time_forms() {
    assert_eq!(wire(&time("now")), json!({"time": "now"}));
    assert_eq!(
        wire(&epoch(5, TimeUnit::Millisecond)),
        json!({"epoch": 5, "unit": "millisecond"})
    );
    assert_eq!(wire(&date("2016-01-01")), json!({"date": "2016-01-01"}));
}

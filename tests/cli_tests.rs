use fauna_query::cli::{
    CheckOptions, CheckResult, CliError, execute_check, get_keyword_category,
    get_keywords_overview,
};
use serde_json::json;

fn check(input: &str, syntax_only: bool) -> Result<CheckResult, CliError> {
    execute_check(&CheckOptions {
        input: Some(input.to_string()),
        pretty: false,
        syntax_only,
    })
}

#[test]
fn test_check_reencodes_canonically() {
    let result = check(r#"{"object": {"let": 1}, "x": 2}"#, false).unwrap();
    // Not an envelope (two keys), so it decodes as a plain object whose
    // reserved keys force escaping at both levels on the way back out.
    match result {
        CheckResult::Success(output) => assert_eq!(
            output,
            json!({"object": {"object": {"object": {"let": 1}}, "x": 2}})
        ),
        other => panic!("unexpected result: {:?}", other),
    }
}

#[test]
fn test_check_unwraps_envelope() {
    match check(r#"{"object": {"name": "w"}}"#, false).unwrap() {
        CheckResult::Success(output) => assert_eq!(output, json!({"name": "w"})),
        other => panic!("unexpected result: {:?}", other),
    }
}

#[test]
fn test_check_syntax_only() {
    assert!(matches!(
        check(r#"{"@ref": "classes/a/1"}"#, true).unwrap(),
        CheckResult::Valid
    ));
}

#[test]
fn test_check_reports_decode_error() {
    let err = check(r#"{"@date": "not a date"}"#, true).unwrap_err();
    assert!(matches!(err, CliError::Decode(_)));
    assert!(err.to_string().starts_with("Decode error: Malformed @date value"));
}

#[test]
fn test_check_without_input() {
    let err = execute_check(&CheckOptions::default()).unwrap_err();
    assert!(matches!(err, CliError::NoInput));
}

#[test]
fn test_keywords_overview_lists_categories() {
    let overview = get_keywords_overview();
    assert!(overview.contains("basic"));
    assert!(overview.contains("let"));
    assert!(overview.contains("@ref"));
    assert!(overview.contains("  auth         identify, login, logout\n"));
}

#[test]
fn test_keyword_category() {
    let auth = get_keyword_category("authentication").unwrap();
    assert_eq!(auth, "identify\nlogin\nlogout\n");

    let err = get_keyword_category("nope").unwrap_err();
    assert!(matches!(err, CliError::UnknownCategory(ref c) if c == "nope"));
}

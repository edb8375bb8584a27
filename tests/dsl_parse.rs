use viewrule::lex::Position;
use viewrule::{parse, property, ActionInvocation, Condition, ParseError, Rule, Value};

#[test]
fn parse_window_rule() {
    let rule = parse(r#"on created if app_id contains "term" set(alpha, 0.5)"#).unwrap();
    assert_eq!(
        rule,
        Rule {
            trigger: "created".into(),
            condition: Some(property("app_id").contains("term")),
            actions: vec![ActionInvocation::new(
                "set",
                vec!["alpha".into(), Value::Double(0.5)]
            )],
        }
    );
}

#[test]
fn parse_spans_lines_and_skips_comments() {
    let rule = parse(
        r#"
on created   # every new window
if app_id == "firefox"
   and not title contains "Private"
set(geometry, 0, 0, 1280, 720)
snap(center)
"#,
    )
    .unwrap();
    assert_eq!(
        rule.condition,
        Some(
            property("app_id")
                .eq("firefox")
                .and(!property("title").contains("Private"))
        )
    );
    assert_eq!(rule.actions.len(), 2);
    assert_eq!(rule.actions[1].arguments, vec![Value::from("center")]);
}

#[test]
fn uppercase_boolean_keywords() {
    let upper = parse(r#"on created if role == "TOPLEVEL" AND NOT title == "x" OR app_id == "y" maximize()"#)
        .unwrap();
    let lower = parse(r#"on created if role == "TOPLEVEL" and not title == "x" or app_id == "y" maximize()"#)
        .unwrap();
    assert_eq!(upper, lower);
    assert!(matches!(upper.condition, Some(Condition::Or(_, _))));
}

#[test]
fn literal_kinds_in_arguments() {
    let rule = parse(r#"on created f(1, -2, 0.5, 0.25f, "s", word, true)"#).unwrap();
    assert_eq!(
        rule.actions[0].arguments,
        vec![
            Value::Int(1),
            Value::Int(-2),
            Value::Double(0.5),
            Value::Float(0.25),
            Value::from("s"),
            Value::from("word"),
            Value::Bool(true),
        ]
    );
}

#[test]
fn unknown_trigger_still_parses() {
    let rule = parse("on resized maximize()").unwrap();
    assert_eq!(rule.trigger, "resized");
}

#[test]
fn empty_action_list_is_rejected() {
    let err = parse(r#"on created if app_id == "x""#).unwrap_err();
    match err {
        ParseError::Unexpected { found, expected, .. } => {
            assert_eq!(found, "end of input");
            assert!(expected.contains(&"action"));
        }
        other => panic!("expected Unexpected, got {other:?}"),
    }
}

#[test]
fn unbalanced_parentheses() {
    assert!(parse(r#"on created if (app_id == "x" maximize()"#).is_err());
    assert!(parse(r#"on created if app_id == "x") maximize()"#).is_err());
    assert!(parse("on created maximize(").is_err());
}

#[test]
fn malformed_comparison() {
    assert!(parse("on created if app_id maximize()").is_err());
    assert!(parse("on created if app_id == maximize()").is_err());
    assert!(parse(r#"on created if == "x" maximize()"#).is_err());
}

#[test]
fn unterminated_string_reports_opening_quote() {
    let err = parse("on created if title == \"abc\n maximize()").unwrap_err();
    assert!(matches!(err, ParseError::Lex { .. }));
    assert_eq!(
        err.position(),
        Position {
            offset: 23,
            line: 1,
            column: 24
        }
    );
}

#[test]
fn unrecognized_character() {
    let err = parse("on created @ maximize()").unwrap_err();
    assert!(matches!(err, ParseError::Lex { .. }));
    assert_eq!(err.position().column, 12);
}

#[test]
fn error_message_names_position_and_expectation() {
    let err = parse("created maximize()").unwrap_err();
    assert_eq!(
        err.to_string(),
        "parse error at 1:1: expected `on`, found identifier `created`"
    );
}

#[test]
fn display_reparses_to_same_rule() {
    let source = r#"on created if (app_id contains "term" or title == "a \"b\"") and not role != "TOPLEVEL" set(alpha, 0.75f) move(-10, 20)"#;
    let rule = parse(source).unwrap();
    let again = parse(&rule.to_string()).unwrap();
    assert_eq!(rule, again);
}

#[test]
fn extreme_magnitudes_reparse() {
    let rule = parse("on created if pid > 100000000000000000.0 set(alpha, 0.00001) set(alpha, 0.0000001f)").unwrap();
    let text = rule.to_string();
    assert_eq!(
        text,
        r#"on created if pid > 100000000000000000.0 set("alpha", 0.00001) set("alpha", 0.0000001f)"#
    );
    assert_eq!(parse(&text), Ok(rule));
}

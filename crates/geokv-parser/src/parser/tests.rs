use indoc::indoc;

use crate::diagnostics::ErrorKind;
use crate::statement::{BoundingBox, CommandType, Geometry, Point, PreparedStatement};

use super::core::check_length;
use super::{parse, parse_with_sink};
use crate::scanner::MAX_STATEMENT_LEN;

fn ok(source: &str) -> PreparedStatement<'_> {
    match parse(source) {
        Ok(statement) => statement,
        Err(error) => panic!("`{source}` failed: {error}"),
    }
}

fn err(source: &str) -> String {
    match parse(source) {
        Ok(statement) => panic!("`{source}` parsed as `{statement}`"),
        Err(error) => error.message(),
    }
}

fn kind(source: &str) -> ErrorKind {
    parse(source).unwrap_err().kind()
}

#[test]
fn set_point_2d() {
    let statement = ok("SET fleet 1 POINT +1 -2.0");

    assert_eq!(statement.command(), CommandType::Set);
    assert_eq!(statement.key(), "fleet");
    assert_eq!(statement.id(), Some("1"));
    assert_eq!(
        statement.geometry(),
        Some(&Geometry::Point(Point::new(1.0, -2.0)))
    );
}

#[test]
fn set_point_3d_keeps_z() {
    let statement = ok("SET fleet 1 POINT 1 2 3");

    assert_eq!(
        statement.geometry(),
        Some(&Geometry::Point(Point::with_z(1.0, 2.0, 3.0)))
    );
}

#[test]
fn set_bounds() {
    let statement = ok("SET k i BOUNDS 1 -2.0 3.34 -1e2");

    assert_eq!(
        statement.geometry(),
        Some(&Geometry::Bounds(BoundingBox::new(1.0, -2.0, 3.34, -100.0)))
    );
}

#[test]
fn get_and_del() {
    let get = ok("GET fleet 42");
    assert_eq!(get.command(), CommandType::Get);
    assert_eq!(get.key(), "fleet");
    assert_eq!(get.id(), Some("42"));
    assert_eq!(get.geometry(), None);

    let del = ok("DEL fleet 42");
    assert_eq!(del.command(), CommandType::Delete);
    assert_eq!(del.id(), Some("42"));
}

#[test]
fn drop_takes_key_only() {
    let statement = ok("DROP fleet");

    assert_eq!(statement.command(), CommandType::Drop);
    assert_eq!(statement.key(), "fleet");
    assert_eq!(statement.id(), None);
    assert_eq!(statement.geometry(), None);
}

#[test]
fn keywords_are_case_insensitive() {
    let statement = ok("  set   fleet\t7   PoInT 1 2  ");

    assert_eq!(statement.command(), CommandType::Set);
    assert_eq!(statement.key(), "fleet");
    assert_eq!(statement.id(), Some("7"));
    assert_eq!(ok("dRoP fleet").command(), CommandType::Drop);
}

#[test]
fn numeric_and_quoted_identifiers() {
    let numeric = ok("GET 12 3.5");
    assert_eq!(numeric.key(), "12");
    assert_eq!(numeric.id(), Some("3.5"));

    let quoted = ok("GET 'my fleet' `truck 7`");
    assert_eq!(quoted.key(), "my fleet");
    assert_eq!(quoted.key_raw(), "'my fleet'");
    assert_eq!(quoted.id(), Some("truck 7"));
}

#[test]
fn reserved_word_as_key() {
    insta::assert_snapshot!(
        err("SET SET 1 POINT 1 2"),
        @"INVALID_KEY_VALUE(4) - cause: Invalid key value. position in statement 4."
    );

    let quoted = ok(r#"SET "SET" 1 POINT 1 2"#);
    assert_eq!(quoted.key(), "SET");
    assert_eq!(quoted.key_raw(), r#""SET""#);
}

#[test]
fn reserved_word_as_id() {
    insta::assert_snapshot!(
        err("GET fleet drop"),
        @"INVALID_ID_VALUE(5) - cause: Invalid id value. position in statement 10."
    );
}

#[test]
fn empty_quoted_identifiers() {
    insta::assert_snapshot!(
        err("GET '' x"),
        @"INVALID_KEY_VALUE(4) - cause: Invalid key value. position in statement 4."
    );
    insta::assert_snapshot!(
        err(r#"GET k """#),
        @"INVALID_ID_VALUE(5) - cause: Invalid id value. position in statement 6."
    );
    assert_eq!(ok("GET ' ' x").key(), " ");
}

#[test]
fn unknown_command() {
    insta::assert_snapshot!(
        err("PUT fleet 1"),
        @"INVALID_COMMAND_TYPE(3) - cause: Invalid command type keyword. position in statement 0."
    );
    assert_eq!(kind("POINT fleet 1"), ErrorKind::InvalidCommandType);
    assert_eq!(kind("42 fleet 1"), ErrorKind::InvalidCommandType);
}

#[test]
fn malformed_numbers_are_invalid_tokens() {
    insta::assert_snapshot!(
        err("SET fleet 1 POINT 1.2.3 2"),
        @"INVALID_TOKEN(2) - cause: Invalid token in statement. position in statement 18."
    );
    insta::assert_snapshot!(
        err("SET fleet 1 POINT 1 2e"),
        @"INVALID_TOKEN(2) - cause: Invalid token in statement. position in statement 20."
    );
    insta::assert_snapshot!(
        err("SET k i POINT 1e5.5 2"),
        @"INVALID_TOKEN(2) - cause: Invalid token in statement. position in statement 14."
    );
}

#[test]
fn unterminated_quote() {
    insta::assert_snapshot!(
        err("SET fleet 1 'unterminated"),
        @"INVALID_TOKEN(2) - cause: Invalid token in statement. position in statement 12."
    );
}

#[test]
fn drop_with_extra_token() {
    insta::assert_snapshot!(
        err("DROP fleet extra"),
        @"EXPECTED_END_OF_TOKENS(12) - cause: Expected end of tokens in DROP statement. position in statement 11."
    );
}

#[test]
fn get_with_extra_token() {
    insta::assert_snapshot!(
        err("GET fleet 1 extra"),
        @"EXPECTED_END_OF_TOKENS(12) - cause: Expected end of tokens in GET/DEL statement. position in statement 12."
    );
    assert_eq!(kind("DEL fleet 1 POINT 1 2"), ErrorKind::ExpectedEndOfTokens);
}

#[test]
fn set_with_extra_token() {
    insta::assert_snapshot!(
        err("SET fleet 1 POINT 1 2 3 4"),
        @"EXPECTED_END_OF_TOKENS(12) - cause: Expected end of tokens. position in statement 24."
    );
    assert_eq!(
        kind("SET fleet 1 BOUNDS 1 2 3 4 5"),
        ErrorKind::ExpectedEndOfTokens
    );
}

#[test]
fn unknown_geometry() {
    insta::assert_snapshot!(
        err("SET fleet 1 CIRCLE 1 2"),
        @"INVALID_BOUNDS_OR_POINT(7) - cause: Expected BOUNDS or POINT keyword. position in statement 12."
    );
}

#[test]
fn non_numeric_coordinates() {
    let results = [
        "SET fleet 1 POINT abc 2",
        "SET fleet 1 POINT 1 abc",
        "SET fleet 1 POINT 1 2 abc",
        "SET fleet 1 BOUNDS 1 2 x 4",
        "SET fleet 1 BOUNDS 1 2 3 'y'",
    ]
    .map(err);

    insta::assert_snapshot!(results.join("\n"), @r"
    INVALID_X_VALUE(8) - cause: Expected integer or double x value. position in statement 18.
    INVALID_Y_VALUE(9) - cause: Expected integer or double y value. position in statement 20.
    INVALID_Z_VALUE(10) - cause: Expected integer or double z value. position in statement 22.
    INVALID_X_VALUE(8) - cause: Expected integer or double second x value. position in statement 23.
    INVALID_Y_VALUE(9) - cause: Expected integer or double second y value. position in statement 25.
    ");
}

#[test]
fn out_of_range_coordinates() {
    insta::assert_snapshot!(
        err("SET fleet 1 POINT 1e400 2"),
        @"INVALID_X_VALUE(8) - cause: Numerical result out of range. position in statement 18."
    );
    assert_eq!(kind("SET fleet 1 POINT 1 -1e400"), ErrorKind::InvalidYValue);
    assert_eq!(kind("SET fleet 1 POINT 1 2 1e-400"), ErrorKind::InvalidZValue);
    insta::assert_snapshot!(
        err("SET k i POINT 4e-320 1"),
        @"INVALID_X_VALUE(8) - cause: Numerical result out of range. position in statement 14."
    );
}

#[test]
fn premature_end_of_input() {
    let results = [
        "",
        "   ",
        "SET",
        "GET fleet",
        "SET fleet 1",
        "SET fleet 1 POINT",
        "SET fleet 1 POINT 1",
        "SET fleet 1 BOUNDS 1 2",
        "SET fleet 1 BOUNDS 1 2 3",
    ]
    .map(err);

    insta::assert_snapshot!(results.join("\n"), @r"
    END_OF_TOKENS_REACHED(11) - cause: Expected command keyword. position in statement 0.
    END_OF_TOKENS_REACHED(11) - cause: Expected command keyword. position in statement 3.
    END_OF_TOKENS_REACHED(11) - cause: Expected key value. position in statement 3.
    END_OF_TOKENS_REACHED(11) - cause: Expected id value. position in statement 9.
    END_OF_TOKENS_REACHED(11) - cause: Expected BOUNDS or POINT keyword. position in statement 11.
    END_OF_TOKENS_REACHED(11) - cause: Expected x value. position in statement 17.
    END_OF_TOKENS_REACHED(11) - cause: Expected y value. position in statement 19.
    END_OF_TOKENS_REACHED(11) - cause: Expected second x value of bounds. position in statement 22.
    END_OF_TOKENS_REACHED(11) - cause: Expected second y value of bounds. position in statement 24.
    ");
}

#[test]
fn trailing_space_is_ignored() {
    assert_eq!(
        ok("SET fleet 1 POINT 1 2 \t").geometry(),
        Some(&Geometry::Point(Point::new(1.0, 2.0)))
    );
    assert_eq!(ok("DROP fleet \r\n").command(), CommandType::Drop);
}

#[test]
fn never_reports_internal_errors() {
    let inputs = indoc! {r#"
        SET
        SET fleet
        SET fleet 1 POINT 1 2 3 4
        SET fleet 1 BOUNDS 1 2 3 4 5
        GET fleet 1 POINT
        DROP fleet 1
        SET 'a' "b" BOUNDS .5 -.5e1 +3 4
        DEL
    "#};

    for line in inputs.lines() {
        if let Err(error) = parse(line) {
            assert!(!error.kind().is_internal(), "{line}: {error}");
        }
    }
}

#[test]
fn parsing_is_idempotent() {
    let source = "SET fleet 1 BOUNDS 1 -2.0 3.34 -1e2";
    assert_eq!(parse(source), parse(source));

    let source = "SET fleet 1 POINT 1 2e";
    assert_eq!(parse(source), parse(source));
}

#[test]
fn canonical_text_round_trips() {
    let inputs = [
        "  set   fleet\t7   point 1 2.50  -3e0",
        "SET k i BOUNDS 1 -2.0 3.34 -1e2",
        "SET fleet 1 POINT 0.1 1e300 -2.5e-300",
        "get 'my fleet' `7`",
        "DEL 12 3.5",
        "drop fleet",
    ];

    for input in inputs {
        let first = ok(input);
        let text = first.to_string();
        let second = ok(&text);
        assert!(first.is_equivalent(&second), "{input} -> {text}");
    }

    insta::assert_snapshot!(ok(inputs[0]).to_string(), @"SET fleet 7 POINT 1 2.5 -3");
    insta::assert_snapshot!(ok(inputs[1]).to_string(), @"SET k i BOUNDS 1 -2 3.34 -100");
    insta::assert_snapshot!(ok(inputs[3]).to_string(), @"GET 'my fleet' `7`");
}

#[test]
fn sink_called_once_on_failure() {
    let mut calls = Vec::new();
    let result = parse_with_sink("SET fleet 1 POINT x 2", &mut |code: i32, message: &str| {
        calls.push((code, message.to_string()));
    });

    assert!(result.is_err());
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].0, 8);
    assert_eq!(calls[0].1, result.unwrap_err().message());
}

#[test]
fn sink_not_called_on_success() {
    let mut calls = 0;
    let result = parse_with_sink("GET fleet 1", &mut |_: i32, _: &str| calls += 1);

    assert!(result.is_ok());
    assert_eq!(calls, 0);
}

#[test]
fn statement_serializes_to_json() {
    let json = serde_json::to_string_pretty(&ok("SET fleet 1 POINT +1 -2.0")).unwrap();
    insta::assert_snapshot!(json, @r#"
    {
      "command": "set",
      "key": "fleet",
      "id": "1",
      "geometry": {
        "type": "point",
        "x": 1.0,
        "y": -2.0
      }
    }
    "#);

    let json = serde_json::to_string(&ok("DROP 'my fleet'")).unwrap();
    insta::assert_snapshot!(
        json,
        @r#"{"command":"drop","key":"my fleet","id":null,"geometry":null}"#
    );
}

#[test]
fn statement_length_limit() {
    assert!(check_length(0).is_ok());
    assert!(check_length(MAX_STATEMENT_LEN).is_ok());

    if let Some(len) = MAX_STATEMENT_LEN.checked_add(1) {
        let error = check_length(len).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::InvalidToken);
        assert_eq!(error.offset(), MAX_STATEMENT_LEN);
        assert_eq!(error.cause(), "Statement too long");
    }
}

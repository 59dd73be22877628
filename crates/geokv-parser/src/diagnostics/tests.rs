use crate::parse;
use crate::scanner::text_range;

use super::*;

#[test]
fn codes_are_stable() {
    let codes: Vec<_> = [
        ErrorKind::InvalidToken,
        ErrorKind::InvalidCommandType,
        ErrorKind::InvalidKeyValue,
        ErrorKind::InvalidIdValue,
        ErrorKind::InvalidStep,
        ErrorKind::InvalidBoundsOrPoint,
        ErrorKind::InvalidXValue,
        ErrorKind::InvalidYValue,
        ErrorKind::InvalidZValue,
        ErrorKind::EndOfTokensReached,
        ErrorKind::ExpectedEndOfTokens,
    ]
    .into_iter()
    .map(|kind| format!("{}={}", kind.name(), kind.code()))
    .collect();

    insta::assert_snapshot!(codes.join("\n"), @r"
    INVALID_TOKEN=2
    INVALID_COMMAND_TYPE=3
    INVALID_KEY_VALUE=4
    INVALID_ID_VALUE=5
    INVALID_STEP_ERROR=6
    INVALID_BOUNDS_OR_POINT=7
    INVALID_X_VALUE=8
    INVALID_Y_VALUE=9
    INVALID_Z_VALUE=10
    END_OF_TOKENS_REACHED=11
    EXPECTED_END_OF_TOKENS=12
    ");
}

#[test]
fn from_code_inverts_code() {
    for code in 2..=12 {
        let kind = ErrorKind::from_code(code).expect("assigned code");
        assert_eq!(kind.code(), code);
    }
    assert_eq!(ErrorKind::from_code(0), None);
    assert_eq!(ErrorKind::from_code(1), None);
    assert_eq!(ErrorKind::from_code(13), None);
}

#[test]
fn only_invalid_step_is_internal() {
    assert!(ErrorKind::InvalidStep.is_internal());
    assert!(!ErrorKind::InvalidToken.is_internal());
}

#[test]
fn message_format() {
    let error = ParseError::new(
        ErrorKind::InvalidKeyValue,
        "Invalid key value",
        text_range(4, 3),
    );

    insta::assert_snapshot!(
        error.message(),
        @"INVALID_KEY_VALUE(4) - cause: Invalid key value. position in statement 4."
    );
    assert_eq!(error.to_string(), error.message());
    assert_eq!(error.offset(), 4);
    assert_eq!(error.span(), text_range(4, 3));
}

#[test]
fn report_hands_code_and_message_to_sink() {
    let error = parse("PUT fleet 1").unwrap_err();
    let mut received = Vec::new();
    report(
        &mut |code: i32, message: &str| received.push((code, message.to_string())),
        &error,
    );

    assert_eq!(
        received,
        vec![(
            3,
            "INVALID_COMMAND_TYPE(3) - cause: Invalid command type keyword. position in statement 0."
                .to_string()
        )]
    );
}

#[test]
fn serializes_to_json() {
    let error = parse("GET fleet 1 extra").unwrap_err();
    let json = serde_json::to_string_pretty(&error).unwrap();

    insta::assert_snapshot!(json, @r#"
    {
      "kind": "EXPECTED_END_OF_TOKENS",
      "code": 12,
      "cause": "Expected end of tokens in GET/DEL statement",
      "offset": 12,
      "message": "EXPECTED_END_OF_TOKENS(12) - cause: Expected end of tokens in GET/DEL statement. position in statement 12."
    }
    "#);
}

#[test]
fn printer_underlines_offending_token() {
    let source = "SET fleet 1 POINT 1.2.3 2";
    let error = parse(source).unwrap_err();
    let rendered = error.printer(source).render();

    assert!(rendered.contains("INVALID_TOKEN(2)"), "{rendered}");
    assert!(rendered.contains("Invalid token in statement"), "{rendered}");
    assert!(rendered.contains(source), "{rendered}");
    assert!(rendered.contains("^^^"), "{rendered}");
}

#[test]
fn printer_points_past_end_of_input() {
    let source = "GET fleet";
    let error = parse(source).unwrap_err();
    let rendered = error.printer(source).path("statements.txt").line(7).render();

    assert!(rendered.contains("statements.txt:7"), "{rendered}");
    assert!(rendered.contains("END_OF_TOKENS_REACHED(11)"), "{rendered}");
}

#[test]
fn printer_plain_has_no_escapes() {
    let source = "DROP";
    let error = parse(source).unwrap_err();

    assert!(!error.printer(source).render().contains('\x1b'));
    assert!(error.printer(source).colored(true).render().contains('\x1b'));
}

//! Tests for template parsing: braces, escapes and argument ids.

use crate::template::{Piece, Template};
use crate::{FormatError, format};

#[test]
fn splits_literals_and_fields() {
    let t = Template::parse("a{0}b{0:>4}c").unwrap();
    assert_eq!(
        t.pieces(),
        &[
            Piece::Literal("a"),
            Piece::Field {
                spec: "",
                offset: 1
            },
            Piece::Literal("b"),
            Piece::Field {
                spec: ">4",
                offset: 5
            },
            Piece::Literal("c"),
        ]
    );
    assert_eq!(t.source(), "a{0}b{0:>4}c");
}

#[test]
fn placeholder_count_is_reported() {
    assert_eq!(Template::parse("{}").unwrap().placeholder_count(), 1);
    assert_eq!(Template::parse("{0} {0}").unwrap().placeholder_count(), 2);
    assert_eq!(Template::parse("plain").unwrap().placeholder_count(), 0);
    assert_eq!(Template::parse("{{}}").unwrap().placeholder_count(), 0);
}

#[test]
fn escaped_braces_render_literally() {
    assert_eq!(format("{{}}", &1).unwrap(), "{}");
    assert_eq!(format("{{{}}}", &7).unwrap(), "{7}");
    assert_eq!(format("}}{}{{", &"x").unwrap(), "}x{");
}

#[test]
fn template_without_fields_renders_as_text() {
    assert_eq!(format("no fields\n", &42).unwrap(), "no fields\n");
    assert_eq!(format("", &42).unwrap(), "");
}

#[test]
fn explicit_index_zero_may_repeat() {
    assert_eq!(format("{0}-{0}", &5).unwrap(), "5-5");
    assert_eq!(format("{0:>3}|{0:<3}|", &5).unwrap(), "  5|5  |");
}

#[test]
fn second_automatic_field_has_no_argument() {
    let err = Template::parse("{}{}").unwrap_err();
    assert!(matches!(err, FormatError::ArgumentNotFound { offset: 2, .. }));
}

#[test]
fn nonzero_index_has_no_argument() {
    let err = Template::parse("{1}").unwrap_err();
    assert!(matches!(err, FormatError::ArgumentNotFound { offset: 0, .. }));
}

#[test]
fn nested_field_has_no_argument() {
    let err = Template::parse("{:{}}").unwrap_err();
    assert!(matches!(err, FormatError::ArgumentNotFound { .. }));
}

#[test]
fn mixing_manual_and_automatic_indexing_is_rejected() {
    let err = Template::parse("{0}{}").unwrap_err();
    assert!(matches!(
        err,
        FormatError::InvalidTemplate {
            offset: 3,
            reason: "cannot switch from manual to automatic argument indexing",
            ..
        }
    ));

    let err = Template::parse("{}{0}").unwrap_err();
    assert!(matches!(
        err,
        FormatError::InvalidTemplate {
            reason: "cannot switch from automatic to manual argument indexing",
            ..
        }
    ));
}

#[test]
fn unterminated_field_is_rejected() {
    let err = Template::parse("{:>5").unwrap_err();
    assert!(matches!(
        err,
        FormatError::InvalidTemplate {
            offset: 0,
            reason: "missing '}' in format string",
            ..
        }
    ));
}

#[test]
fn unmatched_closing_brace_is_rejected() {
    let err = Template::parse("a}b").unwrap_err();
    assert!(matches!(
        err,
        FormatError::InvalidTemplate {
            offset: 1,
            reason: "unmatched '}' in format string",
            ..
        }
    ));
}

#[test]
fn non_numeric_argument_id_is_rejected() {
    let err = Template::parse("{name}").unwrap_err();
    assert!(matches!(
        err,
        FormatError::InvalidTemplate {
            reason: "invalid argument id",
            ..
        }
    ));
}

#[test]
fn error_keeps_template_text() {
    match Template::parse("x}").unwrap_err() {
        FormatError::InvalidTemplate { template, .. } => assert_eq!(template, "x}"),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn trailing_spec_characters_are_rejected() {
    let err = format("{:5xy}", &1).unwrap_err();
    assert!(matches!(
        err,
        FormatError::InvalidSpec {
            reason: "invalid format specifier",
            ..
        }
    ));
}

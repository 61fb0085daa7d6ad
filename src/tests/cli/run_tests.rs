//! Tests for CLI helpers and the line-feeding pipeline.

use std::fs;

use crate::cli::{CliError, OutputArg, ValueType, run_lines, unescape};
use crate::config::SinkConfig;
use crate::{ConfigError, FormatError};

#[test]
fn output_arg_normalizes_tokens() {
    assert_eq!(OutputArg::parse("stdout").as_str(), "-");
    assert_eq!(OutputArg::parse("").as_str(), "-");
    assert_eq!(OutputArg::parse(" - ").as_str(), "-");
    assert_eq!(OutputArg::parse("STDERR").as_str(), "stderr");
    assert_eq!(OutputArg::parse("@stderr").as_str(), "@stderr");
    assert_eq!(OutputArg::parse("out.txt").as_str(), "out.txt");
    assert!(OutputArg::default().is_stdout());
    assert!(!OutputArg::parse("stderr").is_stdout());
}

#[test]
fn output_arg_to_target() {
    assert_eq!(OutputArg::parse("-").to_target(false).kind, "stdout");
    assert_eq!(OutputArg::parse("stderr").to_target(true).kind, "stderr");

    let forced = OutputArg::parse("@stderr").to_target(false);
    assert_eq!(forced.kind, "file");
    assert_eq!(forced.path.as_deref(), Some("stderr"));
    assert_eq!(forced.file_exists_policy.as_deref(), Some("overwrite"));

    let appended = OutputArg::parse("log.txt").to_target(true);
    assert_eq!(appended.path.as_deref(), Some("log.txt"));
    assert_eq!(appended.file_exists_policy.as_deref(), Some("append"));
}

#[test]
fn value_type_from_str() {
    assert_eq!(ValueType::from_str("int"), Some(ValueType::Int));
    assert_eq!(ValueType::from_str("F64"), Some(ValueType::Float));
    assert_eq!(ValueType::from_str("text"), Some(ValueType::Str));
    assert_eq!(ValueType::from_str("bytes"), None);
    assert_eq!(ValueType::default(), ValueType::Str);
}

#[test]
fn unescape_handles_common_escapes() {
    assert_eq!(unescape(r"{}\n"), "{}\n");
    assert_eq!(unescape(r"a\tb\r\\"), "a\tb\r\\");
    assert_eq!(unescape(r"\x"), r"\x");
    assert_eq!(unescape("trailing\\"), "trailing\\");
}

#[test]
fn run_lines_writes_each_hour() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("hours.txt");
    let config = SinkConfig::new("{:02d}:00 UTC\n")
        .with_target(OutputArg::parse(&path.to_string_lossy()).to_target(false));

    let input: String = (0..12).map(|h| format!("{h}\n")).collect();
    let written = run_lines(input.as_bytes(), &config, ValueType::Int).unwrap();
    assert_eq!(written, 12);

    let expected: String = (0..12).map(|h| format!("{h:02}:00 UTC\n")).collect();
    assert_eq!(fs::read_to_string(&path).unwrap(), expected);
}

#[test]
fn run_lines_keeps_string_lines_verbatim() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.txt");
    let config = SinkConfig::new("[{}]")
        .with_target(OutputArg::parse(&path.to_string_lossy()).to_target(false));

    let written = run_lines("  padded \r\nplain\n".as_bytes(), &config, ValueType::Str).unwrap();
    assert_eq!(written, 2);
    assert_eq!(fs::read_to_string(&path).unwrap(), "[  padded ][plain]");
}

#[test]
fn run_lines_appends_when_asked() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.txt");
    let output = OutputArg::parse(&path.to_string_lossy());

    let first = SinkConfig::new("{:.1f};").with_target(output.to_target(false));
    run_lines("1.24\n".as_bytes(), &first, ValueType::Float).unwrap();
    let second = SinkConfig::new("{:.1f};").with_target(output.to_target(true));
    run_lines(" 2.5 \n".as_bytes(), &second, ValueType::Float).unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "1.2;2.5;");
}

#[test]
fn parse_error_reports_line_number() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.txt");
    let config = SinkConfig::new("{}\n")
        .with_target(OutputArg::parse(&path.to_string_lossy()).to_target(false));

    let err = run_lines("1\n2\nthree\n4\n".as_bytes(), &config, ValueType::Int).unwrap_err();
    match &err {
        CliError::Parse {
            line,
            value,
            expected,
        } => {
            assert_eq!(*line, 3);
            assert_eq!(value, "three");
            assert_eq!(*expected, "int");
        }
        other => panic!("expected a parse error, got {other:?}"),
    }
    assert_eq!(err.to_string(), "line 3: cannot parse 'three' as int");
    assert_eq!(fs::read_to_string(&path).unwrap(), "1\n2\n");
}

#[test]
fn format_and_config_errors_pass_through() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.txt");
    let target = OutputArg::parse(&path.to_string_lossy()).to_target(false);

    let bad_spec = SinkConfig::new("{:.2}").with_target(target.clone());
    let err = run_lines("5\n".as_bytes(), &bad_spec, ValueType::Int).unwrap_err();
    assert!(matches!(err, CliError::Format(FormatError::InvalidSpec { .. })));

    let missing_dir = dir.path().join("nope").join("out.txt");
    let unreachable = SinkConfig::new("{}")
        .with_target(OutputArg::parse(&missing_dir.to_string_lossy()).to_target(false));
    let err = run_lines("5\n".as_bytes(), &unreachable, ValueType::Int).unwrap_err();
    assert!(matches!(err, CliError::Config(ConfigError::Open { .. })));
}

#[test]
fn empty_input_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.txt");
    let config = SinkConfig::new("{}\n")
        .with_target(OutputArg::parse(&path.to_string_lossy()).to_target(false));

    assert_eq!(run_lines("".as_bytes(), &config, ValueType::Int).unwrap(), 0);
    assert_eq!(fs::read_to_string(&path).unwrap(), "");
}

//! Tests for SinkConfig, TargetConfig and FileExistsPolicy.

use std::fs;

use crate::{ConfigError, FileExistsPolicy, OpenedTarget, SinkConfig, TargetConfig};

#[test]
fn file_exists_policy_from_str() {
    assert_eq!(
        FileExistsPolicy::from_str("overwrite"),
        Some(FileExistsPolicy::Overwrite)
    );
    assert_eq!(
        FileExistsPolicy::from_str("APPEND"),
        Some(FileExistsPolicy::Append)
    );
    assert_eq!(FileExistsPolicy::from_str("error"), Some(FileExistsPolicy::Error));
    assert_eq!(FileExistsPolicy::from_str("clobber"), None);
    assert_eq!(FileExistsPolicy::default(), FileExistsPolicy::Error);
}

#[test]
fn default_config_is_braces_on_stdout() {
    let cfg = SinkConfig::default();
    assert_eq!(cfg.template(), "{}");
    assert!(matches!(cfg.open().unwrap(), OpenedTarget::Stdout));
}

#[test]
fn stderr_target_resolves() {
    let target = TargetConfig::stderr().open().unwrap();
    assert!(matches!(target, OpenedTarget::Stderr));
    assert_eq!(target.id(), "stderr");
}

#[test]
fn file_target_requires_path() {
    let target = TargetConfig {
        kind: "file".into(),
        path: None,
        file_exists_policy: None,
    };
    assert!(matches!(target.open(), Err(ConfigError::MissingPath)));
}

#[test]
fn unknown_kind_and_policy_are_rejected() {
    let target = TargetConfig {
        kind: "socket".into(),
        ..TargetConfig::default()
    };
    assert!(matches!(target.open(), Err(ConfigError::UnknownKind(k)) if k == "socket"));

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.txt").to_string_lossy().into_owned();
    let target = TargetConfig::file(path).with_file_exists_policy("clobber");
    assert!(matches!(target.open(), Err(ConfigError::UnknownPolicy(p)) if p == "clobber"));
}

#[test]
fn error_policy_refuses_existing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.txt");
    fs::write(&path, "keep").unwrap();

    let target = TargetConfig::file(path.to_string_lossy());
    assert!(matches!(target.open(), Err(ConfigError::FileExists(_))));
    assert_eq!(fs::read_to_string(&path).unwrap(), "keep");
}

#[test]
fn overwrite_and_append_policies() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.txt");
    fs::write(&path, "old").unwrap();
    let raw = path.to_string_lossy().into_owned();

    let cfg = SinkConfig::new("[{}]")
        .with_target(TargetConfig::file(raw.clone()).with_file_exists_policy("overwrite"));
    {
        let target = cfg.open().unwrap();
        assert_eq!(target.id(), raw);
        let mut sink = cfg.sink::<i32>(&target);
        sink.assign(1).unwrap();
    }
    assert_eq!(fs::read_to_string(&path).unwrap(), "[1]");

    let cfg = SinkConfig::new("[{}]")
        .with_target(TargetConfig::file(raw).with_file_exists_policy("append"));
    {
        let target = cfg.open().unwrap();
        let mut sink = cfg.sink::<i32>(&target);
        sink.assign(2).unwrap();
    }
    assert_eq!(fs::read_to_string(&path).unwrap(), "[1][2]");
}

#[test]
fn open_failure_reports_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("out.txt");
    let target = TargetConfig::file(path.to_string_lossy()).with_file_exists_policy("overwrite");
    match target.open() {
        Err(ConfigError::Open { path: p, .. }) => assert!(p.ends_with("out.txt")),
        other => panic!("expected open error, got {other:?}"),
    }
}

#[cfg(feature = "json")]
#[test]
fn config_from_json() {
    let cfg = SinkConfig::from_json_str(r#"{"template": "${}", "target": {"kind": "stderr"}}"#)
        .unwrap();
    assert_eq!(cfg.template(), "${}");
    assert_eq!(cfg.target.kind, "stderr");
}

#[cfg(feature = "toml")]
#[test]
fn config_from_toml() {
    let cfg = SinkConfig::from_toml_str(
        r#"
template = "{:02d}:00 UTC\n"

[target]
kind = "file"
path = "hours.txt"
file_exists_policy = "append"
"#,
    )
    .unwrap();
    assert_eq!(cfg.template(), "{:02d}:00 UTC\n");
    assert_eq!(cfg.target.path.as_deref(), Some("hours.txt"));
    assert_eq!(cfg.target.file_exists_policy.as_deref(), Some("append"));
}

#[cfg(feature = "json")]
#[test]
fn malformed_config_is_a_parse_error() {
    assert!(matches!(
        SinkConfig::from_json_str("{"),
        Err(ConfigError::Parse(_))
    ));
}

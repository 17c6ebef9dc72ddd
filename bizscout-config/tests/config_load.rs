use bizscout_config::BizscoutConfigLoader;
use serial_test::serial;
use std::{fs, path::PathBuf};
use tempfile::TempDir;

/// Helper to write a YAML file in a temp dir and return its path.
fn write_yaml(tmp: &TempDir, name: &str, yaml: &str) -> PathBuf {
    let p = tmp.path().join(name);
    fs::write(&p, yaml).expect("write yaml");
    p
}

#[test]
#[serial]
fn loads_file_with_env_expansion() {
    let tmp = TempDir::new().unwrap();
    let p = write_yaml(
        &tmp,
        "bizscout.yaml",
        r#"
backend:
  base_url: "http://${SEARCH_HOST}:5000"
log:
  filter: debug
  stderr: true
"#,
    );

    temp_env::with_var("SEARCH_HOST", Some("search.internal"), || {
        let cfg = BizscoutConfigLoader::new()
            .with_file(&p)
            .load()
            .expect("load config");

        assert_eq!(cfg.backend.base_url, "http://search.internal:5000");
        let log = cfg.log.expect("log section");
        assert_eq!(log.filter.as_deref(), Some("debug"));
        assert_eq!(log.stderr, Some(true));
    });
}

#[test]
#[serial]
fn env_overrides_file() {
    let tmp = TempDir::new().unwrap();
    let p = write_yaml(
        &tmp,
        "bizscout.yaml",
        "backend:\n  base_url: \"http://from-file:5000\"\n",
    );

    temp_env::with_var(
        "BIZSCOUT_BACKEND__BASE_URL",
        Some("http://from-env:5000"),
        || {
            let cfg = BizscoutConfigLoader::new().with_file(&p).load().unwrap();
            assert_eq!(cfg.backend.base_url, "http://from-env:5000");
        },
    );
}

#[test]
#[serial]
fn missing_optional_file_falls_back_to_defaults() {
    let cfg = BizscoutConfigLoader::new()
        .with_optional_file("/definitely/not/here/bizscout.yaml")
        .load()
        .expect("defaults");
    assert_eq!(cfg.backend.base_url, "http://localhost:5000");
}

use super::*;

use std::collections::HashMap;

#[test]
fn defaults_to_local_upload_endpoint() {
    assert_eq!(Settings::default().upload_url, "http://127.0.0.1:5000/upload");
}

#[test]
fn reads_upload_url_from_settings_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join(SETTINGS_FILE);
    fs::write(&path, "upload_url = \"http://10.0.0.2:8080/upload\"\n").expect("write");

    let settings = load_settings_file(&path);
    assert_eq!(settings.upload_url, "http://10.0.0.2:8080/upload");
}

#[test]
fn missing_or_malformed_settings_file_keeps_defaults() {
    let dir = tempfile::tempdir().expect("tempdir");
    assert_eq!(
        load_settings_file(&dir.path().join("absent.toml")),
        Settings::default()
    );

    let path = dir.path().join(SETTINGS_FILE);
    fs::write(&path, "upload_url = [").expect("write");
    assert_eq!(load_settings_file(&path), Settings::default());
}

#[test]
fn app_prefixed_env_var_wins_over_plain_one() {
    let env: HashMap<&str, &str> = HashMap::from([
        ("PDF_UPLOAD_URL", "http://plain.example/upload"),
        ("APP__UPLOAD_URL", "http://prefixed.example/upload"),
    ]);
    let mut settings = Settings::default();
    apply_env_overrides(&mut settings, |name| env.get(name).map(|v| v.to_string()));
    assert_eq!(settings.upload_url, "http://prefixed.example/upload");
}

#[test]
fn cli_value_overrides_and_is_validated() {
    let settings = Settings::default()
        .resolve(Some("https://pdf.example.com/upload".to_string()))
        .expect("valid url");
    assert_eq!(settings.upload_url, "https://pdf.example.com/upload");

    let err = Settings::default()
        .resolve(Some("ftp://pdf.example.com/upload".to_string()))
        .expect_err("ftp rejected");
    assert!(err.to_string().contains("http or https"), "{err}");
}

#[test]
fn rejects_relative_upload_url() {
    let err = validate_upload_url("/upload").expect_err("relative url");
    assert!(err.to_string().contains("invalid upload url"), "{err}");
}

use super::*;

#[test]
fn test_defaults() {
    let cfg = Config::default();
    assert_eq!(cfg.keytexts.locale, "en");
    assert_eq!(cfg.keytexts.log_level, "info");
    assert_eq!(cfg.overrides.system_locale, "en");
    assert!(cfg.overrides.resources.is_none());
    assert!(cfg.overrides.strings.is_empty());
}

#[test]
fn test_parse_full_config() {
    let toml_str = r#"
        [keytexts]
        locale = "hi_IN"
        log_level = "debug"

        [overrides]
        resources = "~/strings.toml"
        system_locale = "fr"

        [overrides.strings.hi]
        label_go_key = "जाएं"
    "#;
    let cfg = parse(toml_str).unwrap();
    assert_eq!(cfg.keytexts.locale, "hi_IN");
    assert_eq!(cfg.keytexts.log_level, "debug");
    assert_eq!(cfg.overrides.resources.as_deref(), Some("~/strings.toml"));
    assert_eq!(cfg.overrides.system_locale, "fr");
    assert_eq!(cfg.overrides.strings["hi"]["label_go_key"], "जाएं");
}

#[test]
fn test_parse_partial_config_fills_defaults() {
    let cfg = parse("[keytexts]\nlocale = \"ta\"\n").unwrap();
    assert_eq!(cfg.keytexts.locale, "ta");
    assert_eq!(cfg.keytexts.log_level, "info");
    assert_eq!(cfg.overrides.system_locale, "en");
}

#[test]
fn test_parse_empty_config() {
    let cfg = parse("").unwrap();
    assert_eq!(cfg.keytexts.locale, "en");
}

#[test]
fn test_parse_invalid_config() {
    let err = parse("[keytexts\nlocale = 3").unwrap_err();
    assert!(matches!(err, KeyTextsError::Config(_)));
}

#[test]
fn test_load_missing_file_uses_defaults() {
    let cfg = load("/nonexistent/__keytexts_missing__.toml").unwrap();
    assert_eq!(cfg.keytexts.locale, "en");
}

#[test]
fn test_load_from_file() {
    let path = std::env::temp_dir().join(format!(
        "__keytexts_config_test_{}__.toml",
        std::process::id()
    ));
    std::fs::write(&path, "[keytexts]\nlocale = \"bn\"\n").unwrap();
    let cfg = load(path.to_str().unwrap()).unwrap();
    assert_eq!(cfg.keytexts.locale, "bn");
    let _ = std::fs::remove_file(&path);
}

#[test]
fn test_shellexpand_home() {
    if let Some(home) = std::env::var_os("HOME") {
        let expanded = shellexpand("~/x.toml");
        assert_eq!(expanded, format!("{}/x.toml", home.to_string_lossy()));
    }
    assert_eq!(shellexpand("/abs/x.toml"), "/abs/x.toml");
}

pub(super) fn default_locale() -> String {
    "en".to_string()
}

pub(super) fn default_log_level() -> String {
    "info".to_string()
}

pub(super) fn default_system_locale() -> String {
    "en".to_string()
}

//! Override providers shipped with the crate.

use std::collections::BTreeMap;
use std::path::Path;

use keytexts_core::error::KeyTextsError;
use keytexts_core::locale;
use keytexts_core::traits::OverrideProvider;
use serde::Deserialize;

/// Section consulted when no locale section has the name.
pub const DEFAULT_SECTION: &str = "default";

const BUNDLED: &str = include_str!("../resources/strings-action-keys.toml");

/// Provider with nothing to offer; bindings use the tables alone.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOverrides;

impl OverrideProvider for NoOverrides {
    fn name(&self) -> &str {
        "none"
    }

    fn lookup(&self, _locale: Option<&str>, name: &str) -> Result<String, KeyTextsError> {
        Err(KeyTextsError::Provider(format!("no override source for {name}")))
    }
}

/// Adapts a closure into a provider. `None` from the closure is a miss.
pub struct FnProvider<F> {
    name: String,
    lookup: F,
}

impl<F> FnProvider<F>
where
    F: Fn(Option<&str>, &str) -> Option<String>,
{
    pub fn new(name: impl Into<String>, lookup: F) -> Self {
        Self {
            name: name.into(),
            lookup,
        }
    }
}

impl<F> OverrideProvider for FnProvider<F>
where
    F: Fn(Option<&str>, &str) -> Option<String> + Send + Sync,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn lookup(&self, locale: Option<&str>, name: &str) -> Result<String, KeyTextsError> {
        (self.lookup)(locale, name).ok_or_else(|| {
            KeyTextsError::Provider(format!(
                "{} has no {name} for {}",
                self.name,
                locale.unwrap_or("the system locale")
            ))
        })
    }
}

/// Per-locale string resources, read from TOML:
///
/// ```toml
/// system_locale = "en"
///
/// [strings.default]
/// label_go_key = "Go"
///
/// [strings.hi]
/// label_go_key = "जाएं"
/// ```
///
/// A lookup tries the full tag, then its language, then `default`.
#[derive(Debug, Clone, Deserialize)]
pub struct ResourceStrings {
    #[serde(default = "default_system_locale")]
    system_locale: String,
    #[serde(default)]
    strings: BTreeMap<String, BTreeMap<String, String>>,
}

fn default_system_locale() -> String {
    "en".to_string()
}

impl Default for ResourceStrings {
    fn default() -> Self {
        Self {
            system_locale: default_system_locale(),
            strings: BTreeMap::new(),
        }
    }
}

impl ResourceStrings {
    /// The action-key labels bundled with the crate.
    pub fn bundled() -> Result<Self, KeyTextsError> {
        Self::from_toml_str(BUNDLED)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, KeyTextsError> {
        toml::from_str(content)
            .map_err(|e| KeyTextsError::Config(format!("failed to parse string resources: {e}")))
    }

    /// Load resources from a TOML file.
    pub fn load(path: &Path) -> Result<Self, KeyTextsError> {
        tracing::debug!("loading string resources from {}", path.display());
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Locale used for lookups that name no locale.
    pub fn with_system_locale(mut self, locale: impl Into<String>) -> Self {
        self.system_locale = locale.into();
        self
    }

    pub fn system_locale(&self) -> &str {
        &self.system_locale
    }

    /// Layer `strings` over the current resources, entry by entry.
    pub fn merge(&mut self, strings: &BTreeMap<String, BTreeMap<String, String>>) {
        for (section, entries) in strings {
            let target = self
                .strings
                .entry(locale::normalize(section))
                .or_default();
            for (name, value) in entries {
                target.insert(name.clone(), value.clone());
            }
        }
    }

    /// Sections present, in sorted order.
    pub fn sections(&self) -> impl Iterator<Item = &str> {
        self.strings.keys().map(String::as_str)
    }

    fn find(&self, locale: &str, name: &str) -> Option<&str> {
        locale::candidates(locale)
            .iter()
            .map(String::as_str)
            .chain(std::iter::once(DEFAULT_SECTION))
            .find_map(|section| self.strings.get(section)?.get(name))
            .map(String::as_str)
    }
}

impl OverrideProvider for ResourceStrings {
    fn name(&self) -> &str {
        "resources"
    }

    fn lookup(&self, locale: Option<&str>, name: &str) -> Result<String, KeyTextsError> {
        let locale = locale.unwrap_or(self.system_locale.as_str());
        self.find(locale, name).map(str::to_string).ok_or_else(|| {
            KeyTextsError::Provider(format!("no string resource {name} for {locale}"))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resources() -> ResourceStrings {
        ResourceStrings::from_toml_str(
            r#"
            system_locale = "hi"

            [strings.default]
            label_go_key = "Go"
            label_done_key = "Done"

            [strings.hi]
            label_go_key = "जाएं"

            [strings.hi_IN]
            label_done_key = "पूर्ण"
            "#,
        )
        .unwrap()
    }

    #[test]
    fn test_no_overrides_always_misses() {
        assert!(matches!(
            NoOverrides.lookup(Some("en"), "label_go_key"),
            Err(KeyTextsError::Provider(_))
        ));
    }

    #[test]
    fn test_fn_provider_maps_none_to_error() {
        let p = FnProvider::new("one", |_: Option<&str>, n: &str| {
            (n == "a").then(|| "A".to_string())
        });
        assert_eq!(p.lookup(None, "a").unwrap(), "A");
        let err = p.lookup(None, "b").unwrap_err();
        assert!(err.to_string().contains("the system locale"));
    }

    #[test]
    fn test_resource_lookup_order() {
        let r = resources();
        assert_eq!(r.lookup(Some("hi_IN"), "label_done_key").unwrap(), "पूर्ण");
        assert_eq!(r.lookup(Some("hi_IN"), "label_go_key").unwrap(), "जाएं");
        assert_eq!(r.lookup(Some("hi"), "label_done_key").unwrap(), "Done");
        assert_eq!(r.lookup(Some("ta"), "label_go_key").unwrap(), "Go");
    }

    #[test]
    fn test_resource_lookup_accepts_dashed_tags() {
        let r = resources();
        assert_eq!(r.lookup(Some("hi-IN"), "label_done_key").unwrap(), "पूर्ण");
    }

    #[test]
    fn test_resource_missing_name() {
        let r = resources();
        assert!(matches!(
            r.lookup(Some("hi"), "label_wait_key"),
            Err(KeyTextsError::Provider(_))
        ));
    }

    #[test]
    fn test_system_locale_used_for_none() {
        let r = resources();
        assert_eq!(r.lookup(None, "label_go_key").unwrap(), "जाएं");
        let r = r.with_system_locale("en");
        assert_eq!(r.lookup(None, "label_go_key").unwrap(), "Go");
    }

    #[test]
    fn test_merge_layers_over_existing() {
        let mut r = resources();
        let mut inline = BTreeMap::new();
        inline.insert(
            "hi".to_string(),
            BTreeMap::from([("label_go_key".to_string(), "चलें".to_string())]),
        );
        inline.insert(
            "ta-IN".to_string(),
            BTreeMap::from([("label_go_key".to_string(), "செல்".to_string())]),
        );
        r.merge(&inline);
        assert_eq!(r.lookup(Some("hi"), "label_go_key").unwrap(), "चलें");
        assert_eq!(r.lookup(Some("ta_IN"), "label_go_key").unwrap(), "செல்");
        assert_eq!(r.lookup(Some("hi_IN"), "label_done_key").unwrap(), "पूर्ण");
    }

    #[test]
    fn test_bundled_resources_parse() {
        let r = ResourceStrings::bundled().unwrap();
        assert_eq!(r.system_locale(), "en");
        assert!(r.sections().any(|s| s == DEFAULT_SECTION));
        for name in keytexts_tables::OVERRIDE_NAMES {
            assert!(
                r.lookup(Some("xx"), name).is_ok(),
                "bundled default section should cover {name}"
            );
        }
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!(
            "__keytexts_resources_test_{}__.toml",
            std::process::id()
        ));
        std::fs::write(&path, "[strings.default]\nlabel_go_key = \"Go\"\n").unwrap();
        let r = ResourceStrings::load(&path).unwrap();
        assert_eq!(r.lookup(Some("en"), "label_go_key").unwrap(), "Go");
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let err = ResourceStrings::load(Path::new("/nonexistent/__keytexts__.toml")).unwrap_err();
        assert!(
            matches!(err, KeyTextsError::Io(ref e) if e.kind() == std::io::ErrorKind::NotFound),
            "{err:?}"
        );
    }
}

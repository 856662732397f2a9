//! A locale binding: one table plus the overrides loaded for it.

use std::collections::HashMap;
use std::sync::Arc;

use keytexts_core::error::KeyTextsError;
use keytexts_core::locale::{self, NO_LANGUAGE};
use keytexts_core::traits::OverrideProvider;
use keytexts_tables::{LocaleTextTable, TextCatalog};
use tracing::{debug, warn};

use crate::resolve;

/// Texts for one locale. Built whole by [`TextsSet::bind`] and never
/// mutated afterwards; switching locale means building a new set.
#[derive(Debug, Clone)]
pub struct TextsSet {
    catalog: Arc<TextCatalog>,
    locale: Box<str>,
    table_locale: Box<str>,
    overrides: HashMap<Box<str>, String>,
}

impl TextsSet {
    /// Bind `locale`, asking `provider` for every override-eligible name.
    ///
    /// The table is picked by exact tag. Provider failures are not errors:
    /// that name just has no override. The no-language locale asks the
    /// provider for the system locale.
    pub fn bind<P>(catalog: Arc<TextCatalog>, locale: &str, provider: &P) -> Self
    where
        P: OverrideProvider + ?Sized,
    {
        if !catalog.contains(locale) {
            debug!("no keyboard text table for {locale}, using the default table");
        }
        Self::bind_with_table(catalog, locale, locale, provider)
    }

    /// Like [`bind`](Self::bind), but the table is the best match for
    /// `requested` (full tag, then language, then default) while the provider
    /// still sees the full tag.
    pub fn bind_negotiated<P>(catalog: Arc<TextCatalog>, requested: &str, provider: &P) -> Self
    where
        P: OverrideProvider + ?Sized,
    {
        let full = locale::normalize(requested);
        let table_locale = catalog.negotiate(&full).to_string();
        Self::bind_with_table(catalog, &full, &table_locale, provider)
    }

    fn bind_with_table<P>(
        catalog: Arc<TextCatalog>,
        locale: &str,
        table_locale: &str,
        provider: &P,
    ) -> Self
    where
        P: OverrideProvider + ?Sized,
    {
        let provider_locale = (locale != NO_LANGUAGE).then_some(locale);
        let mut overrides = HashMap::new();
        for name in catalog.override_names() {
            match provider.lookup(provider_locale, name) {
                Ok(text) => {
                    overrides.insert(Box::from(name), text);
                }
                Err(e) => debug!("{}: no override for {name}: {e}", provider.name()),
            }
        }
        debug!(
            "bound keyboard texts for {locale} (table {}, {} overrides from {})",
            catalog.table_for(table_locale).locale(),
            overrides.len(),
            provider.name()
        );
        Self {
            catalog,
            locale: locale.into(),
            table_locale: table_locale.into(),
            overrides,
        }
    }

    /// The tag this set was bound with.
    pub fn locale(&self) -> &str {
        &self.locale
    }

    pub fn catalog(&self) -> &Arc<TextCatalog> {
        &self.catalog
    }

    /// The table selected for this locale.
    pub fn table(&self) -> &LocaleTextTable {
        self.catalog.table_for(&self.table_locale)
    }

    pub fn override_text(&self, name: &str) -> Option<&str> {
        self.overrides.get(name).map(String::as_str)
    }

    /// Loaded overrides, sorted by name.
    pub fn overrides(&self) -> Vec<(&str, &str)> {
        let mut pairs: Vec<_> = self
            .overrides
            .iter()
            .map(|(k, v)| (&**k, v.as_str()))
            .collect();
        pairs.sort_unstable();
        pairs
    }

    /// Raw text for `name`: the override if there is one, else the locale
    /// table, else the default table.
    ///
    /// `Ok(None)` is a soft miss. Names that are neither overridden nor
    /// registered are an error.
    pub fn get_text(&self, name: &str) -> Result<Option<&str>, KeyTextsError> {
        if let Some(text) = self.override_text(name) {
            return Ok(Some(text));
        }
        self.catalog.text(self.table(), name)
    }

    /// Expand every `!text/` reference in `raw` against this binding.
    ///
    /// References to unknown names expand to nothing.
    pub fn resolve_text_reference(&self, raw: &str) -> Result<Option<String>, KeyTextsError> {
        resolve::resolve_text_reference(raw, |name| self.reference_text(name))
    }

    /// [`get_text`](Self::get_text) followed by expansion.
    pub fn resolved_text(&self, name: &str) -> Result<Option<String>, KeyTextsError> {
        match self.get_text(name)? {
            Some(raw) => self.resolve_text_reference(raw),
            None => Ok(None),
        }
    }

    fn reference_text(&self, name: &str) -> Option<&str> {
        match self.get_text(name) {
            Ok(text) => text,
            Err(e) => {
                if !name.is_empty() {
                    warn!("keyboard text reference in {}: {e}", self.locale);
                }
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::{FnProvider, NoOverrides};
    use keytexts_core::locale::DEFAULT_LOCALE;
    use keytexts_tables::NameRegistry;
    use std::borrow::Cow;
    use std::sync::Mutex;

    fn owned(values: &[Option<&'static str>]) -> Vec<Option<Cow<'static, str>>> {
        values.iter().map(|v| v.map(Cow::Borrowed)).collect()
    }

    fn catalog() -> Arc<TextCatalog> {
        let names = NameRegistry::new(["label", "quotes", "lqm", "missing", "action"]).unwrap();
        let default = LocaleTextTable::new(
            "base",
            owned(&[
                Some("ABC"),
                Some("!text/lqm,\\,"),
                Some("\u{2018}"),
                None,
                Some("!text/label_go_key|!code/go"),
            ]),
        );
        let catalog = TextCatalog::new(names, default)
            .unwrap()
            .with_locale(LocaleTextTable::new("hi", owned(&[Some("\u{0915}")])))
            .unwrap()
            .with_locale(LocaleTextTable::new("zz", owned(&[None, None, Some("'")])))
            .unwrap()
            .with_override_names(["label_go_key", "label", "label_wait_key"]);
        Arc::new(catalog)
    }

    fn go_provider() -> FnProvider<impl Fn(Option<&str>, &str) -> Option<String>> {
        FnProvider::new("test", |locale: Option<&str>, name: &str| match (locale, name) {
            (Some("hi"), "label_go_key") => Some("\u{091C}\u{093E}".to_string()),
            (_, "label_go_key") => Some("Go".to_string()),
            _ => None,
        })
    }

    #[test]
    fn test_default_binding_returns_default_entries() {
        let catalog = catalog();
        let set = TextsSet::bind(Arc::clone(&catalog), DEFAULT_LOCALE, &NoOverrides);
        for (id, name) in catalog.names().iter() {
            assert_eq!(
                set.get_text(name).unwrap(),
                catalog.default_table().get(id),
                "{name}"
            );
        }
    }

    #[test]
    fn test_locale_slot_wins_over_default() {
        let set = TextsSet::bind(catalog(), "hi", &NoOverrides);
        assert_eq!(set.get_text("label").unwrap(), Some("\u{0915}"));
    }

    #[test]
    fn test_absent_locale_slot_falls_back() {
        let set = TextsSet::bind(catalog(), "hi", &NoOverrides);
        assert_eq!(set.get_text("lqm").unwrap(), Some("\u{2018}"));
        assert_eq!(set.get_text("missing").unwrap(), None);
    }

    #[test]
    fn test_unknown_locale_binds_default_table() {
        let set = TextsSet::bind(catalog(), "fr", &NoOverrides);
        assert_eq!(set.locale(), "fr");
        assert_eq!(set.table().locale(), DEFAULT_LOCALE);
        assert_eq!(set.get_text("label").unwrap(), Some("ABC"));
    }

    #[test]
    fn test_override_precedence() {
        let provider = FnProvider::new("labels", |_: Option<&str>, name: &str| {
            (name == "label").then(|| "OVR".to_string())
        });
        let set = TextsSet::bind(catalog(), "hi", &provider);
        assert_eq!(set.get_text("label").unwrap(), Some("OVR"));
        assert_eq!(set.override_text("label"), Some("OVR"));
    }

    #[test]
    fn test_only_override_eligible_names_are_requested() {
        let asked = Mutex::new(Vec::new());
        let provider = FnProvider::new("spy", |_: Option<&str>, name: &str| {
            asked.lock().unwrap().push(name.to_string());
            None
        });
        let set = TextsSet::bind(catalog(), "hi", &provider);
        assert!(set.overrides().is_empty());
        assert_eq!(
            *asked.lock().unwrap(),
            vec!["label_go_key", "label", "label_wait_key"]
        );
    }

    #[test]
    fn test_provider_failure_falls_through_to_table() {
        let set = TextsSet::bind(catalog(), "hi", &go_provider());
        assert_eq!(set.get_text("label").unwrap(), Some("\u{0915}"));
        assert_eq!(set.overrides(), vec![("label_go_key", "\u{091C}\u{093E}")]);
    }

    #[test]
    fn test_no_language_asks_for_system_locale() {
        let seen = Mutex::new(Vec::new());
        let provider = FnProvider::new("spy", |locale: Option<&str>, _: &str| {
            seen.lock().unwrap().push(locale.map(str::to_string));
            None
        });
        let set = TextsSet::bind(catalog(), "zz", &provider);
        assert_eq!(set.table().locale(), "zz");
        assert!(seen.lock().unwrap().iter().all(Option::is_none));

        seen.lock().unwrap().clear();
        TextsSet::bind(catalog(), "hi", &provider);
        assert!(seen
            .lock()
            .unwrap()
            .iter()
            .all(|l| l.as_deref() == Some("hi")));
    }

    #[test]
    fn test_override_only_name_resolves() {
        let set = TextsSet::bind(catalog(), "hi", &go_provider());
        assert_eq!(set.get_text("label_go_key").unwrap(), Some("\u{091C}\u{093E}"));
        assert_eq!(
            set.resolved_text("action").unwrap().as_deref(),
            Some("\u{091C}\u{093E}|!code/go")
        );
    }

    #[test]
    fn test_unregistered_name_is_error_for_get_text() {
        let set = TextsSet::bind(catalog(), "hi", &NoOverrides);
        assert!(matches!(
            set.get_text("label_go_key"),
            Err(KeyTextsError::UnknownName(_))
        ));
    }

    #[test]
    fn test_unregistered_reference_degrades_to_empty() {
        let set = TextsSet::bind(catalog(), "hi", &NoOverrides);
        assert_eq!(
            set.resolved_text("action").unwrap().as_deref(),
            Some("|!code/go")
        );
        assert_eq!(set.resolve_text_reference("!text/nope").unwrap(), None);
    }

    #[test]
    fn test_resolve_through_locale_fallback() {
        let set = TextsSet::bind(catalog(), "zz", &NoOverrides);
        assert_eq!(set.resolved_text("quotes").unwrap().as_deref(), Some("',\\,"));
        let set = TextsSet::bind(catalog(), "hi", &NoOverrides);
        assert_eq!(
            set.resolved_text("quotes").unwrap().as_deref(),
            Some("\u{2018},\\,")
        );
    }

    #[test]
    fn test_resolved_text_of_absent_entry() {
        let set = TextsSet::bind(catalog(), "hi", &NoOverrides);
        assert_eq!(set.resolved_text("missing").unwrap(), None);
    }

    #[test]
    fn test_negotiated_binding_keeps_full_tag_for_provider() {
        let seen = Mutex::new(Vec::new());
        let provider = FnProvider::new("spy", |locale: Option<&str>, _: &str| {
            seen.lock().unwrap().push(locale.map(str::to_string));
            None
        });
        let set = TextsSet::bind_negotiated(catalog(), "hi-IN", &provider);
        assert_eq!(set.locale(), "hi_IN");
        assert_eq!(set.table().locale(), "hi");
        assert_eq!(set.get_text("label").unwrap(), Some("\u{0915}"));
        assert!(seen
            .lock()
            .unwrap()
            .iter()
            .all(|l| l.as_deref() == Some("hi_IN")));
    }

    #[test]
    fn test_negotiated_binding_without_match_uses_default() {
        let set = TextsSet::bind_negotiated(catalog(), "fr_FR", &NoOverrides);
        assert_eq!(set.table().locale(), DEFAULT_LOCALE);
    }

    #[test]
    fn test_exact_binding_does_not_negotiate() {
        let set = TextsSet::bind(catalog(), "hi_IN", &NoOverrides);
        assert_eq!(set.table().locale(), DEFAULT_LOCALE);
    }

    #[test]
    fn test_rebinding_builds_independent_sets() {
        let catalog = catalog();
        let hi = TextsSet::bind(Arc::clone(&catalog), "hi", &go_provider());
        let en = TextsSet::bind(Arc::clone(&catalog), "en", &go_provider());
        assert_eq!(hi.get_text("label_go_key").unwrap(), Some("\u{091C}\u{093E}"));
        assert_eq!(en.get_text("label_go_key").unwrap(), Some("Go"));
        assert_eq!(hi.get_text("label").unwrap(), Some("\u{0915}"));
        assert_eq!(en.get_text("label").unwrap(), Some("ABC"));
    }
}

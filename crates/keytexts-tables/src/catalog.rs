//! The locale table registry: one default table plus per-locale tables, all
//! aligned to a single [`NameRegistry`].

use std::collections::HashMap;
use std::sync::{Arc, LazyLock};

use keytexts_core::error::KeyTextsError;
use keytexts_core::locale::{self, DEFAULT_LOCALE};

use crate::data;
use crate::names::{NameId, NameRegistry, OVERRIDE_NAMES};
use crate::table::LocaleTextTable;

static BUILTIN: LazyLock<Arc<TextCatalog>> = LazyLock::new(|| {
    // Compiled-in data is fixed; a bad table here is a build defect.
    TextCatalog::build_builtin()
        .map(Arc::new)
        .unwrap_or_else(|e| panic!("compiled-in keyboard text tables are malformed: {e}"))
});

/// Names, tables, and the override-eligible name list. Immutable once built.
#[derive(Debug, Clone)]
pub struct TextCatalog {
    names: NameRegistry,
    default: LocaleTextTable,
    locales: Vec<LocaleTextTable>,
    by_tag: HashMap<Box<str>, usize>,
    override_names: Vec<Box<str>>,
}

impl TextCatalog {
    /// Start a catalog from a registry and its default texts.
    ///
    /// The default table must have exactly one slot per name.
    pub fn new(names: NameRegistry, default: LocaleTextTable) -> Result<Self, KeyTextsError> {
        if default.len() != names.len() {
            return Err(KeyTextsError::TableShape(format!(
                "default table has {} slots, registry has {} names",
                default.len(),
                names.len()
            )));
        }
        let default = default.relabel(DEFAULT_LOCALE);
        Ok(Self {
            names,
            default,
            locales: Vec::new(),
            by_tag: HashMap::new(),
            override_names: Vec::new(),
        })
    }

    /// Add a locale table. Tags must be unique and the table no longer than
    /// the registry.
    pub fn with_locale(mut self, table: LocaleTextTable) -> Result<Self, KeyTextsError> {
        let tag = table.locale();
        if tag == DEFAULT_LOCALE || self.by_tag.contains_key(tag) {
            return Err(KeyTextsError::TableShape(format!(
                "locale table {tag} defined twice"
            )));
        }
        if table.len() > self.names.len() {
            return Err(KeyTextsError::TableShape(format!(
                "locale table {tag} has {} slots, registry has {} names",
                table.len(),
                self.names.len()
            )));
        }
        self.by_tag.insert(tag.into(), self.locales.len());
        self.locales.push(table);
        Ok(self)
    }

    /// Replace the list of names the override provider is asked for.
    pub fn with_override_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Box<str>>,
    {
        self.override_names = names.into_iter().map(Into::into).collect();
        self
    }

    /// The shared compiled-in catalog.
    pub fn builtin() -> Arc<TextCatalog> {
        Arc::clone(&BUILTIN)
    }

    fn build_builtin() -> Result<Self, KeyTextsError> {
        let names = NameRegistry::builtin()?;
        let default = LocaleTextTable::from_static(DEFAULT_LOCALE, data::DEFAULT);
        let mut catalog =
            Self::new(names, default)?.with_override_names(OVERRIDE_NAMES.iter().copied());
        for &(tag, texts) in data::LOCALE_TABLES {
            catalog = catalog.with_locale(LocaleTextTable::from_static(tag, texts))?;
        }
        tracing::debug!(
            "built keyboard text catalog: {} names, {} locale tables",
            catalog.names.len(),
            catalog.locales.len()
        );
        Ok(catalog)
    }

    pub fn names(&self) -> &NameRegistry {
        &self.names
    }

    pub fn override_names(&self) -> impl Iterator<Item = &str> {
        self.override_names.iter().map(|n| &**n)
    }

    pub fn default_table(&self) -> &LocaleTextTable {
        &self.default
    }

    /// Table for an exact tag; unknown tags get the default table.
    pub fn table_for(&self, tag: &str) -> &LocaleTextTable {
        match self.by_tag.get(tag) {
            Some(&i) => &self.locales[i],
            None => &self.default,
        }
    }

    /// Whether a table exists for exactly `tag` (the default tag included).
    pub fn contains(&self, tag: &str) -> bool {
        tag == DEFAULT_LOCALE || self.by_tag.contains_key(tag)
    }

    /// Supported tags, default first.
    pub fn locales(&self) -> impl Iterator<Item = &str> {
        std::iter::once(DEFAULT_LOCALE).chain(self.locales.iter().map(LocaleTextTable::locale))
    }

    /// Pick the best supported tag for `requested`: the full tag, then its
    /// language, then the default.
    pub fn negotiate(&self, requested: &str) -> &str {
        for candidate in locale::candidates(requested) {
            if let Some((tag, _)) = self.by_tag.get_key_value(candidate.as_str()) {
                return &**tag;
            }
            if candidate == DEFAULT_LOCALE {
                break;
            }
        }
        DEFAULT_LOCALE
    }

    /// Text for `id` in `table`, deferring to the default table.
    pub fn text_by_id<'a>(&'a self, table: &'a LocaleTextTable, id: NameId) -> Option<&'a str> {
        table.get(id).or_else(|| self.default.get(id))
    }

    /// Text for `name` in `table`, deferring to the default table.
    ///
    /// `Ok(None)` is a soft miss; an unregistered name is an error.
    pub fn text<'a>(
        &'a self,
        table: &'a LocaleTextTable,
        name: &str,
    ) -> Result<Option<&'a str>, KeyTextsError> {
        let id = self
            .names
            .id_of(name)
            .ok_or_else(|| KeyTextsError::UnknownName(name.to_string()))?;
        Ok(self.text_by_id(table, id))
    }
}

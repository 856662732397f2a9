use std::borrow::Cow;

use crate::names::NameId;

/// Texts for one locale, indexed by [`NameId`].
///
/// An absent slot (explicit `None`, or past the end of a short table) means
/// "use the default table".
#[derive(Debug, Clone)]
pub struct LocaleTextTable {
    locale: Box<str>,
    texts: Vec<Option<Cow<'static, str>>>,
}

impl LocaleTextTable {
    pub fn new<S: Into<Box<str>>>(locale: S, texts: Vec<Option<Cow<'static, str>>>) -> Self {
        Self {
            locale: locale.into(),
            texts,
        }
    }

    /// Wrap compiled-in data without copying the strings.
    pub fn from_static(locale: &str, texts: &'static [Option<&'static str>]) -> Self {
        Self::new(
            locale,
            texts.iter().map(|t| t.map(Cow::Borrowed)).collect(),
        )
    }

    /// Same texts under another tag.
    pub fn relabel<S: Into<Box<str>>>(self, locale: S) -> Self {
        Self {
            locale: locale.into(),
            texts: self.texts,
        }
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// The slot for `id`, or `None` when it defers to the default table.
    pub fn get(&self, id: NameId) -> Option<&str> {
        self.texts.get(id.index())?.as_deref()
    }

    /// Number of slots actually present (may be less than the registry size).
    pub fn len(&self) -> usize {
        self.texts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.texts.is_empty()
    }
}

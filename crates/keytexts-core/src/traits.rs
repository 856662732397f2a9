use crate::error::KeyTextsError;

/// Source of dynamically localized strings, consulted once per binding.
///
/// Implementations typically wrap platform string resources. A failed lookup
/// is never fatal: the binding simply has no override for that name and
/// falls through to the compiled-in tables.
pub trait OverrideProvider: Send + Sync {
    /// Human-readable provider name, used in logs.
    fn name(&self) -> &str;

    /// Look up `name` localized for `locale`.
    ///
    /// `None` means "the system locale".
    fn lookup(&self, locale: Option<&str>, name: &str) -> Result<String, KeyTextsError>;
}

impl<P: OverrideProvider + ?Sized> OverrideProvider for &P {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn lookup(&self, locale: Option<&str>, name: &str) -> Result<String, KeyTextsError> {
        (**self).lookup(locale, name)
    }
}

impl<P: OverrideProvider + ?Sized> OverrideProvider for Box<P> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn lookup(&self, locale: Option<&str>, name: &str) -> Result<String, KeyTextsError> {
        (**self).lookup(locale, name)
    }
}

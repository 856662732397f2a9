//! Publishing bindings to concurrent readers.

use std::sync::Arc;

use arc_swap::ArcSwap;
use keytexts_core::error::KeyTextsError;
use keytexts_core::traits::OverrideProvider;

use crate::set::TextsSet;

/// The current binding, swappable as a whole.
///
/// Readers get a consistent `Arc<TextsSet>` and keep it for as long as they
/// need; a locale change stores a freshly built set and never touches the
/// one readers hold.
pub struct SharedTexts {
    current: ArcSwap<TextsSet>,
}

impl SharedTexts {
    pub fn new(set: TextsSet) -> Self {
        Self {
            current: ArcSwap::from_pointee(set),
        }
    }

    pub fn load(&self) -> Arc<TextsSet> {
        self.current.load_full()
    }

    pub fn publish(&self, set: TextsSet) {
        self.current.store(Arc::new(set));
    }

    /// Bind `locale` against the current catalog and publish it.
    pub fn rebind<P>(&self, locale: &str, provider: &P) -> Arc<TextsSet>
    where
        P: OverrideProvider + ?Sized,
    {
        let catalog = Arc::clone(self.current.load().catalog());
        let next = Arc::new(TextsSet::bind(catalog, locale, provider));
        self.current.store(Arc::clone(&next));
        next
    }

    /// Resolve against whatever binding is current at call time.
    pub fn resolve_text_reference(&self, raw: &str) -> Result<Option<String>, KeyTextsError> {
        self.current.load().resolve_text_reference(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::{FnProvider, NoOverrides};
    use keytexts_tables::TextCatalog;

    #[test]
    fn test_rebind_replaces_whole_binding() {
        let shared = SharedTexts::new(TextsSet::bind(TextCatalog::builtin(), "en", &NoOverrides));
        let before = shared.load();

        let provider = FnProvider::new("test", |_: Option<&str>, name: &str| {
            (name == "label_next_key").then(|| "Next".to_string())
        });
        shared.rebind("hi", &provider);
        let after = shared.load();

        // The old handle is untouched.
        assert_eq!(before.locale(), "en");
        assert!(before.override_text("label_next_key").is_none());
        assert_eq!(after.locale(), "hi");
        assert_eq!(after.override_text("label_next_key"), Some("Next"));
        assert_eq!(
            after.resolved_text("label_to_alpha_key").unwrap().as_deref(),
            Some("\u{0915}\u{0916}\u{0917}")
        );
    }

    #[test]
    fn test_publish_and_resolve() {
        let catalog = TextCatalog::builtin();
        let shared = SharedTexts::new(TextsSet::bind(catalog.clone(), "en", &NoOverrides));
        assert_eq!(
            shared.resolve_text_reference("!text/label_to_alpha_key").unwrap().as_deref(),
            Some("ABC")
        );
        shared.publish(TextsSet::bind(catalog, "ta", &NoOverrides));
        assert_eq!(shared.load().locale(), "ta");
    }

    #[test]
    fn test_readers_on_other_threads_see_whole_bindings() {
        let shared = Arc::new(SharedTexts::new(TextsSet::bind(
            TextCatalog::builtin(),
            "en",
            &NoOverrides,
        )));
        let reader = {
            let shared = Arc::clone(&shared);
            std::thread::spawn(move || {
                for _ in 0..200 {
                    let set = shared.load();
                    let label = set.resolved_text("label_to_alpha_key").unwrap();
                    let expected = match set.locale() {
                        "en" => "ABC",
                        _ => "\u{0915}\u{0916}\u{0917}",
                    };
                    assert_eq!(label.as_deref(), Some(expected));
                }
            })
        };
        for i in 0..50 {
            let locale = if i % 2 == 0 { "hi" } else { "en" };
            shared.rebind(locale, &NoOverrides);
        }
        reader.join().unwrap();
    }
}

//! Whole-catalog validation: expand every slot of every table up front
//! instead of waiting for a keyboard to hit a bad reference.

use keytexts_core::error::KeyTextsError;
use keytexts_tables::TextCatalog;

use crate::resolve::resolve_text_reference;

/// A slot whose expansion failed.
#[derive(Debug)]
pub struct CheckFailure {
    pub locale: String,
    pub name: String,
    pub error: KeyTextsError,
}

/// A reference to a name that is neither registered nor override-eligible.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DanglingReference {
    pub locale: String,
    pub name: String,
    pub reference: String,
}

#[derive(Debug, Default)]
pub struct CheckReport {
    pub slots_checked: usize,
    pub failures: Vec<CheckFailure>,
    pub dangling: Vec<DanglingReference>,
}

impl CheckReport {
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty() && self.dangling.is_empty()
    }
}

/// Expand every present slot of every table without overrides.
///
/// References to override-eligible names count as resolved (they are
/// filled in at bind time); references to anything else unknown are
/// reported as dangling.
pub fn check_catalog(catalog: &TextCatalog) -> CheckReport {
    let mut report = CheckReport::default();
    for locale in catalog.locales() {
        let table = catalog.table_for(locale);
        for (id, name) in catalog.names().iter() {
            let Some(raw) = table.get(id) else {
                continue;
            };
            report.slots_checked += 1;
            let mut unknown = Vec::new();
            let result = resolve_text_reference(raw, |reference| {
                catalog.text(table, reference).unwrap_or_else(|_| {
                    if !catalog.override_names().any(|n| n == reference) {
                        unknown.push(reference.to_string());
                    }
                    None
                })
            });
            if let Err(error) = result {
                report.failures.push(CheckFailure {
                    locale: locale.to_string(),
                    name: name.to_string(),
                    error,
                });
            }
            report
                .dangling
                .extend(unknown.into_iter().map(|reference| DanglingReference {
                    locale: locale.to_string(),
                    name: name.to_string(),
                    reference,
                }));
        }
    }
    report
}

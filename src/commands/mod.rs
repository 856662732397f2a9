//! Command implementations. Each returns the text to print so it can be
//! tested without a terminal.


use std::collections::BTreeMap;
use std::fmt::Write;
use std::path::Path;

use anyhow::Context;
use keytexts_core::config::{self, Config};
use keytexts_resolver::{check_catalog, ResourceStrings, TextsSet};
use keytexts_tables::TextCatalog;

/// Shown for texts that resolve to nothing.
pub const NONE_MARKER: &str = "<none>";

/// Resource strings from the configured file (or the bundled set), with
/// inline config strings layered on top.
pub fn build_provider(cfg: &Config) -> anyhow::Result<ResourceStrings> {
    let mut resources = match &cfg.overrides.resources {
        Some(path) => ResourceStrings::load(Path::new(&config::shellexpand(path)))
            .with_context(|| format!("failed to load string resources from {path}"))?,
        None => ResourceStrings::bundled()?,
    }
    .with_system_locale(cfg.overrides.system_locale.clone());
    resources.merge(&cfg.overrides.strings);
    tracing::debug!(
        "string resource sections: {}",
        resources.sections().collect::<Vec<_>>().join(", ")
    );
    Ok(resources)
}

/// One resolved line per template.
pub fn resolve_templates(set: &TextsSet, templates: &[String]) -> anyhow::Result<String> {
    let mut out = String::new();
    for template in templates {
        let resolved = set.resolve_text_reference(template)?;
        writeln!(out, "{}", resolved.as_deref().unwrap_or(NONE_MARKER))?;
    }
    Ok(out)
}

/// The unexpanded text for `name`.
pub fn raw_text(set: &TextsSet, name: &str) -> anyhow::Result<String> {
    let text = set.get_text(name)?;
    Ok(format!("{}\n", text.unwrap_or(NONE_MARKER)))
}

pub fn list_names(catalog: &TextCatalog) -> anyhow::Result<String> {
    let mut out = String::new();
    for (id, name) in catalog.names().iter() {
        writeln!(out, "{:>3} {name}", id.index())?;
    }
    Ok(out)
}

pub fn list_locales(catalog: &TextCatalog) -> anyhow::Result<String> {
    let mut out = String::new();
    for tag in catalog.locales() {
        let table = catalog.table_for(tag);
        writeln!(out, "{tag:<8} {} slots", table.len())?;
    }
    Ok(out)
}

/// Every registered and overridden name with its expanded text.
pub fn dump(set: &TextsSet, json: bool) -> anyhow::Result<String> {
    let mut entries = BTreeMap::new();
    for name in set.catalog().names().all_names() {
        entries.insert(name.to_string(), set.resolved_text(name)?);
    }
    for (name, _) in set.overrides() {
        entries.insert(name.to_string(), set.resolved_text(name)?);
    }

    if json {
        let mut out = serde_json::to_string_pretty(&entries)?;
        out.push('\n');
        return Ok(out);
    }

    let mut out = String::new();
    for (name, text) in &entries {
        writeln!(out, "{name} = {}", text.as_deref().unwrap_or(NONE_MARKER))?;
    }
    Ok(out)
}

/// Run the catalog check; returns the report text and whether it was clean.
pub fn check(catalog: &TextCatalog) -> anyhow::Result<(String, bool)> {
    let report = check_catalog(catalog);
    let mut out = String::new();
    for failure in &report.failures {
        writeln!(
            out,
            "error: {} {}: {}",
            failure.locale, failure.name, failure.error
        )?;
    }
    for dangling in &report.dangling {
        writeln!(
            out,
            "warning: {} {}: unknown reference !text/{}",
            dangling.locale, dangling.name, dangling.reference
        )?;
    }
    writeln!(
        out,
        "{} slots checked, {} errors, {} dangling references",
        report.slots_checked,
        report.failures.len(),
        report.dangling.len()
    )?;
    Ok((out, report.is_clean()))
}

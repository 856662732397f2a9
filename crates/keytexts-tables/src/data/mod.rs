//! Compiled-in text tables.
//!
//! Every table is aligned to [`NAMES`](crate::names::NAMES): slot `i` holds
//! the text for the name with id `i`. `None` defers to [`DEFAULT`]; a table
//! may stop before the last name, and the missing tail defers too.

mod default;
mod indic;
mod latin;
mod myanmar;

const EMPTY: Option<&str> = Some("");

pub(crate) use default::DEFAULT;

/// Locale tag to table, excluding the default table.
pub(crate) const LOCALE_TABLES: &[(&str, &[Option<&str>])] = &[
    ("as", indic::LANG_AS),
    ("bn", indic::LANG_BN),
    ("en", latin::LANG_EN),
    ("hi", indic::LANG_HI),
    ("kn", indic::LANG_KN),
    ("ml", indic::LANG_ML),
    ("mnw", myanmar::LANG_MNW),
    ("my", myanmar::LANG_MY),
    ("ne", indic::LANG_NE),
    ("or", indic::LANG_OR),
    ("pa", indic::LANG_PA),
    ("ta", indic::LANG_TA),
    ("te", indic::LANG_TE),
    ("zz", latin::LANG_ZZ),
];

//! Name registry: maps each text name to a dense id.

use std::collections::HashMap;
use std::fmt;

use keytexts_core::error::KeyTextsError;

/// Name of the "switch to alphabet" key label.
pub const SWITCH_TO_ALPHA_KEY_LABEL: &str = "keylabel_to_alpha";

/// Names localized at bind time by the override provider (action-key labels).
///
/// These are looked up by name, not id, and are not part of [`NAMES`].
pub static OVERRIDE_NAMES: &[&str] = &[
    "label_go_key",
    "label_send_key",
    "label_next_key",
    "label_done_key",
    "label_search_key",
    "label_previous_key",
    "label_pause_key",
    "label_wait_key",
];

/// Text names in id order. Append only: ids are positions in this list.
pub static NAMES: &[&str] = &[
    /* 0 */ "more_keys_for_a",
    /* 1 */ "more_keys_for_e",
    /* 2 */ "more_keys_for_i",
    /* 3 */ "more_keys_for_o",
    /* 4 */ "more_keys_for_u",
    /* 5 */ "more_keys_for_s",
    /* 6 */ "more_keys_for_n",
    /* 7 */ "more_keys_for_c",
    /* 8 */ "more_keys_for_y",
    /* 9 */ "more_keys_for_d",
    /* 10 */ "more_keys_for_r",
    /* 11 */ "more_keys_for_t",
    /* 12 */ "more_keys_for_z",
    /* 13 */ "more_keys_for_k",
    /* 14 */ "more_keys_for_l",
    /* 15 */ "more_keys_for_g",
    /* 16 */ "more_keys_for_v",
    /* 17 */ "more_keys_for_h",
    /* 18 */ "more_keys_for_j",
    /* 19 */ "more_keys_for_w",
    /* 20 */ "keylabel_for_nordic_row1_11",
    /* 21 */ "keylabel_for_nordic_row2_10",
    /* 22 */ "keylabel_for_nordic_row2_11",
    /* 23 */ "more_keys_for_nordic_row2_10",
    /* 24 */ "more_keys_for_nordic_row2_11",
    /* 25 */ "keylabel_for_east_slavic_row1_9",
    /* 26 */ "keylabel_for_east_slavic_row1_12",
    /* 27 */ "keylabel_for_east_slavic_row2_1",
    /* 28 */ "keylabel_for_east_slavic_row2_11",
    /* 29 */ "keylabel_for_east_slavic_row3_5",
    /* 30 */ "more_keys_for_cyrillic_u",
    /* 31 */ "more_keys_for_cyrillic_ka",
    /* 32 */ "more_keys_for_cyrillic_en",
    /* 33 */ "more_keys_for_cyrillic_ghe",
    /* 34 */ "more_keys_for_east_slavic_row2_1",
    /* 35 */ "more_keys_for_cyrillic_a",
    /* 36 */ "more_keys_for_cyrillic_o",
    /* 37 */ "more_keys_for_cyrillic_soft_sign",
    /* 38 */ "more_keys_for_east_slavic_row2_11",
    /* 39 */ "keylabel_for_south_slavic_row1_6",
    /* 40 */ "keylabel_for_south_slavic_row2_11",
    /* 41 */ "keylabel_for_south_slavic_row3_1",
    /* 42 */ "keylabel_for_south_slavic_row3_8",
    /* 43 */ "more_keys_for_cyrillic_ie",
    /* 44 */ "more_keys_for_cyrillic_i",
    /* 45 */ "label_to_alpha_key",
    /* 46 */ "single_quotes",
    /* 47 */ "double_quotes",
    /* 48 */ "single_angle_quotes",
    /* 49 */ "double_angle_quotes",
    /* 50 */ "more_keys_for_currency_dollar",
    /* 51 */ "keylabel_for_currency",
    /* 52 */ "more_keys_for_currency",
    /* 53 */ "more_keys_for_punctuation",
    /* 54 */ "more_keys_for_star",
    /* 55 */ "more_keys_for_bullet",
    /* 56 */ "more_keys_for_plus",
    /* 57 */ "more_keys_for_left_parenthesis",
    /* 58 */ "more_keys_for_right_parenthesis",
    /* 59 */ "more_keys_for_less_than",
    /* 60 */ "more_keys_for_greater_than",
    /* 61 */ "more_keys_for_arabic_diacritics",
    /* 62 */ "keyhintlabel_for_arabic_diacritics",
    /* 63 */ "keylabel_for_symbols_1",
    /* 64 */ "keylabel_for_symbols_2",
    /* 65 */ "keylabel_for_symbols_3",
    /* 66 */ "keylabel_for_symbols_4",
    /* 67 */ "keylabel_for_symbols_5",
    /* 68 */ "keylabel_for_symbols_6",
    /* 69 */ "keylabel_for_symbols_7",
    /* 70 */ "keylabel_for_symbols_8",
    /* 71 */ "keylabel_for_symbols_9",
    /* 72 */ "keylabel_for_symbols_0",
    /* 73 */ "label_to_symbol_key",
    /* 74 */ "label_to_symbol_with_microphone_key",
    /* 75 */ "additional_more_keys_for_symbols_1",
    /* 76 */ "additional_more_keys_for_symbols_2",
    /* 77 */ "additional_more_keys_for_symbols_3",
    /* 78 */ "additional_more_keys_for_symbols_4",
    /* 79 */ "additional_more_keys_for_symbols_5",
    /* 80 */ "additional_more_keys_for_symbols_6",
    /* 81 */ "additional_more_keys_for_symbols_7",
    /* 82 */ "additional_more_keys_for_symbols_8",
    /* 83 */ "additional_more_keys_for_symbols_9",
    /* 84 */ "additional_more_keys_for_symbols_0",
    /* 85 */ "more_keys_for_symbols_1",
    /* 86 */ "more_keys_for_symbols_2",
    /* 87 */ "more_keys_for_symbols_3",
    /* 88 */ "more_keys_for_symbols_4",
    /* 89 */ "more_keys_for_symbols_5",
    /* 90 */ "more_keys_for_symbols_6",
    /* 91 */ "more_keys_for_symbols_7",
    /* 92 */ "more_keys_for_symbols_8",
    /* 93 */ "more_keys_for_symbols_9",
    /* 94 */ "more_keys_for_symbols_0",
    /* 95 */ "keylabel_for_comma",
    /* 96 */ "more_keys_for_comma",
    /* 97 */ "keylabel_for_symbols_question",
    /* 98 */ "keylabel_for_symbols_semicolon",
    /* 99 */ "keylabel_for_symbols_percent",
    /* 100 */ "more_keys_for_symbols_exclamation",
    /* 101 */ "more_keys_for_symbols_question",
    /* 102 */ "more_keys_for_symbols_semicolon",
    /* 103 */ "more_keys_for_symbols_percent",
    /* 104 */ "keylabel_for_tablet_comma",
    /* 105 */ "keyhintlabel_for_tablet_comma",
    /* 106 */ "more_keys_for_tablet_comma",
    /* 107 */ "keyhintlabel_for_period",
    /* 108 */ "more_keys_for_period",
    /* 109 */ "keylabel_for_apostrophe",
    /* 110 */ "keyhintlabel_for_apostrophe",
    /* 111 */ "more_keys_for_apostrophe",
    /* 112 */ "more_keys_for_q",
    /* 113 */ "more_keys_for_x",
    /* 114 */ "keylabel_for_q",
    /* 115 */ "keylabel_for_w",
    /* 116 */ "keylabel_for_y",
    /* 117 */ "keylabel_for_x",
    /* 118 */ "keylabel_for_spanish_row2_10",
    /* 119 */ "more_keys_for_am_pm",
    /* 120 */ "settings_as_more_key",
    /* 121 */ "shortcut_as_more_key",
    /* 122 */ "action_next_as_more_key",
    /* 123 */ "action_previous_as_more_key",
    /* 124 */ "label_to_more_symbol_key",
    /* 125 */ "label_to_more_symbol_for_tablet_key",
    /* 126 */ "label_tab_key",
    /* 127 */ "label_to_phone_numeric_key",
    /* 128 */ "label_to_phone_symbols_key",
    /* 129 */ "label_time_am",
    /* 130 */ "label_time_pm",
    /* 131 */ "keylabel_for_popular_domain",
    /* 132 */ "more_keys_for_popular_domain",
    /* 133 */ "more_keys_for_smiley",
    /* 134 */ "single_laqm_raqm",
    /* 135 */ "single_laqm_raqm_rtl",
    /* 136 */ "single_raqm_laqm",
    /* 137 */ "double_laqm_raqm",
    /* 138 */ "double_laqm_raqm_rtl",
    /* 139 */ "double_raqm_laqm",
    /* 140 */ "single_lqm_rqm",
    /* 141 */ "single_9qm_lqm",
    /* 142 */ "single_9qm_rqm",
    /* 143 */ "double_lqm_rqm",
    /* 144 */ "double_9qm_lqm",
    /* 145 */ "double_9qm_rqm",
    /* 146 */ "more_keys_for_single_quote",
    /* 147 */ "more_keys_for_double_quote",
    /* 148 */ "more_keys_for_tablet_double_quote",
    /* 149 */ "emoji_key_as_more_key",
];

/// Dense index of a registered name. Only meaningful within one registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NameId(usize);

impl NameId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Whether `c` may appear in a text name.
pub fn is_name_char(c: u8) -> bool {
    c.is_ascii_lowercase() || c.is_ascii_digit() || c == b'_'
}

/// Immutable name → id index, built once from an ordered list.
#[derive(Debug, Clone)]
pub struct NameRegistry {
    names: Vec<Box<str>>,
    ids: HashMap<Box<str>, NameId>,
}

impl NameRegistry {
    /// Build a registry; ids follow the order of `names`.
    ///
    /// Duplicate or malformed names are data errors and reject the whole list.
    pub fn new<I, S>(names: I) -> Result<Self, KeyTextsError>
    where
        I: IntoIterator<Item = S>,
        S: Into<Box<str>>,
    {
        let names: Vec<Box<str>> = names.into_iter().map(Into::into).collect();
        let mut ids = HashMap::with_capacity(names.len());
        for (index, name) in names.iter().enumerate() {
            if name.is_empty() || !name.bytes().all(is_name_char) {
                return Err(KeyTextsError::InvalidName(name.to_string()));
            }
            if ids.insert(name.clone(), NameId(index)).is_some() {
                return Err(KeyTextsError::DuplicateName(name.to_string()));
            }
        }
        Ok(Self { names, ids })
    }

    /// Registry over the compiled-in [`NAMES`].
    pub fn builtin() -> Result<Self, KeyTextsError> {
        Self::new(NAMES.iter().copied())
    }

    pub fn id_of(&self, name: &str) -> Option<NameId> {
        self.ids.get(name).copied()
    }

    pub fn name(&self, id: NameId) -> Option<&str> {
        self.names.get(id.0).map(|n| &**n)
    }

    /// All names in id order.
    pub fn all_names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(|n| &**n)
    }

    /// `(id, name)` pairs in id order.
    pub fn iter(&self) -> impl Iterator<Item = (NameId, &str)> {
        self.names
            .iter()
            .enumerate()
            .map(|(i, n)| (NameId(i), &**n))
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_follow_registration_order() {
        let reg = NameRegistry::new(["alpha", "beta", "gamma_2"]).unwrap();
        assert_eq!(reg.len(), 3);
        assert_eq!(reg.id_of("alpha").map(NameId::index), Some(0));
        assert_eq!(reg.id_of("gamma_2").map(NameId::index), Some(2));
        assert_eq!(reg.name(NameId(1)), Some("beta"));
        assert_eq!(
            reg.all_names().collect::<Vec<_>>(),
            vec!["alpha", "beta", "gamma_2"]
        );
    }

    #[test]
    fn test_unknown_name_has_no_id() {
        let reg = NameRegistry::new(["alpha"]).unwrap();
        assert!(reg.id_of("beta").is_none());
        assert!(reg.id_of("").is_none());
        assert!(reg.name(NameId(5)).is_none());
    }

    #[test]
    fn test_duplicate_name_rejected() {
        let err = NameRegistry::new(["alpha", "beta", "alpha"]).unwrap_err();
        assert!(matches!(err, KeyTextsError::DuplicateName(ref n) if n == "alpha"));
    }

    #[test]
    fn test_malformed_name_rejected() {
        for bad in ["", "Upper", "with-dash", "sp ace", "é"] {
            let err = NameRegistry::new([bad]).unwrap_err();
            assert!(
                matches!(err, KeyTextsError::InvalidName(_)),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_builtin_registry_is_valid() {
        let reg = NameRegistry::builtin().unwrap();
        assert_eq!(reg.len(), NAMES.len());
        assert_eq!(reg.id_of("more_keys_for_a").map(NameId::index), Some(0));
        assert_eq!(reg.id_of("label_to_alpha_key").map(NameId::index), Some(45));
        assert_eq!(
            reg.id_of("emoji_key_as_more_key").map(NameId::index),
            Some(149)
        );
    }

    #[test]
    fn test_override_names_are_separate() {
        let reg = NameRegistry::builtin().unwrap();
        for name in OVERRIDE_NAMES {
            assert!(reg.id_of(name).is_none(), "{name} should not have an id");
            assert!(name.bytes().all(is_name_char));
        }
    }
}

//! Myanmar-script locales.

/// Mon.
pub(crate) const LANG_MNW: &[Option<&str>] = &[
    // 0..=44
    None, None, None, None, None, None, None, None, None, None, None, None,
    None, None, None, None, None, None, None, None, None, None, None, None,
    None, None, None, None, None, None, None, None, None, None, None, None,
    None, None, None, None, None, None, None, None, None,
    /* 45 */ Some("\u{1000}"),
    // 46..=62
    None, None, None, None, None, None, None, None, None, None, None, None,
    None, None, None, None, None,
    /* 63 */ Some("\u{1041}"),
    /* 64 */ Some("\u{1042}"),
    /* 65 */ Some("\u{1043}"),
    /* 66 */ Some("\u{1044}"),
    /* 67 */ Some("\u{1045}"),
    /* 68 */ Some("\u{1046}"),
    /* 69 */ Some("\u{1047}"),
    /* 70 */ Some("\u{1048}"),
    /* 71 */ Some("\u{1049}"),
    /* 72 */ Some("\u{1040}"),
    /* 73 */ Some("\u{1041}"),
    /* 74 */ None,
    /* 75 */ Some("1"),
    /* 76 */ Some("2"),
    /* 77 */ Some("3"),
    /* 78 */ Some("4"),
    /* 79 */ Some("5"),
    /* 80 */ Some("6"),
    /* 81 */ Some("7"),
    /* 82 */ Some("8"),
    /* 83 */ Some("9"),
    /* 84 */ Some("0"),
];

/// Burmese.
pub(crate) const LANG_MY: &[Option<&str>] = &[
    // 0..=44
    None, None, None, None, None, None, None, None, None, None, None, None,
    None, None, None, None, None, None, None, None, None, None, None, None,
    None, None, None, None, None, None, None, None, None, None, None, None,
    None, None, None, None, None, None, None, None, None,
    /* 45 */ Some("\u{1000}"),
    // 46..=62
    None, None, None, None, None, None, None, None, None, None, None, None,
    None, None, None, None, None,
    /* 63 */ Some("\u{1041}"),
    /* 64 */ Some("\u{1042}"),
    /* 65 */ Some("\u{1043}"),
    /* 66 */ Some("\u{1044}"),
    /* 67 */ Some("\u{1045}"),
    /* 68 */ Some("\u{1046}"),
    /* 69 */ Some("\u{1047}"),
    /* 70 */ Some("\u{1048}"),
    /* 71 */ Some("\u{1049}"),
    /* 72 */ Some("\u{1040}"),
    /* 73 */ Some("\u{1041}"),
    /* 74 */ None,
    /* 75 */ Some("1"),
    /* 76 */ Some("2"),
    /* 77 */ Some("3"),
    /* 78 */ Some("4"),
    /* 79 */ Some("5"),
    /* 80 */ Some("6"),
    /* 81 */ Some("7"),
    /* 82 */ Some("8"),
    /* 83 */ Some("9"),
    /* 84 */ Some("0"),
];

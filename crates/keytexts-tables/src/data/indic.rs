//! Indic-script locales. Most of these only localize the alphabet and
//! digit labels.

/// Assamese.
pub(crate) const LANG_AS: &[Option<&str>] = &[
    // 0..=44
    None, None, None, None, None, None, None, None, None, None, None, None,
    None, None, None, None, None, None, None, None, None, None, None, None,
    None, None, None, None, None, None, None, None, None, None, None, None,
    None, None, None, None, None, None, None, None, None,
    /* 45 */ Some("\u{0985}"),
    // 46..=62
    None, None, None, None, None, None, None, None, None, None, None, None,
    None, None, None, None, None,
    /* 63 */ Some("\u{09E7}"),
    /* 64 */ Some("\u{09E8}"),
    /* 65 */ Some("\u{09E9}"),
    /* 66 */ Some("\u{09EA}"),
    /* 67 */ Some("\u{09EB}"),
    /* 68 */ Some("\u{09EC}"),
    /* 69 */ Some("\u{09ED}"),
    /* 70 */ Some("\u{09EE}"),
    /* 71 */ Some("\u{09EF}"),
    /* 72 */ Some("\u{09E6}"),
    /* 73 */ Some("\u{09E7}\u{09E8}\u{09E9}"),
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

/// Bengali.
pub(crate) const LANG_BN: &[Option<&str>] = &[
    // 0..=44
    None, None, None, None, None, None, None, None, None, None, None, None,
    None, None, None, None, None, None, None, None, None, None, None, None,
    None, None, None, None, None, None, None, None, None, None, None, None,
    None, None, None, None, None, None, None, None, None,
    /* 45 */ Some("\u{0985}"),
    // 46..=62
    None, None, None, None, None, None, None, None, None, None, None, None,
    None, None, None, None, None,
    /* 63 */ Some("\u{09E7}"),
    /* 64 */ Some("\u{09E8}"),
    /* 65 */ Some("\u{09E9}"),
    /* 66 */ Some("\u{09EA}"),
    /* 67 */ Some("\u{09EB}"),
    /* 68 */ Some("\u{09EC}"),
    /* 69 */ Some("\u{09ED}"),
    /* 70 */ Some("\u{09EE}"),
    /* 71 */ Some("\u{09EF}"),
    /* 72 */ Some("\u{09E6}"),
    /* 73 */ Some("\u{09E7}\u{09E8}\u{09E9}"),
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

/// Hindi.
pub(crate) const LANG_HI: &[Option<&str>] = &[
    // 0..=44
    None, None, None, None, None, None, None, None, None, None, None, None,
    None, None, None, None, None, None, None, None, None, None, None, None,
    None, None, None, None, None, None, None, None, None, None, None, None,
    None, None, None, None, None, None, None, None, None,
    /* 45 */ Some("\u{0915}\u{0916}\u{0917}"),
    // 46..=50
    None, None, None, None, None,
    /* 51 */ Some("\u{20B9}"),
    // 52..=62
    None, None, None, None, None, None, None, None, None, None, None,
    /* 63 */ Some("\u{0967}"),
    /* 64 */ Some("\u{0968}"),
    /* 65 */ Some("\u{0969}"),
    /* 66 */ Some("\u{096A}"),
    /* 67 */ Some("\u{096B}"),
    /* 68 */ Some("\u{096C}"),
    /* 69 */ Some("\u{096D}"),
    /* 70 */ Some("\u{096E}"),
    /* 71 */ Some("\u{096F}"),
    /* 72 */ Some("\u{0966}"),
    /* 73 */ Some("?\u{0967}\u{0968}\u{0969}"),
    /* 74 */ Some("\u{0967}\u{0968}\u{0969}"),
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

/// Kannada.
pub(crate) const LANG_KN: &[Option<&str>] = &[
    // 0..=44
    None, None, None, None, None, None, None, None, None, None, None, None,
    None, None, None, None, None, None, None, None, None, None, None, None,
    None, None, None, None, None, None, None, None, None, None, None, None,
    None, None, None, None, None, None, None, None, None,
    /* 45 */ Some("\u{0C85}"),
    // 46..=62
    None, None, None, None, None, None, None, None, None, None, None, None,
    None, None, None, None, None,
    /* 63 */ Some("\u{0CE7}"),
    /* 64 */ Some("\u{0CE8}"),
    /* 65 */ Some("\u{0CE9}"),
    /* 66 */ Some("\u{0CEA}"),
    /* 67 */ Some("\u{0CEB}"),
    /* 68 */ Some("\u{0CEC}"),
    /* 69 */ Some("\u{0CED}"),
    /* 70 */ Some("\u{0CEE}"),
    /* 71 */ Some("\u{0CEF}"),
    /* 72 */ Some("\u{0CE6}"),
    /* 73 */ Some("\u{0CE7}\u{0CE8}\u{0CE9}"),
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

/// Malayalam.
pub(crate) const LANG_ML: &[Option<&str>] = &[
    // 0..=44
    None, None, None, None, None, None, None, None, None, None, None, None,
    None, None, None, None, None, None, None, None, None, None, None, None,
    None, None, None, None, None, None, None, None, None, None, None, None,
    None, None, None, None, None, None, None, None, None,
    /* 45 */ Some("\u{0D05}"),
    // 46..=74
    None, None, None, None, None, None, None, None, None, None, None, None,
    None, None, None, None, None, None, None, None, None, None, None, None,
    None, None, None, None, None,
    /* 75 */ Some("\u{0D67}"),
    /* 76 */ Some("\u{0D68}"),
    /* 77 */ Some("\u{0D69}"),
    /* 78 */ Some("\u{0D6A}"),
    /* 79 */ Some("\u{0D6B}"),
    /* 80 */ Some("\u{0D6C}"),
    /* 81 */ Some("\u{0D6D}"),
    /* 82 */ Some("\u{0D6E}"),
    /* 83 */ Some("\u{0D6F}"),
    /* 84 */ Some("\u{0D66}"),
];

/// Nepali.
pub(crate) const LANG_NE: &[Option<&str>] = &[
    // 0..=44
    None, None, None, None, None, None, None, None, None, None, None, None,
    None, None, None, None, None, None, None, None, None, None, None, None,
    None, None, None, None, None, None, None, None, None, None, None, None,
    None, None, None, None, None, None, None, None, None,
    /* 45 */ Some("\u{0915}\u{0916}\u{0917}"),
    // 46..=50
    None, None, None, None, None,
    /* 51 */ Some("\u{0930}\u{0941}."),
    // 52..=62
    None, None, None, None, None, None, None, None, None, None, None,
    /* 63 */ Some("\u{0967}"),
    /* 64 */ Some("\u{0968}"),
    /* 65 */ Some("\u{0969}"),
    /* 66 */ Some("\u{096A}"),
    /* 67 */ Some("\u{096B}"),
    /* 68 */ Some("\u{096C}"),
    /* 69 */ Some("\u{096D}"),
    /* 70 */ Some("\u{096E}"),
    /* 71 */ Some("\u{096F}"),
    /* 72 */ Some("\u{0966}"),
    /* 73 */ Some("?\u{0967}\u{0968}\u{0969}"),
    /* 74 */ Some("\u{0967}\u{0968}\u{0969}"),
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

/// Odia.
pub(crate) const LANG_OR: &[Option<&str>] = &[
    // 0..=44
    None, None, None, None, None, None, None, None, None, None, None, None,
    None, None, None, None, None, None, None, None, None, None, None, None,
    None, None, None, None, None, None, None, None, None, None, None, None,
    None, None, None, None, None, None, None, None, None,
    /* 45 */ Some("\u{0B05}"),
    // 46..=62
    None, None, None, None, None, None, None, None, None, None, None, None,
    None, None, None, None, None,
    /* 63 */ Some("\u{0B67}"),
    /* 64 */ Some("\u{0B68}"),
    /* 65 */ Some("\u{0B69}"),
    /* 66 */ Some("\u{0B6A}"),
    /* 67 */ Some("\u{0B6B}"),
    /* 68 */ Some("\u{0B6C}"),
    /* 69 */ Some("\u{0B6D}"),
    /* 70 */ Some("\u{0B6E}"),
    /* 71 */ Some("\u{0B6F}"),
    /* 72 */ Some("\u{0B66}"),
    /* 73 */ Some("\u{0B67}\u{0B68}\u{0B69}"),
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

/// Punjabi.
pub(crate) const LANG_PA: &[Option<&str>] = &[
    // 0..=44
    None, None, None, None, None, None, None, None, None, None, None, None,
    None, None, None, None, None, None, None, None, None, None, None, None,
    None, None, None, None, None, None, None, None, None, None, None, None,
    None, None, None, None, None, None, None, None, None,
    /* 45 */ Some("\u{0A05}"),
    // 46..=62
    None, None, None, None, None, None, None, None, None, None, None, None,
    None, None, None, None, None,
    /* 63 */ Some("\u{0A67}"),
    /* 64 */ Some("\u{0A68}"),
    /* 65 */ Some("\u{0A69}"),
    /* 66 */ Some("\u{0A6A}"),
    /* 67 */ Some("\u{0A6B}"),
    /* 68 */ Some("\u{0A6C}"),
    /* 69 */ Some("\u{0A6D}"),
    /* 70 */ Some("\u{0A6E}"),
    /* 71 */ Some("\u{0A6F}"),
    /* 72 */ Some("\u{0A66}"),
    /* 73 */ Some("\u{0A67}\u{0A68}\u{0A69}"),
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

/// Tamil.
pub(crate) const LANG_TA: &[Option<&str>] = &[
    // 0..=44
    None, None, None, None, None, None, None, None, None, None, None, None,
    None, None, None, None, None, None, None, None, None, None, None, None,
    None, None, None, None, None, None, None, None, None, None, None, None,
    None, None, None, None, None, None, None, None, None,
    /* 45 */ Some("\u{0B85}"),
    // 46..=62
    None, None, None, None, None, None, None, None, None, None, None, None,
    None, None, None, None, None,
    /* 63 */ Some("\u{0BE7}"),
    /* 64 */ Some("\u{0BE8}"),
    /* 65 */ Some("\u{0BE9}"),
    /* 66 */ Some("\u{0BEA}"),
    /* 67 */ Some("\u{0BEB}"),
    /* 68 */ Some("\u{0BEC}"),
    /* 69 */ Some("\u{0BED}"),
    /* 70 */ Some("\u{0BEE}"),
    /* 71 */ Some("\u{0BEF}"),
    /* 72 */ Some("\u{0BE6}"),
    /* 73 */ Some("\u{0BE7}\u{0BE8}\u{0BE9}"),
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

/// Telugu.
pub(crate) const LANG_TE: &[Option<&str>] = &[
    // 0..=44
    None, None, None, None, None, None, None, None, None, None, None, None,
    None, None, None, None, None, None, None, None, None, None, None, None,
    None, None, None, None, None, None, None, None, None, None, None, None,
    None, None, None, None, None, None, None, None, None,
    /* 45 */ Some("\u{0C05}"),
    // 46..=62
    None, None, None, None, None, None, None, None, None, None, None, None,
    None, None, None, None, None,
    /* 63 */ Some("\u{0C67}"),
    /* 64 */ Some("\u{0C68}"),
    /* 65 */ Some("\u{0C69}"),
    /* 66 */ Some("\u{0C6A}"),
    /* 67 */ Some("\u{0C6B}"),
    /* 68 */ Some("\u{0C6C}"),
    /* 69 */ Some("\u{0C6D}"),
    /* 70 */ Some("\u{0C6E}"),
    /* 71 */ Some("\u{0C6F}"),
    /* 72 */ Some("\u{0C66}"),
    /* 73 */ Some("\u{0C67}\u{0C68}\u{0C69}"),
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

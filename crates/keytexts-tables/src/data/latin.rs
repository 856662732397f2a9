//! Latin-script locales.

/// English.
pub(crate) const LANG_EN: &[Option<&str>] = &[
    /* 0 */ Some("\u{00E0},\u{00E1},\u{00E2},\u{00E4},\u{00E6},\u{00E3},\u{00E5},\u{0101}"),
    /* 1 */ Some("\u{00E8},\u{00E9},\u{00EA},\u{00EB},\u{0113}"),
    /* 2 */ Some("\u{00EE},\u{00EF},\u{00ED},\u{012B},\u{00EC}"),
    /* 3 */ Some("\u{00F4},\u{00F6},\u{00F2},\u{00F3},\u{0153},\u{00F8},\u{014D},\u{00F5}"),
    /* 4 */ Some("\u{00FB},\u{00FC},\u{00F9},\u{00FA},\u{016B}"),
    /* 5 */ Some("\u{00DF}"),
    /* 6 */ Some("\u{00F1}"),
    /* 7 */ Some("\u{00E7}"),
];

/// Alphabet.
pub(crate) const LANG_ZZ: &[Option<&str>] = &[
    /* 0 */ Some("\u{00E0},\u{00E1},\u{00E2},\u{00E3},\u{00E4},\u{00E5},\u{00E6},\u{00E3},\u{00E5},\u{0101},\u{0103},\u{0105},\u{00AA}"),
    /* 1 */ Some("\u{00E8},\u{00E9},\u{00EA},\u{00EB},\u{0113},\u{0115},\u{0117},\u{0119},\u{011B}"),
    /* 2 */ Some("\u{00EC},\u{00ED},\u{00EE},\u{00EF},\u{0129},\u{012B},\u{012D},\u{012F},\u{0131},\u{0133}"),
    /* 3 */ Some("\u{00F2},\u{00F3},\u{00F4},\u{00F5},\u{00F6},\u{00F8},\u{014D},\u{014F},\u{0151},\u{0153},\u{00BA}"),
    /* 4 */ Some("\u{00F9},\u{00FA},\u{00FB},\u{00FC},\u{0169},\u{016B},\u{016D},\u{016F},\u{0171},\u{0173}"),
    /* 5 */ Some("\u{00DF},\u{015B},\u{015D},\u{015F},\u{0161},\u{017F}"),
    /* 6 */ Some("\u{00F1},\u{0144},\u{0146},\u{0148},\u{0149},\u{014B}"),
    /* 7 */ Some("\u{00E7},\u{0107},\u{0109},\u{010B},\u{010D}"),
    /* 8 */ Some("\u{00FD},\u{0177},\u{00FF},\u{0133}"),
    /* 9 */ Some("\u{010F},\u{0111},\u{00F0}"),
    /* 10 */ Some("\u{0155},\u{0157},\u{0159}"),
    /* 11 */ Some("\u{00FE},\u{0163},\u{0165},\u{0167}"),
    /* 12 */ Some("\u{017A},\u{017C},\u{017E}"),
    /* 13 */ Some("\u{0137},\u{0138}"),
    /* 14 */ Some("\u{013A},\u{013C},\u{013E},\u{0140},\u{0142}"),
    /* 15 */ Some("\u{011D},\u{011F},\u{0121},\u{0123}"),
    /* 16 */ None,
    /* 17 */ Some("\u{0125}"),
    /* 18 */ Some("\u{0135}"),
    /* 19 */ Some("\u{0175}"),
];

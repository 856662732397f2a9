//! Fallback table used when a locale leaves a slot empty.

use super::EMPTY;

/// Fallback texts; one slot per name.
pub(crate) const DEFAULT: &[Option<&str>] = &[
    // 0..=44
    EMPTY, EMPTY, EMPTY, EMPTY, EMPTY, EMPTY, EMPTY, EMPTY, EMPTY, EMPTY,
    EMPTY, EMPTY, EMPTY, EMPTY, EMPTY, EMPTY, EMPTY, EMPTY, EMPTY, EMPTY,
    EMPTY, EMPTY, EMPTY, EMPTY, EMPTY, EMPTY, EMPTY, EMPTY, EMPTY, EMPTY,
    EMPTY, EMPTY, EMPTY, EMPTY, EMPTY, EMPTY, EMPTY, EMPTY, EMPTY, EMPTY,
    EMPTY, EMPTY, EMPTY, EMPTY, EMPTY,
    /* 45 */ Some("ABC"),
    /* 46 */ Some("!text/single_lqm_rqm"),
    /* 47 */ Some("!text/double_lqm_rqm"),
    /* 48 */ Some("!text/single_laqm_raqm"),
    /* 49 */ Some("!text/double_laqm_raqm"),
    /* 50 */ Some("$,\u{00A2},\u{00A3},\u{20AC},\u{00A5},\u{20B1}"),
    /* 51 */ Some("$"),
    /* 52 */ Some("$,\u{00A2},\u{20AC},\u{00A3},\u{00A5},\u{20B1}"),
    /* 53 */ Some("!fixedColumnOrder!8,;,/,(,),#,!,\\,,?,&,\\%,+,\",-,:,',@"),
    /* 54 */ Some("\u{2020},\u{2021},\u{2605}"),
    /* 55 */ Some("\u{266A},\u{2665},\u{2660},\u{2666},\u{2663}"),
    /* 56 */ Some("\u{00B1}"),
    /* 57 */ Some("!fixedColumnOrder!3,<,{,["),
    /* 58 */ Some("!fixedColumnOrder!3,>,},]"),
    /* 59 */ Some("!fixedColumnOrder!3,\u{2039},\u{2264},\u{00AB}"),
    /* 60 */ Some("!fixedColumnOrder!3,\u{203A},\u{2265},\u{00BB}"),
    /* 61 */ EMPTY,
    /* 62 */ EMPTY,
    /* 63 */ Some("1"),
    /* 64 */ Some("2"),
    /* 65 */ Some("3"),
    /* 66 */ Some("4"),
    /* 67 */ Some("5"),
    /* 68 */ Some("6"),
    /* 69 */ Some("7"),
    /* 70 */ Some("8"),
    /* 71 */ Some("9"),
    /* 72 */ Some("0"),
    /* 73 */ Some("?123"),
    /* 74 */ Some("123"),
    // 75..=84
    EMPTY, EMPTY, EMPTY, EMPTY, EMPTY, EMPTY, EMPTY, EMPTY, EMPTY, EMPTY,
    /* 85 */ Some("\u{00B9},\u{00BD},\u{2153},\u{00BC},\u{215B}"),
    /* 86 */ Some("\u{00B2},\u{2154}"),
    /* 87 */ Some("\u{00B3},\u{00BE},\u{215C}"),
    /* 88 */ Some("\u{2074}"),
    /* 89 */ Some("\u{215D}"),
    /* 90 */ EMPTY,
    /* 91 */ Some("\u{215E}"),
    /* 92 */ EMPTY,
    /* 93 */ EMPTY,
    /* 94 */ Some("\u{207F},\u{2205}"),
    /* 95 */ Some(","),
    /* 96 */ EMPTY,
    /* 97 */ Some("?"),
    /* 98 */ Some(";"),
    /* 99 */ Some("%"),
    /* 100 */ Some("\u{00A1}"),
    /* 101 */ Some("\u{00BF}"),
    /* 102 */ EMPTY,
    /* 103 */ Some("\u{2030}"),
    /* 104 */ Some(","),
    // 105..=107
    EMPTY, EMPTY, EMPTY,
    /* 108 */ Some("\u{2026}"),
    /* 109 */ Some("'"),
    /* 110 */ Some("\""),
    /* 111 */ Some("\""),
    /* 112 */ EMPTY,
    /* 113 */ EMPTY,
    /* 114 */ Some("q"),
    /* 115 */ Some("w"),
    /* 116 */ Some("y"),
    /* 117 */ Some("x"),
    /* 118 */ EMPTY,
    /* 119 */ Some("!fixedColumnOrder!2,!hasLabels!,!text/label_time_am,!text/label_time_pm"),
    /* 120 */ Some("!icon/settings_key|!code/key_settings"),
    /* 121 */ Some("!icon/shortcut_key|!code/key_shortcut"),
    /* 122 */ Some("!hasLabels!,!text/label_next_key|!code/key_action_next"),
    /* 123 */ Some("!hasLabels!,!text/label_previous_key|!code/key_action_previous"),
    /* 124 */ Some("= \\ <"),
    /* 125 */ Some("~ [ <"),
    /* 126 */ Some("Tab"),
    /* 127 */ Some("123"),
    /* 128 */ Some("\u{FF0A}\u{FF03}"),
    /* 129 */ Some("AM"),
    /* 130 */ Some("PM"),
    /* 131 */ Some(".com"),
    /* 132 */ Some("!hasLabels!,.net,.org,.gov,.edu"),
    /* 133 */ Some("!fixedColumnOrder!5,!hasLabels!,:)|:) ,;)|;) ,:(|:( ,:D|:D ,:P|:P ,^^|^^ ,-_-|-_- ,=-O|=-O ,:-P|:-P ,;-)|;-) ,:-(|:-( ,:-)|:-) ,:-!|:-! ,:-$|:-$ ,B-)|B-) ,:O|:O ,:-*|:-* ,:-D|:-D ,:'(|:'( ,:-\\\\|:-\\\\ ,O:-)|O:-) ,:-[|:-[ "),
    /* 134 */ Some("\u{2039},\u{203A}"),
    /* 135 */ Some("\u{2039}|\u{203A},\u{203A}|\u{2039}"),
    /* 136 */ Some("\u{203A},\u{2039}"),
    /* 137 */ Some("\u{00AB},\u{00BB}"),
    /* 138 */ Some("\u{00AB}|\u{00BB},\u{00BB}|\u{00AB}"),
    /* 139 */ Some("\u{00BB},\u{00AB}"),
    /* 140 */ Some("\u{201A},\u{2018},\u{2019}"),
    /* 141 */ Some("\u{2019},\u{201A},\u{2018}"),
    /* 142 */ Some("\u{2018},\u{201A},\u{2019}"),
    /* 143 */ Some("\u{201E},\u{201C},\u{201D}"),
    /* 144 */ Some("\u{201D},\u{201E},\u{201C}"),
    /* 145 */ Some("\u{201C},\u{201E},\u{201D}"),
    /* 146 */ Some("!fixedColumnOrder!5,!text/single_quotes,!text/single_angle_quotes"),
    /* 147 */ Some("!fixedColumnOrder!5,!text/double_quotes,!text/double_angle_quotes"),
    /* 148 */ Some("!fixedColumnOrder!6,!text/double_quotes,!text/single_quotes,!text/double_angle_quotes,!text/single_angle_quotes"),
    /* 149 */ Some("!icon/emoji_key|!code/key_emoji"),
];

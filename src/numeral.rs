use crate::node::NumberingStyle;

/// Largest value with a standard Roman form.
const ROMAN_MAX: i64 = 3999;

const ROMAN_DIGITS: &[(i64, &str)] = &[
    (1000, "M"),
    (900, "CM"),
    (500, "D"),
    (400, "CD"),
    (100, "C"),
    (90, "XC"),
    (50, "L"),
    (40, "XL"),
    (10, "X"),
    (9, "IX"),
    (5, "V"),
    (4, "IV"),
    (1, "I"),
];

/// Convert to an upper-case Roman numeral.
///
/// Zero and negative values produce an empty string. Values above 3999 have no
/// standard form and are written in decimal instead.
pub fn to_roman(n: i64) -> String {
    if n > ROMAN_MAX {
        return n.to_string();
    }

    let mut out = String::new();
    let mut rest = n;
    for &(value, digits) in ROMAN_DIGITS {
        while rest >= value {
            out.push_str(digits);
            rest -= value;
        }
    }
    out
}

fn alpha(base: char, n: i64) -> String {
    // Past 26 this keeps counting through the code points after 'z'/'Z'
    let ch = (base as i64 - 1)
        .checked_add(n)
        .and_then(|code| u32::try_from(code).ok())
        .and_then(char::from_u32)
        .unwrap_or(char::REPLACEMENT_CHARACTER);
    ch.to_string()
}

/// Render `n` as a marker in the given style.
pub fn format(style: NumberingStyle, n: i64) -> String {
    match style {
        NumberingStyle::Arabic => n.to_string(),
        NumberingStyle::RomanUpper => to_roman(n),
        NumberingStyle::RomanLower => to_roman(n).to_lowercase(),
        NumberingStyle::AlphaUpper => alpha('A', n),
        NumberingStyle::AlphaLower => alpha('a', n),
    }
}

/// Display width of a rendered marker, in characters.
pub fn width(marker: &str) -> usize {
    marker.chars().count()
}

/// Widest marker among `1..=n`.
pub fn longest_width(style: NumberingStyle, n: i64) -> usize {
    match style {
        NumberingStyle::Arabic => width(&n.to_string()),
        NumberingStyle::AlphaUpper | NumberingStyle::AlphaLower => 1,
        NumberingStyle::RomanUpper | NumberingStyle::RomanLower => (1..=n)
            .map(|i| width(&to_roman(i)))
            .max()
            .unwrap_or(0),
    }
}

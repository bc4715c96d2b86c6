//! Locale-aware number formatting for display.
//!
//! Only separators vary by locale; data values themselves are never
//! translated. Locales are matched on their language subtag (with a few
//! region overrides) and anything unknown is formatted the English way.

/// Separator conventions for a locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Separators {
    group: &'static str,
    decimal: char,
    /// Integers with fewer digits than this are not grouped
    min_grouping_digits: usize,
}

const ENGLISH: Separators = Separators {
    group: ",",
    decimal: '.',
    min_grouping_digits: 4,
};

fn separators(locale: &str) -> Separators {
    let normalized = locale.replace('_', "-").to_lowercase();
    let mut parts = normalized.split('-');
    let language = parts.next().unwrap_or("");
    let region = parts.next().unwrap_or("");

    match (language, region) {
        ("de", "ch") | ("it", "ch") => Separators {
            group: "\u{2019}",
            decimal: '.',
            min_grouping_digits: 4,
        },
        ("es", _) | ("pl", _) => Separators {
            group: ".",
            decimal: ',',
            min_grouping_digits: 5,
        },
        ("pt", "pt") => Separators {
            group: "\u{a0}",
            decimal: ',',
            min_grouping_digits: 5,
        },
        ("de", _) | ("it", _) | ("nl", _) | ("pt", _) | ("id", _) | ("tr", _) | ("da", _)
        | ("el", _) | ("ro", _) | ("hr", _) => Separators {
            group: ".",
            decimal: ',',
            min_grouping_digits: 4,
        },
        ("fr", _) => Separators {
            group: "\u{202f}",
            decimal: ',',
            min_grouping_digits: 4,
        },
        ("ru", _) | ("uk", _) | ("cs", _) | ("sk", _) | ("sv", _) | ("fi", _) | ("nb", _)
        | ("no", _) | ("bg", _) | ("hu", _) => Separators {
            group: "\u{a0}",
            decimal: ',',
            min_grouping_digits: 4,
        },
        _ => ENGLISH,
    }
}

/// Round to the nearest integer (halves towards positive infinity) and
/// group thousands, e.g. `1234567.6` -> `"1,234,568"` in `en-US`.
pub fn format_number(num: f64, locale: &str) -> String {
    format_fixed(round_half_up(num), 0, separators(locale))
}

/// Format a percentage value (already in percent).
///
/// Non-zero values below 0.5 would round to "0", so they are rounded up to
/// one decimal instead: `0.01` -> `"0.1"`.
pub fn format_percentage_number(percentage: f64, locale: &str) -> String {
    if percentage < 0.5 && percentage != 0.0 {
        let rounded = (percentage * 10.0).ceil() / 10.0;
        format_fixed(rounded, 1, separators(locale))
    } else {
        format_number(percentage, locale)
    }
}

/// Format a speaker fraction (`0.905`) as a percentage with at most one
/// decimal (`"90.5"`); whole percentages have none (`0.9` -> `"90"`).
pub fn format_language_percentage(fraction: f64, locale: &str) -> String {
    let value = round_half_up(fraction * 1000.0) / 10.0;
    let decimals = if value.fract() == 0.0 { 0 } else { 1 };
    format_fixed(value, decimals, separators(locale))
}

/// Upper-case the first character, leaving the rest untouched.
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

fn format_fixed(value: f64, decimals: usize, separators: Separators) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "∞" } else { "-∞" }.to_string();
    }

    let formatted = format!("{:.*}", decimals, value.abs());
    let (integer, fraction) = match formatted.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (formatted.as_str(), None),
    };

    let mut result = String::new();
    if value < 0.0 && formatted.chars().any(|c| c.is_ascii_digit() && c != '0') {
        result.push('-');
    }
    result.push_str(&group_digits(integer, separators));

    if let Some(fraction) = fraction {
        result.push(separators.decimal);
        result.push_str(fraction);
    }

    result
}

fn group_digits(integer: &str, separators: Separators) -> String {
    if integer.len() < separators.min_grouping_digits {
        return integer.to_string();
    }

    let mut grouped = String::new();
    for (i, digit) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i) % 3 == 0 {
            grouped.push_str(separators.group);
        }
        grouped.push(digit);
    }
    grouped
}

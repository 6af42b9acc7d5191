//! Display formatting for evaluation records.
//!
//! Missing values never raise errors; each field has a fixed placeholder.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

pub const NOT_SPECIFIED: &str = "Not specified";
pub const NOT_AVAILABLE: &str = "N/A";

/// `professional_training` → `Professional Training`.
pub fn training_type_label(raw: Option<&str>) -> String {
    let Some(raw) = non_blank(raw) else {
        return NOT_SPECIFIED.to_owned();
    };
    raw.split(|c: char| c == '_' || c == '-' || c.is_whitespace())
        .filter(|word| !word.is_empty())
        .map(|word| {
            let lower = word.to_lowercase();
            capitalize(&lower)
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// `high` → `High`.
pub fn relevance_label(raw: Option<&str>) -> String {
    non_blank(raw).map_or_else(|| NOT_SPECIFIED.to_owned(), capitalize)
}

/// Working hours with thousands separators; zero and absent render as `N/A`.
pub fn hours_label(hours: Option<f64>) -> String {
    match hours {
        Some(h) if h.is_finite() && h != 0.0 => {
            #[allow(clippy::cast_possible_truncation)]
            let whole = h.trunc() as i64;
            group_thousands(whole)
        }
        _ => NOT_AVAILABLE.to_owned(),
    }
}

/// `30` → `30 ECTS`, `2.5` → `2.5 ECTS`, absent → `0 ECTS`.
pub fn credits_label(credits: Option<f64>) -> String {
    format!("{} ECTS", plain_number(credits.unwrap_or(0.0)))
}

/// Render a number without a trailing `.0` when it is integral.
pub fn plain_number(value: f64) -> String {
    if value.fract() == 0.0 && value.is_finite() {
        #[allow(clippy::cast_possible_truncation)]
        let whole = value as i64;
        whole.to_string()
    } else {
        value.to_string()
    }
}

/// The value itself when present and non-blank, otherwise `fallback`.
pub fn or_placeholder(value: Option<&str>, fallback: &str) -> String {
    non_blank(value).unwrap_or(fallback).to_owned()
}

fn group_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

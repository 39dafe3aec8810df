//! Number formatting shared by the console and HTML renderers, so both show
//! identical figures.

pub const MISSING: &str = "N/A";

/// Groups digits in threes: `1234567` becomes `1,234,567`.
#[must_use]
pub fn thousands(value: i64) -> String {
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

#[must_use]
pub fn opt_thousands(value: Option<i64>) -> String {
    value.map_or_else(|| MISSING.to_string(), thousands)
}

/// Whole-number figure stored as a float (rounded means, quartiles).
#[must_use]
pub fn opt_count(value: Option<f64>) -> String {
    #[allow(clippy::cast_possible_truncation)]
    value.map_or_else(|| MISSING.to_string(), |v| thousands(v.round() as i64))
}

#[must_use]
pub fn fixed(value: f64, places: usize) -> String {
    format!("{value:.places$}")
}

#[must_use]
pub fn opt_fixed(value: Option<f64>, places: usize) -> String {
    value.map_or_else(|| MISSING.to_string(), |v| fixed(v, places))
}

#[must_use]
pub fn signed(value: f64, places: usize) -> String {
    format!("{value:+.places$}")
}

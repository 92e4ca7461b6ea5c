//! Number formatting helpers for summary text.

/// Groups an integer with commas every three digits: 45000 -> "45,000".
pub fn format_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Formats a currency amount rounded to whole units: 45000.0 -> "$45,000".
pub fn format_currency(value: f64) -> String {
    format!("${}", format_thousands(value.round().max(0.0) as u64))
}

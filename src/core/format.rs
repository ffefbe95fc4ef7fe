//! Currency and percentage formatting for display.

/// Formats `value` as `$#,##0.00`.
///
/// Negative amounts keep the sign after the symbol (`$-1,234.50`), which is
/// how the report has always rendered them.
pub fn format_currency(value: f64, symbol: &str) -> String {
    format!("{symbol}{}", group_thousands(&format!("{value:.2}")))
}

/// Formats a value already expressed in percent as `0.00%`.
pub fn format_percent(value: f64) -> String {
    format!("{value:.2}%")
}

fn group_thousands(fixed: &str) -> String {
    let (sign, unsigned) = match fixed.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", fixed),
    };
    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (unsigned, None),
    };
    // inf and NaN pass through untouched
    if !int_part.bytes().all(|b| b.is_ascii_digit()) {
        return fixed.to_string();
    }

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, c) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    match frac_part {
        Some(f) => format!("{sign}{grouped}.{f}"),
        None => format!("{sign}{grouped}"),
    }
}

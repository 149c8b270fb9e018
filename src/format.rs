// Display formatting for menu values
//
// The menu core stores plain numbers; currency symbols and placeholders are
// applied here, at render time only.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Shown in place of an empty description
pub const NO_DESCRIPTION: &str = "No description";

/// Format a dish price for list rows: symbol, space, two decimals
///
/// # Examples
/// ```
/// use menucard::format::format_price;
/// assert_eq!(format_price(120.0, "R"), "R 120.00");
/// ```
pub fn format_price(value: f64, symbol: &str) -> String {
    format!("{} {:.2}", symbol, value)
}

/// Format an average for the summary panel: symbol glued to the amount
///
/// # Examples
/// ```
/// use menucard::format::format_average;
/// assert_eq!(format_average(75.0, "R"), "R75.00");
/// ```
pub fn format_average(value: f64, symbol: &str) -> String {
    format!("{}{:.2}", symbol, value)
}

/// The description itself, or the placeholder when it is empty
pub fn description_or_placeholder(description: &str) -> &str {
    if description.is_empty() {
        NO_DESCRIPTION
    } else {
        description
    }
}

/// Truncate to at most `max_width` terminal columns, ending with '…' when cut
pub fn truncate_display(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    // Reserve one column for the ellipsis
    let budget = max_width - 1;
    let mut width = 0;
    let mut out = String::new();
    for ch in s.chars() {
        let w = ch.width().unwrap_or(0);
        if width + w > budget {
            break;
        }
        width += w;
        out.push(ch);
    }
    out.push('…');
    out
}

//! Display formatting for prices, discounts and post excerpts.

use regex::Regex;
use std::sync::LazyLock;

static HTML_TAG: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"<[^>]*>?").ok());

/// Shown instead of an excerpt when a post has no content.
pub const NO_DESCRIPTION: &str = "Không có mô tả";

/// Groups the digits of a price with `,` every three places.
///
/// Every non-digit of the number's textual form is dropped first, and zero
/// renders as an empty string.
#[must_use]
pub fn format_price(price: f64) -> String {
    if price == 0.0 || !price.is_finite() {
        return String::new();
    }
    let digits: String = js_number_text(price)
        .chars()
        .filter(char::is_ascii_digit)
        .collect();
    group_digits(&digits, ',')
}

/// `-N%` where `N = round((price - sale) / price * 100)`, when both prices are
/// present and non-zero.
#[must_use]
pub fn discount_badge(price: f64, sale: Option<f64>) -> Option<String> {
    let sale = sale.filter(|s| *s != 0.0)?;
    if price == 0.0 {
        return None;
    }
    let percent = ((price - sale) / price).mul_add(100.0, 0.5).floor();
    Some(format!("-{percent}%"))
}

/// Vietnamese currency format: `1.234.567 ₫` (no-break space before the sign).
#[must_use]
pub fn format_vnd(amount: f64) -> String {
    let rounded = amount.round();
    let digits = js_number_text(rounded.abs());
    let sign = if rounded < 0.0 { "-" } else { "" };
    format!("{sign}{}\u{a0}₫", group_digits(&digits, '.'))
}

/// Removes HTML tags, including a dangling unterminated one at the end.
#[must_use]
pub fn strip_html(html: &str) -> String {
    HTML_TAG
        .as_ref()
        .map_or_else(|| html.to_string(), |re| re.replace_all(html, "").into_owned())
}

/// First `max_chars` characters of the text content followed by `...`, or
/// the no-description text when the post is empty.
#[must_use]
pub fn excerpt(html: &str, max_chars: usize) -> String {
    if html.is_empty() {
        return NO_DESCRIPTION.to_string();
    }
    let text: String = strip_html(html).chars().take(max_chars).collect();
    format!("{text}...")
}

/// Integral values print without a fractional part.
fn js_number_text(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{value:.0}")
    } else {
        value.to_string()
    }
}

fn group_digits(digits: &str, separator: char) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(c);
    }
    out
}

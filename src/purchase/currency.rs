//! Currency rendering for purchase tweets.

/// Currency assumed when a purchase does not name one.
pub const DEFAULT_CURRENCY: &str = "NGN";

const NAIRA_SIGN: char = '₦';

/// Fraction digits kept before trailing zeros are dropped.
const MAX_FRACTION_DIGITS: usize = 3;

/// Renders `amount` in `currency` for display in a tweet.
///
/// Naira amounts get the `₦` sign; every other code is written as a
/// prefix followed by a space. The integer part is grouped in thousands
/// with `,` and at most three fraction digits are kept, with trailing
/// zeros removed.
///
/// # Example
///
/// ```
/// use tweet_notify::purchase::format_currency;
///
/// assert_eq!(format_currency(500_000.0, "NGN"), "₦500,000");
/// assert_eq!(format_currency(100.0, "USD"), "USD 100");
/// assert_eq!(format_currency(1234.5, "NGN"), "₦1,234.5");
/// ```
#[must_use]
pub fn format_currency(amount: f64, currency: &str) -> String {
    let grouped = group_amount(amount);

    if currency == DEFAULT_CURRENCY {
        format!("{NAIRA_SIGN}{grouped}")
    } else {
        format!("{currency} {grouped}")
    }
}

fn group_amount(amount: f64) -> String {
    if amount.is_nan() {
        return "NaN".to_string();
    }
    if amount.is_infinite() {
        let rendered = if amount.is_sign_positive() { "∞" } else { "-∞" };
        return rendered.to_string();
    }

    let fixed = format!("{:.*}", MAX_FRACTION_DIGITS, amount.abs());
    let (integer, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let fraction = fraction.trim_end_matches('0');

    // -0.0001 rounds to zero and is shown unsigned
    let rounds_to_zero = fraction.is_empty() && integer.bytes().all(|b| b == b'0');

    let mut out = String::with_capacity(fixed.len() + integer.len() / 3 + 1);
    if amount.is_sign_negative() && !rounds_to_zero {
        out.push('-');
    }
    out.push_str(&group_thousands(integer));
    if !fraction.is_empty() {
        out.push('.');
        out.push_str(fraction);
    }
    out
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut grouped = String::with_capacity(len + len / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    grouped
}

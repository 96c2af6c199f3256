use crate::config::MAX_AMOUNT_DIGITS;
use crate::error::Rejection;

/// Applies an edit to the amount field. Anything that is not a short run of
/// ASCII digits is refused and the current value is kept.
pub fn accept_amount_input(current: &str, proposed: &str) -> String {
    let ok = proposed.len() <= MAX_AMOUNT_DIGITS && proposed.chars().all(|c| c.is_ascii_digit());
    if ok {
        proposed.to_string()
    } else {
        current.to_string()
    }
}

pub fn parse_amount(raw: &str) -> Result<u32, Rejection> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(Rejection::AmountMissing);
    }
    if raw.len() > MAX_AMOUNT_DIGITS || !raw.chars().all(|c| c.is_ascii_digit()) {
        return Err(Rejection::AmountInvalid);
    }
    match raw.parse::<u32>() {
        Ok(0) | Err(_) => Err(Rejection::AmountInvalid),
        Ok(v) => Ok(v),
    }
}

pub fn format_amount(amount: u64) -> String {
    format!("{} VAD", format_with_commas(amount))
}

pub fn format_with_commas(n: u64) -> String {
    let s = n.to_string();
    let len = s.len();
    let mut result = String::with_capacity(len + len / 3);

    for (i, ch) in s.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            result.push(',');
        }
        result.push(ch);
    }
    result
}

pub fn short_hash(hash: &str) -> String {
    const KEEP: usize = 12;
    if hash.chars().count() <= KEEP {
        hash.to_string()
    } else {
        let head: String = hash.chars().take(KEEP).collect();
        format!("{}…", head)
    }
}

//! Digit masks for the registration forms.
//!
//! Every formatter here only looks at the digits of its input, so feeding it
//! text it already formatted gives the same text back.

pub const CPF_MASK: &str = "999.999.999-99";
pub const DATE_MASK: &str = "99/99/9999";
pub const HEIGHT_MASK: &str = "9,99";
pub const WEIGHT_MASK: &str = "99,99";

const DIGIT_SLOT: char = '9';

pub fn unmask(text: &str) -> String {
    text.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Fills `pattern` left to right with the digits of `text`.
///
/// A literal is only written when another digit follows it, and digits beyond
/// the pattern's capacity are dropped.
pub fn apply_mask(pattern: &str, text: &str) -> String {
    let mut digits = text.chars().filter(|c| c.is_ascii_digit()).peekable();
    let mut out = String::with_capacity(pattern.len());

    for slot in pattern.chars() {
        if digits.peek().is_none() {
            break;
        }
        if slot == DIGIT_SLOT {
            if let Some(d) = digits.next() {
                out.push(d);
            }
        } else {
            out.push(slot);
        }
    }

    out
}

/// Brazilian phone layout: `(DD`, `(DD) NNNN`, `(DD) NNNN-NNNN` for landlines
/// and `(DD) NNNNN-NNNN` once an eleventh digit appears.
pub fn format_phone(text: &str) -> String {
    let digits = unmask(text);
    let n = digits.len();

    match n {
        0 => String::new(),
        1..=2 => format!("({}", digits),
        3..=6 => format!("({}) {}", &digits[..2], &digits[2..]),
        7..=10 => format!("({}) {}-{}", &digits[..2], &digits[2..6], &digits[6..]),
        _ => format!("({}) {}-{}", &digits[..2], &digits[2..7], &digits[7..11]),
    }
}

//! CPF (Cadastro de Pessoas Físicas) checksum validation.

use crate::registration::mask::{apply_mask, unmask, CPF_MASK};

pub const CPF_LEN: usize = 11;

/// Check digit over the first `len` digits with weights `len+1 ..= 2`.
fn check_digit(digits: &[u32], len: usize) -> u32 {
    let sum: u32 = digits
        .iter()
        .take(len)
        .enumerate()
        .map(|(i, d)| d * (len as u32 + 1 - i as u32))
        .sum();
    let rest = (sum * 10) % 11;
    if rest == 10 {
        0
    } else {
        rest
    }
}

/// Validates a CPF in raw (`11144477735`) or masked (`111.444.777-35`) form.
///
/// Separators are stripped first; anything else that is not a digit, a wrong
/// length, or eleven identical digits fails before any checksum work.
pub fn is_valid_cpf(text: &str) -> bool {
    if text
        .chars()
        .any(|c| !c.is_ascii_digit() && !matches!(c, '.' | '-' | ' '))
    {
        return false;
    }

    let digits: Vec<u32> = text.chars().filter_map(|c| c.to_digit(10)).collect();
    if digits.len() != CPF_LEN {
        return false;
    }
    if digits.iter().all(|d| *d == digits[0]) {
        return false;
    }

    check_digit(&digits, 9) == digits[9] && check_digit(&digits, 10) == digits[10]
}

/// Digits-only CPF, the form used as the lookup key for patients.
pub fn normalize_cpf(text: &str) -> String {
    unmask(text)
}

pub fn format_cpf(text: &str) -> String {
    apply_mask(CPF_MASK, text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_valid_cpf() {
        assert!(is_valid_cpf("11144477735"));
        assert!(is_valid_cpf("111.444.777-35"));
        assert!(is_valid_cpf("529.982.247-25"));
    }

    #[test]
    fn test_wrong_check_digits() {
        assert!(!is_valid_cpf("11144477736"));
        assert!(!is_valid_cpf("11144477725"));
    }

    #[test]
    fn test_repeated_digits() {
        for d in 0..=9 {
            let cpf = d.to_string().repeat(CPF_LEN);
            assert!(!is_valid_cpf(&cpf), "{} should be rejected", cpf);
        }
    }

    #[test]
    fn test_wrong_length_and_garbage() {
        assert!(!is_valid_cpf("123"));
        assert!(!is_valid_cpf(""));
        assert!(!is_valid_cpf("111444777350"));
        assert!(!is_valid_cpf("1114447773a"));
        assert!(!is_valid_cpf("111/444/777-35"));
    }

    #[test]
    fn test_check_digit_ten_maps_to_zero() {
        // sum = 2, 20 % 11 = 9
        assert_eq!(check_digit(&[0, 0, 0, 0, 0, 0, 0, 0, 1], 9), 9);
        // sum = 10 + 2, 120 % 11 = 10
        assert_eq!(check_digit(&[1, 0, 0, 0, 0, 0, 0, 0, 1], 9), 0);
    }

    #[test]
    fn test_format_and_normalize() {
        assert_eq!(format_cpf("11144477735"), "111.444.777-35");
        assert_eq!(normalize_cpf("111.444.777-35"), "11144477735");
    }
}

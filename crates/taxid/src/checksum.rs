//! Weighted mod-11 check digits.

use core::iter;

pub(crate) const CPF_FIRST_WEIGHTS: [u32; 9] = [10, 9, 8, 7, 6, 5, 4, 3, 2];
pub(crate) const CPF_SECOND_WEIGHTS: [u32; 10] = [11, 10, 9, 8, 7, 6, 5, 4, 3, 2];

// Descending from 5 (then 6), wrapping from 2 back to 9.
pub(crate) const CNPJ_FIRST_WEIGHTS: [u32; 12] = [5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];
pub(crate) const CNPJ_SECOND_WEIGHTS: [u32; 13] = [6, 5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];

/// Check digit for `digits` under `weights`.
///
/// Remainders 0 and 1 map to 0; any other remainder `r` maps to `11 - r`.
fn check_digit(digits: impl Iterator<Item = u8>, weights: &[u32]) -> u8 {
    let sum: u32 = digits
        .zip(weights)
        .map(|(digit, weight)| u32::from(digit) * weight)
        .sum();

    match sum % 11 {
        0 | 1 => 0,
        r => (11 - r) as u8,
    }
}

/// Both check digits for a base sequence.
///
/// `second` weighs the base followed by the first check digit, so it must be
/// one element longer than `first`.
pub(crate) fn check_digits(base: &[u8], first: &[u32], second: &[u32]) -> [u8; 2] {
    debug_assert_eq!(base.len(), first.len());
    debug_assert_eq!(first.len() + 1, second.len());

    let d1 = check_digit(base.iter().copied(), first);
    let d2 = check_digit(base.iter().copied().chain(iter::once(d1)), second);
    [d1, d2]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cpf_digits_for_sequential_base() {
        // 1..9 -> sum 210 (r=1 -> 0), then 255 (r=2 -> 9)
        let base = [1, 2, 3, 4, 5, 6, 7, 8, 9];
        assert_eq!(
            check_digits(&base, &CPF_FIRST_WEIGHTS, &CPF_SECOND_WEIGHTS),
            [0, 9]
        );
    }

    #[test]
    fn cnpj_digits_for_textbook_base() {
        let base = [1, 1, 2, 2, 2, 3, 3, 3, 0, 0, 0, 1];
        assert_eq!(
            check_digits(&base, &CNPJ_FIRST_WEIGHTS, &CNPJ_SECOND_WEIGHTS),
            [8, 1]
        );
    }

    #[test]
    fn low_remainders_collapse_to_zero() {
        // 11 % 11 == 0
        assert_eq!(check_digit([1, 1].into_iter(), &[10, 1]), 0);
        // 12 % 11 == 1
        assert_eq!(check_digit([1, 1].into_iter(), &[10, 2]), 0);
        // 13 % 11 == 2 -> 9
        assert_eq!(check_digit([1, 1].into_iter(), &[10, 3]), 9);
    }

    #[test]
    fn cnpj_weights_follow_wrapping_cycle() {
        fn cycle(start: u32, len: usize) -> Vec<u32> {
            let mut out = Vec::with_capacity(len);
            let mut w = start;
            for _ in 0..len {
                out.push(w);
                w = if w == 2 { 9 } else { w - 1 };
            }
            out
        }

        assert_eq!(cycle(5, 12), CNPJ_FIRST_WEIGHTS.to_vec());
        assert_eq!(cycle(6, 13), CNPJ_SECOND_WEIGHTS.to_vec());
    }
}

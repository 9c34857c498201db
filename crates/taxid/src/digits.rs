//! Digit extraction and masking shared by CPF and CNPJ.

use crate::error::TaxIdError;
use crate::tax_id::TaxIdKind;

/// Digit-only projection of `input`.
///
/// Every character that is not an ASCII decimal digit is dropped, including
/// non-ASCII digits such as `'٣'`.
///
/// ```
/// assert_eq!(brenoerp_taxid::normalize("12.345.678/0001-95"), "12345678000195");
/// assert_eq!(brenoerp_taxid::normalize("n/a"), "");
/// ```
pub fn normalize(input: &str) -> String {
    input.chars().filter(char::is_ascii_digit).collect()
}

/// Digit values (0..=9) of `input`, in order.
pub(crate) fn values(input: &str) -> Vec<u8> {
    // Multi-byte UTF-8 sequences never contain ASCII bytes.
    input
        .bytes()
        .filter(u8::is_ascii_digit)
        .map(|b| b - b'0')
        .collect()
}

/// Exactly `N` digit values, or `WrongLength` for `kind`.
pub(crate) fn exact<const N: usize>(input: &str, kind: TaxIdKind) -> Result<[u8; N], TaxIdError> {
    let values = values(input);
    <[u8; N]>::try_from(values.as_slice()).map_err(|_| TaxIdError::WrongLength {
        kind: Some(kind),
        found: values.len(),
    })
}

/// `true` when every digit equals the first one.
pub(crate) fn is_repeated(digits: &[u8]) -> bool {
    digits.windows(2).all(|pair| pair[0] == pair[1])
}

pub(crate) fn to_string(digits: &[u8]) -> String {
    digits.iter().map(|d| char::from(b'0' + d)).collect()
}

/// Render `digits` into `pattern`, replacing each `#` with the next digit.
pub(crate) fn mask(digits: &[u8], pattern: &str) -> String {
    let mut digits = digits.iter();
    let mut out = String::with_capacity(pattern.len());
    for c in pattern.chars() {
        match c {
            '#' => {
                if let Some(d) = digits.next() {
                    out.push(char::from(b'0' + d));
                }
            }
            other => out.push(other),
        }
    }
    out
}

/// Base digits for check-digit completion, rejecting values above 9.
pub(crate) fn checked_base<const N: usize>(base: [u8; N]) -> Result<[u8; N], TaxIdError> {
    match base.iter().find(|&&d| d > 9) {
        Some(&value) => Err(TaxIdError::NotADigit { value }),
        None => Ok(base),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_strips_punctuation_whitespace_and_letters() {
        assert_eq!(normalize(" 123.456.789-09 "), "12345678909");
        assert_eq!(normalize("CPF: 123 456 789 / 09"), "12345678909");
        assert_eq!(normalize("abc"), "");
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn non_ascii_digits_are_dropped() {
        assert_eq!(normalize("١٢٣4"), "4");
        assert_eq!(values("١٢٣4"), vec![4]);
    }

    #[test]
    fn exact_reports_found_length() {
        let err = exact::<11>("123", TaxIdKind::Cpf).unwrap_err();
        assert_eq!(
            err,
            TaxIdError::WrongLength {
                kind: Some(TaxIdKind::Cpf),
                found: 3
            }
        );
        assert_eq!(
            exact::<3>("1-2-3", TaxIdKind::Cpf).unwrap(),
            [1, 2, 3]
        );
    }

    #[test]
    fn repeated_detection() {
        assert!(is_repeated(&[7; 11]));
        assert!(!is_repeated(&[7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 8]));
    }

    #[test]
    fn mask_places_digits_in_order() {
        let digits = [1, 2, 3, 4, 5, 6, 7, 8, 9, 0, 9];
        assert_eq!(mask(&digits, "###.###.###-##"), "123.456.789-09");
        assert_eq!(to_string(&digits), "12345678909");
    }

    #[test]
    fn checked_base_rejects_out_of_range_values() {
        assert_eq!(
            checked_base([1, 2, 10]),
            Err(TaxIdError::NotADigit { value: 10 })
        );
        assert_eq!(checked_base([0, 9]), Ok([0, 9]));
    }
}

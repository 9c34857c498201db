//! CPF: Cadastro de Pessoas Físicas (11 digits, individuals).

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use brenoerp_core::ValueObject;

use crate::checksum::{CPF_FIRST_WEIGHTS, CPF_SECOND_WEIGHTS, check_digits};
use crate::digits;
use crate::error::TaxIdError;
use crate::tax_id::TaxIdKind;

pub const CPF_LEN: usize = 11;
const BASE_LEN: usize = 9;
const MASK: &str = "###.###.###-##";

/// A validated CPF.
///
/// Serializes as the bare 11-digit string; deserialization runs the full
/// validation. `Display` renders `000.000.000-00`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Cpf([u8; CPF_LEN]);

impl ValueObject for Cpf {}

impl Cpf {
    /// Parse a CPF in any formatting.
    pub fn parse(input: &str) -> Result<Self, TaxIdError> {
        Self::check(input).inspect_err(|err| {
            tracing::trace!(kind = "cpf", reason = %err, "rejected tax id");
        })
    }

    fn check(input: &str) -> Result<Self, TaxIdError> {
        let digits: [u8; CPF_LEN] = digits::exact(input, TaxIdKind::Cpf)?;
        if digits::is_repeated(&digits) {
            return Err(TaxIdError::RepeatedDigits {
                kind: TaxIdKind::Cpf,
            });
        }

        let expected = check_digits(&digits[..BASE_LEN], &CPF_FIRST_WEIGHTS, &CPF_SECOND_WEIGHTS);
        if digits[BASE_LEN..] != expected {
            return Err(TaxIdError::ChecksumMismatch {
                kind: TaxIdKind::Cpf,
            });
        }

        Ok(Self(digits))
    }

    /// Complete nine base digits with their check digits.
    pub fn from_base(base: [u8; BASE_LEN]) -> Result<Self, TaxIdError> {
        let base = digits::checked_base(base)?;
        let [d1, d2] = check_digits(&base, &CPF_FIRST_WEIGHTS, &CPF_SECOND_WEIGHTS);

        let mut digits = [0u8; CPF_LEN];
        digits[..BASE_LEN].copy_from_slice(&base);
        digits[BASE_LEN] = d1;
        digits[BASE_LEN + 1] = d2;

        if digits::is_repeated(&digits) {
            return Err(TaxIdError::RepeatedDigits {
                kind: TaxIdKind::Cpf,
            });
        }
        Ok(Self(digits))
    }

    pub fn as_digits(&self) -> &[u8; CPF_LEN] {
        &self.0
    }

    /// Bare digits, e.g. `"12345678909"`.
    pub fn digits_string(&self) -> String {
        digits::to_string(&self.0)
    }

    /// The two trailing verification digits.
    pub fn check_digits(&self) -> [u8; 2] {
        [self.0[BASE_LEN], self.0[BASE_LEN + 1]]
    }
}

impl fmt::Display for Cpf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&digits::mask(&self.0, MASK))
    }
}

impl FromStr for Cpf {
    type Err = TaxIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for Cpf {
    type Error = TaxIdError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl TryFrom<String> for Cpf {
    type Error = TaxIdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Cpf> for String {
    fn from(value: Cpf) -> Self {
        value.digits_string()
    }
}

/// Whether `input` is a valid CPF. Never panics.
pub fn is_valid_cpf(input: &str) -> bool {
    Cpf::parse(input).is_ok()
}

/// Mask `input` as `000.000.000-00` when it has exactly 11 digits.
///
/// Anything else comes back as its bare digits. Check digits are not
/// verified here.
pub fn format_cpf(input: &str) -> String {
    let values = digits::values(input);
    if values.len() == CPF_LEN {
        digits::mask(&values, MASK)
    } else {
        digits::to_string(&values)
    }
}

/// Complete a 9-digit base (any formatting) into a full CPF.
pub fn complete_cpf(base: &str) -> Result<Cpf, TaxIdError> {
    let values = digits::values(base);
    let base = <[u8; BASE_LEN]>::try_from(values.as_slice()).map_err(|_| {
        TaxIdError::WrongBaseLength {
            kind: TaxIdKind::Cpf,
            expected: BASE_LEN,
            found: values.len(),
        }
    })?;
    Cpf::from_base(base)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const VALID: &str = "123.456.789-09";

    #[test]
    fn accepts_valid_cpf_formatted_and_bare() {
        assert!(is_valid_cpf(VALID));
        assert!(is_valid_cpf("12345678909"));
        assert!(is_valid_cpf(" 123 456 789 09 "));
    }

    #[test]
    fn rejects_mutated_check_digits() {
        assert!(!is_valid_cpf("123.456.789-19"));
        assert!(!is_valid_cpf("123.456.789-00"));
        assert_eq!(
            Cpf::parse("12345678900"),
            Err(TaxIdError::ChecksumMismatch {
                kind: TaxIdKind::Cpf
            })
        );
    }

    #[test]
    fn rejects_repeated_digits_even_though_checksum_holds() {
        for d in 0..=9u8 {
            let input: String = core::iter::repeat(char::from(b'0' + d)).take(11).collect();
            assert_eq!(
                Cpf::parse(&input),
                Err(TaxIdError::RepeatedDigits {
                    kind: TaxIdKind::Cpf
                }),
                "{input}"
            );
        }
    }

    #[test]
    fn rejects_wrong_lengths() {
        for input in ["", "abc", "1234567890", "123456789091", "12.345.678/0001-95"] {
            assert!(!is_valid_cpf(input), "{input}");
        }
        assert_eq!(
            Cpf::parse("1234567890"),
            Err(TaxIdError::WrongLength {
                kind: Some(TaxIdKind::Cpf),
                found: 10
            })
        );
    }

    #[test]
    fn display_and_accessors() {
        let cpf = Cpf::parse("12345678909").unwrap();
        assert_eq!(cpf.to_string(), VALID);
        assert_eq!(cpf.digits_string(), "12345678909");
        assert_eq!(cpf.check_digits(), [0, 9]);
        assert_eq!(cpf, VALID.parse::<Cpf>().unwrap());
    }

    #[test]
    fn format_masks_only_exact_length() {
        assert_eq!(format_cpf("12345678909"), VALID);
        assert_eq!(format_cpf(VALID), VALID);
        assert_eq!(format_cpf("12-34"), "1234");
        // No checksum verification.
        assert_eq!(format_cpf("11111111111"), "111.111.111-11");
    }

    #[test]
    fn completes_base_digits() {
        assert_eq!(complete_cpf("123.456.789").unwrap().to_string(), VALID);
        assert_eq!(
            complete_cpf("1234"),
            Err(TaxIdError::WrongBaseLength {
                kind: TaxIdKind::Cpf,
                expected: 9,
                found: 4
            })
        );
        assert_eq!(
            Cpf::from_base([1; 9]),
            Err(TaxIdError::RepeatedDigits {
                kind: TaxIdKind::Cpf
            })
        );
    }

    #[test]
    fn serde_uses_bare_digits_and_validates() {
        let cpf = Cpf::parse(VALID).unwrap();
        let json = serde_json::to_string(&cpf).unwrap();
        assert_eq!(json, "\"12345678909\"");
        assert_eq!(serde_json::from_str::<Cpf>("\"123.456.789-09\"").unwrap(), cpf);
        assert!(serde_json::from_str::<Cpf>("\"123.456.789-10\"").is_err());
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        #[test]
        fn completed_base_always_validates(base in prop::array::uniform9(0u8..=9)) {
            prop_assume!(!digits::is_repeated(&base));
            let cpf = Cpf::from_base(base).unwrap();
            prop_assert!(is_valid_cpf(&cpf.digits_string()));
            prop_assert!(is_valid_cpf(&cpf.to_string()));
        }

        #[test]
        fn bumping_a_check_digit_invalidates(base in prop::array::uniform9(0u8..=9), which in 0usize..2) {
            prop_assume!(!digits::is_repeated(&base));
            let cpf = Cpf::from_base(base).unwrap();
            let mut mutated = *cpf.as_digits();
            mutated[BASE_LEN + which] = (mutated[BASE_LEN + which] + 1) % 10;
            prop_assert!(!is_valid_cpf(&digits::to_string(&mutated)));
        }

        #[test]
        fn separators_do_not_change_the_verdict(
            raw in "[0-9]{11}",
            seps in prop::collection::vec("[ .\\-/]{0,2}", 11)
        ) {
            let formatted: String = raw
                .chars()
                .zip(seps.iter())
                .flat_map(|(c, sep)| core::iter::once(c).chain(sep.chars()))
                .collect();
            prop_assert_eq!(is_valid_cpf(&raw), is_valid_cpf(&formatted));
        }
    }
}

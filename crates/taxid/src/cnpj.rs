//! CNPJ: Cadastro Nacional da Pessoa Jurídica (14 digits, legal entities).

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use brenoerp_core::ValueObject;

use crate::checksum::{CNPJ_FIRST_WEIGHTS, CNPJ_SECOND_WEIGHTS, check_digits};
use crate::digits;
use crate::error::TaxIdError;
use crate::tax_id::TaxIdKind;

pub const CNPJ_LEN: usize = 14;
const BASE_LEN: usize = 12;
const MASK: &str = "##.###.###/####-##";

/// A validated CNPJ, displayed as `00.000.000/0000-00`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Cnpj([u8; CNPJ_LEN]);

impl ValueObject for Cnpj {}

impl Cnpj {
    pub fn parse(input: &str) -> Result<Self, TaxIdError> {
        Self::check(input).inspect_err(|err| {
            tracing::trace!(kind = "cnpj", reason = %err, "rejected tax id");
        })
    }

    fn check(input: &str) -> Result<Self, TaxIdError> {
        let digits: [u8; CNPJ_LEN] = digits::exact(input, TaxIdKind::Cnpj)?;
        if digits::is_repeated(&digits) {
            return Err(TaxIdError::RepeatedDigits {
                kind: TaxIdKind::Cnpj,
            });
        }

        let expected =
            check_digits(&digits[..BASE_LEN], &CNPJ_FIRST_WEIGHTS, &CNPJ_SECOND_WEIGHTS);
        if digits[BASE_LEN..] != expected {
            return Err(TaxIdError::ChecksumMismatch {
                kind: TaxIdKind::Cnpj,
            });
        }

        Ok(Self(digits))
    }

    /// Complete twelve base digits (8 registration + 4 branch) with check digits.
    pub fn from_base(base: [u8; BASE_LEN]) -> Result<Self, TaxIdError> {
        let base = digits::checked_base(base)?;
        let [d1, d2] = check_digits(&base, &CNPJ_FIRST_WEIGHTS, &CNPJ_SECOND_WEIGHTS);

        let mut digits = [0u8; CNPJ_LEN];
        digits[..BASE_LEN].copy_from_slice(&base);
        digits[BASE_LEN] = d1;
        digits[BASE_LEN + 1] = d2;

        if digits::is_repeated(&digits) {
            return Err(TaxIdError::RepeatedDigits {
                kind: TaxIdKind::Cnpj,
            });
        }
        Ok(Self(digits))
    }

    pub fn as_digits(&self) -> &[u8; CNPJ_LEN] {
        &self.0
    }

    pub fn digits_string(&self) -> String {
        digits::to_string(&self.0)
    }

    pub fn check_digits(&self) -> [u8; 2] {
        [self.0[BASE_LEN], self.0[BASE_LEN + 1]]
    }

    /// Branch number (`0001` is the head office).
    pub fn branch(&self) -> String {
        digits::to_string(&self.0[8..BASE_LEN])
    }
}

impl fmt::Display for Cnpj {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&digits::mask(&self.0, MASK))
    }
}

impl FromStr for Cnpj {
    type Err = TaxIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for Cnpj {
    type Error = TaxIdError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl TryFrom<String> for Cnpj {
    type Error = TaxIdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Cnpj> for String {
    fn from(value: Cnpj) -> Self {
        value.digits_string()
    }
}

/// Whether `input` is a valid CNPJ. Never panics.
pub fn is_valid_cnpj(input: &str) -> bool {
    Cnpj::parse(input).is_ok()
}

/// Mask `input` as `00.000.000/0000-00` when it has exactly 14 digits,
/// otherwise return its bare digits. No checksum verification.
pub fn format_cnpj(input: &str) -> String {
    let values = digits::values(input);
    if values.len() == CNPJ_LEN {
        digits::mask(&values, MASK)
    } else {
        digits::to_string(&values)
    }
}

/// Complete a 12-digit base (any formatting) into a full CNPJ.
pub fn complete_cnpj(base: &str) -> Result<Cnpj, TaxIdError> {
    let values = digits::values(base);
    let base = <[u8; BASE_LEN]>::try_from(values.as_slice()).map_err(|_| {
        TaxIdError::WrongBaseLength {
            kind: TaxIdKind::Cnpj,
            expected: BASE_LEN,
            found: values.len(),
        }
    })?;
    Cnpj::from_base(base)
}

//! Rejection reasons for CPF/CNPJ parsing.

use thiserror::Error;

use brenoerp_core::DomainError;

use crate::tax_id::TaxIdKind;

/// Why an input is not a valid CPF or CNPJ.
///
/// Messages never echo the input: tax identifiers are personal data.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum TaxIdError {
    /// Normalized digit count does not fit the expected kind.
    ///
    /// `kind` is `None` when the kind was being inferred from the length.
    #[error("expected {}, found {found} digits", expected_digits(.kind))]
    WrongLength {
        kind: Option<TaxIdKind>,
        found: usize,
    },

    /// Base for check-digit completion has the wrong number of digits.
    #[error("{kind} base must have {expected} digits, found {found}")]
    WrongBaseLength {
        kind: TaxIdKind,
        expected: usize,
        found: usize,
    },

    /// All digits are identical (`000.000.000-00`, `11.111.111/1111-11`, ...).
    #[error("{kind} cannot consist of a single repeated digit")]
    RepeatedDigits { kind: TaxIdKind },

    #[error("{kind} check digits do not match")]
    ChecksumMismatch { kind: TaxIdKind },

    /// A base element passed to check-digit completion is above 9.
    #[error("{value} is not a decimal digit")]
    NotADigit { value: u8 },
}

fn expected_digits(kind: &Option<TaxIdKind>) -> String {
    match kind {
        Some(kind) => format!("{} digits for a {kind}", kind.expected_len()),
        None => format!(
            "{} (CPF) or {} (CNPJ) digits",
            TaxIdKind::Cpf.expected_len(),
            TaxIdKind::Cnpj.expected_len()
        ),
    }
}

impl From<TaxIdError> for DomainError {
    fn from(err: TaxIdError) -> Self {
        DomainError::validation(format!("tax id: {err}"))
    }
}

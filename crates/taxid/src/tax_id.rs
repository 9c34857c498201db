//! CPF-or-CNPJ dispatch.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use brenoerp_core::ValueObject;

use crate::cnpj::{CNPJ_LEN, Cnpj};
use crate::cpf::{CPF_LEN, Cpf};
use crate::digits;
use crate::error::TaxIdError;

/// Which identifier scheme a value belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaxIdKind {
    Cpf,
    Cnpj,
}

impl TaxIdKind {
    pub const fn expected_len(self) -> usize {
        match self {
            TaxIdKind::Cpf => CPF_LEN,
            TaxIdKind::Cnpj => CNPJ_LEN,
        }
    }

    /// Kind implied by a normalized digit count.
    pub const fn from_len(len: usize) -> Option<Self> {
        match len {
            CPF_LEN => Some(TaxIdKind::Cpf),
            CNPJ_LEN => Some(TaxIdKind::Cnpj),
            _ => None,
        }
    }

    /// Kind implied by the digits of `input`, whatever its formatting.
    pub fn detect(input: &str) -> Option<Self> {
        Self::from_len(digits::values(input).len())
    }
}

impl fmt::Display for TaxIdKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TaxIdKind::Cpf => "CPF",
            TaxIdKind::Cnpj => "CNPJ",
        })
    }
}

/// A validated CPF or CNPJ.
///
/// Serialized as bare digits; the kind is recovered from the length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum TaxId {
    Cpf(Cpf),
    Cnpj(Cnpj),
}

impl ValueObject for TaxId {}

impl TaxId {
    /// Parse, inferring the kind from the normalized length (11 or 14).
    pub fn parse(input: &str) -> Result<Self, TaxIdError> {
        match TaxIdKind::detect(input) {
            Some(kind) => Self::parse_as(kind, input),
            None => {
                let err = TaxIdError::WrongLength {
                    kind: None,
                    found: digits::values(input).len(),
                };
                tracing::trace!(reason = %err, "rejected tax id");
                Err(err)
            }
        }
    }

    /// Parse as a specific kind; a 14-digit input is a wrong-length CPF.
    pub fn parse_as(kind: TaxIdKind, input: &str) -> Result<Self, TaxIdError> {
        match kind {
            TaxIdKind::Cpf => Cpf::parse(input).map(TaxId::Cpf),
            TaxIdKind::Cnpj => Cnpj::parse(input).map(TaxId::Cnpj),
        }
    }

    pub fn kind(&self) -> TaxIdKind {
        match self {
            TaxId::Cpf(_) => TaxIdKind::Cpf,
            TaxId::Cnpj(_) => TaxIdKind::Cnpj,
        }
    }

    pub fn digits_string(&self) -> String {
        match self {
            TaxId::Cpf(cpf) => cpf.digits_string(),
            TaxId::Cnpj(cnpj) => cnpj.digits_string(),
        }
    }

    pub fn as_cpf(&self) -> Option<&Cpf> {
        match self {
            TaxId::Cpf(cpf) => Some(cpf),
            TaxId::Cnpj(_) => None,
        }
    }

    pub fn as_cnpj(&self) -> Option<&Cnpj> {
        match self {
            TaxId::Cnpj(cnpj) => Some(cnpj),
            TaxId::Cpf(_) => None,
        }
    }
}

impl fmt::Display for TaxId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TaxId::Cpf(cpf) => fmt::Display::fmt(cpf, f),
            TaxId::Cnpj(cnpj) => fmt::Display::fmt(cnpj, f),
        }
    }
}

impl From<Cpf> for TaxId {
    fn from(value: Cpf) -> Self {
        TaxId::Cpf(value)
    }
}

impl From<Cnpj> for TaxId {
    fn from(value: Cnpj) -> Self {
        TaxId::Cnpj(value)
    }
}

impl FromStr for TaxId {
    type Err = TaxIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for TaxId {
    type Error = TaxIdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<TaxId> for String {
    fn from(value: TaxId) -> Self {
        value.digits_string()
    }
}

/// Whether `input` is a valid CPF (11 digits) or CNPJ (14 digits).
pub fn is_valid_tax_id(input: &str) -> bool {
    TaxId::parse(input).is_ok()
}

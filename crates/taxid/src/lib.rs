//! Brazilian taxpayer identifiers: CPF (individuals) and CNPJ (legal entities).
//!
//! Two layers are exposed:
//!
//! - a total boolean contract ([`is_valid_cpf`], [`is_valid_cnpj`],
//!   [`is_valid_tax_id`]) that accepts any string and never panics;
//! - validated value objects ([`Cpf`], [`Cnpj`], [`TaxId`]) whose parsers
//!   report why an input was rejected through [`TaxIdError`].
//!
//! Punctuation is irrelevant: every non-digit character is dropped before
//! validation, so `"123.456.789-09"` and `"12345678909"` are the same CPF.

mod checksum;
pub mod cnpj;
pub mod cpf;
mod digits;
pub mod error;
pub mod tax_id;

pub use cnpj::{Cnpj, complete_cnpj, format_cnpj, is_valid_cnpj};
pub use cpf::{Cpf, complete_cpf, format_cpf, is_valid_cpf};
pub use digits::normalize;
pub use error::TaxIdError;
pub use tax_id::{TaxId, TaxIdKind, is_valid_tax_id};

//! `brenoerp-core` — shared domain building blocks.
//!
//! Pure domain primitives only: errors, typed identifiers and the traits that
//! value objects and aggregates implement. No IO lives here.

pub mod aggregate;
pub mod error;
pub mod id;
pub mod value_object;

pub use aggregate::{Aggregate, AggregateRoot};
pub use error::{DomainError, DomainResult};
pub use id::{AggregateId, TenantId};
pub use value_object::ValueObject;

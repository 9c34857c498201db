//! Parties (customers and suppliers), event-sourced.
//!
//! Deterministic domain logic only. A party is only accepted with a valid
//! CPF (individuals) or CNPJ (companies).

pub mod party;

pub use party::{
    ContactInfo, Party, PartyCommand, PartyEvent, PartyId, PartyKind, PartyRegistered,
    PartyStatus, PartySuspended, PartyUpdated, PersonType, RegisterParty, SuspendParty,
    UpdateDetails,
};

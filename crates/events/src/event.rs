use chrono::{DateTime, Utc};

use brenoerp_core::TenantId;

/// A fact emitted by an aggregate.
///
/// Events are immutable and append-only; the schema `version` lets readers
/// upcast older payloads.
pub trait Event: Clone + core::fmt::Debug + Send + Sync + 'static {
    /// Stable dotted name, e.g. `"parties.party.registered"`.
    fn event_type(&self) -> &'static str;

    fn version(&self) -> u32;

    /// Tenant whose stream the event belongs to.
    fn tenant_id(&self) -> TenantId;

    /// Business time of the fact.
    fn occurred_at(&self) -> DateTime<Utc>;
}

//! Domain event contract shared by every aggregate crate.

pub mod event;

pub use event::Event;

#![deny(missing_docs)]

//! # roster-core — Foundational Types for Roster
//!
//! This crate defines the types every other crate in the workspace depends
//! on: the player domain entities and the structured error taxonomy. It has
//! no internal crate dependencies — only `serde`, `serde_json`, `thiserror`,
//! `chrono`, `uuid`, and `utoipa` from the external ecosystem.
//!
//! ## Design Principles
//!
//! 1. **Errors are values.** [`RosterError`] is a closed taxonomy carrying a
//!    kind and a human-readable message. Every layer returns taxonomy errors
//!    through `Result`; foreign error types (e.g. database driver errors)
//!    are translated exactly once, at the boundary where they enter.
//!
//! 2. **Entities validate at construction.** [`Player::new`] rejects missing
//!    required fields before an entity ever exists, so a constructed
//!    `Player` always satisfies its invariants.
//!
//! 3. **No `unwrap()` outside tests.**

pub mod description;
pub mod error;
pub mod media;
pub mod player;

// Re-export primary types at crate root for ergonomic imports.
pub use description::PlayerDescription;
pub use error::RosterError;
pub use media::Media;
pub use player::Player;

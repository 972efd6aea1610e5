//! # API Route Modules
//!
//! - `players` — player CRUD and paginated listing.

pub mod players;

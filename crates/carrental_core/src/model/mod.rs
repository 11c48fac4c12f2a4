//! Record models for the rental store.
//!
//! # Responsibility
//! - Define typed drafts (caller input) and rows (persisted state) per table.
//! - Coerce raw console text into drafts.
//!
//! # Invariants
//! - Ids live only on persisted rows; drafts never carry one.
//! - Cars and clients are independent; no model references the other.

pub mod car;
pub mod client;
pub mod fields;

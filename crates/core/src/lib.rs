//! # Turnos Core
//!
//! Domain logic for the workshop appointment engine: opening hours, slot
//! generation, conflict detection and the reservation state machine. This
//! crate is pure; persistence lives in `turnos-db` and the HTTP boundary
//! in `turnos-api`.

/// Domain error taxonomy shared by all crates
pub mod errors;
/// Domain models and wire types
pub mod models;
/// Outbound notification seam for booking confirmations
pub mod notify;
/// Availability computation: opening hours, clock, slots, overlap
pub mod schedule;

//! Team vacation roster synchronization over a pair of webhook endpoints.
//!
//! The [`sync::VacationStore`] owns the canonical member list, the
//! last-synchronized baseline, and the two network operations (fetch the
//! full roster, submit the changed subset). The `cli` module is a thin
//! presentation layer over the store's interface.

pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod sync;

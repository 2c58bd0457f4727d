//! Change tracking and synchronization for the vacation roster.
//!
//! This module handles:
//! - The domain model (members and their vacation status)
//! - Diffing the working list against the last-synchronized baseline
//! - The store that applies local edits and talks to the endpoints

pub mod diff;
pub mod models;
pub mod store;

pub use models::{Member, VacationStatus};
pub use store::VacationStore;

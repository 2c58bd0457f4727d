//! Webhook API module.
//!
//! Wire-format models for the roster endpoints, the date codec between the
//! wire form (`DD/MM/YYYY`) and the canonical calendar form, and the HTTP
//! client that performs the two POST calls.

pub mod client;
pub mod models;

pub use client::WebhookClient;
pub use models::{WireMember, format_wire_date, parse_wire_date};

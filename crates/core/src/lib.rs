//! Domain logic for the promotional-campaign console.
//!
//! Records mirrored from the campaign API, form validation, list-view
//! state, chart data shaping and role rules. The `core` crate performs no
//! I/O; everything it needs is passed in by the caller.

pub mod activity;
pub mod countdown;
pub mod dashboard;
pub mod envelope;
pub mod error;
pub mod filter;
pub mod navigation;
pub mod pagination;
pub mod raffle;
pub mod registration;
pub mod registrations;
pub mod roles;
pub mod serial;
pub mod session;
pub mod settings;
pub mod types;
pub mod vendor;

//! Per-resource operations.
//!
//! Each module holds the endpoint table for one resource plus the matching
//! `impl Client` block. The constants are public so a caller can dispatch
//! through [`Client::execute`](crate::Client::execute) directly.

pub mod changes;
pub mod environments;
pub mod events;
pub mod integrations;
pub mod layouts;
pub mod notification_templates;
pub mod subscribers;
pub mod topics;

//! Shift computation and conflict-detection engine
//!
//! This crate turns stored shift and workplace records into derived figures:
//! working and night minutes, projected earnings with an audit trace, overlap
//! conflicts between shifts (including commute time), and period statistics.
//! It also validates records before they are stored and composes reminder
//! notifications.
//!
//! All computation in [`calculation`] is pure and synchronous. [`store`] and
//! [`api`] wrap it with record storage and an HTTP surface.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod export;
pub mod models;
pub mod notify;
pub mod store;
pub mod validation;

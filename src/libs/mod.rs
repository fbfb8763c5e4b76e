//! Core library modules for paydesk.
//!
//! The calculators (`attendance`, `status`, `period`, `proration`,
//! `payslip`) are pure functions over backend records and take the current
//! time as an argument. The remaining modules carry the command-line
//! client: configuration, storage paths, messages, tables and export.
//!
//! ## Usage
//!
//! ```rust
//! use paydesk::libs::proration::{prorate, PayFrequency};
//!
//! let per_period = prorate(22000.0, PayFrequency::Biweekly);
//! assert_eq!(format!("{:.2}", per_period), "10138.25");
//! ```

pub mod attendance;
pub mod config;
pub mod data_storage;
pub mod employee;
pub mod error;
pub mod export;
pub mod formatter;
pub mod messages;
pub mod payslip;
pub mod period;
pub mod proration;
pub mod status;
pub mod view;

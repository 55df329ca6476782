//! # wellkit-data
//!
//! Hardcoded demo data for the Wellkit health companion.
//!
//! All data in this crate is fictional.  No external systems are contacted.
//! This crate acts as a stand-in for real directories, schedules, and a
//! translation pipeline in a production deployment.

pub mod hospitals;
pub mod seeds;
pub mod strings;

pub use hospitals::hospital_directory;
pub use seeds::{seed_appointments, seed_reminders};
pub use strings::{strings_for, UiStrings};

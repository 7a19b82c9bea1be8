//! Domain engine for the LIHTC QAP Score Estimator.
//!
//! Estimates a Qualified Allocation Plan score for a property location in
//! Texas or California from nearby amenities. See [`workflows::qap`] for the
//! scoring workflow; [`config`], [`telemetry`], and [`error`] carry the
//! service plumbing shared with the API binary.

pub mod config;
pub mod error;
pub mod telemetry;
pub mod workflows;

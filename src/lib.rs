//! Shift clock engine for an employee management dashboard.
//!
//! This crate classifies scheduled shifts as regular, night or overtime,
//! aggregates time-clock punches into worked hours and per-employee status
//! summaries, and buckets schedules into calendar grids. All wall-clock
//! reasoning happens in a single configured display timezone.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;

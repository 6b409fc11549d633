//! End-of-Service Benefit & Labor-Law Compliance Engine
//!
//! This crate computes statutory end-of-service benefits from an employment
//! period, a monthly wage and the termination circumstances, and validates HR
//! decisions (terminations, warnings, deductions and others) against a
//! versioned repository of labor code rules.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod validation;

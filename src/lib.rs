//! Term Results Access & Grading Engine
//!
//! This crate implements the result-disclosure policy for a term-based school:
//! grade resolution over banded scales, school-day counting, fee/PIN gated
//! result access, and validated result submission.

#![warn(missing_docs)]

pub mod access;
pub mod api;
pub mod calendar;
pub mod config;
pub mod error;
pub mod grading;
pub mod models;
pub mod store;
pub mod submission;

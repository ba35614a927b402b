//! HTTP API module for the Term Results Engine.
//!
//! This module provides the REST endpoints for result verification,
//! result submission, and attendance summaries.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{AttendanceQuery, SubmitResultRequest, VerifyResultRequest};
pub use response::{ApiError, AttendanceSummary};
pub use state::AppState;

//! Result disclosure policy.
//!
//! This module decides whether a given (student, term, requester) triple
//! may view results. The public path is gated by PIN, payment, and
//! publication; the authenticated student/parent path layers an ownership
//! gate in front.

mod gate;
mod ownership;

pub use gate::{authorize_result_view, ViewRequest};
pub use ownership::ensure_owned;

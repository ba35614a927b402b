//! Core data models for the Term Results Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod audit;
mod fee;
mod requester;
mod result;
mod student;
mod term;

pub use audit::{AuditAction, AuditRecord};
pub use fee::{PaymentMethod, TermFee};
pub use requester::{RequesterContext, Role};
pub use result::{GradedScore, ResultView, SubjectScore, TermResult};
pub use student::{AttendanceEntry, SchoolLevel, Student};
pub use term::{Holiday, Term, TermCalendar};

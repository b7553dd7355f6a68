//! Route protection: path classification and the per-request decision.

pub mod classification;
pub mod decision;

pub use classification::{RouteClass, RouteTable};
pub use decision::{GuardDecision, GuardState, RouteGuard};

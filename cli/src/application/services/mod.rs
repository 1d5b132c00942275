//! Application services — one module per use-case.

pub mod launch;
pub mod readiness;
pub mod session;

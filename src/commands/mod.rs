//! Command implementations

pub mod analyze;
pub mod check;
pub mod simple;
pub mod start;

pub use analyze::{AnalysisResult, analyze_word};
pub use check::{CheckResult, check_guess};
pub use simple::run_simple;
pub use start::{StartResult, start_round};

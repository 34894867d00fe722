pub mod arith;
pub mod suite;

pub use crate::domain::model::{Case, CaseOutcome, Number, Operation, Suite, SuiteReport};
pub use crate::domain::ports::CaseSource;
pub use crate::utils::error::Result;

pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, Command};

pub use config::{suite_config::SuiteFileSource, OutputFormat};
pub use core::arith::{add, checked_add, checked_multiply, evaluate, multiply};
pub use core::suite::{builtin_cases, InlineSource, SuiteEngine};
pub use core::{Case, Number, Operation, SuiteReport};
pub use utils::error::{CalcError, Result};

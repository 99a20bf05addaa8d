pub mod logger;
pub mod validation;

pub use logger::{init_logger, LogContext, LookupTimer};
pub use validation::Validator;

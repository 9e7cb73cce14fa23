mod format;
mod status;
mod validate;

pub use format::{StatusError, parse_status};
pub use validate::{StatusBatch, ValidationError, check_response};

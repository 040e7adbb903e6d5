use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IntervalError {
    #[error("End must be larger than start (start: {start}, end: {end})")]
    InvalidInterval { start: String, end: String },
}

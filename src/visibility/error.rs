use chrono::NaiveDate;
use thiserror::Error;

use crate::interval::IntervalError;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum VisibilityError {
    #[error("Local midnight of {0} does not exist in the requested timezone")]
    InvalidDate(NaiveDate),

    #[error(transparent)]
    Interval(#[from] IntervalError),
}

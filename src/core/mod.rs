pub mod aggregate;
pub mod clock;
pub mod date_range;
pub mod error;
pub mod period;
pub mod rounding;

pub use clock::{Clock, FixedClock, SystemClock};
pub use date_range::{DateRange, DateRangeQuery, RangeResolver};
pub use error::{AppError, Result};
pub use period::GroupBy;

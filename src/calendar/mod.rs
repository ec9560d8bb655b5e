//! Day/month/year values with range-validated fields, formatting helpers and
//! collection-level comparisons.

pub mod date;
pub mod gap;
pub mod month_names;

pub use date::CalendarDate;
pub use gap::{max_day_gap, sort_chronologically};
pub use month_names::{month_name_genitive, YEAR_SUFFIX};

//! Evaluation of explicit date lists and the timezone support it needs.

mod evaluate;
mod timezone;

pub use evaluate::evaluate_periods;
pub use timezone::{
    ConversionError, TimeZoneResolver, compare_points, convert_to_utc, datetime_to_utc,
    point_to_utc,
};

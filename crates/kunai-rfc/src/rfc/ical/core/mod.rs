//! iCalendar value models used by explicit date lists (RFC 5545).
//!
//! - `DateTime` / `Date` / `DateOrDateTime`: the points a list is made of
//! - `Duration` and `Period`: spans anchored at those points
//! - `PeriodList`: the ordered RDATE / EXDATE container

mod datetime;
mod duration;
mod parameter;
mod period;
mod period_list;
mod property;
mod value;

pub use datetime::{DateTime, DateTimeForm, Time};
pub use duration::Duration;
pub use parameter::{Parameter, names as param_names, value_types};
pub use period::{Period, PeriodLike};
pub use period_list::PeriodList;
pub use property::{ContentLine, names as property_names};
pub use value::{Date, DateOrDateTime};

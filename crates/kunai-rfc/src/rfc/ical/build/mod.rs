//! iCalendar serialization for explicit date lists (RFC 5545).
//!
//! - Escape: parameter value quoting
//! - Fold: content line folding at 75 octets
//! - Serializer: canonical text and full property lines

mod escape;
mod fold;
mod serializer;

pub use escape::escape_param_value;
pub use fold::fold_line;
pub use serializer::{serialize_period_list, serialize_period_list_line};

//! iCalendar parsing for explicit date lists (RFC 5545).
//!
//! - Lexer: unfolding and content line tokenization
//! - Values: DATE, DATE-TIME, DURATION, and PERIOD parsers
//! - Period list: the RDATE / EXDATE value decoder

mod error;
mod lexer;
mod period_list;
mod values;

pub use error::{ParseError, ParseErrorKind, ParseResult};
pub use lexer::{parse_content_line, parse_params, unfold};
pub use period_list::{DecodedPeriodList, parse_period_list};
pub use values::{parse_date, parse_datetime, parse_duration, parse_period, parse_time};

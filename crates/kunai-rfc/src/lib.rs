//! RFC 5545 explicit date lists: value models, codec, and window evaluation.

pub mod error;
pub mod rfc;

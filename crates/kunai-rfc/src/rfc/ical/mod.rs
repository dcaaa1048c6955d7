//! iCalendar (RFC 5545) support for RDATE / EXDATE period lists.

pub mod build;
pub mod core;
pub mod expand;
pub mod parse;

#[cfg(test)]
mod tests;

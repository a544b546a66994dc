//! Format capabilities consumed by the rule catalog.
//!
//! - [`filter`]: well-known text formats (email, URL, IP addresses)
//! - [`datetime`]: free-form date parsing and strftime round trips
//!
//! Both are opaque predicates from the point of view of the chain: rules only
//! ask "does this text match", never how.

pub mod datetime;
pub mod filter;

pub use datetime::{DateFormat, parse_free_form};
pub use filter::Filter;

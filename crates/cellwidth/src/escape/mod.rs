//! Escaping raw cell content for fixed-column rendering.
//!
//! Cell values can carry bytes that would corrupt a table if written
//! verbatim: carriage returns, escape characters, invalid UTF-8. The escaper
//! rewrites them into visible text, keeps literal tabs so they still align to
//! tab stops, and records per-line tab positions and widths in a [`Value`].
//!
//! ```rust
//! use cellwidth::EscapeSpec;
//!
//! let value = EscapeSpec::default().escape(b"id\t\x1b[1mname\r", 0);
//! assert_eq!(value.as_str(), "id\t\\x1b[1mname\\r");
//! assert_eq!(value.width(), 21);
//! ```

mod escaper;
mod spec;
mod value;

pub use escaper::escape;
pub use spec::{EscapeConfig, EscapeSpec, EscapeSpecBuilder, InvalidUtf8};
pub use value::Value;

//! A value-or-error container.
//!
//! [`Outcome<T, E>`](Outcome) holds either a success payload of type `T` or
//! an error payload of type `E` - never both, never neither. It is a plain
//! owned value with no IO, no async, and no interior mutability, so it can
//! be used from any layer of an application.
//!
//! This is deliberately not a combinator pipeline: there is no `map` or
//! `and_then`. The API is construct, test which side is active, read the
//! active payload (checked or unchecked), substitute a default, or replace
//! the contents in place.
//!
//! ```
//! use outcome::Outcome;
//!
//! fn parse_port(raw: &str) -> Outcome<u16, String> {
//!     match raw.parse::<u16>() {
//!         Ok(port) => port.into(),
//!         Err(err) => Outcome::Error(err.to_string()),
//!     }
//! }
//!
//! let port = parse_port("8080");
//! assert!(port.is_success());
//! assert_eq!(port.clone().success_or(80), 8080);
//!
//! let bad = parse_port("not-a-port");
//! assert!(bad.is_error());
//! assert_eq!(bad.success_or(80), 80);
//! ```

// Pedantic lint configuration - these are intentional design choices
#![allow(clippy::missing_errors_doc)] // try_* accessors have a single, obvious error
#![allow(clippy::missing_panics_doc)] // Panics are the checked-access contract itself

mod outcome;

pub use outcome::{AccessError, Outcome};

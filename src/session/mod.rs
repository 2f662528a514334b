//! Shape persistence (export/restore) support.
//!
//! Converts the committed shape list into the JSON exchange format used by the
//! host application and parses it back. Storage and transport of the resulting
//! string are the host's responsibility.

mod exchange;

pub use exchange::{RestoreError, export_shapes, parse_shapes};

//! # Inline Scanning
//!
//! Stage 2 of the pipeline: a single left-to-right pass over the
//! block-extracted stream, building the final clean text character by
//! character.
//!
//! - Literal text appends with incremental whitespace collapse: no leading
//!   space, no doubled space, every whitespace run becomes one space.
//! - Sentinel characters left by block extraction append as themselves and
//!   record a typed [`Placeholder`] for the position resolver.
//! - Strong's number tags record a position and emit nothing.
//! - Break tags emit one collapsing space; structural markers emit nothing.
//! - Formatting opens push onto an explicit stack; closes remove the nearest
//!   matching kind searching from the top (see [`stack`]).
//! - Anything unrecognized is dropped silently.
//!
//! ## Modules
//!
//! - **`types`**: scan output and placeholder types
//! - **`stack`**: the open-format stack with nearest-matching-kind close
//! - **`scanner`**: `scan()`, the pass itself

pub mod scanner;
pub mod stack;
pub mod types;

pub use scanner::scan;
pub use types::{Placeholder, PlaceholderKind, ScanOutput};

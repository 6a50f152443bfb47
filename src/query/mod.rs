//! Query-string configuration and remote image-service URLs.
//!
//! Parses option strings like `?max=3&gap=6&ratios=intrinsic` into
//! [`CollageOptions`](crate::CollageOptions) overrides, and builds sized crop
//! URLs for image services that take `w`/`h`/`fit`/`crop` parameters.
//!
//! # Example
//!
//! ```
//! use zencollage::query;
//! use zencollage::RatioMode;
//!
//! let result = query::parse("max=3&gap=6&radius=10&hero=60&ratios=intrinsic");
//! assert!(result.warnings.is_empty());
//!
//! let options = result.overrides.to_options();
//! assert_eq!(options.max_visible, 3);
//! assert_eq!(options.gap, 6);
//! assert_eq!(options.hero_width_percent, 60);
//! assert_eq!(options.ratio_mode, RatioMode::Intrinsic);
//! ```
//!
//! Problems never fail the parse: bad values and unknown keys become
//! [`ParseWarning`]s and the affected option keeps its default.

pub mod overrides;
mod parse;
mod url;

pub use overrides::Overrides;
pub use url::{RemoteSource, crop_params};

use alloc::string::String;
use alloc::vec::Vec;

/// Result of parsing an options query string.
#[derive(Debug, Clone)]
pub struct ParseResult {
    /// Parsed option overrides.
    pub overrides: Overrides,
    /// Non-fatal parse warnings.
    pub warnings: Vec<ParseWarning>,
}

/// Non-fatal warning from query string parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseWarning {
    /// A key appeared more than once (last value wins).
    DuplicateKey { key: String, value: String },
    /// A key that no option answers to.
    KeyNotRecognized { key: String, value: String },
    /// A key was recognized but its value could not be parsed.
    ValueInvalid {
        key: &'static str,
        value: String,
        reason: &'static str,
    },
}

/// Parse an options query string (with or without leading `?`).
pub fn parse(query: &str) -> ParseResult {
    let (overrides, warnings) = parse::parse_query(query);
    for w in &warnings {
        log::warn!("collage options: {w:?}");
    }
    ParseResult {
        overrides,
        warnings,
    }
}

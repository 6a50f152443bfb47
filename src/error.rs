//! Error type for the fallible constructors around the layout engine.
//!
//! The engine itself never fails: malformed or missing input degrades to an
//! empty plan or a fallback ratio. Errors only surface where a caller builds
//! a value that cannot exist, such as a `0:5` aspect ratio.

use alloc::string::String;

/// Collage construction error.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CollageError {
    /// An aspect ratio with a zero side.
    #[error("aspect ratio sides must be non-zero, got {width}:{height}")]
    ZeroRatio { width: u32, height: u32 },
    /// Text that does not parse as `w:h` or `w/h`.
    #[error("invalid aspect ratio `{0}`, expected `w:h`")]
    InvalidRatio(String),
    /// A requested image size with a zero width or height.
    #[error("image dimensions must be non-zero")]
    ZeroDimension,
}

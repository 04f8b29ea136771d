#![doc = include_str!("../README.md")]

pub(crate) mod ansi;
pub(crate) mod chars;
pub(crate) mod percentage;
pub(crate) mod spinner;


/// Re-exports of all public types.
pub mod prelude {
    pub use crate::chars::CharIndex;
    pub use crate::percentage::Percentage;
    pub use crate::spinner::Spinner;
    pub use crate::{Error, MIN_PERCENTAGE_WIDTH, MIN_SPINNER_WIDTH};
}

pub use crate::prelude::*;

/// Narrowest [`Percentage`] bar: three percentage digits plus the `%` sign.
pub const MIN_PERCENTAGE_WIDTH: usize = 4;

/// Narrowest [`Spinner`] bar: the rotation glyph alone.
pub const MIN_SPINNER_WIDTH: usize = 1;

/// Error returned by the bar constructors.
///
/// Construction is the only fallible step of a bar's own lifecycle:
/// [`Percentage::update`] and [`Spinner::update`] always succeed by
/// clamping and truncating, so a running display loop is never interrupted.
/// Writing to the sink reports [`std::io::Error`] directly.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The requested width cannot hold the rendered line.
    #[error("cannot create width less than {min}: {width}")]
    InvalidWidth { width: usize, min: usize },
}

//! Escape sequences and formatting helpers shared by both bars.
//!
//! The byte values here are part of the output contract: terminals key on
//! them exactly, so they are process-wide constants rather than anything
//! configurable.

/// Cursor to column 1.
pub(crate) const CURSOR_HOME: &[u8] = b"\x1b[G";

/// Cursor to column 1, then reverse video on.
pub(crate) const REVERSE_ON: &[u8] = b"\x1b[G\x1b[7m";

/// Reverse video off.
pub(crate) const REVERSE_OFF: &[u8] = b"\x1b[27m";

/// Appends `columns` space characters to `buf`.
pub(crate) fn pad(buf: &mut Vec<u8>, columns: usize) {
    buf.extend(std::iter::repeat_n(b' ', columns));
}

/// A percentage rendered as decimal digits plus a trailing `%`.
///
/// Digits are extracted into a fixed array one division at a time, most
/// significant first in the final slice. The value is rendered as given;
/// callers clamp the fill width, not the printed number.
pub(crate) struct PercentText {
    // u64::MAX is 20 digits; one more byte for '%'.
    buf: [u8; 21],
    start: usize,
}

impl PercentText {
    pub(crate) fn new(percentage: u64) -> Self {
        let mut buf = [0u8; 21];
        buf[20] = b'%';

        let mut start = 20;
        let mut n = percentage;
        loop {
            start -= 1;
            buf[start] = b'0' + (n % 10) as u8;
            n /= 10;
            if n == 0 {
                break;
            }
        }

        Self { buf, start }
    }

    /// The digit bytes followed by `%`.
    pub(crate) fn as_bytes(&self) -> &[u8] {
        &self.buf[self.start..]
    }

    /// Display columns consumed: digit count plus one for the `%` sign.
    pub(crate) fn columns(&self) -> usize {
        21 - self.start
    }
}

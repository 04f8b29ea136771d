use std::io::Write;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::ansi::{self, pad};
use crate::chars::CharIndex;
use crate::{Error, MIN_SPINNER_WIDTH};

/// The four-glyph rotation drawn in the bar's last column.
const GLYPHS: &[u8; 4] = b"-\\|/";

/// A single-line indeterminate progress bar: a message and a rotating glyph.
///
/// Use this when the percentage complete is not known. Every [`update`]
/// advances the rotation by one step, so repeated updates animate the glyph
/// regardless of whether the message changed.
///
/// ```rust,ignore
/// let mut bar = Spinner::new(80)?;
/// for entry in entries {
///     bar.update(&format!("scanning {entry}"));
///     bar.write_to(&mut std::io::stderr())?;
/// }
/// println!(); // newline after the finished bar
/// ```
///
/// [`update`]: Spinner::update
#[derive(Debug)]
pub struct Spinner {
    /// The formatted, printable bytes of the last update.
    formatted: Vec<u8>,
    /// Index into [`GLYPHS`]; wraps on every update.
    glyph: usize,
    /// Columns the bar should consume. Atomic for the same cross-thread
    /// resize contract as [`Percentage`](crate::Percentage).
    width: AtomicUsize,
}

impl Spinner {
    /// Creates a spinner bar `width` columns wide.
    ///
    /// Fails with [`Error::InvalidWidth`] when `width` is zero.
    pub fn new(width: usize) -> Result<Self, Error> {
        if width < MIN_SPINNER_WIDTH {
            return Err(Error::InvalidWidth {
                width,
                min: MIN_SPINNER_WIDTH,
            });
        }
        Ok(Self {
            formatted: Vec::new(),
            glyph: 0,
            width: AtomicUsize::new(width),
        })
    }

    /// Reformats the bar with a new message and the next rotation glyph.
    ///
    /// Never fails: a message longer than its allotted columns is truncated
    /// on a character boundary.
    pub fn update(&mut self, message: &str) {
        let width = self.width.load(Ordering::Relaxed);

        // The final column is reserved for the glyph.
        let message_columns = width.saturating_sub(1);

        let mut msg = CharIndex::new(message);
        msg.truncate(message_columns);
        let space_columns = message_columns - msg.len();

        #[cfg(feature = "tracing")]
        tracing::trace!(
            width,
            message_columns,
            space_columns,
            glyph = self.glyph,
            "spinner layout"
        );

        let buf = &mut self.formatted;
        buf.clear();
        buf.extend_from_slice(ansi::CURSOR_HOME);
        buf.extend_from_slice(msg.bytes());
        pad(buf, space_columns);
        buf.push(GLYPHS[self.glyph]);

        self.glyph = (self.glyph + 1) % GLYPHS.len();
    }

    /// Replaces the width used by subsequent updates.
    ///
    /// Safe to call from another thread (e.g. a terminal-resize handler)
    /// while the owner is rendering; takes effect on the next [`update`].
    ///
    /// [`update`]: Spinner::update
    pub fn resize(&self, width: usize) {
        self.width.store(width, Ordering::Relaxed);
    }

    /// Writes the ANSI byte sequence that redraws the bar to `sink`,
    /// returning the number of bytes written.
    ///
    /// The sink is flushed after a successful write. Errors come verbatim
    /// from the sink and are never retried here.
    pub fn write_to<W: Write + ?Sized>(&self, sink: &mut W) -> std::io::Result<usize> {
        sink.write_all(&self.formatted)?;
        sink.flush()?;
        Ok(self.formatted.len())
    }

    /// The formatted bytes of the last update.
    pub fn as_bytes(&self) -> &[u8] {
        &self.formatted
    }
}

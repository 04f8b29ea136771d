use std::io::Write;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::ansi::{self, PercentText, pad};
use crate::chars::CharIndex;
use crate::{Error, MIN_PERCENTAGE_WIDTH};

/// A single-line progress bar showing a message and the percentage complete.
///
/// The completed portion of the line is drawn in reverse video: the fill
/// boundary advances one column at a time across the message, the padding,
/// and finally the percentage text itself. Each [`update`] rewrites an
/// internal buffer in place; [`write_to`] sends it to the terminal.
///
/// ```rust,ignore
/// let mut bar = Percentage::new(80)?;
/// for i in 0..=100 {
///     bar.update("processing entries", i);
///     bar.write_to(&mut std::io::stderr())?;
/// }
/// println!(); // newline after the finished bar
/// ```
///
/// [`update`]: Percentage::update
/// [`write_to`]: Percentage::write_to
#[derive(Debug)]
pub struct Percentage {
    /// The formatted, printable bytes of the last update.
    formatted: Vec<u8>,
    /// Columns the bar should consume. Atomic so a resize-signal thread can
    /// store a new width while the render loop reads it; all other state is
    /// single-owner through `&mut self`.
    width: AtomicUsize,
}

impl Percentage {
    /// Creates a percentage bar `width` columns wide.
    ///
    /// Fails with [`Error::InvalidWidth`] when `width` is less than 4, the
    /// minimum needed to print a three-digit percentage and its `%` sign.
    pub fn new(width: usize) -> Result<Self, Error> {
        if width < MIN_PERCENTAGE_WIDTH {
            return Err(Error::InvalidWidth {
                width,
                min: MIN_PERCENTAGE_WIDTH,
            });
        }
        Ok(Self {
            formatted: Vec::new(),
            width: AtomicUsize::new(width),
        })
    }

    /// Reformats the bar with a new message and percentage.
    ///
    /// Never fails: a message longer than its allotted columns is truncated
    /// on a character boundary, and a percentage over 100 fills the whole
    /// line while the printed number keeps the raw value.
    pub fn update(&mut self, message: &str, percentage: u64) {
        let width = self.width.load(Ordering::Relaxed);

        // Columns drawn in reverse video, clamped so the fill never
        // overruns the line when percentage exceeds 100.
        let reverse = ((width as u64).saturating_mul(percentage) / 100).min(width as u64) as usize;

        let percent = PercentText::new(percentage);
        let lpercent = percent.columns();

        // Columns left of the percentage text, shared by message and spaces.
        let message_columns = width.saturating_sub(lpercent);

        let mut msg = CharIndex::new(message);
        msg.truncate(message_columns);
        let lmsg = msg.len();
        let space_columns = message_columns - lmsg;

        #[cfg(feature = "tracing")]
        tracing::trace!(
            width,
            percentage,
            reverse,
            message_columns,
            space_columns,
            "percentage layout"
        );

        let buf = &mut self.formatted;
        buf.clear();
        buf.extend_from_slice(ansi::REVERSE_ON);

        // The reverse-off escape lands at exactly `reverse` columns in,
        // wherever that falls: inside the message, at its end, inside the
        // padding, at the padding's end, inside the percentage text, or at
        // the end of the line.
        if reverse < lmsg {
            buf.extend_from_slice(msg.slice(..reverse));
            buf.extend_from_slice(ansi::REVERSE_OFF);
            buf.extend_from_slice(msg.slice(reverse..));
            pad(buf, space_columns);
            buf.extend_from_slice(percent.as_bytes());
        } else if reverse == lmsg {
            buf.extend_from_slice(msg.bytes());
            buf.extend_from_slice(ansi::REVERSE_OFF);
            pad(buf, space_columns);
            buf.extend_from_slice(percent.as_bytes());
        } else if reverse < message_columns {
            buf.extend_from_slice(msg.bytes());
            pad(buf, reverse - lmsg);
            buf.extend_from_slice(ansi::REVERSE_OFF);
            pad(buf, message_columns - reverse);
            buf.extend_from_slice(percent.as_bytes());
        } else if reverse == message_columns {
            buf.extend_from_slice(msg.bytes());
            pad(buf, space_columns);
            buf.extend_from_slice(ansi::REVERSE_OFF);
            buf.extend_from_slice(percent.as_bytes());
        } else if reverse < width {
            let split = reverse - message_columns;
            buf.extend_from_slice(msg.bytes());
            pad(buf, space_columns);
            buf.extend_from_slice(&percent.as_bytes()[..split]);
            buf.extend_from_slice(ansi::REVERSE_OFF);
            buf.extend_from_slice(&percent.as_bytes()[split..]);
        } else {
            buf.extend_from_slice(msg.bytes());
            pad(buf, space_columns);
            buf.extend_from_slice(percent.as_bytes());
            buf.extend_from_slice(ansi::REVERSE_OFF);
        }
    }

    /// Replaces the width used by subsequent updates.
    ///
    /// Safe to call from another thread (e.g. a terminal-resize handler)
    /// while the owner is rendering; takes effect on the next [`update`].
    ///
    /// [`update`]: Percentage::update
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

//! Output Buffer - single-line terminal redraws
//!
//! Progress indicators redraw one terminal line over and over. Each frame is
//! queued into the underlying writer and flushed as a unit so a frame is
//! never half-written when the next one starts.
//!
//! Write errors are ignored. A status line is never worth failing the
//! caller over.

use crossterm::{
    QueueableCommand, cursor,
    style::Print,
    terminal::{Clear, ClearType},
};
use std::io::Write;

/// A writer wrapper that speaks the carriage-return redraw protocol
#[derive(Debug)]
pub struct OutputBuffer<W: Write> {
    out: W,
}

impl<W: Write> OutputBuffer<W> {
    /// Wrap a writer
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Draw an in-progress frame: hide the cursor, return to column 0 and
    /// overwrite the line.
    pub fn frame(&mut self, line: &str) {
        let _ = self.out.queue(cursor::Hide);
        let _ = self.out.queue(Print('\r'));
        let _ = self.out.queue(Print(line));
        self.flush();
    }

    /// Draw the last frame of an indicator, then restore the cursor and end
    /// the line.
    pub fn final_frame(&mut self, line: &str) {
        let _ = self.out.queue(cursor::Hide);
        let _ = self.out.queue(Print('\r'));
        let _ = self.out.queue(Print(line));
        let _ = self.out.queue(cursor::Show);
        let _ = self.out.queue(Print('\n'));
        self.flush();
    }

    /// Erase the current line and restore the cursor, leaving no trace.
    pub fn erase(&mut self) {
        let _ = self.out.queue(Print('\r'));
        let _ = self.out.queue(Clear(ClearType::CurrentLine));
        let _ = self.out.queue(cursor::Show);
        self.flush();
    }

    /// Restore the cursor and move to a fresh line.
    pub fn release(&mut self) {
        let _ = self.out.queue(cursor::Show);
        let _ = self.out.queue(Print('\n'));
        self.flush();
    }

    /// Flush queued output to the writer
    pub fn flush(&mut self) {
        let _ = self.out.flush();
    }

    /// Give the writer back
    pub fn into_inner(self) -> W {
        self.out
    }
}

//! Message builder
//!
//! Collects a multi-line message and writes it in one go, so framing text
//! around a table or an indicator is not interleaved with other output.

use std::io::{self, Stdout, Write};

/// Accumulates text and renders it to `W`
#[derive(Debug)]
pub struct Output<W: Write = Stdout> {
    msg: String,
    writer: W,
}

impl Output<Stdout> {
    /// Builder that renders to stdout
    pub fn new() -> Self {
        Self::with_writer(io::stdout())
    }
}

impl Default for Output<Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> Output<W> {
    /// Builder that renders to `writer`
    pub fn with_writer(writer: W) -> Self {
        Self {
            msg: String::new(),
            writer,
        }
    }

    /// Append `text`
    pub fn add(&mut self, text: impl AsRef<str>) -> &mut Self {
        self.msg.push_str(text.as_ref());
        self
    }

    /// Append `text`, ending it with a newline unless it already has one
    pub fn addln(&mut self, text: impl AsRef<str>) -> &mut Self {
        let text = text.as_ref();
        self.msg.push_str(text);
        if !text.ends_with('\n') {
            self.msg.push('\n');
        }
        self
    }

    /// Append one newline
    pub fn newline(&mut self) -> &mut Self {
        self.newlines(1)
    }

    /// Append `n` newlines
    pub fn newlines(&mut self, n: usize) -> &mut Self {
        self.msg.extend(std::iter::repeat_n('\n', n));
        self
    }

    /// The message so far
    pub fn finalize(&self) -> &str {
        &self.msg
    }

    /// Write the message and flush
    pub fn render(&mut self) -> io::Result<()> {
        self.writer.write_all(self.msg.as_bytes())?;
        self.writer.flush()
    }

    /// Give the writer back
    pub fn into_inner(self) -> W {
        self.writer
    }
}

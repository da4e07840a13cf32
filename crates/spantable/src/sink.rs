//! Output sinks for rendered tables.
//!
//! The renderer never writes to a global stream. Everything goes through a
//! [`Sink`], called once per border or cell segment and once per line
//! terminator, strictly in order.
//!
//! ```rust
//! use spantable::Sink;
//!
//! let mut out = String::new();
//! out.write("|abc|").unwrap();
//! out.write("\n").unwrap();
//! assert_eq!(out, "|abc|\n");
//! ```

use std::io::{self, Write};

/// A destination for rendered text.
pub trait Sink {
    /// Write `text` verbatim.
    fn write(&mut self, text: &str) -> io::Result<()>;
}

/// Capturing sink; never fails.
impl Sink for String {
    fn write(&mut self, text: &str) -> io::Result<()> {
        self.push_str(text);
        Ok(())
    }
}

impl<S: Sink + ?Sized> Sink for &mut S {
    fn write(&mut self, text: &str) -> io::Result<()> {
        (**self).write(text)
    }
}

/// Adapter writing UTF-8 text to any [`io::Write`].
///
/// No buffering is added; wrap the writer in a `BufWriter` if needed.
#[derive(Debug)]
pub struct IoSink<W> {
    inner: W,
}

impl<W: Write> IoSink<W> {
    /// Wrap a writer.
    pub fn new(inner: W) -> Self {
        IoSink { inner }
    }

    /// Flush the underlying writer.
    pub fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }

    /// Unwrap the underlying writer.
    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: Write> Sink for IoSink<W> {
    fn write(&mut self, text: &str) -> io::Result<()> {
        self.inner.write_all(text.as_bytes())
    }
}

//! Reading a stream to the end and closing it

use crate::{error::Failure, report::Report};
use std::{
    fs::File,
    io::{self, Cursor, Read},
    net::{Shutdown, TcpStream},
};

/// A stream that must be released explicitly
///
/// [`read_and_close`] calls [`Close::close`] exactly once, after reading.
///
/// Only implementations whose release can fail report errors here. The standard
/// library closes a [`File`] on drop and discards the result, so closing a [`File`]
/// always succeeds. A [`TcpStream`] reports shutdown errors.
pub trait Close {
    /// Releases the stream
    ///
    /// # Errors
    /// Returns the error reported by the underlying resource
    fn close(&mut self) -> io::Result<()>;
}

impl<T> Close for Cursor<T> {
    fn close(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Close for &[u8] {
    fn close(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// The descriptor itself is released when the [`File`] is dropped
impl Close for File {
    fn close(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Close for TcpStream {
    fn close(&mut self) -> io::Result<()> {
        match self.shutdown(Shutdown::Both) {
            Err(error) if error.kind() == io::ErrorKind::NotConnected => Ok(()),
            result => result,
        }
    }
}

impl<C: Close + ?Sized> Close for Box<C> {
    fn close(&mut self) -> io::Result<()> {
        (**self).close()
    }
}

/// Closes the stream when dropped, also while unwinding from a fatal failure
struct Closing<'a, S: Close> {
    report: &'a mut dyn Report,
    stream: S,
}

impl<S: Close> Drop for Closing<'_, S> {
    fn drop(&mut self) {
        if let Err(error) = self.stream.close() {
            #[cfg(feature = "tracing")]
            tracing::debug!(%error, "Failed to close stream");

            self.report.error(Failure::Close(error.to_string()));
        }
    }
}

/// Reads `stream` to the end and closes it
///
/// The stream is closed on every path, including a failed read. A close error
/// is reported as a non-fatal [`Failure::Close`]. A read error (or a missing
/// stream) is reported with [`Report::fatal`], so this function does not return.
///
/// # Example
/// ```
/// use testing_assert::prelude::*;
/// use std::io::Cursor;
///
/// let mut t = TestContext::new("read_body");
/// let body = read_and_close(&mut t, Some(Cursor::new(b"hello".to_vec())));
///
/// assert_eq!(body, b"hello");
/// t.finish();
/// ```
#[cfg_attr(feature = "tracing", tracing::instrument(skip_all))]
pub fn read_and_close<S>(report: &mut dyn Report, stream: Option<S>) -> Vec<u8>
where
    S: Read + Close,
{
    let Some(stream) = stream else {
        report.fatal(Failure::Read("no stream".to_string()));
    };

    let mut closing = Closing { report, stream };

    let mut data = Vec::new();
    if let Err(error) = closing.stream.read_to_end(&mut data) {
        closing.report.fatal(Failure::Read(error.to_string()));
    }

    #[cfg(feature = "tracing")]
    tracing::trace!(len = data.len(), "Stream read to the end");

    data
}

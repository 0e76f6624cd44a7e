use crate::chain::Aggregate;
use std::{
    cell::Cell,
    error::Error,
    io::{self, Read},
    rc::Rc,
};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub(crate) enum Inner {
    #[error("not found")]
    NotFound,

    #[error("timeout")]
    Timeout,

    #[error("code {0}")]
    Code(u32),
}

#[derive(Debug, Error)]
pub(crate) enum Outer {
    #[error("wrapped: {0}")]
    Wrapped(#[from] Inner),

    #[error("many: {0}")]
    Many(#[source] Aggregate),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub(crate) enum Middle {
    #[error("retry exhausted: {0}")]
    Retry(#[source] Inner),
}

#[derive(Debug, Error)]
pub(crate) enum Top {
    #[error("request failed")]
    Request(#[source] Outer),

    #[error("job failed")]
    Job(#[source] Middle),
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unrelated")]
pub(crate) struct Unrelated;

#[derive(Debug, Error)]
#[error("link")]
pub(crate) struct Link {
    source: Box<dyn Error + Send + Sync>,
}

/// Builds `depth` links ending with [`Inner::NotFound`]
pub(crate) fn chain_of(depth: usize) -> Link {
    let mut link = Link {
        source: Box::new(Inner::NotFound),
    };

    for _ in 1..depth {
        link = Link {
            source: Box::new(link),
        };
    }

    link
}

/// In-memory stream with injectable read/close errors
#[derive(Debug)]
pub(crate) struct TestStream {
    data: io::Cursor<Vec<u8>>,
    fail_read: bool,
    fail_close: bool,
    closed: Rc<Cell<bool>>,
}

impl TestStream {
    pub(crate) fn new(data: &[u8]) -> Self {
        Self {
            data: io::Cursor::new(data.to_vec()),
            fail_read: false,
            fail_close: false,
            closed: Rc::default(),
        }
    }

    pub(crate) fn fail_read(mut self) -> Self {
        self.fail_read = true;
        self
    }

    pub(crate) fn fail_close(mut self) -> Self {
        self.fail_close = true;
        self
    }

    pub(crate) fn closed(&self) -> Rc<Cell<bool>> {
        Rc::clone(&self.closed)
    }
}

impl Read for TestStream {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if self.fail_read {
            return Err(io::Error::new(io::ErrorKind::ConnectionReset, "reset"));
        }

        self.data.read(buf)
    }
}

impl crate::stream::Close for TestStream {
    fn close(&mut self) -> io::Result<()> {
        self.closed.set(true);

        if self.fail_close {
            return Err(io::Error::new(io::ErrorKind::BrokenPipe, "broken"));
        }

        Ok(())
    }
}

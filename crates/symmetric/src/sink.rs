//! Push-style destinations for produced output
//!
//! A [`Sink`] owns the capability a context pushes chunks into. It is either
//! a bare consumer closure, or a consumer bound to a receiver value that is
//! passed as the leading argument on every push. The binding is fixed when
//! the sink is built, so a sink can never be half configured.
//!
//! Each push returns a [`SinkFlow`]. [`SinkFlow::Suspend`] accepts the chunk
//! but asks the producing context to park the current write; see
//! [`PendingWrite`](crate::PendingWrite).

use core::any::Any;
use core::fmt;

use api::error::{Error, Result};

/// What a sink wants the producer to do after accepting a chunk
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SinkFlow {
    /// Keep producing
    Continue,
    /// Park the write after this chunk; it is resumed explicitly
    Suspend,
}

/// An object that can take produced chunks
///
/// [`Sink::writer`] binds such an object as the receiver of its own
/// `write_chunk` method.
pub trait ChunkWriter {
    /// Accepts one chunk of output
    fn write_chunk(&mut self, chunk: &[u8]) -> Result<SinkFlow>;
}

impl ChunkWriter for Vec<u8> {
    fn write_chunk(&mut self, chunk: &[u8]) -> Result<SinkFlow> {
        self.extend_from_slice(chunk);
        Ok(SinkFlow::Continue)
    }
}

type Consumer = Box<dyn FnMut(&[u8]) -> Result<SinkFlow>>;
type BoundConsumer = Box<dyn FnMut(&mut dyn Any, &[u8]) -> Result<SinkFlow>>;

enum Binding {
    Consumer(Consumer),
    Bound {
        receiver: Box<dyn Any>,
        consumer: BoundConsumer,
    },
}

/// Owned push destination for a streaming context
pub struct Sink {
    binding: Binding,
}

impl Sink {
    /// Sink that calls `consumer` with every chunk
    pub fn consumer<F>(consumer: F) -> Self
    where
        F: FnMut(&[u8]) -> Result<SinkFlow> + 'static,
    {
        Self {
            binding: Binding::Consumer(Box::new(consumer)),
        }
    }

    /// Sink that calls `consumer(&mut receiver, chunk)` with every chunk
    pub fn bound<R, F>(receiver: R, mut consumer: F) -> Self
    where
        R: 'static,
        F: FnMut(&mut R, &[u8]) -> Result<SinkFlow> + 'static,
    {
        let consumer = move |receiver: &mut dyn Any, chunk: &[u8]| {
            match receiver.downcast_mut::<R>() {
                Some(receiver) => consumer(receiver, chunk),
                None => Err(Error::InvalidState {
                    context: "sink push",
                    message: "receiver does not match its consumer",
                }),
            }
        };
        Self {
            binding: Binding::Bound {
                receiver: Box::new(receiver),
                consumer: Box::new(consumer),
            },
        }
    }

    /// Sink bound to `writer`'s [`ChunkWriter::write_chunk`]
    pub fn writer<W>(writer: W) -> Self
    where
        W: ChunkWriter + 'static,
    {
        Self::bound(writer, W::write_chunk)
    }

    /// Sink that writes every chunk into a `std::io` writer
    ///
    /// I/O failures surface as [`Error::Sink`].
    pub fn io<W>(writer: W) -> Self
    where
        W: std::io::Write + 'static,
    {
        Self::bound(writer, |writer: &mut W, chunk: &[u8]| {
            writer.write_all(chunk)?;
            Ok(SinkFlow::Continue)
        })
    }

    /// Returns `true` if the sink carries a receiver
    pub fn has_receiver(&self) -> bool {
        matches!(self.binding, Binding::Bound { .. })
    }

    /// Borrows the receiver if it is an `R`
    pub fn receiver<R: 'static>(&self) -> Option<&R> {
        match &self.binding {
            Binding::Bound { receiver, .. } => receiver.downcast_ref::<R>(),
            Binding::Consumer(_) => None,
        }
    }

    /// Mutably borrows the receiver if it is an `R`
    pub fn receiver_mut<R: 'static>(&mut self) -> Option<&mut R> {
        match &mut self.binding {
            Binding::Bound { receiver, .. } => receiver.downcast_mut::<R>(),
            Binding::Consumer(_) => None,
        }
    }

    /// Consumes the sink and returns its receiver
    ///
    /// Gives the sink back unchanged when there is no receiver of type `R`.
    pub fn into_receiver<R: 'static>(self) -> core::result::Result<R, Self> {
        match self.binding {
            Binding::Bound { receiver, consumer } => match receiver.downcast::<R>() {
                Ok(receiver) => Ok(*receiver),
                Err(receiver) => Err(Self {
                    binding: Binding::Bound { receiver, consumer },
                }),
            },
            binding => Err(Self { binding }),
        }
    }

    /// Delivers one chunk
    pub(crate) fn push(&mut self, chunk: &[u8]) -> Result<SinkFlow> {
        match &mut self.binding {
            Binding::Consumer(consumer) => consumer(chunk),
            Binding::Bound { receiver, consumer } => consumer(&mut **receiver, chunk),
        }
    }
}

impl fmt::Debug for Sink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sink")
            .field("receiver", &self.has_receiver())
            .finish_non_exhaustive()
    }
}

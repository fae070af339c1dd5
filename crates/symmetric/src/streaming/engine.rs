//! The write pipeline shared by all modes
//!
//! A pass starts at a cursor into the caller's input and runs until the input
//! is used up or the sink asks to suspend. Suspension only ever happens right
//! after a chunk has been handed to the sink, at which point the tail buffer
//! is empty, so the cursor alone is enough to resume.

use tracing::trace;

use algorithms::{aligned_len, ModeStrategy, TailBuffer};
use api::error::Result;
use api::{BlockCipher, Direction};

use crate::sink::{Sink, SinkFlow};

/// Where produced chunks go
pub(crate) enum Emit<'s> {
    Collect(Vec<u8>),
    Push(&'s mut Sink),
}

impl Emit<'_> {
    fn emit(&mut self, chunk: &[u8]) -> Result<SinkFlow> {
        match self {
            Emit::Collect(out) => {
                out.extend_from_slice(chunk);
                Ok(SinkFlow::Continue)
            }
            Emit::Push(sink) => {
                trace!(len = chunk.len(), "pushing chunk");
                sink.push(chunk)
            }
        }
    }
}

/// How a pass ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Step {
    Done,
    Suspended(usize),
}

/// Borrowed working set of a context for one pass
pub(crate) struct Pass<'c, M, B> {
    pub strategy: &'c mut M,
    pub cipher: &'c B,
    pub direction: Direction,
    pub tail: &'c mut TailBuffer,
    pub scratch: &'c mut [u8],
    pub chunk_size: usize,
}

impl<M: ModeStrategy, B: BlockCipher> Pass<'_, M, B> {
    pub fn drive(&mut self, input: &[u8], cursor: usize, out: &mut Emit<'_>) -> Result<Step> {
        if self.strategy.needs_alignment() {
            self.drive_aligned(input, cursor, out)
        } else {
            self.drive_stream(input, cursor, out)
        }
    }

    fn drive_aligned(&mut self, input: &[u8], mut cursor: usize, out: &mut Emit<'_>) -> Result<Step> {
        let block_size = self.tail.block_size();

        if !self.tail.is_empty() {
            cursor += self.tail.fill_from(&input[cursor..]);
            if !self.tail.is_full() {
                return Ok(Step::Done);
            }
            // Tail stays below one block even if the transform fails;
            // scratch holds at least two blocks
            let (produced, block) = self.scratch[..2 * block_size].split_at_mut(block_size);
            block.copy_from_slice(self.tail.as_slice());
            self.tail.clear();
            self.strategy
                .transform_chunk(self.cipher, self.direction, block, produced)?;
            if out.emit(&self.scratch[..block_size])? == SinkFlow::Suspend {
                return Ok(Step::Suspended(cursor));
            }
        }

        let run = aligned_len(self.chunk_size, block_size);
        let end = cursor + aligned_len(input.len() - cursor, block_size);
        while cursor < end {
            let len = run.min(end - cursor);
            if self.transform_and_emit(&input[cursor..cursor + len], out)? == SinkFlow::Suspend {
                return Ok(Step::Suspended(cursor + len));
            }
            cursor += len;
        }

        self.tail.stash(&input[cursor..])?;
        Ok(Step::Done)
    }

    fn drive_stream(&mut self, input: &[u8], mut cursor: usize, out: &mut Emit<'_>) -> Result<Step> {
        while cursor < input.len() {
            let len = self.chunk_size.min(input.len() - cursor);
            if self.transform_and_emit(&input[cursor..cursor + len], out)? == SinkFlow::Suspend {
                return Ok(Step::Suspended(cursor + len));
            }
            cursor += len;
        }
        Ok(Step::Done)
    }

    fn transform_and_emit(&mut self, chunk: &[u8], out: &mut Emit<'_>) -> Result<SinkFlow> {
        let produced = &mut self.scratch[..chunk.len()];
        self.strategy
            .transform_chunk(self.cipher, self.direction, chunk, produced)?;
        out.emit(&self.scratch[..chunk.len()])
    }
}

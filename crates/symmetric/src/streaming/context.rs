//! Cipher context: lifecycle state machine and write entry points

use core::fmt;

use tracing::{debug, trace, warn};
use zeroize::{Zeroize, Zeroizing};

use algorithms::{Aes, ModeStrategy, TailBuffer};
use api::error::{validate, Error, Result};
use api::{BlockCipher, Direction, Mode};

use super::engine::{Emit, Pass, Step};
use super::pending::{next_ticket, PendingWrite};
use crate::config::ContextConfig;
use crate::sink::Sink;

/// Lifecycle state of a [`CipherContext`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContextState {
    /// Created or closed; writes are refused
    Closed,
    /// Keyed and accepting writes
    Open,
    /// Torn down for good
    Destroyed,
}

impl fmt::Display for ContextState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ContextState::Closed => "closed",
            ContextState::Open => "open",
            ContextState::Destroyed => "destroyed",
        })
    }
}

/// Outcome of [`CipherContext::write`]
#[must_use]
#[derive(Debug)]
pub enum WriteStatus<'a> {
    /// No sink is bound; everything produced by this write
    Collected(Vec<u8>),
    /// Every produced chunk was pushed into the sink
    Delivered,
    /// The sink asked to suspend; continue with
    /// [`CipherContext::continue_write`]
    Suspended(PendingWrite<'a>),
}

impl<'a> WriteStatus<'a> {
    /// Returns `true` if the write was parked
    pub fn is_suspended(&self) -> bool {
        matches!(self, WriteStatus::Suspended(_))
    }

    /// Collected output, if the context had no sink
    pub fn into_collected(self) -> Option<Vec<u8>> {
        match self {
            WriteStatus::Collected(out) => Some(out),
            _ => None,
        }
    }

    /// The parked write, if the sink suspended
    pub fn into_pending(self) -> Option<PendingWrite<'a>> {
        match self {
            WriteStatus::Suspended(pending) => Some(pending),
            _ => None,
        }
    }
}

/// Streaming context for one mode of operation over a block cipher
///
/// The context starts [`ContextState::Closed`]. [`open`](Self::open) keys it
/// and installs the IV, after which any number of writes of any length may
/// follow. For ECB and CBC, bytes that do not complete a block stay in an
/// internal tail buffer until a later write completes the block.
///
/// Without a sink every write returns its own output. With a sink bound,
/// output is pushed in chunks of at most [`chunk_size`](Self::chunk_size)
/// bytes, strictly in input order. If the sink answers
/// [`SinkFlow::Suspend`](crate::SinkFlow::Suspend) the write is parked and
/// handed back as a [`PendingWrite`]; no other write is accepted until it
/// has been continued.
///
/// A failed write is not rolled back: chunks pushed before the failure stay
/// pushed and the chaining state stays where it got to.
pub struct CipherContext<M: ModeStrategy, B: BlockCipher = Aes> {
    state: ContextState,
    direction: Direction,
    strategy: M,
    schedule: Option<B>,
    tail: TailBuffer,
    scratch: Zeroizing<Vec<u8>>,
    chunk_size: usize,
    sink: Option<Sink>,
    pending: Option<u64>,
}

impl<M: ModeStrategy, B: BlockCipher> CipherContext<M, B> {
    /// Creates a closed context
    ///
    /// Fails with `InvalidArgument` unless `chunk_size` holds at least two
    /// blocks.
    pub fn new(direction: Direction, chunk_size: usize) -> Result<Self> {
        Self::with_config(direction, &ContextConfig::new().with_chunk_size(chunk_size))
    }

    /// Closed encrypting context with the default configuration
    pub fn encryptor() -> Result<Self> {
        Self::with_config(Direction::Encrypt, &ContextConfig::default())
    }

    /// Closed decrypting context with the default configuration
    pub fn decryptor() -> Result<Self> {
        Self::with_config(Direction::Decrypt, &ContextConfig::default())
    }

    /// Creates a closed context from a full configuration
    pub fn with_config(direction: Direction, config: &ContextConfig) -> Result<Self> {
        config.validate(B::BLOCK_SIZE)?;
        let strategy = M::new(B::BLOCK_SIZE, &config.mode_options());
        Self::with_strategy(direction, config.chunk_size, strategy)
    }

    /// Creates a closed context around an already built strategy
    ///
    /// The scratch buffer of `chunk_size` bytes is allocated here; a size the
    /// allocator cannot satisfy is reported as `InvalidArgument`.
    pub fn with_strategy(direction: Direction, chunk_size: usize, strategy: M) -> Result<Self> {
        ContextConfig::new()
            .with_chunk_size(chunk_size)
            .validate(B::BLOCK_SIZE)?;
        let width = strategy.chaining_width();
        validate::parameter(
            width == 0 || width == B::BLOCK_SIZE,
            "strategy",
            "chaining register must be one block wide",
        )?;

        let mut scratch = Zeroizing::new(Vec::new());
        scratch
            .try_reserve_exact(chunk_size)
            .map_err(|_| Error::argument("chunk_size", "scratch buffer cannot be allocated"))?;
        scratch.resize(chunk_size, 0);

        Ok(Self {
            state: ContextState::Closed,
            direction,
            strategy,
            schedule: None,
            tail: TailBuffer::new(B::BLOCK_SIZE),
            scratch,
            chunk_size,
            sink: None,
            pending: None,
        })
    }

    /// Keys the context and installs the IV
    ///
    /// The IV is checked before the key. Only the first block of a longer IV
    /// is used; ECB ignores it. Any residue left in the tail by an earlier
    /// session is discarded.
    pub fn open(&mut self, key: &[u8], iv: Option<&[u8]>) -> Result<()> {
        self.ensure_alive("open")?;
        validate::state(self.state != ContextState::Open, "open", "context is already open")?;

        let width = self.strategy.chaining_width();
        if width > 0 {
            validate::iv_length("IV", iv.map_or(0, <[u8]>::len), width)?;
        }
        let schedule = B::key_setup(self.strategy.key_direction(self.direction), key)?;
        self.strategy.install(iv)?;

        self.schedule = Some(schedule);
        self.tail.clear();
        self.state = ContextState::Open;
        debug!(
            mode = M::MODE.name(),
            direction = ?self.direction,
            key_len = key.len(),
            "cipher context opened"
        );
        Ok(())
    }

    /// Stops accepting writes
    ///
    /// The key schedule and chaining register are kept until the next
    /// [`open`](Self::open) replaces them. A parked write is dropped.
    pub fn close(&mut self) -> Result<()> {
        self.ensure_alive("close")?;
        validate::state(self.state == ContextState::Open, "close", "context is not open")?;

        if self.pending.take().is_some() {
            warn!(mode = M::MODE.name(), "closing context with a suspended write; it is discarded");
        }
        self.state = ContextState::Closed;
        debug!(mode = M::MODE.name(), tail_len = self.tail.len(), "cipher context closed");
        Ok(())
    }

    /// Reinstalls the chaining register and clears the keystream phase
    ///
    /// A no-op for ECB. The tail buffer is left alone. Refused while a write
    /// is parked.
    pub fn reset(&mut self, iv: Option<&[u8]>) -> Result<()> {
        self.ensure_alive("reset")?;
        validate::state(
            self.pending.is_none(),
            "reset",
            "a suspended write must be continued first",
        )?;

        self.strategy.install(iv)?;
        debug!(mode = M::MODE.name(), "cipher context reset");
        Ok(())
    }

    /// Tears the context down
    ///
    /// Releases the sink, drops the key schedule and wipes the chaining
    /// state, tail and scratch buffer. Calling it again does nothing.
    pub fn destroy(&mut self) {
        if self.state == ContextState::Destroyed {
            return;
        }
        self.sink = None;
        self.schedule = None;
        self.pending = None;
        self.strategy.wipe();
        self.tail.clear();
        self.scratch.as_mut_slice().zeroize();
        self.state = ContextState::Destroyed;
        debug!(mode = M::MODE.name(), "cipher context destroyed");
    }

    /// Binds a push sink, or reverts to collecting output with `None`
    ///
    /// Returns the previous sink.
    pub fn set_sink(&mut self, sink: Option<Sink>) -> Result<Option<Sink>> {
        self.ensure_alive("set_sink")?;
        debug!(
            mode = M::MODE.name(),
            push = sink.is_some(),
            receiver = sink.as_ref().map_or(false, Sink::has_receiver),
            "sink rebound"
        );
        Ok(core::mem::replace(&mut self.sink, sink))
    }

    /// Currently bound sink
    pub fn get_sink(&self) -> Result<Option<&Sink>> {
        self.ensure_alive("get_sink")?;
        Ok(self.sink.as_ref())
    }

    /// Currently bound sink, mutably
    pub fn get_sink_mut(&mut self) -> Result<Option<&mut Sink>> {
        self.ensure_alive("get_sink")?;
        Ok(self.sink.as_mut())
    }

    /// Unbinds and returns the sink; later writes collect their output
    pub fn take_sink(&mut self) -> Result<Option<Sink>> {
        self.ensure_alive("take_sink")?;
        Ok(self.sink.take())
    }

    /// Feeds `data` through the mode
    ///
    /// Fails with `InvalidState` unless the context is open with no parked
    /// write.
    pub fn write<'a>(&mut self, data: &'a [u8]) -> Result<WriteStatus<'a>> {
        self.ensure_alive("write")?;
        validate::state(self.state == ContextState::Open, "write", "context is not open")?;
        validate::state(
            self.pending.is_none(),
            "write",
            "a suspended write must be continued first",
        )?;
        self.run(data, 0)
    }

    /// Resumes a write parked by this context
    ///
    /// Fails with `InvalidArgument` if `pending` was not the write this
    /// context parked last.
    pub fn continue_write<'a>(&mut self, pending: PendingWrite<'a>) -> Result<WriteStatus<'a>> {
        self.ensure_alive("continue_write")?;
        validate::state(
            self.state == ContextState::Open,
            "continue_write",
            "context is not open",
        )?;
        if self.pending != Some(pending.ticket) {
            return Err(Error::argument(
                "pending",
                "write was not suspended by this context",
            ));
        }
        self.pending = None;
        trace!(offset = pending.offset, remaining = pending.remaining(), "resuming write");
        self.run(pending.input, pending.offset)
    }

    /// Writes `data` and returns the output
    ///
    /// Only available while no sink is bound.
    pub fn process(&mut self, data: &[u8]) -> Result<Vec<u8>> {
        self.ensure_alive("process")?;
        validate::state(self.sink.is_none(), "process", "output goes to the bound sink")?;
        self.write(data)?
            .into_collected()
            .ok_or(Error::InvalidState {
                context: "process",
                message: "output goes to the bound sink",
            })
    }

    fn run<'a>(&mut self, input: &'a [u8], offset: usize) -> Result<WriteStatus<'a>> {
        let Self {
            direction,
            strategy,
            schedule,
            tail,
            scratch,
            chunk_size,
            sink,
            pending,
            ..
        } = self;
        let cipher = schedule.as_ref().ok_or(Error::InvalidState {
            context: "write",
            message: "no key schedule installed",
        })?;

        let mut out = match sink.as_mut() {
            Some(sink) => Emit::Push(sink),
            None => Emit::Collect(Vec::with_capacity(input.len() - offset + tail.len())),
        };
        let mut pass = Pass {
            strategy,
            cipher,
            direction: *direction,
            tail,
            scratch: scratch.as_mut_slice(),
            chunk_size: *chunk_size,
        };

        match pass.drive(input, offset, &mut out)? {
            Step::Done => Ok(match out {
                Emit::Collect(collected) => WriteStatus::Collected(collected),
                Emit::Push(_) => WriteStatus::Delivered,
            }),
            Step::Suspended(cursor) => {
                let ticket = next_ticket();
                *pending = Some(ticket);
                trace!(offset = cursor, len = input.len(), "write suspended by sink");
                Ok(WriteStatus::Suspended(PendingWrite::new(input, cursor, ticket)))
            }
        }
    }

    fn ensure_alive(&self, context: &'static str) -> Result<()> {
        validate::state(
            self.state != ContextState::Destroyed,
            context,
            "context has been destroyed",
        )
    }

    /// Current lifecycle state
    pub fn state(&self) -> ContextState {
        self.state
    }

    /// Returns `true` while the context accepts writes
    pub fn is_open(&self) -> bool {
        self.state == ContextState::Open
    }

    /// Returns `true` while the context is closed
    pub fn is_closed(&self) -> bool {
        self.state == ContextState::Closed
    }

    /// Returns `true` once the context has been destroyed
    pub fn is_destroyed(&self) -> bool {
        self.state == ContextState::Destroyed
    }

    /// Returns `true` while a suspended write is waiting to be continued
    pub fn has_pending_write(&self) -> bool {
        self.pending.is_some()
    }

    /// Mode of operation
    pub fn mode(&self) -> Mode {
        M::MODE
    }

    /// Direction fixed at construction
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Largest chunk pushed to a sink
    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    /// Block size of the primitive
    pub fn block_size(&self) -> usize {
        B::BLOCK_SIZE
    }

    /// Bytes waiting in the tail buffer
    pub fn tail_len(&self) -> usize {
        self.tail.len()
    }

    /// Chaining register (IV, feedback register or counter)
    pub fn register(&self) -> Option<&[u8]> {
        self.strategy.register()
    }

    /// The mode strategy
    pub fn strategy(&self) -> &M {
        &self.strategy
    }
}

impl<M: ModeStrategy, B: BlockCipher> fmt::Display for CipherContext<M, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} context ({})", M::MODE, self.state)
    }
}

impl<M: ModeStrategy, B: BlockCipher> fmt::Debug for CipherContext<M, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CipherContext")
            .field("mode", &M::MODE)
            .field("direction", &self.direction)
            .field("state", &self.state)
            .field("chunk_size", &self.chunk_size)
            .field("tail_len", &self.tail.len())
            .field("sink", &self.sink)
            .field("pending", &self.pending.is_some())
            .finish_non_exhaustive()
    }
}

//! Counter (CTR) mode
//!
//! Counter mode turns a block cipher into a stream cipher by encrypting
//! successive values of a counter and XORing the result with the data.
//!
//! The whole block is the counter. The keystream block is derived from the
//! current counter value when the previous one is used up, and the counter
//! is incremented only after its keystream block has been fully consumed:
//! after exactly one block of data the counter has moved by one, while a
//! partial block leaves it untouched. The increment policy decides which end
//! of the block holds the least significant byte; both wrap at 2^(8*n).

use zeroize::{Zeroize, Zeroizing};

use api::error::Result;
use api::{BlockCipher, CounterIncrement, Direction, Mode};

use super::{check_lengths, load_register, ModeOptions, ModeStrategy};

/// Increments a counter block by one according to `policy`
///
/// `Backward` treats the block as a big-endian integer (carry runs from the
/// last byte towards the first), `Forward` as little-endian.
pub fn increment_counter(counter: &mut [u8], policy: CounterIncrement) {
    fn bump<'a>(bytes: impl Iterator<Item = &'a mut u8>) {
        for byte in bytes {
            *byte = byte.wrapping_add(1);
            if *byte != 0 {
                break;
            }
        }
    }

    match policy {
        CounterIncrement::Forward => bump(counter.iter_mut()),
        CounterIncrement::Backward => bump(counter.iter_mut().rev()),
    }
}

/// CTR mode strategy
pub struct Ctr {
    counter: Zeroizing<Vec<u8>>,
    keystream: Zeroizing<Vec<u8>>,
    pos: usize,
    increment: CounterIncrement,
}

impl Ctr {
    /// Offset into the current keystream block
    pub fn phase(&self) -> usize {
        self.pos
    }
}

impl ModeStrategy for Ctr {
    const MODE: Mode = Mode::Ctr;

    fn new(block_size: usize, options: &ModeOptions) -> Self {
        Self {
            counter: Zeroizing::new(vec![0u8; block_size]),
            keystream: Zeroizing::new(vec![0u8; block_size]),
            pos: 0,
            increment: options.counter_increment,
        }
    }

    fn needs_alignment(&self) -> bool {
        false
    }

    fn chaining_width(&self) -> usize {
        self.counter.len()
    }

    fn key_direction(&self, _direction: Direction) -> Direction {
        Direction::Encrypt
    }

    fn install(&mut self, iv: Option<&[u8]>) -> Result<()> {
        load_register(&mut self.counter, iv, "CTR IV")?;
        self.keystream.as_mut_slice().zeroize();
        self.pos = 0;
        Ok(())
    }

    fn register(&self) -> Option<&[u8]> {
        Some(&self.counter)
    }

    fn transform_chunk<B: BlockCipher>(
        &mut self,
        cipher: &B,
        _direction: Direction,
        input: &[u8],
        output: &mut [u8],
    ) -> Result<()> {
        check_lengths("CTR output", input, output)?;
        let block_size = self.counter.len();

        let mut done = 0;
        while done < input.len() {
            if self.pos == 0 {
                self.keystream.copy_from_slice(&self.counter);
                cipher.encrypt_block(&mut self.keystream[..])?;
            }
            let take = (block_size - self.pos).min(input.len() - done);
            let keystream = &self.keystream[self.pos..self.pos + take];
            for ((d, s), k) in output[done..done + take]
                .iter_mut()
                .zip(&input[done..done + take])
                .zip(keystream)
            {
                *d = s ^ k;
            }

            done += take;
            self.pos += take;
            if self.pos == block_size {
                increment_counter(&mut self.counter, self.increment);
                self.pos = 0;
            }
        }

        Ok(())
    }

    fn wipe(&mut self) {
        self.counter.as_mut_slice().zeroize();
        self.keystream.as_mut_slice().zeroize();
        self.pos = 0;
    }
}

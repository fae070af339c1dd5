//! Property-based tests for streaming contexts

use cipherflow_algorithms::Aes;
use cipherflow_symmetric::{
    Cbc, Cfb, CipherContext, ContextConfig, CounterIncrement, Ctr, CtrContext, Direction, Ecb,
    ModeStrategy, Ofb,
};
use cipherflow_tests::{recorded, recorder, write_to_completion};
use proptest::prelude::*;

fn key() -> impl Strategy<Value = Vec<u8>> {
    prop_oneof![
        prop::collection::vec(any::<u8>(), 16),
        prop::collection::vec(any::<u8>(), 24),
        prop::collection::vec(any::<u8>(), 32),
    ]
}

fn context<M: ModeStrategy>(
    direction: Direction,
    chunk_size: usize,
    key: &[u8],
    iv: &[u8],
) -> CipherContext<M, Aes> {
    let mut ctx: CipherContext<M, Aes> = CipherContext::new(direction, chunk_size).unwrap();
    ctx.open(key, Some(iv)).unwrap();
    ctx
}

/// Feeds `data` in pieces of the given lengths, then the remainder
fn split_process<M: ModeStrategy>(
    ctx: &mut CipherContext<M, Aes>,
    data: &[u8],
    pieces: &[usize],
) -> Vec<u8> {
    let mut out = Vec::new();
    let mut rest = data;
    for &len in pieces {
        let (piece, tail) = rest.split_at(len.min(rest.len()));
        out.extend(ctx.process(piece).unwrap());
        rest = tail;
    }
    out.extend(ctx.process(rest).unwrap());
    out
}

fn split_matches_single<M: ModeStrategy>(
    key: &[u8],
    iv: &[u8],
    data: &[u8],
    pieces: &[usize],
    chunk_size: usize,
) -> Result<(), TestCaseError> {
    let single = context::<M>(Direction::Encrypt, chunk_size, key, iv)
        .process(data)
        .unwrap();
    let mut ctx = context::<M>(Direction::Encrypt, chunk_size, key, iv);
    let split = split_process(&mut ctx, data, pieces);
    prop_assert_eq!(split, single);
    Ok(())
}

fn suspended_matches_collected<M: ModeStrategy>(
    key: &[u8],
    iv: &[u8],
    data: &[u8],
    pieces: &[usize],
    chunk_size: usize,
) -> Result<(), TestCaseError> {
    let collected = context::<M>(Direction::Encrypt, chunk_size, key, iv)
        .process(data)
        .unwrap();

    let mut ctx = context::<M>(Direction::Encrypt, chunk_size, key, iv);
    ctx.set_sink(Some(recorder(true))).unwrap();
    let mut rest = data;
    for &len in pieces {
        let (piece, tail) = rest.split_at(len.min(rest.len()));
        write_to_completion(&mut ctx, piece);
        rest = tail;
    }
    write_to_completion(&mut ctx, rest);

    let chunks = recorded(&mut ctx);
    prop_assert!(chunks.iter().all(|chunk| chunk.len() <= chunk_size));
    prop_assert_eq!(chunks.concat(), collected);
    Ok(())
}

fn roundtrip<M: ModeStrategy>(key: &[u8], iv: &[u8], data: &[u8]) -> Result<(), TestCaseError> {
    let ciphertext = context::<M>(Direction::Encrypt, 64, key, iv)
        .process(data)
        .unwrap();
    let plaintext = context::<M>(Direction::Decrypt, 64, key, iv)
        .process(&ciphertext)
        .unwrap();
    prop_assert_eq!(plaintext, data);
    Ok(())
}

proptest! {
    #[test]
    fn split_writes_match_single_write(
        key in key(),
        iv in any::<[u8; 16]>(),
        data in prop::collection::vec(any::<u8>(), 0..300),
        pieces in prop::collection::vec(0usize..70, 0..8),
        chunk_size in 32usize..200,
    ) {
        split_matches_single::<Ecb>(&key, &iv, &data, &pieces, chunk_size)?;
        split_matches_single::<Cbc>(&key, &iv, &data, &pieces, chunk_size)?;
        split_matches_single::<Cfb>(&key, &iv, &data, &pieces, chunk_size)?;
        split_matches_single::<Ofb>(&key, &iv, &data, &pieces, chunk_size)?;
        split_matches_single::<Ctr>(&key, &iv, &data, &pieces, chunk_size)?;
    }

    #[test]
    fn suspending_sink_matches_collected_output(
        key in key(),
        iv in any::<[u8; 16]>(),
        data in prop::collection::vec(any::<u8>(), 0..300),
        pieces in prop::collection::vec(0usize..70, 0..6),
        chunk_size in 32usize..100,
    ) {
        suspended_matches_collected::<Ecb>(&key, &iv, &data, &pieces, chunk_size)?;
        suspended_matches_collected::<Cbc>(&key, &iv, &data, &pieces, chunk_size)?;
        suspended_matches_collected::<Cfb>(&key, &iv, &data, &pieces, chunk_size)?;
        suspended_matches_collected::<Ofb>(&key, &iv, &data, &pieces, chunk_size)?;
        suspended_matches_collected::<Ctr>(&key, &iv, &data, &pieces, chunk_size)?;
    }

    #[test]
    fn decrypt_inverts_encrypt(
        key in key(),
        iv in any::<[u8; 16]>(),
        blocks in prop::collection::vec(any::<[u8; 16]>(), 0..12),
        extra in prop::collection::vec(any::<u8>(), 0..16),
    ) {
        let aligned = blocks.concat();
        roundtrip::<Ecb>(&key, &iv, &aligned)?;
        roundtrip::<Cbc>(&key, &iv, &aligned)?;

        let mut unaligned = aligned;
        unaligned.extend_from_slice(&extra);
        roundtrip::<Cfb>(&key, &iv, &unaligned)?;
        roundtrip::<Ofb>(&key, &iv, &unaligned)?;
        roundtrip::<Ctr>(&key, &iv, &unaligned)?;
    }

    #[test]
    fn ctr_output_is_message_xor_keystream(
        key in key(),
        counter in any::<[u8; 16]>(),
        forward in any::<bool>(),
        data in prop::collection::vec(any::<u8>(), 0..200),
    ) {
        let policy = if forward { CounterIncrement::Forward } else { CounterIncrement::Backward };
        let config = ContextConfig::new().with_chunk_size(48).with_counter_increment(policy);
        let open = || {
            let mut ctx = CtrContext::with_config(Direction::Encrypt, &config).unwrap();
            ctx.open(&key, Some(&counter[..])).unwrap();
            ctx
        };

        let keystream = open().process(&vec![0u8; data.len()]).unwrap();
        let ciphertext = open().process(&data).unwrap();
        let expected: Vec<u8> = data.iter().zip(&keystream).map(|(d, k)| d ^ k).collect();
        prop_assert_eq!(ciphertext, expected);
    }

    #[test]
    fn reset_repeats_ciphertext(
        key in key(),
        iv in any::<[u8; 16]>(),
        data in prop::collection::vec(any::<u8>(), 0..100),
    ) {
        let mut ctx = context::<Ofb>(Direction::Encrypt, 64, &key, &iv);
        ctx.reset(Some(&iv)).unwrap();
        let first = ctx.process(&data).unwrap();
        ctx.reset(Some(&iv)).unwrap();
        let second = ctx.process(&data).unwrap();
        prop_assert_eq!(first, second);
    }
}

//! Benchmark workloads for the frontier arena arrays.
//!
//! Provides deterministic inputs shared by the criterion benches:
//!
//! - [`lcg_words`]: a seeded pseudo-random word sequence
//! - [`filled_arena`]: an arena holding one dynamic array of that sequence
//! - [`churn`]: a mixed push/pop/remove workload over several arrays

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use frontier_arena::{Arena, ArenaConfig, ArrayError, DynArray, WordArray};
use frontier_core::Word;

const LCG_MUL: u64 = 6364136223846793005;
const LCG_INC: u64 = 1442695040888963407;

/// Generate `n` deterministic pseudo-random words from `seed`.
///
/// Uses a 64-bit LCG; each word carries one step of the generator in its
/// low 64 bits and the next step in bits 64..128, so comparisons exercise
/// more than a single limb.
pub fn lcg_words(n: usize, seed: u64) -> Vec<Word> {
    let mut state = seed;
    let mut step = || {
        state = state.wrapping_mul(LCG_MUL).wrapping_add(LCG_INC);
        state
    };
    (0..n)
        .map(|_| {
            let low = step();
            let high = step();
            Word::from_halves(u128::from(high), u128::from(low))
        })
        .collect()
}

/// An arena sized for `n` words holding one dynamic array of [`lcg_words`].
pub fn filled_arena(n: usize, seed: u64) -> Result<(Arena, DynArray), ArrayError> {
    let mut arena = Arena::new(ArenaConfig::new(n * 2 + 16));
    let array = DynArray::from_words(&mut arena, &lcg_words(n, seed))?;
    Ok((arena, array))
}

/// Run `rounds` of a mixed workload over `arrays` interleaved arrays.
///
/// Each round pushes to every array (forcing relocations for all but the
/// frontier one), then pops from even arrays and cheap-removes slot 0 from
/// odd ones. Returns the arena so callers can inspect fragmentation.
pub fn churn(arrays: usize, rounds: usize, ovr: u32) -> Result<Arena, ArrayError> {
    let mut arena = Arena::new(ArenaConfig::default());
    let mut handles = Vec::with_capacity(arrays);
    for _ in 0..arrays {
        handles.push(DynArray::create(&mut arena, 0)?);
    }
    let values = lcg_words(rounds, 42);
    for value in values {
        for handle in handles.iter_mut() {
            handle.push(&mut arena, value, ovr)?;
            handle.push(&mut arena, value, ovr)?;
        }
        for (i, handle) in handles.iter().enumerate() {
            if i % 2 == 0 {
                handle.pop(&mut arena)?;
            } else if !handle.is_empty(&arena) {
                handle.remove_cheap(&mut arena, 0)?;
            }
        }
    }
    Ok(arena)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lcg_words_deterministic() {
        assert_eq!(lcg_words(64, 7), lcg_words(64, 7));
        assert_ne!(lcg_words(8, 7), lcg_words(8, 8));
    }

    #[test]
    fn filled_arena_holds_sequence() {
        let (arena, array) = filled_arena(100, 1).unwrap();
        assert_eq!(array.get_all(&arena), lcg_words(100, 1));
    }

    #[test]
    fn churn_abandons_relocated_runs() {
        let arena = churn(3, 20, 4).unwrap();
        assert!(arena.abandoned_words() > 0);
        assert!(arena.frontier() <= arena.reserved_words());
    }
}

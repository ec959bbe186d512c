//! Reusable array fixtures.
//!
//! - [`dyn_array`] / [`fixed_array`]: arrays holding given `u64` values.
//! - [`buried_dyn_array`]: a full dynamic array with another block after
//!   it, so the next growth has to relocate.
//! - [`pushed_xor2`]: the "push `i ^ 2` (xor) from empty" array.

use frontier_arena::{Arena, DynArray, FixedArray};
use frontier_core::Word;

use crate::words;

/// A dynamic array with `len == capacity == values.len()`.
pub fn dyn_array(arena: &mut Arena, values: &[u64]) -> DynArray {
    DynArray::from_words(arena, &words(values)).expect("fixture allocation")
}

/// A fixed array holding `values`.
pub fn fixed_array(arena: &mut Arena, values: &[u64]) -> FixedArray {
    FixedArray::from_words(arena, &words(values)).expect("fixture allocation")
}

/// A full dynamic array followed by a one-slot blocker.
///
/// The blocker keeps the array off the frontier; hold on to it for as long
/// as the array must stay buried.
pub fn buried_dyn_array(arena: &mut Arena, values: &[u64]) -> (DynArray, FixedArray) {
    let array = dyn_array(arena, values);
    let blocker = FixedArray::calloc(arena, 1).expect("fixture allocation");
    (array, blocker)
}

/// An array built by pushing `i ^ 2` for `i` in `0..n` onto an empty array.
pub fn pushed_xor2(arena: &mut Arena, n: u64) -> DynArray {
    let mut array = DynArray::create(arena, 0).expect("fixture allocation");
    for i in 0..n {
        array
            .push(arena, Word::from_u64(i ^ 2), 0)
            .expect("fixture push");
    }
    array
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{values, TestArenaBuilder};
    use frontier_arena::WordArray;

    #[test]
    fn buried_array_is_off_frontier() {
        let mut arena = TestArenaBuilder::new().build();
        let (array, _blocker) = buried_dyn_array(&mut arena, &[1, 2]);
        assert!(!array.is_at_frontier(&arena));
        assert_eq!(values(&arena, &array), vec![1, 2]);
    }

    #[test]
    fn pushed_xor2_uses_xor() {
        let mut arena = TestArenaBuilder::new().build();
        let array = pushed_xor2(&mut arena, 4);
        assert_eq!(values(&arena, &array), vec![2, 3, 0, 1]);
    }

    #[test]
    fn fixed_fixture_has_no_headroom() {
        let mut arena = TestArenaBuilder::new().build();
        let array = fixed_array(&mut arena, &[7, 8, 9]);
        assert_eq!(array.capacity(&arena), 3);
    }
}

//! Property tests for the checked array operations.

use frontier_arena::{DynArray, FixedArray, WordArray};
use frontier_core::Word;
use frontier_test_utils::strategies::{
    any_word, small_word, word_vec, word_vec_with_index, word_vec_with_range,
};
use frontier_test_utils::TestArenaBuilder;
use proptest::prelude::*;

proptest! {
    #[test]
    fn set_then_get_returns_value(
        cap in 1u32..32,
        pick in any::<prop::sample::Index>(),
        v in any_word(),
    ) {
        let mut arena = TestArenaBuilder::new().build();
        let a = DynArray::create(&mut arena, cap).unwrap();
        let i = pick.index(cap as usize) as u32;
        let before = a.len(&arena);
        a.set(&mut arena, i, v).unwrap();
        prop_assert_eq!(a.get(&arena, i).unwrap(), v);
        prop_assert_eq!(a.len(&arena), before.max(i + 1));
    }

    #[test]
    fn set_inside_len_keeps_len((words, i) in word_vec_with_index(24), v in any_word()) {
        let mut arena = TestArenaBuilder::new().build();
        let a = DynArray::from_words(&mut arena, &words).unwrap();
        a.set(&mut arena, i, v).unwrap();
        prop_assert_eq!(a.len(&arena) as usize, words.len());
    }

    #[test]
    fn pops_undo_pushes_in_lifo_order(words in word_vec(40), ovr in 0u32..4) {
        let mut arena = TestArenaBuilder::new().build();
        let mut a = DynArray::create(&mut arena, 0).unwrap();
        let _blocker = FixedArray::calloc(&mut arena, 1).unwrap();
        for w in &words {
            a.push(&mut arena, *w, ovr).unwrap();
        }
        for w in words.iter().rev() {
            prop_assert_eq!(a.pop(&mut arena).unwrap(), *w);
        }
        prop_assert!(a.pop(&mut arena).is_err());
    }

    #[test]
    fn growth_preserves_prefix(words in word_vec(24), extra in word_vec(8), buried in any::<bool>()) {
        let mut arena = TestArenaBuilder::new().build();
        let mut a = DynArray::from_words(&mut arena, &words).unwrap();
        let _blocker = buried.then(|| FixedArray::calloc(&mut arena, 1).unwrap());
        for w in &extra {
            a.push(&mut arena, *w, 2).unwrap();
        }
        prop_assert_eq!(&a.as_words(&arena)[..words.len()], words.as_slice());
        prop_assert_eq!(&a.as_words(&arena)[words.len()..], extra.as_slice());
    }

    #[test]
    fn remove_cheap_is_overwrite_then_truncate((words, i) in word_vec_with_index(24)) {
        let mut arena = TestArenaBuilder::new().build();
        let a = DynArray::from_words(&mut arena, &words).unwrap();
        let removed = a.remove_cheap(&mut arena, i).unwrap();

        let mut expected = words.clone();
        let last = expected.len() - 1;
        expected.swap(i as usize, last);
        expected.pop();
        prop_assert_eq!(removed, words[i as usize]);
        prop_assert_eq!(a.get_all(&arena), expected);
    }

    #[test]
    fn remove_expensive_preserves_order((words, i) in word_vec_with_index(24)) {
        let mut arena = TestArenaBuilder::new().build();
        let a = DynArray::from_words(&mut arena, &words).unwrap();
        a.remove_expensive(&mut arena, i).unwrap();

        let mut expected = words.clone();
        expected.remove(i as usize);
        prop_assert_eq!(a.get_all(&arena), expected);
    }

    #[test]
    fn reverse_is_an_involution(words in word_vec(32)) {
        let mut arena = TestArenaBuilder::new().build();
        let a = DynArray::from_words(&mut arena, &words).unwrap();
        a.reverse(&mut arena);
        let mut reversed = words.clone();
        reversed.reverse();
        prop_assert_eq!(a.get_all(&arena), reversed);
        a.reverse(&mut arena);
        prop_assert_eq!(a.get_all(&arena), words);
    }

    #[test]
    fn slice_indexes_into_source((words, start, end) in word_vec_with_range(32)) {
        let mut arena = TestArenaBuilder::new().build();
        let a = DynArray::from_words(&mut arena, &words).unwrap();
        let s = a.slice(&mut arena, start, end).unwrap();
        prop_assert_eq!(s.len(&arena), end - start);
        for k in 0..(end - start) {
            prop_assert_eq!(s.get(&arena, k).unwrap(), a.get(&arena, start + k).unwrap());
        }
    }

    #[test]
    fn concat_lays_second_after_first(a_words in word_vec(16), b_words in word_vec(16)) {
        let mut arena = TestArenaBuilder::new().build();
        let a = DynArray::from_words(&mut arena, &a_words).unwrap();
        let b = FixedArray::from_words(&mut arena, &b_words).unwrap();
        let c = a.concat(&mut arena, &b).unwrap();
        let la = a_words.len() as u32;
        prop_assert_eq!(c.len(&arena) as usize, a_words.len() + b_words.len());
        for k in 0..c.len(&arena) {
            let expected = if k < la { a_words[k as usize] } else { b_words[(k - la) as usize] };
            prop_assert_eq!(c.get(&arena, k).unwrap(), expected);
        }
    }

    #[test]
    fn sorted_search_agrees_with_membership(
        words in prop::collection::vec(small_word(), 0..24),
        target in small_word(),
    ) {
        let mut arena = TestArenaBuilder::new().build();
        let a = DynArray::from_words(&mut arena, &words).unwrap();
        a.insertion_sort(&mut arena);
        let sorted = a.get_all(&arena);
        prop_assert!(sorted.windows(2).all(|p| p[0] <= p[1]));

        match a.sorted_search(&arena, target) {
            Some(idx) => prop_assert_eq!(a.get(&arena, idx).unwrap(), target),
            None => prop_assert!(!words.contains(&target)),
        }
        prop_assert_eq!(a.unsorted_search(&arena, target).is_some(), words.contains(&target));
    }

    #[test]
    fn hash_tracks_contents((words, i) in word_vec_with_index(16), flip in 1u8..=255) {
        let mut arena = TestArenaBuilder::new().build();
        let dynamic = DynArray::from_words(&mut arena, &words).unwrap();
        let fixed = FixedArray::from_words(&mut arena, &words).unwrap();
        prop_assert_eq!(dynamic.hash(&arena), fixed.hash(&arena));

        let mut bytes = words[i as usize].to_bytes();
        bytes[31] ^= flip;
        fixed.set(&mut arena, i, Word::from_bytes(bytes)).unwrap();
        prop_assert_ne!(dynamic.hash(&arena), fixed.hash(&arena));
    }
}

//! Deciding how a full slot run grows.
//!
//! A run that ends at the arena frontier can grow in place: the frontier is
//! bumped and no data moves. Any other run is copied into a fresh, larger
//! block at the frontier and the old one is abandoned.

use frontier_core::ArrayError;

use crate::arena::Arena;
use crate::block::Block;

/// How a slot run will reach its new capacity.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GrowthPlan {
    /// Bump the frontier; the block keeps its offset.
    InPlace {
        /// Slot capacity after growing.
        capacity: u32,
    },
    /// Copy live slots into a new block; the old block is abandoned.
    Relocate {
        /// Slot capacity of the new block.
        capacity: u32,
    },
}

impl GrowthPlan {
    /// Choose a plan for growing `block` to at least `needed` slots.
    ///
    /// `ovr` is extra headroom requested on top of `needed`. It only applies
    /// when relocating: an in-place extension is cheap to repeat, a copy is
    /// not.
    pub fn plan(arena: &Arena, block: &Block, needed: u32, ovr: u32) -> Result<Self, ArrayError> {
        if arena.is_at_frontier(block) {
            return Ok(Self::InPlace { capacity: needed });
        }
        let capacity = needed
            .checked_add(ovr)
            .ok_or(ArrayError::AllocatorExhausted {
                requested: needed as usize + ovr as usize,
                limit: arena.max_words(),
            })?;
        Ok(Self::Relocate { capacity })
    }

    /// Slot capacity once the plan is applied.
    pub fn capacity(self) -> u32 {
        match self {
            Self::InPlace { capacity } | Self::Relocate { capacity } => capacity,
        }
    }

    /// Carry out the plan, keeping the first `live` slots.
    ///
    /// Returns the block the slots now live in. Headers are not touched.
    pub fn apply(self, arena: &mut Arena, block: Block, live: u32) -> Result<Block, ArrayError> {
        match self {
            Self::InPlace { capacity } => {
                let mut block = block;
                let extra = (capacity as usize).saturating_sub(block.slots());
                arena.extend(&mut block, extra as u32)?;
                Ok(block)
            }
            Self::Relocate { capacity } => arena.relocate_copy(&block, live, capacity),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ArenaConfig;
    use frontier_core::Word;

    fn arena() -> Arena {
        Arena::new(ArenaConfig::new(32))
    }

    #[test]
    fn frontier_block_grows_in_place_without_headroom() {
        let mut arena = arena();
        let block = arena.allocate(3).unwrap();
        let plan = GrowthPlan::plan(&arena, &block, 4, 10).unwrap();
        assert_eq!(plan, GrowthPlan::InPlace { capacity: 4 });

        let grown = plan.apply(&mut arena, block, 3).unwrap();
        assert_eq!(grown.start(), block.start());
        assert_eq!(grown.slots(), 4);
        assert_eq!(arena.abandoned_words(), 0);
    }

    #[test]
    fn buried_block_relocates_with_headroom() {
        let mut arena = arena();
        let block = arena.allocate(2).unwrap();
        arena.set_word(block.data_start(), Word::from_u64(11));
        arena.set_word(block.data_start() + 1, Word::from_u64(22));
        let _other = arena.allocate(1).unwrap();

        let plan = GrowthPlan::plan(&arena, &block, 3, 2).unwrap();
        assert_eq!(plan, GrowthPlan::Relocate { capacity: 5 });

        let moved = plan.apply(&mut arena, block, 2).unwrap();
        assert_ne!(moved.start(), block.start());
        assert_eq!(moved.slots(), 5);
        assert_eq!(arena.word(moved.data_start()), Word::from_u64(11));
        assert_eq!(arena.word(moved.data_start() + 1), Word::from_u64(22));
        assert_eq!(arena.abandoned_words(), block.words());
    }

    #[test]
    fn headroom_overflow_is_exhaustion() {
        let mut arena = arena();
        let block = arena.allocate(1).unwrap();
        let _other = arena.allocate(1).unwrap();
        let err = GrowthPlan::plan(&arena, &block, u32::MAX, 1).unwrap_err();
        assert!(matches!(err, ArrayError::AllocatorExhausted { .. }));
    }

    #[test]
    fn capacity_reports_target() {
        assert_eq!(GrowthPlan::InPlace { capacity: 7 }.capacity(), 7);
        assert_eq!(GrowthPlan::Relocate { capacity: 9 }.capacity(), 9);
    }
}

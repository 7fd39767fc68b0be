//! Identifier newtypes and a simple allocator for them.
//! Dense ids keep engine storage compact; hosts treat them as opaque handles.

use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct CycleId(pub u32);

/// Monotonic id allocator owned by the engine.
#[derive(Default, Debug)]
pub struct IdAllocator {
    next_cycle: u32,
}

impl IdAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn alloc_cycle(&mut self) -> CycleId {
        let id = CycleId(self.next_cycle);
        self.next_cycle = self.next_cycle.wrapping_add(1);
        id
    }

    /// Reset the allocator (useful for tests or full engine resets).
    #[inline]
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

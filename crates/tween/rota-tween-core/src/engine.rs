//! Engine: cycle registry plus the host-facing update loop.
//!
//! Hosts that do not embed [`Tweener`]s directly (UI layers, scripting
//! bridges) register [`CycleData`] here and pump everything with one shared
//! delta per tick. Outputs are buffered and reused between ticks.

use crate::data::CycleData;
use crate::error::TweenError;
use crate::ids::{CycleId, IdAllocator};
use crate::outputs::{Change, CycleEvent, Outputs};
use crate::tweener::Tweener;
use crate::value::Value;
use crate::Result;

/// One registered cycle: id, display name, driver.
#[derive(Debug)]
struct CycleEntry {
    id: CycleId,
    name: String,
    tweener: Tweener<Value>,
}

/// Owns every registered cycle and steps them together.
///
/// Cycles are fully independent; the engine only fixes the iteration order
/// (registration order) and collects per-tick outputs.
#[derive(Default, Debug)]
pub struct Engine {
    // Owned data
    ids: IdAllocator,
    cycles: Vec<CycleEntry>,

    // Per-tick outputs
    outputs: Outputs,
}

impl Engine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a cycle, capturing the host-supplied starting value as the
    /// blend source for the first segment.
    pub fn add_cycle(&mut self, data: CycleData, initial: Value) -> Result<CycleId> {
        data.validate_basic()?;
        let tweener = Tweener::new(initial, data.values, data.transition)?;
        let id = self.ids.alloc_cycle();
        self.cycles.push(CycleEntry {
            id,
            name: data.name,
            tweener,
        });
        Ok(id)
    }

    /// Remove a cycle; later updates no longer emit changes for it.
    pub fn remove_cycle(&mut self, id: CycleId) -> Result<()> {
        let before = self.cycles.len();
        self.cycles.retain(|c| c.id != id);
        if self.cycles.len() == before {
            return Err(TweenError::CycleNotFound { id });
        }
        Ok(())
    }

    /// Swap a cycle's target list at runtime.
    pub fn set_values(&mut self, id: CycleId, values: Vec<Value>) -> Result<()> {
        let entry = self
            .cycles
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or(TweenError::CycleNotFound { id })?;
        entry.tweener.set_values(values)
    }

    /// Restart a cycle from its captured starting value.
    pub fn reset_cycle(&mut self, id: CycleId) -> Result<()> {
        let entry = self
            .cycles
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or(TweenError::CycleNotFound { id })?;
        entry.tweener.reset();
        Ok(())
    }

    /// Completed loops for a cycle, if it is registered.
    pub fn loops(&self, id: CycleId) -> Option<u64> {
        self.cycles
            .iter()
            .find(|c| c.id == id)
            .map(|c| c.tweener.loops())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.cycles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cycles.is_empty()
    }

    /// Advance every cycle by `dt` seconds and return this tick's outputs.
    ///
    /// Emits one change per cycle (keyed by cycle name) and a `LoopCompleted`
    /// event for each cycle that wrapped during this tick.
    pub fn update(&mut self, dt: f32) -> Result<&Outputs> {
        if !dt.is_finite() || dt < 0.0 {
            return Err(TweenError::InvalidDelta { delta: dt });
        }

        self.outputs.clear();

        for entry in &mut self.cycles {
            let loops_before = entry.tweener.loops();
            let value = entry.tweener.advance(dt)?;
            self.outputs.push_change(Change {
                cycle: entry.id,
                key: entry.name.clone(),
                value,
            });
            let loops_after = entry.tweener.loops();
            if loops_after != loops_before {
                self.outputs.push_event(CycleEvent::LoopCompleted {
                    cycle: entry.id,
                    loops: loops_after,
                });
            }
        }

        Ok(&self.outputs)
    }
}

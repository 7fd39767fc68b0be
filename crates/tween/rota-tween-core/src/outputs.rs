//! Output contracts from the engine.
//!
//! Changes carry the blended value per cycle for this tick, keyed by the
//! cycle's name; events carry discrete signals such as completed loops.
//! Hosts apply changes to their own state and forward events as they like.

use serde::{Deserialize, Serialize};

use crate::ids::CycleId;
use crate::value::Value;

/// One blended value for a given cycle this tick.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Change {
    pub cycle: CycleId,
    pub key: String, // cycle name
    pub value: Value,
}

/// Discrete signals emitted during stepping.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[non_exhaustive]
pub enum CycleEvent {
    /// A cycle finished a full pass over its value list.
    LoopCompleted { cycle: CycleId, loops: u64 },
}

/// Outputs returned by `Engine::update()`.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Outputs {
    #[serde(default)]
    pub changes: Vec<Change>,
    #[serde(default)]
    pub events: Vec<CycleEvent>,
}

impl Outputs {
    #[inline]
    pub fn clear(&mut self) {
        self.changes.clear();
        self.events.clear();
    }

    #[inline]
    pub fn push_change(&mut self, change: Change) {
        self.changes.push(change);
    }

    #[inline]
    pub fn push_event(&mut self, event: CycleEvent) {
        self.events.push(event);
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.changes.is_empty() && self.events.is_empty()
    }
}

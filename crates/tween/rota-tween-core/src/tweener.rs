//! Generic cycle driver: a captured starting value, a value list, a stepper.

use serde::{Deserialize, Serialize};

use crate::blend::Blend;
use crate::error::TweenError;
use crate::stepper::{BlendInstruction, Stepper, StepperPhase};
use crate::Result;

/// Drives one repeating cycle over an owned value list.
///
/// The tweener resolves the stepper's instructions: `Initial` blends from the
/// captured starting value toward the first entry, `Segment` blends between
/// two entries of the list. Works for any [`Blend`] value, so hosts can run
/// it over plain arrays without going through the dynamic [`crate::Value`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Tweener<V> {
    initial: V,
    values: Vec<V>,
    stepper: Stepper,
}

impl<V: Blend> Tweener<V> {
    /// Build a driver from a captured starting value, a non-empty value list
    /// and a per-segment duration in seconds.
    pub fn new(initial: V, values: Vec<V>, segment_duration: f32) -> Result<Self> {
        if values.is_empty() {
            return Err(TweenError::EmptySequence);
        }
        Ok(Self {
            initial,
            values,
            stepper: Stepper::new(segment_duration)?,
        })
    }

    /// Advance by `dt` seconds and return the blended value for this tick.
    pub fn advance(&mut self, dt: f32) -> Result<V> {
        match self.stepper.advance(dt, self.values.len())? {
            BlendInstruction::Initial { target, ratio } => {
                Ok(V::blend(&self.initial, &self.values[target], ratio))
            }
            BlendInstruction::Segment { start, end, ratio } => {
                Ok(V::blend(&self.values[start], &self.values[end], ratio))
            }
        }
    }

    /// Swap the target list at runtime. The stepper clamps its indices on the
    /// next tick if the new list is shorter than the old one.
    pub fn set_values(&mut self, values: Vec<V>) -> Result<()> {
        if values.is_empty() {
            return Err(TweenError::EmptySequence);
        }
        self.values = values;
        Ok(())
    }

    /// Completed full passes over the value list.
    #[inline]
    pub fn loops(&self) -> u64 {
        self.stepper.loops()
    }

    #[inline]
    pub fn values(&self) -> &[V] {
        &self.values
    }

    #[inline]
    pub fn initial(&self) -> &V {
        &self.initial
    }

    #[inline]
    pub fn segment_duration(&self) -> f32 {
        self.stepper.segment_duration()
    }

    #[inline]
    pub fn phase(&self) -> StepperPhase {
        self.stepper.phase()
    }

    /// Restart from the captured starting value; the list is kept.
    pub fn reset(&mut self) {
        self.stepper.reset();
    }
}

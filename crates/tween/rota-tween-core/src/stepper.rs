//! Timed interpolation stepper.
//!
//! A `Stepper` owns no value data. The driver calls [`Stepper::advance`] once
//! per tick with the current list length and gets back a [`BlendInstruction`]
//! naming which two entries to blend and at what ratio. Boundary crossings,
//! wraparound and loop counting all happen here; the actual blend is the
//! driver's job (see `Tweener`).

use serde::{Deserialize, Serialize};

use crate::error::TweenError;
use crate::Result;

/// Per-tick output of [`Stepper::advance`].
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum BlendInstruction {
    /// Blend the driver's externally held starting value toward
    /// `values[target]`. Emitted until the first boundary crossing.
    Initial { target: usize, ratio: f32 },
    /// Blend `values[start]` toward `values[end]`.
    Segment {
        start: usize,
        end: usize,
        ratio: f32,
    },
}

impl BlendInstruction {
    /// Normalized progress through the current segment, in `[0, 1)`.
    #[inline]
    pub fn ratio(&self) -> f32 {
        match self {
            BlendInstruction::Initial { ratio, .. } => *ratio,
            BlendInstruction::Segment { ratio, .. } => *ratio,
        }
    }

    /// Index of the entry being approached, in either variant.
    #[inline]
    pub fn end_index(&self) -> usize {
        match self {
            BlendInstruction::Initial { target, .. } => *target,
            BlendInstruction::Segment { end, .. } => *end,
        }
    }
}

/// Logical phase of a stepper.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StepperPhase {
    /// Before the first boundary crossing: still blending away from the
    /// externally held starting value.
    Initial,
    /// Cycling through the value list. A stepper never returns to `Initial`
    /// except through [`Stepper::reset`].
    Cycling,
}

impl StepperPhase {
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            StepperPhase::Initial => "initial",
            StepperPhase::Cycling => "cycling",
        }
    }

    #[inline]
    pub fn is_cycling(&self) -> bool {
        matches!(self, StepperPhase::Cycling)
    }
}

/// State machine that turns per-tick deltas into blend instructions.
///
/// Time only accumulates within the current segment. A tick whose accumulated
/// time reaches the segment duration crosses exactly one boundary and resets
/// the accumulator to zero, so a very large delta still advances by a single
/// segment (the excess is absorbed rather than skipping entries).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Stepper {
    segment_duration: f32,
    elapsed: f32,
    /// `None` until the first boundary crossing.
    start: Option<usize>,
    end: usize,
    loops: u64,
}

impl Stepper {
    /// Create a stepper with a fixed per-segment duration in seconds.
    pub fn new(segment_duration: f32) -> Result<Self> {
        if !segment_duration.is_finite() || segment_duration <= 0.0 {
            return Err(TweenError::InvalidDuration {
                duration: segment_duration,
            });
        }
        Ok(Self {
            segment_duration,
            elapsed: 0.0,
            start: None,
            end: 0,
            loops: 0,
        })
    }

    /// Advance by `dt` seconds against a list of `num_steps` entries.
    ///
    /// Crossing fires on `elapsed >= segment_duration`, so a tick landing
    /// exactly on the boundary already reports the next segment at ratio 0.
    /// When the crossing walks past the last entry the stepper wraps to the
    /// `last -> first` segment and counts a completed loop.
    ///
    /// Rejects non-finite or negative deltas and empty lists; the state is
    /// untouched when an error is returned.
    pub fn advance(&mut self, dt: f32, num_steps: usize) -> Result<BlendInstruction> {
        if !dt.is_finite() || dt < 0.0 {
            return Err(TweenError::InvalidDelta { delta: dt });
        }
        if num_steps == 0 {
            return Err(TweenError::EmptySequence);
        }

        // The driver may have swapped in a shorter list since the last tick.
        if self.end >= num_steps {
            self.end = num_steps - 1;
        }
        if let Some(start) = self.start {
            if start >= num_steps {
                self.start = Some(num_steps - 1);
            }
        }

        self.elapsed += dt;
        if self.elapsed >= self.segment_duration {
            self.start = Some(self.end);
            self.end += 1;
            if self.end >= num_steps {
                self.start = Some(num_steps - 1);
                self.end = 0;
                self.loops += 1;
            }
            self.elapsed = 0.0;
        }

        let ratio = self.elapsed / self.segment_duration;
        Ok(match self.start {
            None => BlendInstruction::Initial {
                target: self.end,
                ratio,
            },
            Some(start) => BlendInstruction::Segment {
                start,
                end: self.end,
                ratio,
            },
        })
    }

    /// Completed full passes over the value list.
    #[inline]
    pub fn loops(&self) -> u64 {
        self.loops
    }

    #[inline]
    pub fn segment_duration(&self) -> f32 {
        self.segment_duration
    }

    #[inline]
    pub fn phase(&self) -> StepperPhase {
        if self.start.is_none() {
            StepperPhase::Initial
        } else {
            StepperPhase::Cycling
        }
    }

    /// Return to the freshly constructed state, loop count included.
    pub fn reset(&mut self) {
        self.elapsed = 0.0;
        self.start = None;
        self.end = 0;
        self.loops = 0;
    }
}

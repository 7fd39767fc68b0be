//! Rota tween core (engine-agnostic)
//!
//! A small library for repeating, timed interpolation cycles. A [`Stepper`]
//! turns per-tick deltas into blend instructions, a [`Tweener`] resolves
//! those instructions against a value list, and an [`Engine`] hosts many
//! named cycles behind one `update(dt)` call for non-ECS hosts. Game loops,
//! UI frame callbacks and timers all pump the same way: plain `f32` second
//! deltas in, blended values out.

pub mod blend;
pub mod data;
pub mod engine;
pub mod error;
pub mod ids;
pub mod outputs;
pub mod stepper;
pub mod stored_cycle;
pub mod tweener;
pub mod value;

// Re-exports for adapters and hosts
pub use blend::{lerp_f32, lerp_vec2, lerp_vec3, lerp_vec4, Blend};
pub use data::{CycleData, DEFAULT_TRANSITION};
pub use engine::Engine;
pub use error::TweenError;
pub use ids::CycleId;
pub use outputs::{Change, CycleEvent, Outputs};
pub use stepper::{BlendInstruction, Stepper, StepperPhase};
pub use stored_cycle::parse_stored_cycle_json;
pub use tweener::Tweener;
pub use value::{Value, ValueKind};

/// Convenience alias used across the crate.
pub type Result<T> = std::result::Result<T, TweenError>;

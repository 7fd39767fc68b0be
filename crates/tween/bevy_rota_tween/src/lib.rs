//! Bevy adapter for `rota-tween-core`.
//!
//! Spawning a [`TranslationCycle`] next to a `Transform` makes the entity's
//! translation cycle through the configured waypoints; a [`TintCycle`] next
//! to a [`Tint`] does the same for color. Init systems capture the entity's
//! current state as the blend source for the first segment; after that the
//! cycle loops until the components are removed.
//!
//! Cycles are pumped from the `Update` schedule with the virtual clock's
//! delta, so pausing `Time` pauses every cycle.

pub mod components;
pub mod systems;

use bevy::prelude::*;

pub use components::{Tint, TintCycle, TintTween, TranslationCycle, TranslationTween};
pub use rota_tween_core::{Tweener, TweenError};

pub struct RotaTweenPlugin;

impl Plugin for RotaTweenPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (
                (
                    systems::init_translation_cycles,
                    systems::tick_translation_cycles,
                )
                    .chain(),
                (systems::init_tint_cycles, systems::tick_tint_cycles).chain(),
            ),
        );
    }
}

use bevy::color::LinearRgba;
use bevy::prelude::*;
use rota_tween_core::{Tweener, DEFAULT_TRANSITION};

/// Cycles the entity's `Transform` translation through a list of waypoints.
/// The translation at init time is the blend source for the first segment.
#[derive(Component, Debug, Clone)]
pub struct TranslationCycle {
    pub points: Vec<Vec3>,
    /// Seconds per segment.
    pub transition: f32,
}

impl TranslationCycle {
    pub fn new(points: Vec<Vec3>, transition: f32) -> Self {
        Self { points, transition }
    }

    /// Waypoint cycle with the default transition.
    pub fn from_points(points: Vec<Vec3>) -> Self {
        Self::new(points, DEFAULT_TRANSITION)
    }
}

/// Cycles a [`Tint`] through a list of colors.
#[derive(Component, Debug, Clone)]
pub struct TintCycle {
    pub colors: Vec<LinearRgba>,
    /// Seconds per segment.
    pub transition: f32,
}

impl TintCycle {
    pub fn new(colors: Vec<LinearRgba>, transition: f32) -> Self {
        Self { colors, transition }
    }

    /// Color cycle with the default transition.
    pub fn from_colors(colors: Vec<LinearRgba>) -> Self {
        Self::new(colors, DEFAULT_TRANSITION)
    }
}

/// Holds the tweened color. Render or UI sync systems read this and apply it
/// wherever the host wants (sprite color, material tint, light color).
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct Tint(pub LinearRgba);

impl Default for Tint {
    fn default() -> Self {
        Self(LinearRgba::WHITE)
    }
}

/// Runtime driver for a translation cycle, inserted by the init system.
#[derive(Component, Debug, Clone)]
pub struct TranslationTween(pub Tweener<[f32; 3]>);

/// Runtime driver for a tint cycle, inserted by the init system.
#[derive(Component, Debug, Clone)]
pub struct TintTween(pub Tweener<[f32; 4]>);

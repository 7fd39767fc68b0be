use bevy::color::LinearRgba;
use bevy::prelude::*;
use rota_tween_core::Tweener;

use crate::components::{Tint, TintCycle, TintTween, TranslationCycle, TranslationTween};

/// Build drivers for entities that gained a [`TranslationCycle`], capturing
/// the current translation as the first blend source. Invalid configs are
/// skipped with a warning instead of panicking mid-frame.
pub fn init_translation_cycles(
    mut commands: Commands,
    query: Query<(Entity, &Transform, &TranslationCycle), Without<TranslationTween>>,
) {
    for (entity, transform, cycle) in &query {
        let points: Vec<[f32; 3]> = cycle.points.iter().map(|p| p.to_array()).collect();
        match Tweener::new(transform.translation.to_array(), points, cycle.transition) {
            Ok(tweener) => {
                commands.entity(entity).insert(TranslationTween(tweener));
            }
            Err(err) => {
                warn!("skipping translation cycle on {entity:?}: {err}");
            }
        }
    }
}

/// Advance translation drivers and write the blended waypoint back.
pub fn tick_translation_cycles(
    time: Res<Time>,
    mut query: Query<(&mut Transform, &mut TranslationTween)>,
) {
    let dt = time.delta_seconds();
    for (mut transform, mut tween) in &mut query {
        if let Ok(blended) = tween.0.advance(dt) {
            transform.translation = Vec3::from_array(blended);
        }
    }
}

/// Build drivers for entities that gained a [`TintCycle`]; the current
/// [`Tint`] is the first blend source.
pub fn init_tint_cycles(
    mut commands: Commands,
    query: Query<(Entity, &Tint, &TintCycle), Without<TintTween>>,
) {
    for (entity, tint, cycle) in &query {
        let colors: Vec<[f32; 4]> = cycle.colors.iter().map(|c| color_to_array(*c)).collect();
        match Tweener::new(color_to_array(tint.0), colors, cycle.transition) {
            Ok(tweener) => {
                commands.entity(entity).insert(TintTween(tweener));
            }
            Err(err) => {
                warn!("skipping tint cycle on {entity:?}: {err}");
            }
        }
    }
}

/// Advance tint drivers and write the blended color back.
pub fn tick_tint_cycles(time: Res<Time>, mut query: Query<(&mut Tint, &mut TintTween)>) {
    let dt = time.delta_seconds();
    for (mut tint, mut tween) in &mut query {
        if let Ok(blended) = tween.0.advance(dt) {
            tint.0 = array_to_color(blended);
        }
    }
}

#[inline]
fn color_to_array(c: LinearRgba) -> [f32; 4] {
    [c.red, c.green, c.blue, c.alpha]
}

#[inline]
fn array_to_color(v: [f32; 4]) -> LinearRgba {
    LinearRgba::new(v[0], v[1], v[2], v[3])
}

use std::time::Duration;

use bevy::color::LinearRgba;
use bevy::prelude::*;
use bevy_rota_tween::{RotaTweenPlugin, Tint, TintCycle, TintTween, TranslationCycle, TranslationTween};

fn mk_app() -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins).add_plugins(RotaTweenPlugin);
    app
}

/// Advance the clock by `dt` seconds and run one Update pass.
fn advance(app: &mut App, dt: f32) {
    app.world_mut()
        .resource_mut::<Time>()
        .advance_by(Duration::from_secs_f32(dt));
    app.world_mut().run_schedule(Update);
}

fn approx_vec3(a: Vec3, b: Vec3, eps: f32) {
    assert!((a - b).length() <= eps, "left={a:?} right={b:?} eps={eps}");
}

fn approx_rgba(a: LinearRgba, b: LinearRgba, eps: f32) {
    assert!(
        (a.red - b.red).abs() <= eps
            && (a.green - b.green).abs() <= eps
            && (a.blue - b.blue).abs() <= eps
            && (a.alpha - b.alpha).abs() <= eps,
        "left={a:?} right={b:?} eps={eps}"
    );
}

/// it should blend from the spawn translation toward the first waypoint, then cycle
#[test]
fn translation_follows_waypoints_deterministically() {
    let mut app = mk_app();

    let start = Vec3::new(0.0, 0.0, 10.0);
    let p0 = Vec3::new(0.0, 0.0, 0.0);
    let p1 = Vec3::new(4.0, 0.0, 0.0);
    let mover = app
        .world_mut()
        .spawn((
            Transform::from_translation(start),
            TranslationCycle::new(vec![p0, p1], 0.5),
        ))
        .id();

    // Half a segment in: still blending away from the spawn position.
    advance(&mut app, 0.25);
    let tf = app.world().get::<Transform>(mover).unwrap();
    approx_vec3(tf.translation, start.lerp(p0, 0.5), 1e-5);

    // Landing exactly on the boundary starts the 0 -> 1 segment at ratio 0.
    advance(&mut app, 0.25);
    let tf = app.world().get::<Transform>(mover).unwrap();
    approx_vec3(tf.translation, p0, 1e-5);

    advance(&mut app, 0.25);
    let tf = app.world().get::<Transform>(mover).unwrap();
    approx_vec3(tf.translation, p0.lerp(p1, 0.5), 1e-5);

    // Wrap back toward the first waypoint and count the loop.
    advance(&mut app, 0.25);
    let tf = app.world().get::<Transform>(mover).unwrap();
    approx_vec3(tf.translation, p1, 1e-5);
    let tween = app.world().get::<TranslationTween>(mover).unwrap();
    assert_eq!(tween.0.loops(), 1);

    advance(&mut app, 0.25);
    let tf = app.world().get::<Transform>(mover).unwrap();
    approx_vec3(tf.translation, p1.lerp(p0, 0.5), 1e-5);
}

/// it should blend the tint toward the palette and count loops
#[test]
fn tint_follows_palette() {
    let mut app = mk_app();

    let lamp = app
        .world_mut()
        .spawn((
            Tint::default(),
            TintCycle::new(vec![LinearRgba::RED, LinearRgba::BLUE], 1.0),
        ))
        .id();

    // Halfway from white toward red.
    advance(&mut app, 0.5);
    let tint = app.world().get::<Tint>(lamp).unwrap();
    approx_rgba(tint.0, LinearRgba::new(1.0, 0.5, 0.5, 1.0), 1e-5);

    advance(&mut app, 0.5);
    let tint = app.world().get::<Tint>(lamp).unwrap();
    approx_rgba(tint.0, LinearRgba::RED, 1e-5);

    advance(&mut app, 0.5);
    let tint = app.world().get::<Tint>(lamp).unwrap();
    approx_rgba(tint.0, LinearRgba::new(0.5, 0.0, 0.5, 1.0), 1e-5);

    // Wrap: at the last palette entry, one loop on the books.
    advance(&mut app, 0.5);
    let tint = app.world().get::<Tint>(lamp).unwrap();
    approx_rgba(tint.0, LinearRgba::BLUE, 1e-5);
    let tween = app.world().get::<TintTween>(lamp).unwrap();
    assert_eq!(tween.0.loops(), 1);
}

/// it should retarget a live driver without restarting its clock
#[test]
fn retarget_through_driver() {
    let mut app = mk_app();

    let mover = app
        .world_mut()
        .spawn((
            Transform::from_translation(Vec3::ZERO),
            TranslationCycle::new(vec![Vec3::new(2.0, 0.0, 0.0)], 0.5),
        ))
        .id();

    // Build the driver without consuming any time.
    advance(&mut app, 0.0);
    assert!(app.world().get::<TranslationTween>(mover).is_some());

    app.world_mut()
        .get_mut::<TranslationTween>(mover)
        .unwrap()
        .0
        .set_values(vec![[8.0, 0.0, 0.0]])
        .unwrap();

    // Halfway toward the swapped-in target.
    advance(&mut app, 0.25);
    let tf = app.world().get::<Transform>(mover).unwrap();
    approx_vec3(tf.translation, Vec3::new(4.0, 0.0, 0.0), 1e-5);
}

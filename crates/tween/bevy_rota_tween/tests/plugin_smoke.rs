use bevy::color::LinearRgba;
use bevy::prelude::*;
use bevy_rota_tween::{
    RotaTweenPlugin, Tint, TintCycle, TintTween, TranslationCycle, TranslationTween,
};

fn mk_app() -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins).add_plugins(RotaTweenPlugin);
    app
}

/// it should insert drivers for freshly configured entities
#[test]
fn plugin_initializes_cycle_drivers() {
    let mut app = mk_app();

    let mover = app
        .world_mut()
        .spawn((
            Transform::from_xyz(1.0, 2.0, 3.0),
            TranslationCycle::new(vec![Vec3::ZERO, Vec3::ONE], 0.5),
        ))
        .id();
    let lamp = app
        .world_mut()
        .spawn((
            Tint::default(),
            TintCycle::new(vec![LinearRgba::RED, LinearRgba::BLUE], 0.5),
        ))
        .id();

    app.world_mut().run_schedule(Update);

    let tween = app
        .world()
        .get::<TranslationTween>(mover)
        .expect("translation driver inserted");
    assert_eq!(tween.0.initial(), &[1.0, 2.0, 3.0]);
    assert_eq!(tween.0.values().len(), 2);

    assert!(app.world().get::<TintTween>(lamp).is_some());
}

/// it should skip invalid configs instead of panicking
#[test]
fn invalid_configs_are_skipped() {
    let mut app = mk_app();

    let empty = app
        .world_mut()
        .spawn((Transform::default(), TranslationCycle::new(vec![], 0.5)))
        .id();
    let bad_duration = app
        .world_mut()
        .spawn((
            Transform::default(),
            TranslationCycle::new(vec![Vec3::ONE], 0.0),
        ))
        .id();
    let bad_tint = app
        .world_mut()
        .spawn((Tint::default(), TintCycle::new(vec![], 1.0)))
        .id();

    app.world_mut().run_schedule(Update);

    assert!(app.world().get::<TranslationTween>(empty).is_none());
    assert!(app.world().get::<TranslationTween>(bad_duration).is_none());
    assert!(app.world().get::<TintTween>(bad_tint).is_none());
}

/// it should leave unrelated entities alone
#[test]
fn entities_without_cycles_are_untouched() {
    let mut app = mk_app();
    let plain = app.world_mut().spawn(Transform::from_xyz(5.0, 0.0, 0.0)).id();

    app.world_mut().run_schedule(Update);

    assert!(app.world().get::<TranslationTween>(plain).is_none());
    let tf = app.world().get::<Transform>(plain).unwrap();
    assert_eq!(tf.translation, Vec3::new(5.0, 0.0, 0.0));
}

//! Linear blend helpers and the [`Blend`] capability trait.
//!
//! Blending is deliberately kept out of the stepper: drivers own their value
//! lists and resolve blend instructions through this trait.

/// Linear interpolation of scalars.
#[inline]
pub fn lerp_f32(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

#[inline]
pub fn lerp_vec2(a: [f32; 2], b: [f32; 2], t: f32) -> [f32; 2] {
    [lerp_f32(a[0], b[0], t), lerp_f32(a[1], b[1], t)]
}

#[inline]
pub fn lerp_vec3(a: [f32; 3], b: [f32; 3], t: f32) -> [f32; 3] {
    [
        lerp_f32(a[0], b[0], t),
        lerp_f32(a[1], b[1], t),
        lerp_f32(a[2], b[2], t),
    ]
}

#[inline]
pub fn lerp_vec4(a: [f32; 4], b: [f32; 4], t: f32) -> [f32; 4] {
    [
        lerp_f32(a[0], b[0], t),
        lerp_f32(a[1], b[1], t),
        lerp_f32(a[2], b[2], t),
        lerp_f32(a[3], b[3], t),
    ]
}

/// Component-wise linear blending between two values of one type.
pub trait Blend: Clone {
    /// Interpolate from `a` to `b` by `ratio` in `[0, 1]`.
    fn blend(a: &Self, b: &Self, ratio: f32) -> Self;
}

impl Blend for f32 {
    fn blend(a: &Self, b: &Self, ratio: f32) -> Self {
        lerp_f32(*a, *b, ratio)
    }
}

impl Blend for [f32; 2] {
    fn blend(a: &Self, b: &Self, ratio: f32) -> Self {
        lerp_vec2(*a, *b, ratio)
    }
}

impl Blend for [f32; 3] {
    fn blend(a: &Self, b: &Self, ratio: f32) -> Self {
        lerp_vec3(*a, *b, ratio)
    }
}

impl Blend for [f32; 4] {
    fn blend(a: &Self, b: &Self, ratio: f32) -> Self {
        lerp_vec4(*a, *b, ratio)
    }
}

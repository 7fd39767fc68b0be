//! Dynamic value model for data-driven cycles.
//! All numeric payloads use `f32`.

use serde::{Deserialize, Serialize};

use crate::blend::{lerp_f32, lerp_vec2, lerp_vec3, lerp_vec4, Blend};

/// Coarse kind tag, useful for validation and diagnostics.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ValueKind {
    Float,
    Vec2,
    Vec3,
    ColorRgba,
}

/// A blendable runtime value. Every kind here interpolates component-wise;
/// step-only kinds (booleans, text) have no place in a cycle.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "data")]
pub enum Value {
    /// Scalar float
    Float(f32),

    /// 2D vector
    Vec2([f32; 2]),

    /// 3D vector
    Vec3([f32; 3]),

    /// RGBA color, linear components in 0..1
    ColorRgba([f32; 4]),
}

impl Value {
    /// Return the coarse kind of this value.
    #[inline]
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Float(_) => ValueKind::Float,
            Value::Vec2(_) => ValueKind::Vec2,
            Value::Vec3(_) => ValueKind::Vec3,
            Value::ColorRgba(_) => ValueKind::ColorRgba,
        }
    }
}

impl Blend for Value {
    fn blend(a: &Self, b: &Self, ratio: f32) -> Self {
        match (a, b) {
            (Value::Float(va), Value::Float(vb)) => Value::Float(lerp_f32(*va, *vb, ratio)),
            (Value::Vec2(va), Value::Vec2(vb)) => Value::Vec2(lerp_vec2(*va, *vb, ratio)),
            (Value::Vec3(va), Value::Vec3(vb)) => Value::Vec3(lerp_vec3(*va, *vb, ratio)),
            (Value::ColorRgba(ca), Value::ColorRgba(cb)) => {
                Value::ColorRgba(lerp_vec4(*ca, *cb, ratio))
            }
            // Fallback: if types mismatch, prefer left (fail-soft).
            _ => a.clone(),
        }
    }
}

//! Loader for the stored cycle JSON format.
//!
//! Notes:
//! - `transition` is in seconds; when omitted the 2 second default applies.
//! - Values are plain JSON shapes (numbers and small objects), converted here
//!   into the tagged core [`Value`] enum. Colors accept both RGB and HSL
//!   forms; HSL hue is in degrees.

use serde::Deserialize;

use crate::data::{CycleData, DEFAULT_TRANSITION};
use crate::value::Value;
use crate::Result;

/// Parse stored-cycle JSON into [`CycleData`], then run basic validation so
/// callers get a typed error instead of a half-usable cycle.
pub fn parse_stored_cycle_json(s: &str) -> Result<CycleData> {
    let sc: StoredCycle = serde_json::from_str(s)?;

    let mut values: Vec<Value> = Vec::with_capacity(sc.values.len());
    for raw in &sc.values {
        values.push(to_core_value(raw));
    }

    let data = CycleData {
        name: sc.name,
        transition: sc
            .transition
            .map(|t| t as f32)
            .unwrap_or(DEFAULT_TRANSITION),
        values,
    };
    data.validate_basic()?;
    Ok(data)
}

fn to_core_value(v: &RawValue) -> Value {
    match v {
        RawValue::Number(n) => Value::Float(*n as f32),
        RawValue::Vector3 { x, y, z } => Value::Vec3([*x as f32, *y as f32, *z as f32]),
        RawValue::Vector2 { x, y } => Value::Vec2([*x as f32, *y as f32]),
        RawValue::Rgb { r, g, b, a } => Value::ColorRgba([
            *r as f32,
            *g as f32,
            *b as f32,
            a.unwrap_or(1.0) as f32,
        ]),
        RawValue::Hsl { h, s, l, a } => {
            // Hue is stored in degrees; the converter works in turns.
            let (r, g, b) = hsl_to_rgb(*h as f32 / 360.0, *s as f32, *l as f32);
            Value::ColorRgba([r, g, b, a.unwrap_or(1.0) as f32])
        }
    }
}

fn hsl_to_rgb(h: f32, s: f32, l: f32) -> (f32, f32, f32) {
    let h = ((h % 1.0) + 1.0) % 1.0;
    let s = s.clamp(0.0, 1.0);
    let l = l.clamp(0.0, 1.0);

    if s == 0.0 {
        return (l, l, l);
    }
    let q = if l < 0.5 {
        l * (1.0 + s)
    } else {
        l + s - l * s
    };
    let p = 2.0 * l - q;
    let r = hue_to_rgb(p, q, h + 1.0 / 3.0);
    let g = hue_to_rgb(p, q, h);
    let b = hue_to_rgb(p, q, h - 1.0 / 3.0);
    (r, g, b)
}

fn hue_to_rgb(p: f32, q: f32, mut t: f32) -> f32 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }
    if t < 1.0 / 6.0 {
        return p + (q - p) * 6.0 * t;
    }
    if t < 1.0 / 2.0 {
        return q;
    }
    if t < 2.0 / 3.0 {
        return p + (q - p) * (2.0 / 3.0 - t) * 6.0;
    }
    p
}

// ----- JSON schema (serde) -----

#[derive(Debug, Deserialize)]
struct StoredCycle {
    pub name: String,
    pub transition: Option<f64>, // seconds
    pub values: Vec<RawValue>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawValue {
    // Put more specific shapes BEFORE less specific to avoid untagged
    // matching pitfalls.
    Vector3 { x: f64, y: f64, z: f64 },
    Vector2 { x: f64, y: f64 },
    Rgb { r: f64, g: f64, b: f64, a: Option<f64> },
    Hsl { h: f64, s: f64, l: f64, a: Option<f64> },
    Number(f64),
}

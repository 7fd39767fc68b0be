//! Cycle configuration data model (serde-friendly).

use serde::{Deserialize, Serialize};

use crate::error::TweenError;
use crate::value::Value;
use crate::Result;

/// Default per-segment transition duration in seconds.
pub const DEFAULT_TRANSITION: f32 = 2.0;

fn default_transition() -> f32 {
    DEFAULT_TRANSITION
}

/// A named, configured cycle: an ordered value list plus the per-segment
/// transition duration. This is what hosts register with the engine.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct CycleData {
    pub name: String,
    /// Seconds per interpolation segment.
    #[serde(default = "default_transition")]
    pub transition: f32,
    pub values: Vec<Value>,
}

impl CycleData {
    /// Check the invariants registration relies on: a finite positive
    /// transition and a non-empty, kind-uniform value list.
    pub fn validate_basic(&self) -> Result<()> {
        if !self.transition.is_finite() || self.transition <= 0.0 {
            return Err(TweenError::InvalidDuration {
                duration: self.transition,
            });
        }
        if self.values.is_empty() {
            return Err(TweenError::EmptySequence);
        }
        let expected = self.values[0].kind();
        for v in &self.values {
            if v.kind() != expected {
                return Err(TweenError::MixedKinds {
                    expected,
                    found: v.kind(),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_transition_defaults() {
        let data: CycleData =
            serde_json::from_str(r#"{"name":"d","values":[{"type":"Float","data":1.0}]}"#).unwrap();
        assert_eq!(data.transition, DEFAULT_TRANSITION);
        assert!(data.validate_basic().is_ok());
    }

    #[test]
    fn validate_rejects_mixed_kinds() {
        let data = CycleData {
            name: "m".into(),
            transition: 1.0,
            values: vec![Value::Float(0.0), Value::Vec3([0.0; 3])],
        };
        assert!(matches!(
            data.validate_basic(),
            Err(TweenError::MixedKinds { .. })
        ));
    }
}

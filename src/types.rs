use serde::Deserialize;

/// One raw sensor package: a workout code plus the ordered numeric payload.
///
/// The payload layout is positional and depends on the code:
/// - `RUN`: action count, duration (h), weight (kg)
/// - `WLK`: action count, duration (h), weight (kg), height (cm)
/// - `SWM`: action count, duration (h), weight (kg), pool length (m), laps
///
/// Counts arrive as whole-valued floats; everything stays `f64` because the
/// formulas are pure float arithmetic.
#[derive(Debug, Clone, Deserialize)]
pub struct Package {
    pub code: String,
    pub data: Vec<f64>,
}

impl Package {
    pub fn new(code: &str, data: &[f64]) -> Self {
        Self {
            code: code.to_string(),
            data: data.to_vec(),
        }
    }
}

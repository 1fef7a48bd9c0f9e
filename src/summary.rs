/// Rendered summary of one finished workout.
#[derive(Debug, Clone, PartialEq)]
pub struct InfoMessage {
    pub training_type: String,
    pub duration_h: f64,
    pub distance_km: f64,
    pub speed_kmh: f64,
    pub calories: f64,
}

impl InfoMessage {
    /// The one fixed output line. Each number is rounded to three decimals
    /// and then formatted with three decimals again; the sensor firmware's
    /// reference output does both, so parity requires both.
    pub fn message(&self) -> String {
        format!(
            "Тип тренировки: {}; Длительность: {:.3} ч.; Дистанция: {:.3} км; Ср. скорость: {:.3} км/ч; Потрачено ккал: {:.3}.",
            self.training_type,
            round3(self.duration_h),
            round3(self.distance_km),
            round3(self.speed_kmh),
            round3(self.calories),
        )
    }
}

/// Round to three decimal places, ties to even.
pub fn round3(x: f64) -> f64 {
    (x * 1000.0).round_ties_even() / 1000.0
}

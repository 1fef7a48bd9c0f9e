use crate::summary::InfoMessage;

/// Meters attributed to one action (a stride) unless a variant overrides it.
pub const LEN_STEP: f64 = 0.65;
pub const M_IN_KM: f64 = 1000.0;
pub const MIN_IN_H: f64 = 60.0;

/// Shared capability interface of the three workout kinds.
///
/// Distance, mean speed and the summary are provided as defaults; calorie
/// spend differs per kind and must be supplied by each variant. None of the
/// formulas validate their inputs: a zero duration (or a zero height for
/// walking) propagates as IEEE infinity/NaN, never a panic.
pub trait Training: std::fmt::Debug {
    /// Display label used verbatim in the summary line.
    fn label(&self) -> &'static str;

    fn action(&self) -> f64;
    fn duration_h(&self) -> f64;
    fn weight_kg(&self) -> f64;

    fn step_len(&self) -> f64 {
        LEN_STEP
    }

    fn distance_km(&self) -> f64 {
        self.action() * self.step_len() / M_IN_KM
    }

    fn mean_speed_kmh(&self) -> f64 {
        self.distance_km() / self.duration_h()
    }

    fn spent_calories(&self) -> f64;

    /// Pure: recomputes distance, speed and calories on every call.
    fn summary(&self) -> InfoMessage {
        InfoMessage {
            training_type: self.label().to_string(),
            duration_h: self.duration_h(),
            distance_km: self.distance_km(),
            speed_kmh: self.mean_speed_kmh(),
            calories: self.spent_calories(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Running {
    action: f64,
    duration_h: f64,
    weight_kg: f64,
}

impl Running {
    const SPEED_MULTIPLIER: f64 = 18.0;
    const SPEED_SHIFT: f64 = 1.79;

    pub fn new(action: f64, duration_h: f64, weight_kg: f64) -> Self {
        Self {
            action,
            duration_h,
            weight_kg,
        }
    }
}

impl Training for Running {
    fn label(&self) -> &'static str {
        "Running"
    }

    fn action(&self) -> f64 {
        self.action
    }

    fn duration_h(&self) -> f64 {
        self.duration_h
    }

    fn weight_kg(&self) -> f64 {
        self.weight_kg
    }

    fn spent_calories(&self) -> f64 {
        (Self::SPEED_MULTIPLIER * self.mean_speed_kmh() + Self::SPEED_SHIFT) * self.weight_kg
            / M_IN_KM
            * self.duration_h
            * MIN_IN_H
    }
}

#[derive(Debug, Clone)]
pub struct SportsWalking {
    action: f64,
    duration_h: f64,
    weight_kg: f64,
    height_cm: f64,
}

impl SportsWalking {
    const WEIGHT_MULTIPLIER: f64 = 0.035;
    const SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;
    const KMH_IN_MSEC: f64 = 0.278;
    const CM_IN_M: f64 = 100.0;

    pub fn new(action: f64, duration_h: f64, weight_kg: f64, height_cm: f64) -> Self {
        Self {
            action,
            duration_h,
            weight_kg,
            height_cm,
        }
    }
}

impl Training for SportsWalking {
    fn label(&self) -> &'static str {
        "SportsWalking"
    }

    fn action(&self) -> f64 {
        self.action
    }

    fn duration_h(&self) -> f64 {
        self.duration_h
    }

    fn weight_kg(&self) -> f64 {
        self.weight_kg
    }

    fn spent_calories(&self) -> f64 {
        let speed_msec = self.mean_speed_kmh() * Self::KMH_IN_MSEC;
        let height_m = self.height_cm / Self::CM_IN_M;

        (Self::WEIGHT_MULTIPLIER * self.weight_kg
            + speed_msec.powi(2) / height_m * Self::SPEED_HEIGHT_MULTIPLIER * self.weight_kg)
            * (self.duration_h * MIN_IN_H)
    }
}

#[derive(Debug, Clone)]
pub struct Swimming {
    action: f64,
    duration_h: f64,
    weight_kg: f64,
    pool_len_m: f64,
    pool_laps: f64,
}

impl Swimming {
    const SPEED_OFFSET: f64 = 1.1;
    const LEN_STEP: f64 = 1.38;
    const WEIGHT_MULTIPLIER: f64 = 2.0;

    pub fn new(
        action: f64,
        duration_h: f64,
        weight_kg: f64,
        pool_len_m: f64,
        pool_laps: f64,
    ) -> Self {
        Self {
            action,
            duration_h,
            weight_kg,
            pool_len_m,
            pool_laps,
        }
    }
}

impl Training for Swimming {
    fn label(&self) -> &'static str {
        "Swimming"
    }

    fn action(&self) -> f64 {
        self.action
    }

    fn duration_h(&self) -> f64 {
        self.duration_h
    }

    fn weight_kg(&self) -> f64 {
        self.weight_kg
    }

    fn step_len(&self) -> f64 {
        Self::LEN_STEP
    }

    // Pool speed, not step-derived speed. Distance still uses action count.
    fn mean_speed_kmh(&self) -> f64 {
        self.pool_len_m * self.pool_laps / M_IN_KM / self.duration_h
    }

    fn spent_calories(&self) -> f64 {
        (self.mean_speed_kmh() + Self::SPEED_OFFSET)
            * Self::WEIGHT_MULTIPLIER
            * self.weight_kg
            * self.duration_h
    }
}

#[cfg(test)]
mod tests {
    use super::{Running, SportsWalking, Swimming, Training};

    const TOL: f64 = 1e-9;

    #[test]
    fn distance_uses_step_length_per_variant() {
        let run = Running::new(720.0, 1.0, 80.0);
        assert!((run.distance_km() - 720.0 * 0.65 / 1000.0).abs() < TOL);

        let walk = SportsWalking::new(9000.0, 1.0, 75.0, 180.0);
        assert!((walk.distance_km() - 9000.0 * 0.65 / 1000.0).abs() < TOL);

        let swim = Swimming::new(720.0, 1.0, 80.0, 25.0, 40.0);
        assert!((swim.distance_km() - 720.0 * 1.38 / 1000.0).abs() < TOL);
    }

    #[test]
    fn running_metrics() {
        let run = Running::new(720.0, 1.0, 80.0);
        let speed = run.mean_speed_kmh();
        assert!((run.distance_km() - 0.468).abs() < TOL);
        assert!((speed - 0.468).abs() < TOL);

        let expected = (18.0 * speed + 1.79) * 80.0 / 1000.0 * 1.0 * 60.0;
        assert!((run.spent_calories() - expected).abs() < TOL);
    }

    #[test]
    fn walking_metrics() {
        let walk = SportsWalking::new(9000.0, 1.0, 75.0, 180.0);
        let speed = walk.mean_speed_kmh();
        assert!((walk.distance_km() - 5.85).abs() < TOL);
        assert!((speed - 5.85).abs() < TOL);

        let expected = (0.035 * 75.0
            + (speed * 0.278).powi(2) / (180.0 / 100.0) * 0.029 * 75.0)
            * (1.0 * 60.0);
        assert!((walk.spent_calories() - expected).abs() < TOL);
        assert!(walk.spent_calories().is_finite());
        assert!(walk.spent_calories() > 0.0);
    }

    #[test]
    fn swimming_overrides_speed_but_not_distance() {
        let swim = Swimming::new(720.0, 1.0, 80.0, 25.0, 40.0);
        assert!((swim.mean_speed_kmh() - 1.0).abs() < TOL);
        assert!((swim.distance_km() - 0.9936).abs() < TOL);
        assert!((swim.spent_calories() - (1.0 + 1.1) * 2.0 * 80.0 * 1.0).abs() < TOL);
    }

    #[test]
    fn accessors_are_idempotent() {
        let run = Running::new(15000.0, 1.0, 75.0);
        assert_eq!(run.distance_km().to_bits(), run.distance_km().to_bits());
        assert_eq!(
            run.mean_speed_kmh().to_bits(),
            run.mean_speed_kmh().to_bits()
        );
        assert_eq!(
            run.spent_calories().to_bits(),
            run.spent_calories().to_bits()
        );
        assert_eq!(run.summary(), run.summary());
    }

    #[test]
    fn zero_duration_yields_infinite_speed() {
        let run = Running::new(720.0, 0.0, 80.0);
        assert!(run.mean_speed_kmh().is_infinite());

        let swim = Swimming::new(720.0, 0.0, 80.0, 25.0, 40.0);
        assert!(swim.mean_speed_kmh().is_infinite());
    }

    #[test]
    fn zero_height_yields_non_finite_calories() {
        let walk = SportsWalking::new(9000.0, 1.0, 75.0, 0.0);
        assert!(walk.spent_calories().is_infinite());
    }

    #[test]
    fn summary_carries_variant_label_and_metrics() {
        let swim = Swimming::new(720.0, 1.0, 80.0, 25.0, 40.0);
        let info = swim.summary();
        assert_eq!(info.training_type, "Swimming");
        assert!((info.duration_h - 1.0).abs() < TOL);
        assert!((info.distance_km - 0.9936).abs() < TOL);
        assert!((info.speed_kmh - 1.0).abs() < TOL);
        assert!((info.calories - 336.0).abs() < TOL);
    }
}

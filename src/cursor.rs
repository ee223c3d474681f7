use std::f64::consts::PI;

/// Selector for elements that switch the custom cursor to its active state.
pub const INTERACTIVE_SELECTOR: &str = "button, a, [role='button'], .stat, #closeStatsModal";

const SPARK_MIN_DISTANCE: f64 = 50.0;
const SPARK_DISTANCE_RANGE: f64 = 200.0;
const SPARK_MIN_DURATION_MS: f64 = 1_000.0;
const SPARK_DURATION_RANGE_MS: f64 = 500.0;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum CursorScale {
    Rest,
    Hover,
    Pulse,
}

impl CursorScale {
    pub fn transform(self) -> &'static str {
        match self {
            Self::Rest => "translate(-50%, -50%)",
            Self::Hover => "translate(-50%, -50%) scale(1.2)",
            Self::Pulse => "translate(-50%, -50%) scale(1.4)",
        }
    }

    /// Scale the cursor settles to once a click pulse ends.
    pub fn settled(active: bool) -> Self {
        if active {
            Self::Hover
        } else {
            Self::Rest
        }
    }
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub enum CursorAction {
    Move { x: f64, y: f64 },
    Hover(bool),
    Pulse,
    Settle,
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct CursorState {
    pub x: f64,
    pub y: f64,
    pub active: bool,
    pub scale: CursorScale,
}

impl CursorState {
    pub fn centered(viewport_width: f64, viewport_height: f64) -> Self {
        Self {
            x: viewport_width / 2.0,
            y: viewport_height / 2.0,
            active: false,
            scale: CursorScale::Rest,
        }
    }

    pub fn apply(&mut self, action: CursorAction) {
        match action {
            CursorAction::Move { x, y } => {
                self.x = x;
                self.y = y;
            }
            CursorAction::Hover(active) => self.active = active,
            CursorAction::Pulse => self.scale = CursorScale::Pulse,
            CursorAction::Settle => self.scale = CursorScale::settled(self.active),
        }
    }

    pub fn style(&self) -> String {
        format!(
            "top: {:.0}px; left: {:.0}px; transform: {};",
            self.y,
            self.x,
            self.scale.transform()
        )
    }
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Spark {
    pub dx: f64,
    pub dy: f64,
    pub duration_ms: f64,
}

impl Spark {
    /// `random` must yield values in `[0, 1)`.
    pub fn random(random: &mut impl FnMut() -> f64) -> Self {
        let angle = random() * 2.0 * PI;
        let distance = random() * SPARK_DISTANCE_RANGE + SPARK_MIN_DISTANCE;
        let duration_ms = SPARK_MIN_DURATION_MS + random() * SPARK_DURATION_RANGE_MS;

        Self {
            dx: angle.cos() * distance,
            dy: angle.sin() * distance,
            duration_ms,
        }
    }

    pub fn distance(&self) -> f64 {
        self.dx.hypot(self.dy)
    }

    pub fn style(&self, origin_x: f64, origin_y: f64) -> String {
        format!(
            "left: {origin_x:.0}px; top: {origin_y:.0}px; --spark-x: {:.2}px; --spark-y: {:.2}px; animation-duration: {:.0}ms;",
            self.dx, self.dy, self.duration_ms
        )
    }
}

pub fn spark_burst(count: usize, mut random: impl FnMut() -> f64) -> Vec<Spark> {
    (0..count).map(|_| Spark::random(&mut random)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SPARK_COUNT;

    fn lcg(seed: u64) -> impl FnMut() -> f64 {
        let mut state = seed;
        move || {
            state = state
                .wrapping_mul(6_364_136_223_846_793_005)
                .wrapping_add(1_442_695_040_888_963_407);
            (state >> 11) as f64 / (1_u64 << 53) as f64
        }
    }

    #[test]
    fn burst_stays_within_distance_and_duration_ranges() {
        let sparks = spark_burst(SPARK_COUNT, lcg(7));

        assert_eq!(sparks.len(), 40);
        for spark in &sparks {
            assert!((50.0 - 1e-9..250.0).contains(&spark.distance()));
            assert!((1_000.0..1_500.0).contains(&spark.duration_ms));
        }
    }

    #[test]
    fn zero_random_sends_spark_right_at_minimum_distance() {
        let spark = Spark::random(&mut || 0.0);

        assert!((spark.dx - 50.0).abs() < 1e-9);
        assert!(spark.dy.abs() < 1e-9);
        assert_eq!(spark.duration_ms, 1_000.0);
    }

    #[test]
    fn click_pulse_settles_by_hover_state() {
        assert_eq!(CursorScale::settled(true), CursorScale::Hover);
        assert_eq!(CursorScale::settled(false).transform(), "translate(-50%, -50%)");
        assert_eq!(
            CursorScale::Pulse.transform(),
            "translate(-50%, -50%) scale(1.4)"
        );
    }

    #[test]
    fn pulse_then_settle_respects_hover_flag() {
        let mut cursor = CursorState::centered(100.0, 100.0);
        cursor.apply(CursorAction::Hover(true));
        cursor.apply(CursorAction::Pulse);
        assert_eq!(cursor.scale, CursorScale::Pulse);

        cursor.apply(CursorAction::Settle);
        assert_eq!(cursor.scale, CursorScale::Hover);

        cursor.apply(CursorAction::Hover(false));
        cursor.apply(CursorAction::Pulse);
        cursor.apply(CursorAction::Settle);
        assert_eq!(cursor.scale, CursorScale::Rest);

        cursor.apply(CursorAction::Move { x: 12.0, y: 34.0 });
        assert_eq!((cursor.x, cursor.y), (12.0, 34.0));
    }

    #[test]
    fn cursor_starts_at_viewport_center() {
        let cursor = CursorState::centered(1280.0, 720.0);

        assert_eq!((cursor.x, cursor.y), (640.0, 360.0));
        assert_eq!(
            cursor.style(),
            "top: 360px; left: 640px; transform: translate(-50%, -50%);"
        );
    }
}

///////////////////////////////////////////////////////////////////////////////////////////////////
///
/// Imports
///
///////////////////////////////////////////////////////////////////////////////////////////////////
use druid::Data;

/// Fixed integration step in seconds. Frames are split into sub-steps of this length.
const STEP: f64 = 0.001;

///////////////////////////////////////////////////////////////////////////////////////////////////
///
/// SpringConfig
///
///////////////////////////////////////////////////////////////////////////////////////////////////
/// Physical parameters of a [`Spring`].
///
/// `tension` pulls the value toward its target, `friction` damps the velocity and
/// `mass` scales the response. Once both the displacement and the velocity fall
/// within `precision` the spring snaps onto its target and stops.
///
/// A `mass` that is not a positive number counts as `1.0`, and a `precision`
/// that is not a positive number counts as the default `0.01`, so a spring
/// always comes to rest.
#[derive(Clone, Copy, Debug, PartialEq, Data)]
pub struct SpringConfig {
    pub tension: f64,
    pub friction: f64,
    pub mass: f64,
    pub precision: f64,
}

impl SpringConfig {
    pub const DEFAULT: SpringConfig = SpringConfig {
        tension: 170.0,
        friction: 26.0,
        mass: 1.0,
        precision: 0.01,
    };

    pub fn new(tension: f64, friction: f64, mass: f64) -> Self {
        Self {
            tension,
            friction,
            mass: positive_or(mass, Self::DEFAULT.mass),
            ..Self::DEFAULT
        }
    }

    pub fn with_precision(mut self, precision: f64) -> Self {
        self.precision = positive_or(precision, Self::DEFAULT.precision);
        self
    }

    /// Mass used by the simulation. The fields are public, so this re-applies the clamp.
    pub fn effective_mass(&self) -> f64 {
        positive_or(self.mass, Self::DEFAULT.mass)
    }

    pub fn effective_precision(&self) -> f64 {
        positive_or(self.precision, Self::DEFAULT.precision)
    }

    pub fn gentle() -> Self {
        Self::new(120.0, 14.0, 1.0)
    }

    pub fn wobbly() -> Self {
        Self::new(180.0, 12.0, 1.0)
    }

    pub fn stiff() -> Self {
        Self::new(210.0, 20.0, 1.0)
    }

    pub fn slow() -> Self {
        Self::new(280.0, 60.0, 1.0)
    }

    pub fn molasses() -> Self {
        Self::new(280.0, 120.0, 1.0)
    }
}

fn positive_or(value: f64, fallback: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        fallback
    }
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

///////////////////////////////////////////////////////////////////////////////////////////////////
///
/// Spring
///
///////////////////////////////////////////////////////////////////////////////////////////////////
#[derive(Clone, Debug, PartialEq)]
pub struct Spring {
    value: f64,
    velocity: f64,
    target: f64,
    config: SpringConfig,
}

impl Spring {
    /// A spring resting at `value`.
    pub fn new(value: f64, config: SpringConfig) -> Self {
        Self {
            value,
            velocity: 0.0,
            target: value,
            config,
        }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    pub fn config(&self) -> &SpringConfig {
        &self.config
    }

    /// Moves the target. The current velocity carries over so an in-flight
    /// animation bends toward the new target instead of restarting.
    pub fn set_target(&mut self, target: f64) {
        self.target = target;
    }

    /// Jumps to `value` and rests there.
    pub fn snap_to(&mut self, value: f64) {
        self.value = value;
        self.target = value;
        self.velocity = 0.0;
    }

    pub fn is_settled(&self) -> bool {
        self.velocity == 0.0 && self.value == self.target
    }

    /// Advances the simulation by `dt` seconds.
    pub fn step(&mut self, dt: f64) {
        if !dt.is_finite() || dt <= 0.0 || self.is_settled() {
            return;
        }

        let mass = self.config.effective_mass();
        let mut remaining = dt;
        while remaining > 0.0 {
            let h = remaining.min(STEP);
            let displacement = self.value - self.target;
            let force = -self.config.tension * displacement - self.config.friction * self.velocity;
            self.velocity += force / mass * h;
            self.value += self.velocity * h;
            remaining -= h;

            if self.is_within_precision() {
                self.snap_to(self.target);
                log::trace!("spring settled at {}", self.target);
                break;
            }
        }
    }

    fn is_within_precision(&self) -> bool {
        let precision = self.config.effective_precision();
        (self.value - self.target).abs() <= precision && self.velocity.abs() <= precision
    }
}

impl Default for Spring {
    fn default() -> Self {
        Self::new(0.0, SpringConfig::DEFAULT)
    }
}

#[cfg(test)]
mod tests {
    use super::{Spring, SpringConfig};

    #[test]
    fn rests_until_retargeted() {
        let mut spring = Spring::new(0.0, SpringConfig::default());
        assert!(spring.is_settled());
        spring.step(1.0);
        assert_eq!(spring.value(), 0.0);
    }

    #[test]
    fn converges_and_snaps_to_target() {
        let presets = [
            SpringConfig::default(),
            SpringConfig::gentle(),
            SpringConfig::wobbly(),
            SpringConfig::stiff(),
            SpringConfig::slow(),
            SpringConfig::molasses(),
        ];
        for config in presets {
            let mut spring = Spring::new(0.0, config);
            spring.set_target(180.0);
            for _ in 0..600 {
                spring.step(1.0 / 60.0);
            }
            assert!(spring.is_settled(), "{config:?} did not settle: {spring:?}");
            assert_eq!(spring.value(), 180.0);
            assert_eq!(spring.velocity(), 0.0);
        }
    }

    #[test]
    fn moves_toward_target_on_first_frame() {
        let mut spring = Spring::new(0.0, SpringConfig::default());
        spring.set_target(180.0);
        spring.step(1.0 / 60.0);
        assert!(spring.value() > 0.0 && spring.value() < 180.0);
        assert!(spring.velocity() > 0.0);
    }

    #[test]
    fn retarget_keeps_velocity() {
        let mut spring = Spring::new(0.0, SpringConfig::default());
        spring.set_target(180.0);
        spring.step(0.1);
        let velocity = spring.velocity();
        let value = spring.value();

        spring.set_target(0.0);
        assert_eq!(spring.velocity(), velocity);
        assert_eq!(spring.value(), value);

        spring.step(0.001);
        assert!(spring.value() > value, "momentum should carry the value forward briefly");
    }

    #[test]
    fn ignores_degenerate_intervals() {
        let mut spring = Spring::new(0.0, SpringConfig::default());
        spring.set_target(180.0);
        spring.step(0.0);
        spring.step(-1.0);
        spring.step(f64::NAN);
        spring.step(f64::INFINITY);
        assert_eq!(spring.value(), 0.0);
        assert!(!spring.is_settled());
    }

    #[test]
    fn frame_rate_does_not_change_the_curve_much() {
        let mut coarse = Spring::new(0.0, SpringConfig::default());
        let mut fine = Spring::new(0.0, SpringConfig::default());
        coarse.set_target(180.0);
        fine.set_target(180.0);

        for _ in 0..10 {
            coarse.step(0.03);
        }
        for _ in 0..300 {
            fine.step(0.001);
        }
        assert!((coarse.value() - fine.value()).abs() < 1e-6);
    }

    #[test]
    fn degenerate_mass_and_precision_fall_back_to_defaults() {
        let config = SpringConfig::new(170.0, 26.0, -2.0).with_precision(-1.0);
        assert_eq!(config.mass, 1.0);
        assert_eq!(config.precision, 0.01);

        let custom = SpringConfig::default().with_precision(0.5);
        assert_eq!(custom.precision, 0.5);

        // Fields written directly are clamped when the spring runs.
        let raw = SpringConfig {
            mass: 0.0,
            precision: f64::NAN,
            ..SpringConfig::default()
        };
        let mut spring = Spring::new(0.0, raw);
        assert_eq!(spring.config().effective_mass(), 1.0);
        assert_eq!(spring.config().effective_precision(), 0.01);

        spring.set_target(180.0);
        for _ in 0..600 {
            spring.step(1.0 / 60.0);
        }
        assert!(spring.is_settled());
        assert_eq!(spring.value(), 180.0);
    }

    #[test]
    fn coarse_precision_settles_sooner() {
        let mut exact = Spring::new(0.0, SpringConfig::default());
        let mut coarse = Spring::new(0.0, SpringConfig::default().with_precision(5.0));
        assert_eq!(coarse.config().precision, 5.0);
        exact.set_target(180.0);
        coarse.set_target(180.0);

        let mut frames = 0;
        while !coarse.is_settled() {
            coarse.step(1.0 / 60.0);
            exact.step(1.0 / 60.0);
            frames += 1;
            assert!(frames < 600);
        }
        assert!(!exact.is_settled());
    }
}

///////////////////////////////////////////////////////////////////////////////////////////////////
///
/// Imports
///
///////////////////////////////////////////////////////////////////////////////////////////////////
use druid::Data;

use crate::animation::Trail;

/// Rotation of a tile showing its front face.
pub const UNFLIPPED_ANGLE: f64 = 0.0;
/// Rotation of a tile showing its back face.
pub const FLIPPED_ANGLE: f64 = 180.0;

///////////////////////////////////////////////////////////////////////////////////////////////////
///
/// FlipState
///
///////////////////////////////////////////////////////////////////////////////////////////////////
#[derive(Clone, Copy, Debug, PartialEq, Eq, Data, Default)]
pub enum FlipState {
    #[default]
    Unflipped,
    Flipped,
}

impl FlipState {
    pub fn toggled(self) -> Self {
        match self {
            FlipState::Unflipped => FlipState::Flipped,
            FlipState::Flipped => FlipState::Unflipped,
        }
    }

    /// Rotation every tile settles on while in this state.
    pub fn target_angle(self) -> f64 {
        match self {
            FlipState::Unflipped => UNFLIPPED_ANGLE,
            FlipState::Flipped => FLIPPED_ANGLE,
        }
    }

    pub fn is_flipped(self) -> bool {
        self == FlipState::Flipped
    }
}

///////////////////////////////////////////////////////////////////////////////////////////////////
///
/// FlipToggle
///
///////////////////////////////////////////////////////////////////////////////////////////////////
/// Two state flip switch driving a [`Trail`] of tile rotations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct FlipToggle {
    state: FlipState,
}

impl FlipToggle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> FlipState {
        self.state
    }

    pub fn is_flipped(&self) -> bool {
        self.state.is_flipped()
    }

    /// Flips the state and sends every rotation in `trail` toward the new
    /// state's angle. Rotations still in flight are re-targeted.
    pub fn trigger(&mut self, trail: &mut Trail) -> FlipState {
        let next = self.state.toggled();
        trail.start(next.target_angle());
        self.state = next;
        log::debug!("flip toggled to {:?}, target {}", next, next.target_angle());
        next
    }
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, Rng, SeedableRng};

    use super::{FlipState, FlipToggle, FLIPPED_ANGLE, UNFLIPPED_ANGLE};
    use crate::animation::{SpringConfig, StaggerConfig, Trail};

    fn trail(count: usize) -> Trail {
        Trail::new(count, UNFLIPPED_ANGLE, SpringConfig::default(), StaggerConfig::default())
    }

    #[test]
    fn starts_unflipped() {
        let toggle = FlipToggle::new();
        assert_eq!(toggle.state(), FlipState::Unflipped);
        assert!(!toggle.is_flipped());
    }

    #[test]
    fn trigger_alternates_state_and_target() {
        let mut toggle = FlipToggle::new();
        let mut trail = trail(3);

        assert_eq!(toggle.trigger(&mut trail), FlipState::Flipped);
        assert!((0..3).all(|i| trail.requested_target(i) == Some(FLIPPED_ANGLE)));

        assert_eq!(toggle.trigger(&mut trail), FlipState::Unflipped);
        assert!((0..3).all(|i| trail.requested_target(i) == Some(UNFLIPPED_ANGLE)));
    }

    #[test]
    fn state_follows_parity_of_trigger_count() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..50 {
            let mut toggle = FlipToggle::new();
            let mut trail = trail(5);
            let triggers = rng.gen_range(0..40);
            for _ in 0..triggers {
                toggle.trigger(&mut trail);
                // Frames between clicks must not affect the outcome.
                trail.advance(rng.gen_range(0.0..0.2));
            }

            let odd = triggers % 2 == 1;
            assert_eq!(toggle.is_flipped(), odd);
            let expected = if odd { FLIPPED_ANGLE } else { UNFLIPPED_ANGLE };
            for index in 0..5 {
                assert_eq!(trail.requested_target(index), Some(expected));
            }
        }
    }

    #[test]
    fn double_trigger_returns_to_rest() {
        let mut toggle = FlipToggle::new();
        let mut trail = trail(5);
        toggle.trigger(&mut trail);
        toggle.trigger(&mut trail);
        for _ in 0..600 {
            trail.advance(1.0 / 60.0);
        }
        assert_eq!(toggle.state(), FlipState::Unflipped);
        assert!(trail.values().all(|v| v == UNFLIPPED_ANGLE));
    }

    #[test]
    fn triggering_an_empty_trail_still_toggles() {
        let mut toggle = FlipToggle::new();
        let mut trail = trail(0);
        assert_eq!(toggle.trigger(&mut trail), FlipState::Flipped);
        assert!(!trail.is_animating());
    }
}

use crate::constants::{EARTH_RADIUS, GRAVITY, HORIZONTAL_ACCELERATION};

use super::state::State;

/// Gravity at the projectile's altitude, attenuated by the inverse-square law
/// measured from Earth's center. Negative means downward.
///
/// Not defined as the altitude approaches `-EARTH_RADIUS`.
pub fn vertical_acceleration(state: &State) -> f64 {
    let ratio = EARTH_RADIUS / (EARTH_RADIUS + state.vert_pos);
    GRAVITY * ratio * ratio
}

/// No horizontal force acts on the projectile.
pub fn horizontal_acceleration(_state: &State) -> f64 {
    HORIZONTAL_ACCELERATION
}

/// Accelerations acting on a [`State`].
pub trait AccelerationModel {
    fn vertical_acceleration(&self, state: &State) -> f64;
    fn horizontal_acceleration(&self, state: &State) -> f64;
}

/// Inverse-square gravity over a flat ground track.
#[derive(Debug, Clone, Copy, Default)]
pub struct AltitudeGravity;

impl AccelerationModel for AltitudeGravity {
    fn vertical_acceleration(&self, state: &State) -> f64 {
        vertical_acceleration(state)
    }

    fn horizontal_acceleration(&self, state: &State) -> f64 {
        horizontal_acceleration(state)
    }
}

/// Constant gravity regardless of altitude, the textbook projectile.
#[derive(Debug, Clone, Copy)]
pub struct UniformGravity {
    pub gravity: f64,
}

impl UniformGravity {
    pub fn new(gravity: f64) -> Self {
        UniformGravity { gravity }
    }
}

impl Default for UniformGravity {
    fn default() -> Self {
        UniformGravity::new(GRAVITY)
    }
}

impl AccelerationModel for UniformGravity {
    fn vertical_acceleration(&self, _state: &State) -> f64 {
        self.gravity
    }

    fn horizontal_acceleration(&self, state: &State) -> f64 {
        horizontal_acceleration(state)
    }
}

use super::physics::{AccelerationModel, AltitudeGravity};
use super::state::{Derivative, State};

/// Classical fourth-order Runge-Kutta over position and velocity on both axes.
#[derive(Debug, Clone, Copy, Default)]
pub struct Rk4<M: AccelerationModel = AltitudeGravity> {
    model: M,
}

impl<M: AccelerationModel> Rk4<M> {
    pub fn new(model: M) -> Self {
        Rk4 { model }
    }

    /// Derivative of `state` at the current instant (the k1 stage).
    pub fn evaluate(&self, state: &State) -> Derivative {
        Derivative {
            vert_vel: state.vert_vel,
            horz_vel: state.horz_vel,
            vert_acc: self.model.vertical_acceleration(state),
            horz_acc: self.model.horizontal_acceleration(state),
        }
    }

    /// Derivative at `base` advanced by `prior` over `dt` with an Euler step.
    pub fn evaluate_at(&self, base: &State, dt: f64, prior: &Derivative) -> Derivative {
        let intermediate = base.advanced(prior, dt);
        self.evaluate(&intermediate)
    }

    /// Advances `state` in place by one fixed step of `dt` seconds.
    ///
    /// There is no bounds checking: the caller decides when to stop stepping.
    pub fn step(&self, state: &mut State, dt: f64) {
        let k1 = self.evaluate(state);
        let k2 = self.evaluate_at(state, dt / 2.0, &k1);
        let k3 = self.evaluate_at(state, dt / 2.0, &k2);
        let k4 = self.evaluate_at(state, dt, &k3);

        let average = Derivative::weighted_average(&k1, &k2, &k3, &k4);
        *state = state.advanced(&average, dt);
    }
}

pub fn evaluate(state: &State) -> Derivative {
    Rk4::<AltitudeGravity>::default().evaluate(state)
}

pub fn evaluate_at(base: &State, dt: f64, prior: &Derivative) -> Derivative {
    Rk4::<AltitudeGravity>::default().evaluate_at(base, dt, prior)
}

pub fn step(state: &mut State, dt: f64) {
    Rk4::<AltitudeGravity>::default().step(state, dt)
}

/// Instantaneous position and velocity of the projectile.
///
/// Vertical components are altitude above ground and climb rate, horizontal
/// components are downrange distance and ground speed.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct State {
    pub vert_pos: f64, // m
    pub horz_pos: f64, // m
    pub vert_vel: f64, // m/s
    pub horz_vel: f64, // m/s
}

/// Time derivative of a [`State`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Derivative {
    pub vert_vel: f64, // m/s
    pub horz_vel: f64, // m/s
    pub vert_acc: f64, // m/s²
    pub horz_acc: f64, // m/s²
}

impl State {
    pub fn new(vert_pos: f64, horz_pos: f64, vert_vel: f64, horz_vel: f64) -> Self {
        State {
            vert_pos,
            horz_pos,
            vert_vel,
            horz_vel,
        }
    }

    /// Launch state from ground-relative altitude, speed and firing angle in radians.
    pub fn from_launch(altitude: f64, speed: f64, angle: f64) -> Self {
        State {
            vert_pos: altitude,
            horz_pos: 0.0,
            vert_vel: speed * angle.sin(),
            horz_vel: speed * angle.cos(),
        }
    }

    pub fn speed(&self) -> f64 {
        (self.vert_vel.powi(2) + self.horz_vel.powi(2)).sqrt()
    }

    pub fn is_above_ground(&self) -> bool {
        self.vert_pos >= 0.0
    }

    /// Euler step of `self` along `derivative` over `dt`.
    pub fn advanced(&self, derivative: &Derivative, dt: f64) -> Self {
        State {
            vert_pos: self.vert_pos + derivative.vert_vel * dt,
            horz_pos: self.horz_pos + derivative.horz_vel * dt,
            vert_vel: self.vert_vel + derivative.vert_acc * dt,
            horz_vel: self.horz_vel + derivative.horz_acc * dt,
        }
    }
}

impl Derivative {
    /// Classical RK4 weighting `(k1 + 2(k2 + k3) + k4) / 6`, per component.
    pub fn weighted_average(k1: &Self, k2: &Self, k3: &Self, k4: &Self) -> Self {
        let combine = |a: f64, b: f64, c: f64, d: f64| (a + 2.0 * (b + c) + d) / 6.0;

        Derivative {
            vert_vel: combine(k1.vert_vel, k2.vert_vel, k3.vert_vel, k4.vert_vel),
            horz_vel: combine(k1.horz_vel, k2.horz_vel, k3.horz_vel, k4.horz_vel),
            vert_acc: combine(k1.vert_acc, k2.vert_acc, k3.vert_acc, k4.vert_acc),
            horz_acc: combine(k1.horz_acc, k2.horz_acc, k3.horz_acc, k4.horz_acc),
        }
    }
}

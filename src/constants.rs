// Physical Constants
pub const GRAVITY: f64 = -9.80665; // m/s², standard gravity at sea level (downward)
pub const EARTH_RADIUS: f64 = 6_371_000.0; // meters, mean radius
pub const HORIZONTAL_ACCELERATION: f64 = 0.0; // m/s², no drag or wind

// Launch Constraints
pub const MIN_FIRING_ANGLE: f64 = 0.0; // degrees
pub const MAX_FIRING_ANGLE: f64 = 90.0; // degrees

// Output Precision
pub const TIME_PRECISION: usize = 5;
pub const STATE_PRECISION: usize = 9;

//! Tuning for the body, its solver and its behaviors.

use crate::error::BodyError;
use crate::float::Float;

/// Every tunable of the simulation.
///
/// Lengths are desktop pixels, times are seconds, and values named `*_chance`
/// are per-tick probabilities.
///
/// # Builder Pattern
/// ```
/// use squish::config::BodyConfig;
///
/// let config: BodyConfig<f32> = BodyConfig::new()
///     .with_radius(32.0)
///     .with_gravity(900.0)
///     .with_seed(7);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct BodyConfig<F: Float> {
    /// Nominal body radius. Default: 28.
    pub radius: F,
    /// Gap between the spawned body and the monitor's bottom edge. Default: 40.
    pub spawn_lift: F,
    /// Largest dt a single tick will integrate. Default: 0.05.
    pub max_dt: F,
    /// Downward acceleration in px/s². Default: 1200.
    pub gravity: F,
    /// Velocity retained per tick. Default: 0.98.
    pub damping: F,
    /// Speed cap in px/s. Default: 900.
    pub max_speed: F,
    /// Speed cap while thrown. Default: 2400.
    pub max_free_speed: F,
    /// Constraint relaxation passes per tick. Default: 2.
    pub iterations: usize,
    pub edge_stiffness: F,
    pub skip_stiffness: F,
    pub diameter_stiffness: F,
    /// Outward push per node per pass at rest area, in px. Default: 0.15.
    pub pressure: F,
    /// Largest pressure push per pass as a fraction of the radius. Default: 0.25.
    pub pressure_cap: F,
    /// Breathing phase speed in rad/s. Default: 1.6.
    pub breath_rate: F,
    /// Relative pressure swing from breathing. Default: 0.05.
    pub breath_amplitude: F,
    /// Velocity kept after hitting a wall. Default: 0.4.
    pub bounce: F,
    /// Walking speed in px/s. Default: 40.
    pub walk_speed: F,
    /// Chance per tick that Idle starts walking. Default: 0.004.
    pub walk_chance: F,
    /// Chance per tick that Walking stops. Default: 0.003.
    pub rest_chance: F,
    /// Float speed in px/s. Default: 220.
    pub float_speed: F,
    /// Distance at which a float counts as arrived. Default: 3.
    pub arrive_distance: F,
    /// Seconds before an unfinished float gives up. Default: 6.
    pub float_timeout: F,
    /// Seconds after a throw before settling is considered. Default: 0.6.
    pub free_cooldown: F,
    /// Mean squared per-node displacement counted as resting. Default: 0.5.
    pub rest_energy: F,
    /// Fraction of the distance to the clinging target covered per tick. Default: 0.1.
    pub adhesion: F,
    /// Peak per-tick pull toward a nearby window, in px. Default: 0.04.
    pub attraction: F,
    /// Distance at which window pull fades to zero. Default: 160.
    pub attraction_range: F,
    /// Fraction of the distance to the drag target covered per tick at full
    /// pointer speed. Default: 0.2.
    pub drag_follow: F,
    /// Pointer speed (px/tick) at which drag follow reaches full strength. Default: 4.
    pub drag_speed_threshold: F,
    /// Power of the cosine falloff for the cursor stick. Default: 8.
    pub stick_exponent: i32,
    /// Fraction of the cursor-stick violation corrected per pass. Default: 0.5.
    pub stick_strength: F,
    /// Multiplier on the last pointer displacement at release. Default: 0.7.
    pub throw_scale: F,
    /// Largest per-tick displacement a throw may impart. Default: 40.
    pub max_throw: F,
    /// Seed for behavior randomness. Default: 0x5eed.
    pub seed: u64,
}

impl<F: Float> BodyConfig<F> {
    pub fn new() -> Self {
        BodyConfig {
            radius: F::from_f32(28.0),
            spawn_lift: F::from_f32(40.0),
            max_dt: F::from_f32(0.05),
            gravity: F::from_f32(1200.0),
            damping: F::from_f32(0.98),
            max_speed: F::from_f32(900.0),
            max_free_speed: F::from_f32(2400.0),
            iterations: 2,
            edge_stiffness: F::from_f32(0.5),
            skip_stiffness: F::from_f32(0.08),
            diameter_stiffness: F::from_f32(0.02),
            pressure: F::from_f32(0.15),
            pressure_cap: F::from_f32(0.25),
            breath_rate: F::from_f32(1.6),
            breath_amplitude: F::from_f32(0.05),
            bounce: F::from_f32(0.4),
            walk_speed: F::from_f32(40.0),
            walk_chance: F::from_f32(0.004),
            rest_chance: F::from_f32(0.003),
            float_speed: F::from_f32(220.0),
            arrive_distance: F::from_f32(3.0),
            float_timeout: F::from_f32(6.0),
            free_cooldown: F::from_f32(0.6),
            rest_energy: F::from_f32(0.5),
            adhesion: F::from_f32(0.1),
            attraction: F::from_f32(0.04),
            attraction_range: F::from_f32(160.0),
            drag_follow: F::from_f32(0.2),
            drag_speed_threshold: F::from_f32(4.0),
            stick_exponent: 8,
            stick_strength: F::from_f32(0.5),
            throw_scale: F::from_f32(0.7),
            max_throw: F::from_f32(40.0),
            seed: 0x5eed,
        }
    }

    pub fn with_radius(mut self, radius: F) -> Self {
        self.radius = radius;
        self
    }

    pub fn with_gravity(mut self, gravity: F) -> Self {
        self.gravity = gravity;
        self
    }

    pub fn with_damping(mut self, damping: F) -> Self {
        self.damping = damping;
        self
    }

    /// Set the number of relaxation passes (at least one).
    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations.max(1);
        self
    }

    pub fn with_stiffness(mut self, edge: F, skip: F, diameter: F) -> Self {
        self.edge_stiffness = edge;
        self.skip_stiffness = skip;
        self.diameter_stiffness = diameter;
        self
    }

    pub fn with_pressure(mut self, pressure: F) -> Self {
        self.pressure = pressure;
        self
    }

    pub fn with_bounce(mut self, bounce: F) -> Self {
        self.bounce = bounce;
        self
    }

    /// Set the per-tick chances of starting and stopping a walk.
    pub fn with_walk_chances(mut self, walk: F, rest: F) -> Self {
        self.walk_chance = walk;
        self.rest_chance = rest;
        self
    }

    pub fn with_max_throw(mut self, max_throw: F) -> Self {
        self.max_throw = max_throw;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Reject values the solver cannot work with.
    pub fn validate(&self) -> Result<(), BodyError> {
        if !(self.radius.is_finite() && self.radius > F::zero()) {
            return Err(BodyError::InvalidRadius);
        }
        let unit = |k: F| k >= F::zero() && k <= F::one();
        if !(unit(self.edge_stiffness) && unit(self.skip_stiffness) && unit(self.diameter_stiffness)) {
            return Err(BodyError::InvalidStiffness);
        }
        if !(self.bounce >= F::zero() && self.bounce < F::one()) {
            return Err(BodyError::InvalidBounce);
        }
        if self.iterations == 0 {
            return Err(BodyError::InvalidIterations);
        }
        Ok(())
    }
}

impl<F: Float> Default for BodyConfig<F> {
    fn default() -> Self {
        Self::new()
    }
}

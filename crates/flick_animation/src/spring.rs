//! Spring physics animation
//!
//! RK4-integrated spring physics for card motion. A spring carries its own
//! rest thresholds so that a quick fling can be declared settled long before
//! a press-scale spring would be.

/// Thresholds below which a spring counts as settled
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RestThresholds {
    /// Maximum distance from the target, in the value's own units
    pub displacement: f32,
    /// Maximum speed, in units per second
    pub speed: f32,
}

impl RestThresholds {
    pub const fn new(displacement: f32, speed: f32) -> Self {
        Self {
            displacement,
            speed,
        }
    }

    /// Tight thresholds suitable for values in the 0..1 range
    pub const fn precise() -> Self {
        Self::new(0.001, 0.001)
    }
}

impl Default for RestThresholds {
    fn default() -> Self {
        Self::precise()
    }
}

/// Configuration for a spring animation
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringConfig {
    pub stiffness: f32,
    pub damping: f32,
    pub mass: f32,
    pub rest: RestThresholds,
}

impl SpringConfig {
    /// Create a new spring configuration with precise rest thresholds
    pub fn new(stiffness: f32, damping: f32, mass: f32) -> Self {
        Self {
            stiffness,
            damping,
            mass,
            rest: RestThresholds::precise(),
        }
    }

    /// Build a spring from Origami-style tension and friction values
    ///
    /// This is the parameterization mobile toolkits expose; tension 40 with
    /// friction 7 is the conventional default.
    pub fn from_tension_friction(tension: f32, friction: f32) -> Self {
        let stiffness = (tension - 30.0) * 3.62 + 194.0;
        let damping = (friction - 8.0) * 3.0 + 25.0;
        Self::new(stiffness, damping, 1.0)
    }

    /// Replace the rest thresholds
    pub fn with_rest(mut self, rest: RestThresholds) -> Self {
        self.rest = rest;
        self
    }

    /// The general-purpose spring (tension 40, friction 7)
    pub fn standard() -> Self {
        Self::from_tension_friction(40.0, 7.0)
    }

    /// A low-tension spring with coarse rest thresholds
    ///
    /// Used to fling a card off screen. It reports completion while the card
    /// is still ~100 units short of its target.
    pub fn loose() -> Self {
        Self::from_tension_friction(5.0, 7.0).with_rest(RestThresholds::new(100.0, 100.0))
    }

    /// A stiff, snappy spring
    pub fn stiff() -> Self {
        Self::new(400.0, 30.0, 1.0)
    }

    /// Calculate critical damping for this spring's stiffness and mass
    pub fn critical_damping(&self) -> f32 {
        2.0 * (self.stiffness * self.mass).sqrt()
    }

    /// Check if the spring is underdamped (will oscillate)
    pub fn is_underdamped(&self) -> bool {
        self.damping < self.critical_damping()
    }

    /// Check if the spring is overdamped (slow settling, no oscillation)
    pub fn is_overdamped(&self) -> bool {
        self.damping > self.critical_damping()
    }
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self::standard()
    }
}

/// A spring-based animator
#[derive(Clone, Copy, Debug)]
pub struct Spring {
    config: SpringConfig,
    value: f32,
    velocity: f32,
    target: f32,
}

impl Spring {
    pub fn new(config: SpringConfig, initial: f32) -> Self {
        Self {
            config,
            value: initial,
            velocity: 0.0,
            target: initial,
        }
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    pub fn target(&self) -> f32 {
        self.target
    }

    pub fn config(&self) -> &SpringConfig {
        &self.config
    }

    /// Aim at a new target, keeping the current value and velocity
    pub fn retarget(&mut self, target: f32, config: SpringConfig) {
        self.target = target;
        self.config = config;
    }

    /// Jump to `value` and stop
    pub fn snap_to(&mut self, value: f32) {
        self.value = value;
        self.target = value;
        self.velocity = 0.0;
    }

    /// Land exactly on the target and stop
    pub fn settle(&mut self) {
        self.value = self.target;
        self.velocity = 0.0;
    }

    /// Check if the spring is within its rest thresholds
    pub fn is_settled(&self) -> bool {
        let rest = self.config.rest;
        (self.value - self.target).abs() <= rest.displacement && self.velocity.abs() <= rest.speed
    }

    /// Step the spring simulation using RK4 integration
    pub fn step(&mut self, dt: f32) {
        if self.is_settled() {
            return;
        }

        let k1_v = self.acceleration(self.value, self.velocity);
        let k1_x = self.velocity;

        let k2_v = self.acceleration(
            self.value + k1_x * dt * 0.5,
            self.velocity + k1_v * dt * 0.5,
        );
        let k2_x = self.velocity + k1_v * dt * 0.5;

        let k3_v = self.acceleration(
            self.value + k2_x * dt * 0.5,
            self.velocity + k2_v * dt * 0.5,
        );
        let k3_x = self.velocity + k2_v * dt * 0.5;

        let k4_v = self.acceleration(self.value + k3_x * dt, self.velocity + k3_v * dt);
        let k4_x = self.velocity + k3_v * dt;

        self.velocity += (k1_v + 2.0 * k2_v + 2.0 * k3_v + k4_v) * dt / 6.0;
        self.value += (k1_x + 2.0 * k2_x + 2.0 * k3_x + k4_x) * dt / 6.0;
    }

    fn acceleration(&self, x: f32, v: f32) -> f32 {
        let spring_force = -self.config.stiffness * (x - self.target);
        let damping_force = -self.config.damping * v;
        (spring_force + damping_force) / self.config.mass
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: f32 = 1.0 / 60.0;

    #[test]
    fn test_spring_settles_to_target() {
        let mut spring = Spring::new(SpringConfig::standard(), 0.0);
        spring.retarget(100.0, SpringConfig::standard());

        // 3 seconds at 60fps
        for _ in 0..180 {
            spring.step(FRAME);
        }

        assert!(spring.is_settled());
        assert!((spring.value() - 100.0).abs() < 0.01);
    }

    #[test]
    fn test_tension_friction_conversion() {
        let standard = SpringConfig::standard();
        assert!((standard.stiffness - 230.2).abs() < 1e-3);
        assert!((standard.damping - 22.0).abs() < 1e-3);

        let loose = SpringConfig::loose();
        assert!((loose.stiffness - 103.5).abs() < 1e-3);
        assert_eq!(loose.rest, RestThresholds::new(100.0, 100.0));
    }

    #[test]
    fn test_spring_presets() {
        assert!(SpringConfig::standard().is_underdamped());
        assert!(SpringConfig::stiff().is_underdamped());
        // The fling spring never bounces back toward the stack
        assert!(SpringConfig::loose().is_overdamped());
    }

    #[test]
    fn test_retarget_keeps_velocity() {
        let mut spring = Spring::new(SpringConfig::standard(), 0.0);
        spring.retarget(100.0, SpringConfig::standard());

        for _ in 0..10 {
            spring.step(FRAME);
        }

        let velocity = spring.velocity();
        assert!(velocity > 0.0);

        spring.retarget(0.0, SpringConfig::loose());
        assert_eq!(spring.velocity(), velocity);
    }

    #[test]
    fn test_loose_spring_settles_early() {
        let mut spring = Spring::new(SpringConfig::loose(), 0.0);
        spring.retarget(500.0, SpringConfig::loose());

        let mut frames = 0;
        while !spring.is_settled() {
            spring.step(FRAME);
            frames += 1;
            assert!(frames < 600, "fling never settled");
        }

        // Declared at rest while still visibly short of the target
        assert!(spring.value() < 500.0);
        assert!(spring.value() >= 400.0);
    }

    #[test]
    fn test_snap_to_stops_motion() {
        let mut spring = Spring::new(SpringConfig::standard(), 0.0);
        spring.retarget(100.0, SpringConfig::standard());
        spring.step(FRAME);

        spring.snap_to(42.0);
        assert_eq!(spring.value(), 42.0);
        assert_eq!(spring.target(), 42.0);
        assert_eq!(spring.velocity(), 0.0);
        assert!(spring.is_settled());
    }

    #[test]
    fn test_spring_rk4_stability() {
        let mut spring = Spring::new(SpringConfig::stiff(), 0.0);
        spring.retarget(1000.0, SpringConfig::stiff());

        for _ in 0..100 {
            spring.step(0.1);
            assert!(spring.value() < 2000.0);
            assert!(spring.value() > -500.0);
        }
    }
}

//! Data-driven game balance
//!
//! Every gameplay-feel number lives here so spawn/collision scenarios can be
//! pinned down in tests and players can experiment from a JSON file without
//! recompiling. Defaults reproduce the classic feel.

use std::fs;
use std::path::Path;

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Gameplay balance knobs
///
/// All rates are per simulation tick (60 Hz), in world units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Downward acceleration applied while airborne (negative)
    pub gravity: f32,
    /// Upward velocity set on jump
    pub jump_impulse: f32,

    /// Scroll speed at score 0
    pub base_speed: f32,
    /// Score units per +1 scroll speed
    pub speed_divisor: f32,
    /// Scroll speed cap; obstacles never become reaction-impossible
    pub max_speed: f32,

    /// Spawn gap range in ticks; a fresh gap is drawn after every spawn
    pub spawn_gap_min: u32,
    pub spawn_gap_max: u32,
    /// Obstacles appear up to this far beyond the right screen edge
    pub spawn_slack: f32,
    /// Obstacle width drawn from `[width_min, width_min + width_range)`
    pub obstacle_width_min: f32,
    pub obstacle_width_range: f32,
    /// Obstacle height drawn from `[height_min, height_min + height_range)`
    pub obstacle_height_min: f32,
    pub obstacle_height_range: f32,

    /// Frog hitbox inset on the left and right edges
    pub side_inset: f32,
    /// Frog hitbox inset on the top edge (no inset on the bottom)
    pub top_inset: f32,
    /// Inward pad on the obstacle's left and bottom edges
    pub obstacle_pad: f32,

    /// Day/night timer advance per tick
    pub cycle_increment: f32,
    /// Timer value that flips day/night and resets to zero
    pub cycle_threshold: f32,
    /// Fraction of remaining distance the sky moves toward its target per tick
    pub sky_approach: f32,
    /// Daytime sky color (linear RGB, 0..1)
    pub sky_day: Vec3,
    /// Nighttime sky color
    pub sky_night: Vec3,
    /// Sun/moon leftward drift per tick
    pub sun_step: f32,
    /// Sun/moon wraps once it drifts left of this x
    pub sun_min_x: f32,
    /// After wrapping, the sun reappears this far from the right edge
    pub sun_reset_margin: f32,

    /// Cloud drift speed drawn from `[speed_min, speed_min + speed_range)`
    pub cloud_speed_min: f32,
    pub cloud_speed_range: f32,

    /// Title prompt blink half-period in ticks
    pub blink_period: u32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            gravity: -0.5,
            jump_impulse: 11.5,

            base_speed: 6.0,
            speed_divisor: 200.0,
            max_speed: 18.0,

            spawn_gap_min: 80,
            spawn_gap_max: 140,
            spawn_slack: 50.0,
            obstacle_width_min: 18.0,
            obstacle_width_range: 16.0,
            obstacle_height_min: 34.0,
            obstacle_height_range: 24.0,

            side_inset: 7.0,
            top_inset: 4.0,
            obstacle_pad: 2.0,

            cycle_increment: 0.01,
            cycle_threshold: 100.0,
            sky_approach: 0.01,
            sky_day: Vec3::new(0.7, 0.9, 1.0),
            sky_night: Vec3::new(0.12, 0.16, 0.33),
            sun_step: 0.07,
            sun_min_x: 40.0,
            sun_reset_margin: 80.0,

            cloud_speed_min: 1.0,
            cloud_speed_range: 1.0,

            blink_period: 30,
        }
    }
}

impl Tuning {
    /// Load tuning overrides from a JSON file, falling back to defaults
    ///
    /// Missing fields take their default values, so a file may override just
    /// the knobs it cares about.
    pub fn load_or_default(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            return Self::default();
        };

        match fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(tuning) => {
                    log::info!("Loaded tuning overrides from {}", path.display());
                    tuning
                }
                Err(e) => {
                    log::warn!("Bad tuning file {}: {e}; using defaults", path.display());
                    Self::default()
                }
            },
            Err(e) => {
                log::warn!("Cannot read tuning file {}: {e}; using defaults", path.display());
                Self::default()
            }
        }
    }

    /// Sanity-check invariants that would break the simulation
    ///
    /// Out-of-range values here are programmer (or tuning-file) error, not a
    /// runtime condition the game recovers from.
    pub fn validate(&self) {
        debug_assert!(self.gravity < 0.0, "gravity must pull downward");
        debug_assert!(self.jump_impulse > 0.0);
        debug_assert!(self.base_speed > 0.0 && self.max_speed >= self.base_speed);
        debug_assert!(self.speed_divisor > 0.0);
        debug_assert!(self.spawn_gap_min < self.spawn_gap_max);
        debug_assert!(self.obstacle_width_min > 0.0 && self.obstacle_height_min > 0.0);
        debug_assert!(self.cycle_increment > 0.0 && self.cycle_threshold > 0.0);
        debug_assert!((0.0..1.0).contains(&self.sky_approach));
    }
}

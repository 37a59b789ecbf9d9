//! Frog Run - a Chrome-dino style runner in your terminal
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, obstacles, collisions, game state)
//! - `tuning`: Data-driven game balance
//! - `input`: Raw key events to semantic commands
//! - `render`: Half-block RGB terminal renderer

pub mod input;
pub mod render;
pub mod sim;
pub mod tuning;

pub use tuning::Tuning;

use glam::Vec3;

/// World geometry and fixed rates
pub mod consts {
    /// Simulation ticks per second
    pub const TICK_HZ: u32 = 60;
    /// Fixed simulation timestep in seconds
    pub const TICK_DT: f32 = 1.0 / TICK_HZ as f32;
    /// Maximum catch-up ticks per frame to prevent spiral of death
    pub const MAX_CATCHUP_TICKS: u32 = 4;

    /// World dimensions in world units (y-up, origin at bottom-left)
    pub const WORLD_WIDTH: f32 = 800.0;
    pub const WORLD_HEIGHT: f32 = 400.0;

    /// Top of the ground strip; the frog stands here
    pub const GROUND_Y: f32 = 80.0;

    /// The frog's horizontal position never changes, only its height
    pub const FROG_X: f32 = 100.0;
    pub const FROG_WIDTH: f32 = 44.0;
    pub const FROG_HEIGHT: f32 = 36.0;

    /// Sun/moon altitude (horizontal drift lives in `sim::ambient`)
    pub const SUN_Y: f32 = 340.0;
    /// Sun/moon disc radius
    pub const SUN_RADIUS: f32 = 22.0;

    /// Number of background clouds
    pub const CLOUD_COUNT: usize = 4;
}

/// Move each channel a fixed fraction of the remaining distance toward `target`
///
/// Exponential approach: converges visually but never reaches `target` exactly.
#[inline]
pub fn approach(from: Vec3, target: Vec3, fraction: f32) -> Vec3 {
    from + (target - from) * fraction
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_approach_moves_toward_target() {
        let from = Vec3::ZERO;
        let target = Vec3::ONE;
        let next = approach(from, target, 0.1);
        assert!(next.x > 0.0 && next.x < 1.0);
        assert!((next.x - 0.1).abs() < 1e-6);
    }

    #[test]
    fn test_approach_never_overshoots() {
        let mut color = Vec3::new(0.7, 0.9, 1.0);
        let target = Vec3::new(0.12, 0.16, 0.33);
        for _ in 0..10_000 {
            color = approach(color, target, 0.01);
        }
        assert!((color - target).length() < 1e-3);
        assert_ne!(color, target);
    }
}

//! Game state and core simulation types
//!
//! Everything needed to reproduce a run lives here: the frog, the obstacle
//! queue, the background decorations and the session bookkeeping.

use std::collections::VecDeque;

use glam::{Vec2, Vec3};
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::tuning::Tuning;

use super::{ambient, obstacles};

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for the first Start; only the prompt blink runs
    Title,
    /// Active gameplay
    Running,
    /// Run ended by a collision; world frozen until Restart
    GameOver,
}

/// The player-controlled frog
///
/// Horizontal position is the fixed `FROG_X`; only height varies.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// Height of the frog's bottom edge, never below `GROUND_Y`
    pub y: f32,
    /// Vertical velocity, nonzero only while airborne
    pub vy: f32,
    /// Set on jump, cleared exactly when landing
    pub airborne: bool,
}

impl Player {
    pub fn new() -> Self {
        Self {
            y: GROUND_Y,
            vy: 0.0,
            airborne: false,
        }
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}

/// Visual variant of an obstacle
///
/// Purely cosmetic; the hitbox always uses the full width/height.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObstacleKind {
    /// Single tall cactus with an arm
    Saguaro,
    /// Three stems of decreasing height
    Cluster,
    /// Short, wide cactus with a nub on top
    Barrel,
}

impl ObstacleKind {
    /// Draw a variant uniformly
    pub fn sample(rng: &mut Pcg32) -> Self {
        match rng.random_range(0..3) {
            0 => ObstacleKind::Saguaro,
            1 => ObstacleKind::Cluster,
            _ => ObstacleKind::Barrel,
        }
    }
}

/// A ground obstacle scrolling right to left
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    /// Left edge; decreases every tick
    pub x: f32,
    /// Bottom edge; always ground level
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub kind: ObstacleKind,
}

impl Obstacle {
    #[inline]
    pub fn right_edge(&self) -> f32 {
        self.x + self.width
    }

    #[inline]
    pub fn top_edge(&self) -> f32 {
        self.y + self.height
    }
}

/// A background cloud; cosmetic, wraps when it drifts off the left edge
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cloud {
    pub pos: Vec2,
    pub speed: f32,
}

/// Day/night cycle state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ambient {
    /// Accumulates `cycle_increment` per tick; flips day/night past threshold
    pub cycle_timer: f32,
    pub is_day: bool,
    /// Current sky color, eased toward the active mode's target
    pub sky: Vec3,
    /// Sun or moon position; drifts left and wraps
    pub sun: Vec2,
}

impl Ambient {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            cycle_timer: 0.0,
            is_day: true,
            sky: tuning.sky_day,
            sun: Vec2::new(WORLD_WIDTH - tuning.sun_reset_margin, SUN_Y),
        }
    }
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Seeded RNG; the only source of randomness in the simulation
    pub rng: Pcg32,
    pub phase: GamePhase,
    /// Ticks elapsed in the current session
    pub time_ticks: u64,

    /// One point per survived tick
    pub score: u32,
    /// Best completed-session score this process run; survives resets
    pub best_score: u32,
    /// Current obstacle scroll speed, derived from score
    pub scroll_speed: f32,

    /// Ticks since the last spawn
    pub spawn_countdown: u32,
    /// Randomized gap the countdown must exceed; redrawn after every spawn
    pub next_spawn_gap: u32,

    /// Title prompt blink bookkeeping
    pub blink_timer: u32,
    pub show_prompt: bool,

    pub player: Player,
    /// Ordered front-to-back: ascending x, append at back, cull from front
    pub obstacles: VecDeque<Obstacle>,
    pub clouds: Vec<Cloud>,
    pub ambient: Ambient,

    pub tuning: Tuning,
}

impl GameState {
    /// Create a fresh game in the Title phase
    pub fn new(seed: u64, tuning: Tuning) -> Self {
        tuning.validate();
        let mut state = Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            phase: GamePhase::Title,
            time_ticks: 0,
            score: 0,
            best_score: 0,
            scroll_speed: tuning.base_speed,
            spawn_countdown: 0,
            next_spawn_gap: 0,
            blink_timer: 0,
            show_prompt: true,
            player: Player::new(),
            obstacles: VecDeque::new(),
            clouds: Vec::new(),
            ambient: Ambient::new(&tuning),
            tuning,
        };
        state.reset_world();
        state
    }

    /// Reinitialize the world for a new session
    ///
    /// Preserves the best score and the RNG stream; everything else goes back
    /// to its initial value and the decorations are re-randomized.
    pub fn reset_world(&mut self) {
        self.time_ticks = 0;
        self.score = 0;
        self.scroll_speed = self.tuning.base_speed;
        self.spawn_countdown = 0;
        self.next_spawn_gap = obstacles::draw_gap(&mut self.rng, &self.tuning);
        self.blink_timer = 0;
        self.show_prompt = true;
        self.player = Player::new();
        self.obstacles.clear();
        self.ambient = Ambient::new(&self.tuning);
        self.clouds = (0..CLOUD_COUNT)
            .map(|_| ambient::scatter_cloud(&mut self.rng, &self.tuning))
            .collect();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_initial_values() {
        let state = GameState::new(42, Tuning::default());
        assert_eq!(state.phase, GamePhase::Title);
        assert_eq!(state.score, 0);
        assert_eq!(state.best_score, 0);
        assert_eq!(state.scroll_speed, state.tuning.base_speed);
        assert!(state.obstacles.is_empty());
        assert_eq!(state.clouds.len(), CLOUD_COUNT);
        assert_eq!(state.player.y, GROUND_Y);
        assert!(state.ambient.is_day);
        let gap = state.next_spawn_gap;
        assert!((state.tuning.spawn_gap_min..state.tuning.spawn_gap_max).contains(&gap));
    }

    #[test]
    fn test_reset_preserves_best_score() {
        let mut state = GameState::new(7, Tuning::default());
        state.best_score = 500;
        state.score = 123;
        state.obstacles.push_back(Obstacle {
            x: 400.0,
            y: GROUND_Y,
            width: 20.0,
            height: 40.0,
            kind: ObstacleKind::Saguaro,
        });
        state.reset_world();
        assert_eq!(state.best_score, 500);
        assert_eq!(state.score, 0);
        assert!(state.obstacles.is_empty());
    }

    #[test]
    fn test_state_serializes() {
        let state = GameState::new(1, Tuning::default());
        let json = serde_json::to_string(&state).unwrap();
        let back: GameState = serde_json::from_str(&json).unwrap();
        assert_eq!(back.seed, state.seed);
        assert_eq!(back.clouds, state.clouds);
    }
}

//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only (all rates are per-tick)
//! - Seeded RNG only
//! - Obstacles kept in a front-to-back ordered queue
//! - No rendering or platform dependencies

pub mod ambient;
pub mod collision;
pub mod obstacles;
pub mod physics;
pub mod state;
pub mod tick;

pub use state::{Ambient, Cloud, GamePhase, GameState, Obstacle, ObstacleKind, Player};
pub use tick::{TickInput, scroll_speed_for, tick};

//! Fixed timestep simulation tick
//!
//! One call advances the world by exactly one tick. Update order while
//! running: physics, obstacle manager, collision, scoring/difficulty, ambient
//! cycle. Title and GameOver freeze the world; only the Title prompt blink
//! animates. Inputs are one-shot commands consumed at tick boundaries.

use crate::tuning::Tuning;

use super::state::{GamePhase, GameState};
use super::{ambient, collision, obstacles, physics};

/// Input commands for a single tick (edge-triggered, already debounced)
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Begin a session from the title screen
    pub start: bool,
    /// Jump, accepted only while running and grounded
    pub jump: bool,
    /// Full reset out of game over, straight into a new running session
    pub restart: bool,
}

/// Scroll speed for a given score: a capped linear ramp
#[inline]
pub fn scroll_speed_for(score: u32, tuning: &Tuning) -> f32 {
    (tuning.base_speed + score as f32 / tuning.speed_divisor).min(tuning.max_speed)
}

/// Advance the game state by one tick
pub fn tick(state: &mut GameState, input: &TickInput) {
    match state.phase {
        GamePhase::Title => {
            // Frozen world; just blink the prompt until Start
            state.blink_timer += 1;
            if state.blink_timer.is_multiple_of(state.tuning.blink_period) {
                state.show_prompt = !state.show_prompt;
            }
            if input.start {
                state.phase = GamePhase::Running;
                log::info!("Session started");
            }
            return;
        }
        GamePhase::GameOver => {
            if input.restart {
                state.reset_world();
                state.phase = GamePhase::Running;
                log::info!("Restarting (best score {})", state.best_score);
            }
            return;
        }
        GamePhase::Running => {}
    }

    state.time_ticks += 1;

    // Physics
    if input.jump {
        physics::try_jump(&mut state.player, state.tuning.jump_impulse);
    }
    physics::step(&mut state.player, state.tuning.gravity);

    // Obstacles
    obstacles::step(state);

    // Collision: first touch is terminal and freezes the rest of this tick,
    // so the score on the board is the score of the completed session
    if collision::any_hit(&state.player, &state.obstacles, &state.tuning) {
        state.phase = GamePhase::GameOver;
        if state.score > state.best_score {
            state.best_score = state.score;
            log::info!("Game over at tick {}: new best {}", state.time_ticks, state.best_score);
        } else {
            log::info!("Game over at tick {}: score {}", state.time_ticks, state.score);
        }
        return;
    }

    // Scoring and difficulty
    state.score += 1;
    state.scroll_speed = scroll_speed_for(state.score, &state.tuning);

    // Ambient cycle and decorations
    ambient::step(&mut state.ambient, &state.tuning);
    ambient::drift_clouds(&mut state.clouds, &mut state.rng, &state.tuning);
}

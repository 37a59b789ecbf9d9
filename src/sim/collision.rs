//! Frog vs. obstacle collision
//!
//! Axis-aligned overlap with strict inequalities, against a deliberately
//! shrunk frog hitbox: the sides are inset by `side_inset`, the top by
//! `top_inset`, and the obstacle's left and bottom edges are padded inward by
//! `obstacle_pad`. The insets are asymmetric on purpose; they are a fairness
//! knob, not a bug. Touching edge-to-edge is never a hit.

use std::collections::VecDeque;

use crate::consts::*;
use crate::tuning::Tuning;

use super::state::{Obstacle, Player};

/// Does the frog's inset hitbox overlap this obstacle?
pub fn frog_hits(player: &Player, obstacle: &Obstacle, tuning: &Tuning) -> bool {
    let frog_left = FROG_X + tuning.side_inset;
    let frog_right = FROG_X + FROG_WIDTH - tuning.side_inset;
    let frog_bottom = player.y;
    let frog_top = player.y + FROG_HEIGHT - tuning.top_inset;

    frog_right > obstacle.x + tuning.obstacle_pad
        && frog_left < obstacle.right_edge()
        && frog_top > obstacle.y + tuning.obstacle_pad
        && frog_bottom < obstacle.top_edge()
}

/// Test the frog against every live obstacle
///
/// First touch is terminal, so a plain `any` is enough: multiple simultaneous
/// overlaps all produce the same transition.
pub fn any_hit(player: &Player, obstacles: &VecDeque<Obstacle>, tuning: &Tuning) -> bool {
    obstacles
        .iter()
        .any(|obstacle| frog_hits(player, obstacle, tuning))
}

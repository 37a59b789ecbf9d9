//! Jump and gravity
//!
//! Closed-form per-tick integration: position advances by velocity, then
//! velocity by gravity, until the frog lands. Landing is exact: the frog is
//! clamped to the ground with velocity zeroed in the same tick.

use crate::consts::GROUND_Y;

use super::state::Player;

/// Start a jump if the frog is on the ground
///
/// Returns whether the jump was accepted. Jumps while airborne are ignored;
/// phase gating happens in the tick dispatcher.
pub fn try_jump(player: &mut Player, impulse: f32) -> bool {
    if player.airborne {
        return false;
    }
    player.vy = impulse;
    player.airborne = true;
    true
}

/// Advance one tick of vertical motion
pub fn step(player: &mut Player, gravity: f32) {
    if !player.airborne {
        return;
    }
    player.y += player.vy;
    player.vy += gravity;
    if player.y <= GROUND_Y {
        player.y = GROUND_Y;
        player.vy = 0.0;
        player.airborne = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const GRAVITY: f32 = -0.5;
    const IMPULSE: f32 = 11.5;

    #[test]
    fn test_jump_sets_impulse_and_airborne() {
        let mut player = Player::new();
        assert!(try_jump(&mut player, IMPULSE));
        assert!(player.airborne);
        assert_eq!(player.vy, IMPULSE);
    }

    #[test]
    fn test_jump_rejected_while_airborne() {
        let mut player = Player::new();
        assert!(try_jump(&mut player, IMPULSE));
        step(&mut player, GRAVITY);
        let vy_before = player.vy;
        assert!(!try_jump(&mut player, IMPULSE));
        assert_eq!(player.vy, vy_before);
    }

    #[test]
    fn test_grounded_frog_does_not_move() {
        let mut player = Player::new();
        step(&mut player, GRAVITY);
        assert_eq!(player.y, GROUND_Y);
        assert_eq!(player.vy, 0.0);
    }

    #[test]
    fn test_parabolic_motion_while_airborne() {
        let mut player = Player::new();
        try_jump(&mut player, IMPULSE);
        let mut expected_y = player.y;
        let mut expected_vy = player.vy;
        while player.airborne {
            expected_y += expected_vy;
            expected_vy += GRAVITY;
            step(&mut player, GRAVITY);
            if player.airborne {
                assert_eq!(player.y, expected_y);
                assert_eq!(player.vy, expected_vy);
            }
        }
    }

    proptest! {
        /// Landing is exact for any jump strength: the frog ends at ground
        /// level with zero velocity, never below.
        #[test]
        fn landing_is_exact(impulse in 0.1f32..40.0) {
            let mut player = Player::new();
            try_jump(&mut player, impulse);
            for _ in 0..10_000 {
                step(&mut player, GRAVITY);
                prop_assert!(player.y >= GROUND_Y);
                if !player.airborne {
                    break;
                }
            }
            prop_assert!(!player.airborne);
            prop_assert_eq!(player.y, GROUND_Y);
            prop_assert_eq!(player.vy, 0.0);
        }
    }
}

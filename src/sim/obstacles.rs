//! Obstacle manager: spawn, scroll and cull
//!
//! Obstacles live in a `VecDeque` ordered by ascending x. New obstacles are
//! always born at or beyond the right screen edge and only ever move left, so
//! appending at the back and culling from the front keeps the queue sorted
//! without ever reordering. That discipline is load-bearing; do not insert
//! anywhere else.

use std::collections::VecDeque;

use rand::Rng;
use rand_pcg::Pcg32;

use crate::consts::*;
use crate::tuning::Tuning;

use super::state::{GameState, Obstacle, ObstacleKind};

/// Move every obstacle left by the current scroll speed
pub fn scroll(obstacles: &mut VecDeque<Obstacle>, speed: f32) {
    for obstacle in obstacles.iter_mut() {
        obstacle.x -= speed;
    }
}

/// Remove obstacles that have fully left the screen
///
/// Only the front can be off-screen: the queue is sorted by x.
pub fn cull(obstacles: &mut VecDeque<Obstacle>) {
    while obstacles
        .front()
        .is_some_and(|front| front.right_edge() < 0.0)
    {
        obstacles.pop_front();
    }
}

/// Draw the tick gap before the next spawn
pub fn draw_gap(rng: &mut Pcg32, tuning: &Tuning) -> u32 {
    rng.random_range(tuning.spawn_gap_min..tuning.spawn_gap_max)
}

/// Build one randomized obstacle at/beyond the right screen edge
pub fn spawn(rng: &mut Pcg32, tuning: &Tuning) -> Obstacle {
    Obstacle {
        x: WORLD_WIDTH + rng.random_range(0.0..tuning.spawn_slack),
        y: GROUND_Y,
        width: tuning.obstacle_width_min + rng.random_range(0.0..tuning.obstacle_width_range),
        height: tuning.obstacle_height_min + rng.random_range(0.0..tuning.obstacle_height_range),
        kind: ObstacleKind::sample(rng),
    }
}

/// One tick of the obstacle manager
pub fn step(state: &mut GameState) {
    scroll(&mut state.obstacles, state.scroll_speed);
    cull(&mut state.obstacles);

    state.spawn_countdown += 1;
    if state.spawn_countdown > state.next_spawn_gap {
        let obstacle = spawn(&mut state.rng, &state.tuning);
        state.obstacles.push_back(obstacle);
        state.spawn_countdown = 0;
        state.next_spawn_gap = draw_gap(&mut state.rng, &state.tuning);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::GamePhase;
    use proptest::prelude::*;
    use rand::SeedableRng;

    fn is_sorted(obstacles: &VecDeque<Obstacle>) -> bool {
        obstacles
            .iter()
            .zip(obstacles.iter().skip(1))
            .all(|(a, b)| a.x <= b.x)
    }

    #[test]
    fn test_spawn_within_ranges() {
        let tuning = Tuning::default();
        let mut rng = Pcg32::seed_from_u64(3);
        for _ in 0..200 {
            let obstacle = spawn(&mut rng, &tuning);
            assert!(obstacle.x >= WORLD_WIDTH);
            assert!(obstacle.x < WORLD_WIDTH + tuning.spawn_slack);
            assert_eq!(obstacle.y, GROUND_Y);
            assert!(obstacle.width >= tuning.obstacle_width_min);
            assert!(obstacle.width < tuning.obstacle_width_min + tuning.obstacle_width_range);
            assert!(obstacle.height >= tuning.obstacle_height_min);
            assert!(obstacle.height < tuning.obstacle_height_min + tuning.obstacle_height_range);
        }
    }

    #[test]
    fn test_gap_within_range() {
        let tuning = Tuning::default();
        let mut rng = Pcg32::seed_from_u64(9);
        for _ in 0..200 {
            let gap = draw_gap(&mut rng, &tuning);
            assert!((tuning.spawn_gap_min..tuning.spawn_gap_max).contains(&gap));
        }
    }

    #[test]
    fn test_cull_removes_only_fully_offscreen() {
        let mut obstacles = VecDeque::new();
        for x in [-100.0, -30.0, 5.0, 300.0] {
            obstacles.push_back(Obstacle {
                x,
                y: GROUND_Y,
                width: 20.0,
                height: 40.0,
                kind: ObstacleKind::Barrel,
            });
        }
        cull(&mut obstacles);
        // -30 + 20 = -10 < 0 is gone; 5 + 20 = 25 stays even though the left
        // edge is near the boundary
        assert_eq!(obstacles.len(), 2);
        assert_eq!(obstacles.front().unwrap().x, 5.0);
        assert!(obstacles.iter().all(|o| o.right_edge() >= 0.0));
    }

    #[test]
    fn test_spawn_resets_countdown_and_redraws_gap() {
        let mut state = GameState::new(11, Tuning::default());
        state.phase = GamePhase::Running;
        let first_gap = state.next_spawn_gap;
        // Run until the first spawn happens
        let mut spawned_at = 0;
        for i in 1..=first_gap + 1 {
            step(&mut state);
            if !state.obstacles.is_empty() {
                spawned_at = i;
                break;
            }
        }
        assert_eq!(spawned_at, first_gap + 1);
        assert_eq!(state.spawn_countdown, 0);
        let gap = state.next_spawn_gap;
        assert!((state.tuning.spawn_gap_min..state.tuning.spawn_gap_max).contains(&gap));
    }

    proptest! {
        /// The queue stays sorted by ascending x and never retains an
        /// obstacle whose right edge is left of the screen, across any run
        /// length and seed.
        #[test]
        fn queue_invariants_hold(seed in 0u64..10_000, ticks in 1usize..600) {
            let mut state = GameState::new(seed, Tuning::default());
            state.phase = GamePhase::Running;
            state.scroll_speed = state.tuning.max_speed;
            for _ in 0..ticks {
                step(&mut state);
                prop_assert!(is_sorted(&state.obstacles));
                prop_assert!(state.obstacles.iter().all(|o| o.right_edge() >= 0.0));
            }
        }
    }
}

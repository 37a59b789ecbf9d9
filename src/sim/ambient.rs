//! Day/night cycle and background decorations
//!
//! Pure cosmetics: nothing here feeds back into gameplay. The cycle timer
//! flips the day flag on a roughly regular period, the sky eases toward the
//! active target color, and the sun (or moon) drifts left until it wraps.

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;

use crate::consts::*;
use crate::tuning::Tuning;

use super::state::{Ambient, Cloud};

/// Clouds wrap once they drift left of this x
const CLOUD_OFF_LEFT: f32 = -50.0;
/// Cloud band altitude
const CLOUD_BASE_Y: f32 = 260.0;
const CLOUD_Y_RANGE: f32 = 60.0;
/// Recycled clouds reappear up to this far beyond the right edge
const CLOUD_RESPAWN_SLACK: f32 = 100.0;

/// One tick of the day/night cycle
pub fn step(ambient: &mut Ambient, tuning: &Tuning) {
    ambient.cycle_timer += tuning.cycle_increment;
    if ambient.cycle_timer > tuning.cycle_threshold {
        ambient.is_day = !ambient.is_day;
        ambient.cycle_timer = 0.0;
    }

    let target = if ambient.is_day {
        tuning.sky_day
    } else {
        tuning.sky_night
    };
    ambient.sky = crate::approach(ambient.sky, target, tuning.sky_approach);

    ambient.sun.x -= tuning.sun_step;
    if ambient.sun.x < tuning.sun_min_x {
        ambient.sun.x = WORLD_WIDTH - tuning.sun_reset_margin;
    }
}

/// Place a cloud anywhere across the sky (initial scatter at reset)
pub fn scatter_cloud(rng: &mut Pcg32, tuning: &Tuning) -> Cloud {
    Cloud {
        pos: Vec2::new(
            rng.random_range(0.0..WORLD_WIDTH),
            CLOUD_BASE_Y + rng.random_range(0.0..CLOUD_Y_RANGE),
        ),
        speed: tuning.cloud_speed_min + rng.random_range(0.0..tuning.cloud_speed_range),
    }
}

/// Drift all clouds left, recycling any that leave the screen
pub fn drift_clouds(clouds: &mut [Cloud], rng: &mut Pcg32, tuning: &Tuning) {
    for cloud in clouds {
        cloud.pos.x -= cloud.speed;
        if cloud.pos.x < CLOUD_OFF_LEFT {
            cloud.pos.x = WORLD_WIDTH + rng.random_range(0.0..CLOUD_RESPAWN_SLACK);
            cloud.pos.y = CLOUD_BASE_Y + rng.random_range(0.0..CLOUD_Y_RANGE);
            cloud.speed = tuning.cloud_speed_min + rng.random_range(0.0..tuning.cloud_speed_range);
        }
    }
}

//! Scene composition: world state to pixels
//!
//! The world is 800x400 units, y-up with the origin at the bottom-left; the
//! buffer is y-down. Everything here maps through `world_rect`, so the scene
//! scales with the terminal size.

use crate::consts::*;
use crate::sim::{GameState, Obstacle, ObstacleKind};

use super::{PixelBuf, Rgb};

const FROG_BODY: Rgb = Rgb(56, 166, 51);
const FROG_BELLY: Rgb = Rgb(224, 255, 173);
const FROG_LEG: Rgb = Rgb(36, 97, 33);
const FROG_ARM: Rgb = Rgb(48, 122, 38);
const FROG_MOUTH: Rgb = Rgb(41, 31, 31);
const EYE_WHITE: Rgb = Rgb(255, 255, 255);
const EYE_PUPIL: Rgb = Rgb(0, 0, 0);

const SAGUARO_GREEN: Rgb = Rgb(46, 153, 82);
const CLUSTER_GREEN: Rgb = Rgb(33, 128, 59);
const BARREL_GREEN: Rgb = Rgb(56, 179, 56);

const SAND: Rgb = Rgb(217, 189, 128);
const DIRT_CLUMP: Rgb = Rgb(179, 153, 87);
const CLOUD_WHITE: Rgb = Rgb(255, 255, 255);
const SUN_YELLOW: Rgb = Rgb(255, 255, 153);
const MOON_SILVER: Rgb = Rgb(230, 230, 255);

/// Draw one frame of the world into the buffer
pub fn draw(state: &GameState, buf: &mut PixelBuf) {
    buf.fill(Rgb::from_vec3(state.ambient.sky));

    for cloud in &state.clouds {
        draw_cloud(buf, cloud.pos.x, cloud.pos.y);
    }
    draw_sun(buf, state);
    draw_ground(buf, state);
    for obstacle in &state.obstacles {
        draw_obstacle(buf, obstacle);
    }
    draw_frog(buf, state.player.y);
}

/// Map a world-space rectangle to buffer pixels (x, y, w, h)
fn world_rect(buf: &PixelBuf, x: f32, y: f32, w: f32, h: f32) -> (i32, i32, i32, i32) {
    let sx = buf.width() as f32 / WORLD_WIDTH;
    let sy = buf.height() as f32 / WORLD_HEIGHT;
    let x0 = (x * sx).round() as i32;
    let x1 = ((x + w) * sx).round() as i32;
    // y flips: world bottom edge becomes the pixel row below the rect
    let y0 = (buf.height() as f32 - (y + h) * sy).round() as i32;
    let y1 = (buf.height() as f32 - y * sy).round() as i32;
    (x0, y0, (x1 - x0).max(1), (y1 - y0).max(1))
}

fn fill_world(buf: &mut PixelBuf, x: f32, y: f32, w: f32, h: f32, color: Rgb) {
    let (px, py, pw, ph) = world_rect(buf, x, y, w, h);
    buf.fill_rect(px, py, pw, ph, color);
}

fn draw_cloud(buf: &mut PixelBuf, x: f32, y: f32) {
    fill_world(buf, x - 4.0, y, 24.0, 14.0, CLOUD_WHITE);
    fill_world(buf, x, y + 6.0, 30.0, 14.0, CLOUD_WHITE);
}

fn draw_sun(buf: &mut PixelBuf, state: &GameState) {
    let color = if state.ambient.is_day {
        SUN_YELLOW
    } else {
        MOON_SILVER
    };
    let sx = buf.width() as f32 / WORLD_WIDTH;
    let sy = buf.height() as f32 / WORLD_HEIGHT;
    let cx = state.ambient.sun.x * sx;
    let cy = buf.height() as f32 - state.ambient.sun.y * sy;
    let rx = (SUN_RADIUS * sx).max(1.0);
    let ry = (SUN_RADIUS * sy).max(1.0);

    for py in (cy - ry) as i32..=(cy + ry) as i32 {
        for px in (cx - rx) as i32..=(cx + rx) as i32 {
            let dx = (px as f32 - cx) / rx;
            let dy = (py as f32 - cy) / ry;
            if dx * dx + dy * dy <= 1.0 {
                buf.set(px, py, color);
            }
        }
    }
}

fn draw_ground(buf: &mut PixelBuf, state: &GameState) {
    fill_world(buf, 0.0, GROUND_Y - 12.0, WORLD_WIDTH, 12.0, SAND);

    // Dirt clumps drift with the scroll so the ground reads as moving
    let drift = state.score as f32 * state.scroll_speed / 5.0;
    for i in 0..10 {
        let offset = (drift + 80.0 * i as f32) % WORLD_WIDTH;
        fill_world(buf, WORLD_WIDTH - offset, GROUND_Y - 11.0, 10.0, 3.0, DIRT_CLUMP);
    }
}

fn draw_obstacle(buf: &mut PixelBuf, obstacle: &Obstacle) {
    let (x, y, w, h) = (obstacle.x, obstacle.y, obstacle.width, obstacle.height);
    match obstacle.kind {
        ObstacleKind::Saguaro => {
            fill_world(buf, x, y, w, h, SAGUARO_GREEN);
            fill_world(buf, x - 4.0, y + h * 0.6, 6.0, h * 0.2, SAGUARO_GREEN);
        }
        ObstacleKind::Cluster => {
            for i in 0..3 {
                let xoff = i as f32 * 10.0;
                fill_world(buf, x + xoff, y, 8.0, h - i as f32 * 7.0, CLUSTER_GREEN);
            }
        }
        ObstacleKind::Barrel => {
            fill_world(buf, x, y, w, h - 10.0, BARREL_GREEN);
            fill_world(buf, x + 3.0, y + h - 10.0, 5.0, 10.0, BARREL_GREEN);
        }
    }
}

/// Pixel-art frog at the fixed column, bottom edge at `frog_y`
fn draw_frog(buf: &mut PixelBuf, frog_y: f32) {
    let (x, y) = (FROG_X, frog_y);
    let (w, h) = (FROG_WIDTH, FROG_HEIGHT);

    fill_world(buf, x + 8.0, y + 8.0, w - 16.0, h - 16.0, FROG_BODY);
    fill_world(buf, x + 15.0, y + 8.0, w - 30.0, h - 26.0, FROG_BELLY);

    // Eye sockets sit on top of the body
    fill_world(buf, x + 3.0, y + h - 8.0, 9.0, 6.0, FROG_BODY);
    fill_world(buf, x + w - 12.0, y + h - 8.0, 9.0, 6.0, FROG_BODY);
    fill_world(buf, x + 6.0, y + h - 6.0, 4.0, 3.0, EYE_WHITE);
    fill_world(buf, x + w - 10.0, y + h - 6.0, 4.0, 3.0, EYE_WHITE);
    fill_world(buf, x + 8.0, y + h - 5.0, 1.0, 2.0, EYE_PUPIL);
    fill_world(buf, x + w - 9.0, y + h - 5.0, 1.0, 2.0, EYE_PUPIL);

    fill_world(buf, x + 16.0, y + 14.0, w - 32.0, 1.0, FROG_MOUTH);

    fill_world(buf, x + 5.0, y, 7.0, 9.0, FROG_LEG);
    fill_world(buf, x + w - 12.0, y, 7.0, 9.0, FROG_LEG);
    fill_world(buf, x, y + 18.0, 8.0, 4.0, FROG_ARM);
    fill_world(buf, x + w - 8.0, y + 18.0, 8.0, 4.0, FROG_ARM);
}

//! Half-block RGB terminal renderer
//!
//! Each terminal cell shows two vertically stacked pixels via the
//! upper-half-block glyph, so the scene gets square-ish pixels at twice the
//! row resolution. `scene` composes the world into the buffer; score and
//! prompts are overlaid afterwards as plain terminal text.
//!
//! This layer only reads `GameState`; it never mutates the simulation.

pub mod scene;

use std::io::{self, Write};

use crossterm::{
    cursor, queue,
    style::{self, Color},
};
use glam::Vec3;

use crate::sim::{GamePhase, GameState};

/// An 8-bit RGB pixel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Quantize a linear 0..1 color (e.g. the sky) to 8-bit channels
    pub fn from_vec3(v: Vec3) -> Self {
        let q = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        Rgb(q(v.x), q(v.y), q(v.z))
    }
}

impl From<Rgb> for Color {
    fn from(c: Rgb) -> Self {
        Color::Rgb {
            r: c.0,
            g: c.1,
            b: c.2,
        }
    }
}

/// Off-screen pixel buffer; height is terminal rows times two
pub struct PixelBuf {
    width: usize,
    height: usize,
    px: Vec<Rgb>,
}

impl PixelBuf {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            px: vec![Rgb(0, 0, 0); width * height],
        }
    }

    pub fn resize(&mut self, width: usize, height: usize) {
        self.width = width;
        self.height = height;
        self.px.resize(width * height, Rgb(0, 0, 0));
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    fn get(&self, x: usize, y: usize) -> Rgb {
        self.px[y * self.width + x]
    }

    /// Set a pixel, silently clipping out-of-bounds writes
    #[inline]
    pub fn set(&mut self, x: i32, y: i32, color: Rgb) {
        if x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height {
            self.px[y as usize * self.width + x as usize] = color;
        }
    }

    pub fn fill(&mut self, color: Rgb) {
        self.px.fill(color);
    }

    pub fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: Rgb) {
        for dy in 0..h {
            for dx in 0..w {
                self.set(x + dx, y + dy, color);
            }
        }
    }

    /// Stream the buffer to the terminal, two pixels per cell
    ///
    /// Color escape sequences are only emitted on change; queued output is
    /// flushed by the caller.
    pub fn present(&self, out: &mut impl Write) -> io::Result<()> {
        let rows = self.height / 2;
        let mut last_fg: Option<Rgb> = None;
        let mut last_bg: Option<Rgb> = None;

        for row in 0..rows {
            queue!(out, cursor::MoveTo(0, row as u16))?;
            for col in 0..self.width {
                let top = self.get(col, row * 2);
                let bottom = self.get(col, row * 2 + 1);
                if last_fg != Some(top) {
                    queue!(out, style::SetForegroundColor(top.into()))?;
                    last_fg = Some(top);
                }
                if last_bg != Some(bottom) {
                    queue!(out, style::SetBackgroundColor(bottom.into()))?;
                    last_bg = Some(bottom);
                }
                queue!(out, style::Print('\u{2580}'))?; // ▀
            }
        }
        queue!(out, style::ResetColor)
    }
}

/// Overlay the score line and phase prompts as plain text
pub fn draw_hud(out: &mut impl Write, state: &GameState, cols: u16, rows: u16) -> io::Result<()> {
    let sky: Color = Rgb::from_vec3(state.ambient.sky).into();
    let ink = Color::Rgb {
        r: 18,
        g: 20,
        b: 26,
    };

    let hud = format!(" SCORE {:06}   BEST {:06} ", state.score, state.best_score);
    queue!(
        out,
        cursor::MoveTo(1, 0),
        style::SetForegroundColor(ink),
        style::SetBackgroundColor(sky),
        style::Print(hud)
    )?;

    let mid = rows / 2;
    match state.phase {
        GamePhase::Title if state.show_prompt => {
            center(out, cols, mid.saturating_sub(2), "PRESS SPACE TO START", ink, sky)?;
        }
        GamePhase::GameOver => {
            let red = Color::Rgb {
                r: 204,
                g: 26,
                b: 26,
            };
            center(out, cols, mid.saturating_sub(1), "GAME OVER", red, sky)?;
            center(out, cols, mid + 1, "PRESS R TO RESTART", ink, sky)?;
        }
        _ => {}
    }
    queue!(out, style::ResetColor)
}

fn center(
    out: &mut impl Write,
    cols: u16,
    row: u16,
    text: &str,
    fg: Color,
    bg: Color,
) -> io::Result<()> {
    let col = cols.saturating_sub(text.len() as u16) / 2;
    queue!(
        out,
        cursor::MoveTo(col, row),
        style::SetForegroundColor(fg),
        style::SetBackgroundColor(bg),
        style::Print(text)
    )
}

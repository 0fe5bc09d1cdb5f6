use macroquad::prelude::Color;

use crate::modules::rng::{random_color, random_range};
use crate::modules::surface::Surface;

/// One moving circle on the canvas.
///
/// Velocity magnitude never changes after spawn; only the signs flip when
/// an edge is hit. `size` is the radius and is fixed for the ball's life.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ball {
    pub x: f32,
    pub y: f32,
    pub vel_x: f32,
    pub vel_y: f32,
    pub color: Color,
    pub size: f32,
}

impl Ball {
    /// Spawn a ball at a random spot with the whole circle on-canvas,
    /// so the first frame never has to draw past an edge.
    pub fn random(width: f32, height: f32) -> Self {
        let size = random_range(10, 20) as f32;
        Ball {
            x: random_range(size as i32, (width - size) as i32) as f32,
            y: random_range(size as i32, (height - size) as i32) as f32,
            vel_x: random_range(-7, 7) as f32,
            vel_y: random_range(-7, 7) as f32,
            color: random_color(),
            size,
        }
    }

    /// Draw as a single filled circle in the current color.
    pub fn draw(&self, surface: &mut impl Surface) {
        surface.fill_circle(self.x, self.y, self.size, self.color);
    }

    /// Move one step, reflecting off the canvas edges first.
    ///
    /// The four edge checks are independent, in fixed order: right, left,
    /// bottom, top. A ball lodged in a corner flips both axes in the same
    /// step. The position update then applies the already-flipped
    /// velocity.
    pub fn update(&mut self, width: f32, height: f32) {
        if self.x + self.size >= width {
            self.vel_x = -self.vel_x;
        }
        if self.x - self.size <= 0.0 {
            self.vel_x = -self.vel_x;
        }
        if self.y + self.size >= height {
            self.vel_y = -self.vel_y;
        }
        if self.y - self.size <= 0.0 {
            self.vel_y = -self.vel_y;
        }
        self.x += self.vel_x;
        self.y += self.vel_y;
    }
}

/// Check ball `i` against every other ball in the collection.
///
/// Overlapping pairs (center distance strictly below the radius sum) are
/// both repainted with the same fresh random color. No velocity change
/// and no separation; when ball `i` overlaps several others, each pairing
/// overwrites its color in turn and the last index wins. Self-comparison
/// is skipped by index.
pub fn collision_detect(balls: &mut [Ball], i: usize) {
    for j in 0..balls.len() {
        if i == j {
            continue;
        }
        let dx = balls[i].x - balls[j].x;
        let dy = balls[i].y - balls[j].y;
        let distance = (dx * dx + dy * dy).sqrt();
        if distance < balls[i].size + balls[j].size {
            let color = random_color();
            balls[i].color = color;
            balls[j].color = color;
        }
    }
}

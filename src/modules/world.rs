use macroquad::prelude::Color;

use crate::modules::ball::{Ball, collision_detect};
use crate::modules::surface::Surface;

/// Maximum number of balls kept on screen. The collection only grows
/// until it hits this, then stays put for the rest of the run.
pub const POPULATION_CAP: usize = 25;

/// Alpha of the black wash painted over the previous frame. Lower values
/// leave longer motion trails.
pub const TRAIL_ALPHA: f32 = 0.25;

/// Owns every ball plus the canvas bounds they bounce inside.
///
/// Constructed once at startup; the frame loop drives it until the
/// window closes. Nothing else ever holds a reference into the
/// collection.
pub struct World {
    pub width: f32,
    pub height: f32,
    pub balls: Vec<Ball>,
}

impl World {
    pub fn new(width: f32, height: f32) -> Self {
        World {
            width,
            height,
            balls: Vec::with_capacity(POPULATION_CAP),
        }
    }

    /// Top up the population with random balls until the cap is reached.
    pub fn fill_population(&mut self) {
        while self.balls.len() < POPULATION_CAP {
            self.balls.push(Ball::random(self.width, self.height));
        }
    }

    /// Run one animation frame.
    ///
    /// A translucent wash over last frame's pixels, then the population
    /// top-up, then draw/update/collide per ball in collection order.
    /// The interleaving matters: each ball is drawn where it was, moved,
    /// and only then checked against the rest.
    pub fn frame_step(&mut self, surface: &mut impl Surface) {
        surface.fill_rect(
            0.0,
            0.0,
            self.width,
            self.height,
            Color::new(0.0, 0.0, 0.0, TRAIL_ALPHA),
        );
        self.fill_population();
        for i in 0..self.balls.len() {
            self.balls[i].draw(surface);
            self.balls[i].update(self.width, self.height);
            collision_detect(&mut self.balls, i);
        }
    }
}

use macroquad::prelude::*;

/// The two drawing calls the simulation issues each frame.
///
/// The real screen forwards straight to macroquad; tests substitute a
/// recorder so the command stream can be asserted without a window.
pub trait Surface {
    /// Filled circle centered at `(x, y)`.
    fn fill_circle(&mut self, x: f32, y: f32, radius: f32, color: Color);
    /// Filled axis-aligned rectangle; `color` may be translucent.
    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color);
}

/// Production surface backed by the macroquad frame buffer.
pub struct Screen;

impl Surface for Screen {
    fn fill_circle(&mut self, x: f32, y: f32, radius: f32, color: Color) {
        draw_circle(x, y, radius, color);
    }

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color) {
        draw_rectangle(x, y, w, h, color);
    }
}

#[cfg(test)]
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DrawCommand {
    Circle { x: f32, y: f32, radius: f32, color: Color },
    Rect { x: f32, y: f32, w: f32, h: f32, color: Color },
}

/// Test surface that remembers every call in order.
#[cfg(test)]
#[derive(Default)]
pub struct Recorder {
    pub commands: Vec<DrawCommand>,
}

#[cfg(test)]
impl Surface for Recorder {
    fn fill_circle(&mut self, x: f32, y: f32, radius: f32, color: Color) {
        self.commands.push(DrawCommand::Circle { x, y, radius, color });
    }

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color) {
        self.commands.push(DrawCommand::Rect { x, y, w, h, color });
    }
}

/*
Program Details: Bouncing balls canvas demo
A fixed canvas fills with 25 balls that drift at constant velocity,
bounce off the edges, and swap to a shared random color whenever two
of them overlap. A translucent black wash each frame fades old pixels
into motion trails.
*/

use macroquad::miniquad::date;
use macroquad::prelude::*;
use macroquad::rand;

use bouncing_balls::modules::surface::Screen;
use bouncing_balls::modules::world::World;

/// Set up window settings before the app runs
fn window_conf() -> Conf {
    Conf {
        window_title: "bouncing-balls".to_string(),
        window_width: 800,
        window_height: 600,
        fullscreen: false,
        high_dpi: true,
        // The canvas is sized once at startup and never follows resizes.
        window_resizable: false,
        sample_count: 4, // MSAA
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    // Wall-clock seed: runs are deliberately non-reproducible.
    let seed = date::now() as u64;
    rand::srand(seed);

    // Viewport is measured once; these bounds hold for the whole run.
    let width = screen_width();
    let height = screen_height();
    info!("canvas {}x{}, seed {}", width, height, seed);

    let mut world = World::new(width, height);
    let mut screen = Screen;

    loop {
        world.frame_step(&mut screen);
        next_frame().await
    }
}

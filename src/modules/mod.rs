pub mod ball;
pub mod rng;
pub mod surface;
pub mod world;

pub mod board;
pub mod game_loop;
pub mod grid;
pub mod physics;
pub mod rng;
pub mod scene;
pub mod time;

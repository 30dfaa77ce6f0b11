pub mod game;
pub mod object;
pub mod types;

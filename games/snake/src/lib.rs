use wasm_bindgen::prelude::*;

mod fruit;
mod game;
mod snake;
mod states;

use game::SnakeGame;

arcade_web::export_game!(SnakeGame, "snake");

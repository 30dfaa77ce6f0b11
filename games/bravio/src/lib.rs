use wasm_bindgen::prelude::*;

mod game;
mod platform;
mod player;
mod states;

use game::BravioGame;

arcade_web::export_game!(BravioGame, "bravio");

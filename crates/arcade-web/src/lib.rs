pub mod runner;

pub use arcade_engine;
pub use runner::GameRunner;

/// Generate all `#[wasm_bindgen]` exports for a game.
///
/// This macro generates:
/// - `thread_local!` storage for the GameRunner
/// - `with_runner()` helper function
/// - All wasm-bindgen exports (game_init, game_frame, key handlers, phase controls, data accessors)
///
/// # Usage
///
/// ```ignore
/// use wasm_bindgen::prelude::*;
///
/// mod game;
/// use game::SnakeGame;
///
/// arcade_web::export_game!(SnakeGame, "snake");
/// ```
///
/// # Arguments
///
/// - `$game_type`: The game struct type that implements `arcade_engine::Game` and has a `new()` constructor
/// - `$game_name`: A string literal used in the initialization log message
///
/// The calling crate must depend on `wasm-bindgen`, `log`, `console_log` and
/// `console_error_panic_hook`.
#[macro_export]
macro_rules! export_game {
    ($game_type:ty, $game_name:literal) => {
        use std::cell::RefCell;
        use $crate::arcade_engine::{InputEvent, Key};

        thread_local! {
            static RUNNER: RefCell<Option<$crate::GameRunner<$game_type>>> = RefCell::new(None);
        }

        fn with_runner<R>(f: impl FnOnce(&mut $crate::GameRunner<$game_type>) -> R) -> R {
            RUNNER.with(|cell| {
                let mut borrow = cell.borrow_mut();
                let runner = borrow.as_mut().expect("Game not initialized. Call game_init() first.");
                f(runner)
            })
        }

        #[wasm_bindgen]
        pub fn game_init() {
            console_error_panic_hook::set_once();
            let _ = console_log::init_with_level(log::Level::Info);

            let game = <$game_type>::new();
            let runner = $crate::GameRunner::new(game);

            RUNNER.with(|cell| {
                *cell.borrow_mut() = Some(runner);
            });

            with_runner(|r| r.init());
            log::info!("{}: initialized", $game_name);
        }

        /// Call from `requestAnimationFrame` with its timestamp.
        /// Returns true when a tick ran and the buffers should be redrawn.
        #[wasm_bindgen]
        pub fn game_frame(now_ms: f64) -> bool {
            with_runner(|r| r.frame(now_ms))
        }

        /// Takes a DOM `KeyboardEvent.key` value. Unknown names are ignored.
        #[wasm_bindgen]
        pub fn game_key_down(key: &str) {
            if let Some(key) = Key::from_name(key) {
                with_runner(|r| r.push_input(InputEvent::KeyDown { key }));
            }
        }

        #[wasm_bindgen]
        pub fn game_key_up(key: &str) {
            if let Some(key) = Key::from_name(key) {
                with_runner(|r| r.push_input(InputEvent::KeyUp { key }));
            }
        }

        #[wasm_bindgen]
        pub fn game_custom_event(kind: u32, a: f32, b: f32, c: f32) {
            with_runner(|r| r.push_input(InputEvent::Custom { kind, a, b, c }));
        }

        #[wasm_bindgen]
        pub fn game_restart() {
            with_runner(|r| r.restart());
        }

        #[wasm_bindgen]
        pub fn game_toggle_pause() {
            with_runner(|r| r.toggle_pause());
        }

        #[wasm_bindgen]
        pub fn game_start() {
            with_runner(|r| r.start());
        }

        #[wasm_bindgen]
        pub fn game_load_manifest(json: &str) {
            with_runner(|r| r.load_manifest(json));
        }

        // ---- Data accessors ----

        #[wasm_bindgen]
        pub fn get_header_ptr() -> *const f32 {
            with_runner(|r| r.header_ptr())
        }

        #[wasm_bindgen]
        pub fn get_commands_ptr() -> *const f32 {
            with_runner(|r| r.commands_ptr())
        }

        #[wasm_bindgen]
        pub fn get_command_count() -> u32 {
            with_runner(|r| r.command_count())
        }

        #[wasm_bindgen]
        pub fn get_game_events_ptr() -> *const f32 {
            with_runner(|r| r.game_events_ptr())
        }

        #[wasm_bindgen]
        pub fn get_game_events_len() -> u32 {
            with_runner(|r| r.game_events_len())
        }

        #[wasm_bindgen]
        pub fn get_world_width() -> f32 {
            with_runner(|r| r.world_width())
        }

        #[wasm_bindgen]
        pub fn get_world_height() -> f32 {
            with_runner(|r| r.world_height())
        }

        #[wasm_bindgen]
        pub fn get_hud_offset() -> f32 {
            with_runner(|r| r.hud_offset())
        }

        // ---- HUD accessors ----

        #[wasm_bindgen]
        pub fn get_fps() -> u32 {
            with_runner(|r| r.fps())
        }

        #[wasm_bindgen]
        pub fn get_points() -> u32 {
            with_runner(|r| r.points())
        }

        #[wasm_bindgen]
        pub fn get_phase() -> u32 {
            with_runner(|r| r.phase().code())
        }

        // ---- Capacity accessors ----

        #[wasm_bindgen]
        pub fn get_max_commands() -> u32 {
            with_runner(|r| r.max_commands())
        }

        #[wasm_bindgen]
        pub fn get_max_events() -> u32 {
            with_runner(|r| r.max_events())
        }

        #[wasm_bindgen]
        pub fn get_buffer_total_floats() -> u32 {
            with_runner(|r| r.buffer_total_floats())
        }
    };
}

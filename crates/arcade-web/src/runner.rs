use arcade_engine::{
    bridge::protocol::write_header, FrameHeader, Game, GameLoop, GamePhase, HudState, InputEvent,
    ProtocolLayout, HEADER_FLOATS,
};

/// Generic game runner that wires the engine loop to the shared buffer.
///
/// Each concrete game (e.g., `snake`) creates a `thread_local!` GameRunner
/// and exports free functions via `#[wasm_bindgen]`, because wasm-bindgen
/// cannot export generic structs directly.
pub struct GameRunner<G: Game> {
    game_loop: GameLoop<G>,
    layout: ProtocolLayout,
    header: [f32; HEADER_FLOATS],
}

impl<G: Game> GameRunner<G> {
    pub fn new(game: G) -> Self {
        let game_loop = GameLoop::new(game);
        let layout = ProtocolLayout::from_config(game_loop.config());
        Self {
            game_loop,
            layout,
            header: [0.0; HEADER_FLOATS],
        }
    }

    /// Initialize the game. Call once after construction.
    pub fn init(&mut self) {
        self.game_loop.init();
        self.layout = ProtocolLayout::from_config(self.game_loop.config());
        self.refresh_header();
    }

    pub fn push_input(&mut self, event: InputEvent) {
        self.game_loop.push_input(event);
        self.refresh_header();
    }

    /// Animation callback. Returns true if a tick ran and the buffers changed.
    pub fn frame(&mut self, now_ms: f64) -> bool {
        let ticked = self.game_loop.frame(now_ms);
        if ticked {
            self.refresh_header();
        }
        ticked
    }

    pub fn restart(&mut self) {
        self.game_loop.restart();
        self.refresh_header();
    }

    pub fn toggle_pause(&mut self) {
        self.game_loop.toggle_pause();
        self.refresh_header();
    }

    pub fn start(&mut self) {
        self.game_loop.start();
        self.refresh_header();
    }

    /// Hand a JSON manifest to the game. Parse errors and manifests missing
    /// a sheet the game needs are logged; the previous sprites stay in place.
    pub fn load_manifest(&mut self, json: &str) {
        if let Err(e) = self.game_loop.load_manifest(json) {
            log::error!("manifest rejected: {}", e);
        }
    }

    fn refresh_header(&mut self) {
        let phase = self.game_loop.context().phase();
        let frame = FrameHeader {
            frame_counter: self.game_loop.frame_counter(),
            hud: HudState {
                phase,
                overlay: phase == GamePhase::GameOver,
                ..self.game_loop.hud()
            },
            command_count: self.game_loop.surface().commands.len(),
            event_count: self.game_events_len() as usize,
        };
        write_header(&mut self.header, &self.layout, self.game_loop.config(), &frame);
    }

    pub fn game(&self) -> &G {
        self.game_loop.game()
    }

    // ---- Pointer accessors for shared buffer reads ----

    pub fn header_ptr(&self) -> *const f32 {
        self.header.as_ptr()
    }

    pub fn commands_ptr(&self) -> *const f32 {
        self.game_loop.surface().commands_ptr()
    }

    pub fn command_count(&self) -> u32 {
        self.game_loop.surface().command_count()
    }

    pub fn game_events_ptr(&self) -> *const f32 {
        self.game_loop.context().events.as_ptr() as *const f32
    }

    /// Events beyond the buffer capacity are not visible to the host.
    pub fn game_events_len(&self) -> u32 {
        self.game_loop.context().events.len().min(self.layout.max_events) as u32
    }

    pub fn world_width(&self) -> f32 {
        self.game_loop.config().world_width
    }

    pub fn world_height(&self) -> f32 {
        self.game_loop.config().world_height
    }

    pub fn hud_offset(&self) -> f32 {
        self.game_loop.config().hud_offset
    }

    // ---- HUD accessors ----

    pub fn fps(&self) -> u32 {
        self.game_loop.hud().fps
    }

    pub fn points(&self) -> u32 {
        self.game_loop.hud().points
    }

    pub fn phase(&self) -> GamePhase {
        self.game_loop.context().phase()
    }

    // ---- Capacity accessors (read by TypeScript via wasm_bindgen exports) ----

    pub fn max_commands(&self) -> u32 {
        self.layout.max_commands as u32
    }

    pub fn max_events(&self) -> u32 {
        self.layout.max_events as u32
    }

    pub fn buffer_total_floats(&self) -> u32 {
        self.layout.buffer_total_floats as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arcade_engine::bridge::protocol::{
        HEADER_COMMAND_COUNT, HEADER_EVENT_COUNT, HEADER_FRAME_COUNTER, HEADER_PHASE,
    };
    use arcade_engine::{Color, Dimensions, EngineContext, GameConfig, GameEvent, RenderBuffer};
    use glam::Vec2;

    struct Square;

    impl Game for Square {
        fn config(&self) -> GameConfig {
            GameConfig {
                fps: 50.0,
                initial_phase: GamePhase::Running,
                ..GameConfig::default()
            }
        }

        fn init(&mut self, _ctx: &mut EngineContext) {}

        fn update(&mut self, _ctx: &mut EngineContext) {}

        fn draw(&mut self, _ctx: &EngineContext, surface: &mut RenderBuffer) {
            surface.fill_rect(Vec2::ZERO, Dimensions::square(10.0), Color::Black);
        }

        fn restart(&mut self, _ctx: &mut EngineContext) {}
    }

    /// Emits more events per tick than the buffer holds.
    struct Chatty;

    impl Game for Chatty {
        fn config(&self) -> GameConfig {
            GameConfig {
                fps: 50.0,
                max_events: 2,
                initial_phase: GamePhase::Running,
                ..GameConfig::default()
            }
        }

        fn init(&mut self, _ctx: &mut EngineContext) {}

        fn update(&mut self, ctx: &mut EngineContext) {
            for i in 0..5 {
                ctx.emit_event(GameEvent::new(1, i as f32, 0.0, 0.0));
            }
        }

        fn draw(&mut self, _ctx: &EngineContext, _surface: &mut RenderBuffer) {}

        fn restart(&mut self, _ctx: &mut EngineContext) {}
    }

    fn header<G: Game>(runner: &GameRunner<G>) -> &[f32] {
        &runner.header
    }

    #[test]
    fn header_follows_frames() {
        let mut runner = GameRunner::new(Square);
        runner.init();
        assert!(!runner.frame(0.0));
        assert!(runner.frame(20.0));

        assert_eq!(header(&runner)[HEADER_FRAME_COUNTER], 1.0);
        assert_eq!(header(&runner)[HEADER_COMMAND_COUNT], 1.0);
        assert_eq!(runner.command_count(), 1);
        assert_eq!(runner.max_commands(), 512);
    }

    #[test]
    fn pause_is_visible_without_a_frame() {
        let mut runner = GameRunner::new(Square);
        runner.init();
        runner.toggle_pause();
        assert_eq!(header(&runner)[HEADER_PHASE], 2.0);
        assert_eq!(runner.phase(), GamePhase::Paused);
    }

    #[test]
    fn bad_manifest_is_only_logged() {
        let mut runner = GameRunner::new(Square);
        runner.init();
        runner.load_manifest("{");
        runner.frame(0.0);
        assert!(runner.frame(20.0));
    }

    #[test]
    fn event_count_is_capped_by_the_buffer() {
        let mut runner = GameRunner::new(Chatty);
        runner.init();
        runner.frame(0.0);
        assert!(runner.frame(20.0));

        assert_eq!(runner.game_events_len(), 2);
        assert_eq!(header(&runner)[HEADER_EVENT_COUNT], 2.0);
    }
}

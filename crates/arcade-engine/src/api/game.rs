use crate::api::types::{EntityId, GameEvent, GamePhase};
use crate::assets::manifest::{AssetManifest, ManifestError};
use crate::components::entity::Dimensions;
use crate::core::board::Board;
use crate::input::keys::{InputState, Key};
use crate::renderer::command::RenderBuffer;

/// Configuration for the engine, provided by the game.
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Target simulation rate in ticks per second (default: 60).
    pub fps: f64,
    /// Board width in world units.
    pub world_width: f32,
    /// Board height in world units, not counting the HUD strip.
    pub world_height: f32,
    /// Height of the HUD strip above the board.
    pub hud_offset: f32,
    /// Keys tracked by the input state; everything else is ignored.
    pub accepted_keys: Vec<Key>,
    /// Phase the game is in right after init.
    pub initial_phase: GamePhase,
    /// Maximum number of draw commands per frame (default: 512).
    pub max_commands: usize,
    /// Maximum number of game events per frame (default: 32).
    pub max_events: usize,
}

impl GameConfig {
    pub fn board(&self) -> Board {
        Board::new(Dimensions::new(self.world_width, self.world_height), self.hud_offset)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            fps: 60.0,
            world_width: 500.0,
            world_height: 500.0,
            hud_offset: 40.0,
            accepted_keys: Key::ARROWS.to_vec(),
            initial_phase: GamePhase::Menu,
            max_commands: 512,
            max_events: 32,
        }
    }
}

/// The core contract every game must fulfill.
pub trait Game {
    /// Return engine configuration. Called once before init and again on restart.
    fn config(&self) -> GameConfig {
        GameConfig::default()
    }

    /// Build the initial entity set.
    fn init(&mut self, ctx: &mut EngineContext);

    /// Advance the world by one accepted tick. Only called while running.
    fn update(&mut self, ctx: &mut EngineContext);

    /// Emit draw commands for the current world state. Called on every accepted tick.
    fn draw(&mut self, ctx: &EngineContext, surface: &mut RenderBuffer);

    /// Throw away the entity set and build a fresh one.
    fn restart(&mut self, ctx: &mut EngineContext);

    /// Score shown in the HUD.
    fn points(&self) -> u32 {
        0
    }

    /// Replace sprite lookups after the host finished loading assets.
    /// On error the game keeps the sprites it had.
    fn load_manifest(&mut self, _manifest: &AssetManifest) -> Result<(), ManifestError> {
        Ok(())
    }

    /// React to a custom UI event the engine does not handle itself.
    fn on_custom(&mut self, _ctx: &mut EngineContext, _kind: u32, _a: f32, _b: f32, _c: f32) {}
}

/// Mutable access to engine state, passed to Game::init and Game::update.
pub struct EngineContext {
    pub input: InputState,
    pub board: Board,
    pub events: Vec<GameEvent>,
    /// Host timestamp of the tick being processed.
    pub now_ms: f64,
    phase: GamePhase,
    next_id: u32,
}

impl EngineContext {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            input: InputState::with_accepted_keys(&config.accepted_keys),
            board: config.board(),
            events: Vec::with_capacity(config.max_events),
            now_ms: 0.0,
            phase: config.initial_phase,
            next_id: 1,
        }
    }

    /// Generate the next unique entity ID.
    pub fn next_id(&mut self) -> EntityId {
        let id = EntityId(self.next_id);
        self.next_id += 1;
        id
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn set_phase(&mut self, phase: GamePhase) {
        if phase != self.phase {
            log::info!("phase {:?} -> {:?}", self.phase, phase);
            self.phase = phase;
        }
    }

    /// Emit a game event to be forwarded to the host page.
    pub fn emit_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Clear per-frame transient data.
    pub fn clear_frame_data(&mut self) {
        self.events.clear();
    }
}

impl Default for EngineContext {
    fn default() -> Self {
        Self::new(&GameConfig::default())
    }
}

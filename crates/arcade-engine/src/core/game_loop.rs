//! Host-driven game loop.
//!
//! The host calls [`GameLoop::frame`] from its animation callback with the
//! current timestamp. Accepted ticks run HUD snapshot, world draw and world
//! update, in that order. Only a running game updates; every other phase is
//! draw-only.

use crate::api::game::{EngineContext, Game, GameConfig};
use crate::api::types::GamePhase;
use crate::assets::manifest::{AssetManifest, ManifestError};
use crate::core::time::FrameLimiter;
use crate::input::keys::InputEvent;
use crate::renderer::command::RenderBuffer;

/// Custom event kinds handled by the engine itself.
/// Games should number their own kinds from [`CUSTOM_GAME_BASE`].
pub const CUSTOM_RESTART: u32 = 1;
pub const CUSTOM_TOGGLE_PAUSE: u32 = 2;
pub const CUSTOM_START: u32 = 3;
pub const CUSTOM_GAME_BASE: u32 = 16;

/// What the HUD layer needs to draw the overlay for the current tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HudState {
    /// Observed fps, 0 until the first one-second window closes.
    pub fps: u32,
    pub points: u32,
    pub phase: GamePhase,
    /// The game-over overlay should be shown on top of the world.
    pub overlay: bool,
}

pub struct GameLoop<G: Game> {
    game: G,
    ctx: EngineContext,
    limiter: FrameLimiter,
    surface: RenderBuffer,
    hud: HudState,
    config: GameConfig,
    initialized: bool,
    frame_counter: u64,
}

impl<G: Game> GameLoop<G> {
    pub fn new(game: G) -> Self {
        let config = game.config();
        Self {
            ctx: EngineContext::new(&config),
            limiter: FrameLimiter::new(config.fps),
            surface: RenderBuffer::with_capacity(config.max_commands),
            hud: HudState::default(),
            game,
            config,
            initialized: false,
            frame_counter: 0,
        }
    }

    /// Initialize the game. Call once after construction.
    pub fn init(&mut self) {
        self.game.init(&mut self.ctx);
        self.initialized = true;
        log::info!(
            "game initialized: {}x{} board, {} fps target",
            self.config.world_width,
            self.config.world_height,
            self.config.fps
        );
    }

    /// Feed a host input event. Key events update the held set immediately.
    pub fn push_input(&mut self, event: InputEvent) {
        match event {
            InputEvent::Custom { kind, a, b, c } => match kind {
                CUSTOM_RESTART => self.restart(),
                CUSTOM_TOGGLE_PAUSE => self.toggle_pause(),
                CUSTOM_START => self.start(),
                _ => self.game.on_custom(&mut self.ctx, kind, a, b, c),
            },
            _ => self.ctx.input.apply(&event),
        }
    }

    /// Animation callback. Returns true if a tick ran.
    ///
    /// Calls less than one frame period after the last accepted tick do nothing.
    pub fn frame(&mut self, now_ms: f64) -> bool {
        if !self.initialized {
            return false;
        }
        if !self.limiter.tick(now_ms) {
            return false;
        }

        self.ctx.now_ms = now_ms;
        self.ctx.clear_frame_data();
        self.frame_counter += 1;

        let phase = self.ctx.phase();
        self.hud = HudState {
            fps: self.limiter.actual_fps(),
            points: self.game.points(),
            phase,
            overlay: phase == GamePhase::GameOver,
        };

        self.surface.clear();
        self.game.draw(&self.ctx, &mut self.surface);

        if phase.updates_world() {
            self.game.update(&mut self.ctx);
        }

        true
    }

    /// Replace the game's entity set and resume running.
    pub fn restart(&mut self) {
        self.config = self.game.config();
        self.ctx.input.set_accepted_keys(&self.config.accepted_keys);
        self.game.restart(&mut self.ctx);
        self.ctx.set_phase(GamePhase::Running);
        self.limiter.reset();
        log::info!("game restarted");
    }

    /// Flip between running and paused. Other phases are left alone.
    pub fn toggle_pause(&mut self) {
        match self.ctx.phase() {
            GamePhase::Running => self.ctx.set_phase(GamePhase::Paused),
            GamePhase::Paused => self.ctx.set_phase(GamePhase::Running),
            _ => {}
        }
    }

    /// Leave the menu.
    pub fn start(&mut self) {
        if self.ctx.phase() == GamePhase::Menu {
            self.ctx.set_phase(GamePhase::Running);
        }
    }

    /// Parse a manifest and hand it to the game.
    pub fn load_manifest(&mut self, json: &str) -> Result<(), ManifestError> {
        let manifest = AssetManifest::from_json(json)?;
        self.game.load_manifest(&manifest)?;
        log::info!(
            "manifest loaded: {} atlases, {} sprites",
            manifest.atlases.len(),
            manifest.sprites.len()
        );
        Ok(())
    }

    pub fn game(&self) -> &G {
        &self.game
    }

    pub fn game_mut(&mut self) -> &mut G {
        &mut self.game
    }

    pub fn context(&self) -> &EngineContext {
        &self.ctx
    }

    pub fn surface(&self) -> &RenderBuffer {
        &self.surface
    }

    pub fn hud(&self) -> HudState {
        self.hud
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn frame_counter(&self) -> u64 {
        self.frame_counter
    }

    pub fn ms_per_frame(&self) -> f64 {
        self.limiter.ms_per_frame()
    }
}

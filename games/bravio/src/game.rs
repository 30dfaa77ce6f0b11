use arcade_engine::*;
use arcade_engine::core::physics::find_ground;
use glam::Vec2;

use crate::platform::Platform;
use crate::player::Player;
use crate::states::PlayerState;

const WORLD_W: f32 = 500.0;
const WORLD_H: f32 = 500.0;
const HUD_OFFSET: f32 = 40.0;
const FPS: f64 = 60.0;

const PLAYER_ID: EntityId = EntityId(0);
const PLAYER_START: Vec2 = Vec2::new(100.0, 100.0);
const PLATFORM_POS: Vec2 = Vec2::new(250.0, 450.0);
const PLATFORM_SIZE: Dimensions = Dimensions::new(150.0, 30.0);

const KEYS: [Key; 10] = [
    Key::ArrowUp,
    Key::ArrowDown,
    Key::ArrowLeft,
    Key::ArrowRight,
    Key::W,
    Key::A,
    Key::S,
    Key::D,
    Key::Space,
    Key::Shift,
];

/// Sheets shipped with the game. The host may replace them via `game_load_manifest`.
const MANIFEST: &str = include_str!("../assets/manifest.json");

pub struct BravioGame {
    player: Player,
    platforms: Scene<Platform>,
    /// Index of the platform supporting the player, settled after the last update.
    ground: Option<usize>,
    registry: SpriteRegistry,
    tuning: PhysicsTuning,
}

impl BravioGame {
    pub fn new() -> Self {
        let tuning = PhysicsTuning::default();
        Self {
            player: Player::new(PLAYER_ID, PLAYER_START, tuning, 0.0),
            platforms: Scene::new(),
            ground: None,
            registry: embedded_registry(),
            tuning,
        }
    }

    #[cfg(test)]
    pub fn player(&self) -> &Player {
        &self.player
    }

    #[cfg(test)]
    pub fn ground(&self) -> Option<usize> {
        self.ground
    }

    fn spawn_platforms(&mut self, ctx: &mut EngineContext) {
        self.platforms
            .spawn(Platform::new(ctx.next_id(), PLATFORM_POS, PLATFORM_SIZE));
    }
}

impl Default for BravioGame {
    fn default() -> Self {
        Self::new()
    }
}

fn embedded_registry() -> SpriteRegistry {
    match AssetManifest::from_json(MANIFEST) {
        Ok(manifest) => SpriteRegistry::from_manifest(&manifest),
        Err(e) => {
            log::error!("embedded manifest is invalid: {}", e);
            SpriteRegistry::new()
        }
    }
}

impl Game for BravioGame {
    fn config(&self) -> GameConfig {
        GameConfig {
            fps: FPS,
            world_width: WORLD_W,
            world_height: WORLD_H,
            hud_offset: HUD_OFFSET,
            accepted_keys: KEYS.to_vec(),
            initial_phase: GamePhase::Running,
            ..GameConfig::default()
        }
    }

    fn init(&mut self, ctx: &mut EngineContext) {
        self.spawn_platforms(ctx);
        log::info!(
            "bravio: {} platforms, {} sprite sheets",
            self.platforms.len(),
            self.registry.len()
        );
    }

    fn update(&mut self, ctx: &mut EngineContext) {
        let board = ctx.board;
        let support = self
            .ground
            .and_then(|idx| self.platforms.get(idx))
            .map(|platform| platform.entity());
        self.player.update(
            &UpdateContext::passive(&board)
                .with_input(&ctx.input)
                .with_ground(support),
        );
        self.platforms.update_all(&UpdateContext::passive(&board));

        let ground = find_ground(
            self.player.entity(),
            self.player.is_jumping(),
            self.platforms.iter().map(|platform| platform.entity()),
        );
        if ground != self.ground {
            log::debug!("ground {:?} -> {:?}", self.ground, ground);
            self.ground = ground;
        }
    }

    fn draw(&mut self, ctx: &EngineContext, surface: &mut RenderBuffer) {
        self.player.animate(ctx.now_ms, &self.registry);
        self.platforms.draw_all(surface);
        self.player.draw(surface);
    }

    fn restart(&mut self, ctx: &mut EngineContext) {
        self.player = Player::new(PLAYER_ID, PLAYER_START, self.tuning, ctx.now_ms);
        self.platforms.clear();
        self.spawn_platforms(ctx);
        self.ground = None;
    }

    fn load_manifest(&mut self, manifest: &AssetManifest) -> Result<(), ManifestError> {
        let registry = SpriteRegistry::from_manifest(manifest);
        if let Some(name) = PlayerState::sheets().find(|name| registry.get(name).is_none()) {
            return Err(ManifestError::MissingSprite(name.to_string()));
        }
        self.registry = registry;
        Ok(())
    }
}

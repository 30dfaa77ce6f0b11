use arcade_engine::*;
use glam::Vec2;

use crate::fruit::Fruit;
use crate::snake::Snake;

const WORLD_W: f32 = 500.0;
const WORLD_H: f32 = 500.0;
const HUD_OFFSET: f32 = 40.0;
const FPS: f64 = 60.0;
/// Raw ticks per grid move.
const MOVE_EVERY: u32 = 9;
const SEED: u64 = 42;

const SNAKE_ID: EntityId = EntityId(1);
const FRUIT_ID: EntityId = EntityId(2);

/// Game event kinds forwarded to the host page.
pub const EVENT_FRUIT_EATEN: u32 = 1;
pub const EVENT_GAME_OVER: u32 = 2;

pub struct SnakeGame {
    snake: Snake,
    fruit: Fruit,
    cadence: Cadence,
    rng: Rng,
}

impl SnakeGame {
    pub fn new() -> Self {
        Self {
            snake: Snake::new(SNAKE_ID),
            fruit: Fruit::at(FRUIT_ID, Vec2::new(80.0, 120.0)),
            cadence: Cadence::new(MOVE_EVERY),
            rng: Rng::new(SEED),
        }
    }

    #[cfg(test)]
    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    #[cfg(test)]
    pub fn fruit(&self) -> &Fruit {
        &self.fruit
    }

    fn check_fruit(&mut self, ctx: &mut EngineContext) {
        if self.snake.head() != self.fruit.pos() {
            return;
        }
        let eaten = self.fruit.pos();
        self.fruit.relocate(&ctx.board, &mut self.rng);
        self.snake.eat();
        log::debug!("fruit eaten at ({}, {}), next at {:?}", eaten.x, eaten.y, self.fruit.pos());
        ctx.emit_event(GameEvent::new(EVENT_FRUIT_EATEN, eaten.x, eaten.y, 0.0));
    }
}

impl Default for SnakeGame {
    fn default() -> Self {
        Self::new()
    }
}

impl Game for SnakeGame {
    fn config(&self) -> GameConfig {
        GameConfig {
            fps: FPS,
            world_width: WORLD_W,
            world_height: WORLD_H,
            hud_offset: HUD_OFFSET,
            accepted_keys: Key::ARROWS.to_vec(),
            initial_phase: GamePhase::Running,
            ..GameConfig::default()
        }
    }

    fn init(&mut self, _ctx: &mut EngineContext) {
        log::info!("snake: head at {:?}, fruit at {:?}", self.snake.head(), self.fruit.pos());
    }

    fn update(&mut self, ctx: &mut EngineContext) {
        let board = ctx.board;

        if self.cadence.fire() {
            self.snake
                .update(&UpdateContext::passive(&board).with_input(&ctx.input));
            self.check_fruit(ctx);
        }

        self.fruit.update(&UpdateContext::passive(&board));

        if self.snake.is_dead() {
            let points = self.points();
            log::info!("snake: game over with {} points", points);
            ctx.emit_event(GameEvent::new(EVENT_GAME_OVER, points as f32, 0.0, 0.0));
            ctx.set_phase(GamePhase::GameOver);
        }
    }

    fn draw(&mut self, ctx: &EngineContext, surface: &mut RenderBuffer) {
        let board = ctx.board;
        surface.fill_rect(
            Vec2::new(board.x.min, board.y.min),
            Dimensions::new(WORLD_W, WORLD_H),
            Color::Black,
        );
        self.snake.draw(surface);
        self.fruit.draw(surface);
    }

    fn restart(&mut self, _ctx: &mut EngineContext) {
        self.snake = Snake::new(SNAKE_ID);
        self.fruit = Fruit::at(FRUIT_ID, Vec2::new(80.0, 120.0));
        self.cadence.reset();
    }

    fn points(&self) -> u32 {
        self.snake.points()
    }
}

pub mod api;
pub mod core;
pub mod components;
pub mod state;
pub mod renderer;
pub mod bridge;
pub mod input;
pub mod assets;

// Re-export key types at crate root for convenience
pub use api::game::{Game, GameConfig, EngineContext};
pub use api::object::{GameObject, UpdateContext};
pub use api::types::{EntityId, GameEvent, GamePhase};
pub use components::entity::{Dimensions, Entity};
pub use components::sprite::{SpriteComponent, AtlasId};
pub use components::animation::{AnimationClip, SpriteAnimation};
pub use core::board::{Board, Span};
pub use core::game_loop::{GameLoop, HudState, CUSTOM_GAME_BASE, CUSTOM_RESTART, CUSTOM_START, CUSTOM_TOGGLE_PAUSE};
pub use core::grid::{Cadence, GridBody};
pub use core::physics::{Facing, Kinematics, PhysicsTuning, Steering};
pub use core::rng::Rng;
pub use core::scene::Scene;
pub use core::time::FrameLimiter;
pub use state::{BehaviorState, StateMachine, Transient};
pub use renderer::{Color, DrawCommand, DrawKind, RenderBuffer};
pub use input::keys::{InputEvent, InputState, Key};
pub use assets::manifest::{AssetManifest, ManifestError};
pub use assets::registry::SpriteRegistry;
pub use bridge::protocol::{ProtocolLayout, FrameHeader, HEADER_FLOATS};

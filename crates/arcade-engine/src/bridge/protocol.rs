/// Shared buffer layout read by the host page.
/// Must stay in sync with the TypeScript `protocol.ts`.
///
/// Layout (all values in f32 / 4 bytes):
/// ```text
/// [Header: 16 floats]
/// [Commands: max_commands × 10 floats]
/// [Events: max_events × 4 floats]
/// ```
///
/// Capacities are written into the header on every frame so the host can
/// compute offsets without a separate handshake.

use crate::api::game::GameConfig;
use crate::api::types::GameEvent;
use crate::core::game_loop::HudState;
use crate::renderer::command::DrawCommand;

/// Number of floats in the header section.
pub const HEADER_FLOATS: usize = 16;

/// Header field indices.
pub const HEADER_PROTOCOL_VERSION: usize = 0;
pub const HEADER_FRAME_COUNTER: usize = 1;
pub const HEADER_PHASE: usize = 2;
pub const HEADER_FPS: usize = 3;
pub const HEADER_POINTS: usize = 4;
pub const HEADER_OVERLAY: usize = 5;
pub const HEADER_MAX_COMMANDS: usize = 6;
pub const HEADER_COMMAND_COUNT: usize = 7;
pub const HEADER_MAX_EVENTS: usize = 8;
pub const HEADER_EVENT_COUNT: usize = 9;
pub const HEADER_WORLD_WIDTH: usize = 10;
pub const HEADER_WORLD_HEIGHT: usize = 11;
pub const HEADER_HUD_OFFSET: usize = 12;

/// Protocol version written into the header.
pub const PROTOCOL_VERSION: f32 = 1.0;

/// Floats per draw command (wire format, never changes).
pub const COMMAND_FLOATS: usize = DrawCommand::FLOATS;

/// Floats per game event: kind, a, b, c (wire format, never changes).
pub const EVENT_FLOATS: usize = GameEvent::FLOATS;

/// Buffer layout computed from the game's capacities.
#[derive(Debug, Clone, PartialEq)]
pub struct ProtocolLayout {
    pub max_commands: usize,
    pub max_events: usize,

    pub command_data_floats: usize,
    pub event_data_floats: usize,

    /// Offset (in floats) where command data begins.
    pub command_data_offset: usize,
    /// Offset (in floats) where event data begins.
    pub event_data_offset: usize,

    pub buffer_total_floats: usize,
    pub buffer_total_bytes: usize,
}

impl ProtocolLayout {
    pub fn new(max_commands: usize, max_events: usize) -> Self {
        let command_data_floats = max_commands * COMMAND_FLOATS;
        let event_data_floats = max_events * EVENT_FLOATS;

        let command_data_offset = HEADER_FLOATS;
        let event_data_offset = command_data_offset + command_data_floats;
        let buffer_total_floats = event_data_offset + event_data_floats;

        Self {
            max_commands,
            max_events,
            command_data_floats,
            event_data_floats,
            command_data_offset,
            event_data_offset,
            buffer_total_floats,
            buffer_total_bytes: buffer_total_floats * 4,
        }
    }

    pub fn from_config(config: &GameConfig) -> Self {
        Self::new(config.max_commands, config.max_events)
    }
}

/// Per-frame values that go into the header.
#[derive(Debug, Clone, Copy)]
pub struct FrameHeader {
    pub frame_counter: u64,
    pub hud: HudState,
    pub command_count: usize,
    pub event_count: usize,
}

/// Fill `header` for one frame. Counts are clamped to the layout capacities.
pub fn write_header(
    header: &mut [f32; HEADER_FLOATS],
    layout: &ProtocolLayout,
    config: &GameConfig,
    frame: &FrameHeader,
) {
    header[HEADER_PROTOCOL_VERSION] = PROTOCOL_VERSION;
    header[HEADER_FRAME_COUNTER] = frame.frame_counter as f32;
    header[HEADER_PHASE] = frame.hud.phase.code() as f32;
    header[HEADER_FPS] = frame.hud.fps as f32;
    header[HEADER_POINTS] = frame.hud.points as f32;
    header[HEADER_OVERLAY] = if frame.hud.overlay { 1.0 } else { 0.0 };
    header[HEADER_MAX_COMMANDS] = layout.max_commands as f32;
    header[HEADER_COMMAND_COUNT] = frame.command_count.min(layout.max_commands) as f32;
    header[HEADER_MAX_EVENTS] = layout.max_events as f32;
    header[HEADER_EVENT_COUNT] = frame.event_count.min(layout.max_events) as f32;
    header[HEADER_WORLD_WIDTH] = config.world_width;
    header[HEADER_WORLD_HEIGHT] = config.world_height;
    header[HEADER_HUD_OFFSET] = config.hud_offset;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::GamePhase;

    #[test]
    fn from_default_config() {
        let layout = ProtocolLayout::from_config(&GameConfig::default());
        assert_eq!(layout.max_commands, 512);
        assert_eq!(layout.max_events, 32);
        assert_eq!(layout.command_data_offset, HEADER_FLOATS);
        assert_eq!(layout.event_data_offset, HEADER_FLOATS + 512 * 10);
        assert_eq!(layout.buffer_total_floats, HEADER_FLOATS + 512 * 10 + 32 * 4);
        assert_eq!(layout.buffer_total_bytes, layout.buffer_total_floats * 4);
    }

    #[test]
    fn offsets_are_contiguous() {
        let layout = ProtocolLayout::new(100, 20);
        assert_eq!(layout.event_data_offset, layout.command_data_offset + layout.command_data_floats);
        assert_eq!(layout.buffer_total_floats, layout.event_data_offset + layout.event_data_floats);
    }

    #[test]
    fn header_carries_hud_and_world() {
        let config = GameConfig::default();
        let layout = ProtocolLayout::new(4, 2);
        let mut header = [0.0; HEADER_FLOATS];
        let frame = FrameHeader {
            frame_counter: 7,
            hud: HudState {
                fps: 60,
                points: 30,
                phase: GamePhase::GameOver,
                overlay: true,
            },
            command_count: 9,
            event_count: 1,
        };
        write_header(&mut header, &layout, &config, &frame);

        assert_eq!(header[HEADER_PROTOCOL_VERSION], PROTOCOL_VERSION);
        assert_eq!(header[HEADER_FRAME_COUNTER], 7.0);
        assert_eq!(header[HEADER_PHASE], 3.0);
        assert_eq!(header[HEADER_FPS], 60.0);
        assert_eq!(header[HEADER_POINTS], 30.0);
        assert_eq!(header[HEADER_OVERLAY], 1.0);
        assert_eq!(header[HEADER_COMMAND_COUNT], 4.0);
        assert_eq!(header[HEADER_EVENT_COUNT], 1.0);
        assert_eq!(header[HEADER_WORLD_WIDTH], 500.0);
        assert_eq!(header[HEADER_HUD_OFFSET], 40.0);
    }
}

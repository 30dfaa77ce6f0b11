use bytemuck::{Pod, Zeroable};
use glam::Vec2;
use crate::components::entity::Dimensions;
use crate::components::sprite::SpriteComponent;

/// Fill colors understood by the host renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum Color {
    Black = 0,
    Red = 1,
    Blue = 2,
    Yellow = 3,
}

/// What a [`DrawCommand`] asks the host to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum DrawKind {
    /// Solid rectangle in `color`.
    FillRect = 0,
    /// One cell of a sprite sheet, optionally mirrored horizontally.
    Sprite = 1,
}

/// Per-command draw data shared with the host page.
/// Wire format: 10 floats = 40 bytes stride.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct DrawCommand {
    /// [`DrawKind`] discriminant.
    pub kind: f32,
    /// Top-left corner in world space.
    pub x: f32,
    pub y: f32,
    /// Destination size in world units.
    pub width: f32,
    pub height: f32,
    /// [`Color`] discriminant (fills only).
    pub color: f32,
    /// Atlas index (sprites only).
    pub atlas: f32,
    /// Atlas column, i.e. the animation frame (sprites only).
    pub col: f32,
    /// Atlas row (sprites only).
    pub row: f32,
    /// 1.0 to mirror horizontally around the destination center.
    pub flip: f32,
}

impl DrawCommand {
    pub const FLOATS: usize = 10;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;

    pub fn fill_rect(pos: Vec2, size: Dimensions, color: Color) -> Self {
        Self {
            kind: DrawKind::FillRect as u32 as f32,
            x: pos.x,
            y: pos.y,
            width: size.width,
            height: size.height,
            color: color as u32 as f32,
            ..Default::default()
        }
    }

    pub fn sprite(pos: Vec2, size: Dimensions, sprite: &SpriteComponent, frame: usize, flip: bool) -> Self {
        Self {
            kind: DrawKind::Sprite as u32 as f32,
            x: pos.x,
            y: pos.y,
            width: size.width,
            height: size.height,
            atlas: sprite.atlas.0 as f32,
            col: sprite.col + frame as f32,
            row: sprite.row,
            flip: if flip { 1.0 } else { 0.0 },
            ..Default::default()
        }
    }

    pub fn is(&self, kind: DrawKind) -> bool {
        self.kind == kind as u32 as f32
    }
}

/// The opaque drawing surface handed to entities.
/// Commands are drawn by the host in push order.
pub struct RenderBuffer {
    pub commands: Vec<DrawCommand>,
    capacity: usize,
}

impl RenderBuffer {
    pub fn new() -> Self {
        Self::with_capacity(512)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            commands: Vec::with_capacity(capacity),
            capacity,
        }
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// Push a command. Commands past the configured capacity are dropped.
    pub fn push(&mut self, command: DrawCommand) {
        if self.commands.len() >= self.capacity {
            log::warn!("render buffer full ({} commands), dropping draw", self.capacity);
            return;
        }
        self.commands.push(command);
    }

    pub fn fill_rect(&mut self, pos: Vec2, size: Dimensions, color: Color) {
        self.push(DrawCommand::fill_rect(pos, size, color));
    }

    /// Pointer to the command data (for shared-memory reads by the host).
    pub fn commands_ptr(&self) -> *const f32 {
        self.commands.as_ptr() as *const f32
    }

    pub fn command_count(&self) -> u32 {
        self.commands.len() as u32
    }

    /// Get command data as a float slice.
    pub fn as_floats(&self) -> &[f32] {
        bytemuck::cast_slice(&self.commands)
    }
}

impl Default for RenderBuffer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::sprite::AtlasId;

    #[test]
    fn fill_rect_layout() {
        let mut buf = RenderBuffer::new();
        buf.fill_rect(Vec2::new(1.0, 2.0), Dimensions::new(3.0, 4.0), Color::Yellow);
        assert_eq!(buf.command_count(), 1);
        let floats = buf.as_floats();
        assert_eq!(floats.len(), DrawCommand::FLOATS);
        assert_eq!(&floats[..6], &[0.0, 1.0, 2.0, 3.0, 4.0, 3.0]);
    }

    #[test]
    fn sprite_frame_offsets_column() {
        let sheet = SpriteComponent {
            atlas: AtlasId(2),
            col: 1.0,
            row: 3.0,
            ..Default::default()
        };
        let cmd = DrawCommand::sprite(Vec2::ZERO, Dimensions::square(32.0), &sheet, 4, true);
        assert!(cmd.is(DrawKind::Sprite));
        assert_eq!(cmd.atlas, 2.0);
        assert_eq!(cmd.col, 5.0);
        assert_eq!(cmd.row, 3.0);
        assert_eq!(cmd.flip, 1.0);
    }

    #[test]
    fn drops_commands_over_capacity() {
        let mut buf = RenderBuffer::with_capacity(2);
        for _ in 0..3 {
            buf.fill_rect(Vec2::ZERO, Dimensions::square(1.0), Color::Black);
        }
        assert_eq!(buf.command_count(), 2);
    }
}

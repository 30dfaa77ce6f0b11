//! Grid movement for tile-based bodies: one-tile steps, torus wraparound,
//! body shifting, growth and self-collision.

use std::collections::VecDeque;
use glam::Vec2;
use crate::components::entity::{Dimensions, Entity};
use crate::core::board::Board;
use crate::core::rng::Rng;

/// Gate that lets one move through every `divisor` raw ticks.
#[derive(Debug, Clone)]
pub struct Cadence {
    divisor: u32,
    counter: u32,
}

impl Cadence {
    pub fn new(divisor: u32) -> Self {
        Self {
            divisor: divisor.max(1),
            counter: 0,
        }
    }

    /// Count one raw tick. Returns true on every `divisor`-th call.
    pub fn fire(&mut self) -> bool {
        self.counter += 1;
        if self.counter >= self.divisor {
            self.counter = 0;
            true
        } else {
            false
        }
    }

    pub fn reset(&mut self) {
        self.counter = 0;
    }
}

/// Wrap a top-left position that left the board onto the opposite edge.
pub fn wrap(pos: Vec2, size: Dimensions, board: &Board) -> Vec2 {
    let mut out = pos;

    if out.x < board.x.min {
        out.x = board.x.max - size.width;
    } else if out.x > board.x.max - size.width {
        out.x = board.x.min;
    }

    if out.y < board.y.min {
        out.y = board.y.max - size.height;
    } else if out.y > board.y.max - size.height {
        out.y = board.y.min;
    }

    out
}

/// Random tile-aligned top-left position fully inside the board.
pub fn random_cell(board: &Board, size: Dimensions, rng: &mut Rng) -> Vec2 {
    Vec2::new(
        rng.aligned(board.x.min, board.x.max - size.width, size.width),
        rng.aligned(board.y.min, board.y.max - size.height, size.height),
    )
}

/// Trailing tiles of a grid-moving head.
///
/// The front tile is the neck (the head's previous cell), the back tile is
/// the tail. The body only ever grows.
#[derive(Debug, Clone, PartialEq)]
pub struct GridBody {
    tiles: VecDeque<Vec2>,
    has_eaten: bool,
    dead: bool,
}

impl GridBody {
    pub fn new(tiles: impl IntoIterator<Item = Vec2>) -> Self {
        Self {
            tiles: tiles.into_iter().collect(),
            has_eaten: false,
            dead: false,
        }
    }

    pub fn tiles(&self) -> impl Iterator<Item = &Vec2> {
        self.tiles.iter()
    }

    pub fn tail(&self) -> Option<Vec2> {
        self.tiles.back().copied()
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Request one tile of growth on the next move.
    pub fn eat(&mut self) {
        self.has_eaten = true;
    }

    pub fn has_eaten(&self) -> bool {
        self.has_eaten
    }

    /// Set once the head ran into the body. Never cleared.
    pub fn is_dead(&self) -> bool {
        self.dead
    }

    /// Whether any tile occupies `pos`.
    pub fn occupies(&self, pos: Vec2) -> bool {
        self.tiles.iter().any(|t| *t == pos)
    }

    /// Move `head` by `step`, wrap it, drag the body along and apply growth
    /// and self-collision.
    ///
    /// Every tile takes its predecessor's pre-move cell and the old head cell
    /// becomes the neck. A pending growth appends the pre-move tail cell.
    pub fn advance(&mut self, head: &mut Entity, step: Vec2, board: &Board) {
        let old_head = head.pos;
        head.pos = wrap(old_head + step, head.size(), board);

        self.tiles.push_front(old_head);
        let old_tail = self.tiles.pop_back();

        if self.has_eaten {
            if let Some(tail) = old_tail {
                self.tiles.push_back(tail);
            }
            self.has_eaten = false;
        }

        if self.occupies(head.pos) {
            self.dead = true;
        }
    }
}

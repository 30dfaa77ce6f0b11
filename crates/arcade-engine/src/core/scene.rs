use crate::api::object::{GameObject, UpdateContext};
use crate::api::types::EntityId;
use crate::renderer::command::RenderBuffer;

/// Flat storage for a game's passive objects (platforms, pickups).
/// Restarting a game replaces the whole set rather than patching it.
pub struct Scene<O> {
    objects: Vec<O>,
}

impl<O: GameObject> Scene<O> {
    pub fn new() -> Self {
        Self {
            objects: Vec::with_capacity(16),
        }
    }

    /// Add an object to the scene.
    pub fn spawn(&mut self, object: O) {
        self.objects.push(object);
    }

    pub fn get(&self, index: usize) -> Option<&O> {
        self.objects.get(index)
    }

    /// Find an object by the ID of its entity.
    pub fn find(&self, id: EntityId) -> Option<&O> {
        self.objects.iter().find(|o| o.entity().id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &O> {
        self.objects.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut O> {
        self.objects.iter_mut()
    }

    /// Update every object with a passive context.
    pub fn update_all(&mut self, ctx: &UpdateContext<'_>) {
        for object in &mut self.objects {
            object.update(ctx);
        }
    }

    /// Draw every object in spawn order.
    pub fn draw_all(&self, surface: &mut RenderBuffer) {
        for object in &self.objects {
            object.draw(surface);
        }
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    pub fn clear(&mut self) {
        self.objects.clear();
    }
}

impl<O: GameObject> Default for Scene<O> {
    fn default() -> Self {
        Self::new()
    }
}

//! Obstacle registry
//!
//! Arena of live collidable rectangles. Each entry belongs to exactly one
//! garbage task, which registers it on its first resumption and removes it
//! when the task retires.

use super::collision::Rect;

/// Handle to a registered obstacle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObstacleId(u32);

/// A registered obstacle
#[derive(Debug, Clone)]
pub struct Obstacle {
    pub id: ObstacleId,
    pub rect: Rect,
    /// Set by a projectile, consumed by the owning task
    hit: bool,
}

impl Obstacle {
    pub fn is_hit(&self) -> bool {
        self.hit
    }
}

/// Live obstacles, kept in registration order
#[derive(Debug, Default)]
pub struct ObstacleRegistry {
    obstacles: Vec<Obstacle>,
    next_id: u32,
}

impl ObstacleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a rectangle and return its handle
    pub fn register(&mut self, rect: Rect) -> ObstacleId {
        let id = ObstacleId(self.next_id);
        self.next_id += 1;
        self.obstacles.push(Obstacle {
            id,
            rect,
            hit: false,
        });
        log::debug!("Obstacle {:?} registered at {:?}", id, rect);
        id
    }

    /// Remove an obstacle; returns whether it was present
    pub fn remove(&mut self, id: ObstacleId) -> bool {
        let before = self.obstacles.len();
        self.obstacles.retain(|o| o.id != id);
        self.obstacles.len() != before
    }

    /// Move an obstacle to a new row (garbage only falls)
    pub fn set_row(&mut self, id: ObstacleId, row: f32) {
        if let Some(obstacle) = self.get_mut(id) {
            obstacle.rect.row = row;
        }
    }

    pub fn get(&self, id: ObstacleId) -> Option<&Obstacle> {
        self.obstacles.iter().find(|o| o.id == id)
    }

    fn get_mut(&mut self, id: ObstacleId) -> Option<&mut Obstacle> {
        self.obstacles.iter_mut().find(|o| o.id == id)
    }

    pub fn contains(&self, id: ObstacleId) -> bool {
        self.get(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.obstacles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.obstacles.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Obstacle> {
        self.obstacles.iter()
    }

    /// Whether `query`, inflated by `margin`, overlaps any live obstacle
    pub fn overlaps(&self, query: &Rect, margin: f32) -> bool {
        self.first_overlap(query, margin).is_some()
    }

    /// Oldest live obstacle overlapping `query` inflated by `margin`
    pub fn first_overlap(&self, query: &Rect, margin: f32) -> Option<ObstacleId> {
        self.obstacles
            .iter()
            .find(|o| query.overlaps_with_margin(&o.rect, margin))
            .map(|o| o.id)
    }

    /// Flag an obstacle as shot; returns false if it is gone
    pub fn mark_hit(&mut self, id: ObstacleId) -> bool {
        match self.get_mut(id) {
            Some(obstacle) => {
                obstacle.hit = true;
                true
            }
            None => false,
        }
    }

    /// Consume the hit flag of an obstacle
    pub fn take_hit(&mut self, id: ObstacleId) -> bool {
        self.get_mut(id)
            .map(|o| std::mem::take(&mut o.hit))
            .unwrap_or(false)
    }
}

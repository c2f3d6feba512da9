//! The generic entity base shared by players, doors and anything else that
//! occupies space in the level.

use glam::Vec2;
use log::{trace, warn};
use math::{Angle, Rect};
use net::NetEntity;

/// Called when two entities are found touching. `me` is the owner of the
/// hook.
pub type OnTouch = fn(me: &Entity, other: &Entity);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Player,
    Door,
    /// Static level furniture, crates and the like
    Obstacle,
}

impl EntityKind {
    /// Type tag used in the network projection
    pub const fn net_value(self) -> u8 {
        match self {
            EntityKind::Player => 0,
            EntityKind::Door => 1,
            EntityKind::Obstacle => 2,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Entity {
    pub id: u32,
    pub kind: EntityKind,
    /// Position in the level
    pub xy: Vec2,
    /// Direction the entity was spawned looking in
    pub facing: Vec2,
    /// Current orientation
    pub angle: Angle,
    pub bounds: Rect,
    pub health: i32,
    pub can_take_damage: bool,
    /// Entities with no hook on either side are skipped by the touch pass
    pub on_touch: Option<OnTouch>,
}

impl Entity {
    /// New entity with its bounds (of the given extent) centred on `xy`.
    pub fn new(id: u32, kind: EntityKind, xy: Vec2, facing: Vec2, extent: f32) -> Self {
        let mut bounds = Rect::with_extent(extent, extent);
        bounds.centre_around(xy);
        Self {
            id,
            kind,
            xy,
            facing,
            angle: Angle::from_vector(facing),
            bounds,
            health: 100,
            can_take_damage: false,
            on_touch: None,
        }
    }

    pub fn centre(&self) -> Vec2 {
        self.bounds.centre()
    }

    /// Move and drag the bounds along
    pub fn set_xy(&mut self, xy: Vec2) {
        self.xy = xy;
        self.bounds.centre_around(xy);
    }

    pub fn damage(&mut self, amount: i32) {
        if self.can_take_damage {
            self.health -= amount;
        }
    }

    /// Whether a touch between these two should be reported at all
    pub fn can_touch(&self, other: &Entity) -> bool {
        self.on_touch.is_some() || other.on_touch.is_some()
    }

    /// Run both entities' hooks for a touch between them
    pub fn touch(&self, other: &Entity) {
        trace!("Entity {} touched {}", self.id, other.id);
        if let Some(f) = self.on_touch {
            f(self, other);
        }
        if let Some(f) = other.on_touch {
            f(other, self);
        }
    }

    pub fn net_entity(&self) -> NetEntity {
        NetEntity {
            kind: self.kind.net_value(),
            id: u16::try_from(self.id).unwrap_or_else(|_| {
                warn!("Entity id {} does not fit a snapshot, wrapping", self.id);
                self.id as u16
            }),
            x: self.xy.x.round() as i16,
            y: self.xy.y.round() as i16,
            orientation: (self.angle.degrees().round() as u16) % 360,
        }
    }
}

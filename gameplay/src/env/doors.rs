//! Swinging door thinker, controls open/close, blocking and auto-close.
//!
//! A door is two parallel leaves rotating about a hinge. The front leaf runs
//! from the hinge at the door position to the front handle, the rear leaf
//! from the rear hinge (one leaf thickness over) to the rear handle. Both are
//! recomputed every tic from the position, hinge kind and current angle.

use std::fmt::{self, Formatter};

use glam::Vec2;
use log::{debug, trace};
use math::{trace_intersects_rect, vec2_ma, Angle, Rect, Trace};
use net::NetDoor;
use sound_traits::SfxName;

use crate::{
    entity::{Entity, EntityKind},
    env::hinge::DoorHinge,
    level::World,
    orientation::SmoothOrientation,
    timer::Timer,
    tuning::DoorTuning,
    DOOR_LENGTH,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DoorState {
    Closed,
    Opening,
    Opened,
    Closing,
}

type StateThink<W> = fn(&mut Door, &W, u32);

impl DoorState {
    /// The per-tic behaviour of each state
    fn think<W: World>(self) -> StateThink<W> {
        match self {
            DoorState::Closed => Door::think_closed,
            DoorState::Opening => Door::think_opening,
            DoorState::Opened => Door::think_opened,
            DoorState::Closing => Door::think_closing,
        }
    }
}

pub struct Door {
    base: Entity,
    hinge: DoorHinge,
    state: DoorState,
    rotation: SmoothOrientation,
    /// Resting angle the current swing is heading for
    target_orientation: Angle,
    front_handle: Vec2,
    rear_handle: Vec2,
    rear_hinge: Vec2,
    /// Reach box around the front handle, moves with the door
    handle_touch: Rect,
    /// Reach box around the hinge, fixed
    hinge_touch: Rect,
    /// Players inside this hold the door open
    auto_close: Rect,
    blocked: bool,
    auto_close_timer: Timer,
}

impl fmt::Debug for Door {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Door")
            .field("id", &self.base.id)
            .field("xy", &self.base.xy)
            .field("hinge", &self.hinge)
            .field("state", &self.state)
            .field("orientation", &self.rotation.orientation().degrees())
            .field("target", &self.target_orientation.degrees())
            .field("blocked", &self.blocked)
            .finish()
    }
}

impl Door {
    pub fn new<W: World>(xy: Vec2, facing: Vec2, world: &mut W) -> Self {
        Self::with_tuning(xy, facing, DoorTuning::default(), world)
    }

    /// The hinge kind is fixed here from `facing` and the door starts shut.
    pub fn with_tuning<W: World>(
        xy: Vec2,
        facing: Vec2,
        tuning: DoorTuning,
        world: &mut W,
    ) -> Self {
        let hinge = DoorHinge::from_facing(facing);

        let mut base = Entity::new(
            world.next_persistent_id(),
            EntityKind::Door,
            xy,
            facing,
            tuning.touch_extent,
        );
        // Doors can be shot at, they just don't care
        base.can_take_damage = true;
        // Nothing to do on touch, but having a hook means the touch pass
        // pairs doors with whatever walks into them
        base.on_touch = Some(|_, _| {});

        let mut hinge_touch = Rect::with_extent(tuning.touch_extent, tuning.touch_extent);
        hinge_touch.centre_around(xy);
        let mut auto_close = Rect::with_extent(tuning.auto_close_extent, tuning.auto_close_extent);
        auto_close.centre_around(xy);

        let mut auto_close_timer = Timer::new(false, tuning.auto_close_ms);
        auto_close_timer.stop();

        let mut rotation = SmoothOrientation::new(tuning.smoothing_rate);
        rotation.set_orientation(hinge.closed_orientation());

        let mut door = Door {
            base,
            hinge,
            state: DoorState::Closed,
            rotation,
            target_orientation: hinge.closed_orientation(),
            front_handle: xy,
            rear_handle: xy,
            rear_hinge: xy,
            handle_touch: Rect::with_extent(tuning.touch_extent, tuning.touch_extent),
            hinge_touch,
            auto_close,
            blocked: false,
            auto_close_timer,
        };
        door.base.angle = door.rotation.orientation();
        door.update_geometry();

        debug!("Spawned {door:?}");
        door
    }

    /// Place handles, rear hinge and the handle reach box for the current angle
    fn update_geometry(&mut self) {
        let facing = self.rotation.facing();
        self.front_handle = vec2_ma(self.base.xy, facing, DOOR_LENGTH);
        self.rear_hinge = self.hinge.rear_hinge_position(self.base.xy, facing);
        self.rear_handle = self.hinge.rear_handle_position(self.rear_hinge, facing);
        self.handle_touch.centre_around(self.front_handle);
        self.base.bounds = self.handle_touch;
    }

    /// Advance one tic. Doors never remove themselves so this is always
    /// `false`.
    pub fn update<W: World>(&mut self, dt_ms: u32, world: &W) -> bool {
        let think = self.state.think::<W>();
        think(self, world, dt_ms);
        self.base.angle = self.rotation.orientation();
        false
    }

    fn think_closed<W: World>(&mut self, _world: &W, _dt_ms: u32) {
        self.blocked = false;
    }

    fn think_opening<W: World>(&mut self, world: &W, _dt_ms: u32) {
        self.swing(world, SfxName::DoorOpenBlocked, DoorState::Opened);
    }

    fn think_closing<W: World>(&mut self, world: &W, _dt_ms: u32) {
        self.swing(world, SfxName::DoorCloseBlocked, DoorState::Closed);
    }

    fn think_opened<W: World>(&mut self, world: &W, dt_ms: u32) {
        self.auto_close_timer.update(dt_ms);
        if !self.auto_close_timer.is_on_first_time() {
            return;
        }

        if self.is_player_near(world) {
            trace!("Door {} held open, waiting again", self.base.id);
            self.auto_close_timer.reset();
        } else {
            debug!("Door {} closing itself", self.base.id);
            let me = self.base;
            self.close(&me, world);
            self.auto_close_timer.stop();
        }
    }

    /// Rotate toward the target. If the new pose runs into a player the pose
    /// from before this tic is kept and the door waits, otherwise it settles
    /// into `rest` once the rotation stops.
    fn swing<W: World>(&mut self, world: &W, blocked_sfx: SfxName, rest: DoorState) {
        let before = self.rotation.orientation();
        self.rotation.set_desired_orientation(self.target_orientation);
        self.rotation.update();
        self.update_geometry();

        if world.does_touch_players(self) {
            if !self.blocked {
                debug!("Door {} blocked while {:?}", self.base.id, self.state);
                world.emit_sound(self.uid(), blocked_sfx, self.base.xy);
            }
            self.blocked = true;

            self.rotation.set_orientation(before);
            self.rotation.set_desired_orientation(self.target_orientation);
            self.update_geometry();
        } else {
            self.blocked = false;
            if !self.rotation.moved() {
                debug!("Door {} is {:?}", self.base.id, rest);
                self.state = rest;
            }
        }
    }

    /// Single button use: open a shut door, shut an open one, and reverse a
    /// blocked one. A door swinging freely ignores it.
    pub fn handle_door<W: World>(&mut self, ent: &Entity, world: &W) {
        match self.state {
            DoorState::Opened => self.close(ent, world),
            DoorState::Closed => self.open(ent, world),
            DoorState::Opening if self.blocked => self.close(ent, world),
            DoorState::Closing if self.blocked => self.open(ent, world),
            DoorState::Opening | DoorState::Closing => {}
        }
    }

    /// Start swinging open, away from `ent`. Only reach is checked: every
    /// state accepts an open, so a door already moving is re-targeted.
    pub fn open<W: World>(&mut self, ent: &Entity, world: &W) {
        if !self.can_be_handled_by(ent) {
            return;
        }

        self.auto_close_timer.reset();
        self.state = DoorState::Opening;
        world.emit_sound(self.uid(), SfxName::DoorOpen, self.base.xy);

        self.target_orientation = self.hinge.open_destination(self.base.xy, ent.centre());
        self.rotation.set_desired_orientation(self.target_orientation);
        debug!(
            "Door {} opening to {:.0} for {}",
            self.base.id,
            self.target_orientation.degrees(),
            ent.id
        );
    }

    /// Start swinging shut. Same reach rule as `open`.
    pub fn close<W: World>(&mut self, ent: &Entity, world: &W) {
        if !self.can_be_handled_by(ent) {
            return;
        }

        self.state = DoorState::Closing;
        self.target_orientation = self.hinge.closed_orientation();
        self.rotation.set_desired_orientation(self.target_orientation);
        world.emit_sound(self.uid(), SfxName::DoorClose, self.base.xy);
        debug!("Door {} closing for {}", self.base.id, ent.id);
    }

    /// Doors soak up damage without effect
    pub fn damage(&mut self, _damager: &Entity, _amount: i32) {}

    /// True if `ent` is within reach to close or open this door. A door can
    /// always handle itself.
    pub fn can_be_handled_by(&self, ent: &Entity) -> bool {
        if ent.id == self.base.id {
            return true;
        }
        self.handle_touch.intersects(&ent.bounds) || self.hinge_touch.intersects(&ent.bounds)
    }

    /// True if any player is standing wholly inside the auto-close box
    pub fn is_player_near<W: World>(&self, world: &W) -> bool {
        world
            .player_entities()
            .iter()
            .flatten()
            .any(|p| self.auto_close.contains(&p.bounds))
    }

    /// True if either leaf crosses `bounds`
    pub fn is_touching(&self, bounds: &Rect) -> bool {
        trace_intersects_rect(Trace::between(self.base.xy, self.front_handle), bounds)
            || trace_intersects_rect(Trace::between(self.rear_hinge, self.rear_handle), bounds)
    }

    pub fn is_opened(&self) -> bool {
        self.state == DoorState::Opened
    }

    pub fn is_opening(&self) -> bool {
        self.state == DoorState::Opening
    }

    pub fn is_closed(&self) -> bool {
        self.state == DoorState::Closed
    }

    pub fn is_closing(&self) -> bool {
        self.state == DoorState::Closing
    }

    pub fn is_blocked(&self) -> bool {
        self.blocked
    }

    pub fn state(&self) -> DoorState {
        self.state
    }

    pub fn hinge(&self) -> DoorHinge {
        self.hinge
    }

    pub fn id(&self) -> u32 {
        self.base.id
    }

    fn uid(&self) -> usize {
        self.base.id as usize
    }

    pub fn entity(&self) -> &Entity {
        &self.base
    }

    pub fn orientation(&self) -> Angle {
        self.rotation.orientation()
    }

    pub fn desired_orientation(&self) -> Angle {
        self.rotation.desired_orientation()
    }

    pub fn target_orientation(&self) -> Angle {
        self.target_orientation
    }

    /// The front handle
    pub fn handle(&self) -> Vec2 {
        self.front_handle
    }

    pub fn rear_handle(&self) -> Vec2 {
        self.rear_handle
    }

    pub fn rear_hinge(&self) -> Vec2 {
        self.rear_hinge
    }

    pub fn handle_touch_rect(&self) -> &Rect {
        &self.handle_touch
    }

    pub fn hinge_touch_rect(&self) -> &Rect {
        &self.hinge_touch
    }

    pub fn auto_close_rect(&self) -> &Rect {
        &self.auto_close
    }

    pub fn net_entity(&self) -> NetDoor {
        NetDoor {
            entity: self.base.net_entity(),
            hinge: self.hinge.net_value(),
        }
    }
}

//! The level owns every player and door, hands out entity ids, and runs the
//! doors each tic.

use std::mem;

use coarse_prof::profile;
use glam::Vec2;
use log::{debug, info, warn};
use net::NetDoor;
use sound_traits::{SfxName, SndServerTx, SoundAction};

use crate::{
    entity::{Entity, EntityKind},
    env::doors::Door,
    tuning::DoorTuning,
    MAXPLAYERS, PLAYER_EXTENT,
};

/// What a door needs from the world it lives in.
pub trait World {
    /// Ids are never reused for the life of the world
    fn next_persistent_id(&mut self) -> u32;

    fn emit_sound(&self, uid: usize, sfx: SfxName, xy: Vec2);

    /// Player slots, `None` where nobody has joined
    fn player_entities(&self) -> &[Option<Entity>];

    /// True if either leaf of `door` crosses any player's bounds
    fn does_touch_players(&self, door: &Door) -> bool {
        self.player_entities()
            .iter()
            .flatten()
            .any(|p| door.is_touching(&p.bounds))
    }
}

/// The level is considered a `World` of sorts. Players sit in fixed slots,
/// doors are run in spawn order.
pub struct Level {
    players: [Option<Entity>; MAXPLAYERS],
    doors: Vec<Door>,
    next_id: u32,
    snd_command: SndServerTx,
    tuning: DoorTuning,
    /// Milliseconds run so far
    pub level_time: u64,
}

impl Level {
    pub fn new(snd_command: SndServerTx, tuning: DoorTuning) -> Self {
        Self {
            players: [None; MAXPLAYERS],
            doors: Vec::new(),
            next_id: 1,
            snd_command,
            tuning,
            level_time: 0,
        }
    }

    pub fn tuning(&self) -> &DoorTuning {
        &self.tuning
    }

    /// Place a door with the level's tuning. Returns its id.
    pub fn spawn_door(&mut self, xy: Vec2, facing: Vec2) -> u32 {
        let tuning = self.tuning;
        let door = Door::with_tuning(xy, facing, tuning, self);
        let id = door.id();
        self.doors.push(door);
        id
    }

    /// Put a player in `slot`, replacing whoever was there. `None` if the
    /// slot is out of range.
    pub fn spawn_player(&mut self, slot: usize, xy: Vec2) -> Option<u32> {
        if slot >= MAXPLAYERS {
            warn!("Player slot {slot} out of range");
            return None;
        }
        let id = self.next_persistent_id();
        self.players[slot] = Some(Entity::new(
            id,
            EntityKind::Player,
            xy,
            Vec2::X,
            PLAYER_EXTENT,
        ));
        info!("Player {slot} joined as entity {id} at {xy}");
        Some(id)
    }

    pub fn remove_player(&mut self, slot: usize) -> Option<Entity> {
        let player = self.players.get_mut(slot)?.take();
        if player.is_some() {
            info!("Player {slot} left");
        }
        player
    }

    pub fn move_player(&mut self, slot: usize, xy: Vec2) {
        if let Some(player) = self.players.get_mut(slot).and_then(Option::as_mut) {
            player.set_xy(xy);
        }
    }

    pub fn player(&self, slot: usize) -> Option<&Entity> {
        self.players.get(slot).and_then(Option::as_ref)
    }

    /// The player in `slot` presses use. Every door in reach gets a
    /// `handle_door`. Returns true if any door was in reach.
    pub fn player_use(&mut self, slot: usize) -> bool {
        let Some(player) = self.player(slot).copied() else {
            return false;
        };

        let mut doors = mem::take(&mut self.doors);
        let mut used = false;
        for door in doors.iter_mut().filter(|d| d.can_be_handled_by(&player)) {
            debug!("Player {slot} uses door {}", door.id());
            door.handle_door(&player, &*self);
            used = true;
        }
        self.doors = doors;
        used
    }

    pub fn doors(&self) -> &[Door] {
        &self.doors
    }

    pub fn door(&self, id: u32) -> Option<&Door> {
        self.doors.iter().find(|d| d.id() == id)
    }

    /// Network view of every door
    pub fn snapshot(&self) -> Vec<NetDoor> {
        self.doors.iter().map(Door::net_entity).collect()
    }

    /// Run one tic of `dt_ms` milliseconds
    pub fn update(&mut self, dt_ms: u32) {
        profile!("level_update");
        self.level_time += dt_ms as u64;

        // Doors only read the world, so they come out while it is lent to them
        let mut doors = mem::take(&mut self.doors);
        {
            profile!("doors");
            for door in doors.iter_mut() {
                door.update(dt_ms, &*self);
            }
        }
        self.doors = doors;

        profile!("touch");
        self.touch_players();
    }

    /// Report each door and player whose bounds overlap
    fn touch_players(&self) {
        for door in &self.doors {
            let ent = door.entity();
            for player in self.players.iter().flatten() {
                if ent.can_touch(player) && door.is_touching(&player.bounds) {
                    ent.touch(player);
                }
            }
        }
    }
}

impl World for Level {
    fn next_persistent_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    fn emit_sound(&self, uid: usize, sfx: SfxName, xy: Vec2) {
        if let Err(e) = self.snd_command.send(SoundAction::StartSfx {
            uid,
            sfx,
            x: xy.x,
            y: xy.y,
        }) {
            warn!("Could not play {:?}: {e}", sfx);
        }
    }

    fn player_entities(&self) -> &[Option<Entity>] {
        &self.players
    }
}

#[cfg(test)]
mod tests {
    use std::sync::mpsc::channel;

    use glam::Vec2;
    use sound_traits::{SfxName, SoundAction};

    use super::{Level, World};
    use crate::{DoorState, DoorTuning, MAXPLAYERS};

    #[test]
    fn ids_are_unique_and_increasing() {
        let (tx, _rx) = channel();
        let mut level = Level::new(tx, DoorTuning::default());
        let a = level.spawn_door(Vec2::ZERO, Vec2::X);
        let b = level.spawn_player(0, Vec2::new(300.0, 0.0)).unwrap();
        let c = level.next_persistent_id();
        assert!(a < b && b < c);
    }

    #[test]
    fn player_slots() {
        let (tx, _rx) = channel();
        let mut level = Level::new(tx, DoorTuning::default());
        assert!(level.spawn_player(MAXPLAYERS, Vec2::ZERO).is_none());
        level.spawn_player(3, Vec2::ZERO);
        assert_eq!(level.player_entities().iter().flatten().count(), 1);

        level.move_player(3, Vec2::new(40.0, 0.0));
        assert_eq!(level.player(3).unwrap().centre(), Vec2::new(40.0, 0.0));

        assert!(level.remove_player(3).is_some());
        assert!(level.remove_player(3).is_none());
        assert!(level.remove_player(MAXPLAYERS + 1).is_none());
    }

    #[test]
    fn use_only_reaches_nearby_doors() {
        let (tx, rx) = channel();
        let mut level = Level::new(tx, DoorTuning::default());
        let near = level.spawn_door(Vec2::new(100.0, 100.0), Vec2::X);
        let far = level.spawn_door(Vec2::new(600.0, 100.0), Vec2::X);
        level.spawn_player(0, Vec2::new(130.0, 70.0));

        assert!(level.player_use(0));
        assert_eq!(level.door(near).unwrap().state(), DoorState::Opening);
        assert_eq!(level.door(far).unwrap().state(), DoorState::Closed);
        assert!(matches!(
            rx.try_recv(),
            Ok(SoundAction::StartSfx {
                sfx: SfxName::DoorOpen,
                ..
            })
        ));

        assert!(!level.player_use(5));
    }

    #[test]
    fn runs_doors_each_tic() {
        let (tx, _rx) = channel();
        let mut level = Level::new(tx, DoorTuning::default());
        let id = level.spawn_door(Vec2::new(100.0, 100.0), Vec2::X);
        level.spawn_player(0, Vec2::new(130.0, 70.0));
        level.player_use(0);

        for _ in 0..200 {
            level.update(50);
        }
        assert_eq!(level.level_time, 10_000);
        assert_eq!(level.doors().len(), 1);
        assert!(level.door(id).unwrap().is_opened());
        assert_eq!(level.snapshot()[0].entity.orientation, 90);
    }

    #[test]
    fn closed_channel_does_not_panic() {
        let (tx, rx) = channel();
        drop(rx);
        let level = Level::new(tx, DoorTuning::default());
        level.emit_sound(1, SfxName::DoorOpen, Vec2::ZERO);
    }
}

//! Scripted runs. Every scenario is a level with one door hinged at the
//! origin and a list of cues fired at fixed tics.

use gameplay::glam::Vec2;
use gameplay::log::{debug, info};
use gameplay::{DoorState, Level};
use math::perpendicular;
use net::{decode, IoBuffer, Message, NetError, NetMessage, TeamTextMessage, TextMessage};

use crate::cli::Scenario;

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Join(usize, Vec2),
    Move(usize, Vec2),
    Leave(usize),
    Use(usize),
    Say {
        slot: usize,
        team: bool,
        text: &'static str,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Cue {
    pub tic: u32,
    pub action: Action,
}

const fn cue(tic: u32, action: Action) -> Cue {
    Cue { tic, action }
}

/// In reach of the hinge and inside the auto-close box, on the side the
/// door swings away from
fn opener_spot(facing: Vec2) -> Vec2 {
    facing * 30.0 - perpendicular(facing) * 30.0
}

/// In the path of the swing
fn blocker_spot(facing: Vec2) -> Vec2 {
    facing * 50.0 + perpendicular(facing) * 50.0
}

/// Past the open door, clear of the swing back
fn through_spot(facing: Vec2, distance: f32) -> Vec2 {
    facing * 30.0 + perpendicular(facing) * distance
}

impl Scenario {
    /// Tics it takes for the script to play out with 50ms tics
    pub fn default_tics(self) -> u32 {
        match self {
            Scenario::Walkthrough => 450,
            Scenario::Blocked => 650,
            Scenario::Linger => 850,
            Scenario::Chat => 450,
        }
    }

    pub fn cues(self, facing: Vec2) -> Vec<Cue> {
        let opener = opener_spot(facing);
        match self {
            Scenario::Walkthrough => vec![
                cue(0, Action::Join(0, opener)),
                cue(5, Action::Use(0)),
                cue(170, Action::Move(0, through_spot(facing, 80.0))),
                cue(200, Action::Move(0, through_spot(facing, 150.0))),
            ],
            Scenario::Blocked => vec![
                cue(0, Action::Join(0, opener)),
                cue(0, Action::Join(1, blocker_spot(facing))),
                cue(5, Action::Use(0)),
                cue(40, Action::Use(1)),
                cue(180, Action::Leave(1)),
                cue(200, Action::Use(0)),
                cue(360, Action::Leave(0)),
            ],
            Scenario::Linger => vec![
                cue(0, Action::Join(0, opener)),
                cue(5, Action::Use(0)),
                cue(600, Action::Leave(0)),
            ],
            Scenario::Chat => vec![
                cue(0, Action::Join(0, opener)),
                cue(0, Action::Join(1, facing * -60.0)),
                cue(
                    5,
                    Action::Say {
                        slot: 0,
                        team: true,
                        text: "opening the door",
                    },
                ),
                cue(6, Action::Use(0)),
                cue(
                    10,
                    Action::Say {
                        slot: 1,
                        team: false,
                        text: "after you",
                    },
                ),
                cue(160, Action::Leave(0)),
                cue(
                    161,
                    Action::Say {
                        slot: 1,
                        team: true,
                        text: "door's open, going through",
                    },
                ),
            ],
        }
    }
}

/// Plays cues into a level one tic at a time and reports every door change
pub struct Runner {
    level: Level,
    cues: Vec<Cue>,
    next_cue: usize,
    tic: u32,
    tic_ms: u32,
    snapshots: bool,
    /// Last reported state and blocked flag per door
    last: Vec<(DoorState, bool)>,
    history: Vec<(u32, DoorState, bool)>,
    messages: Vec<Message>,
}

impl Runner {
    pub fn new(
        mut level: Level,
        scenario: Scenario,
        facing: Vec2,
        tic_ms: u32,
        snapshots: bool,
    ) -> Self {
        let id = level.spawn_door(Vec2::ZERO, facing);
        info!(
            "Scenario {:?}: door {id} hinged {:?}",
            scenario,
            level.door(id).map(|d| d.hinge())
        );
        let mut cues = scenario.cues(facing);
        cues.sort_by_key(|c| c.tic);
        let last = level
            .doors()
            .iter()
            .map(|d| (d.state(), d.is_blocked()))
            .collect();
        Self {
            level,
            cues,
            next_cue: 0,
            tic: 0,
            tic_ms,
            snapshots,
            last,
            history: Vec::new(),
            messages: Vec::new(),
        }
    }

    pub fn tic(&mut self) -> Result<(), NetError> {
        while let Some(cue) = self.cues.get(self.next_cue) {
            if cue.tic > self.tic {
                break;
            }
            let action = cue.action.clone();
            self.next_cue += 1;
            self.apply(action)?;
        }

        self.level.update(self.tic_ms);
        self.report()?;
        self.tic += 1;
        Ok(())
    }

    pub fn run(&mut self, tics: u32) -> Result<(), NetError> {
        for _ in 0..tics {
            self.tic()?;
        }
        Ok(())
    }

    fn apply(&mut self, action: Action) -> Result<(), NetError> {
        debug!("tic {}: {:?}", self.tic, action);
        match action {
            Action::Join(slot, xy) => {
                self.level.spawn_player(slot, xy);
            }
            Action::Move(slot, xy) => self.level.move_player(slot, xy),
            Action::Leave(slot) => {
                self.level.remove_player(slot);
            }
            Action::Use(slot) => {
                if !self.level.player_use(slot) {
                    info!("tic {}: player {slot} found nothing to use", self.tic);
                }
            }
            Action::Say { slot, team, text } => self.say(slot, team, text)?,
        }
        Ok(())
    }

    /// Send chat through the wire format and read it back as a peer would
    fn say(&mut self, slot: usize, team: bool, text: &str) -> Result<(), NetError> {
        let mut buf = IoBuffer::new();
        let player_id = slot as u8;
        if team {
            TeamTextMessage {
                player_id,
                message: text.to_owned(),
            }
            .write(&mut buf)?;
        } else {
            TextMessage {
                player_id,
                message: text.to_owned(),
            }
            .write(&mut buf)?;
        }
        debug!("chat bytes {}", hex(buf.as_bytes()));

        buf.rewind();
        let msg = decode(&mut buf)?;
        match &msg {
            Message::TeamText(m) => info!("[team] player {}: {}", m.player_id, m.message),
            Message::Text(m) => info!("[all] player {}: {}", m.player_id, m.message),
        }
        self.messages.push(msg);
        Ok(())
    }

    fn report(&mut self) -> Result<(), NetError> {
        for (door, last) in self.level.doors().iter().zip(self.last.iter_mut()) {
            let now = (door.state(), door.is_blocked());
            if now == *last {
                continue;
            }
            *last = now;
            self.history.push((self.tic, now.0, now.1));

            info!(
                "tic {:>4}: door {} {:?}{} at {:.0} deg",
                self.tic,
                door.id(),
                now.0,
                if now.1 { " (blocked)" } else { "" },
                door.orientation().degrees()
            );
            if self.snapshots {
                let mut buf = IoBuffer::new();
                door.net_entity().write(&mut buf)?;
                println!("{:>5} {}", self.tic, hex(buf.as_bytes()));
            }
        }
        Ok(())
    }

    pub fn level(&self) -> &Level {
        &self.level
    }

    pub fn current_tic(&self) -> u32 {
        self.tic
    }

    /// Every door change seen, as (tic, state, blocked)
    pub fn history(&self) -> &[(u32, DoorState, bool)] {
        &self.history
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }
}

fn hex(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| format!("{b:02x}"))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use std::sync::mpsc::channel;

    use gameplay::{DoorState, DoorTuning, Level};
    use net::Message;

    use super::Runner;
    use crate::cli::{Facing, Scenario};

    fn run(scenario: Scenario, facing: Facing) -> Runner {
        let (tx, _rx) = channel();
        let level = Level::new(tx, DoorTuning::default());
        let mut runner = Runner::new(level, scenario, facing.vector(), 50, false);
        runner.run(scenario.default_tics()).unwrap();
        runner
    }

    fn states(runner: &Runner) -> Vec<DoorState> {
        let mut seen: Vec<DoorState> = runner.history().iter().map(|h| h.1).collect();
        seen.dedup();
        seen
    }

    #[test]
    fn walkthrough_every_facing() {
        for facing in [Facing::North, Facing::South, Facing::East, Facing::West] {
            let runner = run(Scenario::Walkthrough, facing);
            assert_eq!(
                states(&runner),
                vec![
                    DoorState::Opening,
                    DoorState::Opened,
                    DoorState::Closing,
                    DoorState::Closed
                ],
                "{facing:?}"
            );
            assert!(runner.history().iter().all(|h| !h.2), "{facing:?}");
        }
    }

    #[test]
    fn blocked_gets_reversed() {
        for facing in [Facing::North, Facing::South, Facing::East, Facing::West] {
            let runner = run(Scenario::Blocked, facing);
            let h = runner.history();
            assert!(
                h.iter().any(|&(_, s, b)| s == DoorState::Opening && b),
                "{facing:?}"
            );
            assert!(runner.level().doors()[0].is_closed(), "{facing:?}");
            assert!(states(&runner).contains(&DoorState::Opened));
        }
    }

    #[test]
    fn linger_holds_past_the_wait() {
        let runner = run(Scenario::Linger, Facing::East);
        let opened = runner
            .history()
            .iter()
            .find(|h| h.1 == DoorState::Opened)
            .unwrap()
            .0;
        let closing = runner
            .history()
            .iter()
            .find(|h| h.1 == DoorState::Closing)
            .unwrap()
            .0;
        assert!(closing >= 600, "closed on the player at {closing}");
        assert!(closing - opened > 100);
        assert!(runner.level().doors()[0].is_closed());
    }

    #[test]
    fn chat_goes_over_the_wire() {
        let runner = run(Scenario::Chat, Facing::South);
        let msgs = runner.messages();
        assert_eq!(msgs.len(), 3);
        assert!(matches!(&msgs[0], Message::TeamText(m) if m.player_id == 0));
        assert!(matches!(&msgs[1], Message::Text(m) if m.message == "after you"));
        assert!(runner.level().doors()[0].is_closing() || runner.level().doors()[0].is_closed());
    }
}

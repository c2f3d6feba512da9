use std::str::FromStr;

use argh::FromArgs;
use gameplay::glam::Vec2;
use gameplay::log;
use serde::{Deserialize, Serialize};

/// Drive scripted door scenarios headless and report what the doors do
#[derive(Debug, Clone, FromArgs)]
pub struct CLIOptions {
    /// verbose level: off, error, warn, info, debug, trace
    #[argh(option)]
    pub verbose: Option<log::LevelFilter>,
    /// scenario to run <walkthrough(default), blocked, linger, chat>
    #[argh(option, default = "Scenario::Walkthrough")]
    pub scenario: Scenario,
    /// which way the door faces when shut <north, south, east, west>
    #[argh(option)]
    pub facing: Option<Facing>,
    /// number of tics to run, 0 runs the scenario's own length
    #[argh(option, default = "0")]
    pub tics: u32,
    /// length of one tic in milliseconds
    #[argh(option)]
    pub tic_ms: Option<u32>,
    /// pace tics against the wall clock instead of running flat out
    #[argh(option)]
    pub realtime: Option<bool>,
    /// print the encoded door snapshot whenever a door changes state
    #[argh(option)]
    pub snapshots: Option<bool>,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Scenario {
    /// One player opens the door, walks through and leaves it to shut
    #[default]
    Walkthrough,
    /// A second player stands in the swing and gets the door reversed on them
    Blocked,
    /// The opener stays in the doorway, holding it open past the wait
    Linger,
    /// Two players open a door and talk over team chat
    Chat,
}

impl FromStr for Scenario {
    type Err = std::io::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "walkthrough" => Ok(Self::Walkthrough),
            "blocked" => Ok(Self::Blocked),
            "linger" => Ok(Self::Linger),
            "chat" => Ok(Self::Chat),
            _ => Err(std::io::Error::new(
                std::io::ErrorKind::Unsupported,
                "Invalid scenario",
            )),
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Facing {
    North,
    South,
    #[default]
    East,
    West,
}

impl Facing {
    pub fn vector(self) -> Vec2 {
        match self {
            Facing::North => Vec2::new(0.0, -1.0),
            Facing::South => Vec2::new(0.0, 1.0),
            Facing::East => Vec2::X,
            Facing::West => Vec2::new(-1.0, 0.0),
        }
    }
}

impl FromStr for Facing {
    type Err = std::io::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "north" | "n" => Ok(Self::North),
            "south" | "s" => Ok(Self::South),
            "east" | "e" => Ok(Self::East),
            "west" | "w" => Ok(Self::West),
            _ => Err(std::io::Error::new(
                std::io::ErrorKind::Unsupported,
                "Invalid facing",
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{CLIOptions, Facing, Scenario};
    use argh::FromArgs;

    #[test]
    fn parse_args() {
        let opts = CLIOptions::from_args(
            &["doorsim"],
            &["--scenario", "Blocked", "--facing", "n", "--tics", "300"],
        )
        .unwrap();
        assert_eq!(opts.scenario, Scenario::Blocked);
        assert_eq!(opts.facing, Some(Facing::North));
        assert_eq!(opts.tics, 300);
        assert!(opts.tic_ms.is_none());
    }

    #[test]
    fn bad_scenario_is_rejected() {
        assert!(CLIOptions::from_args(&["doorsim"], &["--scenario", "portal"]).is_err());
    }
}

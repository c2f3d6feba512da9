//! Which end of the frame a door swings about, and the geometry that
//! follows from it.
//!
//! Each hinge kind owns a fixed row of [`HINGE_TABLE`]: its resting angle,
//! the side its rear face sits on, and the rule choosing which way it opens.
//! The table is indexed by the discriminant, so adding a kind without a row
//! fails to compile.

use std::{
    error::Error,
    f32::consts::{FRAC_PI_2, PI},
    fmt,
};

use glam::Vec2;
use log::warn;
use math::{perpendicular, vec2_ma, Angle};

use crate::{DOOR_LENGTH, DOOR_WIDTH};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum DoorHinge {
    NorthEnd = 0,
    SouthEnd = 1,
    EastEnd = 2,
    WestEnd = 3,
}

/// Per kind behaviour. Stateless, looked up by discriminant.
struct HingeGeometry {
    /// Resting angle when shut, in radians
    closed: f32,
    /// Which side of the leaf, along the clockwise perpendicular of the
    /// facing, the rear face sits on
    rear_side: f32,
    /// Resting angle when open, given the door origin and the actor's centre
    open_toward: fn(door: Vec2, actor: Vec2) -> f32,
}

/// Doors shut along the y axis swing east or west, away from the actor.
fn open_across_x(door: Vec2, actor: Vec2) -> f32 {
    if actor.x < door.x { 0.0 } else { PI }
}

/// Doors shut along the x axis swing north or south, away from the actor.
fn open_across_y(door: Vec2, actor: Vec2) -> f32 {
    if actor.y < door.y {
        FRAC_PI_2
    } else {
        3.0 * FRAC_PI_2
    }
}

const HINGE_TABLE: [HingeGeometry; 4] = [
    // NorthEnd
    HingeGeometry {
        closed: 3.0 * FRAC_PI_2,
        rear_side: 1.0,
        open_toward: open_across_x,
    },
    // SouthEnd
    HingeGeometry {
        closed: FRAC_PI_2,
        rear_side: -1.0,
        open_toward: open_across_x,
    },
    // EastEnd
    HingeGeometry {
        closed: 0.0,
        rear_side: 1.0,
        open_toward: open_across_y,
    },
    // WestEnd
    HingeGeometry {
        closed: PI,
        rear_side: -1.0,
        open_toward: open_across_y,
    },
];

impl DoorHinge {
    const ALL: [DoorHinge; 4] = [
        DoorHinge::NorthEnd,
        DoorHinge::SouthEnd,
        DoorHinge::EastEnd,
        DoorHinge::WestEnd,
    ];

    #[inline]
    fn geometry(self) -> &'static HingeGeometry {
        &HINGE_TABLE[self as usize]
    }

    /// Classify the facing a door was placed with. X wins over Y; a zero
    /// vector falls back to `EastEnd`.
    pub fn from_facing(facing: Vec2) -> Self {
        if facing.x > 0.0 {
            DoorHinge::EastEnd
        } else if facing.x < 0.0 {
            DoorHinge::WestEnd
        } else if facing.y > 0.0 {
            DoorHinge::SouthEnd
        } else if facing.y < 0.0 {
            DoorHinge::NorthEnd
        } else {
            DoorHinge::EastEnd
        }
    }

    pub fn closed_orientation(self) -> Angle {
        Angle::new(self.geometry().closed)
    }

    /// The hinge point of the rear face, `DOOR_WIDTH` off the front hinge at
    /// `xy` for a leaf currently pointing along `facing`.
    pub fn rear_hinge_position(self, xy: Vec2, facing: Vec2) -> Vec2 {
        vec2_ma(
            xy,
            perpendicular(facing),
            DOOR_WIDTH * self.geometry().rear_side,
        )
    }

    /// The rear face's handle, a leaf length out from the rear hinge.
    pub fn rear_handle_position(self, rear_hinge: Vec2, facing: Vec2) -> Vec2 {
        vec2_ma(rear_hinge, facing, DOOR_LENGTH)
    }

    /// Where the door comes to rest when opened by an actor standing at
    /// `actor`. The door always swings away from the actor.
    pub fn open_destination(self, door: Vec2, actor: Vec2) -> Angle {
        Angle::new((self.geometry().open_toward)(door, actor))
    }

    pub const fn net_value(self) -> u8 {
        self as u8
    }

    /// Tolerant decode for remote input: anything unknown becomes `NorthEnd`.
    pub fn from_net_value(value: u8) -> Self {
        DoorHinge::try_from(value).unwrap_or_else(|e| {
            warn!("{e}, using NorthEnd");
            DoorHinge::NorthEnd
        })
    }
}

impl TryFrom<u8> for DoorHinge {
    type Error = InvalidHinge;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        DoorHinge::ALL
            .into_iter()
            .find(|h| h.net_value() == value)
            .ok_or(InvalidHinge(value))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidHinge(pub u8);

impl Error for InvalidHinge {}

impl fmt::Display for InvalidHinge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid door hinge code {}", self.0)
    }
}

//! Interactive world objects: swinging doors, the entity base they are
//! built on, and the level that runs them each tic.

mod defs;
pub mod entity;
pub(crate) mod env;
mod level;
mod orientation;
mod timer;
mod tuning;

pub use defs::*;
pub use entity::{Entity, EntityKind, OnTouch};
pub use env::doors::{Door, DoorState};
pub use env::hinge::{DoorHinge, InvalidHinge};
pub use glam;
pub use level::{Level, World};
pub use log;
pub use orientation::{SmoothOrientation, SMOOTHING_EPSILON};
pub use timer::Timer;
pub use tuning::DoorTuning;

//! Wire format for state replication and chat.
//!
//! Every record is a fixed sequence of fixed width primitives in network
//! byte order. Nothing is self describing: reader and writer must agree on
//! the field order, which is the order the fields are declared in.
//!
//! ```text,ignore
//!   NetEntity   ┌──────┬────────┬──────┬──────┬─────────────┐
//!               │ kind │   id   │  x   │  y   │ orientation │
//!               │  u8  │  u16   │ i16  │ i16  │ u16 degrees │
//!               └──────┴────────┴──────┴──────┴─────────────┘
//!   NetDoor     ┌───────────┬───────┐
//!               │ NetEntity │ hinge │
//!               │           │  u8   │
//!               └───────────┴───────┘
//!   TeamText    ┌──────┬───────────┬──────────┬──────────────┐
//!               │ tag  │ player_id │ len u16  │ utf-8 bytes  │
//!               └──────┴───────────┴──────────┴──────────────┘
//! ```

mod entity;
mod io;
mod messages;

pub use entity::*;
pub use io::*;
pub use messages::*;

use std::{error::Error, fmt};

#[derive(Debug)]
pub enum NetError {
    /// The buffer ran out or could not be written
    Io(std::io::Error),
    /// A message tag that no known message uses
    UnknownMessage(u8),
    /// Strings are prefixed by a u16 length, this one does not fit
    StringTooLong(usize),
    InvalidUtf8,
}

impl Error for NetError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            NetError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl fmt::Display for NetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NetError::Io(e) => write!(f, "buffer error: {}", e),
            NetError::UnknownMessage(t) => write!(f, "unknown message tag 0x{:02x}", t),
            NetError::StringTooLong(l) => write!(f, "string of {} bytes is too long", l),
            NetError::InvalidUtf8 => write!(f, "string is not valid utf-8"),
        }
    }
}

impl From<std::io::Error> for NetError {
    fn from(e: std::io::Error) -> Self {
        NetError::Io(e)
    }
}

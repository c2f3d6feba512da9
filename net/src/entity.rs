use crate::{IoBuffer, NetError};

/// The base projection every replicated entity carries.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct NetEntity {
    /// Entity type tag
    pub kind: u8,
    pub id: u16,
    pub x: i16,
    pub y: i16,
    /// Whole degrees, `0..360`
    pub orientation: u16,
}

impl NetEntity {
    pub fn write(&self, buf: &mut IoBuffer) -> Result<(), NetError> {
        buf.put_u8(self.kind)?;
        buf.put_u16(self.id)?;
        buf.put_i16(self.x)?;
        buf.put_i16(self.y)?;
        buf.put_u16(self.orientation)
    }

    pub fn read(buf: &mut IoBuffer) -> Result<Self, NetError> {
        Ok(Self {
            kind: buf.get_u8()?,
            id: buf.get_u16()?,
            x: buf.get_i16()?,
            y: buf.get_i16()?,
            orientation: buf.get_u16()?,
        })
    }
}

/// A door adds exactly one field to the base projection.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct NetDoor {
    pub entity: NetEntity,
    /// Hinge code, see `DoorHinge::net_value` in gameplay
    pub hinge: u8,
}

impl NetDoor {
    pub fn write(&self, buf: &mut IoBuffer) -> Result<(), NetError> {
        self.entity.write(buf)?;
        buf.put_u8(self.hinge)
    }

    pub fn read(buf: &mut IoBuffer) -> Result<Self, NetError> {
        let entity = NetEntity::read(buf)?;
        Ok(Self {
            entity,
            hinge: buf.get_u8()?,
        })
    }
}

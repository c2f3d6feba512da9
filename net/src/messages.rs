use log::warn;

use crate::{IoBuffer, NetError};

/// Leading tag byte of every message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum MessageKind {
    Text = 0x15,
    TeamText = 0x16,
}

impl TryFrom<u8> for MessageKind {
    type Error = NetError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0x15 => Ok(MessageKind::Text),
            0x16 => Ok(MessageKind::TeamText),
            _ => Err(NetError::UnknownMessage(value)),
        }
    }
}

pub trait NetMessage: Sized {
    const KIND: MessageKind;

    fn write_body(&self, buf: &mut IoBuffer) -> Result<(), NetError>;

    fn read_body(buf: &mut IoBuffer) -> Result<Self, NetError>;

    /// Tag then body
    fn write(&self, buf: &mut IoBuffer) -> Result<(), NetError> {
        buf.put_u8(Self::KIND as u8)?;
        self.write_body(buf)
    }
}

/// Chat to everyone
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextMessage {
    pub player_id: u8,
    pub message: String,
}

/// Chat to the sender's team only
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamTextMessage {
    pub player_id: u8,
    pub message: String,
}

impl NetMessage for TextMessage {
    const KIND: MessageKind = MessageKind::Text;

    fn write_body(&self, buf: &mut IoBuffer) -> Result<(), NetError> {
        buf.put_u8(self.player_id)?;
        buf.put_string(&self.message)
    }

    fn read_body(buf: &mut IoBuffer) -> Result<Self, NetError> {
        Ok(Self {
            player_id: buf.get_u8()?,
            message: buf.get_string()?,
        })
    }
}

impl NetMessage for TeamTextMessage {
    const KIND: MessageKind = MessageKind::TeamText;

    fn write_body(&self, buf: &mut IoBuffer) -> Result<(), NetError> {
        buf.put_u8(self.player_id)?;
        buf.put_string(&self.message)
    }

    fn read_body(buf: &mut IoBuffer) -> Result<Self, NetError> {
        Ok(Self {
            player_id: buf.get_u8()?,
            message: buf.get_string()?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    Text(TextMessage),
    TeamText(TeamTextMessage),
}

/// Read one tagged message from the cursor.
pub fn decode(buf: &mut IoBuffer) -> Result<Message, NetError> {
    let tag = buf.get_u8()?;
    let kind = MessageKind::try_from(tag).inspect_err(|_| {
        warn!("Dropping message with unknown tag 0x{tag:02x}");
    })?;
    Ok(match kind {
        MessageKind::Text => Message::Text(TextMessage::read_body(buf)?),
        MessageKind::TeamText => Message::TeamText(TeamTextMessage::read_body(buf)?),
    })
}

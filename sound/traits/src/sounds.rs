/// Every sound effect the door subsystem can emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SfxName {
    /// Door starts swinging open
    DoorOpen,
    /// Door starts swinging shut
    DoorClose,
    /// Something is in the way of an opening door
    DoorOpenBlocked,
    /// Something is in the way of a closing door
    DoorCloseBlocked,
}

impl SfxName {
    /// Name of the sample a sound server should load for this effect.
    pub const fn sample_name(self) -> &'static str {
        match self {
            SfxName::DoorOpen => "door_open",
            SfxName::DoorClose => "door_close",
            SfxName::DoorOpenBlocked => "door_open_blocked",
            SfxName::DoorCloseBlocked => "door_close_blocked",
        }
    }

    pub const ALL: [SfxName; 4] = [
        SfxName::DoorOpen,
        SfxName::DoorClose,
        SfxName::DoorOpenBlocked,
        SfxName::DoorCloseBlocked,
    ];
}

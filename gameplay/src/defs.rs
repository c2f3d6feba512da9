/// The maximum number of players, multiplayer/networking.
pub const MAXPLAYERS: usize = 32;

/// Length of a door leaf from hinge to handle.
pub const DOOR_LENGTH: f32 = 64.0;
/// Thickness of a door leaf, the gap between the front and rear faces.
pub const DOOR_WIDTH: f32 = 10.0;

/// Side of the square box a player occupies
pub const PLAYER_EXTENT: f32 = 24.0;

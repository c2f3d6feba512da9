pub mod doors;
pub mod hinge;

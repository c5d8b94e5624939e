pub mod controls;
pub mod messages;

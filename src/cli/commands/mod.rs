pub mod checkin;
pub mod end;
pub mod location;
pub mod log;
pub mod pause;
pub mod quit;
pub mod resume;
pub mod save;
pub mod show;
pub mod status;

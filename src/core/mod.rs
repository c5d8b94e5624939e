pub mod clock;
pub mod log;
pub mod session;
pub mod tracker;

pub use clock::{Clock, SystemClock};
pub use session::{EndOutcome, TimeTracker};
pub use tracker::{PauseToggle, SessionTracker};

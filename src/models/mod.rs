pub mod session_record;
pub mod session_state;

pub use session_record::{COLUMNS, SessionRecord};
pub use session_state::SessionState;

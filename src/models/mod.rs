mod question;
mod selection;
mod state;

pub use question::Question;
pub use selection::SelectionTracker;
pub use state::{Outcome, SessionState};

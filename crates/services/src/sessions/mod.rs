mod controller;
mod progress;
mod state;
mod timer;
mod view;

// Public API of the session subsystem.
pub use crate::error::SessionError;
pub use controller::SessionController;
pub use progress::ViewProgress;
pub use state::{Effect, Screen, SessionState, View};
pub use timer::CategoryTimer;
pub use view::CardView;

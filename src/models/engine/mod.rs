pub mod constants;
pub mod error;
pub mod hit_window;
pub mod note;
pub mod session_state;

pub use constants::*;
pub use error::EngineError;
pub use hit_window::HitWindow;
pub use note::{NoteData, NoteId};
pub use session_state::SessionState;

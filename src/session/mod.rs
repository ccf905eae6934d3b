//! Per-session facade for the game layer.
//!
//! The UI owns score, lives and rendering. It asks a session for rounds,
//! sends back the player's arrangement, and gets a `Verdict`.

mod play;

pub use play::{PuzzleSession, SessionCheckpoint, Verdict};

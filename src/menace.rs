//! MENACE learning system
//!
//! Matchboxes full of beads, a policy that draws from them, the game engine
//! that asks for draws, and the feedback that refills or drains the boxes once
//! a game is over.

pub mod engine;
pub mod feedback;
pub mod matchbox;
pub mod policy;
pub mod record;
pub mod session;
pub mod store;
pub mod trail;

// Re-export main types
pub use engine::{GameEnd, GameEngine, Phase};
pub use feedback::{ClassicFeedback, FeedbackRule, ReinforcementValues};
pub use matchbox::{DEFAULT_INITIAL_BEADS, Matchbox, WeightVector};
pub use policy::{Choice, MovePolicy, bead_at};
pub use record::Record;
pub use session::{Session, SessionConfig, Verbosity};
pub use store::{MatchboxMap, MatchboxStore};
pub use trail::{Trail, TrailEntry};

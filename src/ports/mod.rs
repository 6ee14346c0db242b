//! Ports (trait boundaries) for external collaborators.
//!
//! This module defines the interfaces between the learning core and the
//! outside world: persistence, the source of human moves, and narration.
//! Implementations live in the adapters module.

pub mod move_source;
pub mod observer;
pub mod repository;

pub use move_source::{MoveRequest, MoveSource};
pub use observer::{GameObserver, SilentObserver};
pub use repository::SessionRepository;

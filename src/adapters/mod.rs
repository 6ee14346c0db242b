//! Adapters implementing the ports.
//!
//! This module contains infrastructure implementations of the traits defined
//! in the ports module. Following hexagonal architecture, adapters depend on
//! the ports, not the other way around.

pub mod console_input;
pub mod file_repository;
pub mod in_memory_repository;
pub mod observers;
pub mod random_move_source;

pub use console_input::ConsoleMoveSource;
pub use file_repository::FileRepository;
pub use in_memory_repository::InMemoryRepository;
pub use observers::{ConsoleNarrator, ProgressObserver};
pub use random_move_source::RandomMoveSource;

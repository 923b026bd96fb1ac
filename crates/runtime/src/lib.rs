//! Session layer tying the reducer, content tables, and persistence together.
//!
//! `oakwood-runtime` owns the mutable half of a running game: the live
//! [`oakwood_core::GameState`], the active interaction pointer, and the save
//! slot. Static content stays read-only behind the oracle traits. All state
//! mutation funnels through [`Session::dispatch`], which serializes writers
//! and intercepts persistence actions before they reach the reducer.

pub mod repository;
pub mod session;

pub use repository::{FileSaveRepository, InMemorySaveRepository, RepositoryError, SaveRepository};
pub use session::{ActiveInteraction, Session};

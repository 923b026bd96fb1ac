//! Errors raised when a required oracle is missing from the environment.

/// A lookup was attempted against an oracle that was not provided.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum OracleError {
    #[error("item oracle not available")]
    ItemsNotAvailable,

    #[error("NPC oracle not available")]
    NpcsNotAvailable,

    #[error("enemy oracle not available")]
    EnemiesNotAvailable,

    #[error("area oracle not available")]
    AreasNotAvailable,

    #[error("world oracle not available")]
    WorldNotAvailable,

    #[error("interaction oracle not available")]
    InteractionsNotAvailable,
}

use thiserror::Error;

/// Errors surfaced by the fortune command layer.
///
/// Reward-level configuration problems (missing fields, unreadable dump files,
/// malformed SNBT) never appear here; those are logged and the offending
/// reward is skipped so the rest of the draw still completes.
#[derive(Debug, Error)]
pub enum FortuneError {
    /// The fortune catalog has no usable entries.
    #[error("the fortune catalog is empty")]
    EmptyCatalog,

    /// A player-only command form was invoked from the console.
    #[error("only players can use this command form")]
    NotAPlayer,

    /// A non-operator attempted an operator-only form.
    #[error("only operators can use this command form")]
    NotOperator,

    /// The dump form was used with nothing in hand.
    #[error("no item is being held")]
    EmptyHand,

    /// A persistence operation failed (dump file write, etc.).
    #[error("persistence error: {0}")]
    Persist(#[from] anyhow::Error),
}

use thiserror::Error;

/// Outcome kinds for a collaborator call.
///
/// Every wrapper resolves to data, `NotFound`, or `Unreachable`; callers
/// match on the kind instead of inspecting transport errors. Timeouts,
/// refused connections, unusable bodies and unexpected statuses all
/// collapse into `Unreachable`; the caller's handling is the same.
#[derive(Debug, Error)]
pub enum CollaboratorError {
    #[error("{0}")]
    NotFound(String),

    #[error("could not reach the {0} service")]
    Unreachable(&'static str),
}

use crate::domain::Spawned;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ForkError {
    #[error("fork failed: {0}")]
    Os(#[from] nix::Error),
}

#[mockall::automock]
pub trait Forker: std::fmt::Debug + Send + Sync {
    /// Duplicates the calling process. On success this returns in both
    /// processes, distinguished by the variant; on failure no child was
    /// created and it returns only in the caller.
    fn fork(&self) -> Result<Spawned, ForkError>;
}

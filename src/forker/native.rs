use nix::unistd::{self, ForkResult};

use crate::domain::Spawned;
use crate::forker::traits::{ForkError, Forker};

/// Forker backed by the real fork(2) system call.
#[derive(Clone, Copy, Debug, Default)]
pub struct NativeForker;

impl Forker for NativeForker {
    fn fork(&self) -> Result<Spawned, ForkError> {
        // SAFETY: the child side never allocates or takes locks, it only
        // reports Spawned::Child so the caller can _exit right away.
        let res = unsafe { unistd::fork() }?;
        Ok(match res {
            ForkResult::Parent { child } => Spawned::Parent { child },
            ForkResult::Child => Spawned::Child,
        })
    }
}

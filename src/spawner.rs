use std::io::Write;
use std::thread;

use crate::domain::{RunPlan, Spawned};
use crate::forker::traits::{ForkError, Forker};

/// Which side of a fork the caller is on once [`run`] returns.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    /// The loop ran to completion in the original process.
    Parent,
    /// The caller is a freshly forked child and must terminate with
    /// status 0 without doing anything else.
    Child,
}

#[derive(Debug, thiserror::Error)]
pub enum SpawnError {
    #[error(transparent)]
    Fork(#[from] ForkError),
    #[error("writing output failed: {0}")]
    Output(#[from] std::io::Error),
}

/// Spawns `plan.count` children, none of which get reaped here.
///
/// Each child exits immediately, so until something collects its exit
/// status it sits in the process table as a zombie. The parent logs one
/// `zombie: forked <pid>` line per child, pauses, and finishes with a
/// `zombie: done` marker that carries no trailing newline.
///
/// A fork failure aborts the loop; no `forked` line is printed for it.
pub fn run(forker: &dyn Forker, plan: &RunPlan, out: &mut dyn Write) -> Result<Flow, SpawnError> {
    for iteration in 0..plan.count {
        match forker.fork() {
            Ok(Spawned::Child) => return Ok(Flow::Child),
            Ok(Spawned::Parent { child }) => {
                tracing::debug!(iteration, pid = child.as_raw(), "forked child");
                writeln!(out, "zombie: forked {child}")?;
                out.flush()?;
                thread::sleep(plan.pause);
            }
            Err(e) => {
                tracing::error!(iteration, error = %e, "fork failed, aborting");
                return Err(e.into());
            }
        }
    }

    write!(out, "zombie: done")?;
    out.flush()?;
    Ok(Flow::Parent)
}

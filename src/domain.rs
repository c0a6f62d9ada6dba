use std::time::Duration;

use nix::unistd::Pid;

/// Outcome of one process duplication, one variant per control path.
///
/// fork(2) returns in two processes at once; this makes the two sides
/// structural instead of a sign check on a shared return value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Spawned {
    /// The newly created process. It must terminate immediately and do
    /// nothing else, in particular it must not write to stdout.
    Child,
    /// The original process, holding the id of the child it just created.
    Parent { child: Pid },
}

/// How many children to spawn and how long the parent pauses between forks.
#[derive(Clone, Debug)]
pub struct RunPlan {
    pub count: u32,
    pub pause: Duration,
}

impl Default for RunPlan {
    fn default() -> Self {
        RunPlan {
            count: 100,
            pause: Duration::from_secs(1),
        }
    }
}

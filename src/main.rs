use std::panic;

use tracing_subscriber::EnvFilter;

use crate::domain::RunPlan;
use crate::forker::native::NativeForker;
use crate::spawner::{Flow, run};

mod domain;
mod forker;
mod spawner;


#[tracing::instrument]
fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();
    set_panic_hook();

    let plan = RunPlan::default();
    tracing::info!(count = plan.count, "spawning children without reaping");

    let mut stdout = std::io::stdout().lock();
    match run(&NativeForker, &plan, &mut stdout)? {
        Flow::Parent => Ok(()),
        // _exit skips atexit handlers, so the child never flushes or
        // touches the stdout state it inherited.
        Flow::Child => unsafe { nix::libc::_exit(0) },
    }
}

fn set_panic_hook() {
    panic::set_hook(Box::new(|panic_info| {
        tracing::error!(
            message = "panic occurred",
            panic = %panic_info
        );
    }));
}

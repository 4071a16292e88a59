//! Process detachment.
//!
//! Runs between argument validation and runtime creation, so the forked
//! child is the one that owns the event loop.

use daemonize::Daemonize;

/// Detach the process into the background.
///
/// Keeps the current working directory so a relative root directory still
/// resolves after the fork.
pub fn detach() -> anyhow::Result<()> {
    let cwd = std::env::current_dir()?;
    Daemonize::new().working_directory(cwd).start()?;
    Ok(())
}

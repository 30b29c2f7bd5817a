//! Post-generation conveniences: `npm install` and `git init`.
//!
//! These run inside the freshly generated skeleton. A missing tool or a
//! failing invocation downgrades to a warning; the generated files are
//! already complete, so the exit status of the run must not change.

use std::path::Path;
use std::process::Command;

use tracing::{debug, warn};

use crate::{error::CliResult, output::OutputManager};

/// Run `npm install` in `dir`. Failure is reported but never fatal.
pub fn npm_install(dir: &Path, output: &OutputManager) -> CliResult<()> {
    output.print("Installing dependencies (npm install)...")?;
    run_tool("npm", &["install"], dir, output, "npm install failed; run it manually")
}

/// Run `git init` in `dir`. Failure is reported but never fatal.
pub fn git_init(dir: &Path, output: &OutputManager) -> CliResult<()> {
    run_tool("git", &["init"], dir, output, "git init failed; run it manually")
}

fn run_tool(
    program: &str,
    args: &[&str],
    dir: &Path,
    output: &OutputManager,
    warning: &str,
) -> CliResult<()> {
    debug!(program, ?args, dir = %dir.display(), "running post-generation tool");

    match Command::new(program).args(args).current_dir(dir).output() {
        Ok(result) if result.status.success() => Ok(()),
        Ok(result) => {
            warn!(
                program,
                status = %result.status,
                stderr = %String::from_utf8_lossy(&result.stderr),
                "post-generation tool failed"
            );
            output.warning(warning)?;
            Ok(())
        }
        Err(err) => {
            warn!(program, %err, "post-generation tool could not be started");
            output.warning(&format!("{program} is not available; {warning}"))?;
            Ok(())
        }
    }
}

//! Destination guard: the only place allowed to destroy user data.
//!
//! The guard runs before any file is written. Its contract is
//! all-or-nothing: either the destination ends up clean (missing, empty, or
//! confirmed-and-wiped) and generation proceeds, or the run aborts with
//! zero filesystem mutation.

use std::path::Path;

use tracing::{debug, info};

use crate::{
    application::{
        ApplicationError,
        ports::{DirState, Filesystem, OverwriteConfirmation},
    },
    error::ExpressoResult,
};

/// Probe the destination and clear it if (and only if) the user agrees.
///
/// - `Missing` / `Empty`: proceed without asking.
/// - `NonEmpty` + confirmed: prior contents are removed entirely. There is
///   no selective merge; stale files surviving a regeneration are worse
///   than the wipe.
/// - `NonEmpty` + declined: `ApplicationError::Aborted`, nothing touched.
pub fn ensure_clean(
    filesystem: &dyn Filesystem,
    confirmation: &dyn OverwriteConfirmation,
    destination: &Path,
) -> ExpressoResult<DirState> {
    let state = filesystem.probe_dir(destination)?;
    debug!(path = %destination.display(), ?state, "destination probed");

    if state == DirState::NonEmpty {
        if !confirmation.confirm_erase(destination)? {
            return Err(ApplicationError::Aborted {
                path: destination.to_path_buf(),
            }
            .into());
        }
        info!(path = %destination.display(), "erasing confirmed destination");
        filesystem.remove_dir_all(destination)?;
    }

    Ok(state)
}

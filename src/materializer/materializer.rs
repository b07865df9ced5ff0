use std::io;
use std::path::{Path, PathBuf};

use compio::fs::{self, File};
use derive_more::Display;
use snafu::{ResultExt, Snafu};
use tracing::debug;

use crate::ext::BestEffortPathExt;
use crate::filesystem::{EntryKind, PlanStep, TreeNode};
use crate::materializer::Reporter;

/// Counts of the entries created by a single [`materialize`] call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display)]
#[display("{folders} folders and {files} files")]
pub struct Summary {
    pub folders: usize,
    pub files: usize,
}

/// Creates every folder and empty file described by `tree` under `base`.
///
/// Folders that already exist are left untouched and not reported. Files
/// are always truncated to zero bytes. The first failure aborts the walk;
/// whatever was created up to that point stays on disk.
pub async fn materialize(
    base: &Path,
    tree: &TreeNode,
    reporter: &mut impl Reporter,
) -> Result<Summary, FilesystemError> {
    let steps = tree.plan(base);
    debug!(
        "Materializing {} steps under {}",
        steps.len(),
        base.best_effort_path_display()
    );

    let mut summary = Summary::default();
    for step in &steps {
        match step {
            PlanStep::EnsureFolder(path) => {
                if ensure_folder(path).await? {
                    summary.folders += 1;
                    reporter.created(EntryKind::Folder, path);
                }
            }
            PlanStep::CreateFile(path) => {
                create_empty_file(path).await?;
                summary.files += 1;
                reporter.created(EntryKind::File, path);
            }
        }
    }

    Ok(summary)
}

/// Returns whether the folder had to be created.
async fn ensure_folder(path: &Path) -> Result<bool, FilesystemError> {
    match fs::metadata(path).await {
        Ok(metadata) if metadata.is_dir() => {
            debug!("Folder {} already exists", path.display());
            Ok(false)
        }
        Ok(_) => NotAFolderSnafu { path }.fail(),
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            fs::create_dir_all(path)
                .await
                .context(CreateFolderSnafu { path })?;
            Ok(true)
        }
        Err(err) => Err(err).context(InspectSnafu { path }),
    }
}

async fn create_empty_file(path: &Path) -> Result<(), FilesystemError> {
    let file = File::create(path)
        .await
        .context(CreateFileSnafu { path })?;
    file.close().await.context(CreateFileSnafu { path })
}

#[derive(Debug, Snafu)]
pub enum FilesystemError {
    #[snafu(display("Failed to inspect {}", path.best_effort_path_display()))]
    InspectError { path: PathBuf, source: io::Error },
    #[snafu(display("Failed to create folder {}", path.best_effort_path_display()))]
    CreateFolderError { path: PathBuf, source: io::Error },
    #[snafu(display("Failed to create file {}", path.best_effort_path_display()))]
    CreateFileError { path: PathBuf, source: io::Error },
    #[snafu(display(
        "Expected a folder at {} but found a different kind of entry",
        path.best_effort_path_display()
    ))]
    NotAFolderError { path: PathBuf },
}

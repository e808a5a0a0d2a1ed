use crate::persistence::PROJECT_FILE_NAME;
use directories::ProjectDirs;
use std::fs;
use std::path::{Path, PathBuf};

pub const LOGO_FILE_NAME: &str = "logo.png";

/// Files the editor reads and writes, resolved once at startup.
pub struct AppPaths {
    pub project_file: PathBuf,
    pub logo_file: PathBuf,
}

impl AppPaths {
    /// Prefers the executable's directory, then the per-user data directory,
    /// then the working directory.
    pub fn resolve() -> Self {
        let base = executable_dir().or_else(data_dir);
        Self::in_dir(base.as_deref())
    }

    pub fn in_dir(base: Option<&Path>) -> Self {
        let join = |name: &str| match base {
            Some(dir) => dir.join(name),
            None => PathBuf::from(name),
        };
        Self {
            project_file: join(PROJECT_FILE_NAME),
            logo_file: join(LOGO_FILE_NAME),
        }
    }
}

fn executable_dir() -> Option<PathBuf> {
    let exe = std::env::current_exe().ok()?;
    exe.parent().map(Path::to_path_buf)
}

fn data_dir() -> Option<PathBuf> {
    let dirs = ProjectDirs::from("com", "blockstage", "BlockStage")?;
    let dir = dirs.data_dir().to_path_buf();
    if let Err(err) = fs::create_dir_all(&dir) {
        log::warn!("Cannot create {}: {err}", dir.display());
        return None;
    }
    Some(dir)
}

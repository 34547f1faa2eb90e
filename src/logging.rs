//! File logger setup. The terminal belongs to the TUI, so records go to disk.

use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};

use env_logger::{Builder, Env, Target};

use crate::tui::AppError;

/// Returns the log file location under `base`.
pub fn log_file_in(base: &Path) -> PathBuf {
    base.join("enrollee").join("enrollee.log")
}

/// Opens (or creates) the log file under `base` for appending.
fn open_log(base: &Path) -> Result<(PathBuf, fs::File), AppError> {
    let path = log_file_in(base);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(&path)?;
    Ok((path, file))
}

/// Installs the global logger, writing to the user data directory.
///
/// The filter defaults to `info` and can be overridden with `RUST_LOG`.
/// Returns the path of the log file.
#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
pub fn init() -> Result<PathBuf, AppError> {
    let base = dirs::data_dir().unwrap_or_else(std::env::temp_dir);
    let (path, file) = open_log(&base)?;
    Builder::from_env(Env::default().default_filter_or("info"))
        .target(Target::Pipe(Box::new(file)))
        .try_init()?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::*;

    #[test]
    fn log_file_is_namespaced() {
        let path = log_file_in(Path::new("/data"));
        assert_eq!(path, PathBuf::from("/data/enrollee/enrollee.log"));
    }

    #[test]
    fn open_log_creates_directories() {
        let dir = tempdir().unwrap();
        let (path, _file) = open_log(dir.path()).unwrap();
        assert!(path.exists());
        assert!(path.starts_with(dir.path()));
    }

    #[test]
    fn open_log_appends() {
        use std::io::Write;

        let dir = tempdir().unwrap();
        let (path, mut file) = open_log(dir.path()).unwrap();
        writeln!(file, "first").unwrap();
        let (_, mut again) = open_log(dir.path()).unwrap();
        writeln!(again, "second").unwrap();
        assert_eq!(fs::read_to_string(path).unwrap(), "first\nsecond\n");
    }
}

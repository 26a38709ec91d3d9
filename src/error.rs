use std::io;
use std::path::PathBuf;

/// Failures a generation run can hit. Missing input paths abort the whole
/// run; the other two are scoped to a single course or output file.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("input path not found: {}", .0.display())]
    MissingPath(PathBuf),

    #[error("no lesson files found under {}", .0.display())]
    NoLessons(PathBuf),

    #[error("failed to write {}: {}", .path.display(), .source)]
    WriteFailure {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

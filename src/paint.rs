use crate::error::{Result, StencilError};
use crate::schedule::Schedule;
use crate::vcs::Vcs;
use log::info;
use std::{
    fs::OpenOptions,
    io::Write,
    path::{Path, PathBuf},
};

/// File touched once per commit so every commit has a change to record.
pub const PLACEHOLDER_FILE: &str = "dummy.txt";

/// All backdated commits land at noon so the date part alone decides the cell.
const COMMIT_TIME: &str = "12:00:00";

/// Walks the schedule in date order and makes the requested commits.
///
/// Each commit appends one line to the placeholder file, stages it, then
/// commits with the author/committer date forced to that day at noon. The
/// first failure aborts; commits already made are left in place.
///
/// Returns the total number of commits made.
pub fn paint_schedule<V: Vcs>(
    vcs: &mut V,
    schedule: &Schedule,
    repo_dir: Option<&Path>,
) -> Result<u64> {
    let placeholder = match repo_dir {
        Some(dir) => dir.join(PLACEHOLDER_FILE),
        None => PathBuf::from(PLACEHOLDER_FILE),
    };

    let mut total = 0u64;
    for (date, &count) in schedule {
        for i in 1..=count {
            append_line(&placeholder, &format!("Commit for {date} #{i}\n"))?;
            vcs.stage(Path::new(PLACEHOLDER_FILE))?;

            let timestamp = format!("{date}T{COMMIT_TIME}");
            vcs.commit(&format!("Commit on {date} - commit #{i}"), &timestamp)?;

            info!("Committed for {date}: commit #{i}");
            total += 1;
        }
    }

    Ok(total)
}

fn append_line(path: &Path, line: &str) -> Result<()> {
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| StencilError::WriteFile {
            path: path.to_path_buf(),
            source: e,
        })?;
    file.write_all(line.as_bytes())
        .map_err(|e| StencilError::WriteFile {
            path: path.to_path_buf(),
            source: e,
        })
}

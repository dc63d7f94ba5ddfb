//! Storage of reports into dated markdown files

use std::path::{Path, PathBuf};

use crate::clock::Clock;
use crate::error::{Error, Result};
use crate::markdown::{format_recently_done_tasks_to_markdown, format_tasks_to_markdown};
use crate::Task;

static LIST_PREFIX: &str = "list";
static RECENTLY_DONE_PREFIX: &str = "recently-done";

/// Write the full task list to `<output_dir>/list-<YYYY-MM-DD>.md`, and return the path of this file
pub fn save_tasks_to_file(tasks: &[Task], output_dir: &Path, clock: &dyn Clock) -> Result<PathBuf> {
    save_markdown_to_file(output_dir, LIST_PREFIX, &format_tasks_to_markdown(tasks), clock)
}

/// Write the recently done tasks to `<output_dir>/recently-done-<YYYY-MM-DD>.md`, and return the path of this file
pub fn save_recently_done_tasks_to_file(tasks: &[Task], output_dir: &Path, days: u32, clock: &dyn Clock) -> Result<PathBuf> {
    save_markdown_to_file(output_dir, RECENTLY_DONE_PREFIX, &format_recently_done_tasks_to_markdown(tasks, days), clock)
}

/// The output folder is created if needed. An existing file with the same name is overwritten
fn save_markdown_to_file(output_dir: &Path, prefix: &str, content: &str, clock: &dyn Clock) -> Result<PathBuf> {
    let filename = format!("{}-{}.md", prefix, clock.today().format("%Y-%m-%d"));
    let path = output_dir.join(filename);

    std::fs::create_dir_all(output_dir)
        .map_err(|source| Error::Io { path: output_dir.to_path_buf(), source })?;
    std::fs::write(&path, content)
        .map_err(|source| Error::Io { path: path.clone(), source })?;

    log::debug!("Wrote {} bytes to {:?}", content.len(), path);
    Ok(path)
}

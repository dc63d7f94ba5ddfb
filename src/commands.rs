//! The two reports this crate can produce, from fetch to file

use std::path::{Path, PathBuf};

use crate::clock::Clock;
use crate::error::Result;
use crate::fetcher::fetch_tasks_from_view;
use crate::filter::filter_tasks_completed_within_days;
use crate::traits::LinearSource;
use crate::view_url::ParsedViewUrl;
use crate::writer::{save_recently_done_tasks_to_file, save_tasks_to_file};

/// What a command has written
#[derive(Clone, Debug, PartialEq)]
pub struct Report {
    pub path: PathBuf,
    /// How many tasks the report lists
    pub count: usize,
}

/// Save every task of a view
pub async fn fetch_list<S>(source: &S, view: &ParsedViewUrl, output_dir: &Path, clock: &dyn Clock) -> Result<Report>
where
    S: LinearSource + Sync,
{
    let tasks = fetch_tasks_from_view(source, view.view_id()).await?;
    let path = save_tasks_to_file(&tasks, output_dir, clock)?;
    Ok(Report { path, count: tasks.len() })
}

/// Save the tasks of a view that were completed in the last `days` days
pub async fn fetch_recently_done<S>(source: &S, view: &ParsedViewUrl, days: u32, output_dir: &Path, clock: &dyn Clock) -> Result<Report>
where
    S: LinearSource + Sync,
{
    let tasks = fetch_tasks_from_view(source, view.view_id()).await?;
    let recent = filter_tasks_completed_within_days(&tasks, days, clock.now());
    log::debug!("{} out of {} tasks were completed in the last {} days", recent.len(), tasks.len(), days);

    let path = save_recently_done_tasks_to_file(&recent, output_dir, days, clock)?;
    Ok(Report { path, count: recent.len() })
}

//! Retrieval of every issue of a view

use crate::error::{Error, Result};
use crate::page::{IssueNode, PageRequest};
use crate::task::normalize_completed_at;
use crate::traits::{CustomView, LinearSource};
use crate::Task;

/// How many issues are requested at once
pub const PAGE_SIZE: u32 = 100;

/// Fetch all the issues of a view, following the pagination until the last page.
///
/// Tasks are returned in the order the server sent them
pub async fn fetch_tasks_from_view<S>(source: &S, view_id: &str) -> Result<Vec<Task>>
where
    S: LinearSource + Sync,
{
    let view = source.custom_view(view_id).await?
        .ok_or_else(|| Error::ViewNotFound(view_id.to_string()))?;
    log::info!("Found view \"{}\" ({})", view.name(), view.id());

    let mut tasks = Vec::new();
    let mut cursor: Option<String> = None;

    loop {
        let page = view.issues(PageRequest { first: PAGE_SIZE, after: cursor.take() }).await?;
        log::debug!("Got a page of {} issues (more: {})", page.nodes.len(), page.page_info.has_next_page);

        tasks.extend(page.nodes.into_iter().map(task_from_node));

        if page.page_info.has_next_page == false {
            break;
        }
        match page.page_info.end_cursor {
            Some(end_cursor) => cursor = Some(end_cursor),
            None => return Err(Error::Api("a page announces a next page, but has no end cursor".into())),
        }
    }

    log::info!("Fetched {} issues from view {}", tasks.len(), view_id);
    Ok(tasks)
}

fn task_from_node(node: IssueNode) -> Task {
    let completed_at = normalize_completed_at(&node.completed_at);
    Task::new(node.identifier, node.title, node.url, completed_at)
}

//! Markdown rendering of task lists
//!
//! Titles and URLs are inserted as they are: no markdown escaping is performed.

use chrono::{DateTime, Utc};

use crate::Task;

/// Default width of the "recently done" window, in days
pub const DEFAULT_DAYS: u32 = 7;

static NO_TASKS: &str = "\nNo tasks found.\n";

/// Render every task, in the given order
pub fn format_tasks_to_markdown(tasks: &[Task]) -> String {
    let mut markdown = String::from("# Linear Tasks\n");
    if tasks.is_empty() {
        markdown.push_str(NO_TASKS);
        return markdown;
    }

    for task in tasks {
        push_task(&mut markdown, task);
    }
    markdown
}

/// Render tasks along with their completion date
pub fn format_recently_done_tasks_to_markdown(tasks: &[Task], days: u32) -> String {
    let mut markdown = format!("# Linear Recently Done Tasks (Last {} Days)\n", days);
    if tasks.is_empty() {
        markdown.push_str(NO_TASKS);
        return markdown;
    }

    for task in tasks {
        push_task(&mut markdown, task);
        markdown.push_str(&format!("- **Completed At**: {}\n", format_date(task.completed_at())));
    }
    markdown
}

fn push_task(markdown: &mut String, task: &Task) {
    markdown.push_str(&format!("\n## {}\n\n", task.identifier()));
    markdown.push_str(&format!("- **Title**: {}\n", task.title()));
    markdown.push_str(&format!("- **URL**: {}\n", task.url()));
}

fn format_date(date: Option<&DateTime<Utc>>) -> String {
    match date {
        None => String::from("Unknown"),
        Some(date) => date.format("%Y-%m-%d").to_string(),
    }
}

//! One page of a paginated issue list, as returned by the Linear API

use serde::Deserialize;

/// Arguments of a page request
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageRequest {
    /// Maximum count of issues in the page
    pub first: u32,
    /// The `end_cursor` of the previous page, or `None` for the first page
    pub after: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueConnection {
    pub nodes: Vec<IssueNode>,
    pub page_info: PageInfo,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    pub has_next_page: bool,
    #[serde(default)]
    pub end_cursor: Option<String>,
}

/// An issue exactly as the server describes it
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueNode {
    pub identifier: String,
    pub title: String,
    pub url: String,
    /// Kept raw: a bad value here must not fail the whole page
    #[serde(default)]
    pub completed_at: serde_json::Value,
}

//! An in-memory [`LinearSource`], to test the fetching logic without a server

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::error::{Error, Result};
use crate::page::{IssueConnection, IssueNode, PageInfo, PageRequest};
use crate::traits::{CustomView, LinearSource};

/// Serves canned pages, and remembers which pages have been requested
#[derive(Default)]
pub struct MockSource {
    views: HashMap<String, MockView>,
}

impl MockSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a view, that will serve `pages` in order.
    /// Every page but the last one advertises a next page, with cursor `cursor-<index>`
    pub fn add_view(&mut self, view_id: &str, pages: Vec<Vec<IssueNode>>) -> Arc<Mutex<Vec<PageRequest>>> {
        let page_count = pages.len();
        let connections = pages.into_iter()
            .enumerate()
            .map(|(index, nodes)| {
                let has_next_page = index + 1 < page_count;
                IssueConnection {
                    nodes,
                    page_info: PageInfo {
                        has_next_page,
                        end_cursor: Some(format!("cursor-{}", index)),
                    },
                }
            })
            .collect();
        self.add_view_with_connections(view_id, connections)
    }

    /// Register a view that serves raw connections, in order
    pub fn add_view_with_connections(&mut self, view_id: &str, connections: Vec<IssueConnection>) -> Arc<Mutex<Vec<PageRequest>>> {
        let requests = Arc::new(Mutex::new(Vec::new()));
        let view = MockView {
            id: view_id.to_string(),
            connections,
            requests: Arc::clone(&requests),
        };
        self.views.insert(view_id.to_string(), view);
        requests
    }
}

#[async_trait]
impl LinearSource for MockSource {
    type View = MockView;

    async fn custom_view(&self, view_id: &str) -> Result<Option<MockView>> {
        Ok(self.views.get(view_id).cloned())
    }
}


#[derive(Clone)]
pub struct MockView {
    id: String,
    connections: Vec<IssueConnection>,
    requests: Arc<Mutex<Vec<PageRequest>>>,
}

#[async_trait]
impl CustomView for MockView {
    fn id(&self) -> &str { &self.id }
    fn name(&self) -> &str { "Mock view" }

    async fn issues(&self, page: PageRequest) -> Result<IssueConnection> {
        let index = {
            let mut requests = self.requests.lock().unwrap();
            requests.push(page);
            requests.len() - 1
        };

        self.connections.get(index)
            .cloned()
            .ok_or_else(|| Error::Api(format!("Mocked view {} has no page #{}", self.id, index)))
    }
}

/// Build an issue the way the server would send it
pub fn issue_node(identifier: &str, completed_at: serde_json::Value) -> IssueNode {
    IssueNode {
        identifier: identifier.to_string(),
        title: format!("Title of {}", identifier),
        url: format!("https://linear.app/team/issue/{}", identifier),
        completed_at,
    }
}

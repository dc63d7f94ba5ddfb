use async_trait::async_trait;

use crate::error::Result;
use crate::page::{IssueConnection, PageRequest};

/// Something that knows about Linear custom views.
///
/// [`Client`](crate::client::Client) talks to the actual server, tests use in-memory sources
#[async_trait]
pub trait LinearSource {
    type View: CustomView + Send + Sync;

    /// Look a view up by its id.
    /// Returns `Ok(None)` if the source has no such view
    async fn custom_view(&self, view_id: &str) -> Result<Option<Self::View>>;
}

/// A saved, server-side filtered list of issues
#[async_trait]
pub trait CustomView {
    fn id(&self) -> &str;
    fn name(&self) -> &str;

    /// Fetch one page of the issues of this view
    async fn issues(&self, page: PageRequest) -> Result<IssueConnection>;
}

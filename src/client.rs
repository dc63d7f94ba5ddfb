//! This module provides a client to the Linear GraphQL API

use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{Error, Result};
use crate::page::{IssueConnection, PageRequest};
use crate::traits::{CustomView, LinearSource};


static VIEW_QUERY: &str = r#"
    query CustomView($id: String!) {
        customView(id: $id) {
            id
            name
        }
    }
"#;

static ISSUES_QUERY: &str = r#"
    query CustomViewIssues($id: String!, $first: Int, $after: String) {
        customView(id: $id) {
            issues(first: $first, after: $after) {
                nodes {
                    identifier
                    title
                    url
                    completedAt
                }
                pageInfo {
                    hasNextPage
                    endCursor
                }
            }
        }
    }
"#;

/// Linear reports unknown ids as errors with this message prefix, rather than with `null` data
static NOT_FOUND_PREFIX: &str = "Entity not found";


#[derive(Serialize)]
struct GraphQlRequest<'a, V> {
    query: &'a str,
    variables: V,
}

#[derive(Deserialize)]
struct GraphQlResponse<T> {
    data: Option<T>,
    #[serde(default)]
    errors: Vec<GraphQlError>,
}

#[derive(Debug, Deserialize)]
struct GraphQlError {
    message: String,
}

fn is_not_found(errors: &[GraphQlError]) -> bool {
    errors.iter().any(|err| err.message.starts_with(NOT_FOUND_PREFIX))
}

fn join_messages(errors: &[GraphQlError]) -> String {
    errors.iter()
        .map(|err| err.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}


#[derive(Serialize)]
struct ViewVariables<'a> {
    id: &'a str,
}

#[derive(Serialize)]
struct IssuesVariables<'a> {
    id: &'a str,
    first: u32,
    after: Option<&'a str>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ViewData {
    custom_view: Option<ViewSummary>,
}

#[derive(Deserialize)]
struct ViewSummary {
    id: String,
    name: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct IssuesData {
    custom_view: Option<IssuesOfView>,
}

#[derive(Deserialize)]
struct IssuesOfView {
    issues: IssueConnection,
}


/// A source that fetches its data from the Linear API
#[derive(Clone)]
pub struct Client {
    endpoint: Url,
    api_key: String,
    http: reqwest::Client,
}

impl Client {
    /// Create a client. This does not start a connection
    pub fn new<S: AsRef<str>, T: ToString>(endpoint: S, api_key: T) -> Result<Self> {
        let endpoint = Url::parse(endpoint.as_ref())?;

        Ok(Self {
            endpoint,
            api_key: api_key.to_string(),
            http: reqwest::Client::new(),
        })
    }

    pub fn endpoint(&self) -> &Url { &self.endpoint }

    /// Send a GraphQL document, and return its `data` along with the errors the server reported
    async fn request<V, T>(&self, query: &str, variables: V) -> Result<(Option<T>, Vec<GraphQlError>)>
    where
        V: Serialize + Send,
        T: DeserializeOwned,
    {
        let body = serde_json::to_string(&GraphQlRequest { query, variables })?;

        let res = self.http
            .post(self.endpoint.clone())
            .header(AUTHORIZATION, self.api_key.as_str())
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await?;
        let status = res.status();
        let text = res.text().await?;

        if status.is_success() == false {
            // Linear answers some GraphQL errors (e.g. unknown ids) with 4xx codes, but still with a GraphQL body
            return match serde_json::from_str::<GraphQlResponse<serde_json::Value>>(&text) {
                Ok(response) if response.errors.is_empty() == false => Ok((None, response.errors)),
                _ => Err(Error::HttpStatus(status)),
            };
        }

        let response: GraphQlResponse<T> = serde_json::from_str(&text)?;
        Ok((response.data, response.errors))
    }
}

#[async_trait]
impl LinearSource for Client {
    type View = RemoteView;

    async fn custom_view(&self, view_id: &str) -> Result<Option<RemoteView>> {
        let (data, errors) = self.request::<_, ViewData>(VIEW_QUERY, ViewVariables { id: view_id }).await?;

        if is_not_found(&errors) {
            log::debug!("Server does not know view {}", view_id);
            return Ok(None);
        }
        if errors.is_empty() == false {
            return Err(Error::Api(join_messages(&errors)));
        }

        Ok(data
            .and_then(|data| data.custom_view)
            .map(|summary| RemoteView {
                client: self.clone(),
                id: summary.id,
                name: summary.name,
            }))
    }
}


/// A Linear custom view created by a [`Client`]
pub struct RemoteView {
    client: Client,
    id: String,
    name: String,
}

#[async_trait]
impl CustomView for RemoteView {
    fn id(&self) -> &str { &self.id }
    fn name(&self) -> &str { &self.name }

    async fn issues(&self, page: PageRequest) -> Result<IssueConnection> {
        let variables = IssuesVariables {
            id: &self.id,
            first: page.first,
            after: page.after.as_deref(),
        };
        let (data, errors) = self.client.request::<_, IssuesData>(ISSUES_QUERY, variables).await?;

        if errors.is_empty() == false {
            return Err(Error::Api(join_messages(&errors)));
        }

        match data.and_then(|data| data.custom_view) {
            None => Err(Error::ViewNotFound(self.id.clone())),
            Some(view) => Ok(view.issues),
        }
    }
}

//! This crate exports the issues of a Linear custom view to markdown files.
//!
//! A view URL is parsed by the [`view_url`] module, and the view is then fetched page by page from any [`LinearSource`](traits::LinearSource). \
//! The [`Client`](client::Client) source talks to the actual Linear GraphQL API.
//!
//! Fetched [`Task`]s can be narrowed down to the recently completed ones (see [`filter`]), rendered to markdown (see [`markdown`]), and saved into dated files (see [`writer`]). \
//! The [`commands`] module chains these steps, the way the `linear-tools` binary uses them.

pub mod traits;
pub mod error;
pub use error::{Error, Result};

mod task;
pub use task::Task;
pub mod page;
pub mod view_url;
pub use view_url::{parse_view_url, ParsedViewUrl};

pub mod client;
pub mod fetcher;
pub mod filter;
pub mod markdown;
pub mod clock;
pub mod writer;
pub mod commands;

pub mod config;

#[cfg(test)]
mod mock_source;

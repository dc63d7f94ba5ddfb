//! Parsing of Linear custom view URLs

use std::str::FromStr;

use once_cell::sync::Lazy;
use regex_lite::Regex;

use crate::error::{Error, Result};

/// `https://linear.app/<team>/view/<id>`, with an optional trailing slash.
/// Percent-encoded characters are allowed in the id (views named with non-ASCII letters have such ids)
static VIEW_URL_PATTERN: Lazy<Regex> = Lazy::new(||
    Regex::new(r"^https://linear\.app/[^/]+/view/([a-zA-Z0-9%_-]+)/?$")
        .expect("invalid view URL pattern")
);

/// The useful part of a view URL
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParsedViewUrl {
    /// The view id, still percent-encoded if it was in the URL
    view_id: String,
}

impl ParsedViewUrl {
    pub fn view_id(&self) -> &str { &self.view_id }
}

impl FromStr for ParsedViewUrl {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        parse_view_url(s)
    }
}

/// Extract the view id from a Linear view URL
pub fn parse_view_url(url: &str) -> Result<ParsedViewUrl> {
    let captures = VIEW_URL_PATTERN.captures(url).ok_or(Error::InvalidViewUrl)?;
    let view_id = captures.get(1).ok_or(Error::InvalidViewUrl)?.as_str();

    Ok(ParsedViewUrl {
        view_id: view_id.to_string(),
    })
}

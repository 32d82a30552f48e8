//! Blocking `reqwest` implementation of [`BoardGateway`].

use reqwest::blocking::Client;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::error::ExportError;
use crate::trello::credentials::TrelloCredentials;
use crate::trello::models::{
    BoardId, BoardSummary, CardId, CardSummary, Comment, ListId, ListSummary,
};
use crate::trello::pagination::ActionPageRequest;

use super::BoardGateway;
use super::error_mapping::{map_http_error, map_reqwest_error};

/// Public Trello REST API root.
pub const DEFAULT_API_BASE: &str = "https://api.trello.com/1";

const UNKNOWN_AUTHOR: &str = "(unknown member)";

/// Gateway that talks to Trello with key/token query authentication.
#[derive(Debug, Clone)]
pub struct TrelloGateway {
    client: Client,
    api_base: Url,
    credentials: TrelloCredentials,
    comment_page: ActionPageRequest,
}

impl TrelloGateway {
    /// Creates a gateway for the given credentials and API root.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError::InvalidUrl`] when `api_base` is not an absolute
    /// HTTP(S) URL and [`ExportError::Configuration`] when the HTTP client
    /// cannot be built.
    pub fn new(credentials: &TrelloCredentials, api_base: &str) -> Result<Self, ExportError> {
        let parsed = parse_api_base(api_base)?;
        let client = Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|error| ExportError::Configuration {
                message: format!("failed to configure HTTP client: {error}"),
            })?;

        Ok(Self {
            client,
            api_base: parsed,
            credentials: credentials.clone(),
            comment_page: ActionPageRequest::default(),
        })
    }

    /// Overrides how many comments are requested per page.
    #[must_use]
    pub fn with_comment_page_size(mut self, limit: u16) -> Self {
        self.comment_page = ActionPageRequest::first(limit);
        self
    }

    fn endpoint(&self, segments: &[&str], query: &[(&str, &str)]) -> Result<Url, ExportError> {
        let mut url = self.api_base.clone();
        url.path_segments_mut()
            .map_err(|()| ExportError::InvalidUrl(self.api_base.to_string()))?
            .pop_if_empty()
            .extend(segments);
        url.query_pairs_mut()
            .extend_pairs(query)
            .append_pair("key", self.credentials.key().value())
            .append_pair("token", self.credentials.token().value());
        Ok(url)
    }

    fn get_json<T: DeserializeOwned>(
        &self,
        operation: &str,
        segments: &[&str],
        query: &[(&str, &str)],
    ) -> Result<T, ExportError> {
        let url = self.endpoint(segments, query)?;
        debug!(operation, path = url.path(), "requesting");

        let response = self
            .client
            .get(url)
            .send()
            .map_err(|error| map_reqwest_error(operation, error))?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .unwrap_or_else(|_| "(failed to read error response body)".to_owned());
            return Err(map_http_error(operation, status, &body));
        }

        response
            .json()
            .map_err(|error| map_reqwest_error(operation, error))
    }
}

impl BoardGateway for TrelloGateway {
    fn boards(&self) -> Result<Vec<BoardSummary>, ExportError> {
        self.get_json(
            "list boards",
            &["members", "me", "boards"],
            &[("fields", "name")],
        )
    }

    fn lists(&self, board: &BoardId) -> Result<Vec<ListSummary>, ExportError> {
        self.get_json(
            "list board lists",
            &["boards", board.as_str(), "lists"],
            &[("fields", "name"), ("filter", "open")],
        )
    }

    fn cards(&self, list: &ListId) -> Result<Vec<CardSummary>, ExportError> {
        self.get_json(
            "list cards",
            &["lists", list.as_str(), "cards"],
            &[("fields", "name,desc")],
        )
    }

    fn comments(&self, card: &CardId) -> Result<Vec<Comment>, ExportError> {
        let mut comments = Vec::new();
        let mut request = Some(self.comment_page.clone());

        while let Some(page) = request {
            let limit = page.limit().to_string();
            let mut query = vec![("filter", "commentCard"), ("limit", limit.as_str())];
            if let Some(before) = page.before() {
                query.push(("before", before));
            }

            let actions: Vec<CommentAction> = self.get_json(
                "list card comments",
                &["cards", card.as_str(), "actions"],
                &query,
            )?;

            request = page.next(actions.len(), actions.last().map(|action| action.id.as_str()));
            comments.extend(actions.into_iter().map(Comment::from));
        }

        Ok(comments)
    }
}

fn parse_api_base(api_base: &str) -> Result<Url, ExportError> {
    let url =
        Url::parse(api_base.trim()).map_err(|error| ExportError::InvalidUrl(error.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") || url.cannot_be_a_base() {
        return Err(ExportError::InvalidUrl(format!("{api_base} is not an HTTP(S) URL")));
    }
    Ok(url)
}

#[derive(Debug, Deserialize)]
struct CommentAction {
    id: String,
    #[serde(rename = "memberCreator", default)]
    member_creator: Option<MemberCreator>,
    #[serde(default)]
    data: CommentData,
}

#[derive(Debug, Deserialize)]
struct MemberCreator {
    #[serde(rename = "fullName", default)]
    full_name: Option<String>,
    #[serde(default)]
    username: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct CommentData {
    #[serde(default)]
    text: String,
}

impl From<CommentAction> for Comment {
    fn from(action: CommentAction) -> Self {
        let author = action
            .member_creator
            .and_then(|member| member.full_name.or(member.username))
            .filter(|name| !name.trim().is_empty())
            .unwrap_or_else(|| UNKNOWN_AUTHOR.to_owned());
        Self {
            author,
            text: action.data.text,
        }
    }
}

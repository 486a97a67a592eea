use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;
use tracing::{debug, warn};

use super::{Discussion, DiscussionSearch, SearchError};
use crate::config::Config;
use crate::constants::USER_AGENT;

const SEARCH_DISCUSSIONS: &str = r"query($search: String!, $first: Int!, $comments: Int!) {
  search(type: DISCUSSION, query: $search, first: $first) {
    nodes {
      ... on Discussion {
        title
        comments(first: $comments) {
          nodes {
            publishedAt
            updatedAt
            url
            body
            bodyText
            bodyHTML
            isMinimized
          }
        }
      }
    }
  }
}";

#[derive(Debug, Deserialize)]
struct GraphQlResponse<T> {
    data: Option<T>,
    #[serde(default)]
    errors: Vec<GraphQlError>,
}

#[derive(Debug, Deserialize)]
struct GraphQlError {
    message: String,
}

#[derive(Debug, Deserialize)]
struct SearchData {
    search: SearchConnection,
}

#[derive(Debug, Deserialize)]
struct SearchConnection {
    #[serde(default)]
    nodes: Vec<Option<Discussion>>,
}

/// GitHub GraphQL client scoped to one repository's discussions.
#[derive(Debug, Clone)]
pub struct GithubClient {
    client: Client,
    endpoint: String,
    token: String,
    repository: String,
    comments_per_discussion: u32,
}

impl GithubClient {
    /// Build a client from configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be constructed.
    pub fn new(config: &Config) -> Result<Self, SearchError> {
        let client = Client::builder()
            .timeout(config.http_timeout)
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self {
            client,
            endpoint: config.github_graphql_url.clone(),
            token: config.github_token.clone(),
            repository: config.search_repository.clone(),
            comments_per_discussion: config.comments_per_discussion,
        })
    }

    /// The search string sent to GitHub: the phrase quoted and scoped to the repository.
    #[must_use]
    pub fn scoped_query(&self, query: &str) -> String {
        format!("repo:{} \"{}\"", self.repository, query.replace('"', ""))
    }
}

#[async_trait]
impl DiscussionSearch for GithubClient {
    async fn search_discussions(
        &self,
        query: &str,
        count: u32,
    ) -> Result<Vec<Discussion>, SearchError> {
        let search = self.scoped_query(query);
        debug!(search = %search, count, "Searching discussions");

        let request = json!({
            "query": SEARCH_DISCUSSIONS,
            "variables": {
                "search": search,
                "first": count,
                "comments": self.comments_per_discussion,
            },
        });

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.token)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SearchError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let payload: GraphQlResponse<SearchData> = response.json().await?;
        let messages: Vec<String> = payload.errors.into_iter().map(|e| e.message).collect();

        match payload.data {
            Some(data) => {
                if !messages.is_empty() {
                    warn!(errors = ?messages, "Search returned partial data");
                }
                Ok(data
                    .search
                    .nodes
                    .into_iter()
                    .map(Option::unwrap_or_default)
                    .collect())
            }
            None if !messages.is_empty() => Err(SearchError::GraphQl(messages)),
            None => Err(SearchError::MissingData),
        }
    }
}

//! `web_search`: top Wikipedia hits for a query via the MediaWiki API.

use std::sync::Arc;

use serde::Deserialize;
use tracing::debug;

use crate::error::JarvisError;
use crate::tools::tool::{AgentTool, Tool};

pub const NAME: &str = "web_search";
const RESULT_LIMIT: &str = "3";

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct SearchArgs {
    query: String,
}

#[derive(Debug, Default, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    query: Option<SearchQuery>,
}

#[derive(Debug, Default, Deserialize)]
struct SearchQuery {
    #[serde(default)]
    search: Vec<SearchHit>,
}

#[derive(Debug, Deserialize)]
struct SearchHit {
    #[serde(default)]
    title: String,
    #[serde(default)]
    snippet: String,
}

/// Create the `web_search` tool against the given MediaWiki `api.php` URL.
pub fn web_search_tool(client: reqwest::Client, api_url: impl Into<String>) -> Arc<dyn Tool> {
    let api_url = api_url.into();
    Arc::new(AgentTool::new(
        NAME,
        r#"Searches Wikipedia for information on a given query. Arguments: {"query": string}"#,
        move |args| {
            let client = client.clone();
            let api_url = api_url.clone();
            async move {
                let SearchArgs { query } = args.deserialize()?;
                search_wikipedia(&client, &api_url, &query).await
            }
        },
    ))
}

async fn search_wikipedia(
    client: &reqwest::Client,
    api_url: &str,
    query: &str,
) -> Result<String, JarvisError> {
    debug!(query, "searching wikipedia");

    let resp = client
        .get(api_url)
        .query(&[
            ("action", "query"),
            ("format", "json"),
            ("list", "search"),
            ("srsearch", query),
            ("srlimit", RESULT_LIMIT),
            ("srprop", "snippet"),
        ])
        .send()
        .await
        .and_then(|r| r.error_for_status())
        .map_err(|e| {
            JarvisError::tool(NAME, format!("An error occurred during the Wikipedia search: {e}"))
        })?;

    let data: SearchResponse = resp
        .json()
        .await
        .map_err(|e| JarvisError::tool(NAME, format!("Unexpected search response: {e}")))?;

    let hits = data.query.unwrap_or_default().search;
    if hits.is_empty() {
        return Ok("No Wikipedia results found.".to_string());
    }
    Ok(format_hits(&hits))
}

fn format_hits(hits: &[SearchHit]) -> String {
    hits.iter()
        .map(|hit| format!("Title: {}\nSnippet: {}...", hit.title, strip_match_markup(&hit.snippet)))
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn strip_match_markup(snippet: &str) -> String {
    snippet
        .replace(r#"<span class="searchmatch">"#, "")
        .replace("</span>", "")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_hits_without_highlight_spans() {
        let hits = vec![
            SearchHit {
                title: "Rust (programming language)".into(),
                snippet: r#"<span class="searchmatch">Rust</span> is a language"#.into(),
            },
            SearchHit {
                title: "Rust".into(),
                snippet: "iron oxide".into(),
            },
        ];
        assert_eq!(
            format_hits(&hits),
            "Title: Rust (programming language)\nSnippet: Rust is a language...\n\n\
             Title: Rust\nSnippet: iron oxide..."
        );
    }
}

//! Wire format of the iTunes Search API.

use crate::domain::SearchRecord;
use serde::Deserialize;

/// Response envelope returned by the search endpoint.
///
/// ```json
/// { "resultCount": 2, "results": [ { "trackName": "..." }, { ... } ] }
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchResponse {
    /// Number of results the server claims to have returned.
    #[serde(rename = "resultCount", default)]
    pub result_count: usize,

    /// The page itself.
    #[serde(default)]
    pub results: Vec<SearchRecord>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_partial_records() {
        let body = r#"{
            "resultCount": 2,
            "results": [
                {"trackName": "Song 2", "artistName": "Blur", "releaseDate": "1997-04-07T07:00:00Z", "kind": "song"},
                {"wrapperType": "audiobook"}
            ]
        }"#;
        let response: SearchResponse = serde_json::from_str(body).unwrap();

        assert_eq!(response.result_count, 2);
        assert_eq!(response.results[0].title.as_deref(), Some("Song 2"));
        assert_eq!(response.results[1], SearchRecord::default());
    }

    #[test]
    fn missing_results_is_an_empty_page() {
        let response: SearchResponse = serde_json::from_str("{}").unwrap();
        assert!(response.results.is_empty());
    }
}

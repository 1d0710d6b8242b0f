//! Code search projections.

use serde::{Deserialize, Serialize};

use super::repository::{CleanedRepository, clean_repository_for_search};
use crate::github::types::{CodeResult, CodeSearchResult, Match, TextMatch};

/// A text match with its offsets but without the object URL
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct CleanedTextMatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub object_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub property:    Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fragment:    Option<String>,
    #[serde(skip_serializing_if = "super::absent_or_empty")]
    pub matches:     Option<Vec<Match>>,
}

/// A code hit without its API, git or browser URLs
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct CleanedCodeResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name:         Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path:         Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sha:          Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repository:   Option<CleanedRepository>,
    #[serde(skip_serializing_if = "super::absent_or_empty")]
    pub text_matches: Option<Vec<Option<CleanedTextMatch>>>,
}

/// Code search page with cleaned items
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct CleanedCodeSearchResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_count:        Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub incomplete_results: Option<bool>,
    #[serde(skip_serializing_if = "super::absent_or_empty")]
    pub items:              Option<Vec<Option<CleanedCodeResult>>>,
}

/// Keep the match classification, fragment and offsets
pub fn clean_text_match(text_match: &TextMatch) -> CleanedTextMatch {
    CleanedTextMatch {
        object_type: text_match.object_type.clone(),
        property:    text_match.property.clone(),
        fragment:    text_match.fragment.clone(),
        matches:     text_match.matches.clone(),
    }
}

/// Clean a code hit and its nested repository and text matches
pub fn clean_code_result(result: &CodeResult) -> CleanedCodeResult {
    CleanedCodeResult {
        name:         result.name.clone(),
        path:         result.path.clone(),
        sha:          result.sha.clone(),
        repository:   result.repository.as_ref().map(clean_repository_for_search),
        text_matches: result.text_matches.as_ref().map(|matches| {
            matches
                .iter()
                .map(|text_match| text_match.as_ref().map(clean_text_match))
                .collect()
        }),
    }
}

/// Clean every hit on a code search page, preserving order and null entries
pub fn clean_code_search_result(result: &CodeSearchResult) -> CleanedCodeSearchResult {
    CleanedCodeSearchResult {
        total_count:        result.total_count,
        incomplete_results: result.incomplete_results,
        items:              result.items.as_ref().map(|items| {
            items
                .iter()
                .map(|item| item.as_ref().map(clean_code_result))
                .collect()
        }),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn code_search_fixture() -> CodeSearchResult {
        serde_json::from_value(json!({
            "total_count": 7,
            "incomplete_results": false,
            "items": [
                {
                    "name": "classes.js",
                    "path": "src/attributes/classes.js",
                    "sha": "d7212f9dee2dcc18f084d7df8f417b80846ded5a",
                    "url": "https://api.github.com/repositories/167174/contents/src/attributes/classes.js",
                    "git_url": "https://api.github.com/repositories/167174/git/blobs/d7212f9",
                    "html_url": "https://github.com/jquery/jquery/blob/825ac37/src/attributes/classes.js",
                    "repository": {
                        "id": 167_174,
                        "name": "jquery",
                        "full_name": "jquery/jquery",
                        "owner": {"login": "jquery", "id": 70_142, "type": "Organization",
                                  "url": "https://api.github.com/users/jquery"},
                        "private": false,
                        "fork": false,
                        "html_url": "https://github.com/jquery/jquery",
                        "url": "https://api.github.com/repos/jquery/jquery"
                    },
                    "text_matches": [
                        {
                            "object_url": "https://api.github.com/repositories/167174/contents/src/attributes/classes.js",
                            "object_type": "FileContent",
                            "property": "content",
                            "fragment": "addClass: function( value ) {",
                            "matches": [{"text": "addClass", "indices": [0, 8]}]
                        },
                        null
                    ]
                },
                null
            ]
        }))
        .unwrap()
    }

    #[test]
    fn test_text_match_keeps_offsets_and_drops_url() {
        let result = code_search_fixture();
        let text_match = result.items.as_ref().unwrap()[0]
            .as_ref()
            .unwrap()
            .text_matches
            .as_ref()
            .unwrap()[0]
            .clone()
            .unwrap();

        let value = serde_json::to_value(clean_text_match(&text_match)).unwrap();
        assert_eq!(
            value,
            json!({
                "object_type": "FileContent",
                "property": "content",
                "fragment": "addClass: function( value ) {",
                "matches": [{"text": "addClass", "indices": [0, 8]}]
            })
        );
    }

    #[test]
    fn test_code_search_result_projection() {
        let cleaned = clean_code_search_result(&code_search_fixture());
        let value = serde_json::to_value(&cleaned).unwrap();

        assert_eq!(value["total_count"], 7);
        assert_eq!(value["incomplete_results"], false);
        assert_eq!(value["items"][1], json!(null));

        let hit = &value["items"][0];
        let keys: Vec<&str> = hit.as_object().unwrap().keys().map(String::as_str).collect();
        assert_eq!(keys, ["name", "path", "sha", "repository", "text_matches"]);
        assert_eq!(hit["repository"]["html_url"], "https://github.com/jquery/jquery");
        assert!(hit["repository"].get("url").is_none());
        assert!(hit["repository"]["owner"].get("url").is_none());
        assert_eq!(hit["text_matches"][1], json!(null));
    }

    #[test]
    fn test_sparse_hit() {
        let cleaned = clean_code_result(&CodeResult {
            name: Some("lib.rs".to_string()),
            ..CodeResult::default()
        });
        assert!(cleaned.repository.is_none());
        assert!(cleaned.text_matches.is_none());
        assert_eq!(serde_json::to_value(cleaned).unwrap(), json!({"name": "lib.rs"}));
    }

    #[test]
    fn test_empty_lists_are_omitted() {
        let result: CodeSearchResult = serde_json::from_value(json!({
            "total_count": 1,
            "items": [{"name": "lib.rs", "text_matches": [
                {"fragment": "fn main", "matches": []}
            ]}]
        }))
        .unwrap();
        assert_eq!(
            serde_json::to_value(clean_code_search_result(&result)).unwrap(),
            json!({
                "total_count": 1,
                "items": [{"name": "lib.rs", "text_matches": [{"fragment": "fn main"}]}]
            })
        );

        let empty: CodeSearchResult =
            serde_json::from_value(json!({"total_count": 0, "items": []})).unwrap();
        assert_eq!(
            serde_json::to_value(clean_code_search_result(&empty)).unwrap(),
            json!({"total_count": 0})
        );
    }
}

//! File and directory content projection.

use serde::{Deserialize, Serialize};

use super::decode::decode_content;
use crate::constants::TEXT_ENCODING;
use crate::github::types::RepositoryContent;

/// A content entry without any of its API or browser URLs
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct CleanedRepositoryContent {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind:     Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target:   Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encoding: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size:     Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name:     Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path:     Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content:  Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sha:      Option<String>,
}

/// Project a content entry, decoding its payload to text when possible.
///
/// When the payload cannot be decoded the original content and encoding are
/// kept verbatim; the entry is still returned.
pub fn clean_repository_content(content: &RepositoryContent) -> CleanedRepositoryContent {
    let mut cleaned = CleanedRepositoryContent {
        kind:     content.kind.clone(),
        target:   content.target.clone(),
        encoding: None,
        size:     content.size,
        name:     content.name.clone(),
        path:     content.path.clone(),
        content:  None,
        sha:      content.sha.clone(),
    };

    if let Some(raw) = &content.content {
        match decode_content(raw, content.encoding.as_deref()) {
            Ok(text) => {
                cleaned.content = Some(text);
                cleaned.encoding = Some(TEXT_ENCODING.to_string());
            },
            Err(failure) => {
                tracing::debug!(
                    "Keeping encoded content for {}: {failure}",
                    content.path.as_deref().unwrap_or("<unknown path>")
                );
                cleaned.content = Some(raw.clone());
                cleaned.encoding.clone_from(&content.encoding);
            },
        }
    }

    cleaned
}

/// Project a directory listing, preserving order and null entries
pub fn clean_repository_content_list(
    contents: &[Option<RepositoryContent>],
) -> Vec<Option<CleanedRepositoryContent>> {
    contents
        .iter()
        .map(|entry| entry.as_ref().map(clean_repository_content))
        .collect()
}

#[cfg(test)]
mod tests {
    use serde_json::{Value, json};

    use super::*;

    fn raw(value: Value) -> RepositoryContent {
        serde_json::from_value(value).unwrap()
    }

    fn file_fixture(content: &str, encoding: &str) -> RepositoryContent {
        raw(json!({
            "type": "file",
            "encoding": encoding,
            "size": 14,
            "name": "README.md",
            "path": "docs/README.md",
            "content": content,
            "sha": "3d21ec53a331a6f037a91c368710b99387d012c1",
            "url": "https://api.github.com/repos/o/r/contents/docs/README.md",
            "git_url": "https://api.github.com/repos/o/r/git/blobs/3d21ec5",
            "html_url": "https://github.com/o/r/blob/main/docs/README.md",
            "download_url": "https://raw.githubusercontent.com/o/r/main/docs/README.md",
            "_links": {
                "self": "https://api.github.com/repos/o/r/contents/docs/README.md",
                "git": "https://api.github.com/repos/o/r/git/blobs/3d21ec5",
                "html": "https://github.com/o/r/blob/main/docs/README.md"
            }
        }))
    }

    #[test]
    fn test_text_file_is_decoded() {
        let cleaned = clean_repository_content(&file_fixture("IyBIZWxs\nbwp3b3JsZAo=\n", "base64"));

        assert_eq!(cleaned.encoding.as_deref(), Some("text"));
        assert_eq!(cleaned.content.as_deref(), Some("# Hello\nworld\n"));
        assert_eq!(cleaned.name.as_deref(), Some("README.md"));
        assert_eq!(cleaned.size, Some(14));
    }

    #[test]
    fn test_binary_file_keeps_original_payload() {
        let cleaned = clean_repository_content(&file_fixture("//4AgQ==", "base64"));

        assert_eq!(cleaned.encoding.as_deref(), Some("base64"));
        assert_eq!(cleaned.content.as_deref(), Some("//4AgQ=="));
    }

    #[test]
    fn test_unsupported_encoding_keeps_original_payload() {
        let cleaned = clean_repository_content(&file_fixture("", "none"));

        assert_eq!(cleaned.encoding.as_deref(), Some("none"));
        assert_eq!(cleaned.content.as_deref(), Some(""));
    }

    #[test]
    fn test_no_urls_survive() {
        for fixture in [
            file_fixture("IyBIZWxsbwp3b3JsZAo=", "base64"),
            file_fixture("//4AgQ==", "base64"),
        ] {
            let value = serde_json::to_value(clean_repository_content(&fixture)).unwrap();
            let keys: Vec<&str> = value
                .as_object()
                .unwrap()
                .keys()
                .map(String::as_str)
                .collect();
            for key in keys {
                assert!(
                    ["type", "target", "encoding", "size", "name", "path", "content", "sha"]
                        .contains(&key),
                    "unexpected key {key}"
                );
            }
        }
    }

    #[test]
    fn test_symlink_and_directory_entries() {
        let symlink = clean_repository_content(&raw(json!({
            "type": "symlink",
            "target": "../shared/config.toml",
            "name": "config.toml",
            "path": "config.toml",
            "size": 21
        })));
        assert_eq!(symlink.target.as_deref(), Some("../shared/config.toml"));
        assert!(symlink.content.is_none());
        assert!(symlink.encoding.is_none());

        let listing = clean_repository_content_list(&[
            Some(raw(json!({"type": "dir", "name": "src", "path": "src"}))),
            None,
            Some(raw(json!({"type": "file", "name": "Cargo.toml", "path": "Cargo.toml"}))),
        ]);
        assert_eq!(listing.len(), 3);
        assert_eq!(
            listing[0].as_ref().and_then(|entry| entry.name.as_deref()),
            Some("src")
        );
        assert!(listing[1].is_none());
        assert_eq!(
            listing[2].as_ref().and_then(|entry| entry.kind.as_deref()),
            Some("file")
        );
    }
}

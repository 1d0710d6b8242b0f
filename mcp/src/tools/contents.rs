use async_trait::async_trait;

use crate::constants::{PARAM_OWNER, PARAM_PATH, PARAM_REF, PARAM_REPO};
use crate::error::Result;
use crate::github::types::ContentsResponse;
use crate::sanitize::{clean_repository_content, clean_repository_content_list};
use crate::tool::{HandlerContext, ToolFn, ToolOutput};

/// Reads a file or lists a directory; text file bodies come back decoded
pub struct GetFileContents;

#[async_trait]
impl ToolFn for GetFileContents {
    async fn call(&self, ctx: &HandlerContext) -> Result<ToolOutput> {
        let args = ctx.arguments();
        let owner: String = args.required(PARAM_OWNER)?;
        let repo: String = args.required(PARAM_REPO)?;
        let path: String = args.required(PARAM_PATH)?;
        let reference: String = args.optional(PARAM_REF)?;

        let contents = ctx
            .client()
            .get_contents(
                &owner,
                &repo,
                &path,
                (!reference.is_empty()).then_some(reference.as_str()),
            )
            .await?;

        match contents {
            ContentsResponse::File(file) => ToolOutput::json(&clean_repository_content(&file)),
            ContentsResponse::Directory(entries) => {
                ToolOutput::json(&clean_repository_content_list(&entries))
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::error::Error;
    use crate::tools::test_support::{RecordingApi, context};

    #[tokio::test]
    async fn test_file_is_decoded() {
        let api = RecordingApi::responding(json!({
            "type": "file",
            "encoding": "base64",
            "size": 14,
            "name": "README.md",
            "path": "README.md",
            "content": "IyBIZWxs\nbwp3b3Js\r\nZAo=\n",
            "sha": "3d21ec53",
            "download_url": "https://raw.githubusercontent.com/o/r/main/README.md"
        }));

        let output = GetFileContents
            .call(&context(
                &api,
                json!({"owner": "o", "repo": "r", "path": "README.md", "ref": "main"}),
            ))
            .await
            .unwrap();

        assert_eq!(
            output,
            ToolOutput::Json(json!({
                "type": "file",
                "encoding": "text",
                "size": 14,
                "name": "README.md",
                "path": "README.md",
                "content": "# Hello\nworld\n",
                "sha": "3d21ec53"
            }))
        );
        assert_eq!(api.calls()[0].1["ref"], "main");
    }

    #[tokio::test]
    async fn test_directory_listing_keeps_order_and_nulls() {
        let api = RecordingApi::responding(json!([
            {"type": "dir", "name": "src", "path": "src", "url": "https://api.github.com/x"},
            null,
            {"type": "file", "name": "Cargo.toml", "path": "Cargo.toml", "size": 120}
        ]));

        let output = GetFileContents
            .call(&context(&api, json!({"owner": "o", "repo": "r", "path": ""})))
            .await
            .unwrap();

        assert_eq!(
            output,
            ToolOutput::Json(json!([
                {"type": "dir", "name": "src", "path": "src"},
                null,
                {"type": "file", "name": "Cargo.toml", "path": "Cargo.toml", "size": 120}
            ]))
        );
        assert_eq!(api.calls()[0].1["ref"], json!(null));
    }

    #[tokio::test]
    async fn test_path_is_required() {
        let api = RecordingApi::responding(json!({}));
        let err = GetFileContents
            .call(&context(&api, json!({"owner": "o", "repo": "r"})))
            .await
            .unwrap_err();

        assert!(matches!(err.current_context(), Error::MissingParameter(name) if name == "path"));
        assert!(api.calls().is_empty());
    }
}

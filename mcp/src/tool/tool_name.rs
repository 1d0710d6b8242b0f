//! Tool names, descriptions, annotations and schemas for the GitHub MCP server.
//!
//! This module is the single place that lists every tool the server exposes.

use std::sync::Arc;

use strum::{AsRefStr, Display, EnumIter, EnumString, IntoEnumIterator, IntoStaticStr};

use super::annotations::{Annotation, EnvironmentImpact, ToolCategory};
use super::parameters::ParameterBuilder;
use super::tool_def::ToolDef;
use super::types::ToolFn;
use crate::constants::{
    MAKE_LATEST_VALUES, PARAM_BODY, PARAM_DISCUSSION_CATEGORY_NAME, PARAM_DRAFT,
    PARAM_GENERATE_RELEASE_NOTES, PARAM_MAKE_LATEST, PARAM_NAME, PARAM_ORDER, PARAM_OWNER,
    PARAM_PATH, PARAM_PRERELEASE, PARAM_PREVIOUS_TAG_NAME, PARAM_Q, PARAM_QUERY, PARAM_REF,
    PARAM_RELEASE_ID, PARAM_REPO, PARAM_SORT, PARAM_TAG, PARAM_TAG_NAME, PARAM_TARGET_COMMITISH,
    SORT_ORDER_VALUES, USER_SORT_VALUES,
};
use crate::tools::{
    CreateRelease, DeleteRelease, GenerateReleaseNotes, GetFileContents, GetLatestRelease,
    GetRelease, GetReleaseByTag, ListReleases, SearchCode, SearchRepositories, SearchUsers,
    UpdateRelease,
};

/// Tool names enum with automatic `snake_case` serialization
#[derive(
    AsRefStr,
    Clone,
    Copy,
    Debug,
    Display,
    EnumIter,
    EnumString,
    Eq,
    IntoStaticStr,
    PartialEq,
)]
#[strum(serialize_all = "snake_case")]
pub enum ToolName {
    // Releases
    ListReleases,
    GetLatestRelease,
    GetReleaseByTag,
    GetRelease,
    CreateRelease,
    UpdateRelease,
    DeleteRelease,
    GenerateReleaseNotes,
    // Search
    SearchRepositories,
    SearchCode,
    SearchUsers,
    // Contents
    GetFileContents,
}

impl ToolName {
    pub const fn description(self) -> &'static str {
        match self {
            Self::ListReleases => "List releases for a GitHub repository.",
            Self::GetLatestRelease => "Get the latest published full release for the repository.",
            Self::GetReleaseByTag => "Get a published release with the specified tag.",
            Self::GetRelease => "Get a specific release by its ID.",
            Self::CreateRelease => "Create a new release in a GitHub repository.",
            Self::UpdateRelease => {
                "Update an existing release in a GitHub repository. Only the fields you pass \
                 are changed."
            },
            Self::DeleteRelease => "Delete a release from a GitHub repository.",
            Self::GenerateReleaseNotes => "Generate release notes content for a release.",
            Self::SearchRepositories => "Search for GitHub repositories",
            Self::SearchCode => "Search for code across GitHub repositories",
            Self::SearchUsers => "Search for GitHub users",
            Self::GetFileContents => {
                "Get the contents of a file or directory from a GitHub repository. Text files \
                 are returned decoded."
            },
        }
    }

    pub fn annotation(self) -> Annotation {
        let (title, category, impact) = match self {
            Self::ListReleases => (
                "List releases",
                ToolCategory::Releases,
                EnvironmentImpact::ReadOnly,
            ),
            Self::GetLatestRelease => (
                "Get latest release",
                ToolCategory::Releases,
                EnvironmentImpact::ReadOnly,
            ),
            Self::GetReleaseByTag => (
                "Get release by tag",
                ToolCategory::Releases,
                EnvironmentImpact::ReadOnly,
            ),
            Self::GetRelease => (
                "Get release",
                ToolCategory::Releases,
                EnvironmentImpact::ReadOnly,
            ),
            Self::CreateRelease => (
                "Create release",
                ToolCategory::Releases,
                EnvironmentImpact::AdditiveNonIdempotent,
            ),
            Self::UpdateRelease => (
                "Update release",
                ToolCategory::Releases,
                EnvironmentImpact::AdditiveIdempotent,
            ),
            Self::DeleteRelease => (
                "Delete release",
                ToolCategory::Releases,
                EnvironmentImpact::DestructiveIdempotent,
            ),
            // POST endpoint, but nothing is stored
            Self::GenerateReleaseNotes => (
                "Generate release notes",
                ToolCategory::Releases,
                EnvironmentImpact::ReadOnly,
            ),
            Self::SearchRepositories => (
                "Search repositories",
                ToolCategory::Search,
                EnvironmentImpact::ReadOnly,
            ),
            Self::SearchCode => (
                "Search code",
                ToolCategory::Search,
                EnvironmentImpact::ReadOnly,
            ),
            Self::SearchUsers => (
                "Search users",
                ToolCategory::Search,
                EnvironmentImpact::ReadOnly,
            ),
            Self::GetFileContents => (
                "Get file or directory contents",
                ToolCategory::Contents,
                EnvironmentImpact::ReadOnly,
            ),
        };
        Annotation::new(title, category, impact)
    }

    pub fn parameters(self) -> fn() -> ParameterBuilder {
        match self {
            Self::ListReleases => || repository().with_pagination(),
            Self::GetLatestRelease => repository,
            Self::GetReleaseByTag => || repository().string(PARAM_TAG, "Tag name", true),
            Self::GetRelease | Self::DeleteRelease => || {
                repository().number(
                    PARAM_RELEASE_ID,
                    "The unique identifier of the release",
                    true,
                )
            },
            Self::CreateRelease => create_release_parameters,
            Self::UpdateRelease => update_release_parameters,
            Self::GenerateReleaseNotes => || {
                repository()
                    .string(PARAM_TAG_NAME, "The tag name for the release", true)
                    .string(
                        PARAM_TARGET_COMMITISH,
                        "Specifies the commitish value that will be the target for the \
                         release's tag",
                        false,
                    )
                    .string(
                        PARAM_PREVIOUS_TAG_NAME,
                        "The name of the previous tag to use as the starting point for the \
                         release notes",
                        false,
                    )
            },
            Self::SearchRepositories => || {
                ParameterBuilder::new()
                    .string(PARAM_QUERY, "Search query", true)
                    .with_pagination()
            },
            Self::SearchCode => || {
                ParameterBuilder::new()
                    .string(PARAM_Q, "Search query using GitHub code search syntax", true)
                    .string(PARAM_SORT, "Sort field ('indexed' only)", false)
                    .string_enum(PARAM_ORDER, "Sort order", SORT_ORDER_VALUES, false)
                    .with_pagination()
            },
            Self::SearchUsers => || {
                ParameterBuilder::new()
                    .string(PARAM_Q, "Search query using GitHub users search syntax", true)
                    .string_enum(PARAM_SORT, "Sort field by category", USER_SORT_VALUES, false)
                    .string_enum(PARAM_ORDER, "Sort order", SORT_ORDER_VALUES, false)
                    .with_pagination()
            },
            Self::GetFileContents => || {
                repository()
                    .string(
                        PARAM_PATH,
                        "Path to the file or directory (empty for the repository root)",
                        true,
                    )
                    .string(
                        PARAM_REF,
                        "Branch, tag or commit to read from (defaults to the default branch)",
                        false,
                    )
            },
        }
    }

    pub fn handler(self) -> Arc<dyn ToolFn> {
        match self {
            Self::ListReleases => Arc::new(ListReleases),
            Self::GetLatestRelease => Arc::new(GetLatestRelease),
            Self::GetReleaseByTag => Arc::new(GetReleaseByTag),
            Self::GetRelease => Arc::new(GetRelease),
            Self::CreateRelease => Arc::new(CreateRelease),
            Self::UpdateRelease => Arc::new(UpdateRelease),
            Self::DeleteRelease => Arc::new(DeleteRelease),
            Self::GenerateReleaseNotes => Arc::new(GenerateReleaseNotes),
            Self::SearchRepositories => Arc::new(SearchRepositories),
            Self::SearchCode => Arc::new(SearchCode),
            Self::SearchUsers => Arc::new(SearchUsers),
            Self::GetFileContents => Arc::new(GetFileContents),
        }
    }

    pub fn to_tool_def(self) -> ToolDef {
        ToolDef {
            tool_name:   self,
            annotations: self.annotation(),
            handler:     self.handler(),
            parameters:  self.parameters(),
        }
    }
}

/// Every tool, or only the read-only ones
pub fn get_all_tool_definitions(read_only: bool) -> Vec<ToolDef> {
    ToolName::iter()
        .map(ToolName::to_tool_def)
        .filter(|def| !read_only || def.is_read_only())
        .collect()
}

fn repository() -> ParameterBuilder {
    ParameterBuilder::new()
        .string(PARAM_OWNER, "Repository owner", true)
        .string(PARAM_REPO, "Repository name", true)
}

fn release_fields(builder: ParameterBuilder) -> ParameterBuilder {
    builder
        .string(
            PARAM_TARGET_COMMITISH,
            "Specifies the commitish value that determines where the Git tag is created from",
            false,
        )
        .string(PARAM_NAME, "The name of the release", false)
        .string(PARAM_BODY, "Text describing the contents of the tag", false)
        .boolean(
            PARAM_PRERELEASE,
            "true to identify the release as a prerelease, false to identify the release as a \
             full release",
        )
        .string(
            PARAM_DISCUSSION_CATEGORY_NAME,
            "If specified, a discussion of the specified category is created and linked to the \
             release",
            false,
        )
        .string_enum(
            PARAM_MAKE_LATEST,
            "Specifies whether this release should be set as the latest release for the \
             repository",
            MAKE_LATEST_VALUES,
            false,
        )
}

fn create_release_parameters() -> ParameterBuilder {
    release_fields(
        repository()
            .string(PARAM_TAG_NAME, "The name of the tag", true)
            .boolean(
                PARAM_DRAFT,
                "true to create a draft (unpublished) release, false to create a published one",
            ),
    )
    .boolean(
        PARAM_GENERATE_RELEASE_NOTES,
        "Whether to automatically generate the name and body for this release",
    )
}

fn update_release_parameters() -> ParameterBuilder {
    release_fields(
        repository()
            .number(
                PARAM_RELEASE_ID,
                "The unique identifier of the release",
                true,
            )
            .string(PARAM_TAG_NAME, "The name of the tag", false)
            .boolean(
                PARAM_DRAFT,
                "true makes the release a draft, and false publishes the release",
            ),
    )
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use serde_json::json;

    use super::*;

    #[test]
    fn test_names_are_snake_case() {
        assert_eq!(ToolName::ListReleases.to_string(), "list_releases");
        assert_eq!(ToolName::GetReleaseByTag.as_ref(), "get_release_by_tag");
        assert_eq!(
            "generate_release_notes".parse::<ToolName>().unwrap(),
            ToolName::GenerateReleaseNotes
        );
    }

    #[test]
    fn test_read_only_filter() {
        let all = get_all_tool_definitions(false);
        assert_eq!(all.len(), ToolName::iter().count());

        let read_only: HashSet<&str> = get_all_tool_definitions(true)
            .iter()
            .map(ToolDef::name)
            .collect();
        for write_tool in ["create_release", "update_release", "delete_release"] {
            assert!(!read_only.contains(write_tool));
        }
        assert!(read_only.contains("generate_release_notes"));
        assert!(read_only.contains("get_file_contents"));
    }

    #[test]
    fn test_required_parameters() {
        let required = |name: ToolName| (name.parameters())().build()["required"].clone();

        assert_eq!(required(ToolName::GetLatestRelease), json!(["owner", "repo"]));
        assert_eq!(
            required(ToolName::UpdateRelease),
            json!(["owner", "repo", "release_id"])
        );
        assert_eq!(required(ToolName::SearchRepositories), json!(["query"]));
        assert_eq!(
            required(ToolName::GetFileContents),
            json!(["owner", "repo", "path"])
        );
    }

    #[test]
    fn test_to_tool() {
        let tool = ToolName::DeleteRelease.to_tool_def().to_tool();
        assert_eq!(tool.name, "delete_release");
        assert_eq!(tool.title.as_deref(), Some("Delete release"));
        let annotations = tool.annotations.unwrap();
        assert_eq!(annotations.title.as_deref(), Some("Releases: Delete release"));
        assert_eq!(annotations.destructive_hint, Some(true));
    }
}

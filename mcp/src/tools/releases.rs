//! Release tools.
//!
//! Release payloads are returned as GitHub sends them. Create and update only
//! forward the optional fields the caller actually supplied.

use async_trait::async_trait;

use crate::constants::{
    MAKE_LATEST_VALUES, PARAM_BODY, PARAM_DISCUSSION_CATEGORY_NAME, PARAM_DRAFT,
    PARAM_GENERATE_RELEASE_NOTES, PARAM_MAKE_LATEST, PARAM_NAME, PARAM_OWNER, PARAM_PRERELEASE,
    PARAM_PREVIOUS_TAG_NAME, PARAM_RELEASE_ID, PARAM_REPO, PARAM_TAG, PARAM_TAG_NAME,
    PARAM_TARGET_COMMITISH,
};
use crate::error::Result;
use crate::field_extraction::{Arguments, Pagination};
use crate::github::types::{GenerateNotesRequest, NewRelease, ReleasePatch};
use crate::tool::{HandlerContext, ToolFn, ToolOutput};

/// Message returned once a release is gone
const RELEASE_DELETED: &str = "Release deleted successfully";

/// The `owner`/`repo` pair every release tool starts with
fn repository(args: Arguments<'_>) -> Result<(String, String)> {
    Ok((args.required(PARAM_OWNER)?, args.required(PARAM_REPO)?))
}

pub struct ListReleases;

#[async_trait]
impl ToolFn for ListReleases {
    async fn call(&self, ctx: &HandlerContext) -> Result<ToolOutput> {
        let args = ctx.arguments();
        let (owner, repo) = repository(args)?;
        let pagination = Pagination::resolve(args)?;

        let releases = ctx
            .client()
            .list_releases(&owner, &repo, pagination)
            .await?;
        ToolOutput::json(&releases)
    }
}

pub struct GetLatestRelease;

#[async_trait]
impl ToolFn for GetLatestRelease {
    async fn call(&self, ctx: &HandlerContext) -> Result<ToolOutput> {
        let (owner, repo) = repository(ctx.arguments())?;

        let release = ctx.client().get_latest_release(&owner, &repo).await?;
        ToolOutput::json(&release)
    }
}

pub struct GetReleaseByTag;

#[async_trait]
impl ToolFn for GetReleaseByTag {
    async fn call(&self, ctx: &HandlerContext) -> Result<ToolOutput> {
        let args = ctx.arguments();
        let (owner, repo) = repository(args)?;
        let tag: String = args.required(PARAM_TAG)?;

        let release = ctx
            .client()
            .get_release_by_tag(&owner, &repo, &tag)
            .await?;
        ToolOutput::json(&release)
    }
}

pub struct GetRelease;

#[async_trait]
impl ToolFn for GetRelease {
    async fn call(&self, ctx: &HandlerContext) -> Result<ToolOutput> {
        let args = ctx.arguments();
        let (owner, repo) = repository(args)?;
        let release_id: i64 = args.required(PARAM_RELEASE_ID)?;

        let release = ctx.client().get_release(&owner, &repo, release_id).await?;
        ToolOutput::json(&release)
    }
}

pub struct CreateRelease;

#[async_trait]
impl ToolFn for CreateRelease {
    async fn call(&self, ctx: &HandlerContext) -> Result<ToolOutput> {
        let args = ctx.arguments();
        let (owner, repo) = repository(args)?;
        let release = NewRelease {
            tag_name:                 args.required(PARAM_TAG_NAME)?,
            target_commitish:         args.supplied(PARAM_TARGET_COMMITISH)?,
            name:                     args.supplied(PARAM_NAME)?,
            body:                     args.supplied(PARAM_BODY)?,
            draft:                    args.supplied(PARAM_DRAFT)?,
            prerelease:               args.supplied(PARAM_PRERELEASE)?,
            discussion_category_name: args.supplied(PARAM_DISCUSSION_CATEGORY_NAME)?,
            generate_release_notes:   args.supplied(PARAM_GENERATE_RELEASE_NOTES)?,
            make_latest:              args.supplied_one_of(PARAM_MAKE_LATEST, MAKE_LATEST_VALUES)?,
        };

        let created = ctx
            .client()
            .create_release(&owner, &repo, &release)
            .await?;
        ToolOutput::json(&created)
    }
}

pub struct UpdateRelease;

#[async_trait]
impl ToolFn for UpdateRelease {
    async fn call(&self, ctx: &HandlerContext) -> Result<ToolOutput> {
        let args = ctx.arguments();
        let (owner, repo) = repository(args)?;
        let release_id: i64 = args.required(PARAM_RELEASE_ID)?;
        // `""` and `false` are real values here, absence is not
        let patch = ReleasePatch {
            tag_name:                 args.supplied(PARAM_TAG_NAME)?,
            target_commitish:         args.supplied(PARAM_TARGET_COMMITISH)?,
            name:                     args.supplied(PARAM_NAME)?,
            body:                     args.supplied(PARAM_BODY)?,
            draft:                    args.supplied(PARAM_DRAFT)?,
            prerelease:               args.supplied(PARAM_PRERELEASE)?,
            discussion_category_name: args.supplied(PARAM_DISCUSSION_CATEGORY_NAME)?,
            make_latest:              args.supplied_one_of(PARAM_MAKE_LATEST, MAKE_LATEST_VALUES)?,
        };

        let updated = ctx
            .client()
            .update_release(&owner, &repo, release_id, &patch)
            .await?;
        ToolOutput::json(&updated)
    }
}

pub struct DeleteRelease;

#[async_trait]
impl ToolFn for DeleteRelease {
    async fn call(&self, ctx: &HandlerContext) -> Result<ToolOutput> {
        let args = ctx.arguments();
        let (owner, repo) = repository(args)?;
        let release_id: i64 = args.required(PARAM_RELEASE_ID)?;

        ctx.client()
            .delete_release(&owner, &repo, release_id)
            .await?;
        tracing::info!(%owner, %repo, release_id, "deleted release");
        Ok(ToolOutput::Message(RELEASE_DELETED.to_string()))
    }
}

pub struct GenerateReleaseNotes;

#[async_trait]
impl ToolFn for GenerateReleaseNotes {
    async fn call(&self, ctx: &HandlerContext) -> Result<ToolOutput> {
        let args = ctx.arguments();
        let (owner, repo) = repository(args)?;
        let request = GenerateNotesRequest {
            tag_name:          args.required(PARAM_TAG_NAME)?,
            target_commitish:  args.supplied(PARAM_TARGET_COMMITISH)?,
            previous_tag_name: args.supplied(PARAM_PREVIOUS_TAG_NAME)?,
        };

        let notes = ctx
            .client()
            .generate_release_notes(&owner, &repo, &request)
            .await?;
        ToolOutput::json(&notes)
    }
}

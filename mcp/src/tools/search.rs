use async_trait::async_trait;

use crate::constants::{
    PARAM_ORDER, PARAM_Q, PARAM_QUERY, PARAM_SORT, SORT_ORDER_VALUES, USER_SORT_VALUES,
};
use crate::error::Result;
use crate::field_extraction::Pagination;
use crate::github::types::SearchQuery;
use crate::sanitize::{
    clean_code_search_result, clean_repository_search_result, minimal_user_search_result,
};
use crate::tool::{HandlerContext, ToolFn, ToolOutput};

/// Qualifier that restricts user search to personal accounts
const USER_QUALIFIER: &str = "type:user";

pub struct SearchRepositories;

#[async_trait]
impl ToolFn for SearchRepositories {
    async fn call(&self, ctx: &HandlerContext) -> Result<ToolOutput> {
        let args = ctx.arguments();
        let query = SearchQuery {
            query:      args.required(PARAM_QUERY)?,
            sort:       None,
            order:      None,
            pagination: Pagination::resolve(args)?,
        };

        let result = ctx.client().search_repositories(&query).await?;
        ToolOutput::json(&clean_repository_search_result(&result))
    }
}

pub struct SearchCode;

#[async_trait]
impl ToolFn for SearchCode {
    async fn call(&self, ctx: &HandlerContext) -> Result<ToolOutput> {
        let args = ctx.arguments();
        let query = SearchQuery {
            query:      args.required(PARAM_Q)?,
            sort:       args.supplied(PARAM_SORT)?,
            order:      args.supplied_one_of(PARAM_ORDER, SORT_ORDER_VALUES)?,
            pagination: Pagination::resolve(args)?,
        };

        let result = ctx.client().search_code(&query).await?;
        ToolOutput::json(&clean_code_search_result(&result))
    }
}

pub struct SearchUsers;

#[async_trait]
impl ToolFn for SearchUsers {
    async fn call(&self, ctx: &HandlerContext) -> Result<ToolOutput> {
        let args = ctx.arguments();
        let q: String = args.required(PARAM_Q)?;
        let query = SearchQuery {
            query:      format!("{USER_QUALIFIER} {q}"),
            sort:       args.supplied_one_of(PARAM_SORT, USER_SORT_VALUES)?,
            order:      args.supplied_one_of(PARAM_ORDER, SORT_ORDER_VALUES)?,
            pagination: Pagination::resolve(args)?,
        };

        let result = ctx.client().search_users(&query).await?;
        ToolOutput::json(&minimal_user_search_result(&result))
    }
}

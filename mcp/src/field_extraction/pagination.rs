//! Pagination arguments shared by every list-style tool.

use error_stack::Report;
use serde::Serialize;

use super::extraction::Arguments;
use crate::constants::{DEFAULT_PAGE, DEFAULT_PER_PAGE, MAX_PER_PAGE, PARAM_PAGE, PARAM_PER_PAGE};
use crate::error::{Error, Result};

/// Resolved `{page, perPage}` pair for a list request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    /// 1-based page number
    pub page:     u32,
    /// Results per page
    pub per_page: u32,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page:     DEFAULT_PAGE,
            per_page: DEFAULT_PER_PAGE,
        }
    }
}

impl Pagination {
    /// Resolve the optional `page` and `perPage` arguments.
    ///
    /// Absent values take the platform defaults. Values outside the allowed
    /// bounds are rejected rather than clamped.
    ///
    /// # Errors
    /// `WrongType` for non-integral or non-numeric values, `OutOfRange` for
    /// `page < 1`, `perPage < 1` or `perPage > 100`.
    pub fn resolve(arguments: Arguments<'_>) -> Result<Self> {
        let page = arguments
            .supplied::<i64>(PARAM_PAGE)?
            .map_or(Ok(DEFAULT_PAGE), |page| bounded(PARAM_PAGE, page, u32::MAX))?;
        let per_page = arguments
            .supplied::<i64>(PARAM_PER_PAGE)?
            .map_or(Ok(DEFAULT_PER_PAGE), |per_page| {
                bounded(PARAM_PER_PAGE, per_page, MAX_PER_PAGE)
            })?;

        Ok(Self { page, per_page })
    }

    /// Query string pairs understood by the REST API
    pub fn query_pairs(self) -> [(&'static str, String); 2] {
        [
            ("page", self.page.to_string()),
            ("per_page", self.per_page.to_string()),
        ]
    }
}

fn bounded(name: &str, value: i64, max: u32) -> Result<u32> {
    if value < 1 {
        return Err(Report::new(Error::out_of_range(
            name,
            format!("{value} must be at least 1"),
        )));
    }
    u32::try_from(value)
        .ok()
        .filter(|value| *value <= max)
        .ok_or_else(|| {
            Report::new(Error::out_of_range(
                name,
                format!("{value} must be at most {max}"),
            ))
        })
}

//! Constants for tool parameters, pagination, networking and configuration
//!
//! This module contains the parameter names shared between tools, the platform
//! pagination bounds, and the defaults used to reach the GitHub REST API.

// ============================================================================
// TOOL PARAMETER CONSTANTS
// ============================================================================

/// Parameter name constants for tool inputs
pub const PARAM_BODY: &str = "body";
pub const PARAM_DISCUSSION_CATEGORY_NAME: &str = "discussion_category_name";
pub const PARAM_DRAFT: &str = "draft";
pub const PARAM_GENERATE_RELEASE_NOTES: &str = "generate_release_notes";
pub const PARAM_MAKE_LATEST: &str = "make_latest";
pub const PARAM_NAME: &str = "name";
pub const PARAM_ORDER: &str = "order";
pub const PARAM_OWNER: &str = "owner";
pub const PARAM_PAGE: &str = "page";
pub const PARAM_PATH: &str = "path";
pub const PARAM_PER_PAGE: &str = "perPage";
pub const PARAM_PRERELEASE: &str = "prerelease";
pub const PARAM_PREVIOUS_TAG_NAME: &str = "previous_tag_name";
pub const PARAM_Q: &str = "q";
pub const PARAM_QUERY: &str = "query";
pub const PARAM_REF: &str = "ref";
pub const PARAM_RELEASE_ID: &str = "release_id";
pub const PARAM_REPO: &str = "repo";
pub const PARAM_SORT: &str = "sort";
pub const PARAM_TAG: &str = "tag";
pub const PARAM_TAG_NAME: &str = "tag_name";
pub const PARAM_TARGET_COMMITISH: &str = "target_commitish";

/// Allowed values for enumerated parameters
pub const MAKE_LATEST_VALUES: &[&str] = &["true", "false", "legacy"];
pub const SORT_ORDER_VALUES: &[&str] = &["asc", "desc"];
pub const USER_SORT_VALUES: &[&str] = &["followers", "repositories", "joined"];

// ============================================================================
// PAGINATION CONSTANTS
// ============================================================================

/// Page used when the caller does not ask for one
pub const DEFAULT_PAGE: u32 = 1;

/// Page size used when the caller does not ask for one
pub const DEFAULT_PER_PAGE: u32 = 30;

/// Largest page size the platform accepts
pub const MAX_PER_PAGE: u32 = 100;

// ============================================================================
// CONTENT CONSTANTS
// ============================================================================

/// Encoding tag written on content that has already been decoded
pub const TEXT_ENCODING: &str = "text";

/// Transport encoding GitHub uses for file content
pub const BASE64_ENCODING: &str = "base64";

// ============================================================================
// NETWORK CONSTANTS
// ============================================================================

/// Public GitHub REST endpoint
pub const DEFAULT_API_BASE_URL: &str = "https://api.github.com";

/// Path prefix for GitHub Enterprise Server REST endpoints
pub const ENTERPRISE_API_PATH: &str = "/api/v3";

/// Media type requested from the REST API
pub const GITHUB_ACCEPT: &str = "application/vnd.github+json";

/// REST API version pinned in every request
pub const GITHUB_API_VERSION: &str = "2022-11-28";

/// Header carrying the pinned API version
pub const GITHUB_API_VERSION_HEADER: &str = "x-github-api-version";

/// User agent sent with every request
pub const USER_AGENT: &str = concat!("github_mcp/", env!("CARGO_PKG_VERSION"));

/// Request timeout in seconds
pub const REQUEST_TIMEOUT: u64 = 30;

/// Connect timeout in seconds
pub const CONNECTION_TIMEOUT: u64 = 10;

/// Idle pooled connections are dropped after this many seconds
pub const POOL_IDLE_TIMEOUT: u64 = 90;

/// Maximum idle pooled connections per host
pub const POOL_MAX_IDLE_PER_HOST: usize = 8;

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Environment variable holding the access token
pub const ENV_TOKEN: &str = "GITHUB_PERSONAL_ACCESS_TOKEN";

/// Environment variable naming a GitHub Enterprise host
pub const ENV_HOST: &str = "GITHUB_HOST";

/// Environment variable enabling read-only mode
pub const ENV_READ_ONLY: &str = "GITHUB_READ_ONLY";

/// Environment variable selecting the trace level
pub const ENV_LOG_LEVEL: &str = "GITHUB_MCP_LOG_LEVEL";

/// Environment variable overriding the trace log path
pub const ENV_LOG_FILE: &str = "GITHUB_MCP_LOG_FILE";

/// Trace log filename placed in the temp directory by default
pub const TRACE_LOG_FILENAME: &str = "github_mcp_trace.log";

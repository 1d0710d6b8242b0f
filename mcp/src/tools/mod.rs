//! Handlers for every exposed tool

mod contents;
mod releases;
mod search;
#[cfg(test)]
pub(crate) mod test_support;

pub use contents::GetFileContents;
pub use releases::{
    CreateRelease, DeleteRelease, GenerateReleaseNotes, GetLatestRelease, GetRelease,
    GetReleaseByTag, ListReleases, UpdateRelease,
};
pub use search::{SearchCode, SearchRepositories, SearchUsers};

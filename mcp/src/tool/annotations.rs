//! Tool annotations for GitHub tools

use rmcp::model::ToolAnnotations;
use strum::AsRefStr;

/// Tool categories for grouping titles
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, AsRefStr)]
pub enum ToolCategory {
    #[strum(serialize = "Contents")]
    Contents,
    #[strum(serialize = "Releases")]
    Releases,
    #[strum(serialize = "Search")]
    Search,
}

/// Describes what a tool does to remote state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnvironmentImpact {
    /// Only reads data
    ReadOnly,
    /// Removes data; repeating the call changes nothing further
    DestructiveIdempotent,
    /// Overwrites existing data; repeating with the same arguments is harmless
    AdditiveIdempotent,
    /// Creates something new on every call
    AdditiveNonIdempotent,
}

/// Title, category and impact of a tool
#[derive(Debug, Clone)]
pub struct Annotation {
    pub title:              String,
    pub category:           ToolCategory,
    pub environment_impact: EnvironmentImpact,
}

impl Annotation {
    pub fn new(
        title: impl Into<String>,
        category: ToolCategory,
        environment_impact: EnvironmentImpact,
    ) -> Self {
        Self {
            title: title.into(),
            category,
            environment_impact,
        }
    }

    pub fn is_read_only(&self) -> bool {
        self.environment_impact == EnvironmentImpact::ReadOnly
    }
}

impl From<Annotation> for ToolAnnotations {
    fn from(annotation: Annotation) -> Self {
        let (read_only, destructive, idempotent) = match annotation.environment_impact {
            EnvironmentImpact::ReadOnly => (true, false, true),
            EnvironmentImpact::DestructiveIdempotent => (false, true, true),
            EnvironmentImpact::AdditiveIdempotent => (false, false, true),
            EnvironmentImpact::AdditiveNonIdempotent => (false, false, false),
        };

        // every tool talks to GitHub
        Self::with_title(annotation.title)
            .read_only(read_only)
            .destructive(destructive)
            .idempotent(idempotent)
            .open_world(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_only_mapping() {
        let annotations: ToolAnnotations =
            Annotation::new("List releases", ToolCategory::Releases, EnvironmentImpact::ReadOnly)
                .into();
        assert_eq!(annotations.title.as_deref(), Some("List releases"));
        assert_eq!(annotations.read_only_hint, Some(true));
        assert_eq!(annotations.destructive_hint, Some(false));
        assert_eq!(annotations.open_world_hint, Some(true));
    }

    #[test]
    fn test_destructive_mapping() {
        let annotation = Annotation::new(
            "Delete release",
            ToolCategory::Releases,
            EnvironmentImpact::DestructiveIdempotent,
        );
        assert!(!annotation.is_read_only());

        let annotations: ToolAnnotations = annotation.into();
        assert_eq!(annotations.read_only_hint, Some(false));
        assert_eq!(annotations.destructive_hint, Some(true));
        assert_eq!(annotations.idempotent_hint, Some(true));
    }
}

use crate::{Category, Message, ProjectRegistry, Source};

/// Category selector; defaults to no constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    /// Parses a sidebar token. `"all"` clears the constraint; category
    /// tokens go through the normalizer so `"high"` selects high_priority.
    pub fn parse(token: &str) -> Option<Self> {
        if token == "all" {
            return Some(CategoryFilter::All);
        }
        Category::parse(token).map(CategoryFilter::Only)
    }

    fn matches(&self, message: &Message) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(wanted) => message.canonical_category() == Some(*wanted),
        }
    }
}

/// Source selector; defaults to no constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SourceFilter {
    #[default]
    All,
    Only(Source),
}

impl SourceFilter {
    pub fn parse(token: &str) -> Option<Self> {
        if token == "all" {
            return Some(SourceFilter::All);
        }
        Source::parse(token).map(SourceFilter::Only)
    }

    fn matches(&self, message: &Message) -> bool {
        match self {
            SourceFilter::All => true,
            SourceFilter::Only(wanted) => message.canonical_source() == Some(*wanted),
        }
    }
}

/// Project selector. `"none"` is reserved: it always means "no constraint",
/// never a project name.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ProjectFilter {
    #[default]
    None,
    Named(String),
}

impl ProjectFilter {
    pub fn parse(token: &str) -> Self {
        if token == "none" {
            ProjectFilter::None
        } else {
            ProjectFilter::Named(token.to_string())
        }
    }

    fn matches(&self, message: &Message, registry: &ProjectRegistry) -> bool {
        match self {
            ProjectFilter::None => true,
            ProjectFilter::Named(project) => registry.contains_mention(&message.body, project),
        }
    }
}

/// The three independent selectors; the applied filter is their conjunction.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterState {
    pub category: CategoryFilter,
    pub source: SourceFilter,
    pub project: ProjectFilter,
}

impl FilterState {
    /// Membership test for one message. The equality dimensions run before
    /// the project substring scan.
    pub fn matches(&self, message: &Message, registry: &ProjectRegistry) -> bool {
        self.source.matches(message)
            && self.category.matches(message)
            && self.project.matches(message, registry)
    }

    pub fn is_unconstrained(&self) -> bool {
        *self == FilterState::default()
    }
}

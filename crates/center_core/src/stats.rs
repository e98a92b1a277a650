use std::collections::BTreeMap;

use crate::{Category, Message, ProjectRegistry, Source};

/// Sidebar badge counts, derived fresh from the full message collection.
///
/// Each dimension applies only its own alias rule over the unfiltered
/// collection; active filters never change these numbers. Tokens outside
/// the canonical vocabulary land in the `other` bucket of their dimension,
/// so each dimension sums to `total`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Stats {
    pub total: usize,
    pub urgent: usize,
    pub high_priority: usize,
    pub routine: usize,
    pub archive: usize,
    pub other_category: usize,
    pub telegram: usize,
    pub twitter: usize,
    pub other_source: usize,
    /// Mention counts per registry project, registry order, zero-count
    /// entries omitted.
    pub project_mentions: BTreeMap<String, usize>,
}

impl Stats {
    pub fn collect(messages: &[Message], registry: &ProjectRegistry) -> Self {
        let mut stats = Stats {
            total: messages.len(),
            ..Stats::default()
        };

        for message in messages {
            match message.canonical_category() {
                Some(Category::Urgent) => stats.urgent += 1,
                Some(Category::HighPriority) => stats.high_priority += 1,
                Some(Category::Routine) => stats.routine += 1,
                Some(Category::Archive) => stats.archive += 1,
                None => stats.other_category += 1,
            }
            match message.canonical_source() {
                Some(Source::Telegram) => stats.telegram += 1,
                Some(Source::Twitter) => stats.twitter += 1,
                None => stats.other_source += 1,
            }
            for project in registry.mentions(&message.body) {
                *stats.project_mentions.entry(project.to_string()).or_default() += 1;
            }
        }

        stats
    }

    pub fn category_count(&self, category: Category) -> usize {
        match category {
            Category::Urgent => self.urgent,
            Category::HighPriority => self.high_priority,
            Category::Routine => self.routine,
            Category::Archive => self.archive,
        }
    }

    pub fn source_count(&self, source: Source) -> usize {
        match source {
            Source::Telegram => self.telegram,
            Source::Twitter => self.twitter,
        }
    }
}

pub type TemplateId = u64;

/// Built-in reply templates, always present after a fresh initialization.
pub const DEFAULT_TEMPLATES: [&str; 5] = [
    "Thanks for your audit request! Pashov Audit Group (trusted by Uniswap and Aave) will review your {project} and respond soon.",
    "Can you share more details about your {project} smart contract? We've audited similar protocols like Sushi and Ethena.",
    "Interested in LayerZero integration? Pashov Audit Group has audited their cross-chain contracts.",
    "For NFT projects like Blueberry Protocol, audited by us, please provide your contract address.",
    "We're excited to support Arbitrum builders - contact us for an audit!",
];

/// Storage capability for the template list.
///
/// The persisted representation is always the complete ordered content
/// list, never a diff. Implementations live in the shell; the registry
/// itself never touches IO.
pub trait TemplateStore {
    /// Returns the last persisted snapshot, or `None` when storage is
    /// absent or unreadable.
    fn load(&self) -> Option<Vec<String>>;
    /// Overwrites the last persisted snapshot. Best effort; failures are
    /// the implementation's to log.
    fn save(&self, entries: &[String]);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateEntry {
    pub id: TemplateId,
    pub content: String,
}

/// Ordered, user-editable reply templates.
///
/// Ids are assigned once per entry and stay stable across reorders, so a
/// drag operation can name its endpoints even while indices shift.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateRegistry {
    entries: Vec<TemplateEntry>,
    next_id: TemplateId,
}

impl Default for TemplateRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl TemplateRegistry {
    /// Registry holding exactly the built-in defaults.
    pub fn with_defaults() -> Self {
        Self::from_contents(DEFAULT_TEMPLATES.iter().map(|text| text.to_string()))
    }

    fn from_contents(contents: impl IntoIterator<Item = String>) -> Self {
        let mut registry = TemplateRegistry {
            entries: Vec::new(),
            next_id: 0,
        };
        for content in contents {
            registry.push(content);
        }
        registry
    }

    /// Rebuilds the registry from a persisted snapshot.
    ///
    /// A snapshot containing every built-in is the complete list and is
    /// adopted verbatim, reproducing the last-seen order exactly. A list
    /// missing built-ins is treated as customs only: entries duplicating a
    /// built-in are dropped and the rest are seated after the defaults.
    pub fn from_persisted(persisted: Vec<String>) -> Self {
        let complete = DEFAULT_TEMPLATES
            .iter()
            .all(|default| persisted.iter().any(|entry| entry == default));
        if complete {
            return Self::from_contents(persisted);
        }

        let customs = persisted
            .into_iter()
            .filter(|entry| !DEFAULT_TEMPLATES.contains(&entry.as_str()));
        Self::from_contents(
            DEFAULT_TEMPLATES
                .iter()
                .map(|text| text.to_string())
                .chain(customs),
        )
    }

    fn push(&mut self, content: String) {
        self.next_id += 1;
        self.entries.push(TemplateEntry {
            id: self.next_id,
            content,
        });
    }

    /// Appends a trimmed entry. Blank or whitespace-only input is rejected
    /// without error. Returns whether the registry changed.
    pub fn create(&mut self, text: &str) -> bool {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return false;
        }
        self.push(trimmed.to_string());
        true
    }

    /// Removes the entry at `index`. Out of range is a no-op.
    ///
    /// Confirmation is the state machine's concern; by the time this runs
    /// the user has already confirmed.
    pub fn remove(&mut self, index: usize) -> bool {
        if index >= self.entries.len() {
            return false;
        }
        self.entries.remove(index);
        true
    }

    /// Stable array move: the entry identified by `from` takes the slot
    /// currently held by `to`, everything between shifts by one. `from ==
    /// to` or an unknown id is a no-op. Returns whether the order changed.
    pub fn reorder(&mut self, from: TemplateId, to: TemplateId) -> bool {
        if from == to {
            return false;
        }
        let Some(from_idx) = self.position(from) else {
            return false;
        };
        let Some(to_idx) = self.position(to) else {
            return false;
        };
        let entry = self.entries.remove(from_idx);
        self.entries.insert(to_idx, entry);
        true
    }

    fn position(&self, id: TemplateId) -> Option<usize> {
        self.entries.iter().position(|entry| entry.id == id)
    }

    pub fn entries(&self) -> &[TemplateEntry] {
        &self.entries
    }

    pub fn get(&self, index: usize) -> Option<&TemplateEntry> {
        self.entries.get(index)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The complete ordered content list, the persisted representation.
    pub fn snapshot(&self) -> Vec<String> {
        self.entries
            .iter()
            .map(|entry| entry.content.clone())
            .collect()
    }
}

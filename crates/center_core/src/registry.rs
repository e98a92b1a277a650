/// How project names are matched against message text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchCase {
    #[default]
    Sensitive,
    Insensitive,
}

/// The fixed list of audited project names used for mention detection.
///
/// Read-only within the core; iteration order is the display order and the
/// order mentions are reported in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectRegistry {
    names: Vec<String>,
    case: MatchCase,
}

const AUDITED_PROJECTS: [&str; 7] = [
    "Uniswap",
    "Aave",
    "LayerZero",
    "Ethena",
    "Sushi",
    "Arbitrum",
    "Blueberry",
];

impl Default for ProjectRegistry {
    fn default() -> Self {
        Self::audited()
    }
}

impl ProjectRegistry {
    /// The built-in audited-project registry.
    pub fn audited() -> Self {
        Self::new(AUDITED_PROJECTS.iter().map(|name| name.to_string()))
    }

    pub fn new(names: impl IntoIterator<Item = String>) -> Self {
        ProjectRegistry {
            names: names.into_iter().collect(),
            case: MatchCase::default(),
        }
    }

    pub fn with_case(mut self, case: MatchCase) -> Self {
        self.case = case;
        self
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Projects mentioned in `text`, in registry order.
    ///
    /// A mention is plain substring containment; no word-boundary logic.
    /// Recomputed on every call.
    pub fn mentions<'a>(&'a self, text: &str) -> Vec<&'a str> {
        let lowered;
        let haystack = match self.case {
            MatchCase::Sensitive => text,
            MatchCase::Insensitive => {
                lowered = text.to_lowercase();
                &lowered
            }
        };
        self.names
            .iter()
            .filter(|name| match self.case {
                MatchCase::Sensitive => haystack.contains(name.as_str()),
                MatchCase::Insensitive => haystack.contains(&name.to_lowercase()),
            })
            .map(String::as_str)
            .collect()
    }

    pub fn contains_mention(&self, text: &str, project: &str) -> bool {
        self.mentions(text).iter().any(|name| *name == project)
    }
}

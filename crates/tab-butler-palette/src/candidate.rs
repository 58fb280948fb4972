//! Candidate types shown in the palette
//!
//! A candidate is either an open tab or an extension action. Both variants
//! carry a pre-computed, lower-cased search projection so the filter never
//! has to know which variant it is looking at.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Browser tab identifier.
///
/// The browser reserves `-1` for "no tab"; such tabs never become candidates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TabId(i64);

impl TabId {
    /// Sentinel the browser uses for tabs that have no real identifier
    pub const NONE: TabId = TabId(-1);

    pub fn new(value: i64) -> Self {
        TabId(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for TabId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Lower-cased text fields a candidate can be found by.
///
/// Fields are kept separate so a query never matches across the boundary
/// between two fields (e.g. the end of a title and the start of a URL).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchText {
    fields: Vec<String>,
}

impl SearchText {
    fn from_fields<'a>(fields: impl IntoIterator<Item = &'a str>) -> Self {
        Self {
            fields: fields.into_iter().map(str::to_lowercase).collect(),
        }
    }

    /// `needle` must already be lower-cased
    pub fn contains(&self, needle: &str) -> bool {
        self.fields.iter().any(|field| field.contains(needle))
    }

    pub fn fields(&self) -> &[String] {
        &self.fields
    }
}

/// An open tab in the current window
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabCandidate {
    id: TabId,
    title: String,
    url: String,
    display_index: usize,
    icon: Option<String>,
    search_text: SearchText,
}

impl TabCandidate {
    pub fn new(
        id: TabId,
        title: impl Into<String>,
        url: impl Into<String>,
        display_index: usize,
        icon: Option<String>,
    ) -> Self {
        let title = title.into();
        let url = url.into();
        let search_text = SearchText::from_fields([title.as_str(), url.as_str()]);
        Self {
            id,
            title,
            url,
            display_index,
            icon,
            search_text,
        }
    }

    pub fn id(&self) -> TabId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Position of the tab in its window's tab strip
    pub fn display_index(&self) -> usize {
        self.display_index
    }

    pub fn icon(&self) -> Option<&str> {
        self.icon.as_deref()
    }

    /// Title, or the URL for pages that have not reported one
    pub fn display_label(&self) -> &str {
        if self.title.trim().is_empty() {
            &self.url
        } else {
            &self.title
        }
    }
}

/// A named extension action (e.g. "Close Tab")
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionCandidate {
    name: String,
    command: String,
    search_text: SearchText,
}

impl ActionCandidate {
    pub fn new(name: impl Into<String>, command: impl Into<String>) -> Self {
        let name = name.into();
        let search_text = SearchText::from_fields([name.as_str()]);
        Self {
            name,
            command: command.into(),
            search_text,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Identifier sent to the host when the action is committed
    pub fn command(&self) -> &str {
        &self.command
    }
}

/// Identity of a candidate within its collection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CandidateId<'a> {
    Tab(TabId),
    Action(&'a str),
}

/// Anything that can appear in the palette list
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Candidate {
    Tab(TabCandidate),
    Action(ActionCandidate),
}

impl Candidate {
    pub fn id(&self) -> CandidateId<'_> {
        match self {
            Candidate::Tab(tab) => CandidateId::Tab(tab.id()),
            Candidate::Action(action) => CandidateId::Action(action.command()),
        }
    }

    pub fn display_label(&self) -> &str {
        match self {
            Candidate::Tab(tab) => tab.display_label(),
            Candidate::Action(action) => action.name(),
        }
    }

    /// Secondary line shown under the label (tab URL); actions have none
    pub fn secondary_text(&self) -> Option<&str> {
        match self {
            Candidate::Tab(tab) => Some(tab.url()),
            Candidate::Action(_) => None,
        }
    }

    pub fn searchable_text(&self) -> &SearchText {
        match self {
            Candidate::Tab(tab) => &tab.search_text,
            Candidate::Action(action) => &action.search_text,
        }
    }

    pub fn as_tab(&self) -> Option<&TabCandidate> {
        match self {
            Candidate::Tab(tab) => Some(tab),
            Candidate::Action(_) => None,
        }
    }

    pub fn as_action(&self) -> Option<&ActionCandidate> {
        match self {
            Candidate::Action(action) => Some(action),
            Candidate::Tab(_) => None,
        }
    }
}

impl From<TabCandidate> for Candidate {
    fn from(tab: TabCandidate) -> Self {
        Candidate::Tab(tab)
    }
}

impl From<ActionCandidate> for Candidate {
    fn from(action: ActionCandidate) -> Self {
        Candidate::Action(action)
    }
}

/// Which collection the palette is searching
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SearchMode {
    #[default]
    TabSearch,
    TabActions,
}

impl SearchMode {
    /// The other mode
    pub fn toggled(&self) -> Self {
        match self {
            SearchMode::TabSearch => SearchMode::TabActions,
            SearchMode::TabActions => SearchMode::TabSearch,
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            SearchMode::TabSearch => "Search Tabs...",
            SearchMode::TabActions => "Search Actions...",
        }
    }

    /// Heading shown when the filtered list is empty
    pub fn empty_heading(&self) -> &'static str {
        match self {
            SearchMode::TabSearch => "No tabs to show",
            SearchMode::TabActions => "No actions to show",
        }
    }

    /// Noun used in result counters ("3 tabs")
    pub fn noun(&self) -> &'static str {
        match self {
            SearchMode::TabSearch => "tabs",
            SearchMode::TabActions => "actions",
        }
    }
}

impl fmt::Display for SearchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchMode::TabSearch => write!(f, "tab-search"),
            SearchMode::TabActions => write!(f, "tab-actions"),
        }
    }
}

#[derive(Debug, Clone, Error)]
#[error("unknown search mode '{0}' (expected 'tab-search' or 'tab-actions')")]
pub struct ParseModeError(String);

impl FromStr for SearchMode {
    type Err = ParseModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "tab-search" | "tabs" | "search" => Ok(SearchMode::TabSearch),
            "tab-actions" | "actions" => Ok(SearchMode::TabActions),
            _ => Err(ParseModeError(s.to_string())),
        }
    }
}

//! Candidate providers: the action catalog and the tab inventory

use std::collections::HashSet;
use std::fmt::Debug;
use std::future::Future;

use serde::Deserialize;
use thiserror::Error;

use crate::candidate::{ActionCandidate, TabCandidate, TabId};

/// Errors raised while retrieving the tab inventory
#[derive(Debug, Error)]
pub enum InventoryError {
    /// The inventory source could not be read
    #[error("Failed to read tab inventory: {0}")]
    Read(#[source] std::io::Error),

    /// The inventory was read but is not a valid tab list
    #[error("Failed to parse tab inventory: {0}")]
    Parse(#[source] serde_json::Error),
}

/// Trait for supplying extension actions to the catalog
///
/// Implementors return their actions in display order.
pub trait ActionProvider: Debug {
    fn actions(&self) -> Vec<ActionCandidate>;

    /// Provider name for debugging
    fn name(&self) -> &str;
}

/// Registry of action providers
///
/// Collects actions from every registered provider into one ordered list.
/// Providers are queried in registration order; an action whose command
/// identifier was already contributed by an earlier provider is skipped so
/// identifiers stay unique within the catalog.
#[derive(Debug, Default)]
pub struct ActionCatalog {
    providers: Vec<Box<dyn ActionProvider>>,
}

impl ActionCatalog {
    pub fn new() -> Self {
        Self {
            providers: Vec::new(),
        }
    }

    /// Catalog holding only the built-in tab actions
    pub fn builtin() -> Self {
        let mut catalog = Self::new();
        catalog.register(Box::new(BuiltinActions));
        catalog
    }

    pub fn register(&mut self, provider: Box<dyn ActionProvider>) {
        self.providers.push(provider);
    }

    pub fn all_actions(&self) -> Vec<ActionCandidate> {
        let mut actions: Vec<ActionCandidate> = Vec::new();
        for provider in &self.providers {
            for action in provider.actions() {
                if actions.iter().any(|a| a.command() == action.command()) {
                    log::warn!(
                        "Provider {} re-registers command '{}', skipping",
                        provider.name(),
                        action.command()
                    );
                    continue;
                }
                actions.push(action);
            }
        }
        actions
    }

    pub fn provider_count(&self) -> usize {
        self.providers.len()
    }
}

/// The tab actions shipped with the extension
#[derive(Debug)]
pub struct BuiltinActions;

impl ActionProvider for BuiltinActions {
    fn actions(&self) -> Vec<ActionCandidate> {
        [
            ("Close Tab", "close-tab"),
            ("Duplicate Tab", "duplicate-tab"),
            ("Pin Tab", "pin-tab"),
            ("Unpin Tab", "unpin-tab"),
            ("Mute Tab", "mute-tab"),
            ("Unmute Tab", "unmute-tab"),
            ("Reload Tab", "reload-tab"),
            ("New Tab", "new-tab"),
        ]
        .into_iter()
        .map(|(name, command)| ActionCandidate::new(name, command))
        .collect()
    }

    fn name(&self) -> &str {
        "Builtin"
    }
}

/// Source of the open tabs, queried once per overlay activation
pub trait TabInventory: Send + Sync + 'static {
    fn fetch_tabs(&self) -> impl Future<Output = Result<Vec<TabCandidate>, InventoryError>> + Send;
}

/// Tab record as reported by the browser; any field may be missing
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawTab {
    pub id: Option<i64>,
    pub title: Option<String>,
    pub url: Option<String>,
    pub index: Option<usize>,
    pub fav_icon_url: Option<String>,
}

/// Convert browser tab records into candidates
///
/// Tabs without an identifier, with the "no tab" sentinel, or without a URL
/// cannot be activated and are dropped. A repeated identifier keeps only its
/// first tab. Remaining tabs keep their order.
pub fn tabs_from_raw(raw: Vec<RawTab>) -> Vec<TabCandidate> {
    let mut seen = HashSet::new();
    raw.into_iter()
        .enumerate()
        .filter_map(|(position, tab)| {
            let id = TabId::new(tab.id?);
            if id == TabId::NONE {
                return None;
            }
            let url = tab.url.filter(|url| !url.is_empty())?;
            if !seen.insert(id) {
                log::warn!("Tab id {:?} listed more than once, skipping '{}'", id, url);
                return None;
            }
            Some(TabCandidate::new(
                id,
                tab.title.unwrap_or_default(),
                url,
                tab.index.unwrap_or(position),
                tab.fav_icon_url.filter(|icon| !icon.is_empty()),
            ))
        })
        .collect()
}

/// Parse a JSON array of browser tab records
pub fn parse_tab_inventory(json: &str) -> Result<Vec<TabCandidate>, InventoryError> {
    let raw: Vec<RawTab> = serde_json::from_str(json).map_err(InventoryError::Parse)?;
    Ok(tabs_from_raw(raw))
}

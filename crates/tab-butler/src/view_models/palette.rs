use ratatui::layout::{Position, Rect};
use tab_butler_palette::{LoadingState, PaletteState, SearchMode};

/// View model for the palette popup - all presentation data pre-computed
#[derive(Debug, Clone, PartialEq)]
pub struct PaletteViewModel {
    pub title: String,
    /// Query text, or the mode's placeholder while the query is empty
    pub input_text: String,
    pub input_is_placeholder: bool,
    pub visible_rows: Vec<PaletteRow>,
    /// Shown instead of rows when nothing matches
    pub empty_message: Option<String>,
    /// Bottom bar counter, e.g. "3 tabs"
    pub count_text: String,
    pub scroll_offset: usize,
}

/// A single row in the result list
#[derive(Debug, Clone, PartialEq)]
pub struct PaletteRow {
    pub is_selected: bool,
    /// Selection indicator: "> " or "  "
    pub indicator: String,
    pub label: String,
    /// URL for tab rows
    pub secondary: Option<String>,
}

impl PaletteViewModel {
    pub fn from_state(state: &PaletteState, visible_height: usize) -> Self {
        let mode = state.mode();
        let filtered = state.filtered();
        let total = filtered.len();
        let selected_index = state.selected_index();

        let scroll_offset = scroll_offset(selected_index, total, visible_height);

        let visible_rows = filtered
            .iter()
            .enumerate()
            .skip(scroll_offset)
            .take(visible_height)
            .map(|(i, candidate)| {
                let is_selected = i == selected_index;
                PaletteRow {
                    is_selected,
                    indicator: if is_selected { "> " } else { "  " }.to_string(),
                    label: candidate.display_label().to_string(),
                    secondary: candidate
                        .secondary_text()
                        .filter(|url| *url != candidate.display_label())
                        .map(str::to_string),
                }
            })
            .collect();

        let empty_message = (total == 0).then(|| {
            if mode == SearchMode::TabSearch && state.tabs_loading == LoadingState::Loading {
                "Loading tabs...".to_string()
            } else {
                mode.empty_heading().to_string()
            }
        });

        let (input_text, input_is_placeholder) = if state.query_text().is_empty() {
            (mode.placeholder().to_string(), true)
        } else {
            (format!("> {}", state.query_text()), false)
        };

        let title = match mode {
            SearchMode::TabSearch => " Tab Search ",
            SearchMode::TabActions => " Tab Actions ",
        }
        .to_string();

        Self {
            title,
            input_text,
            input_is_placeholder,
            visible_rows,
            empty_message,
            count_text: format!("{} {}", total, mode.noun()),
            scroll_offset,
        }
    }
}

/// Scroll offset that keeps the selected row centered where possible
fn scroll_offset(selected_index: usize, total: usize, visible_height: usize) -> usize {
    if total <= visible_height || selected_index < visible_height / 2 {
        0
    } else if selected_index >= total.saturating_sub(visible_height / 2) {
        total.saturating_sub(visible_height)
    } else {
        selected_index.saturating_sub(visible_height / 2)
    }
}

/// Where the result rows were drawn, for pointer hit-testing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaletteHitMap {
    pub list_area: Rect,
    pub scroll_offset: usize,
    pub row_count: usize,
}

impl PaletteHitMap {
    /// Filtered index of the row under the pointer
    pub fn index_at(&self, column: u16, row: u16) -> Option<usize> {
        if !self.list_area.contains(Position::new(column, row)) {
            return None;
        }
        let offset = usize::from(row - self.list_area.y);
        (offset < self.row_count).then_some(self.scroll_offset + offset)
    }
}

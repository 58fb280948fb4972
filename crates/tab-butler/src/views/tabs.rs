use ratatui::{
    prelude::*,
    widgets::{Block, Borders, List, ListItem, Paragraph},
};
use tab_butler_palette::LoadingState;

use crate::state::HostState;
use crate::theme::Theme;

/// Render the host window's tab strip as a vertical list
pub fn render_tab_list(f: &mut Frame, area: Rect, host: &HostState, theme: &Theme) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" Window ({} tabs) ", host.tabs.len()))
        .title_style(theme.panel_border())
        .border_style(Style::default().fg(theme.text_muted))
        .style(Style::default().bg(theme.bg_primary));

    let placeholder = match &host.loading {
        LoadingState::Idle | LoadingState::Loading => Some("Loading tabs...".to_string()),
        LoadingState::Error(err) if host.tabs.is_empty() => Some(err.clone()),
        _ if host.tabs.is_empty() => Some("No tabs to show".to_string()),
        _ => None,
    };

    if let Some(message) = placeholder {
        let style = if matches!(host.loading, LoadingState::Error(_)) {
            theme.error()
        } else {
            theme.muted()
        };
        f.render_widget(
            Paragraph::new(message)
                .style(style)
                .alignment(Alignment::Center)
                .block(block),
            area,
        );
        return;
    }

    let items: Vec<ListItem> = host
        .tabs
        .iter()
        .map(|tab| {
            let active = host.is_active(tab);
            let marker = if active {
                Span::styled("● ", Style::default().fg(theme.active_marker))
            } else {
                Span::raw("  ")
            };
            let label_style = if active {
                theme.row().add_modifier(Modifier::BOLD)
            } else {
                theme.row()
            };

            ListItem::new(Line::from(vec![
                marker,
                Span::styled(format!("{:>3} ", tab.display_index() + 1), theme.muted()),
                Span::styled(tab.display_label().to_string(), label_style),
                Span::styled(format!("  {}", tab.url()), theme.muted()),
            ]))
        })
        .collect();

    f.render_widget(List::new(items).block(block), area);
}

/// Render the one-line status bar: last palette command and key hints
pub fn render_status_bar(f: &mut Frame, area: Rect, host: &HostState, theme: &Theme) {
    let mut spans = Vec::new();

    match &host.last_command {
        Some(command) => {
            spans.push(Span::styled("Last: ", theme.key_description()));
            spans.push(Span::styled(
                format!("{}  ", command),
                Style::default().fg(theme.accent_secondary),
            ));
        }
        None => spans.push(Span::styled("No command yet  ", theme.key_description())),
    }

    for (key, description) in [
        ("Ctrl+T", " tabs  "),
        ("Ctrl+E", " actions  "),
        ("p", " palette  "),
        ("`", " console  "),
        ("q", " quit"),
    ] {
        spans.push(Span::styled(key, theme.key_hint()));
        spans.push(Span::styled(description, theme.key_description()));
    }

    f.render_widget(
        Paragraph::new(Line::from(spans)).style(Style::default().bg(theme.bg_secondary)),
        area,
    );
}

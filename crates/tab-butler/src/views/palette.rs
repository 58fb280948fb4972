use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Margin, Rect},
    prelude::*,
    widgets::*,
};
use tab_butler_palette::PaletteState;

use crate::theme::Theme;
use crate::view_models::palette::{PaletteHitMap, PaletteViewModel};

/// Render the palette popup centered over `area`
///
/// Returns where the result rows landed so pointer events can be mapped
/// back to filtered indices.
pub fn render_palette(
    f: &mut Frame,
    area: Rect,
    state: &PaletteState,
    theme: &Theme,
) -> PaletteHitMap {
    // 70% width, 60% height, capped for wide terminals
    let popup_width = (area.width * 70 / 100).min(100);
    let popup_height = (area.height * 60 / 100).clamp(9.min(area.height), 30);
    let popup_area = Rect {
        x: area.x + area.width.saturating_sub(popup_width) / 2,
        y: area.y + area.height.saturating_sub(popup_height) / 2,
        width: popup_width,
        height: popup_height,
    };

    f.render_widget(Clear, popup_area);

    let inner = popup_area.inner(Margin {
        horizontal: 2,
        vertical: 1,
    });
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Input box
            Constraint::Min(1),    // Results list
            Constraint::Length(1), // Bottom bar
        ])
        .split(inner);

    let list_area = chunks[1];
    let vm = PaletteViewModel::from_state(state, list_area.height as usize);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(vm.title.clone())
        .title_style(theme.panel_border())
        .border_style(theme.panel_border())
        .style(theme.panel_background());
    f.render_widget(block, popup_area);

    let input_style = if vm.input_is_placeholder {
        theme.muted()
    } else {
        Style::default().fg(theme.text_primary)
    };
    let input = Paragraph::new(vm.input_text.clone())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.accent_primary))
                .style(Style::default().bg(theme.bg_secondary)),
        )
        .style(input_style.bg(theme.bg_secondary));
    f.render_widget(input, chunks[0]);

    if let Some(ref message) = vm.empty_message {
        let empty = Paragraph::new(message.clone())
            .style(theme.muted())
            .alignment(Alignment::Center);
        f.render_widget(empty, list_area);
    } else {
        let lines: Vec<Line> = vm
            .visible_rows
            .iter()
            .map(|row| {
                let (label_style, secondary_style) = if row.is_selected {
                    (theme.row_selected(), theme.row_selected().fg(theme.text_secondary))
                } else {
                    (theme.row(), theme.muted())
                };

                let mut spans = vec![
                    Span::styled(row.indicator.clone(), label_style),
                    Span::styled(row.label.clone(), label_style),
                ];
                if let Some(ref url) = row.secondary {
                    spans.push(Span::styled(format!("  {}", url), secondary_style));
                }
                Line::from(spans)
            })
            .collect();

        f.render_widget(
            Paragraph::new(lines).style(theme.panel_background()),
            list_area,
        );
    }

    let mut footer = vec![Span::styled(
        format!("{}  ", vm.count_text),
        Style::default().fg(theme.accent_secondary),
    )];
    for (key, description) in [
        ("Enter", " select  "),
        ("↑/↓", " navigate  "),
        ("Tab", " switch mode  "),
        ("Esc", " close"),
    ] {
        footer.push(Span::styled(key, theme.key_hint()));
        footer.push(Span::styled(description, theme.key_description()));
    }
    f.render_widget(
        Paragraph::new(Line::from(footer)).alignment(Alignment::Center),
        chunks[2],
    );

    PaletteHitMap {
        list_area,
        scroll_offset: vm.scroll_offset,
        row_count: vm.visible_rows.len(),
    }
}

use ratatui::{
    prelude::*,
    widgets::{Block, Clear, List, ListItem},
};

use crate::state::DebugConsoleState;
use crate::theme::Theme;

/// Render the debug console as a Quake-style drop-down panel
///
/// Returns the scroll offset actually used, clamped to the available logs.
pub fn render_debug_console(
    f: &mut Frame,
    area: Rect,
    console_state: &DebugConsoleState,
    theme: &Theme,
) -> usize {
    let console_height = (area.height * console_state.height_percent) / 100;
    let console_area = Rect {
        height: console_height.min(area.height),
        ..area
    };

    f.render_widget(Clear, console_area);

    // Poisoned only if a logging thread panicked; show nothing in that case
    let Ok(logs) = console_state.logs.lock() else {
        return console_state.scroll_offset;
    };

    // Border plus header line
    let visible_height = console_height.saturating_sub(3) as usize;
    let total_logs = logs.len();
    let max_offset = total_logs.saturating_sub(visible_height);
    let scroll_offset = if console_state.auto_scroll {
        max_offset
    } else {
        console_state.scroll_offset.min(max_offset)
    };

    let log_items: Vec<ListItem> = logs
        .iter()
        .skip(scroll_offset)
        .take(visible_height)
        .map(|entry| {
            use ::log::Level;

            let level_color = match entry.level {
                Level::Error => theme.status_error,
                Level::Warn => theme.status_warning,
                Level::Info => theme.text_primary,
                Level::Debug => theme.text_secondary,
                Level::Trace => theme.text_muted,
            };

            let target: String = if entry.target.chars().count() > 24 {
                let tail: String = entry.target.chars().skip(entry.target.chars().count() - 21).collect();
                format!("...{}", tail)
            } else {
                format!("{:24}", entry.target)
            };

            let text = format!(
                "{} {:5} {} {}",
                entry.timestamp.format("%H:%M:%S%.3f"),
                entry.level.to_string().to_uppercase(),
                target,
                entry.message
            );

            ListItem::new(text).style(Style::default().fg(level_color))
        })
        .collect();

    let mode = if console_state.auto_scroll {
        "[AUTO]"
    } else {
        "[MANUAL]"
    };
    let logs_list = List::new(log_items).block(
        Block::bordered()
            .title(format!(
                " Debug Console ({}/{}) {} ",
                scroll_offset + visible_height.min(total_logs),
                total_logs,
                mode
            ))
            .title_bottom(" ` Close | j/k Scroll | a Auto-scroll | c Clear ")
            .border_style(Style::default().fg(theme.accent_primary))
            .style(Style::default().bg(theme.bg_secondary)),
    );

    f.render_widget(logs_list, console_area);

    scroll_offset
}

use ratatui::{prelude::*, style::palette::tailwind};

/// Colors and prebuilt styles shared by all views
#[derive(Debug, Clone)]
pub struct Theme {
    // Backgrounds
    pub bg_primary: Color,
    pub bg_secondary: Color,
    pub bg_panel: Color,

    // Text
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,

    pub accent_primary: Color,
    pub accent_secondary: Color,

    pub status_error: Color,
    pub status_warning: Color,

    // Palette rows
    pub selected_bg: Color,
    pub selected_fg: Color,
    pub active_marker: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// Dark theme (default) - sky/amber on zinc
    pub fn dark() -> Self {
        Self {
            bg_primary: tailwind::ZINC.c950,
            bg_secondary: tailwind::ZINC.c900,
            bg_panel: tailwind::ZINC.c800,

            text_primary: tailwind::ZINC.c50,
            text_secondary: tailwind::SKY.c200,
            text_muted: tailwind::ZINC.c500,

            accent_primary: tailwind::SKY.c400,
            accent_secondary: tailwind::AMBER.c400,

            status_error: tailwind::ROSE.c400,
            status_warning: tailwind::AMBER.c500,

            selected_bg: tailwind::SKY.c700,
            selected_fg: Color::White,
            active_marker: tailwind::EMERALD.c400,
        }
    }

    pub fn panel_background(&self) -> Style {
        Style::default().bg(self.bg_panel)
    }

    /// Borders and titles of popups
    pub fn panel_border(&self) -> Style {
        Style::default()
            .fg(self.accent_primary)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for key hints (e.g., "Enter" in "Enter select")
    pub fn key_hint(&self) -> Style {
        Style::default()
            .fg(self.accent_primary)
            .add_modifier(Modifier::BOLD)
    }

    pub fn key_description(&self) -> Style {
        Style::default().fg(self.text_muted)
    }

    /// Highlighted palette row
    pub fn row_selected(&self) -> Style {
        Style::default()
            .fg(self.selected_fg)
            .bg(self.selected_bg)
            .add_modifier(Modifier::BOLD)
    }

    pub fn row(&self) -> Style {
        Style::default().fg(self.text_primary)
    }

    pub fn error(&self) -> Style {
        Style::default()
            .fg(self.status_error)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for muted/helper text
    pub fn muted(&self) -> Style {
        Style::default().fg(self.text_muted)
    }
}

/// Terminal event routing
///
/// Host-wide bindings are checked first. Everything else is offered to the
/// palette's capture listener through the [`InputHub`]; keys it lets
/// through fall back to text editing while the palette is open, or to the
/// host page otherwise.
use ratatui::crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use tab_butler_palette::{InputHub, Key, Propagation, SearchMode, text_input};

use crate::actions::Action;

/// UI flags key routing depends on, read from the app when an event is handled
#[derive(Debug, Clone, Copy, Default)]
pub struct EventContext {
    pub palette_open: bool,
    pub debug_console_open: bool,
}

pub fn handle_event(event: Event, hub: &InputHub, ctx: EventContext) -> Action {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => handle_key_event(key, hub, ctx),
        Event::Mouse(mouse) if ctx.palette_open => handle_mouse_event(mouse),
        _ => Action::None,
    }
}

/// Translate a terminal key into the palette's key vocabulary
///
/// Chords with Ctrl or Alt never reach the palette as text.
pub fn to_palette_key(key: &KeyEvent) -> Key {
    if key
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
    {
        return Key::Other;
    }
    match key.code {
        KeyCode::Up => Key::ArrowUp,
        KeyCode::Down => Key::ArrowDown,
        KeyCode::Enter => Key::Enter,
        KeyCode::Esc => Key::Escape,
        KeyCode::Tab => Key::Tab,
        KeyCode::Backspace => Key::Backspace,
        KeyCode::Char(c) => Key::Char(c),
        _ => Key::Other,
    }
}

fn handle_key_event(key: KeyEvent, hub: &InputHub, ctx: EventContext) -> Action {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    // Host-wide bindings, checked before any listener
    match key.code {
        KeyCode::Char('t') if ctrl => return Action::ActivatePalette(SearchMode::TabSearch),
        KeyCode::Char('e') if ctrl => return Action::ActivatePalette(SearchMode::TabActions),
        KeyCode::Char('c') if ctrl => return Action::Quit,
        KeyCode::Char('`') => return Action::ToggleDebugConsole,
        _ => {}
    }

    // The console is modal while open
    if ctx.debug_console_open {
        return match key.code {
            KeyCode::Char('j') | KeyCode::Down => Action::ScrollDebugConsoleDown,
            KeyCode::Char('k') | KeyCode::Up => Action::ScrollDebugConsoleUp,
            KeyCode::Char('a') => Action::ToggleDebugAutoScroll,
            KeyCode::Char('c') => Action::ClearDebugLogs,
            KeyCode::Esc => Action::ToggleDebugConsole,
            _ => Action::None,
        };
    }

    let palette_key = to_palette_key(&key);
    if hub.deliver(&palette_key) == Propagation::Stop {
        // Consumed by the palette listener, which forwarded it itself
        return Action::None;
    }

    if ctx.palette_open {
        return match palette_key {
            Key::Escape => Action::DismissPalette,
            Key::Tab => Action::TogglePaletteMode,
            other => text_input(&other).map_or(Action::None, Action::Palette),
        };
    }

    match key.code {
        KeyCode::Char('q') => Action::Quit,
        KeyCode::Char('p') => Action::ActivateDefaultPalette,
        _ => Action::None,
    }
}

fn handle_mouse_event(mouse: MouseEvent) -> Action {
    let (column, row) = (mouse.column, mouse.row);
    match mouse.kind {
        MouseEventKind::Moved => Action::PointerMoved { column, row },
        MouseEventKind::Down(MouseButton::Left) => Action::PointerClicked { column, row },
        _ => Action::None,
    }
}

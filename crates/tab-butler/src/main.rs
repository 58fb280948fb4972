use std::{sync::Arc, time::Duration};

use anyhow::Result;
use clap::Parser;
use ratatui::{
    crossterm::{
        self,
        event::{DisableMouseCapture, EnableMouseCapture},
    },
    prelude::*,
};
use tab_butler_palette::{
    ActionCatalog, ActivationId, InputHub, Overlay, OverlayEvent, PaletteAction, SearchMode,
    run_effects,
};
use tokio::sync::mpsc;

use crate::actions::Action;
use crate::cli::Cli;
use crate::config::Config;
use crate::dispatch::ChannelDispatcher;
use crate::effect::execute_effect;
use crate::input::EventContext;
use crate::inventory::FileTabInventory;
use crate::log_capture::LogBuffer;
use crate::state::{AppState, DebugConsoleState};
use crate::store::Store;
use crate::theme::Theme;
use crate::view_models::palette::PaletteHitMap;

mod actions;
mod cli;
mod config;
mod dispatch;
mod effect;
mod input;
mod inventory;
mod log_capture;
mod reducer;
mod state;
mod store;
mod theme;
mod view_models;
mod views;

pub struct App {
    // Redux store for the host state
    pub store: Store,
    pub action_tx: mpsc::UnboundedSender<Action>,
    pub inventory: Arc<FileTabInventory>,
    // Palette plumbing
    hub: InputHub,
    catalog: ActionCatalog,
    dispatcher: ChannelDispatcher,
    overlay_tx: mpsc::UnboundedSender<OverlayEvent>,
    // Mounted palette; dropping it releases its key listener and tab fetch
    overlay: Option<Overlay>,
    last_activation: ActivationId,
    // Rows drawn in the last frame, for pointer hit-testing
    palette_hits: Option<PaletteHitMap>,
}

/// Where the main loop's next message came from
enum Incoming {
    Overlay(OverlayEvent),
    Action(Action),
}

pub fn initialize_panic_handler() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = shutdown();
        original_hook(panic_info);
    }));
}

fn startup() -> Result<()> {
    crossterm::terminal::enable_raw_mode()?;
    crossterm::execute!(
        std::io::stderr(),
        crossterm::terminal::EnterAlternateScreen,
        EnableMouseCapture
    )?;
    Ok(())
}

fn shutdown() -> Result<()> {
    crossterm::execute!(
        std::io::stderr(),
        DisableMouseCapture,
        crossterm::terminal::LeaveAlternateScreen
    )?;
    crossterm::terminal::disable_raw_mode()?;
    Ok(())
}

fn update(app: &mut App, action: Action) -> Result<()> {
    match action {
        Action::Terminal(event) => {
            let action = input::handle_event(event, &app.hub, app.event_context());
            update(app, action)?;
        }
        Action::ActivatePalette(mode) => app.activate_palette(mode),
        Action::ActivateDefaultPalette => {
            let mode = app.store.state().config.default_mode;
            app.activate_palette(mode);
        }
        Action::TogglePaletteMode => {
            if let Some(mode) = app.overlay.as_ref().map(|o| o.state().mode().toggled()) {
                app.apply_to_palette(PaletteAction::ModeChanged(mode));
            }
        }
        Action::DismissPalette => app.dismiss_palette(),
        Action::Palette(action) => app.apply_to_palette(action),
        Action::PointerMoved { column, row } => {
            if let Some(index) = app.hit_test(column, row) {
                app.apply_to_palette(PaletteAction::Hover(index));
            }
        }
        Action::PointerClicked { column, row } => {
            if let Some(index) = app.hit_test(column, row) {
                app.apply_to_palette(PaletteAction::Hover(index));
                app.apply_to_palette(PaletteAction::Commit);
            }
        }
        Action::None => {}
        action => {
            // Pure Redux: dispatch to the reducer, then run the effects it asked for
            let effects = app.store.dispatch(&action);
            for effect in effects {
                execute_effect(app, effect)?;
            }
        }
    }
    Ok(())
}

fn start_event_handler(tx: mpsc::UnboundedSender<Action>) -> tokio::task::JoinHandle<()> {
    let tick_rate = Duration::from_millis(250);

    tokio::spawn(async move {
        loop {
            let event = match crossterm::event::poll(tick_rate) {
                Ok(true) => match crossterm::event::read() {
                    Ok(event) => Some(event),
                    Err(err) => {
                        log::error!("Failed to read terminal event: {}", err);
                        None
                    }
                },
                Ok(false) => None,
                Err(err) => {
                    log::error!("Failed to poll terminal events: {}", err);
                    break;
                }
            };

            // Routing happens on the main loop, against the state it is in then
            if let Some(event) = event {
                if tx.send(Action::Terminal(event)).is_err() {
                    break;
                }
            }
            // Give abort() a chance between polls
            tokio::task::yield_now().await;
        }
    })
}

/// Wait for the next message for the main loop
///
/// Overlay events win over queued actions, so whatever the palette listener
/// forwarded for one terminal event is applied before the next one is routed.
async fn next_incoming(
    action_rx: &mut mpsc::UnboundedReceiver<Action>,
    overlay_rx: &mut mpsc::UnboundedReceiver<OverlayEvent>,
) -> Option<Incoming> {
    tokio::select! {
        biased;
        Some(event) = overlay_rx.recv() => Some(Incoming::Overlay(event)),
        Some(action) = action_rx.recv() => Some(Incoming::Action(action)),
        else => None,
    }
}

fn process(app: &mut App, incoming: Incoming) {
    match incoming {
        Incoming::Overlay(event) => app.handle_overlay_event(event),
        Incoming::Action(action) => {
            if let Err(err) = update(app, action) {
                log::error!("Error updating app: {:#}", err);
            }
        }
    }
}

async fn run(config: Config, log_buffer: LogBuffer) -> Result<()> {
    let mut t = Terminal::new(CrosstermBackend::new(std::io::stderr()))?;

    let (action_tx, mut action_rx) = mpsc::unbounded_channel();
    let (overlay_tx, mut overlay_rx) = mpsc::unbounded_channel();

    let mut app = App::new(config, log_buffer, action_tx.clone(), overlay_tx);
    let event_task = start_event_handler(action_tx);

    update(&mut app, Action::Bootstrap)?;

    loop {
        t.draw(|f| ui(f, &mut app))?;

        let incoming = tokio::time::timeout(
            Duration::from_millis(100),
            next_incoming(&mut action_rx, &mut overlay_rx),
        )
        .await;

        match incoming {
            Ok(Some(incoming)) => process(&mut app, incoming),
            Ok(None) => break, // Channels closed
            Err(_) => {}       // Redraw tick
        }

        if app.store.state().should_quit {
            break;
        }
    }

    event_task.abort();
    app.dismiss_palette();

    Ok(())
}

fn ui(f: &mut Frame, app: &mut App) {
    let area = f.area();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Tab list
            Constraint::Length(1), // Status line
        ])
        .split(area);

    let state = app.store.state();
    views::tabs::render_tab_list(f, chunks[0], &state.host, &state.theme);
    views::tabs::render_status_bar(f, chunks[1], &state.host, &state.theme);

    // Palette floats above the host page
    app.palette_hits = app
        .overlay
        .as_ref()
        .map(|overlay| views::palette::render_palette(f, area, overlay.state(), &state.theme));

    // Debug console drops down over everything
    if state.debug_console.is_open {
        let offset =
            views::debug_console::render_debug_console(f, area, &state.debug_console, &state.theme);
        app.store.state_mut().debug_console.scroll_offset = offset;
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize debug console logger before anything else
    let log_buffer = log_capture::init_logger();

    let config = Cli::parse().into_config()?;
    log::debug!("Using config {:?}", config);

    initialize_panic_handler();
    startup()?;
    let result = run(config, log_buffer).await;
    shutdown()?;
    result
}

impl App {
    fn new(
        config: Config,
        log_buffer: LogBuffer,
        action_tx: mpsc::UnboundedSender<Action>,
        overlay_tx: mpsc::UnboundedSender<OverlayEvent>,
    ) -> App {
        let inventory = Arc::new(FileTabInventory::new(config.tabs_file.clone()));
        let initial_state = AppState {
            host: Default::default(),
            debug_console: DebugConsoleState::new(log_buffer),
            should_quit: false,
            config,
            theme: Theme::default(),
        };

        App {
            store: Store::new(initial_state),
            dispatcher: ChannelDispatcher::new(action_tx.clone()),
            action_tx,
            inventory,
            hub: InputHub::new(),
            catalog: ActionCatalog::builtin(),
            overlay_tx,
            overlay: None,
            last_activation: ActivationId::default(),
            palette_hits: None,
        }
    }

    fn event_context(&self) -> EventContext {
        EventContext {
            palette_open: self.overlay.is_some(),
            debug_console_open: self.store.state().debug_console.is_open,
        }
    }

    /// Mount the palette in `mode`
    ///
    /// Re-activating the mode that is already shown dismisses the palette;
    /// activating the other mode switches the mounted palette over.
    fn activate_palette(&mut self, mode: SearchMode) {
        match self.overlay.as_ref().map(|o| o.state().mode()) {
            Some(current) if current == mode => self.dismiss_palette(),
            Some(_) => self.apply_to_palette(PaletteAction::ModeChanged(mode)),
            None => {
                self.last_activation = self.last_activation.next();
                let mut overlay = Overlay::mount(
                    self.last_activation,
                    mode,
                    &self.catalog,
                    &self.hub,
                    self.overlay_tx.clone(),
                );
                overlay.fetch_tabs(self.inventory.clone());
                self.overlay = Some(overlay);
            }
        }
    }

    fn dismiss_palette(&mut self) {
        self.overlay = None;
        self.palette_hits = None;
    }

    fn apply_to_palette(&mut self, action: PaletteAction) {
        if let Some(overlay) = self.overlay.as_mut() {
            let effects = overlay.apply(action);
            self.run_palette_effects(effects);
        }
    }

    fn handle_overlay_event(&mut self, event: OverlayEvent) {
        match self.overlay.as_mut() {
            Some(overlay) => {
                let effects = overlay.handle(event);
                self.run_palette_effects(effects);
            }
            None => log::debug!(
                "Dropping {:?} for overlay #{}, nothing mounted",
                event.action,
                event.activation.value()
            ),
        }
    }

    fn run_palette_effects(&mut self, effects: Vec<tab_butler_palette::Effect>) {
        run_effects(effects, &self.dispatcher);
        if self.dispatcher.take_dismissal() {
            self.dismiss_palette();
        }
    }

    fn hit_test(&self, column: u16, row: u16) -> Option<usize> {
        if self.overlay.is_none() {
            return None;
        }
        self.palette_hits?.index_at(column, row)
    }
}

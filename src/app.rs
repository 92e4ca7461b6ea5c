use crate::charts;
use crate::event::{AppEvent, Event, EventHandler};
use crate::snapshot::MetricsSnapshot;
use crate::source::SnapshotSource;
use crate::surface::SurfaceRegistry;
use color_eyre::Result;
use ratatui::{
    DefaultTerminal,
    crossterm::event::{KeyCode, KeyEvent, KeyModifiers},
};
use tokio::task::JoinHandle;
use tracing::{error, info};

/// View lifecycle state. `Loading` is initial; `Ready` is terminal for the
/// session. `NoData` is where a failed fetch leaves the view, with no retry.
#[derive(Debug, PartialEq)]
pub enum AppMode {
    Loading,
    Ready,
    NoData,
}

/// Application.
pub struct App {
    /// Is the application running?
    pub running: bool,
    /// Current lifecycle state.
    pub mode: AppMode,
    /// The one snapshot held for the session, once acquired.
    pub snapshot: Option<MetricsSnapshot>,
    /// Chart surfaces owned by this view, released on teardown.
    pub surfaces: SurfaceRegistry,
    /// Event handler.
    pub events: EventHandler,

    /// Data source, consumed by the single acquisition.
    source: Option<Box<dyn SnapshotSource>>,
    /// Pending acquisition, aborted on teardown so a late result is a no-op.
    fetch_handle: Option<JoinHandle<()>>,
}

impl App {
    /// Constructs a new instance of [`App`] around the selected data source.
    pub fn new(source: Box<dyn SnapshotSource>) -> Self {
        Self {
            running: true,
            mode: AppMode::Loading,
            snapshot: None,
            surfaces: SurfaceRegistry::new(),
            events: EventHandler::new(),
            source: Some(source),
            fetch_handle: None,
        }
    }

    /// Run the application's main loop.
    pub async fn run(mut self, mut terminal: DefaultTerminal) -> Result<()> {
        self.begin_acquisition();

        let mut needs_redraw = true;
        while self.running {
            if needs_redraw {
                terminal.draw(|frame| frame.render_widget(&mut self, frame.area()))?;
                // save power
                needs_redraw = false;
            }

            match self.events.next().await? {
                Event::Tick => {} // Don't redraw on tick
                Event::Crossterm(event) => {
                    if let crossterm::event::Event::Key(key_event) = event {
                        self.handle_key_events(key_event)?;
                        needs_redraw = true;
                    }
                }
                Event::App(app_event) => {
                    match app_event {
                        AppEvent::SnapshotLoaded(snapshot) => self.apply_snapshot(snapshot),
                        AppEvent::SnapshotFailed => self.mark_failed(),
                        AppEvent::Quit => self.quit(),
                    }
                    needs_redraw = true;
                }
            }
        }

        self.teardown();
        Ok(())
    }

    /// Spawns the one-shot snapshot acquisition, posting its outcome back
    /// through the event channel.
    fn begin_acquisition(&mut self) {
        let Some(source) = self.source.take() else {
            return;
        };
        info!("acquiring snapshot: {}", source.describe());
        let sender = self.events.sender();
        self.fetch_handle = Some(tokio::spawn(async move {
            match source.acquire().await {
                Ok(snapshot) => {
                    let _ = sender.send(Event::App(AppEvent::SnapshotLoaded(snapshot)));
                }
                Err(e) => {
                    error!("snapshot acquisition failed: {e}");
                    let _ = sender.send(Event::App(AppEvent::SnapshotFailed));
                }
            }
        }));
    }

    /// Stores the snapshot, binds one chart per present array field, and
    /// moves the view to `Ready`.
    pub fn apply_snapshot(&mut self, snapshot: MetricsSnapshot) {
        let built = charts::build_all(&snapshot);
        info!(panels = built.len(), "snapshot applied");
        for (id, chart) in built {
            self.surfaces.bind(id, chart);
        }
        self.snapshot = Some(snapshot);
        self.mode = AppMode::Ready;
    }

    /// Leaves the view on the no-data screen after a failed fetch.
    pub fn mark_failed(&mut self) {
        self.mode = AppMode::NoData;
    }

    /// Handles the key events and updates the state of [`App`].
    pub fn handle_key_events(&mut self, key_event: KeyEvent) -> Result<()> {
        match key_event.code {
            KeyCode::Esc | KeyCode::Char('q') => self.events.send(AppEvent::Quit),
            KeyCode::Char('c' | 'C') if key_event.modifiers == KeyModifiers::CONTROL => {
                self.events.send(AppEvent::Quit)
            }
            _ => {}
        }
        Ok(())
    }

    /// Set running to false to quit the application.
    pub fn quit(&mut self) {
        self.running = false;
    }

    /// Releases everything the view owns: the pending acquisition if it has
    /// not resolved, and every bound chart surface regardless of mode.
    pub fn teardown(&mut self) {
        if let Some(handle) = self.fetch_handle.take() {
            handle.abort();
        }
        self.surfaces.release_all();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::MockSource;
    use crate::surface::PanelId;
    use std::time::Duration;

    fn test_app() -> App {
        App::new(Box::new(MockSource::new(Duration::from_millis(1000))))
    }

    #[tokio::test]
    async fn snapshot_moves_loading_to_ready_and_binds_all_panels() {
        let mut app = test_app();
        assert_eq!(app.mode, AppMode::Loading);
        app.apply_snapshot(MetricsSnapshot::mock());
        assert_eq!(app.mode, AppMode::Ready);
        assert_eq!(app.surfaces.bound_panels(), PanelId::all().to_vec());
        assert!(app.snapshot.is_some());
    }

    #[tokio::test]
    async fn summary_only_snapshot_binds_no_panels() {
        let mut app = test_app();
        let snapshot: MetricsSnapshot =
            serde_json::from_str(r#"{"total_sales": 10, "total_revenue": 500}"#).unwrap();
        app.apply_snapshot(snapshot);
        assert_eq!(app.mode, AppMode::Ready);
        assert!(app.surfaces.bound_panels().is_empty());
    }

    #[tokio::test]
    async fn failed_fetch_lands_on_no_data() {
        let mut app = test_app();
        app.mark_failed();
        assert_eq!(app.mode, AppMode::NoData);
        assert!(app.snapshot.is_none());
    }

    #[tokio::test]
    async fn teardown_balances_surface_registry() {
        let mut app = test_app();
        app.apply_snapshot(MetricsSnapshot::mock());
        assert_eq!(app.surfaces.created(), 5);
        app.teardown();
        assert!(app.surfaces.is_balanced());
        assert_eq!(app.surfaces.released(), 5);
    }

    #[tokio::test]
    async fn teardown_before_resolution_is_clean() {
        let mut app = test_app();
        app.teardown();
        assert!(app.surfaces.is_balanced());
        assert_eq!(app.surfaces.created(), 0);
    }
}

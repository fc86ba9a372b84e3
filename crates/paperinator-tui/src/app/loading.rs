use std::path::PathBuf;

use super::{App, Screen};
use crate::tui_event::LoadEvent;

impl App {
    /// Start reading `path` in the background and show the loading state.
    ///
    /// The read's completion comes back through `load_tx` as a single
    /// [`LoadEvent::ReadComplete`]. A read started while another is in flight
    /// does not cancel it; whichever completes last wins.
    pub fn start_load(&mut self, path: PathBuf) {
        tracing::info!(path = %path.display(), "loading file");
        self.browser.begin_load();
        self.status = None;
        self.pending_path = Some(path.clone());
        self.screen = Screen::Browser;

        match &self.load_tx {
            Some(tx) => {
                let tx = tx.clone();
                tokio::spawn(async move {
                    let outcome = paperinator_core::read_file(&path).await;
                    // Receiver gone means the UI is shutting down
                    let _ = tx.send(LoadEvent::ReadComplete { path, outcome });
                });
            }
            None => {
                self.handle_load_event(LoadEvent::ReadComplete {
                    path,
                    outcome: Err(std::io::Error::other("no file reader running")),
                });
            }
        }
    }

    /// Apply a finished read to the browser state.
    pub fn handle_load_event(&mut self, event: LoadEvent) {
        match event {
            LoadEvent::ReadComplete { path, outcome } => {
                if self.pending_path.as_ref() == Some(&path) {
                    self.pending_path = None;
                }
                if let Ok(count) = self.browser.finish_load(outcome) {
                    self.status = Some(format!(
                        "Loaded {} paper{} from {}",
                        count,
                        if count == 1 { "" } else { "s" },
                        Self::short_name(&path)
                    ));
                    self.loaded_path = Some(path);
                    self.reset_card_view();
                }
            }
        }
    }
}

use std::time::Duration;

use crossterm::event::{Event, EventStream, KeyCode, KeyEventKind};
use futures_util::StreamExt;
use ratatui::DefaultTerminal;
use tokio::{
    sync::mpsc,
    task::JoinHandle,
    time::{self, MissedTickBehavior},
};
use tracing::instrument;

use crate::{
    browser::BrowserState,
    engine::QuizEngine,
    keyboard::{self, Intent, Screen},
    storage::SnapshotStore,
    ui, HandlerResult,
};

/// One interactive session: the engine plus the purely presentational bits
/// (which screen is up, where the browse cursor sits).
pub struct Session<S: SnapshotStore> {
    engine: QuizEngine<S>,
    screen: Screen,
    browser: BrowserState,
}

impl<S: SnapshotStore> Session<S> {
    pub fn new(engine: QuizEngine<S>) -> Self {
        Self {
            engine,
            screen: Screen::Quiz,
            browser: BrowserState::new(),
        }
    }

    pub fn engine(&self) -> &QuizEngine<S> {
        &self.engine
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn browser(&self) -> &BrowserState {
        &self.browser
    }

    /// Returns true when the session should end.
    fn handle_key(&mut self, key: KeyCode) -> bool {
        let Some(intent) = keyboard::intent_for(key, self.screen, self.engine.state()) else {
            return false;
        };

        match intent {
            Intent::SelectOption(position) => {
                if let Some(option) = self.engine.current_question().options().get(position) {
                    let option = option.clone();
                    self.engine.select_answer(option);
                }
            }
            Intent::Advance => self.engine.advance(),
            Intent::Retreat => self.engine.retreat(),
            Intent::Reset => self.engine.reset(),
            Intent::SwitchScreen => {
                self.screen = match self.screen {
                    Screen::Quiz => Screen::Browser,
                    Screen::Browser => Screen::Quiz,
                };
            }
            Intent::BrowseUp => self.browser.prev_chapter(),
            Intent::BrowseDown => self.browser.next_chapter(),
            Intent::BrowseNextSubject => self.browser.next_subject(),
            Intent::BrowsePrevSubject => self.browser.prev_subject(),
            Intent::Quit => return true,
        }

        false
    }
}

/// Drives the session until the user quits.
///
/// All state mutation happens here, on this one task, in response to discrete
/// events: a key press or a tick. The tick source is the only background
/// activity; it is recreated whenever the `completed` flag flips, so exactly
/// one exists while the session is in progress and none afterwards.
#[instrument(level = "info", skip(terminal, engine))]
pub async fn run<S: SnapshotStore>(
    terminal: &mut DefaultTerminal,
    engine: QuizEngine<S>,
) -> HandlerResult {
    let mut session = Session::new(engine);
    let mut events = EventStream::new();

    let (tick_tx, mut tick_rx) = mpsc::channel::<()>(1);
    let mut tick_task = if session.engine.state().completed {
        None
    } else {
        Some(spawn_tick_source(tick_tx.clone()))
    };

    loop {
        terminal.draw(|frame| ui::render(frame, &session))?;

        let was_completed = session.engine.state().completed;

        tokio::select! {
            Some(()) = tick_rx.recv() => {
                session.engine.tick();
            }
            maybe_event = events.next() => {
                match maybe_event {
                    Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                        if session.handle_key(key.code) {
                            break;
                        }
                    }
                    Some(Ok(_)) => {}
                    Some(Err(e)) => {
                        log::error!("terminal event stream failed: {e}");
                        return Err(e.into());
                    }
                    None => break,
                }
            }
        }

        let now_completed = session.engine.state().completed;
        if was_completed != now_completed {
            if let Some(task) = tick_task.take() {
                task.abort();
            }
            if !now_completed {
                tick_task = Some(spawn_tick_source(tick_tx.clone()));
            }
        }
    }

    if let Some(task) = tick_task.take() {
        task.abort();
    }

    Ok(())
}

/// A cancellable repeating one-second tick. The handle owns it: aborting the
/// task is how the runner tears the source down.
fn spawn_tick_source(tx: mpsc::Sender<()>) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut interval = time::interval(Duration::from_secs(1));
        interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
        // the first tick completes immediately; skip it so a fresh source
        // does not count a phantom second
        interval.tick().await;
        loop {
            interval.tick().await;
            if tx.send(()).await.is_err() {
                break;
            }
        }
    })
}

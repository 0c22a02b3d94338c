use crate::{
    quiz::{Question, QuestionSet},
    state::{QuizState, Stats},
    storage::SnapshotStore,
};

/// Owns the session state and the question list; the presentation layer only
/// ever talks to it through the intents below and the read accessors.
///
/// Every mutation is written through to the snapshot store. A failed write is
/// logged and swallowed: the session stays fully usable in memory.
pub struct QuizEngine<S: SnapshotStore> {
    questions: QuestionSet,
    state: QuizState,
    store: S,
}

impl<S: SnapshotStore> QuizEngine<S> {
    /// Seeds state from the store when a snapshot exists; otherwise starts
    /// fresh. A restored index that no longer fits the dataset is defaulted
    /// to 0 like any other malformed field.
    pub fn new(questions: QuestionSet, store: S) -> Self {
        let state = match store.load() {
            Ok(Some(mut state)) => {
                if state.index >= questions.total() {
                    log::warn!(
                        "restored index {} is out of range for {} questions, defaulting to 0",
                        state.index,
                        questions.total()
                    );
                    state.index = 0;
                }
                log::info!(
                    "restored session at question #{} with {} answered",
                    state.index + 1,
                    state.answered.len()
                );
                state
            }
            Ok(None) => QuizState::fresh(),
            Err(e) => {
                log::warn!("failed to load snapshot, starting fresh: {e}");
                QuizState::fresh()
            }
        };

        Self {
            questions,
            state,
            store,
        }
    }

    /// Records the choice for the current question. First answer is final:
    /// repeats for an already-answered index are silently ignored. Any string
    /// is accepted; matching against real option text is the caller's job.
    pub fn select_answer(&mut self, option: impl Into<String>) {
        if self.state.is_answered(self.state.index) {
            return;
        }
        let option = option.into();
        log::info!(
            "answer '{}' recorded for question #{}, correct: {}",
            option,
            self.state.index + 1,
            self.current_question().is_correct(&option)
        );
        self.state.answered.insert(self.state.index, option);
        self.persist();
    }

    /// Moves to the next question, or marks the session completed when
    /// already at the last one (the index stays put). Deliberately does not
    /// require the current question to be answered; that policy lives in the
    /// keyboard layer.
    pub fn advance(&mut self) {
        if self.state.index + 1 < self.questions.total() {
            self.state.index += 1;
        } else {
            log::info!(
                "quiz completed with score {}/{}",
                self.stats().score,
                self.questions.total()
            );
            self.state.completed = true;
        }
        self.persist();
    }

    /// Steps back one question; no-op at the first. Never clears `completed`.
    pub fn retreat(&mut self) {
        if self.state.index > 0 {
            self.state.index -= 1;
        }
        self.persist();
    }

    /// Full session restart: the snapshot is discarded and the state returns
    /// to its fresh values, as if the application had been relaunched.
    pub fn reset(&mut self) {
        log::info!("session reset");
        if let Err(e) = self.store.clear() {
            log::warn!("failed to discard snapshot: {e}");
        }
        self.state = QuizState::fresh();
    }

    /// One second of elapsed time. Driven by the runner's tick source, which
    /// only exists while the session is in progress.
    pub fn tick(&mut self) {
        if self.state.completed {
            return;
        }
        self.state.elapsed_seconds += 1;
        self.persist();
    }

    pub fn state(&self) -> &QuizState {
        &self.state
    }

    pub fn questions(&self) -> &QuestionSet {
        &self.questions
    }

    pub fn current_question(&self) -> &Question {
        // index is maintained in 0..total by the intents above
        &self.questions.questions()[self.state.index]
    }

    pub fn stats(&self) -> Stats {
        Stats::derive(&self.state, &self.questions)
    }

    fn persist(&self) {
        if let Err(e) = self.store.save(&self.state) {
            log::warn!("failed to persist snapshot: {e}");
        }
    }
}

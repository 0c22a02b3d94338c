use std::sync::Arc;

use dotenvy::dotenv;
use tracing::level_filters;
use tracing_subscriber::fmt::format::FmtSpan;

use mathx_quiz::{
    engine::QuizEngine, quiz::QuestionSet, runner, storage::file::FileStore, HandlerResult,
};

#[tokio::main]
async fn main() -> HandlerResult {
    dotenv().ok();

    // The TUI owns the terminal, so the subscriber writes to a file.
    let log_level = std::env::var("LOG_LEVEL").unwrap_or("info".into());
    let log_file = std::fs::File::create("mathx-quiz.log")?;
    tracing_subscriber::fmt()
        .with_max_level(level_filters::LevelFilter::from_level(
            log_level.parse().unwrap_or(tracing::Level::INFO),
        ))
        .json()
        .with_span_events(FmtSpan::ENTER)
        .log_internal_errors(true)
        .with_ansi(false)
        .with_line_number(true)
        .with_target(false)
        .with_writer(Arc::new(log_file))
        .init();

    let questions = match std::env::var("QUIZ_DATA_PATH") {
        Ok(path) => QuestionSet::from_file(&path)?,
        Err(_) => QuestionSet::embedded()?,
    };
    log::info!("loaded {} questions", questions.total());

    let state_path =
        std::env::var("QUIZ_STATE_PATH").unwrap_or_else(|_| "mathx_quiz_state.json".into());
    let engine = QuizEngine::new(questions, FileStore::new(state_path));

    let mut terminal = ratatui::init();
    let result = runner::run(&mut terminal, engine).await;
    ratatui::restore();
    result
}

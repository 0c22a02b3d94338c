pub mod browser;
pub mod engine;
pub mod keyboard;
pub mod quiz;
pub mod runner;
pub mod state;
pub mod storage;
pub mod ui;

pub type HandlerResult = Result<(), Box<dyn std::error::Error + Send + Sync + 'static>>;

// folio: a terminal portfolio with a cached GitHub project feed.

mod app;
mod cache;
mod config;
mod content;
mod error;
mod feed;
mod github;
mod state;
mod ui;

use std::io;

use app::App;
use config::Config;

#[tokio::main]
async fn main() -> io::Result<()> {
    let mut terminal = ratatui::init();
    let result = App::new(Config::from_env()).run(&mut terminal);
    ratatui::restore();
    result
}

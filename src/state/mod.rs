// State management module.
// Pure, event-driven state transitions for the sections: no rendering or
// IO here, so every behavior is testable on its own.

pub mod console;
pub mod feed;
pub mod reveal;
pub mod typer;

pub use console::{ConsoleLevel, ConsoleMessage};
pub use feed::FeedState;
pub use reveal::{RevealLatch, ScrollState};
pub use typer::Typer;

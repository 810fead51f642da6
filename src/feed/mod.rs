// Project feed module.
// Produces the ordered list of featured project cards for the projects
// section, from cache when fresh and from the GitHub API otherwise.

pub mod project;
pub mod resolve;

pub use project::{ACCENT_PALETTE_LEN, ProjectRecord};
pub use resolve::{FeedOutcome, ProjectFeed};

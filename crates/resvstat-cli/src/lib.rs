mod args;
pub mod project;
pub mod render;
pub mod session;

pub use args::Cli;
pub use session::{FatalError, Session, TOOL};

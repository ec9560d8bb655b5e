pub mod io;
pub mod output;
mod shell;
pub mod strings;
pub mod tasks;

pub use shell::{run_cli, Session, TaskChoice};

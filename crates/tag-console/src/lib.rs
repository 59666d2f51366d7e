//! Console front end for the tag sample screens

pub mod cli;
pub mod console;
pub mod runner;

pub use cli::{Args, Command};
pub use console::Console;

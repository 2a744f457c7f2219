pub mod action;
pub mod cli;
pub mod commit_file;
pub mod logging;
pub mod output;
pub mod settings;

pub use action::run;

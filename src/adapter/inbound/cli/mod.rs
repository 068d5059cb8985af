//! CLI module graph.

pub mod check;
pub mod command;
pub mod delete;
pub mod diagnostic;
pub mod list;
pub mod load;
pub mod output;
pub mod paths;
pub mod report;

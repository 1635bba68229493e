pub mod auth;
pub mod content;
pub mod jobs;
pub mod probes;
pub mod ui;

pub mod content;
pub mod jobs;

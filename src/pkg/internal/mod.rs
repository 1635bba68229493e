pub mod adaptors;
pub mod auth;
pub mod board;
pub mod browser;
pub mod content;
pub mod editor;
pub mod gateway;
pub mod listing;

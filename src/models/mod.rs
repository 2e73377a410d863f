// Data models for the agenda grid

pub mod event;
pub mod feed;

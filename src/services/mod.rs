// Service layer: layout engine, feed ingest, schedule store, settings, palette

pub mod ingest;
pub mod layout;
pub mod palette;
pub mod schedule;
pub mod settings;

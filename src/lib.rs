// Agenda Grid Library
// Day-agenda layout engine and timeline geometry for the client portal calendar

pub mod models;
pub mod services;
pub mod utils;

pub mod app;
pub mod config;
pub mod contact;
pub mod effects;
pub mod ui;

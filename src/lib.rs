pub mod app;
pub mod config;
pub mod omdb;
pub mod pagination;
pub mod views;

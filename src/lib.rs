pub mod api;
pub mod config;
pub mod context;
pub mod errors;
pub mod load_test;
pub mod models;
pub mod poller;
pub mod rank_lookup;
pub mod repositories;
pub mod usecases;
pub mod views;
pub mod watch;

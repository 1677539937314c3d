pub mod ai_provider;
pub mod assistant;
pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod game;
pub mod luggage;
pub mod planner;
pub mod summary;

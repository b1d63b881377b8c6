pub mod fs;
pub mod http;
pub mod match_api;
pub mod settings_reader;
pub mod standings_api;
pub mod team_api;

pub mod backend;
pub mod match_api;
pub mod standings_api;
pub mod team_api;
pub mod transform;

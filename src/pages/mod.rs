pub mod dialog;
pub mod match_page;
pub mod page;
pub mod standings_page;
pub mod team_page;

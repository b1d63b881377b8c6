pub mod server;

mod controller_tests;
mod standings_tests;

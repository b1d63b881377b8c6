pub mod components;
pub mod edit_dialog;
pub mod forms;
pub mod home_screen;
pub mod match_list_screen;
pub mod screen;
pub mod standings_screen;
pub mod team_list_screen;

pub mod banner;
pub mod enums;
pub mod keybinding;
pub mod r#match;
pub mod settings;
pub mod standings;
pub mod team;

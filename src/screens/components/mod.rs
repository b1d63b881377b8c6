pub mod date_picker;
pub mod navigation_footer;
pub mod notify_banner;
pub mod select;
pub mod text_box;

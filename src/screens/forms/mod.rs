pub mod match_form;
pub mod team_form;

use ratatui::{layout::Rect, Frame};

/// The editable fields of one kind of record, as hosted by the terminal
/// dialog. Fields are addressed by position; exactly one has focus.
pub trait EntityForm<T>: Send {
    fn title(&self, new_entry: bool) -> &'static str;
    fn load(&mut self, entry: &T);
    fn field_count(&self) -> usize;
    fn focus(&mut self, field: usize);
    fn handle_char(&mut self, c: char);
    fn handle_backspace(&mut self);
    fn handle_up(&mut self);
    fn handle_down(&mut self);
    /// Copies the field values onto `entry`, leaving unrelated fields alone.
    fn write(&self, entry: &mut T);
    fn render(&mut self, f: &mut Frame, area: Rect);
}

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use std::fmt::Debug;
use std::fmt::Formatter;

type Validator = Box<dyn Fn(&str, char) -> bool + Send>;

pub struct TextBox {
    value: String,
    pub writing_mode: bool,
    label: String,
    validator: Validator,
}

impl Debug for TextBox {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextBox")
            .field("value", &self.value)
            .field("writing_mode", &self.writing_mode)
            .field("label", &self.label)
            .finish()
    }
}

impl TextBox {
    pub fn new(label: &str) -> Self {
        Self::with_validator(label, |_, _| true)
    }

    pub fn with_validator<F>(label: &str, validator: F) -> Self
    where
        F: Fn(&str, char) -> bool + Send + 'static,
    {
        Self {
            value: String::new(),
            writing_mode: false,
            label: label.to_string(),
            validator: Box::new(validator),
        }
    }

    /// Digits only, so the value always parses as a non-negative count.
    pub fn numeric(label: &str) -> Self {
        Self::with_validator(label, |current: &str, c: char| {
            c.is_ascii_digit() && current.len() < 3
        })
    }

    pub fn set_value(&mut self, value: &str) {
        self.value = value.to_string();
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// `None` when blank.
    pub fn optional_value(&self) -> Option<String> {
        let trimmed = self.value.trim();
        (!trimmed.is_empty()).then(|| trimmed.to_string())
    }

    pub fn numeric_value(&self) -> u32 {
        self.value.parse().unwrap_or(0)
    }

    pub fn render(&self, f: &mut Frame, area: Rect) {
        let cursor = if self.writing_mode { "▏" } else { "" };
        let widget = Paragraph::new(format!("{}{}", self.value, cursor))
            .block(Block::default().borders(Borders::ALL).title(self.label.as_str()))
            .style(if self.writing_mode {
                Style::default().add_modifier(Modifier::REVERSED)
            } else {
                Style::default()
            });
        f.render_widget(widget, area);
    }

    pub fn handle_char(&mut self, c: char) {
        if self.writing_mode && (self.validator)(&self.value, c) {
            self.value.push(c);
        }
    }

    pub fn handle_backspace(&mut self) {
        if self.writing_mode {
            self.value.pop();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_box_rejects_non_digits() {
        let mut goals = TextBox::numeric("goals");
        goals.writing_mode = true;
        for c in ['-', '2', 'x', '1'] {
            goals.handle_char(c);
        }
        assert_eq!(goals.value(), "21");
        assert_eq!(goals.numeric_value(), 21);
        goals.handle_backspace();
        goals.handle_backspace();
        assert_eq!(goals.numeric_value(), 0);
    }

    #[test]
    fn ignores_input_outside_writing_mode() {
        let mut name = TextBox::new("name");
        name.handle_char('a');
        assert_eq!(name.optional_value(), None);
    }
}

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};
use std::fmt::Display;

#[derive(Debug)]
pub struct Select<T>
where
    T: Display + Clone,
{
    selection: ListState,
    value: Option<T>,
    pub writing_mode: bool,
    label: String,
    values: Vec<T>,
}

impl<T: Display + Clone> Select<T> {
    pub fn new(label: &str, values: Vec<T>) -> Self {
        let mut selection = ListState::default();
        if !values.is_empty() {
            selection.select(Some(0));
        }
        Self {
            selection,
            value: values.first().cloned(),
            writing_mode: false,
            label: label.to_string(),
            values,
        }
    }

    pub fn get_selected_value(&self) -> Option<T> {
        self.value.clone()
    }

    /// Selects the first value matching `predicate`; leaves the selection
    /// untouched when nothing matches.
    pub fn select_by<P: Fn(&T) -> bool>(&mut self, predicate: P) -> bool {
        match self.values.iter().position(predicate) {
            Some(index) => {
                self.select_value(index);
                true
            }
            None => false,
        }
    }

    pub fn render(&mut self, f: &mut Frame, area: Rect) {
        if self.writing_mode {
            self.render_writing(f, area);
        } else {
            self.render_reading(f, area);
        }
    }

    fn render_reading(&mut self, f: &mut Frame, area: Rect) {
        let mut spans = vec![Span::styled(
            format!("{}: ", self.label),
            Style::default().add_modifier(Modifier::BOLD),
        )];
        if let Some(value) = &self.value {
            spans.push(Span::raw(value.to_string()));
        }
        let widget = Paragraph::new(Text::from(Line::from(spans)))
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(widget, area);
    }

    fn render_writing(&mut self, f: &mut Frame, area: Rect) {
        let items: Vec<ListItem> = self
            .values
            .iter()
            .map(|entry| ListItem::new(entry.to_string()))
            .collect();
        let list = List::new(items)
            .block(Block::default().borders(Borders::ALL).title(Span::styled(
                self.label.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            )))
            .highlight_style(
                Style::default()
                    .add_modifier(Modifier::BOLD)
                    .add_modifier(Modifier::REVERSED),
            )
            .highlight_symbol(">> ");

        f.render_stateful_widget(list, area, &mut self.selection);
    }

    pub fn handle_up(&mut self) {
        if !self.writing_mode || self.values.is_empty() {
            return;
        }
        let index = match self.selection.selected() {
            Some(0) | None => self.values.len() - 1,
            Some(selected) => selected - 1,
        };
        self.select_value(index);
    }

    pub fn handle_down(&mut self) {
        if !self.writing_mode || self.values.is_empty() {
            return;
        }
        let index = match self.selection.selected() {
            Some(selected) => (selected + 1) % self.values.len(),
            None => 0,
        };
        self.select_value(index);
    }

    fn select_value(&mut self, new_selected: usize) {
        self.value = self.values.get(new_selected).cloned();
        self.selection.select(Some(new_selected));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn navigation_wraps_and_select_by_finds_values() {
        let mut select = Select::new("team", vec!["Flamengo", "Palmeiras", "Santos"]);
        assert_eq!(select.get_selected_value(), Some("Flamengo"));
        select.handle_down();
        assert_eq!(select.get_selected_value(), Some("Flamengo"));
        select.writing_mode = true;
        select.handle_up();
        assert_eq!(select.get_selected_value(), Some("Santos"));
        select.handle_down();
        assert_eq!(select.get_selected_value(), Some("Flamengo"));
        assert!(select.select_by(|v| *v == "Palmeiras"));
        assert_eq!(select.get_selected_value(), Some("Palmeiras"));
        assert!(!select.select_by(|v| *v == "Vasco"));
        assert_eq!(select.get_selected_value(), Some("Palmeiras"));
    }

    #[test]
    fn empty_select_has_no_value() {
        let mut select: Select<String> = Select::new("team", vec![]);
        select.writing_mode = true;
        select.handle_down();
        assert_eq!(select.get_selected_value(), None);
    }
}

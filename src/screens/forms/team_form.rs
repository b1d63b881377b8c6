use crate::{
    localization::Labels,
    screens::{components::text_box::TextBox, forms::EntityForm},
    shapes::team::TeamEntry,
};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    Frame,
};

#[derive(Debug)]
pub struct TeamForm {
    labels: &'static Labels,
    name: TextBox,
    stadium: TextBox,
    city: TextBox,
}

impl TeamForm {
    pub fn new(labels: &'static Labels) -> Self {
        Self {
            labels,
            name: TextBox::new(labels.name),
            stadium: TextBox::new(labels.stadium),
            city: TextBox::new(labels.city),
        }
    }

    fn boxes(&mut self) -> [&mut TextBox; 3] {
        [&mut self.name, &mut self.stadium, &mut self.city]
    }
}

impl EntityForm<TeamEntry> for TeamForm {
    fn title(&self, new_entry: bool) -> &'static str {
        if new_entry {
            self.labels.new_team
        } else {
            self.labels.edit_team
        }
    }

    fn load(&mut self, entry: &TeamEntry) {
        self.name.set_value(&entry.name);
        self.stadium
            .set_value(entry.stadium.as_deref().unwrap_or_default());
        self.city.set_value(entry.city.as_deref().unwrap_or_default());
    }

    fn field_count(&self) -> usize {
        3
    }

    fn focus(&mut self, field: usize) {
        for (i, text_box) in self.boxes().into_iter().enumerate() {
            text_box.writing_mode = i == field;
        }
    }

    fn handle_char(&mut self, c: char) {
        self.boxes().into_iter().for_each(|b| b.handle_char(c));
    }

    fn handle_backspace(&mut self) {
        self.boxes().into_iter().for_each(|b| b.handle_backspace());
    }

    fn handle_up(&mut self) {}

    fn handle_down(&mut self) {}

    fn write(&self, entry: &mut TeamEntry) {
        entry.name = self.name.value().trim().to_string();
        entry.stadium = self.stadium.optional_value();
        entry.city = self.city.optional_value();
    }

    fn render(&mut self, f: &mut Frame, area: Rect) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Min(0),
            ])
            .split(area);
        self.name.render(f, rows[0]);
        self.stadium.render(f, rows[1]);
        self.city.render(f, rows[2]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::localization::EN;

    #[test]
    fn blank_optional_fields_are_written_as_none() {
        let original = TeamEntry {
            id: Some(3),
            name: "Santos".into(),
            stadium: Some("Vila Belmiro".into()),
            city: Some("Santos".into()),
            ..Default::default()
        };
        let mut form = TeamForm::new(&EN);
        form.load(&original);
        form.focus(1);
        for _ in 0.."Vila Belmiro".len() {
            form.handle_backspace();
        }
        form.focus(0);
        " FC".chars().for_each(|c| form.handle_char(c));

        let mut written = original.clone();
        form.write(&mut written);
        assert_eq!(written.id, Some(3));
        assert_eq!(written.name, "Santos FC");
        assert_eq!(written.stadium, None);
        assert_eq!(written.city, Some("Santos".into()));
    }
}

use chrono::{Datelike, NaiveDate};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Digit-by-digit date entry in `yyyy-mm-dd` order. Impossible months and
/// days are refused as they are typed.
#[derive(Debug)]
pub struct DatePicker {
    year: String,
    month: String,
    day: String,
    label: String,
    pub writing_mode: bool,
}

impl DatePicker {
    pub fn new(label: &str) -> Self {
        Self {
            year: String::new(),
            month: String::new(),
            day: String::new(),
            label: label.to_string(),
            writing_mode: false,
        }
    }

    pub fn set_value(&mut self, date: NaiveDate) {
        self.year = format!("{:04}", date.year());
        self.month = format!("{:02}", date.month());
        self.day = format!("{:02}", date.day());
    }

    pub fn render(&self, f: &mut Frame, area: Rect) {
        let pad = |s: &str, width: usize| {
            format!("{}{}", s, "_".repeat(width.saturating_sub(s.len())))
        };
        let text = format!(
            "{}-{}-{}",
            pad(&self.year, 4),
            pad(&self.month, 2),
            pad(&self.day, 2)
        );
        let widget = Paragraph::new(text)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(format!("{} (yyyy-mm-dd)", self.label)),
            )
            .style(if self.writing_mode {
                Style::default().add_modifier(Modifier::REVERSED)
            } else {
                Style::default()
            });
        f.render_widget(widget, area);
    }

    pub fn handle_backspace(&mut self) {
        if !self.writing_mode {
            return;
        }
        if !self.day.is_empty() {
            self.day.pop();
        } else if !self.month.is_empty() {
            self.month.pop();
        } else {
            self.year.pop();
        }
    }

    pub fn handle_char(&mut self, c: char) {
        if !self.writing_mode || !c.is_ascii_digit() {
            return;
        }
        if self.year.len() < 4 {
            if !(self.year.is_empty() && c == '0') {
                self.year.push(c);
            }
        } else if self.month.len() < 2 {
            self.push_month(c);
        } else if self.day.len() < 2 {
            self.push_day(c);
        }
    }

    fn push_month(&mut self, c: char) {
        match (self.month.chars().next(), c) {
            (None, '0' | '1') => self.month.push(c),
            (None, _) => {
                self.month.push('0');
                self.month.push(c);
            }
            (Some('0'), '1'..='9') | (Some('1'), '0'..='2') => self.month.push(c),
            _ => {}
        }
    }

    fn push_day(&mut self, c: char) {
        let year: i32 = self.year.parse().unwrap_or(0);
        let month: u32 = self.month.parse().unwrap_or(0);
        let Some(max_days) = days_in_month(year, month) else {
            return;
        };
        match self.day.len() {
            0 => match c {
                '0' | '1' | '2' => self.day.push(c),
                '3' if max_days >= 30 => self.day.push('3'),
                _ => self.day.push_str(&format!("0{}", c)),
            },
            1 => {
                let value = format!("{}{}", self.day, c);
                if value
                    .parse::<u32>()
                    .is_ok_and(|val| (1..=max_days).contains(&val))
                {
                    self.day.push(c);
                }
            }
            _ => {}
        }
    }

    /// Leaving the field with an incomplete date clears it.
    pub fn handle_tab(&mut self) {
        if self.writing_mode && self.get_selected_value().is_none() {
            self.year.clear();
            self.month.clear();
            self.day.clear();
        }
    }

    pub fn get_selected_value(&self) -> Option<NaiveDate> {
        let str = format!("{}-{}-{}", self.year, self.month, self.day);
        NaiveDate::parse_from_str(&str, "%Y-%m-%d").ok()
    }
}

fn days_in_month(year: i32, month: u32) -> Option<u32> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)?
    };
    u32::try_from(next.signed_duration_since(first).num_days()).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    fn typed(input: &str) -> DatePicker {
        let mut picker = DatePicker::new("date");
        picker.writing_mode = true;
        input.chars().for_each(|c| picker.handle_char(c));
        picker
    }

    #[test]
    fn builds_a_date_from_digits() {
        let picker = typed("2024-3-15");
        assert_eq!(picker.get_selected_value(), NaiveDate::from_ymd_opt(2024, 3, 15));
    }

    #[test]
    fn refuses_days_past_the_end_of_the_month() {
        let picker = typed("20230229");
        assert_eq!(picker.day, "2");
        let picker = typed("20230431");
        assert_eq!(picker.day, "3");
        let picker = typed("20240229");
        assert_eq!(picker.get_selected_value(), NaiveDate::from_ymd_opt(2024, 2, 29));
    }

    #[test]
    fn loaded_value_can_be_edited() {
        let mut picker = DatePicker::new("date");
        picker.set_value(NaiveDate::from_ymd_opt(2024, 5, 20).unwrap());
        picker.writing_mode = true;
        picker.handle_backspace();
        picker.handle_char('1');
        assert_eq!(picker.get_selected_value(), NaiveDate::from_ymd_opt(2024, 5, 21));
        picker.handle_backspace();
        picker.handle_backspace();
        picker.handle_tab();
        assert_eq!(picker.get_selected_value(), None);
        assert!(picker.year.is_empty());
    }

    #[test]
    fn renders_years_wider_than_four_digits() {
        let mut terminal = Terminal::new(TestBackend::new(30, 3)).unwrap();
        let mut picker = DatePicker::new("date");
        picker.set_value(NaiveDate::from_ymd_opt(10000, 5, 1).unwrap());
        terminal.draw(|f| picker.render(f, f.area())).unwrap();
        let row: String = (0..30u16)
            .map(|x| terminal.backend().buffer()[(x, 1u16)].symbol().to_string())
            .collect();
        assert!(row.contains("10000-05-01"));
    }
}

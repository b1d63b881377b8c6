use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::{
    localization::Labels,
    shapes::banner::{Banner, BannerStyle},
};

#[derive(Debug)]
pub struct NotifyBanner {
    labels: &'static Labels,
}

impl NotifyBanner {
    pub fn new(labels: &'static Labels) -> Self {
        Self { labels }
    }

    pub fn render(&self, f: &mut Frame, area: Rect, banner: Option<&Banner>) {
        let Some(banner) = banner else {
            return;
        };
        let (color, title) = match banner.style {
            BannerStyle::Success => (Color::Green, self.labels.success),
            BannerStyle::Info => (Color::Blue, self.labels.info),
            BannerStyle::Danger => (Color::Red, self.labels.error),
        };
        let widget = Paragraph::new(banner.text.clone())
            .style(
                Style::default()
                    .fg(Color::White)
                    .bg(color)
                    .add_modifier(Modifier::BOLD),
            )
            .wrap(Wrap { trim: true })
            .block(Block::default().borders(Borders::ALL).title(title));
        f.render_widget(widget, area);
    }
}

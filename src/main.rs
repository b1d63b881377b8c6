mod app;
mod constants;
mod errors;
mod localization;
mod logging;
mod pages;
mod providers;
mod screens;
mod shapes;

#[cfg(test)]
mod tests;

use crate::{
    app::App,
    constants::API_URL_ENV_VAR,
    logging::logger::{init_logger, log_error, log_info},
    providers::{
        fs::{
            path::{get_base_path, get_log_file_path},
            settings_reader::FileSystemSettingsReader,
        },
        http::{
            backend::HttpBackend, match_api::HttpMatchApi, standings_api::HttpStandingsApi,
            team_api::HttpTeamApi,
        },
        settings_reader::SettingsReader,
    },
    screens::screen::{AppAction, Tui},
    shapes::settings::Settings,
};
use crokey::crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::{Modifier, Style},
    widgets::Paragraph,
    Terminal,
};
use std::{error::Error, sync::Arc};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let args: Vec<String> = std::env::args().collect();
    if args.iter().any(|a| a == "--version" || a == "-V") {
        println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
        return Ok(());
    }
    let base_dir = get_base_path()?;
    init_logger(get_log_file_path(&base_dir));

    let settings = FileSystemSettingsReader::new(&base_dir)
        .read()
        .await
        .unwrap_or_else(|e| {
            log_error(&format!("could not read configuration: {}", e));
            Settings::default()
        })
        .with_api_url_override(std::env::var(API_URL_ENV_VAR).ok());
    log_info(&format!(
        "using backend at {} (language {})",
        settings.api_url, settings.language
    ));

    let backend = Arc::new(HttpBackend::new(&settings.api_url, settings.timeout())?);
    let team_api = Arc::new(HttpTeamApi::new(backend.clone()));
    let match_api = Arc::new(HttpMatchApi::new(backend.clone()));
    let standings_api = Arc::new(HttpStandingsApi::new(backend));

    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    let title = settings.labels().app_title;
    let res = run_app(
        &mut terminal,
        title,
        App::new(settings, team_api, match_api, standings_api),
    )
    .await;
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    if let Err(err) = res {
        println!("{:?}", err)
    }
    Ok(())
}

/// The main structure is the following one:
///
/// |----------------------------|
/// |          header            |
/// |----------------------------|
/// |                            |
/// |                            |
/// |           body             |
/// |                            |
/// |                            |
/// |----------------------------|
/// | footer_left | footer_right |
/// |----------------------------|
async fn run_app(terminal: &mut Tui, title: &str, mut app: App) -> std::io::Result<()> {
    loop {
        terminal.draw(|f| {
            let size = f.area();
            let container = Layout::default()
                .direction(Direction::Vertical)
                .margin(1)
                .constraints([
                    Constraint::Length(1),
                    Constraint::Min(1),
                    Constraint::Length(3),
                ])
                .split(size);
            let footer = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
                .split(container[2]);
            let header = Paragraph::new(title).style(Style::default().add_modifier(Modifier::BOLD));
            f.render_widget(header, container[0]);
            if let Some(screen) = app.current_screen() {
                screen.render(f, container[1], footer[0], footer[1]);
            }
        })?;
        if event::poll(std::time::Duration::from_millis(200))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Release {
                    continue;
                }
                let Some(screen) = app.current_screen() else {
                    continue;
                };
                match screen.handle_key(key, terminal).await {
                    AppAction::None => {}
                    AppAction::SwitchScreen(new_screen) => app.push_screen(new_screen).await,
                    AppAction::Back(refresh) => app.pop_screen(refresh).await,
                    AppAction::Quit(result) => return result,
                }
            }
        }
    }
}

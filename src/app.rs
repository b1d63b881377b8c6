use std::sync::Arc;

use crate::{
    providers::{match_api::MatchApi, standings_api::StandingsApi, team_api::TeamApi},
    screens::{home_screen::HomeScreen, screen::ScreenAsync},
    shapes::settings::Settings,
};

pub struct App {
    screens: Vec<Box<dyn ScreenAsync>>,
}

impl App {
    pub fn new<
        T: TeamApi + Send + Sync + 'static,
        M: MatchApi + Send + Sync + 'static,
        S: StandingsApi + Send + Sync + 'static,
    >(
        settings: Settings,
        team_api: Arc<T>,
        match_api: Arc<M>,
        standings_api: Arc<S>,
    ) -> Self {
        Self {
            screens: vec![Box::new(HomeScreen::new(
                settings,
                team_api,
                match_api,
                standings_api,
            ))],
        }
    }

    pub fn current_screen(&mut self) -> Option<&mut Box<dyn ScreenAsync>> {
        self.screens.last_mut()
    }

    /// Pushes `screen` and lets it load its data.
    pub async fn push_screen(&mut self, mut screen: Box<dyn ScreenAsync>) {
        screen.refresh_data().await;
        self.screens.push(screen);
    }

    /// Pops the current screen unless it is the last one.
    pub async fn pop_screen(&mut self, refresh: bool) {
        if self.screens.len() > 1 {
            self.screens.pop();
        }
        if let (true, Some(prev)) = (refresh, self.screens.last_mut()) {
            prev.refresh_data().await;
        }
    }
}

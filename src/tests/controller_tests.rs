mod tests {
    use crate::{
        errors::ApiError,
        localization::EN,
        pages::{match_page::MatchPage, page::PageState, team_page::TeamPage},
        providers::{match_api::MatchApi, team_api::TeamApi},
        shapes::{
            banner::{Banner, BannerStyle},
            r#match::MatchFilter,
            team::TeamEntry,
        },
        tests::fakes::{game, team, FakeMatchApi, FakeTeamApi, ScriptedDialog},
    };
    use std::sync::Arc;

    async fn loaded_team_page(teams: Vec<TeamEntry>) -> (Arc<FakeTeamApi>, TeamPage<FakeTeamApi>) {
        let api = Arc::new(FakeTeamApi::with(teams));
        let mut page = TeamPage::new(api.clone(), &EN);
        page.enter().await;
        (api, page)
    }

    #[tokio::test]
    async fn entering_reports_how_many_teams_were_loaded() {
        let (_, page) = loaded_team_page(vec![team(1, "Flamengo"), team(2, "Vasco")]).await;
        assert_eq!(page.teams().len(), 2);
        assert_eq!(page.page().banner(), Some(&Banner::success("2 teams loaded")));

        let (_, empty) = loaded_team_page(vec![]).await;
        assert_eq!(empty.page().banner(), Some(&Banner::info("No teams found")));
    }

    #[tokio::test]
    async fn transport_failures_load_an_empty_list() {
        let api = Arc::new(FakeTeamApi::with(vec![team(1, "Flamengo")]));
        api.fail_with(ApiError::Timeout);
        let mut page = TeamPage::new(api, &EN);
        page.enter().await;
        assert!(page.teams().is_empty());
        assert_eq!(page.page().banner(), Some(&Banner::info("No teams found")));
    }

    #[tokio::test]
    async fn malformed_responses_show_a_danger_banner() {
        let api = Arc::new(FakeTeamApi::with(vec![]));
        api.fail_with(ApiError::Construction("missing field `nome`".into()));
        let mut page = TeamPage::new(api, &EN);
        page.enter().await;
        assert!(matches!(page.page().state(), PageState::LoadError(_)));
        let banner = page.page().banner().expect("a banner is shown");
        assert_eq!(banner.style, BannerStyle::Danger);
        assert!(banner.text.starts_with("Could not load teams: "));
    }

    #[tokio::test]
    async fn cancelled_dialog_leaves_the_list_alone() {
        let (api, mut page) = loaded_team_page(vec![team(1, "Flamengo")]).await;
        let calls = api.calls();
        let before = page.page().snapshot();

        let mut dialog = ScriptedDialog::cancelling();
        page.create(&mut dialog).await;
        assert_eq!(page.page().banner(), Some(&Banner::danger("Team was not added")));
        assert_eq!(api.calls(), calls);
        page.update(0, &mut dialog).await;
        assert_eq!(page.page().banner(), Some(&Banner::danger("Team was not updated")));

        // only the read that refreshes the row before editing
        assert_eq!(api.calls(), calls + 1);
        assert_eq!(page.teams(), &*before);
        assert_eq!(dialog.opened.len(), 2);
        assert!(dialog.opened[0].1);
        assert!(!dialog.opened[1].1);
    }

    #[tokio::test]
    async fn created_team_is_appended_and_can_be_read_back() {
        let (api, mut page) = loaded_team_page(vec![team(1, "Vasco")]).await;
        let mut dialog = ScriptedDialog::saving(|t: &mut TeamEntry| {
            t.name = "Flamengo".into();
            t.stadium = Some("Maracanã".into());
            t.city = Some("Rio de Janeiro".into());
        });
        page.create(&mut dialog).await;

        assert_eq!(page.page().banner(), Some(&Banner::success("Team was added")));
        let created = page.teams().last().cloned().expect("team appended");
        assert!(created.id.is_some_and(|id| id > 0));
        assert_eq!(created.name, "Flamengo");
        assert_eq!(created.stadium.as_deref(), Some("Maracanã"));
        assert_eq!(created.city.as_deref(), Some("Rio de Janeiro"));

        let fetched = api.get(created.id.unwrap()).await.unwrap();
        assert_eq!(fetched, Some(created));
        assert_eq!(dialog.opened[0], (TeamEntry::new_empty(), true));
    }

    #[tokio::test]
    async fn updated_team_replaces_the_row_in_place() {
        let (_, mut page) = loaded_team_page(vec![team(1, "Vasco"), team(2, "Botafogo")]).await;
        let mut dialog = ScriptedDialog::saving(|t: &mut TeamEntry| t.city = Some("Rio".into()));
        page.update(1, &mut dialog).await;
        assert_eq!(page.page().banner(), Some(&Banner::info("Team was updated")));
        assert_eq!(page.teams()[1].city.as_deref(), Some("Rio"));
        assert_eq!(page.teams()[0], team(1, "Vasco"));
    }

    #[tokio::test]
    async fn edit_dialog_opens_on_the_current_backend_record() {
        let (api, mut page) = loaded_team_page(vec![team(1, "Vasco")]).await;
        api.update(&TeamEntry {
            stadium: Some("São Januário".into()),
            ..team(1, "Vasco")
        })
        .await
        .unwrap();

        let mut dialog = ScriptedDialog::cancelling();
        page.update(0, &mut dialog).await;
        assert_eq!(dialog.opened[0].0.stadium.as_deref(), Some("São Januário"));
    }

    #[tokio::test]
    async fn editing_a_record_deleted_elsewhere_never_opens_the_dialog() {
        let (api, mut page) = loaded_team_page(vec![team(1, "Vasco")]).await;
        api.delete(1).await.unwrap();

        let mut dialog = ScriptedDialog::saving(|t: &mut TeamEntry| t.name = "Santos".into());
        page.update(0, &mut dialog).await;
        assert!(dialog.opened.is_empty());
        assert_eq!(page.teams(), &[team(1, "Vasco")]);
        assert_eq!(
            page.page().banner(),
            Some(&Banner::danger("Could not update team"))
        );
    }

    #[tokio::test]
    async fn failed_update_keeps_the_old_row() {
        let (api, mut page) = loaded_team_page(vec![team(1, "Vasco")]).await;
        api.fail_with(ApiError::Construction("bad body".into()));
        let mut dialog = ScriptedDialog::saving(|t: &mut TeamEntry| t.name = "Santos".into());
        page.update(0, &mut dialog).await;
        assert_eq!(page.teams()[0].name, "Vasco");
        assert_eq!(
            page.page().banner().map(|b| b.style),
            Some(BannerStyle::Danger)
        );
    }

    #[tokio::test]
    async fn deleting_removes_the_row_after_confirmation() {
        let (api, mut page) = loaded_team_page(vec![team(1, "Vasco"), team(2, "Botafogo")]).await;
        page.delete(0).await;
        assert_eq!(page.teams(), &[team(2, "Botafogo")]);
        assert_eq!(page.page().banner(), Some(&Banner::danger("Team was deleted")));
        assert_eq!(api.get(1).await, Ok(None));
    }

    #[tokio::test]
    async fn deleting_an_unknown_record_fails_quietly() {
        let api = Arc::new(FakeTeamApi::with(vec![team(1, "Vasco")]));
        assert_eq!(api.delete(999).await, Err(ApiError::Status(404)));

        let mut page = TeamPage::new(api.clone(), &EN);
        page.enter().await;
        api.delete(1).await.unwrap();
        page.delete(0).await;
        assert_eq!(page.teams(), &[team(1, "Vasco")]);
        assert_eq!(
            page.page().banner(),
            Some(&Banner::danger("Could not delete team"))
        );
    }

    #[tokio::test]
    async fn match_page_loads_matches_and_teams() {
        let teams = Arc::new(FakeTeamApi::with(vec![team(1, "Flamengo"), team(2, "Vasco")]));
        let matches = Arc::new(FakeMatchApi::with(vec![game(1, 1, 2, (2, 1))]));
        let mut page = MatchPage::new(matches, teams, &EN);
        page.enter().await;
        assert_eq!(page.matches().len(), 1);
        assert_eq!(page.teams().len(), 2);
        assert_eq!(page.page().banner(), Some(&Banner::success("1 matches loaded")));
        assert_eq!(page.filter_label(), "All");
    }

    #[tokio::test]
    async fn filter_cycles_through_teams_and_back_to_all() {
        let teams = Arc::new(FakeTeamApi::with(vec![
            team(1, "Flamengo"),
            team(2, "Vasco"),
            team(3, "Santos"),
        ]));
        let matches = Arc::new(FakeMatchApi::with(vec![
            game(1, 1, 2, (2, 1)),
            game(2, 2, 3, (0, 0)),
            game(3, 3, 1, (1, 3)),
        ]));
        let mut page = MatchPage::new(matches, teams, &EN);
        page.enter().await;

        page.cycle_filter().await;
        assert_eq!(page.filter(), MatchFilter::Team(1));
        assert_eq!(page.filter_label(), "Flamengo");
        let ids: Vec<_> = page.matches().iter().filter_map(|m| m.id).collect();
        assert_eq!(ids, vec![1, 3]);

        page.cycle_filter().await;
        page.cycle_filter().await;
        assert_eq!(page.filter(), MatchFilter::Team(3));
        page.cycle_filter().await;
        assert_eq!(page.filter(), MatchFilter::All);
        assert_eq!(page.matches().len(), 3);
    }

    #[tokio::test]
    async fn unknown_team_filter_falls_back_to_all() {
        let teams = Arc::new(FakeTeamApi::with(vec![team(1, "Flamengo")]));
        let matches = Arc::new(FakeMatchApi::with(vec![game(1, 1, 2, (2, 1))]));
        let mut page = MatchPage::new(matches, teams, &EN);
        page.enter().await;
        let banner = page.page().banner().cloned();
        page.set_filter(MatchFilter::Team(42)).await;
        assert_eq!(page.filter(), MatchFilter::All);
        assert_eq!(page.matches().len(), 1);
        assert_eq!(page.page().banner().cloned(), banner);
    }

    #[tokio::test]
    async fn malformed_filter_response_shows_a_danger_banner() {
        let teams = Arc::new(FakeTeamApi::with(vec![team(1, "Flamengo")]));
        let matches = Arc::new(FakeMatchApi::with(vec![game(1, 1, 2, (2, 1))]));
        let mut page = MatchPage::new(matches.clone(), teams, &EN);
        page.enter().await;

        matches.fail_with(ApiError::Construction("invalid date".into()));
        page.set_filter(MatchFilter::Team(1)).await;
        assert_eq!(page.matches().len(), 1);
        let banner = page.page().banner().expect("a banner is shown");
        assert_eq!(banner.style, BannerStyle::Danger);
        assert_eq!(banner.text, "Could not load data: malformed response: invalid date");

        matches.fail_with(ApiError::Network("connection refused".into()));
        page.dismiss_banner();
        page.set_filter(MatchFilter::All).await;
        assert!(page.matches().is_empty());
        assert_eq!(page.page().banner(), None);
    }

    #[tokio::test]
    async fn season_filter_steps_through_years() {
        let teams = Arc::new(FakeTeamApi::with(vec![team(1, "Flamengo"), team(2, "Vasco")]));
        let mut older = game(2, 2, 1, (0, 1));
        older.date = chrono::NaiveDate::from_ymd_opt(2023, 8, 20).unwrap();
        let matches = Arc::new(FakeMatchApi::with(vec![game(1, 1, 2, (2, 1)), older]));
        let mut page = MatchPage::new(matches, teams, &EN);
        page.enter().await;

        page.set_filter(MatchFilter::Season(2024)).await;
        assert_eq!(page.filter_label(), "Season 2024");
        let ids: Vec<_> = page.matches().iter().filter_map(|m| m.id).collect();
        assert_eq!(ids, vec![1]);

        page.shift_season(-1).await;
        assert_eq!(page.filter(), MatchFilter::Season(2023));
        let ids: Vec<_> = page.matches().iter().filter_map(|m| m.id).collect();
        assert_eq!(ids, vec![2]);

        page.set_filter(MatchFilter::Season(1900)).await;
        assert_eq!(page.filter(), MatchFilter::Season(crate::constants::FIRST_SEASON));

        page.cycle_filter().await;
        assert_eq!(page.filter(), MatchFilter::All);
    }

    #[tokio::test]
    async fn match_dialog_flows_mirror_the_team_page() {
        let teams = Arc::new(FakeTeamApi::with(vec![team(1, "Flamengo"), team(2, "Vasco")]));
        let matches = Arc::new(FakeMatchApi::with(vec![]));
        let mut page = MatchPage::new(matches.clone(), teams, &EN);
        page.enter().await;
        let calls = matches.calls();

        page.create(&mut ScriptedDialog::cancelling()).await;
        assert_eq!(matches.calls(), calls);
        assert_eq!(page.page().banner(), Some(&Banner::danger("Match was not added")));

        let mut dialog = ScriptedDialog::saving(|m: &mut crate::shapes::r#match::MatchEntry| {
            m.home_team_id = 1;
            m.away_team_id = 2;
            m.home_goals = 2;
            m.away_goals = 1;
            m.venue = "Maracanã".into();
        });
        page.create(&mut dialog).await;
        assert_eq!(page.page().banner(), Some(&Banner::success("Match was added")));
        let created = page.matches()[0].clone();
        assert_eq!(matches.get(created.id.unwrap()).await, Ok(Some(created.clone())));

        let mut edit = ScriptedDialog::saving(|m: &mut crate::shapes::r#match::MatchEntry| m.away_goals = 2);
        page.update(0, &mut edit).await;
        assert_eq!(page.matches()[0].away_goals, 2);
        assert_eq!(page.page().banner(), Some(&Banner::info("Match was updated")));

        page.delete(0).await;
        assert!(page.matches().is_empty());
        assert_eq!(matches.get(created.id.unwrap()).await, Ok(None));
    }
}

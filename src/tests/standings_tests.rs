mod tests {
    use crate::{
        errors::ApiError,
        localization::EN,
        pages::standings_page::StandingsPage,
        shapes::{
            banner::{Banner, BannerStyle},
            standings::StandingsTable,
        },
        tests::fakes::FakeStandingsApi,
    };
    use chrono::{Datelike, Local, NaiveDate};
    use std::sync::Arc;

    const TABLE: &str = r#"{
        "data": [
            {"id": 1, "nome": "Flamengo", "jogos": 3, "pontos": "7", "vitorias": 2,
             "empates": 1, "derrotas": 0, "gols_pro": "6", "gols_contra": 2, "saldo_gols": "4"},
            {"id": 2, "nome": "Vasco", "jogos": 0, "pontos": null, "vitorias": null,
             "empates": null, "derrotas": null, "gols_pro": null, "gols_contra": null, "saldo_gols": null}
        ],
        "ano": "2024",
        "data_referencia": "2024-05-01",
        "atualizado_em": "2024-05-01 12:00:00"
    }"#;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn counters_accept_numbers_strings_and_null() {
        let table: StandingsTable = serde_json::from_str(TABLE).unwrap();
        assert_eq!(table.year, Some(2024));
        assert_eq!(table.rows[0].points, 7);
        assert_eq!(table.rows[0].goal_difference, 4);
        assert_eq!(table.rows[1].points, 0);
        assert_eq!(table.rows[1].goals_for, 0);
        assert_eq!(table.updated_at.as_deref(), Some("2024-05-01 12:00:00"));
    }

    #[test]
    fn non_numeric_counters_are_rejected() {
        let body = r#"{"data": [{"id": 1, "nome": "Flamengo", "jogos": "three", "pontos": 0,
            "vitorias": 0, "empates": 0, "derrotas": 0, "gols_pro": 0, "gols_contra": 0, "saldo_gols": 0}]}"#;
        assert!(serde_json::from_str::<StandingsTable>(body).is_err());
    }

    #[tokio::test]
    async fn load_fills_rows_and_metadata() {
        let table: StandingsTable = serde_json::from_str(TABLE).unwrap();
        let api = Arc::new(FakeStandingsApi::with(table));
        let mut page = StandingsPage::starting_at(api.clone(), &EN, 2024, day(2024, 5, 1));
        page.load().await;

        assert_eq!(page.page().rows().len(), 2);
        assert_eq!(page.page().banner(), Some(&Banner::success("League standings 2024")));
        assert_eq!(page.reference_date(), Some("2024-05-01"));
        assert_eq!(api.requests(), vec![(2024, day(2024, 5, 1))]);

        let rows = page.table_rows();
        assert_eq!(rows[0][0], "1");
        assert_eq!(rows[0][1], "Flamengo");
        assert_eq!(rows[0][2], "7");
        assert_eq!(rows[1][0], "2");
    }

    #[tokio::test]
    async fn failed_reload_drops_the_previous_metadata() {
        let table: StandingsTable = serde_json::from_str(TABLE).unwrap();
        let api = Arc::new(FakeStandingsApi::with(table));
        let mut page = StandingsPage::starting_at(api.clone(), &EN, 2024, day(2024, 5, 1));
        page.load().await;
        assert!(page.updated_at().is_some());

        api.fail_with(ApiError::Construction("bad counter".into()));
        page.shift_date(1).await;
        assert!(page.page().rows().is_empty());
        assert_eq!(page.reference_date(), None);
        assert_eq!(page.updated_at(), None);

        api.fail_with(ApiError::Timeout);
        page.shift_date(1).await;
        assert_eq!(page.updated_at(), None);
    }

    #[tokio::test]
    async fn year_and_date_changes_reload() {
        let api = Arc::new(FakeStandingsApi::with(StandingsTable::default()));
        let mut page = StandingsPage::starting_at(api.clone(), &EN, 2023, day(2023, 6, 30));
        page.set_year(2022).await;
        page.shift_date(1).await;
        page.set_date(day(2022, 1, 15)).await;
        assert_eq!(
            api.requests(),
            vec![
                (2022, day(2023, 6, 30)),
                (2022, day(2023, 7, 1)),
                (2022, day(2022, 1, 15)),
            ]
        );
        assert_eq!(page.page().banner(), Some(&Banner::info("No data found")));
    }

    #[tokio::test]
    async fn year_is_clamped_to_known_seasons() {
        let api = Arc::new(FakeStandingsApi::with(StandingsTable::default()));
        let mut page = StandingsPage::starting_at(api, &EN, 1990, day(2024, 1, 1));
        assert_eq!(page.year(), 2020);
        page.set_year(3000).await;
        assert_eq!(page.year(), Local::now().year());
    }

    #[tokio::test]
    async fn unreachable_backend_shows_an_empty_table() {
        let api = Arc::new(FakeStandingsApi::with(StandingsTable::default()));
        api.fail_with(ApiError::Network("connection refused".into()));
        let mut page = StandingsPage::starting_at(api.clone(), &EN, 2024, day(2024, 5, 1));
        page.load().await;
        assert!(page.page().rows().is_empty());
        assert_eq!(page.page().banner().map(|b| b.style), Some(BannerStyle::Info));

        api.fail_with(ApiError::Construction("expected a map".into()));
        page.load().await;
        assert_eq!(page.page().banner().map(|b| b.style), Some(BannerStyle::Danger));
    }
}

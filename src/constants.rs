pub const APP_DIRECTORY_NAME: &str = ".campeonato";
pub const CONFIG_FILE_NAME: &str = "config.toml";
pub const LOG_FILE_NAME: &str = "campeonato.log";
pub const API_URL_ENV_VAR: &str = "CAMPEONATO_API_URL";
pub const DEFAULT_API_URL: &str = "http://host.docker.internal:80/api";
pub const DEFAULT_TIMEOUT_SECS: u64 = 20;
pub const TEAMS_PATH: &str = "times";
pub const MATCHES_PATH: &str = "partidas";
pub const MATCHES_BY_TEAM_SCOPED_PATH: &str = "partidas-by-team/";
pub const STANDINGS_PATH: &str = "classificacao";
pub const FIRST_SEASON: i32 = 2020;

use crate::shapes::enums::LanguageEnum;

/// Every user-facing string. Entries containing `{}` are templates.
#[derive(Debug)]
pub struct Labels {
    pub app_title: &'static str,
    pub info: &'static str,
    pub success: &'static str,
    pub error: &'static str,
    pub teams: &'static str,
    pub matches: &'static str,
    pub standings: &'static str,
    pub manage_teams: &'static str,
    pub manage_matches: &'static str,
    pub view_table: &'static str,
    pub no_teams_yet: &'static str,
    pub no_matches_yet: &'static str,
    pub new_team: &'static str,
    pub edit_team: &'static str,
    pub new_match: &'static str,
    pub edit_match: &'static str,
    pub name: &'static str,
    pub stadium: &'static str,
    pub city: &'static str,
    pub date: &'static str,
    pub home_team: &'static str,
    pub home_goals: &'static str,
    pub away_team: &'static str,
    pub away_goals: &'static str,
    pub venue: &'static str,
    pub year: &'static str,
    pub season: &'static str,
    pub reference_date: &'static str,
    pub all_teams: &'static str,
    pub filter: &'static str,
    pub home_placeholder: &'static str,
    pub away_placeholder: &'static str,
    pub standings_columns: [&'static str; 10],
    pub loading_teams: &'static str,
    pub teams_loaded: &'static str,
    pub no_teams_found: &'static str,
    pub could_not_load_teams: &'static str,
    pub team_deleted: &'static str,
    pub could_not_delete_team: &'static str,
    pub team_not_updated: &'static str,
    pub team_updated: &'static str,
    pub could_not_update_team: &'static str,
    pub team_not_added: &'static str,
    pub team_added: &'static str,
    pub could_not_add_team: &'static str,
    pub loading_matches: &'static str,
    pub matches_loaded: &'static str,
    pub no_matches_found: &'static str,
    pub could_not_load_matches: &'static str,
    pub match_deleted: &'static str,
    pub could_not_delete_match: &'static str,
    pub match_not_updated: &'static str,
    pub match_updated: &'static str,
    pub could_not_update_match: &'static str,
    pub match_not_added: &'static str,
    pub match_added: &'static str,
    pub could_not_add_match: &'static str,
    pub loading_standings: &'static str,
    pub standings_of_year: &'static str,
    pub no_standings_found: &'static str,
    pub could_not_load_standings: &'static str,
}

pub static EN: Labels = Labels {
    app_title: "⚽ campeonato",
    info: "info",
    success: "success",
    error: "error",
    teams: "Teams",
    matches: "Matches",
    standings: "Standings",
    manage_teams: "Manage teams",
    manage_matches: "Manage matches",
    view_table: "View table",
    no_teams_yet: "No teams registered",
    no_matches_yet: "No matches registered",
    new_team: "Add new team",
    edit_team: "Edit team",
    new_match: "Add new match",
    edit_match: "Edit match",
    name: "Name",
    stadium: "Stadium",
    city: "City",
    date: "Date",
    home_team: "Home team",
    home_goals: "Home goals",
    away_team: "Away team",
    away_goals: "Away goals",
    venue: "Venue",
    year: "Year",
    season: "Season {}",
    reference_date: "reference",
    all_teams: "All",
    filter: "Showing",
    home_placeholder: "Home team",
    away_placeholder: "Away team",
    standings_columns: ["Pos", "Team", "P", "GP", "W", "D", "L", "GF", "GA", "GD"],
    loading_teams: "Loading teams...",
    teams_loaded: "{} teams loaded",
    no_teams_found: "No teams found",
    could_not_load_teams: "Could not load teams: {}",
    team_deleted: "Team was deleted",
    could_not_delete_team: "Could not delete team",
    team_not_updated: "Team was not updated",
    team_updated: "Team was updated",
    could_not_update_team: "Could not update team",
    team_not_added: "Team was not added",
    team_added: "Team was added",
    could_not_add_team: "Could not add team",
    loading_matches: "Loading matches...",
    matches_loaded: "{} matches loaded",
    no_matches_found: "No matches found",
    could_not_load_matches: "Could not load data: {}",
    match_deleted: "Match was deleted",
    could_not_delete_match: "Could not delete match",
    match_not_updated: "Match was not updated",
    match_updated: "Match was updated",
    could_not_update_match: "Could not update match",
    match_not_added: "Match was not added",
    match_added: "Match was added",
    could_not_add_match: "Could not add match",
    loading_standings: "Loading standings...",
    standings_of_year: "League standings {}",
    no_standings_found: "No data found",
    could_not_load_standings: "Could not load data: {}",
};

pub static PT_BR: Labels = Labels {
    app_title: "⚽ campeonato",
    info: "info",
    success: "sucesso",
    error: "erro",
    teams: "Times",
    matches: "Partidas",
    standings: "Classificação",
    manage_teams: "Gerenciar Times",
    manage_matches: "Gerenciar Partidas",
    view_table: "Ver Tabela",
    no_teams_yet: "Nenhum time cadastrado",
    no_matches_yet: "Nenhuma partida cadastrada",
    new_team: "Adicionar Novo Time",
    edit_team: "Editar Time",
    new_match: "Adicionar Nova Partida",
    edit_match: "Editar Partida",
    name: "Nome",
    stadium: "Estádio",
    city: "Cidade",
    date: "Data",
    home_team: "Time Casa",
    home_goals: "Gols Time Casa",
    away_team: "Time Visitante",
    away_goals: "Gols Time Visitante",
    venue: "Estádio",
    year: "Ano",
    season: "Temporada {}",
    reference_date: "referência",
    all_teams: "Todos",
    filter: "Exibindo",
    home_placeholder: "Time Casa",
    away_placeholder: "Time Visitante",
    standings_columns: ["Pos", "Time", "P", "J", "V", "E", "D", "GP", "GC", "SG"],
    loading_teams: "Carregando times...",
    teams_loaded: "{} times carregados",
    no_teams_found: "Nenhum time encontrado",
    could_not_load_teams: "Erro ao carregar times: {}",
    team_deleted: "Time foi deletado",
    could_not_delete_team: "Erro ao deletar time",
    team_not_updated: "Time não foi atualizado",
    team_updated: "Time foi atualizado",
    could_not_update_team: "Erro ao atualizar time",
    team_not_added: "Time não foi adicionado",
    team_added: "Time foi adicionado",
    could_not_add_team: "Erro ao adicionar time",
    loading_matches: "Carregando partidas...",
    matches_loaded: "{} partidas carregadas",
    no_matches_found: "Nenhuma partida encontrada",
    could_not_load_matches: "Erro ao carregar dados: {}",
    match_deleted: "Partida foi deletada",
    could_not_delete_match: "Erro ao deletar partida",
    match_not_updated: "Partida não foi atualizada",
    match_updated: "Partida foi atualizada",
    could_not_update_match: "Erro ao atualizar partida",
    match_not_added: "Partida não foi adicionada",
    match_added: "Partida foi adicionada",
    could_not_add_match: "Erro ao adicionar partida",
    loading_standings: "Carregando classificação...",
    standings_of_year: "Classificação do Campeonato {}",
    no_standings_found: "Nenhum dado encontrado",
    could_not_load_standings: "Erro ao carregar dados: {}",
};

pub fn labels_for(language: LanguageEnum) -> &'static Labels {
    match language {
        LanguageEnum::En => &EN,
        LanguageEnum::PtBr => &PT_BR,
    }
}

/// Fills the `{}` slot of a label template.
pub fn fill(template: &str, value: impl std::fmt::Display) -> String {
    template.replace("{}", &value.to_string())
}

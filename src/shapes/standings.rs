use serde::{de, Deserialize, Deserializer};
use serde_json::Value;

/// One line of the standings table, computed by the backend.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct StandingsRow {
    pub id: u64,
    #[serde(rename = "nome")]
    pub team_name: String,
    #[serde(rename = "jogos", deserialize_with = "counter")]
    pub games_played: i64,
    #[serde(rename = "pontos", deserialize_with = "counter")]
    pub points: i64,
    #[serde(rename = "vitorias", deserialize_with = "counter")]
    pub wins: i64,
    #[serde(rename = "empates", deserialize_with = "counter")]
    pub draws: i64,
    #[serde(rename = "derrotas", deserialize_with = "counter")]
    pub losses: i64,
    #[serde(rename = "gols_pro", deserialize_with = "counter")]
    pub goals_for: i64,
    #[serde(rename = "gols_contra", deserialize_with = "counter")]
    pub goals_against: i64,
    #[serde(rename = "saldo_gols", deserialize_with = "counter")]
    pub goal_difference: i64,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq, Default)]
pub struct StandingsTable {
    #[serde(rename = "data")]
    pub rows: Vec<StandingsRow>,
    #[serde(rename = "ano", default, deserialize_with = "optional_counter")]
    pub year: Option<i64>,
    #[serde(rename = "data_referencia", default)]
    pub reference_date: Option<String>,
    #[serde(rename = "atualizado_em", default)]
    pub updated_at: Option<String>,
}

// Aggregates come out of SQL sums: a number, a numeric string, or null for a
// team that has not played yet.
fn counter<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(0),
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f as i64))
            .ok_or_else(|| de::Error::custom(format!("invalid counter {}", n))),
        Value::String(s) => s
            .trim()
            .parse::<f64>()
            .map(|f| f as i64)
            .map_err(|_| de::Error::custom(format!("invalid counter '{}'", s))),
        other => Err(de::Error::custom(format!("invalid counter {}", other))),
    }
}

fn optional_counter<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(None),
        other => counter(other).map(Some).map_err(de::Error::custom),
    }
}

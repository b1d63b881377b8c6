use serde::{Deserialize, Serialize};

/// A team as returned by the backend. `id` is `None` for drafts.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct TeamEntry {
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "estadio", default)]
    pub stadium: Option<String>,
    #[serde(rename = "cidade", default)]
    pub city: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// Request body for team writes. Only these fields ever leave the client.
#[derive(Debug, Serialize)]
pub struct TeamPayload<'a> {
    #[serde(rename = "nome")]
    pub name: &'a str,
    #[serde(rename = "estadio")]
    pub stadium: Option<&'a str>,
    #[serde(rename = "cidade")]
    pub city: Option<&'a str>,
}

impl TeamEntry {
    pub fn new_empty() -> Self {
        Self::default()
    }

    pub fn payload(&self) -> TeamPayload<'_> {
        TeamPayload {
            name: &self.name,
            stadium: self.stadium.as_deref(),
            city: self.city.as_deref(),
        }
    }

    pub fn location(&self) -> String {
        match (self.stadium.as_deref(), self.city.as_deref()) {
            (Some(s), Some(c)) if !s.is_empty() && !c.is_empty() => format!("{} - {}", s, c),
            (Some(s), _) if !s.is_empty() => s.to_string(),
            (_, Some(c)) if !c.is_empty() => c.to_string(),
            _ => String::new(),
        }
    }
}

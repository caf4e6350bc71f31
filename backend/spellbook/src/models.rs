use std::fmt;

use serde::{Deserialize, Serialize};

pub const SPELLS_ENDPOINT: &str = "/api/spells";
pub const IMPORT_ENDPOINT: &str = "/api/import_spellbook";

/// Backend assigned, never interpreted here.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum SpellId {
    Number(u64),
    Signed(i64),
    Float(f64),
    Text(String),
}

impl fmt::Display for SpellId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpellId::Number(id) => write!(f, "{id}"),
            SpellId::Signed(id) => write!(f, "{id}"),
            SpellId::Float(id) => write!(f, "{id}"),
            SpellId::Text(id) => write!(f, "{id}"),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Spell {
    pub id: SpellId,
    pub name: String,
    pub spell: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct NewSpell {
    pub name: String,
    pub spell: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Spellbook {
    pub spells: Vec<NewSpell>,
}

/// Import payload. `yaml` is the older spelling some clients still send.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ImportRequest {
    #[serde(alias = "yaml")]
    pub yaml_content: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ErrorBody {
    pub error: String,
}

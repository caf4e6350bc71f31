use std::sync::Mutex;

use reqwest::StatusCode;
use serde_json::{Value, json};
use spellbook::{NewSpell, Spell};

use crate::{api::SpellService, error::ClientError};

/// In-memory stand-in for the proxy.
#[derive(Default)]
pub struct MockService {
    fail: bool,
    spells: Vec<Spell>,
    casts: Mutex<Vec<NewSpell>>,
    imports: Mutex<Vec<String>>,
    lists: Mutex<usize>,
}

impl MockService {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn with_spells(spells: Vec<Spell>) -> Self {
        Self {
            spells,
            ..Self::default()
        }
    }

    pub fn cast_calls(&self) -> Vec<NewSpell> {
        self.casts.lock().unwrap().clone()
    }

    pub fn import_calls(&self) -> Vec<String> {
        self.imports.lock().unwrap().clone()
    }

    pub fn list_calls(&self) -> usize {
        *self.lists.lock().unwrap()
    }

    fn outcome<T>(&self, value: T) -> Result<T, ClientError> {
        if self.fail {
            return Err(ClientError::Rejected {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                body: json!({ "error": "backend down" }).to_string(),
            });
        }

        Ok(value)
    }
}

impl SpellService for MockService {
    async fn cast(&self, spell: &NewSpell) -> Result<Value, ClientError> {
        self.casts.lock().unwrap().push(spell.clone());

        self.outcome(json!({ "id": 1, "name": spell.name, "spell": spell.spell }))
    }

    async fn list(&self) -> Result<Vec<Spell>, ClientError> {
        *self.lists.lock().unwrap() += 1;

        self.outcome(self.spells.clone())
    }

    async fn import(&self, yaml_content: &str) -> Result<Value, ClientError> {
        self.imports.lock().unwrap().push(yaml_content.to_string());

        self.outcome(json!({ "imported": true }))
    }
}

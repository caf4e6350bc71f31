use spellbook::Spell;
use tracing::error;

use crate::api::SpellService;

pub const LOADING_MESSAGE: &str = "Summoning spell list...";

/// Spellbook page state. Fetches once, never refreshes.
#[derive(Debug)]
pub struct SpellbookList {
    pub spells: Vec<Spell>,
    pub loading: bool,
    mounted: bool,
}

impl Default for SpellbookList {
    fn default() -> Self {
        Self {
            spells: Vec::new(),
            loading: true,
            mounted: false,
        }
    }
}

impl SpellbookList {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn mount<S: SpellService>(&mut self, service: &S) {
        if self.mounted {
            return;
        }
        self.mounted = true;

        match service.list().await {
            Ok(spells) => self.spells = spells,
            Err(e) => error!("Failed to fetch spells: {e}"),
        }

        self.loading = false;
    }
}

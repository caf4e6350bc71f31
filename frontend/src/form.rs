use spellbook::NewSpell;
use tracing::{error, info};

use crate::{api::SpellService, error::Alert};

pub const SUBMITTED_MESSAGE: &str = "Spell cast successfully! We'll be in touch by owl.";

/// Single spell request. Fields start empty and are never required.
#[derive(Debug, Default)]
pub struct SpellForm {
    pub form: NewSpell,
    pub submitted: bool,
}

impl SpellForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.form.name = name.into();
    }

    pub fn set_spell(&mut self, spell: impl Into<String>) {
        self.form.spell = spell.into();
    }

    /// Fields are only cleared on success so the user can try again.
    pub async fn submit<S: SpellService>(&mut self, service: &S) -> Result<(), Alert> {
        match service.cast(&self.form).await {
            Ok(_) => {
                info!("Cast spell {:?}", self.form.name);

                self.submitted = true;
                self.form = NewSpell::default();

                Ok(())
            }
            Err(e) => {
                error!("Failed to cast spell: {e}");

                Err(Alert::CastFailed)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::testing::MockService;

    use super::*;

    #[tokio::test]
    async fn test_submit_clears_fields() {
        let service = MockService::default();
        let mut form = SpellForm::new();
        form.set_name("Merlin");
        form.set_spell("Invisibility");

        form.submit(&service).await.unwrap();

        assert!(form.submitted);
        assert_eq!(form.form, NewSpell::default());
        assert_eq!(
            service.cast_calls(),
            vec![NewSpell {
                name: "Merlin".to_string(),
                spell: "Invisibility".to_string(),
            }]
        );
    }

    #[tokio::test]
    async fn test_empty_fields_are_sent() {
        let service = MockService::default();
        let mut form = SpellForm::new();

        form.submit(&service).await.unwrap();

        assert_eq!(service.cast_calls(), vec![NewSpell::default()]);
    }

    #[tokio::test]
    async fn test_failure_keeps_fields() {
        let service = MockService::failing();
        let mut form = SpellForm::new();
        form.set_name("Merlin");
        form.set_spell("Invisibility");

        assert_eq!(form.submit(&service).await, Err(Alert::CastFailed));
        assert!(!form.submitted);
        assert_eq!(form.form.name, "Merlin");
        assert_eq!(form.form.spell, "Invisibility");
    }
}

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SpellbookError {
    #[error("Malformed YAML: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Invalid spellbook: {0}")]
    Validation(#[from] ValidationError),
}

impl SpellbookError {
    pub fn is_validation(&self) -> bool {
        matches!(self, SpellbookError::Validation(_))
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    #[error("document is not a mapping")]
    NotAMapping,

    #[error("missing 'spells' key")]
    MissingSpells,

    #[error("'spells' is not a sequence")]
    SpellsNotSequence,

    #[error("entry {index} is not a mapping")]
    EntryNotMapping { index: usize },

    #[error("entry {index} field '{field}' is missing or not a string")]
    FieldNotString { index: usize, field: &'static str },
}

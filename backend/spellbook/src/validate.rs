//! # Spellbook Validation
//!
//! Shape check for uploaded spellbooks, run before anything is sent to the backend.
//!
//! Expected document:
//! ```yaml
//! spells:
//!   - name: Fireball
//!     spell: Burn everything
//! ```
//!
//! Merge keys (`<<: *anchor`) are resolved before the check. Extra keys at either level are ignored. This is only a fast-fail for the
//! uploader, the backend still decides what it accepts.
use serde_yaml::{Mapping, Value};

use crate::{
    error::{SpellbookError, ValidationError},
    models::{NewSpell, Spellbook},
};

pub const SPELLS_KEY: &str = "spells";
pub const NAME_FIELD: &str = "name";
pub const SPELL_FIELD: &str = "spell";

pub fn parse(text: &str) -> Result<Value, SpellbookError> {
    Ok(serde_yaml::from_str(text)?)
}

pub fn validate(text: &str) -> Result<Spellbook, SpellbookError> {
    let mut document = parse(text)?;
    document.apply_merge()?;

    Ok(check_shape(&document)?)
}

pub fn check_shape(document: &Value) -> Result<Spellbook, ValidationError> {
    let root = document.as_mapping().ok_or(ValidationError::NotAMapping)?;

    let entries = root
        .get(SPELLS_KEY)
        .ok_or(ValidationError::MissingSpells)?
        .as_sequence()
        .ok_or(ValidationError::SpellsNotSequence)?;

    let spells = entries
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            let entry = entry
                .as_mapping()
                .ok_or(ValidationError::EntryNotMapping { index })?;

            Ok(NewSpell {
                name: string_field(entry, index, NAME_FIELD)?,
                spell: string_field(entry, index, SPELL_FIELD)?,
            })
        })
        .collect::<Result<Vec<_>, ValidationError>>()?;

    Ok(Spellbook { spells })
}

fn string_field(entry: &Mapping, index: usize, field: &'static str) -> Result<String, ValidationError> {
    entry
        .get(field)
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or(ValidationError::FieldNotString { index, field })
}

//! Shared spell types and the spellbook YAML check, used by both the proxy and the client.
pub mod error;
pub mod models;
pub mod validate;

pub use error::{SpellbookError, ValidationError};
pub use models::{ErrorBody, ImportRequest, NewSpell, Spell, SpellId, Spellbook};
pub use validate::validate;

//! # Frontend
//!
//! Client side of the spell pages, without the rendering.
//!
//! ## Pages
//!
//! ### Home
//! - Spell form: wizard name + desired enchantment, both free text, nothing required
//! - On success the form clears and shows the owl message, on failure an alert and the fields stay
//! - Spellbook upload: pick a YAML file, checked locally, then sent as raw text
//!
//! ### Spellbook
//! - Fetches all spells once when shown
//! - Loading message until the fetch settles, empty list if it failed
//!
//! ## State
//!
//! All state lives in the page values ([`SpellForm`], [`SpellbookList`], [`SpellbookUpload`]),
//! one per session. Nothing global.
//!
//! ## Failures
//! - Everything ends up as an [`Alert`] or an empty list
//! - Nothing is retried
//! - Errors are logged with `tracing`
pub mod api;
pub mod cli;
pub mod error;
pub mod form;
pub mod list;
pub mod upload;

#[cfg(test)]
mod testing;

pub use api::{HttpSpellService, SpellService};
pub use error::{Alert, ClientError};
pub use form::SpellForm;
pub use list::SpellbookList;
pub use upload::SpellbookUpload;

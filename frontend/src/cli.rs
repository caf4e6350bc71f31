use std::{path::PathBuf, time::Duration};

use anyhow::Result;
use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};

use crate::{
    api::SpellService,
    form::{SUBMITTED_MESSAGE, SpellForm},
    list::{LOADING_MESSAGE, SpellbookList},
    upload::{SpellbookUpload, UPLOADED_MESSAGE},
};

#[derive(Parser, Debug)]
#[command(author, version, about = "Cast, list and import spells through the spell proxy")]
pub struct Args {
    #[arg(long, env = "SPELLS_API_URL", default_value = "http://localhost:3001")]
    pub api_url: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Summon a single spell
    Cast {
        #[arg(long, default_value = "")]
        name: String,

        #[arg(long, default_value = "")]
        spell: String,
    },

    /// Show the spellbook
    List,

    /// Upload a YAML spellbook
    Upload { file: Option<PathBuf> },
}

/// Alerts come back as errors so the process exits non-zero.
pub async fn run<S: SpellService>(command: Command, service: &S) -> Result<()> {
    match command {
        Command::Cast { name, spell } => {
            let mut form = SpellForm::new();
            form.set_name(name);
            form.set_spell(spell);

            form.submit(service).await?;
            println!("✨ {SUBMITTED_MESSAGE} 🦉");
        }
        Command::List => {
            let pb = ProgressBar::new_spinner();
            pb.set_style(ProgressStyle::with_template("{spinner:.magenta} {msg}")?);
            pb.set_message(LOADING_MESSAGE);
            pb.enable_steady_tick(Duration::from_millis(100));

            let mut list = SpellbookList::new();
            list.mount(service).await;
            pb.finish_and_clear();

            for spell in &list.spells {
                println!("🧙 {}\n   {}", spell.name, spell.spell);
            }
        }
        Command::Upload { file } => {
            let mut upload = SpellbookUpload::new();
            if let Some(file) = file {
                upload.select(file);
            }

            upload.upload(service).await?;
            println!("{UPLOADED_MESSAGE}");
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::{error::Alert, testing::MockService};

    use super::*;

    fn alert(result: Result<()>) -> Alert {
        *result.unwrap_err().downcast_ref::<Alert>().unwrap()
    }

    #[tokio::test]
    async fn test_cast_failure_is_an_error() {
        let command = Command::Cast {
            name: "Merlin".to_string(),
            spell: "Invisibility".to_string(),
        };

        assert_eq!(
            alert(run(command, &MockService::failing()).await),
            Alert::CastFailed
        );
    }

    #[tokio::test]
    async fn test_cast_success() {
        let service = MockService::default();
        let command = Command::Cast {
            name: "Merlin".to_string(),
            spell: "Invisibility".to_string(),
        };

        run(command, &service).await.unwrap();
        assert_eq!(service.cast_calls().len(), 1);
    }

    #[tokio::test]
    async fn test_upload_without_file_is_an_error() {
        let command = Command::Upload { file: None };

        assert_eq!(
            alert(run(command, &MockService::default()).await),
            Alert::NoFileSelected
        );
    }

    #[tokio::test]
    async fn test_list_failure_is_not_an_error() {
        let service = MockService::failing();

        run(Command::List, &service).await.unwrap();
        assert_eq!(service.list_calls(), 1);
    }

    #[test]
    fn test_parse_args() {
        let args = Args::parse_from(["grimoire", "--api-url", "http://proxy:3001", "upload", "book.yaml"]);

        assert_eq!(args.api_url, "http://proxy:3001");
        assert!(matches!(args.command, Command::Upload { file: Some(_) }));
    }
}

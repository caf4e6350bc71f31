use std::sync::Arc;

use anyhow::Result;
use reqwest::Client;

use super::config::Config;

pub struct State {
    pub config: Config,
    pub client: Client,
}

impl State {
    pub fn new(config: Config) -> Result<Arc<Self>> {
        let client = Client::builder().build()?;

        Ok(Arc::new(Self { config, client }))
    }
}

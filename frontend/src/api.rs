use std::future::Future;

use reqwest::{Client, Response};
use serde_json::Value;
use spellbook::{
    ImportRequest, NewSpell, Spell,
    models::{IMPORT_ENDPOINT, SPELLS_ENDPOINT},
};
use tracing::debug;

use crate::error::ClientError;

/// The three proxy routes, as seen from the pages.
pub trait SpellService {
    fn cast(&self, spell: &NewSpell) -> impl Future<Output = Result<Value, ClientError>> + Send;

    fn list(&self) -> impl Future<Output = Result<Vec<Spell>, ClientError>> + Send;

    fn import(&self, yaml_content: &str) -> impl Future<Output = Result<Value, ClientError>> + Send;
}

pub struct HttpSpellService {
    client: Client,
    base_url: String,
}

impl HttpSpellService {
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        Ok(Self {
            client: Client::builder().build()?,
            base_url: base_url.trim().trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

impl SpellService for HttpSpellService {
    async fn cast(&self, spell: &NewSpell) -> Result<Value, ClientError> {
        let res = self.client.post(self.url(SPELLS_ENDPOINT)).json(spell).send().await?;

        Ok(success(res).await?.json().await?)
    }

    async fn list(&self) -> Result<Vec<Spell>, ClientError> {
        let res = self.client.get(self.url(SPELLS_ENDPOINT)).send().await?;

        Ok(success(res).await?.json().await?)
    }

    async fn import(&self, yaml_content: &str) -> Result<Value, ClientError> {
        let payload = ImportRequest {
            yaml_content: yaml_content.to_string(),
        };
        let res = self.client.post(self.url(IMPORT_ENDPOINT)).json(&payload).send().await?;

        Ok(success(res).await?.json().await?)
    }
}

async fn success(res: Response) -> Result<Response, ClientError> {
    let status = res.status();
    debug!("{} answered {status}", res.url());

    if status.is_success() {
        return Ok(res);
    }

    Err(ClientError::Rejected {
        status,
        body: res.text().await.unwrap_or_default(),
    })
}

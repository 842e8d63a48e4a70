use std::{sync::Arc, time::Duration};

use crate::{
    config::Config,
    repositories::ranking::{RankingApi, RankingRepository},
};

#[derive(Clone)]
pub struct Context {
    pub config: Config,
    pub http: reqwest::Client,
    pub ranking: Arc<dyn RankingApi>,
}

impl Context {
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(secs) = config.request_timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let http = builder.build()?;

        if config.api_token.is_none() && config.app_component != "load_test" {
            log::warn!("API_TOKEN is not set, ranking service requests will be unauthenticated");
        }

        let ranking = RankingRepository::new(
            http.clone(),
            &config.api_base_url,
            config.api_token.clone(),
        )?;

        Ok(Self {
            config,
            http,
            ranking: Arc::new(ranking),
        })
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.config.poll_interval_secs)
    }
}

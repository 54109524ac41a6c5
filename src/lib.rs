pub mod config;
pub mod dto;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;
pub mod utils;

use crate::config::Config;
use crate::error::Result;
use crate::services::{
    ai_service::{AIService, RemoteGenerator},
    assessment_service::AssessmentService,
    grading_service::GradingService,
};
use reqwest::Client;
use std::sync::Arc;
use std::time::Duration;

#[derive(Clone)]
pub struct AppState {
    pub assessment_service: AssessmentService,
    pub grading_service: GradingService,
    pub max_items_per_type: u32,
}

impl AppState {
    pub fn new(config: &Config) -> Result<Self> {
        let http_client = Client::builder()
            .timeout(Duration::from_secs(config.remote_timeout_secs))
            .build()?;

        let remote = AIService::from_config(config, http_client)
            .map(|service| Arc::new(service) as Arc<dyn RemoteGenerator>);
        let assessment_service = AssessmentService::new(remote);
        let grading_service = GradingService::new(config.grading_thresholds);

        Ok(Self {
            assessment_service,
            grading_service,
            max_items_per_type: config.max_items_per_type,
        })
    }
}

//! Controller del endpoint de quotes

use crate::config::environment::EnvironmentConfig;
use crate::dto::pricing_dto::{QuoteRequest, QuoteResponse};
use crate::services::pricing_service::PricingService;
use crate::utils::errors::AppError;
use sqlx::PgPool;

pub struct PricingController {
    service: PricingService,
}

impl PricingController {
    pub fn new(pool: PgPool, config: EnvironmentConfig) -> Self {
        Self {
            service: PricingService::new(pool, config),
        }
    }

    pub async fn quote(&self, request: QuoteRequest) -> Result<QuoteResponse, AppError> {
        self.service.quote(request).await
    }
}

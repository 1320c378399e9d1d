//! Repositorio de zonas de precios

use crate::models::zone::PricingZone;
use crate::utils::errors::AppError;
use chrono::Utc;
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

pub struct ZoneRepository {
    pool: PgPool,
}

impl ZoneRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        name: String,
        min_lat: f64,
        max_lat: f64,
        min_lng: f64,
        max_lng: f64,
        multiplier: Decimal,
        priority: i32,
    ) -> Result<PricingZone, AppError> {
        let zone = sqlx::query_as::<_, PricingZone>(
            r#"
            INSERT INTO pricing_zones (id, name, min_lat, max_lat, min_lng, max_lng, multiplier, priority, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(name)
        .bind(min_lat)
        .bind(max_lat)
        .bind(min_lng)
        .bind(max_lng)
        .bind(multiplier)
        .bind(priority)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        // Cada zona arranca con un registro de surge neutro
        sqlx::query(
            r#"
            INSERT INTO demand_surge (zone_id, multiplier, supply_count, demand_count, updated_at)
            VALUES ($1, 1.0, 0, 0, $2)
            ON CONFLICT (zone_id) DO NOTHING
            "#,
        )
        .bind(zone.id)
        .bind(Utc::now())
        .execute(&self.pool)
        .await?;

        Ok(zone)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<PricingZone>, AppError> {
        let zone = sqlx::query_as::<_, PricingZone>("SELECT * FROM pricing_zones WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(zone)
    }

    pub async fn list_all(&self) -> Result<Vec<PricingZone>, AppError> {
        let zones = sqlx::query_as::<_, PricingZone>(
            "SELECT * FROM pricing_zones ORDER BY priority DESC, created_at",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(zones)
    }

    pub async fn name_exists(&self, name: &str) -> Result<bool, AppError> {
        let result: (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM pricing_zones WHERE name = $1)")
                .bind(name)
                .fetch_one(&self.pool)
                .await?;

        Ok(result.0)
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        self.find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Zone not found".to_string()))?;

        sqlx::query("DELETE FROM demand_surge WHERE zone_id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        sqlx::query("DELETE FROM pricing_zones WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}

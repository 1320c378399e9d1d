//! Repositorio de códigos promocionales
//!
//! La redención usa UPDATE condicional (increment-with-check): dos requests
//! concurrentes por el último uso de un código no pueden ganar las dos.

use crate::models::promo::{normalize_code, PromotionalCode};
use crate::utils::errors::AppError;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

pub struct PromoRepository {
    pool: PgPool,
}

impl PromoRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn create(
        &self,
        code: String,
        discount_type: String,
        discount_value: Decimal,
        eligible_tiers: Vec<String>,
        usage_limit: i32,
        per_user_limit: i32,
        min_fare: Decimal,
        expires_at: DateTime<Utc>,
    ) -> Result<PromotionalCode, AppError> {
        let promo = sqlx::query_as::<_, PromotionalCode>(
            r#"
            INSERT INTO promotional_codes
                (id, code, discount_type, discount_value, eligible_tiers,
                 usage_limit, per_user_limit, used_count, min_fare, expires_at, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, 0, $8, $9, $10)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(code)
        .bind(discount_type)
        .bind(discount_value)
        .bind(eligible_tiers)
        .bind(usage_limit)
        .bind(per_user_limit)
        .bind(min_fare)
        .bind(expires_at)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(promo)
    }

    /// La columna `code` solo guarda códigos normalizados, así que el
    /// lookup normaliza acá y no depende de cada caller
    pub async fn find_by_code(&self, code: &str) -> Result<Option<PromotionalCode>, AppError> {
        let promo =
            sqlx::query_as::<_, PromotionalCode>("SELECT * FROM promotional_codes WHERE code = $1")
                .bind(normalize_code(code))
                .fetch_optional(&self.pool)
                .await?;

        Ok(promo)
    }

    pub async fn list_all(&self) -> Result<Vec<PromotionalCode>, AppError> {
        let promos = sqlx::query_as::<_, PromotionalCode>(
            "SELECT * FROM promotional_codes ORDER BY created_at DESC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(promos)
    }

    pub async fn code_exists(&self, code: &str) -> Result<bool, AppError> {
        let result: (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM promotional_codes WHERE code = $1)")
                .bind(normalize_code(code))
                .fetch_one(&self.pool)
                .await?;

        Ok(result.0)
    }

    /// Usos acumulados de un código por un usuario concreto
    pub async fn user_usage(&self, promo_id: Uuid, user_id: Uuid) -> Result<i32, AppError> {
        let row: Option<(i32,)> = sqlx::query_as(
            "SELECT used_count FROM promo_redemptions WHERE promo_id = $1 AND user_id = $2",
        )
        .bind(promo_id)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|r| r.0).unwrap_or(0))
    }

    /// Redimir un uso del código de forma atómica.
    ///
    /// El contador global solo avanza si sigue por debajo del límite
    /// (increment-with-check en un solo UPDATE). El contador por usuario
    /// usa un upsert con el mismo guard condicional, dentro de la misma
    /// transacción: si cualquiera de los dos falla, no se consume nada.
    ///
    /// Devuelve `true` si la redención se concretó, `false` si perdió la
    /// carrera contra el límite (global o por usuario).
    pub async fn redeem(
        &self,
        promo_id: Uuid,
        user_id: Option<Uuid>,
        per_user_limit: i32,
    ) -> Result<bool, AppError> {
        let mut tx = self.pool.begin().await?;

        let global = sqlx::query(
            r#"
            UPDATE promotional_codes
            SET used_count = used_count + 1
            WHERE id = $1 AND used_count < usage_limit
            "#,
        )
        .bind(promo_id)
        .execute(&mut *tx)
        .await?;

        if global.rows_affected() == 0 {
            tx.rollback().await?;
            return Ok(false);
        }

        if let Some(user_id) = user_id {
            let per_user = sqlx::query(
                r#"
                INSERT INTO promo_redemptions (promo_id, user_id, used_count)
                VALUES ($1, $2, 1)
                ON CONFLICT (promo_id, user_id) DO UPDATE
                SET used_count = promo_redemptions.used_count + 1
                WHERE promo_redemptions.used_count < $3
                "#,
            )
            .bind(promo_id)
            .bind(user_id)
            .bind(per_user_limit)
            .execute(&mut *tx)
            .await?;

            if per_user.rows_affected() == 0 {
                tx.rollback().await?;
                return Ok(false);
            }
        }

        tx.commit().await?;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Prueba de redención concurrente contra PostgreSQL real.
    /// Requiere DATABASE_URL y el schema de sql/schema.sql aplicado:
    /// `cargo test concurrent_redemption -- --ignored`
    #[tokio::test]
    #[ignore]
    async fn concurrent_redemption_single_winner() {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");
        let pool = PgPool::connect(&url).await.expect("connect");
        let repo = PromoRepository::new(pool.clone());

        let promo = repo
            .create(
                format!("RACE-{}", Uuid::new_v4()),
                "flat".to_string(),
                Decimal::from(1000),
                vec![],
                1, // un solo uso global
                1,
                Decimal::ZERO,
                Utc::now() + chrono::Duration::days(1),
            )
            .await
            .expect("create promo");

        let mut handles = Vec::new();
        for _ in 0..8 {
            let repo = PromoRepository::new(pool.clone());
            let promo_id = promo.id;
            handles.push(tokio::spawn(async move {
                repo.redeem(promo_id, Some(Uuid::new_v4()), 1).await
            }));
        }

        let mut winners = 0;
        for handle in handles {
            if handle.await.expect("join").expect("redeem") {
                winners += 1;
            }
        }

        assert_eq!(winners, 1, "exactly one concurrent redemption must win");
    }
}

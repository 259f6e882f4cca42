use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use time::OffsetDateTime;
use uuid::Uuid;

/// Stored brand profile. `user_id` is kept as the submitted string: the
/// reference is not validated in the default (permissive) mode, and the
/// caller may send anything.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct BrandProfile {
    pub id: Uuid,
    pub brand_name: String,
    pub industry: String,
    pub website_url: String,
    pub target_audience: String,
    pub monthly_ad_spend: String,
    pub user_id: String,
    pub created_at: OffsetDateTime,
}

impl BrandProfile {
    /// Insert one submission verbatim. No uniqueness constraint: a user may
    /// submit any number of profiles.
    pub async fn create(
        db: &PgPool,
        brand_name: &str,
        industry: &str,
        website_url: &str,
        target_audience: &str,
        monthly_ad_spend: &str,
        user_id: &str,
    ) -> anyhow::Result<BrandProfile> {
        let profile = sqlx::query_as::<_, BrandProfile>(
            r#"
            INSERT INTO brand_profiles
                (id, brand_name, industry, website_url, target_audience,
                 monthly_ad_spend, user_id, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING id, brand_name, industry, website_url, target_audience,
                      monthly_ad_spend, user_id, created_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(brand_name)
        .bind(industry)
        .bind(website_url)
        .bind(target_audience)
        .bind(monthly_ad_spend)
        .bind(user_id)
        .bind(OffsetDateTime::now_utc())
        .fetch_one(db)
        .await?;
        Ok(profile)
    }
}

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::{
    adapters::persistence::PostgresPersistence,
    app_error::{AppError, AppResult},
    entities::waitlist_signup::{NewWaitlistSignup, WaitlistSignup},
    use_cases::waitlist::{StorageKind, WaitlistRepo},
};

// Waitlist signup row as stored in the db.
#[derive(sqlx::FromRow, Debug)]
struct WaitlistSignupDb {
    id: Uuid,
    email: String,
    name: String,
    phone_number: Option<String>,
    company_name: String,
    role: Option<String>,
    company_size: Option<String>,
    is_pilot_partner: bool,
    created_at: DateTime<Utc>,
}

impl From<WaitlistSignupDb> for WaitlistSignup {
    fn from(row: WaitlistSignupDb) -> Self {
        WaitlistSignup {
            id: row.id,
            email: row.email,
            name: row.name,
            phone_number: row.phone_number,
            company_name: row.company_name,
            role: row.role,
            company_size: row.company_size,
            is_pilot_partner: row.is_pilot_partner,
            created_at: row.created_at,
        }
    }
}

#[async_trait]
impl WaitlistRepo for PostgresPersistence {
    async fn create(&self, signup: NewWaitlistSignup) -> AppResult<WaitlistSignup> {
        let id = Uuid::new_v4();
        let rec = sqlx::query_as::<_, WaitlistSignupDb>(
            r#"
                INSERT INTO waitlist_signups
                    (id, email, name, phone_number, company_name, role, company_size, is_pilot_partner)
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
                RETURNING id, email, name, phone_number, company_name, role, company_size,
                          is_pilot_partner, created_at
            "#,
        )
        .bind(id)
        .bind(&signup.email)
        .bind(&signup.name)
        .bind(&signup.phone_number)
        .bind(&signup.company_name)
        .bind(&signup.role)
        .bind(&signup.company_size)
        .bind(signup.is_pilot_partner)
        .fetch_one(&self.pool)
        .await
        .map_err(AppError::from)?;
        Ok(rec.into())
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<WaitlistSignup>> {
        let rec = sqlx::query_as::<_, WaitlistSignupDb>(
            r#"
                SELECT id, email, name, phone_number, company_name, role, company_size,
                       is_pilot_partner, created_at
                FROM waitlist_signups
                WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(AppError::from)?;
        Ok(rec.map(WaitlistSignup::from))
    }

    // No ORDER BY: order is store-native and callers must not rely on it.
    async fn list_all(&self) -> AppResult<Vec<WaitlistSignup>> {
        let recs = sqlx::query_as::<_, WaitlistSignupDb>(
            r#"
                SELECT id, email, name, phone_number, company_name, role, company_size,
                       is_pilot_partner, created_at
                FROM waitlist_signups
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::from)?;
        Ok(recs.into_iter().map(WaitlistSignup::from).collect())
    }

    fn kind(&self) -> StorageKind {
        StorageKind::Postgres
    }

    async fn ping(&self) -> AppResult<()> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(AppError::from)?;
        Ok(())
    }
}

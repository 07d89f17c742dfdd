//! Advisor token usage ledger.

use chrono::Utc;

use chek_core::entities::AdvisorUsage;
use chek_core::ids::PREFIX_USAGE;

use crate::error::DatabaseError;
use crate::helpers::{get_u64, parse_datetime};
use crate::service::ChekService;

fn row_to_usage(row: &libsql::Row) -> Result<AdvisorUsage, DatabaseError> {
    Ok(AdvisorUsage {
        id: row.get(0)?,
        project_id: row.get(1)?,
        user_id: row.get(2)?,
        model: row.get(3)?,
        prompt_tokens: get_u64(row, 4)?,
        completion_tokens: get_u64(row, 5)?,
        created_at: parse_datetime(&row.get::<String>(6)?)?,
    })
}

fn to_sql_count(n: u64) -> i64 {
    i64::try_from(n).unwrap_or(i64::MAX)
}

impl ChekService {
    pub async fn record_advisor_usage(
        &self,
        project_id: &str,
        user_id: &str,
        model: &str,
        prompt_tokens: u64,
        completion_tokens: u64,
    ) -> Result<AdvisorUsage, DatabaseError> {
        let now = Utc::now();
        let id = self.db().generate_id(PREFIX_USAGE).await?;

        self.db()
            .conn()
            .execute(
                "INSERT INTO advisor_usage
                   (id, project_id, user_id, model, prompt_tokens, completion_tokens, created_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
                libsql::params![
                    id.as_str(),
                    project_id,
                    user_id,
                    model,
                    to_sql_count(prompt_tokens),
                    to_sql_count(completion_tokens),
                    now.to_rfc3339()
                ],
            )
            .await?;

        tracing::debug!(project_id, model, prompt_tokens, completion_tokens, "advisor usage recorded");

        Ok(AdvisorUsage {
            id,
            project_id: project_id.to_string(),
            user_id: user_id.to_string(),
            model: model.to_string(),
            prompt_tokens,
            completion_tokens,
            created_at: now,
        })
    }

    pub async fn list_advisor_usage(
        &self,
        project_id: &str,
    ) -> Result<Vec<AdvisorUsage>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                "SELECT id, project_id, user_id, model, prompt_tokens, completion_tokens, created_at
                 FROM advisor_usage WHERE project_id = ?1 ORDER BY created_at, rowid",
                [project_id],
            )
            .await?;

        let mut usage = Vec::new();
        while let Some(row) = rows.next().await? {
            usage.push(row_to_usage(&row)?);
        }
        Ok(usage)
    }

    /// Sum of prompt and completion tokens spent by a user across all projects.
    pub async fn total_advisor_tokens(&self, user_id: &str) -> Result<u64, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                "SELECT COALESCE(SUM(prompt_tokens + completion_tokens), 0)
                 FROM advisor_usage WHERE user_id = ?1",
                [user_id],
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        get_u64(&row, 0)
    }
}

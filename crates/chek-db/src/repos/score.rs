//! Maturity score repository: per-category full replace and label upsert.

use chek_core::entities::MaturityScore;
use chek_core::enums::MaturityCategory;

use crate::error::DatabaseError;
use crate::helpers::get_opt_string;
use crate::service::ChekService;

fn row_to_score(row: &libsql::Row) -> Result<MaturityScore, DatabaseError> {
    let level = row.get::<i64>(1)?;
    Ok(MaturityScore {
        kma_name: row.get(0)?,
        current_level: i32::try_from(level)
            .map_err(|_| DatabaseError::InvalidState(format!("level {level} out of range")))?,
        justification: get_opt_string(row, 2)?,
    })
}

fn check_levels(scores: &[MaturityScore]) -> Result<(), DatabaseError> {
    scores
        .iter()
        .try_for_each(MaturityScore::check_level)
        .map_err(|e| DatabaseError::Validation(e.to_string()))
}

async fn upsert_one(
    conn: &libsql::Connection,
    project_id: &str,
    user_id: &str,
    category: MaturityCategory,
    score: &MaturityScore,
) -> Result<(), DatabaseError> {
    conn.execute(
        "INSERT INTO maturity_scores (project_id, user_id, category, label, level, justification)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)
         ON CONFLICT(project_id, category, label) DO UPDATE SET
           level = ?5, justification = ?6",
        libsql::params![
            project_id,
            user_id,
            category.as_str(),
            score.kma_name.as_str(),
            i64::from(score.current_level),
            score.justification.as_deref()
        ],
    )
    .await?;
    Ok(())
}

async fn insert_scores(
    conn: &libsql::Connection,
    project_id: &str,
    user_id: &str,
    category: MaturityCategory,
    scores: &[MaturityScore],
) -> Result<(), DatabaseError> {
    conn.execute(
        "DELETE FROM maturity_scores WHERE project_id = ?1 AND category = ?2",
        libsql::params![project_id, category.as_str()],
    )
    .await?;
    for score in scores {
        conn.execute(
            "INSERT INTO maturity_scores (project_id, user_id, category, label, level, justification)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            libsql::params![
                project_id,
                user_id,
                category.as_str(),
                score.kma_name.as_str(),
                i64::from(score.current_level),
                score.justification.as_deref()
            ],
        )
        .await?;
    }
    Ok(())
}

impl ChekService {
    /// Replace every score of one category for a project.
    ///
    /// The delete and the inserts commit together; any failure (including a
    /// duplicate label) rolls back to the previous scores.
    pub async fn replace_scores(
        &self,
        project_id: &str,
        user_id: &str,
        category: MaturityCategory,
        scores: &[MaturityScore],
    ) -> Result<(), DatabaseError> {
        check_levels(scores)?;

        let tx = self.db().conn().transaction().await?;
        match insert_scores(&tx, project_id, user_id, category, scores).await {
            Ok(()) => tx.commit().await?,
            Err(e) => {
                tx.rollback().await?;
                return Err(e);
            }
        }

        tracing::info!(project_id, %category, count = scores.len(), "scores replaced");
        Ok(())
    }

    /// Insert a score, or overwrite level and justification of the score with
    /// the same label in the same category.
    pub async fn upsert_score(
        &self,
        project_id: &str,
        user_id: &str,
        category: MaturityCategory,
        score: &MaturityScore,
    ) -> Result<(), DatabaseError> {
        check_levels(std::slice::from_ref(score))?;
        upsert_one(self.db().conn(), project_id, user_id, category, score).await?;
        tracing::debug!(project_id, %category, label = %score.kma_name, "score upserted");
        Ok(())
    }

    /// Upsert several scores by label, all or nothing.
    ///
    /// Levels are checked before anything is written; a failing statement
    /// rolls back every earlier upsert of the batch.
    pub async fn upsert_scores(
        &self,
        project_id: &str,
        user_id: &str,
        category: MaturityCategory,
        scores: &[MaturityScore],
    ) -> Result<(), DatabaseError> {
        check_levels(scores)?;

        let tx = self.db().conn().transaction().await?;
        for score in scores {
            if let Err(e) = upsert_one(&tx, project_id, user_id, category, score).await {
                tx.rollback().await?;
                return Err(e);
            }
        }
        tx.commit().await?;

        tracing::info!(project_id, %category, count = scores.len(), "scores upserted");
        Ok(())
    }

    /// Scores of a project in stored order.
    ///
    /// Without a category, all four categories are returned in rubric order.
    pub async fn list_scores(
        &self,
        project_id: &str,
        category: Option<MaturityCategory>,
    ) -> Result<Vec<MaturityScore>, DatabaseError> {
        let categories = category.map_or_else(|| MaturityCategory::ALL.to_vec(), |c| vec![c]);

        let mut scores = Vec::new();
        for category in categories {
            let mut rows = self
                .db()
                .conn()
                .query(
                    "SELECT label, level, justification FROM maturity_scores
                     WHERE project_id = ?1 AND category = ?2 ORDER BY rowid",
                    libsql::params![project_id, category.as_str()],
                )
                .await?;
            while let Some(row) = rows.next().await? {
                scores.push(row_to_score(&row)?);
            }
        }
        Ok(scores)
    }
}

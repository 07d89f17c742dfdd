//! Roadmap snapshot repository.

use chek_core::entities::RoadmapEntry;

use crate::error::DatabaseError;
use crate::helpers::{encode_list, parse_date, parse_list};
use crate::service::ChekService;

fn row_to_entry(row: &libsql::Row) -> Result<RoadmapEntry, DatabaseError> {
    Ok(RoadmapEntry {
        kma_name: row.get(0)?,
        start_date: parse_date(&row.get::<String>(1)?)?,
        end_date: parse_date(&row.get::<String>(2)?)?,
        dependencies: parse_list(&row.get::<String>(3)?)?,
        actions: parse_list(&row.get::<String>(4)?)?,
        tools: parse_list(&row.get::<String>(5)?)?,
    })
}

async fn write_roadmap(
    conn: &libsql::Connection,
    project_id: &str,
    user_id: &str,
    entries: &[RoadmapEntry],
) -> Result<(), DatabaseError> {
    conn.execute("DELETE FROM roadmap_entries WHERE project_id = ?1", [project_id])
        .await?;
    for (position, entry) in (0_i64..).zip(entries) {
        conn.execute(
            "INSERT INTO roadmap_entries
               (project_id, user_id, kma, start_date, end_date, dependencies, actions, check_tools, position)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
            libsql::params![
                project_id,
                user_id,
                entry.kma_name.as_str(),
                entry.start_date.to_string(),
                entry.end_date.to_string(),
                encode_list(&entry.dependencies)?,
                encode_list(&entry.actions)?,
                encode_list(&entry.tools)?,
                position
            ],
        )
        .await?;
    }
    let changed = conn
        .execute(
            "UPDATE projects SET roadmap_created = 1 WHERE id = ?1",
            [project_id],
        )
        .await?;
    if changed == 0 {
        return Err(DatabaseError::NoResult);
    }
    Ok(())
}

impl ChekService {
    /// Replace the project's roadmap snapshot and mark the roadmap as created.
    ///
    /// All rows and the project flag commit together or not at all.
    pub async fn replace_roadmap(
        &self,
        project_id: &str,
        user_id: &str,
        entries: &[RoadmapEntry],
    ) -> Result<(), DatabaseError> {
        let tx = self.db().conn().transaction().await?;
        match write_roadmap(&tx, project_id, user_id, entries).await {
            Ok(()) => tx.commit().await?,
            Err(e) => {
                tx.rollback().await?;
                return Err(e);
            }
        }
        tracing::info!(project_id, count = entries.len(), "roadmap snapshot replaced");
        Ok(())
    }

    pub async fn list_roadmap(&self, project_id: &str) -> Result<Vec<RoadmapEntry>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                "SELECT kma, start_date, end_date, dependencies, actions, check_tools
                 FROM roadmap_entries WHERE project_id = ?1 ORDER BY position",
                [project_id],
            )
            .await?;

        let mut entries = Vec::new();
        while let Some(row) = rows.next().await? {
            entries.push(row_to_entry(&row)?);
        }
        Ok(entries)
    }
}

//! Benchmark gap snapshot repository.

use chek_core::entities::GapEntry;

use crate::error::DatabaseError;
use crate::helpers::{encode_list, get_u64, parse_list};
use crate::service::ChekService;

fn row_to_gap(row: &libsql::Row) -> Result<GapEntry, DatabaseError> {
    let level_gap = get_u64(row, 1)?;
    Ok(GapEntry {
        kma_name: row.get(0)?,
        level_gap: u32::try_from(level_gap)
            .map_err(|_| DatabaseError::InvalidState(format!("level gap {level_gap} too large")))?,
        dependencies: parse_list(&row.get::<String>(2)?)?,
        actions: parse_list(&row.get::<String>(3)?)?,
        tools: parse_list(&row.get::<String>(4)?)?,
    })
}

async fn write_gap_entries(
    conn: &libsql::Connection,
    project_id: &str,
    user_id: &str,
    entries: &[GapEntry],
) -> Result<(), DatabaseError> {
    conn.execute("DELETE FROM gap_entries WHERE project_id = ?1", [project_id])
        .await?;
    for (position, entry) in (0_i64..).zip(entries) {
        conn.execute(
            "INSERT INTO gap_entries
               (project_id, user_id, kma, level_gap, dependencies, actions, check_tools, position)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
            libsql::params![
                project_id,
                user_id,
                entry.kma_name.as_str(),
                i64::from(entry.level_gap),
                encode_list(&entry.dependencies)?,
                encode_list(&entry.actions)?,
                encode_list(&entry.tools)?,
                position
            ],
        )
        .await?;
    }
    Ok(())
}

impl ChekService {
    /// Replace the project's gap snapshot with `entries`, atomically.
    pub async fn replace_gap_entries(
        &self,
        project_id: &str,
        user_id: &str,
        entries: &[GapEntry],
    ) -> Result<(), DatabaseError> {
        let tx = self.db().conn().transaction().await?;
        match write_gap_entries(&tx, project_id, user_id, entries).await {
            Ok(()) => tx.commit().await?,
            Err(e) => {
                tx.rollback().await?;
                return Err(e);
            }
        }
        tracing::info!(project_id, count = entries.len(), "gap snapshot replaced");
        Ok(())
    }

    pub async fn list_gap_entries(&self, project_id: &str) -> Result<Vec<GapEntry>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                "SELECT kma, level_gap, dependencies, actions, check_tools
                 FROM gap_entries WHERE project_id = ?1 ORDER BY position",
                [project_id],
            )
            .await?;

        let mut entries = Vec::new();
        while let Some(row) = rows.next().await? {
            entries.push(row_to_gap(&row)?);
        }
        Ok(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::helpers::{TEST_USER, create_test_project, test_service};
    use pretty_assertions::assert_eq;

    fn gap(name: &str, level_gap: u32, actions: &[&str]) -> GapEntry {
        GapEntry {
            kma_name: name.into(),
            level_gap,
            dependencies: Vec::new(),
            actions: actions.iter().map(ToString::to_string).collect(),
            tools: vec!["Checklist".into()],
        }
    }

    #[tokio::test]
    async fn snapshot_roundtrip_keeps_order() {
        let svc = test_service().await;
        let p = create_test_project(&svc).await;
        let entries = vec![
            gap("Staff Training", 1, &["Run onboarding workshops"]),
            gap("Permitting Software", 2, &["Purchase Software License"]),
            gap("Legal Review", 0, &[]),
        ];
        svc.replace_gap_entries(&p.id, TEST_USER, &entries).await.unwrap();
        assert_eq!(svc.list_gap_entries(&p.id).await.unwrap(), entries);
    }

    #[tokio::test]
    async fn replace_is_full_not_merge() {
        let svc = test_service().await;
        let p = create_test_project(&svc).await;
        svc.replace_gap_entries(&p.id, TEST_USER, &[gap("Legal Review", 1, &[])])
            .await
            .unwrap();
        svc.replace_gap_entries(&p.id, TEST_USER, &[gap("Transparency", 2, &[])])
            .await
            .unwrap();

        let names: Vec<_> = svc
            .list_gap_entries(&p.id)
            .await
            .unwrap()
            .into_iter()
            .map(|g| g.kma_name)
            .collect();
        assert_eq!(names, vec!["Transparency"]);
    }

    #[tokio::test]
    async fn empty_replace_clears_snapshot() {
        let svc = test_service().await;
        let p = create_test_project(&svc).await;
        svc.replace_gap_entries(&p.id, TEST_USER, &[gap("Legal Review", 1, &[])])
            .await
            .unwrap();
        svc.replace_gap_entries(&p.id, TEST_USER, &[]).await.unwrap();
        assert!(svc.list_gap_entries(&p.id).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn snapshots_are_per_project() {
        let svc = test_service().await;
        let a = create_test_project(&svc).await;
        let b = create_test_project(&svc).await;
        svc.replace_gap_entries(&a.id, TEST_USER, &[gap("Legal Review", 1, &[])])
            .await
            .unwrap();
        svc.replace_gap_entries(&b.id, TEST_USER, &[]).await.unwrap();
        assert_eq!(svc.list_gap_entries(&a.id).await.unwrap().len(), 1);
    }
}

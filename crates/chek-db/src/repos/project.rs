//! Project repository: CRUD scoped to the owning user.

use chrono::Utc;

use chek_core::entities::Project;
use chek_core::ids::PREFIX_PROJECT;

use crate::error::DatabaseError;
use crate::helpers::{get_flag, get_opt_string, parse_datetime};
use crate::service::ChekService;
use crate::updates::project::ProjectUpdate;

const SELECT_COLS: &str = "id, user_id, name, building_permit_instructions, maturity_assessment, \
     questionnaire_submitted, roadmap_created, report_created, created_at";

fn row_to_project(row: &libsql::Row) -> Result<Project, DatabaseError> {
    Ok(Project {
        id: row.get(0)?,
        user_id: row.get(1)?,
        name: row.get(2)?,
        building_permit_instructions: get_opt_string(row, 3)?,
        maturity_assessment: get_flag(row, 4)?,
        questionnaire_submitted: get_flag(row, 5)?,
        roadmap_created: get_flag(row, 6)?,
        report_created: get_flag(row, 7)?,
        created_at: parse_datetime(&row.get::<String>(8)?)?,
    })
}

fn flag(value: bool) -> libsql::Value {
    libsql::Value::Integer(i64::from(value))
}

impl ChekService {
    pub async fn create_project(
        &self,
        user_id: &str,
        name: &str,
        building_permit_instructions: Option<&str>,
    ) -> Result<Project, DatabaseError> {
        if name.trim().is_empty() {
            return Err(DatabaseError::Validation("project name is empty".into()));
        }
        let now = Utc::now();
        let id = self.db().generate_id(PREFIX_PROJECT).await?;

        self.db()
            .conn()
            .execute(
                "INSERT INTO projects (id, user_id, name, building_permit_instructions, created_at)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
                libsql::params![
                    id.as_str(),
                    user_id,
                    name,
                    building_permit_instructions,
                    now.to_rfc3339()
                ],
            )
            .await?;

        tracing::info!(project_id = %id, user_id, "project created");

        Ok(Project {
            id,
            user_id: user_id.to_string(),
            name: name.to_string(),
            building_permit_instructions: building_permit_instructions.map(String::from),
            maturity_assessment: false,
            questionnaire_submitted: false,
            roadmap_created: false,
            report_created: false,
            created_at: now,
        })
    }

    /// Fetch a project owned by `user_id`. Projects of other users are `NoResult`.
    pub async fn get_project(&self, user_id: &str, id: &str) -> Result<Project, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {SELECT_COLS} FROM projects WHERE id = ?1 AND user_id = ?2"),
                libsql::params![id, user_id],
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        row_to_project(&row)
    }

    pub async fn list_projects(&self, user_id: &str) -> Result<Vec<Project>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!(
                    "SELECT {SELECT_COLS} FROM projects WHERE user_id = ?1 ORDER BY created_at, rowid"
                ),
                [user_id],
            )
            .await?;

        let mut projects = Vec::new();
        while let Some(row) = rows.next().await? {
            projects.push(row_to_project(&row)?);
        }
        Ok(projects)
    }

    pub async fn update_project(
        &self,
        user_id: &str,
        id: &str,
        update: ProjectUpdate,
    ) -> Result<Project, DatabaseError> {
        let mut sets = Vec::new();
        let mut params: Vec<libsql::Value> = Vec::new();
        let mut idx = 1;

        if let Some(ref name) = update.name {
            if name.trim().is_empty() {
                return Err(DatabaseError::Validation("project name is empty".into()));
            }
            sets.push(format!("name = ?{idx}"));
            params.push(name.as_str().into());
            idx += 1;
        }
        if let Some(ref instructions) = update.building_permit_instructions {
            sets.push(format!("building_permit_instructions = ?{idx}"));
            params.push(instructions.as_deref().into());
            idx += 1;
        }
        for (column, value) in [
            ("maturity_assessment", update.maturity_assessment),
            ("questionnaire_submitted", update.questionnaire_submitted),
            ("roadmap_created", update.roadmap_created),
            ("report_created", update.report_created),
        ] {
            if let Some(value) = value {
                sets.push(format!("{column} = ?{idx}"));
                params.push(flag(value));
                idx += 1;
            }
        }

        if sets.is_empty() {
            return self.get_project(user_id, id).await;
        }

        params.push(id.into());
        params.push(user_id.into());
        let sql = format!(
            "UPDATE projects SET {} WHERE id = ?{idx} AND user_id = ?{}",
            sets.join(", "),
            idx + 1
        );

        let changed = self
            .db()
            .conn()
            .execute(&sql, libsql::params_from_iter(params))
            .await?;
        if changed == 0 {
            return Err(DatabaseError::NoResult);
        }

        tracing::debug!(project_id = id, fields = sets.len(), "project updated");
        self.get_project(user_id, id).await
    }

    /// Delete a project and, through `ON DELETE CASCADE`, every row it owns.
    pub async fn delete_project(&self, user_id: &str, id: &str) -> Result<(), DatabaseError> {
        let changed = self
            .db()
            .conn()
            .execute(
                "DELETE FROM projects WHERE id = ?1 AND user_id = ?2",
                libsql::params![id, user_id],
            )
            .await?;
        if changed == 0 {
            return Err(DatabaseError::NoResult);
        }
        tracing::info!(project_id = id, "project deleted");
        Ok(())
    }
}

//! Shared test utilities for chek-db unit tests.

pub(crate) mod helpers {
    use chek_core::entities::Project;

    use crate::ChekDb;
    use crate::service::ChekService;

    pub const TEST_USER: &str = "user-test";

    /// Create an in-memory `ChekService`.
    pub async fn test_service() -> ChekService {
        let db = ChekDb::open_local(":memory:").await.unwrap();
        ChekService::from_db(db)
    }

    /// Create a project owned by [`TEST_USER`].
    pub async fn create_test_project(svc: &ChekService) -> Project {
        svc.create_project(TEST_USER, "Municipality of Utrecht", None)
            .await
            .unwrap()
    }
}

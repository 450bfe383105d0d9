//! Insertion-ordered in-memory `AdministratorRepository`.

use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;

use crate::domain::ports::{AdministratorRepository, AdministratorRepositoryError};
use crate::domain::{Administrator, Email};

/// Mutex-guarded administrator store.
///
/// Mirrors the PostgreSQL adapter's constraints: email and invitation code
/// are unique, and `find_all` returns records in insertion order.
#[derive(Debug, Default)]
pub struct InMemoryAdministratorRepository {
    records: Mutex<Vec<Administrator>>,
}

impl InMemoryAdministratorRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, Vec<Administrator>>, AdministratorRepositoryError> {
        self.records
            .lock()
            .map_err(|_| AdministratorRepositoryError::query("administrator store poisoned"))
    }
}

fn code_taken_by_other(
    records: &[Administrator],
    email: &Email,
    code: Option<&str>,
) -> Option<String> {
    let code = code?;
    records
        .iter()
        .any(|admin| admin.email() != email && admin.invitation_code() == Some(code))
        .then(|| format!("invitation code {code} already used"))
}

#[async_trait]
impl AdministratorRepository for InMemoryAdministratorRepository {
    async fn find_by_email(
        &self,
        email: &Email,
    ) -> Result<Option<Administrator>, AdministratorRepositoryError> {
        let records = self.lock()?;
        Ok(records.iter().find(|admin| admin.email() == email).cloned())
    }

    async fn find_by_invitation_code(
        &self,
        code: &str,
    ) -> Result<Option<Administrator>, AdministratorRepositoryError> {
        let records = self.lock()?;
        Ok(records
            .iter()
            .find(|admin| admin.invitation_code() == Some(code))
            .cloned())
    }

    async fn save(
        &self,
        administrator: &Administrator,
    ) -> Result<(), AdministratorRepositoryError> {
        let mut records = self.lock()?;
        if records.iter().any(|admin| admin.email() == administrator.email()) {
            return Err(AdministratorRepositoryError::duplicate(format!(
                "email {} already exists",
                administrator.email()
            )));
        }
        if let Some(message) = code_taken_by_other(
            &records,
            administrator.email(),
            administrator.invitation_code(),
        ) {
            return Err(AdministratorRepositoryError::duplicate(message));
        }
        records.push(administrator.clone());
        Ok(())
    }

    async fn update(
        &self,
        administrator: &Administrator,
    ) -> Result<(), AdministratorRepositoryError> {
        let mut records = self.lock()?;
        if let Some(message) = code_taken_by_other(
            &records,
            administrator.email(),
            administrator.invitation_code(),
        ) {
            return Err(AdministratorRepositoryError::duplicate(message));
        }
        let slot = records
            .iter_mut()
            .find(|admin| admin.email() == administrator.email())
            .ok_or_else(|| {
                AdministratorRepositoryError::query("administrator not found for update")
            })?;
        *slot = administrator.clone();
        Ok(())
    }

    async fn delete(&self, email: &Email) -> Result<(), AdministratorRepositoryError> {
        let mut records = self.lock()?;
        records.retain(|admin| admin.email() != email);
        Ok(())
    }

    async fn find_all(&self) -> Result<Vec<Administrator>, AdministratorRepositoryError> {
        Ok(self.lock()?.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    fn admin(email: &str, code: Option<&str>) -> Administrator {
        Administrator::new(
            Email::new(email).expect("valid email"),
            "p",
            code.map(str::to_owned),
        )
    }

    #[fixture]
    fn repo() -> InMemoryAdministratorRepository {
        InMemoryAdministratorRepository::new()
    }

    #[rstest]
    #[tokio::test]
    async fn saves_and_finds_by_both_keys(repo: InMemoryAdministratorRepository) {
        repo.save(&admin("a@x.com", Some("INV1"))).await.expect("save");

        let by_email = repo
            .find_by_email(&Email::new("a@x.com").expect("email"))
            .await
            .expect("lookup");
        let by_code = repo.find_by_invitation_code("INV1").await.expect("lookup");

        assert_eq!(by_email, Some(admin("a@x.com", Some("INV1"))));
        assert_eq!(by_code, by_email);
    }

    #[rstest]
    #[case(admin("a@x.com", Some("INV2")))]
    #[case(admin("b@x.com", Some("INV1")))]
    #[tokio::test]
    async fn save_rejects_duplicates(
        repo: InMemoryAdministratorRepository,
        #[case] duplicate: Administrator,
    ) {
        repo.save(&admin("a@x.com", Some("INV1"))).await.expect("save");

        let error = repo.save(&duplicate).await.expect_err("duplicate");
        assert!(matches!(error, AdministratorRepositoryError::Duplicate { .. }));
        assert_eq!(repo.find_all().await.expect("list").len(), 1);
    }

    #[rstest]
    #[tokio::test]
    async fn find_all_keeps_insertion_order(repo: InMemoryAdministratorRepository) {
        repo.save(&admin("b@x.com", Some("INV2"))).await.expect("save");
        repo.save(&admin("a@x.com", Some("INV1"))).await.expect("save");

        let emails: Vec<String> = repo
            .find_all()
            .await
            .expect("list")
            .iter()
            .map(|admin| admin.email().to_string())
            .collect();
        assert_eq!(emails, ["b@x.com", "a@x.com"]);
    }

    #[rstest]
    #[tokio::test]
    async fn update_replaces_record_and_reports_missing(repo: InMemoryAdministratorRepository) {
        repo.save(&admin("a@x.com", Some("INV1"))).await.expect("save");
        repo.update(&admin("a@x.com", Some("INV9"))).await.expect("update");

        assert!(repo.find_by_invitation_code("INV1").await.expect("lookup").is_none());
        let missing = repo
            .update(&admin("z@x.com", Some("INV3")))
            .await
            .expect_err("missing");
        assert_eq!(
            missing,
            AdministratorRepositoryError::query("administrator not found for update")
        );
    }

    #[rstest]
    #[tokio::test]
    async fn delete_is_idempotent(repo: InMemoryAdministratorRepository) {
        let email = Email::new("a@x.com").expect("email");
        repo.save(&admin("a@x.com", Some("INV1"))).await.expect("save");

        repo.delete(&email).await.expect("delete");
        repo.delete(&email).await.expect("second delete");

        assert!(repo.find_by_email(&email).await.expect("lookup").is_none());
    }
}

//! Mock collaborators shared by the approval handler tests.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::center::{ApprovedFile, Center, ProofParent};
use crate::domain::foundation::{CenterId, DomainError, ErrorCode, LectorId, Role, UserId};
use crate::domain::lector::Lector;
use crate::ports::{
    ApprovedFileRepository, BlobStorage, CenterRepository, LectorRepository, UserRepository,
};

pub struct MockCenterRepository {
    pub centers: Mutex<Vec<Center>>,
    pub saved: Mutex<Vec<Center>>,
    pub deleted: Mutex<Vec<CenterId>>,
}

impl MockCenterRepository {
    pub fn new() -> Self {
        Self {
            centers: Mutex::new(Vec::new()),
            saved: Mutex::new(Vec::new()),
            deleted: Mutex::new(Vec::new()),
        }
    }

    pub fn with_center(center: Center) -> Self {
        let repo = Self::new();
        repo.centers.lock().unwrap().push(center);
        repo
    }

    pub fn with_centers(centers: Vec<Center>) -> Self {
        let repo = Self::new();
        *repo.centers.lock().unwrap() = centers;
        repo
    }
}

#[async_trait]
impl CenterRepository for MockCenterRepository {
    async fn find_by_id(&self, id: &CenterId) -> Result<Option<Center>, DomainError> {
        Ok(self
            .centers
            .lock()
            .unwrap()
            .iter()
            .find(|c| &c.id == id)
            .cloned())
    }

    async fn save(&self, center: &Center) -> Result<(), DomainError> {
        let mut centers = self.centers.lock().unwrap();
        if let Some(existing) = centers.iter_mut().find(|c| c.id == center.id) {
            *existing = center.clone();
        } else {
            centers.push(center.clone());
        }
        self.saved.lock().unwrap().push(center.clone());
        Ok(())
    }

    async fn delete(&self, id: &CenterId) -> Result<(), DomainError> {
        self.centers.lock().unwrap().retain(|c| &c.id != id);
        self.deleted.lock().unwrap().push(*id);
        Ok(())
    }

    async fn find_all_unapproved(&self) -> Result<Vec<Center>, DomainError> {
        Ok(self
            .centers
            .lock()
            .unwrap()
            .iter()
            .filter(|c| !c.approved)
            .cloned()
            .collect())
    }

    async fn exists_approved_with_name(&self, name: &str) -> Result<bool, DomainError> {
        Ok(self
            .centers
            .lock()
            .unwrap()
            .iter()
            .any(|c| c.approved && c.name == name))
    }
}

pub struct MockLectorRepository {
    pub lectors: Mutex<Vec<Lector>>,
    pub saved: Mutex<Vec<Lector>>,
    pub deleted: Mutex<Vec<LectorId>>,
}

impl MockLectorRepository {
    pub fn new() -> Self {
        Self {
            lectors: Mutex::new(Vec::new()),
            saved: Mutex::new(Vec::new()),
            deleted: Mutex::new(Vec::new()),
        }
    }

    pub fn with_lector(lector: Lector) -> Self {
        let repo = Self::new();
        repo.lectors.lock().unwrap().push(lector);
        repo
    }
}

#[async_trait]
impl LectorRepository for MockLectorRepository {
    async fn find_by_id(&self, id: &LectorId) -> Result<Option<Lector>, DomainError> {
        Ok(self
            .lectors
            .lock()
            .unwrap()
            .iter()
            .find(|l| &l.id == id)
            .cloned())
    }

    async fn save(&self, lector: &Lector) -> Result<(), DomainError> {
        let mut lectors = self.lectors.lock().unwrap();
        if let Some(existing) = lectors.iter_mut().find(|l| l.id == lector.id) {
            *existing = lector.clone();
        } else {
            lectors.push(lector.clone());
        }
        self.saved.lock().unwrap().push(lector.clone());
        Ok(())
    }

    async fn delete(&self, id: &LectorId) -> Result<(), DomainError> {
        self.lectors.lock().unwrap().retain(|l| &l.id != id);
        self.deleted.lock().unwrap().push(*id);
        Ok(())
    }

    async fn find_all_unapproved(&self) -> Result<Vec<Lector>, DomainError> {
        Ok(self
            .lectors
            .lock()
            .unwrap()
            .iter()
            .filter(|l| !l.approved)
            .cloned()
            .collect())
    }
}

pub struct MockUserRepository {
    pub role_updates: Mutex<Vec<(UserId, Role)>>,
    pub fail_update: bool,
}

impl MockUserRepository {
    pub fn new() -> Self {
        Self {
            role_updates: Mutex::new(Vec::new()),
            fail_update: false,
        }
    }
}

#[async_trait]
impl UserRepository for MockUserRepository {
    async fn update_role(&self, user_id: &UserId, role: Role) -> Result<(), DomainError> {
        if self.fail_update {
            return Err(DomainError::new(ErrorCode::UserNotFound, "User not found"));
        }
        self.role_updates.lock().unwrap().push((*user_id, role));
        Ok(())
    }
}

pub struct MockApprovedFileRepository {
    pub files: Mutex<Vec<ApprovedFile>>,
}

impl MockApprovedFileRepository {
    pub fn new() -> Self {
        Self {
            files: Mutex::new(Vec::new()),
        }
    }

    pub fn with_files(files: Vec<ApprovedFile>) -> Self {
        Self {
            files: Mutex::new(files),
        }
    }
}

#[async_trait]
impl ApprovedFileRepository for MockApprovedFileRepository {
    async fn find_all_by_parent(
        &self,
        parent: &ProofParent,
    ) -> Result<Vec<ApprovedFile>, DomainError> {
        Ok(self
            .files
            .lock()
            .unwrap()
            .iter()
            .filter(|f| &f.parent == parent)
            .cloned()
            .collect())
    }

    async fn delete_all_by_parent(&self, parent: &ProofParent) -> Result<(), DomainError> {
        self.files.lock().unwrap().retain(|f| &f.parent != parent);
        Ok(())
    }
}

pub struct MockBlobStorage {
    pub deleted_urls: Mutex<Vec<String>>,
    pub fail_delete: bool,
}

impl MockBlobStorage {
    pub fn new() -> Self {
        Self {
            deleted_urls: Mutex::new(Vec::new()),
            fail_delete: false,
        }
    }

    pub fn failing_delete() -> Self {
        Self {
            deleted_urls: Mutex::new(Vec::new()),
            fail_delete: true,
        }
    }
}

#[async_trait]
impl BlobStorage for MockBlobStorage {
    async fn upload(
        &self,
        _content: Vec<u8>,
        domain: &str,
        purpose: &str,
    ) -> Result<String, DomainError> {
        Ok(format!("blob://{}/{}/{}", domain, purpose, uuid::Uuid::new_v4()))
    }

    async fn delete(&self, url: &str) -> Result<(), DomainError> {
        if self.fail_delete {
            return Err(DomainError::new(
                ErrorCode::StorageError,
                "Simulated blob delete failure",
            ));
        }
        self.deleted_urls.lock().unwrap().push(url.to_string());
        Ok(())
    }
}

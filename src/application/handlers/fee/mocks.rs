//! Mock fee repository for the fee handler tests.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::center::CenterFee;
use crate::domain::foundation::{CenterId, DomainError, FeeId};
use crate::ports::FeeRepository;

pub struct MockFeeRepository {
    pub fees: Mutex<Vec<CenterFee>>,
    pub updated: Mutex<Vec<CenterFee>>,
}

impl MockFeeRepository {
    pub fn new() -> Self {
        Self {
            fees: Mutex::new(Vec::new()),
            updated: Mutex::new(Vec::new()),
        }
    }

    pub fn with_fees(fees: Vec<CenterFee>) -> Self {
        Self {
            fees: Mutex::new(fees),
            updated: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl FeeRepository for MockFeeRepository {
    async fn find_all_by_center(&self, center_id: &CenterId) -> Result<Vec<CenterFee>, DomainError> {
        Ok(self
            .fees
            .lock()
            .unwrap()
            .iter()
            .filter(|f| &f.center_id == center_id)
            .cloned()
            .collect())
    }

    async fn find_by_id_in_center(
        &self,
        center_id: &CenterId,
        fee_id: &FeeId,
    ) -> Result<Option<CenterFee>, DomainError> {
        Ok(self
            .fees
            .lock()
            .unwrap()
            .iter()
            .find(|f| &f.id == fee_id && &f.center_id == center_id)
            .cloned())
    }

    async fn update(&self, fee: &CenterFee) -> Result<(), DomainError> {
        let mut fees = self.fees.lock().unwrap();
        if let Some(existing) = fees.iter_mut().find(|f| f.id == fee.id) {
            *existing = fee.clone();
        }
        self.updated.lock().unwrap().push(fee.clone());
        Ok(())
    }

    async fn upsert_all(&self, new_fees: &[CenterFee]) -> Result<(), DomainError> {
        let mut fees = self.fees.lock().unwrap();
        for fee in new_fees {
            match fees.iter_mut().find(|f| f.id == fee.id) {
                Some(existing) => *existing = fee.clone(),
                None => fees.push(fee.clone()),
            }
        }
        Ok(())
    }

    async fn delete_all(&self, ids: &[FeeId]) -> Result<(), DomainError> {
        self.fees.lock().unwrap().retain(|f| !ids.contains(&f.id));
        Ok(())
    }
}

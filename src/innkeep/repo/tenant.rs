use super::Repository;
use crate::error::{InnkeepError, Result};
use crate::model::{Tenant, TenantStatus};
use crate::store::StorageBackend;

pub type TenantRepository<B> = Repository<Tenant, B>;

impl<B: StorageBackend> Repository<Tenant, B> {
    pub fn active(&self) -> Vec<Tenant> {
        self.all()
            .into_iter()
            .filter(|tenant| tenant.status == TenantStatus::Active)
            .collect()
    }

    pub fn active_count(&self) -> usize {
        self.active().len()
    }

    /// The active tenant of a room, if the room currently has one.
    pub fn active_in_room(&self, room_id: &str) -> Option<Tenant> {
        self.all()
            .into_iter()
            .find(|tenant| tenant.status == TenantStatus::Active && tenant.room_id == room_id)
    }

    /// Soft delete: the record stays for history, only the status flips.
    pub fn deactivate(&mut self, id: &str) -> Result<Tenant> {
        let mut tenant = self
            .get(id)
            .ok_or_else(|| InnkeepError::not_found("tenant", id))?;
        tenant.status = TenantStatus::Inactive;
        self.update(tenant.clone())?;
        Ok(tenant)
    }
}

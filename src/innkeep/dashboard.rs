use crate::model::Period;
use crate::repo::{PaymentRepository, RoomRepository, TenantRepository};
use crate::store::StorageBackend;

/// Snapshot of the business for one billing period.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub period: Period,
    pub total_rooms: usize,
    pub available_rooms: usize,
    pub occupied_rooms: usize,
    pub active_tenants: usize,
    pub payments_recorded: usize,
    pub collected: f64,
    pub outstanding: usize,
    /// Sum of the monthly prices of all occupied rooms.
    pub expected_income: f64,
}

impl Summary {
    /// Recomputed from the repositories on every call; nothing is cached.
    pub fn collect<B: StorageBackend>(
        rooms: &RoomRepository<B>,
        tenants: &TenantRepository<B>,
        payments: &PaymentRepository<B>,
        period: Period,
    ) -> Self {
        let occupied = rooms.occupied();
        Self {
            period,
            total_rooms: rooms.len(),
            available_rooms: rooms.available_count(),
            occupied_rooms: occupied.len(),
            active_tenants: tenants.active_count(),
            payments_recorded: payments.for_period(period).len(),
            collected: payments.collected_for(period),
            outstanding: payments.outstanding_for(period),
            expected_income: occupied.iter().map(|room| room.price).sum(),
        }
    }
}

//! # API Facade
//!
//! [`InnkeepApi`] is the composition root: it opens the three entity
//! repositories once at process start and is the single entry point the
//! presentation layer talks to. It dispatches to the repositories and the
//! occupancy coordinator, normalizes create payloads into full records,
//! and returns structured types; no stdout, no process exit.
//!
//! Generic over [`StorageBackend`], so the same facade runs against
//! `FsBackend` in production and `MemBackend` in tests.

use crate::dashboard::Summary;
use crate::error::Result;
use crate::model::{
    NewPayment, NewRoom, NewTenant, Payment, Period, Room, RoomStatus, Tenant,
};
use crate::occupancy;
use crate::repo::{LoadReport, PaymentRepository, Repository, RoomRepository, TenantRepository};
use crate::store::StorageBackend;

pub struct InnkeepApi<B: StorageBackend> {
    rooms: RoomRepository<B>,
    tenants: TenantRepository<B>,
    payments: PaymentRepository<B>,
}

impl<B: StorageBackend + Clone> InnkeepApi<B> {
    /// Open all repositories against the same backend.
    pub fn open(backend: B) -> Result<Self> {
        Ok(Self {
            rooms: Repository::open(backend.clone())?,
            tenants: Repository::open(backend.clone())?,
            payments: Repository::open(backend)?,
        })
    }
}

impl<B: StorageBackend> InnkeepApi<B> {
    // --- Rooms ---

    pub fn rooms(&self) -> Vec<Room> {
        self.rooms.all()
    }

    pub fn room(&self, id: &str) -> Option<Room> {
        self.rooms.get(id)
    }

    pub fn available_rooms(&self) -> Vec<Room> {
        self.rooms.available()
    }

    /// Register a new room; it starts out Available.
    pub fn register_room(&mut self, new: NewRoom) -> Result<Room> {
        let room = Room {
            id: self.rooms.next_id(),
            number: new.number,
            room_type: new.room_type,
            price: new.price,
            size: new.size,
            amenities: new.amenities,
            status: RoomStatus::Available,
            image_path: new.image_path,
        };
        self.rooms.create(room.clone())?;
        Ok(room)
    }

    pub fn update_room(&mut self, room: Room) -> Result<()> {
        self.rooms.update(room)
    }

    pub fn set_room_status(&mut self, id: &str, status: RoomStatus) -> Result<()> {
        self.rooms.set_status(id, status)
    }

    pub fn remove_room(&mut self, id: &str) -> Result<Room> {
        self.rooms.remove_room(id)
    }

    // --- Tenants ---

    pub fn tenants(&self) -> Vec<Tenant> {
        self.tenants.all()
    }

    pub fn tenant(&self, id: &str) -> Option<Tenant> {
        self.tenants.get(id)
    }

    pub fn active_tenants(&self) -> Vec<Tenant> {
        self.tenants.active()
    }

    pub fn move_in(&mut self, new: NewTenant) -> Result<Tenant> {
        occupancy::move_in(&mut self.tenants, &mut self.rooms, new)
    }

    pub fn move_out(&mut self, tenant_id: &str) -> Result<Tenant> {
        occupancy::move_out(&mut self.tenants, &mut self.rooms, tenant_id)
    }

    pub fn update_tenant(&mut self, tenant: Tenant) -> Result<()> {
        self.tenants.update(tenant)
    }

    // --- Payments ---

    pub fn payments(&self) -> Vec<Payment> {
        self.payments.all()
    }

    pub fn payment(&self, id: &str) -> Option<Payment> {
        self.payments.get(id)
    }

    /// Record a payment. The tenant reference is taken as-is; whether it
    /// resolves is the caller's concern.
    pub fn record_payment(&mut self, new: NewPayment) -> Result<Payment> {
        let payment = Payment {
            id: self.payments.next_id(),
            tenant_id: new.tenant_id,
            period: new.period,
            paid_on: new.paid_on,
            amount: new.amount,
            method: new.method,
            status: new.status,
        };
        self.payments.create(payment.clone())?;
        Ok(payment)
    }

    pub fn update_payment(&mut self, payment: Payment) -> Result<()> {
        self.payments.update(payment)
    }

    pub fn remove_payment(&mut self, id: &str) -> Result<Payment> {
        self.payments.remove(id)
    }

    pub fn payments_for_period(&self, period: Period) -> Vec<Payment> {
        self.payments.for_period(period)
    }

    pub fn payments_for_tenant(&self, tenant_id: &str) -> Vec<Payment> {
        self.payments.for_tenant(tenant_id)
    }

    // --- Derived views ---

    pub fn summary(&self, period: Period) -> Summary {
        Summary::collect(&self.rooms, &self.tenants, &self.payments, period)
    }

    /// Load diagnostics per entity, for surfacing skipped lines.
    pub fn load_reports(&self) -> [(&'static str, &LoadReport); 3] {
        [
            ("rooms", self.rooms.load_report()),
            ("tenants", self.tenants.load_report()),
            ("payments", self.payments.load_report()),
        ]
    }

    /// Reload everything from disk, e.g. after an archive import.
    pub fn refresh(&mut self) -> Result<()> {
        self.rooms.refresh()?;
        self.tenants.refresh()?;
        self.payments.refresh()?;
        Ok(())
    }
}

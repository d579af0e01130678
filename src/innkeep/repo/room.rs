use super::Repository;
use crate::error::{InnkeepError, Result};
use crate::model::{Room, RoomStatus};
use crate::store::StorageBackend;

pub type RoomRepository<B> = Repository<Room, B>;

impl<B: StorageBackend> Repository<Room, B> {
    pub fn available(&self) -> Vec<Room> {
        self.all()
            .into_iter()
            .filter(|room| room.status == RoomStatus::Available)
            .collect()
    }

    pub fn occupied(&self) -> Vec<Room> {
        self.all()
            .into_iter()
            .filter(|room| room.status == RoomStatus::Occupied)
            .collect()
    }

    pub fn available_count(&self) -> usize {
        self.available().len()
    }

    pub fn occupied_count(&self) -> usize {
        self.occupied().len()
    }

    /// Flip a room's occupancy status and persist it.
    pub fn set_status(&mut self, id: &str, status: RoomStatus) -> Result<()> {
        let mut room = self
            .get(id)
            .ok_or_else(|| InnkeepError::not_found("room", id))?;
        room.status = status;
        self.update(room)
    }

    /// Remove a room. Occupied rooms cannot be removed; the tenant must
    /// move out first.
    pub fn remove_room(&mut self, id: &str) -> Result<Room> {
        if let Some(room) = self.get(id) {
            if room.status == RoomStatus::Occupied {
                return Err(InnkeepError::Store(format!("room {} is occupied", id)));
            }
        }
        self.remove(id)
    }
}

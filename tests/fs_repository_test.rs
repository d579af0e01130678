use innkeep::codec::Record;
use innkeep::model::{Room, RoomStatus, RoomType};
use innkeep::repo::Repository;
use innkeep::store::fs_backend::FsBackend;
use std::fs;
use tempfile::TempDir;

fn setup() -> (TempDir, FsBackend) {
    let dir = TempDir::new().unwrap();
    let backend = FsBackend::new(dir.path().to_path_buf());
    (dir, backend)
}

fn room(id: &str, price: f64) -> Room {
    Room {
        id: id.to_string(),
        number: format!("A-{}", &id[1..]),
        room_type: RoomType::Double,
        price,
        size: "4x5".to_string(),
        amenities: "AC, wardrobe".to_string(),
        status: RoomStatus::Available,
        image_path: None,
    }
}

#[test]
fn test_records_roundtrip_through_save_and_reload() {
    let (_dir, backend) = setup();

    // 1. Create
    let mut repo = Repository::open(backend.clone()).unwrap();
    repo.create(room("R001", 250.0)).unwrap();
    repo.create(room("R002", 375.5)).unwrap();
    let written = repo.all();

    // 2. Reload from the same directory
    let reopened: Repository<Room, FsBackend> = Repository::open(backend).unwrap();
    assert_eq!(reopened.all(), written);
    assert!(reopened.load_report().skipped.is_empty());
}

#[test]
fn test_update_persists_to_disk() {
    let (_dir, backend) = setup();
    let mut repo = Repository::open(backend.clone()).unwrap();
    repo.create(room("R001", 250.0)).unwrap();

    let mut changed = room("R001", 250.0);
    changed.price = 300.0;
    changed.status = RoomStatus::Occupied;
    repo.update(changed).unwrap();

    let reopened: Repository<Room, FsBackend> = Repository::open(backend).unwrap();
    assert_eq!(reopened.get("R001").unwrap().price, 300.0);
    assert_eq!(reopened.get("R001").unwrap().status, RoomStatus::Occupied);
}

#[test]
fn test_remove_persists_to_disk() {
    let (_dir, backend) = setup();
    let mut repo = Repository::open(backend.clone()).unwrap();
    repo.create(room("R001", 250.0)).unwrap();
    repo.create(room("R002", 300.0)).unwrap();

    repo.remove("R001").unwrap();

    let reopened: Repository<Room, FsBackend> = Repository::open(backend).unwrap();
    assert_eq!(reopened.len(), 1);
    assert!(reopened.get("R001").is_none());
}

#[test]
fn test_next_id_survives_reload() {
    let (_dir, backend) = setup();
    let mut repo = Repository::open(backend.clone()).unwrap();
    repo.create(room("R005", 250.0)).unwrap();
    repo.create(room("R002", 250.0)).unwrap();

    let reopened: Repository<Room, FsBackend> = Repository::open(backend).unwrap();
    assert_eq!(reopened.next_id(), "R006");
}

#[test]
fn test_malformed_lines_are_skipped_on_load() {
    let (dir, backend) = setup();
    let good = room("R001", 250.0).to_line();
    fs::write(
        dir.path().join(Room::FILE_NAME),
        format!("{}\nR002|too|short\n", good),
    )
    .unwrap();

    let repo: Repository<Room, FsBackend> = Repository::open(backend).unwrap();

    assert_eq!(repo.len(), 1);
    assert_eq!(repo.get("R001").unwrap().price, 250.0);
    let report = repo.load_report();
    assert_eq!(report.loaded, 1);
    assert_eq!(report.skipped.len(), 1);
    assert_eq!(report.skipped[0].number, 2);
    assert!(report.skipped[0].reason.contains("fields"));
}

#[test]
fn test_backup_keeps_last_known_good() {
    let (dir, backend) = setup();
    let mut repo = Repository::open(backend).unwrap();
    repo.create(room("R001", 250.0)).unwrap();
    repo.create(room("R002", 300.0)).unwrap();

    // The backup lags one write behind the data file.
    let backup = fs::read_to_string(dir.path().join("rooms.txt.bak")).unwrap();
    assert_eq!(backup, format!("{}\n", room("R001", 250.0).to_line()));

    let current = fs::read_to_string(dir.path().join("rooms.txt")).unwrap();
    assert_eq!(
        current,
        format!(
            "{}\n{}\n",
            room("R001", 250.0).to_line(),
            room("R002", 300.0).to_line()
        )
    );
}

use chrono::{Month, NaiveDate};
use innkeep::api::InnkeepApi;
use innkeep::model::{
    NewPayment, NewRoom, NewTenant, PaymentMethod, PaymentStatus, Period, RoomStatus, RoomType,
    TenantStatus,
};
use innkeep::store::fs_backend::FsBackend;
use tempfile::TempDir;

fn setup() -> (TempDir, InnkeepApi<FsBackend>) {
    let dir = TempDir::new().unwrap();
    let api = InnkeepApi::open(FsBackend::new(dir.path().to_path_buf())).unwrap();
    (dir, api)
}

fn reopen(dir: &TempDir) -> InnkeepApi<FsBackend> {
    InnkeepApi::open(FsBackend::new(dir.path().to_path_buf())).unwrap()
}

fn add_room(api: &mut InnkeepApi<FsBackend>, number: &str, price: f64) -> String {
    api.register_room(NewRoom {
        number: number.to_string(),
        room_type: RoomType::Single,
        price,
        size: "3x4".to_string(),
        amenities: String::new(),
        image_path: None,
    })
    .unwrap()
    .id
}

fn move_in(api: &mut InnkeepApi<FsBackend>, room_id: &str) -> String {
    api.move_in(NewTenant {
        name: "Ada Brook".to_string(),
        phone: "555-0101".to_string(),
        email: "ada@example.com".to_string(),
        room_id: room_id.to_string(),
        moved_in: NaiveDate::from_ymd_opt(2026, 2, 1).unwrap(),
    })
    .unwrap()
    .id
}

#[test]
fn test_move_in_is_visible_after_reopen() {
    let (dir, mut api) = setup();
    let room_id = add_room(&mut api, "A-1", 250.0);
    let other_id = add_room(&mut api, "A-2", 250.0);
    let tenant_id = move_in(&mut api, &room_id);

    // Both files were written; a fresh process sees the same state.
    let api = reopen(&dir);
    assert_eq!(api.room(&room_id).unwrap().status, RoomStatus::Occupied);
    assert_eq!(api.room(&other_id).unwrap().status, RoomStatus::Available);

    let tenant = api.tenant(&tenant_id).unwrap();
    assert_eq!(tenant.status, TenantStatus::Active);
    assert_eq!(tenant.room_id, room_id);
}

#[test]
fn test_move_out_retains_history_on_disk() {
    let (dir, mut api) = setup();
    let room_id = add_room(&mut api, "A-1", 250.0);
    let tenant_id = move_in(&mut api, &room_id);

    api.move_out(&tenant_id).unwrap();

    let api = reopen(&dir);
    let tenant = api.tenant(&tenant_id).unwrap();
    assert_eq!(tenant.status, TenantStatus::Inactive);
    assert_eq!(api.room(&room_id).unwrap().status, RoomStatus::Available);
}

#[test]
fn test_room_is_not_removable_while_occupied() {
    let (_dir, mut api) = setup();
    let room_id = add_room(&mut api, "A-1", 250.0);
    let tenant_id = move_in(&mut api, &room_id);

    assert!(api.remove_room(&room_id).is_err());

    api.move_out(&tenant_id).unwrap();
    assert!(api.remove_room(&room_id).is_ok());
}

#[test]
fn test_payments_feed_the_summary() {
    let (dir, mut api) = setup();
    let room_id = add_room(&mut api, "A-1", 250.0);
    let tenant_id = move_in(&mut api, &room_id);

    let feb = Period::new(Month::February, 2026);
    api.record_payment(NewPayment {
        tenant_id: tenant_id.clone(),
        period: feb,
        paid_on: NaiveDate::from_ymd_opt(2026, 2, 3).unwrap(),
        amount: 250.0,
        method: PaymentMethod::Transfer,
        status: PaymentStatus::Paid,
    })
    .unwrap();
    api.record_payment(NewPayment {
        tenant_id: tenant_id.clone(),
        period: feb,
        paid_on: NaiveDate::from_ymd_opt(2026, 2, 28).unwrap(),
        amount: 40.0,
        method: PaymentMethod::Cash,
        status: PaymentStatus::Unpaid,
    })
    .unwrap();

    let api = reopen(&dir);
    let summary = api.summary(feb);
    assert_eq!(summary.payments_recorded, 2);
    assert_eq!(summary.collected, 250.0);
    assert_eq!(summary.outstanding, 1);
    assert_eq!(summary.expected_income, 250.0);

    // Payment ids are sequential with their own prefix.
    let ids: Vec<String> = api.payments().into_iter().map(|p| p.id).collect();
    assert_eq!(ids, ["P001", "P002"]);
}

#[test]
fn test_archive_export_import_roundtrip() {
    let (dir, mut api) = setup();
    let out = TempDir::new().unwrap();
    let room_id = add_room(&mut api, "A-1", 250.0);
    let tenant_id = move_in(&mut api, &room_id);

    let archive = innkeep::archive::export_archive(dir.path(), out.path()).unwrap();

    // Wipe the data directory, then restore from the archive.
    let fresh = TempDir::new().unwrap();
    let restored = innkeep::archive::import_archive(&archive, fresh.path()).unwrap();
    assert!(restored.contains(&"rooms.txt".to_string()));
    assert!(restored.contains(&"tenants.txt".to_string()));

    let api = InnkeepApi::open(FsBackend::new(fresh.path().to_path_buf())).unwrap();
    assert_eq!(api.room(&room_id).unwrap().status, RoomStatus::Occupied);
    assert_eq!(api.tenant(&tenant_id).unwrap().status, TenantStatus::Active);
}

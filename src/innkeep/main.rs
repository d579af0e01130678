use chrono::Local;
use clap::Parser;
use directories::ProjectDirs;
use innkeep::api::InnkeepApi;
use innkeep::archive;
use innkeep::codec;
use innkeep::config::InnkeepConfig;
use innkeep::error::{InnkeepError, Result};
use innkeep::model::{NewPayment, NewRoom, NewTenant, Period, TenantStatus};
use innkeep::store::fs_backend::FsBackend;
use std::path::PathBuf;
use std::str::FromStr;
use tracing_subscriber::EnvFilter;

mod cli;
use cli::args::{Cli, Commands};
use cli::print;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

struct AppContext {
    api: InnkeepApi<FsBackend>,
    config: InnkeepConfig,
    data_dir: PathBuf,
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut ctx = init_context(&cli)?;
    print::print_load_warnings(&ctx.api.load_reports());

    match cli.command {
        Some(Commands::Rooms { available }) => handle_rooms(&ctx, available),
        Some(Commands::AddRoom {
            number,
            room_type,
            price,
            size,
            amenities,
            image,
        }) => handle_add_room(&mut ctx, number, room_type, price, size, amenities, image),
        Some(Commands::EditRoom {
            id,
            number,
            room_type,
            price,
            size,
            amenities,
        }) => handle_edit_room(&mut ctx, id, number, room_type, price, size, amenities),
        Some(Commands::RemoveRoom { id }) => handle_remove_room(&mut ctx, id),
        Some(Commands::Tenants { all }) => handle_tenants(&ctx, all),
        Some(Commands::MoveIn {
            name,
            room,
            phone,
            email,
            date,
        }) => handle_move_in(&mut ctx, name, room, phone, email, date),
        Some(Commands::MoveOut { id }) => handle_move_out(&mut ctx, id),
        Some(Commands::Payments { period, tenant }) => handle_payments(&ctx, period, tenant),
        Some(Commands::RecordPayment {
            tenant,
            period,
            amount,
            method,
            status,
            date,
        }) => handle_record_payment(&mut ctx, tenant, period, amount, method, status, date),
        Some(Commands::MarkPaid { id }) => handle_mark_paid(&mut ctx, id),
        Some(Commands::RemovePayment { id }) => handle_remove_payment(&mut ctx, id),
        Some(Commands::Dashboard { period }) => handle_dashboard(&ctx, period),
        Some(Commands::Export) => handle_export(&ctx),
        Some(Commands::Import { file }) => handle_import(&mut ctx, file),
        None => handle_dashboard(&ctx, None),
    }
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let data_dir = match &cli.data_dir {
        Some(dir) => dir.clone(),
        None => ProjectDirs::from("com", "innkeep", "innkeep")
            .map(|dirs| dirs.data_dir().to_path_buf())
            .ok_or_else(|| InnkeepError::Store("could not determine data directory".to_string()))?,
    };

    let config = InnkeepConfig::load(&data_dir).unwrap_or_default();
    let api = InnkeepApi::open(FsBackend::new(data_dir.clone()))?;
    Ok(AppContext {
        api,
        config,
        data_dir,
    })
}

// --- Input validation (the library trusts already-validated records) ---

fn parse_price(value: &str) -> Result<f64> {
    let price: f64 = value
        .parse()
        .map_err(|_| InnkeepError::Store(format!("invalid price: {}", value)))?;
    if price <= 0.0 || !price.is_finite() {
        return Err(InnkeepError::Store(format!(
            "price must be positive: {}",
            value
        )));
    }
    Ok(price)
}

fn parse_date_or_today(value: Option<String>) -> Result<chrono::NaiveDate> {
    match value {
        Some(raw) => codec::parse_date_field(&raw)
            .map_err(|_| InnkeepError::Store(format!("invalid date (want dd/mm/yyyy): {}", raw))),
        None => Ok(Local::now().date_naive()),
    }
}

fn parse_period_or_current(value: Option<String>) -> Result<Period> {
    match value {
        Some(raw) => Period::from_str(&raw).map_err(InnkeepError::Store),
        None => Ok(Period::from_date(Local::now().date_naive())),
    }
}

fn parse_field<T: FromStr<Err = String>>(value: &str) -> Result<T> {
    value.parse().map_err(InnkeepError::Store)
}

// --- Handlers ---

fn handle_rooms(ctx: &AppContext, available: bool) -> Result<()> {
    let rooms = if available {
        ctx.api.available_rooms()
    } else {
        ctx.api.rooms()
    };
    print::print_rooms(&rooms, &ctx.config.currency);
    Ok(())
}

fn handle_add_room(
    ctx: &mut AppContext,
    number: String,
    room_type: String,
    price: String,
    size: String,
    amenities: String,
    image: Option<String>,
) -> Result<()> {
    if number.trim().is_empty() {
        return Err(InnkeepError::Store("room number must not be empty".to_string()));
    }
    let room = ctx.api.register_room(NewRoom {
        number,
        room_type: parse_field(&room_type)?,
        price: parse_price(&price)?,
        size,
        amenities,
        image_path: image,
    })?;
    print::success(format!("Room registered: {} ({})", room.id, room.number));
    Ok(())
}

fn handle_edit_room(
    ctx: &mut AppContext,
    id: String,
    number: Option<String>,
    room_type: Option<String>,
    price: Option<String>,
    size: Option<String>,
    amenities: Option<String>,
) -> Result<()> {
    let mut room = ctx
        .api
        .room(&id)
        .ok_or_else(|| InnkeepError::Store(format!("no such room: {}", id)))?;

    if let Some(number) = number {
        room.number = number;
    }
    if let Some(room_type) = room_type {
        room.room_type = parse_field(&room_type)?;
    }
    if let Some(price) = price {
        room.price = parse_price(&price)?;
    }
    if let Some(size) = size {
        room.size = size;
    }
    if let Some(amenities) = amenities {
        room.amenities = amenities;
    }

    ctx.api.update_room(room)?;
    print::success(format!("Room updated: {}", id));
    Ok(())
}

fn handle_remove_room(ctx: &mut AppContext, id: String) -> Result<()> {
    let room = ctx.api.remove_room(&id)?;
    print::success(format!("Room removed: {} ({})", room.id, room.number));
    Ok(())
}

fn handle_tenants(ctx: &AppContext, all: bool) -> Result<()> {
    let tenants = if all || ctx.config.show_inactive {
        ctx.api.tenants()
    } else {
        ctx.api.active_tenants()
    };
    print::print_tenants(&tenants);
    Ok(())
}

fn handle_move_in(
    ctx: &mut AppContext,
    name: String,
    room: String,
    phone: String,
    email: String,
    date: Option<String>,
) -> Result<()> {
    if name.trim().is_empty() {
        return Err(InnkeepError::Store("tenant name must not be empty".to_string()));
    }
    let tenant = ctx.api.move_in(NewTenant {
        name,
        phone,
        email,
        room_id: room,
        moved_in: parse_date_or_today(date)?,
    })?;
    print::success(format!(
        "Tenant {} moved into room {}",
        tenant.id, tenant.room_id
    ));
    Ok(())
}

fn handle_move_out(ctx: &mut AppContext, id: String) -> Result<()> {
    let tenant = ctx.api.move_out(&id)?;
    print::success(format!(
        "Tenant {} moved out, room {} is available again",
        tenant.id, tenant.room_id
    ));
    Ok(())
}

fn handle_payments(
    ctx: &AppContext,
    period: Option<String>,
    tenant: Option<String>,
) -> Result<()> {
    let payments = if let Some(raw) = period {
        let period = Period::from_str(&raw).map_err(InnkeepError::Store)?;
        let mut payments = ctx.api.payments_for_period(period);
        if let Some(tenant_id) = tenant {
            payments.retain(|p| p.tenant_id == tenant_id);
        }
        payments
    } else if let Some(tenant_id) = tenant {
        ctx.api.payments_for_tenant(&tenant_id)
    } else {
        ctx.api.payments()
    };
    print::print_payments(&payments, &ctx.config.currency);
    Ok(())
}

fn handle_record_payment(
    ctx: &mut AppContext,
    tenant: String,
    period: Option<String>,
    amount: String,
    method: String,
    status: String,
    date: Option<String>,
) -> Result<()> {
    if ctx.api.tenant(&tenant).is_none() {
        print::warning(format!("tenant {} is not on file, recording anyway", tenant));
    }
    let payment = ctx.api.record_payment(NewPayment {
        tenant_id: tenant,
        period: parse_period_or_current(period)?,
        paid_on: parse_date_or_today(date)?,
        amount: parse_price(&amount)?,
        method: parse_field(&method)?,
        status: parse_field(&status)?,
    })?;
    print::success(format!(
        "Payment {} recorded for {} ({})",
        payment.id, payment.tenant_id, payment.period
    ));
    Ok(())
}

fn handle_mark_paid(ctx: &mut AppContext, id: String) -> Result<()> {
    let mut payment = ctx
        .api
        .payment(&id)
        .ok_or_else(|| InnkeepError::Store(format!("no such payment: {}", id)))?;
    payment.status = innkeep::model::PaymentStatus::Paid;
    ctx.api.update_payment(payment)?;
    print::success(format!("Payment {} marked as paid", id));
    Ok(())
}

fn handle_remove_payment(ctx: &mut AppContext, id: String) -> Result<()> {
    ctx.api.remove_payment(&id)?;
    print::success(format!("Payment removed: {}", id));
    Ok(())
}

fn handle_dashboard(ctx: &AppContext, period: Option<String>) -> Result<()> {
    let period = parse_period_or_current(period)?;
    let summary = ctx.api.summary(period);
    print::print_summary(&summary, &ctx.config.currency);
    Ok(())
}

fn handle_export(ctx: &AppContext) -> Result<()> {
    let cwd = std::env::current_dir().map_err(InnkeepError::Io)?;
    let path = archive::export_archive(&ctx.data_dir, &cwd)?;
    print::success(format!("Exported to {}", path.display()));
    Ok(())
}

fn handle_import(ctx: &mut AppContext, file: PathBuf) -> Result<()> {
    let restored = archive::import_archive(&file, &ctx.data_dir)?;
    if restored.is_empty() {
        print::info("No record files found in the archive.");
        return Ok(());
    }
    ctx.api.refresh()?;
    for name in &restored {
        print::info(format!("Restored: {}", name));
    }
    print::success(format!(
        "Import complete, {} tenant(s) on file",
        ctx.api
            .tenants()
            .iter()
            .filter(|t| t.status == TenantStatus::Active)
            .count()
    ));
    Ok(())
}

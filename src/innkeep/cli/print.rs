use super::styles;
use chrono::Local;
use colored::Colorize;
use innkeep::dashboard::Summary;
use innkeep::model::{Payment, PaymentStatus, Room, RoomStatus, Tenant, TenantStatus};
use innkeep::repo::LoadReport;
use std::time::Duration;
use timeago::Formatter;
use unicode_width::UnicodeWidthStr;

pub fn success(message: impl AsRef<str>) {
    println!("{}", message.as_ref().green());
}

pub fn info(message: impl AsRef<str>) {
    println!("{}", message.as_ref().dimmed());
}

pub fn warning(message: impl AsRef<str>) {
    println!("{}", message.as_ref().yellow());
}

fn pad(value: &str, width: usize) -> String {
    let used = UnicodeWidthStr::width(value);
    let mut out = value.to_string();
    for _ in used..width {
        out.push(' ');
    }
    out
}

fn room_status(status: RoomStatus) -> colored::ColoredString {
    match status {
        RoomStatus::Available => pad("Available", 10).green(),
        RoomStatus::Occupied => pad("Occupied", 10).yellow(),
    }
}

fn payment_status(status: PaymentStatus) -> colored::ColoredString {
    match status {
        PaymentStatus::Paid => pad("Paid", 7).green(),
        PaymentStatus::Unpaid => pad("Unpaid", 7).red(),
        PaymentStatus::Late => pad("Late", 7).yellow(),
    }
}

pub fn print_rooms(rooms: &[Room], currency: &str) {
    if rooms.is_empty() {
        println!("No rooms found.");
        return;
    }

    println!(
        "{}",
        styles::HEADER.apply_to(format!(
            "{} {} {} {:>10} {} {}",
            pad("ID", 5),
            pad("NUMBER", 8),
            pad("TYPE", 7),
            "PRICE",
            pad("STATUS", 10),
            "AMENITIES"
        ))
    );
    for room in rooms {
        println!(
            "{} {} {} {:>10} {} {}",
            styles::ID.apply_to(pad(&room.id, 5)),
            pad(&room.number, 8),
            pad(&room.room_type.to_string(), 7),
            format!("{}{:.2}", currency, room.price),
            room_status(room.status),
            room.amenities
        );
    }
}

pub fn print_tenants(tenants: &[Tenant]) {
    if tenants.is_empty() {
        println!("No tenants found.");
        return;
    }

    let formatter = Formatter::new();
    let today = Local::now().date_naive();

    println!(
        "{}",
        styles::HEADER.apply_to(format!(
            "{} {} {} {} {} MOVED IN",
            pad("ID", 5),
            pad("NAME", 20),
            pad("ROOM", 5),
            pad("PHONE", 12),
            pad("STATUS", 8),
        ))
    );
    for tenant in tenants {
        let days = (today - tenant.moved_in).num_days().max(0) as u64;
        let ago = formatter.convert(Duration::from_secs(days * 24 * 60 * 60));
        let status = match tenant.status {
            TenantStatus::Active => pad("Active", 8).green(),
            TenantStatus::Inactive => pad("Inactive", 8).dimmed(),
        };
        println!(
            "{} {} {} {} {} {}",
            styles::ID.apply_to(pad(&tenant.id, 5)),
            pad(&tenant.name, 20),
            pad(&tenant.room_id, 5),
            pad(&tenant.phone, 12),
            status,
            styles::MUTED.apply_to(ago)
        );
    }
}

pub fn print_payments(payments: &[Payment], currency: &str) {
    if payments.is_empty() {
        println!("No payments found.");
        return;
    }

    println!(
        "{}",
        styles::HEADER.apply_to(format!(
            "{} {} {} {:>10} {} {}",
            pad("ID", 5),
            pad("TENANT", 7),
            pad("PERIOD", 15),
            "AMOUNT",
            pad("METHOD", 9),
            pad("STATUS", 7),
        ))
    );
    for payment in payments {
        println!(
            "{} {} {} {:>10} {} {}",
            styles::ID.apply_to(pad(&payment.id, 5)),
            pad(&payment.tenant_id, 7),
            pad(&payment.period.to_string(), 15),
            format!("{}{:.2}", currency, payment.amount),
            pad(&payment.method.to_string(), 9),
            payment_status(payment.status),
        );
    }
}

pub fn print_summary(summary: &Summary, currency: &str) {
    println!("{}", styles::HEADER.apply_to(summary.period.to_string()));
    println!(
        "Rooms:     {} total, {} occupied, {} available",
        summary.total_rooms, summary.occupied_rooms, summary.available_rooms
    );
    println!("Tenants:   {} active", summary.active_tenants);
    println!(
        "Payments:  {} recorded, {} outstanding",
        summary.payments_recorded, summary.outstanding
    );
    println!(
        "Income:    {}{:.2} collected of {}{:.2} expected",
        currency, summary.collected, currency, summary.expected_income
    );
}

/// Surface lines that were skipped while loading the record files.
pub fn print_load_warnings(reports: &[(&str, &LoadReport)]) {
    for (entity, report) in reports {
        for skipped in &report.skipped {
            warning(format!(
                "{}: skipped line {} ({}): {}",
                entity, skipped.number, skipped.reason, skipped.line
            ));
        }
    }
}

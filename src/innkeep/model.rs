use chrono::{Datelike, Month, NaiveDate};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoomType {
    Single,
    Double,
    Vip,
}

impl fmt::Display for RoomType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            RoomType::Single => "Single",
            RoomType::Double => "Double",
            RoomType::Vip => "VIP",
        })
    }
}

impl FromStr for RoomType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "single" => Ok(RoomType::Single),
            "double" => Ok(RoomType::Double),
            "vip" => Ok(RoomType::Vip),
            other => Err(format!("unknown room type: {}", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoomStatus {
    Available,
    Occupied,
}

impl fmt::Display for RoomStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            RoomStatus::Available => "Available",
            RoomStatus::Occupied => "Occupied",
        })
    }
}

impl FromStr for RoomStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "available" => Ok(RoomStatus::Available),
            "occupied" => Ok(RoomStatus::Occupied),
            other => Err(format!("unknown room status: {}", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TenantStatus {
    Active,
    Inactive,
}

impl fmt::Display for TenantStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TenantStatus::Active => "Active",
            TenantStatus::Inactive => "Inactive",
        })
    }
}

impl FromStr for TenantStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "active" => Ok(TenantStatus::Active),
            "inactive" => Ok(TenantStatus::Inactive),
            other => Err(format!("unknown tenant status: {}", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentMethod {
    Cash,
    Transfer,
    EWallet,
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            PaymentMethod::Cash => "Cash",
            PaymentMethod::Transfer => "Transfer",
            PaymentMethod::EWallet => "E-Wallet",
        })
    }
}

impl FromStr for PaymentMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "cash" => Ok(PaymentMethod::Cash),
            "transfer" => Ok(PaymentMethod::Transfer),
            "e-wallet" | "ewallet" => Ok(PaymentMethod::EWallet),
            other => Err(format!("unknown payment method: {}", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentStatus {
    Paid,
    Unpaid,
    Late,
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            PaymentStatus::Paid => "Paid",
            PaymentStatus::Unpaid => "Unpaid",
            PaymentStatus::Late => "Late",
        })
    }
}

impl FromStr for PaymentStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "paid" => Ok(PaymentStatus::Paid),
            "unpaid" => Ok(PaymentStatus::Unpaid),
            "late" => Ok(PaymentStatus::Late),
            other => Err(format!("unknown payment status: {}", other)),
        }
    }
}

/// A billing cycle, identified by month name and 4-digit year
/// (e.g. "January 2026").
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Period {
    pub month: Month,
    pub year: i32,
}

impl Period {
    pub fn new(month: Month, year: i32) -> Self {
        Self { month, year }
    }

    /// The period a given date falls in.
    pub fn from_date(date: NaiveDate) -> Self {
        // month() is always 1..=12, the unwrap cannot fail
        let month = Month::try_from(date.month() as u8).unwrap();
        Self {
            month,
            year: date.year(),
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.month.name(), self.year)
    }
}

impl FromStr for Period {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (month, year) = s
            .trim()
            .rsplit_once(' ')
            .ok_or_else(|| format!("invalid period label: {}", s))?;
        let month: Month = month
            .trim()
            .parse()
            .map_err(|_| format!("invalid month name: {}", month))?;
        let year: i32 = year
            .trim()
            .parse()
            .map_err(|_| format!("invalid year: {}", year))?;
        if !(1000..=9999).contains(&year) {
            return Err(format!("year must have four digits: {}", year));
        }
        Ok(Self { month, year })
    }
}

impl Ord for Period {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.year, self.month.number_from_month())
            .cmp(&(other.year, other.month.number_from_month()))
    }
}

impl PartialOrd for Period {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// A rentable unit. The id is unique and immutable once assigned.
#[derive(Debug, Clone, PartialEq)]
pub struct Room {
    pub id: String,
    pub number: String,
    pub room_type: RoomType,
    pub price: f64,
    pub size: String,
    pub amenities: String,
    pub status: RoomStatus,
    pub image_path: Option<String>,
}

/// A person renting a room. Tenants are never physically deleted; moving
/// out flips the status to Inactive and the record stays for history.
#[derive(Debug, Clone, PartialEq)]
pub struct Tenant {
    pub id: String,
    pub name: String,
    pub phone: String,
    pub email: String,
    pub room_id: String,
    pub moved_in: NaiveDate,
    pub status: TenantStatus,
}

/// A recorded transaction for one tenant and one billing period. The
/// tenant reference is not validated at write time; callers must handle
/// payments whose tenant no longer resolves.
#[derive(Debug, Clone, PartialEq)]
pub struct Payment {
    pub id: String,
    pub tenant_id: String,
    pub period: Period,
    pub paid_on: NaiveDate,
    pub amount: f64,
    pub method: PaymentMethod,
    pub status: PaymentStatus,
}

/// Create payload for a room; the repository assigns id and status.
#[derive(Debug, Clone)]
pub struct NewRoom {
    pub number: String,
    pub room_type: RoomType,
    pub price: f64,
    pub size: String,
    pub amenities: String,
    pub image_path: Option<String>,
}

/// Create payload for a tenant moving in.
#[derive(Debug, Clone)]
pub struct NewTenant {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub room_id: String,
    pub moved_in: NaiveDate,
}

/// Create payload for a payment.
#[derive(Debug, Clone)]
pub struct NewPayment {
    pub tenant_id: String,
    pub period: Period,
    pub paid_on: NaiveDate,
    pub amount: f64,
    pub method: PaymentMethod,
    pub status: PaymentStatus,
}

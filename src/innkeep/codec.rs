//! Line codec for the record files.
//!
//! Each record is one line of text: fields joined by [`DELIMITER`] in a
//! fixed order, amounts with two fraction digits, dates as day/month/year.
//! Parsing is strict about field count and field conversion but reports
//! failures as values; the repository layer decides what to do with a bad
//! line (it skips it and records a diagnostic).
//!
//! Field values are stored verbatim. A value containing the delimiter
//! corrupts the line on the way back in; callers keep the delimiter out of
//! free-text fields.

use crate::model::{
    Payment, PaymentMethod, PaymentStatus, Period, Room, RoomStatus, RoomType, Tenant,
    TenantStatus,
};
use chrono::NaiveDate;
use std::str::FromStr;
use thiserror::Error;

pub const DELIMITER: &str = "|";

const DATE_FORMAT: &str = "%d/%m/%Y";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("expected at least {expected} fields, found {found}")]
    FieldCount { expected: usize, found: usize },

    #[error("invalid {field}: {value:?}")]
    Number { field: &'static str, value: String },

    #[error("invalid {field}: {value:?}")]
    Date { field: &'static str, value: String },

    #[error("unknown {field}: {value:?}")]
    Variant { field: &'static str, value: String },
}

/// An entity that serializes to one delimited line in its backing file.
pub trait Record: Sized + Clone {
    /// Entity label used in errors and logs.
    const ENTITY: &'static str;

    /// File name inside the data directory.
    const FILE_NAME: &'static str;

    /// Alphabetic prefix of the sequential id ("R001", "T001", "P001").
    const ID_PREFIX: char;

    fn id(&self) -> &str;

    fn to_line(&self) -> String;

    fn parse_line(line: &str) -> Result<Self, ParseError>;
}

pub fn format_money(amount: f64) -> String {
    format!("{:.2}", amount)
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

pub fn parse_date_field(value: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(value, DATE_FORMAT)
}

fn money(field: &'static str, value: &str) -> Result<f64, ParseError> {
    value.parse::<f64>().map_err(|_| ParseError::Number {
        field,
        value: value.to_string(),
    })
}

fn date(field: &'static str, value: &str) -> Result<NaiveDate, ParseError> {
    parse_date_field(value).map_err(|_| ParseError::Date {
        field,
        value: value.to_string(),
    })
}

fn variant<T: FromStr>(field: &'static str, value: &str) -> Result<T, ParseError> {
    value.parse().map_err(|_| ParseError::Variant {
        field,
        value: value.to_string(),
    })
}

fn split(line: &str, expected: usize) -> Result<Vec<&str>, ParseError> {
    let fields: Vec<&str> = line.split(DELIMITER).collect();
    if fields.len() < expected {
        return Err(ParseError::FieldCount {
            expected,
            found: fields.len(),
        });
    }
    Ok(fields)
}

impl Record for Room {
    const ENTITY: &'static str = "room";
    const FILE_NAME: &'static str = "rooms.txt";
    const ID_PREFIX: char = 'R';

    fn id(&self) -> &str {
        &self.id
    }

    fn to_line(&self) -> String {
        [
            self.id.clone(),
            self.number.clone(),
            self.room_type.to_string(),
            format_money(self.price),
            self.size.clone(),
            self.amenities.clone(),
            self.status.to_string(),
            self.image_path.clone().unwrap_or_default(),
        ]
        .join(DELIMITER)
    }

    fn parse_line(line: &str) -> Result<Self, ParseError> {
        let fields = split(line, 8)?;
        Ok(Room {
            id: fields[0].to_string(),
            number: fields[1].to_string(),
            room_type: variant("room type", fields[2])?,
            price: money("price", fields[3])?,
            size: fields[4].to_string(),
            amenities: fields[5].to_string(),
            status: variant("room status", fields[6])?,
            image_path: if fields[7].is_empty() {
                None
            } else {
                Some(fields[7].to_string())
            },
        })
    }
}

impl Record for Tenant {
    const ENTITY: &'static str = "tenant";
    const FILE_NAME: &'static str = "tenants.txt";
    const ID_PREFIX: char = 'T';

    fn id(&self) -> &str {
        &self.id
    }

    fn to_line(&self) -> String {
        [
            self.id.clone(),
            self.name.clone(),
            self.phone.clone(),
            self.email.clone(),
            self.room_id.clone(),
            format_date(self.moved_in),
            self.status.to_string(),
        ]
        .join(DELIMITER)
    }

    fn parse_line(line: &str) -> Result<Self, ParseError> {
        let fields = split(line, 7)?;
        Ok(Tenant {
            id: fields[0].to_string(),
            name: fields[1].to_string(),
            phone: fields[2].to_string(),
            email: fields[3].to_string(),
            room_id: fields[4].to_string(),
            moved_in: date("move-in date", fields[5])?,
            status: variant("tenant status", fields[6])?,
        })
    }
}

impl Record for Payment {
    const ENTITY: &'static str = "payment";
    const FILE_NAME: &'static str = "payments.txt";
    const ID_PREFIX: char = 'P';

    fn id(&self) -> &str {
        &self.id
    }

    fn to_line(&self) -> String {
        [
            self.id.clone(),
            self.tenant_id.clone(),
            self.period.to_string(),
            format_date(self.paid_on),
            format_money(self.amount),
            self.method.to_string(),
            self.status.to_string(),
        ]
        .join(DELIMITER)
    }

    fn parse_line(line: &str) -> Result<Self, ParseError> {
        let fields = split(line, 7)?;
        Ok(Payment {
            id: fields[0].to_string(),
            tenant_id: fields[1].to_string(),
            period: variant("period", fields[2])?,
            paid_on: date("payment date", fields[3])?,
            amount: money("amount", fields[4])?,
            method: variant("payment method", fields[5])?,
            status: variant("payment status", fields[6])?,
        })
    }
}

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "innkeep", version)]
#[command(about = "Boarding-house management from the command line", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory holding the record files (defaults to the user data dir)
    #[arg(long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List rooms
    Rooms {
        /// Only rooms currently available
        #[arg(long)]
        available: bool,
    },

    /// Register a new room
    AddRoom {
        /// Display label, e.g. "A-12"
        number: String,

        /// Single, Double or VIP
        #[arg(long, default_value = "Single")]
        room_type: String,

        /// Monthly price
        #[arg(long)]
        price: String,

        /// Dimensions, e.g. "3x4"
        #[arg(long, default_value = "")]
        size: String,

        /// Free-text amenities
        #[arg(long, default_value = "")]
        amenities: String,

        /// Path to a room photo
        #[arg(long)]
        image: Option<String>,
    },

    /// Change fields of an existing room
    EditRoom {
        id: String,

        #[arg(long)]
        number: Option<String>,

        #[arg(long)]
        room_type: Option<String>,

        #[arg(long)]
        price: Option<String>,

        #[arg(long)]
        size: Option<String>,

        #[arg(long)]
        amenities: Option<String>,
    },

    /// Remove a room (must not be occupied)
    RemoveRoom { id: String },

    /// List tenants (active only by default)
    Tenants {
        /// Include tenants who moved out
        #[arg(long)]
        all: bool,
    },

    /// Move a tenant into an available room
    MoveIn {
        name: String,

        /// Id of an available room
        #[arg(long)]
        room: String,

        #[arg(long, default_value = "")]
        phone: String,

        #[arg(long, default_value = "")]
        email: String,

        /// Move-in date as dd/mm/yyyy (defaults to today)
        #[arg(long)]
        date: Option<String>,
    },

    /// Move a tenant out, freeing their room
    MoveOut { id: String },

    /// List payments
    Payments {
        /// Billing period, e.g. "February 2026"
        #[arg(long)]
        period: Option<String>,

        /// Only payments of one tenant
        #[arg(long)]
        tenant: Option<String>,
    },

    /// Record a payment for a tenant and billing period
    RecordPayment {
        /// Tenant id
        tenant: String,

        /// Billing period, e.g. "February 2026" (defaults to this month)
        #[arg(long)]
        period: Option<String>,

        #[arg(long)]
        amount: String,

        /// Cash, Transfer or E-Wallet
        #[arg(long, default_value = "Cash")]
        method: String,

        /// Paid, Unpaid or Late
        #[arg(long, default_value = "Paid")]
        status: String,

        /// Payment date as dd/mm/yyyy (defaults to today)
        #[arg(long)]
        date: Option<String>,
    },

    /// Mark an existing payment as paid
    MarkPaid { id: String },

    /// Remove a payment record
    RemovePayment { id: String },

    /// Occupancy and income overview for one billing period
    Dashboard {
        /// Billing period, e.g. "February 2026" (defaults to this month)
        #[arg(long)]
        period: Option<String>,
    },

    /// Write a tar.gz backup of the record files to the current directory
    Export,

    /// Restore record files from a tar.gz backup
    Import { file: PathBuf },
}

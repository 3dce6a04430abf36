//! CLI module for koi
//!
//! Provides the command-line interface using clap.

pub mod commands;

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::schemas::{EntityKind, Role};

/// Koi - booking, trip and fish-order workflow checks over API snapshots
#[derive(Parser, Debug)]
#[command(name = "koi")]
#[command(version)]
#[command(about = "Booking, trip and fish-order workflow checks over API snapshots")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress info-level output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Override the working directory
    #[arg(long, global = true)]
    pub cwd: Option<PathBuf>,

    /// Directory holding the snapshot files (overrides config)
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,
}

/// Tables that can be exported as CSV
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportKind {
    Bookings,
    FishOrders,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the legal statuses with their next states and roles
    Statuses {
        /// Only show one entity kind (booking, trip, fish-order)
        #[arg(long)]
        kind: Option<EntityKind>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Check whether an entity may move to a status
    Check {
        /// Entity kind (booking, trip, fish-order)
        kind: EntityKind,

        /// Entity ID
        id: i64,

        /// Requested status label, e.g. "Order Prepare"
        status: String,

        /// Check as this role (e.g. "Sales Staff" or sales-staff)
        #[arg(long = "as")]
        as_role: Option<Role>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Validate, apply and save a status change
    SetStatus {
        /// Entity kind (booking, trip, fish-order)
        kind: EntityKind,

        /// Entity ID
        id: i64,

        /// New status label
        status: String,

        /// Act as this role
        #[arg(long = "as")]
        as_role: Option<Role>,
    },

    /// Assign a staff account to a booking
    Assign {
        /// Booking ID
        booking_id: i64,

        /// Slot to fill (sales, consulting, delivery)
        slot: crate::domain::StaffSlot,

        /// Staff account ID
        account_id: i64,
    },

    /// List entities with search, sort and paging
    List {
        /// Entity kind (booking, trip, fish-order)
        kind: EntityKind,

        /// Case-insensitive search term
        #[arg(long)]
        search: Option<String>,

        /// Sort field (id, status, date, ...)
        #[arg(long)]
        sort: Option<String>,

        /// Sort descending
        #[arg(long)]
        desc: bool,

        /// Page number, starting at 1
        #[arg(long, default_value_t = 1)]
        page: usize,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the dashboard summary
    Summary {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Export a table as CSV
    Export {
        #[arg(value_enum)]
        kind: ExportKind,

        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print the resolved configuration
    Config,
}

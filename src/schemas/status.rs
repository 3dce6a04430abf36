//! Status vocabularies - one typed enumeration per entity kind
//!
//! Labels are the exact strings the backend stores. Parsing is a
//! case-sensitive exact match so "OrderPrepare" never passes for
//! "Order Prepare".

use serde::{Deserialize, Serialize};

use crate::errors::KoiError;

/// The entity kinds that carry a workflow status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum EntityKind {
    Booking,
    Trip,
    FishOrder,
}

impl EntityKind {
    pub const ALL: [EntityKind; 3] = [EntityKind::Booking, EntityKind::Trip, EntityKind::FishOrder];
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntityKind::Booking => write!(f, "Booking"),
            EntityKind::Trip => write!(f, "Trip"),
            EntityKind::FishOrder => write!(f, "FishOrder"),
        }
    }
}

impl std::str::FromStr for EntityKind {
    type Err = String;

    /// Kind names are matched loosely ("fish-order", "fish_order", "FishOrder").
    /// Only statuses require an exact match.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let folded: String = s
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .collect::<String>()
            .to_lowercase();
        match folded.as_str() {
            "booking" | "bookings" => Ok(EntityKind::Booking),
            "trip" | "trips" => Ok(EntityKind::Trip),
            "fishorder" | "fishorders" => Ok(EntityKind::FishOrder),
            _ => Err(format!("Unknown entity kind: {}", s)),
        }
    }
}

/// Booking lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BookingStatus {
    #[serde(rename = "Requested")]
    Requested,
    #[serde(rename = "Pending Quote")]
    PendingQuote,
    #[serde(rename = "Approved Quote")]
    ApprovedQuote,
    #[serde(rename = "Paid Booking")]
    PaidBooking,
    #[serde(rename = "On-going")]
    OnGoing,
    #[serde(rename = "Order Prepare")]
    OrderPrepare,
    #[serde(rename = "Completed")]
    Completed,
    #[serde(rename = "Cancelled Booking")]
    CancelledBooking,
}

impl BookingStatus {
    /// Every booking status in lifecycle order, cancellation last
    pub const ALL: [BookingStatus; 8] = [
        BookingStatus::Requested,
        BookingStatus::PendingQuote,
        BookingStatus::ApprovedQuote,
        BookingStatus::PaidBooking,
        BookingStatus::OnGoing,
        BookingStatus::OrderPrepare,
        BookingStatus::Completed,
        BookingStatus::CancelledBooking,
    ];

    pub fn label(self) -> &'static str {
        match self {
            BookingStatus::Requested => "Requested",
            BookingStatus::PendingQuote => "Pending Quote",
            BookingStatus::ApprovedQuote => "Approved Quote",
            BookingStatus::PaidBooking => "Paid Booking",
            BookingStatus::OnGoing => "On-going",
            BookingStatus::OrderPrepare => "Order Prepare",
            BookingStatus::Completed => "Completed",
            BookingStatus::CancelledBooking => "Cancelled Booking",
        }
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, BookingStatus::Completed | BookingStatus::CancelledBooking)
    }
}

impl std::fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for BookingStatus {
    type Err = KoiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BookingStatus::ALL
            .into_iter()
            .find(|status| status.label() == s)
            .ok_or_else(|| KoiError::invalid_status(EntityKind::Booking, s))
    }
}

/// Trip itinerary status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TripStatus {
    #[serde(rename = "Pending")]
    Pending,
    #[serde(rename = "Redo")]
    Redo,
    #[serde(rename = "Approved")]
    Approved,
    #[serde(rename = "On-going")]
    OnGoing,
    #[serde(rename = "Completed")]
    Completed,
}

impl TripStatus {
    pub const ALL: [TripStatus; 5] = [
        TripStatus::Pending,
        TripStatus::Redo,
        TripStatus::Approved,
        TripStatus::OnGoing,
        TripStatus::Completed,
    ];

    pub fn label(self) -> &'static str {
        match self {
            TripStatus::Pending => "Pending",
            TripStatus::Redo => "Redo",
            TripStatus::Approved => "Approved",
            TripStatus::OnGoing => "On-going",
            TripStatus::Completed => "Completed",
        }
    }

    pub fn is_terminal(self) -> bool {
        self == TripStatus::Completed
    }
}

impl std::fmt::Display for TripStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for TripStatus {
    type Err = KoiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TripStatus::ALL
            .into_iter()
            .find(|status| status.label() == s)
            .ok_or_else(|| KoiError::invalid_status(EntityKind::Trip, s))
    }
}

/// Delivery status of a fish order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FishOrderStatus {
    #[serde(rename = "Deposited")]
    Deposited,
    #[serde(rename = "In Transit")]
    InTransit,
    #[serde(rename = "Delivering")]
    Delivering,
    #[serde(rename = "Completed")]
    Completed,
    #[serde(rename = "Canceled")]
    Canceled,
}

impl FishOrderStatus {
    pub const ALL: [FishOrderStatus; 5] = [
        FishOrderStatus::Deposited,
        FishOrderStatus::InTransit,
        FishOrderStatus::Delivering,
        FishOrderStatus::Completed,
        FishOrderStatus::Canceled,
    ];

    pub fn label(self) -> &'static str {
        match self {
            FishOrderStatus::Deposited => "Deposited",
            FishOrderStatus::InTransit => "In Transit",
            FishOrderStatus::Delivering => "Delivering",
            FishOrderStatus::Completed => "Completed",
            FishOrderStatus::Canceled => "Canceled",
        }
    }

    /// Completed and Canceled orders never move again
    pub fn is_terminal(self) -> bool {
        matches!(self, FishOrderStatus::Completed | FishOrderStatus::Canceled)
    }
}

impl std::fmt::Display for FishOrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for FishOrderStatus {
    type Err = KoiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FishOrderStatus::ALL
            .into_iter()
            .find(|status| status.label() == s)
            .ok_or_else(|| KoiError::invalid_status(EntityKind::FishOrder, s))
    }
}

/// Payment status of a fish order, independent of delivery
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum PaymentStatus {
    #[default]
    Pending,
    Deposited,
}

impl PaymentStatus {
    pub fn label(self) -> &'static str {
        match self {
            PaymentStatus::Pending => "Pending",
            PaymentStatus::Deposited => "Deposited",
        }
    }
}

impl std::fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for PaymentStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        [PaymentStatus::Pending, PaymentStatus::Deposited]
            .into_iter()
            .find(|status| status.label() == s)
            .ok_or_else(|| format!("Unknown payment status: {}", s))
    }
}

/// Account roles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    #[serde(rename = "Customer")]
    Customer,
    #[serde(rename = "Manager")]
    Manager,
    #[serde(rename = "Sales Staff")]
    SalesStaff,
    #[serde(rename = "Consulting Staff")]
    ConsultingStaff,
    #[serde(rename = "Delivery Staff")]
    DeliveryStaff,
}

impl Role {
    pub const ALL: [Role; 5] = [
        Role::Customer,
        Role::Manager,
        Role::SalesStaff,
        Role::ConsultingStaff,
        Role::DeliveryStaff,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Role::Customer => "Customer",
            Role::Manager => "Manager",
            Role::SalesStaff => "Sales Staff",
            Role::ConsultingStaff => "Consulting Staff",
            Role::DeliveryStaff => "Delivery Staff",
        }
    }

    pub fn is_staff(self) -> bool {
        !matches!(self, Role::Customer)
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for Role {
    type Err = String;

    /// Accepts the label or a folded form such as "sales-staff"
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let fold = |v: &str| -> String {
            v.chars()
                .filter(|c| !matches!(c, '-' | '_' | ' '))
                .collect::<String>()
                .to_lowercase()
        };
        let wanted = fold(s);
        Role::ALL
            .into_iter()
            .find(|role| fold(role.label()) == wanted)
            .ok_or_else(|| format!("Unknown role: {}", s))
    }
}

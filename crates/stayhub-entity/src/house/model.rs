//! House entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A house offering rooms for rent.
///
/// Listing management is a thin CRUD concern handled outside the core; the
/// entity exists because bookings, inquiries, and the two-phase delete flow
/// reference it.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct House {
    /// Unique house identifier.
    pub id: Uuid,
    /// The residential area the house is in.
    pub area_id: Uuid,
    /// The owning user, once claimed.
    pub owner_id: Option<Uuid>,
    /// House number.
    pub house_number: String,
    /// Street address.
    pub street_address: String,
    /// Whether the listing is live.
    pub is_active: bool,
    /// When the house was created.
    pub created_at: DateTime<Utc>,
    /// When the house was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Data required to create a new house.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateHouse {
    /// The residential area.
    pub area_id: Uuid,
    /// The owning user, if known.
    pub owner_id: Option<Uuid>,
    /// House number.
    pub house_number: String,
    /// Street address.
    pub street_address: String,
}

//! Residential area entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A residential area grouping houses.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ResidentialArea {
    /// Unique area identifier.
    pub id: Uuid,
    /// Area name (unique).
    pub name: String,
    /// Optional description.
    pub description: Option<String>,
    /// When the area was created.
    pub created_at: DateTime<Utc>,
}

/// Data required to create a new residential area.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateArea {
    /// Area name.
    pub name: String,
    /// Optional description.
    pub description: Option<String>,
}

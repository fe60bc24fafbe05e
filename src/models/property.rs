use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
pub struct Property {
    pub id: i64,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub property_type: PropertyType,
}

/// Stored as the snake_case variant name, serialized as the display label.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(rename_all = "snake_case")]
pub enum PropertyType {
    #[default]
    #[serde(rename = "Residential", alias = "residential")]
    Residential,
    #[serde(rename = "Commercial", alias = "commercial")]
    Commercial,
}

use crate::error::{RentalError, Result};
use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::RwLock;

/// Rental dates attached to an item while it is rented out.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rental {
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
}

/// A rentable listing.
///
/// `rental` is present exactly while `availability` is `false`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: u64,
    pub name: String,
    pub description: String,
    pub price_per_day: f64,
    pub availability: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rental: Option<Rental>,
}

/// Request body for creating an item. All fields are required on the wire;
/// they are optional here so validation can report missing ones instead of
/// failing deserialization.
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AddItem {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price_per_day: Option<f64>,
    pub availability: Option<bool>,
}

/// Partial update. Omitted fields keep their previous value.
///
/// `name` and `description` are also ignored when empty, while `pricePerDay`
/// and `availability` apply whenever present, so `0` and `false` go through.
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UpdateItem {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price_per_day: Option<f64>,
    pub availability: Option<bool>,
}

/// Request body for renting an item.
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RentItem {
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

#[async_trait]
pub trait ItemRegistry: Send + Sync {
    async fn add(&self, req: AddItem) -> Result<Item>;
    async fn list(&self) -> Result<Vec<Item>>;
    async fn get(&self, id: u64) -> Result<Item>;
    async fn update(&self, id: u64, req: UpdateItem) -> Result<Item>;
    async fn rent(&self, id: u64, req: RentItem) -> Result<Item>;
    async fn return_item(&self, id: u64) -> Result<Item>;
    async fn remove(&self, id: u64) -> Result<Item>;
}

struct Inner {
    items: Vec<Item>,
    next_id: u64,
}

/// In-memory registry, the sole stateful component of the service.
///
/// Items live in insertion order; IDs come from a counter that only ever
/// increments, so deleted IDs are never handed out again. All mutations go
/// through the write lock, which keeps them serialized under a multi-threaded
/// runtime.
pub struct MemoryRegistry {
    inner: Arc<RwLock<Inner>>,
}

impl MemoryRegistry {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(Inner {
                items: Vec::new(),
                next_id: 1,
            })),
        }
    }
}

impl Default for MemoryRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Accepts an RFC 3339 timestamp or a bare `YYYY-MM-DD` date, normalized to
/// UTC. Bare dates mean midnight UTC.
fn parse_rental_date(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    raw.parse::<NaiveDate>()
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
}

// name/description reject empty strings, pricePerDay rejects zero and NaN,
// availability only has to be present. This mirrors the per-field validation
// rules of the HTTP API.
fn validate_new_item(req: AddItem) -> Option<(String, String, f64, bool)> {
    let name = req.name.filter(|n| !n.is_empty())?;
    let description = req.description.filter(|d| !d.is_empty())?;
    let price_per_day = req.price_per_day.filter(|p| *p != 0.0 && !p.is_nan())?;
    let availability = req.availability?;
    Some((name, description, price_per_day, availability))
}

#[async_trait]
impl ItemRegistry for MemoryRegistry {
    async fn add(&self, req: AddItem) -> Result<Item> {
        let (name, description, price_per_day, availability) = validate_new_item(req)
            .ok_or_else(|| RentalError::Validation("All fields are required.".to_string()))?;

        let mut inner = self.inner.write().await;
        let item = Item {
            id: inner.next_id,
            name,
            description,
            price_per_day,
            availability,
            rental: None,
        };
        inner.next_id += 1;
        inner.items.push(item.clone());

        Ok(item)
    }

    async fn list(&self) -> Result<Vec<Item>> {
        Ok(self.inner.read().await.items.clone())
    }

    async fn get(&self, id: u64) -> Result<Item> {
        self.inner
            .read()
            .await
            .items
            .iter()
            .find(|i| i.id == id)
            .cloned()
            .ok_or(RentalError::ItemNotFound(id))
    }

    async fn update(&self, id: u64, req: UpdateItem) -> Result<Item> {
        let mut inner = self.inner.write().await;
        let item = inner
            .items
            .iter_mut()
            .find(|i| i.id == id)
            .ok_or(RentalError::ItemNotFound(id))?;

        if let Some(name) = req.name.filter(|n| !n.is_empty()) {
            item.name = name;
        }
        if let Some(description) = req.description.filter(|d| !d.is_empty()) {
            item.description = description;
        }
        if let Some(price_per_day) = req.price_per_day {
            item.price_per_day = price_per_day;
        }
        if let Some(availability) = req.availability {
            item.availability = availability;
        }

        Ok(item.clone())
    }

    async fn rent(&self, id: u64, req: RentItem) -> Result<Item> {
        let (start_raw, end_raw) = match (
            req.start_date.filter(|s| !s.is_empty()),
            req.end_date.filter(|s| !s.is_empty()),
        ) {
            (Some(start), Some(end)) => (start, end),
            _ => {
                return Err(RentalError::Validation(
                    "Both startDate and endDate are required.".to_string(),
                ))
            }
        };

        let start = parse_rental_date(&start_raw).ok_or_else(|| {
            RentalError::Validation(format!("Invalid startDate: {start_raw}"))
        })?;
        let end = parse_rental_date(&end_raw)
            .ok_or_else(|| RentalError::Validation(format!("Invalid endDate: {end_raw}")))?;

        if start >= end {
            return Err(RentalError::Validation(
                "Start date must be before end date.".to_string(),
            ));
        }

        let mut inner = self.inner.write().await;
        let item = inner
            .items
            .iter_mut()
            .find(|i| i.id == id)
            .ok_or(RentalError::ItemNotFound(id))?;

        if !item.availability {
            return Err(RentalError::Conflict("Item is already rented.".to_string()));
        }

        item.rental = Some(Rental {
            start_date: start,
            end_date: end,
        });
        item.availability = false;

        Ok(item.clone())
    }

    async fn return_item(&self, id: u64) -> Result<Item> {
        let mut inner = self.inner.write().await;
        let item = inner
            .items
            .iter_mut()
            .find(|i| i.id == id)
            .ok_or(RentalError::ItemNotFound(id))?;

        if item.availability {
            return Err(RentalError::Conflict(
                "Item is already available.".to_string(),
            ));
        }

        item.rental = None;
        item.availability = true;

        Ok(item.clone())
    }

    async fn remove(&self, id: u64) -> Result<Item> {
        let mut inner = self.inner.write().await;
        let index = inner
            .items
            .iter()
            .position(|i| i.id == id)
            .ok_or(RentalError::ItemNotFound(id))?;

        Ok(inner.items.remove(index))
    }
}

pub fn create_registry() -> Arc<dyn ItemRegistry> {
    Arc::new(MemoryRegistry::new())
}

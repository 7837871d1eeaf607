use std::collections::HashSet;
use std::path::Path;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;

/// Largest price a catalog may carry: one crore rupees.
pub const MAX_UNIT_PRICE: Decimal = Decimal::from_parts(10_000_000, 0, 0, false, 0);

/// A bookable service row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Service {
    pub id: String,
    pub name: String,
    pub unit_price: Decimal,
}

impl Service {
    pub fn new(id: impl Into<String>, name: impl Into<String>, unit_price: Decimal) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            unit_price,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    pub services: Vec<Service>,
}

impl Catalog {
    pub fn new(services: Vec<Service>) -> Result<Self, AppError> {
        let catalog = Self { services };
        catalog.validate()?;
        Ok(catalog)
    }

    pub fn from_json(s: &str) -> Result<Self, AppError> {
        let catalog: Catalog =
            serde_json::from_str(s).map_err(|e| AppError::Catalog(e.to_string()))?;
        catalog.validate()?;
        Ok(catalog)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, AppError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .map_err(|e| AppError::Catalog(format!("{}: {e}", path.display())))?;
        Self::from_json(&raw)
    }

    pub fn get(&self, id: &str) -> Option<&Service> {
        self.services.iter().find(|s| s.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Service> {
        self.services.iter()
    }

    fn validate(&self) -> Result<(), AppError> {
        let mut seen = HashSet::new();
        for service in &self.services {
            if service.id.trim().is_empty() {
                return Err(AppError::Catalog("service id must not be empty".to_string()));
            }
            if service.name.trim().is_empty() {
                return Err(AppError::Catalog(format!(
                    "service {} has no name",
                    service.id
                )));
            }
            if service.unit_price < Decimal::ZERO {
                return Err(AppError::Catalog(format!(
                    "service {} has a negative price",
                    service.id
                )));
            }
            if service.unit_price > MAX_UNIT_PRICE {
                return Err(AppError::Catalog(format!(
                    "service {} costs more than {MAX_UNIT_PRICE}",
                    service.id
                )));
            }
            if !seen.insert(service.id.as_str()) {
                return Err(AppError::Catalog(format!(
                    "duplicate service id: {}",
                    service.id
                )));
            }
        }
        Ok(())
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            services: vec![
                Service::new("svc1", "Haircut", Decimal::from(300)),
                Service::new("svc2", "Beard Trim", Decimal::from(150)),
                Service::new("svc3", "Hair Spa", Decimal::new(79950, 2)),
                Service::new("svc4", "Facial", Decimal::from(1200)),
                Service::new("svc5", "Manicure", Decimal::new(44900, 2)),
            ],
        }
    }
}

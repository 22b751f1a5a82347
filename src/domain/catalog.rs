//! Ordered service catalog, partitioned into base services and add-ons.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::entities::ServiceOffering;

#[derive(Clone, Debug, Error, PartialEq)]
pub enum CatalogError {
    #[error("offering id {0:?} already exists")]
    Conflict(String),
    #[error("offering id {0:?} not found")]
    NotFound(String),
}

/// Which half of the catalog to list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CatalogPartition {
    Base,
    AddOn,
}

/// Field-wise update for an existing offering; `None` leaves a field alone.
#[derive(Clone, Debug, Default)]
pub struct OfferingPatch {
    pub name: Option<String>,
    pub is_add_on: Option<bool>,
    pub service_minutes: Option<f64>,
    pub listed_price: Option<f64>,
}

/// Insertion-ordered collection of offerings with unique ids. A plain
/// mapping, not a workflow; callers sharing one catalog across threads are
/// responsible for serializing mutations.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ServiceCatalog {
    offerings: Vec<ServiceOffering>,
}

impl ServiceCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, offering: ServiceOffering) -> Result<(), CatalogError> {
        if self.contains(&offering.id) {
            return Err(CatalogError::Conflict(offering.id));
        }
        self.offerings.push(offering);
        Ok(())
    }

    pub fn update(&mut self, id: &str, patch: OfferingPatch) -> Result<(), CatalogError> {
        let offering = self
            .offerings
            .iter_mut()
            .find(|o| o.id == id)
            .ok_or_else(|| CatalogError::NotFound(id.to_string()))?;

        if let Some(name) = patch.name {
            offering.name = name;
        }
        if let Some(is_add_on) = patch.is_add_on {
            offering.is_add_on = is_add_on;
        }
        if let Some(minutes) = patch.service_minutes {
            offering.service_minutes = minutes;
        }
        if let Some(price) = patch.listed_price {
            offering.listed_price = price;
        }
        Ok(())
    }

    /// Removes and returns the offering, failing when the id is absent.
    /// Use [`remove_if_present`](Self::remove_if_present) for the opt-in
    /// "remove if present" semantics.
    pub fn remove(&mut self, id: &str) -> Result<ServiceOffering, CatalogError> {
        self.remove_if_present(id)
            .ok_or_else(|| CatalogError::NotFound(id.to_string()))
    }

    pub fn remove_if_present(&mut self, id: &str) -> Option<ServiceOffering> {
        let index = self.offerings.iter().position(|o| o.id == id)?;
        Some(self.offerings.remove(index))
    }

    pub fn get(&self, id: &str) -> Option<&ServiceOffering> {
        self.offerings.iter().find(|o| o.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.offerings.iter().any(|o| o.id == id)
    }

    pub fn len(&self) -> usize {
        self.offerings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.offerings.is_empty()
    }

    /// All offerings in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &ServiceOffering> {
        self.offerings.iter()
    }

    /// One partition (or all offerings), preserving relative order.
    pub fn list(&self, partition: Option<CatalogPartition>) -> Vec<&ServiceOffering> {
        self.offerings
            .iter()
            .filter(|o| match partition {
                None => true,
                Some(CatalogPartition::Base) => !o.is_add_on,
                Some(CatalogPartition::AddOn) => o.is_add_on,
            })
            .collect()
    }

    pub fn base_services(&self) -> impl Iterator<Item = &ServiceOffering> {
        self.offerings.iter().filter(|o| !o.is_add_on)
    }

    pub fn add_ons(&self) -> impl Iterator<Item = &ServiceOffering> {
        self.offerings.iter().filter(|o| o.is_add_on)
    }
}

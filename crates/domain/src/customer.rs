//! Customer entity.

use chrono::{DateTime, Utc};
use common::CustomerId;
use serde::{Deserialize, Serialize};

/// A registered customer.
///
/// Customers are created on registration and only referenced, never mutated,
/// by the order workflow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub id: CustomerId,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Customer {
    /// Creates a new customer with a generated ID.
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: CustomerId::new(),
            name: name.into(),
            email: email.into(),
            phone: None,
            address: None,
            created_at: Utc::now(),
            updated_at: None,
        }
    }

    /// Updates customer details; fields passed as `None` are left untouched.
    pub fn update_details(
        &mut self,
        name: Option<String>,
        email: Option<String>,
        phone: Option<String>,
        address: Option<String>,
    ) {
        if let Some(name) = name {
            self.name = name;
        }
        if let Some(email) = email {
            self.email = email;
        }
        if let Some(phone) = phone {
            self.phone = Some(phone);
        }
        if let Some(address) = address {
            self.address = Some(address);
        }
        self.updated_at = Some(Utc::now());
    }
}

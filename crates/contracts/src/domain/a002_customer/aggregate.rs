use crate::domain::common::{AggregateId, AggregateRoot, BaseAggregate, EntityMetadata};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CustomerId(pub Uuid);

impl CustomerId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }

    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl AggregateId for CustomerId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(CustomerId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Company that operates one or more properties (the platform's tenant)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Customer {
    #[serde(flatten)]
    pub base: BaseAggregate<CustomerId>,

    pub legal_name: String,
    pub email: String,
    pub phone: String,
    pub vat_number: String,
}

impl Customer {
    pub fn new_for_insert(dto: &CustomerDto) -> Self {
        let base = BaseAggregate::new(
            CustomerId::new_v4(),
            dto.code.clone().unwrap_or_default(),
            dto.description.clone(),
        );
        let mut customer = Self {
            base,
            legal_name: String::new(),
            email: String::new(),
            phone: String::new(),
            vat_number: String::new(),
        };
        customer.update(dto);
        customer
    }

    pub fn to_string_id(&self) -> String {
        self.base.id.as_string()
    }

    pub fn update(&mut self, dto: &CustomerDto) {
        if let Some(code) = dto.code.as_ref().filter(|c| !c.trim().is_empty()) {
            self.base.code = code.trim().to_string();
        }
        self.base.description = dto.description.trim().to_string();
        self.base.set_comment(dto.comment.clone());
        self.legal_name = dto.legal_name.trim().to_string();
        self.email = dto.email.trim().to_lowercase();
        self.phone = dto.phone.trim().to_string();
        self.vat_number = dto.vat_number.trim().to_uppercase();
    }

    pub fn validate(&self) -> Result<(), String> {
        self.base.validate_base(Self::element_name())?;
        if !self.email.is_empty() && !self.email.contains('@') {
            return Err("Email address is not valid".into());
        }
        Ok(())
    }
}

impl AggregateRoot for Customer {
    type Id = CustomerId;

    fn id(&self) -> Self::Id {
        self.base.id
    }

    fn code(&self) -> &str {
        &self.base.code
    }

    fn description(&self) -> &str {
        &self.base.description
    }

    fn metadata(&self) -> &EntityMetadata {
        &self.base.metadata
    }

    fn metadata_mut(&mut self) -> &mut EntityMetadata {
        &mut self.base.metadata
    }

    fn aggregate_index() -> &'static str {
        "a002"
    }

    fn collection_name() -> &'static str {
        "customer"
    }

    fn element_name() -> &'static str {
        "Customer"
    }

    fn list_name() -> &'static str {
        "Customers"
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CustomerDto {
    pub id: Option<String>,
    pub code: Option<String>,
    pub description: String,
    pub comment: Option<String>,
    pub legal_name: String,
    pub email: String,
    pub phone: String,
    pub vat_number: String,
}

impl From<&Customer> for CustomerDto {
    fn from(c: &Customer) -> Self {
        Self {
            id: Some(c.to_string_id()),
            code: Some(c.base.code.clone()),
            description: c.base.description.clone(),
            comment: c.base.comment.clone(),
            legal_name: c.legal_name.clone(),
            email: c.email.clone(),
            phone: c.phone.clone(),
            vat_number: c.vat_number.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_validation() {
        let mut dto = CustomerDto {
            description: "Blue Bay Hotels".into(),
            email: "Ops@BlueBay.example".into(),
            ..Default::default()
        };
        let customer = Customer::new_for_insert(&dto);
        assert_eq!(customer.email, "ops@bluebay.example");
        assert!(customer.validate().is_ok());

        dto.email = "not-an-email".into();
        assert!(Customer::new_for_insert(&dto).validate().is_err());

        dto.email.clear();
        assert!(Customer::new_for_insert(&dto).validate().is_ok());
    }

    #[test]
    fn test_name_is_required() {
        let dto = CustomerDto::default();
        assert_eq!(
            Customer::new_for_insert(&dto).validate().unwrap_err(),
            "Customer: name must not be empty"
        );
    }

    #[test]
    fn test_blank_comment_is_dropped() {
        let dto = CustomerDto {
            description: "Acme".into(),
            comment: Some("   ".into()),
            ..Default::default()
        };
        assert_eq!(Customer::new_for_insert(&dto).base.comment, None);
    }
}

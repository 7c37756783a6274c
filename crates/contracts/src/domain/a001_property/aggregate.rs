use crate::domain::common::{AggregateId, AggregateRoot, BaseAggregate, EntityMetadata};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PropertyId(pub Uuid);

impl PropertyId {
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

impl AggregateId for PropertyId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(PropertyId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Hotel or other lodging site managed by a customer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Property {
    #[serde(flatten)]
    pub base: BaseAggregate<PropertyId>,

    /// Owning customer (a002)
    pub customer_id: Option<String>,
    pub address: String,
    pub city: String,
    /// ISO 3166-1 alpha-2
    pub country: String,
    /// IANA name, e.g. "Europe/Berlin"
    pub timezone: String,
    /// ISO 4217
    pub currency: String,
    pub star_rating: Option<i32>,
}

impl Property {
    pub fn new_for_insert(dto: &PropertyDto) -> Self {
        let base = BaseAggregate::new(
            PropertyId::new_v4(),
            dto.code.clone().unwrap_or_default(),
            dto.description.clone(),
        );
        let mut property = Self {
            base,
            customer_id: None,
            address: String::new(),
            city: String::new(),
            country: String::new(),
            timezone: String::new(),
            currency: String::new(),
            star_rating: None,
        };
        property.update(dto);
        property
    }

    pub fn to_string_id(&self) -> String {
        self.base.id.as_string()
    }

    /// Apply form values
    pub fn update(&mut self, dto: &PropertyDto) {
        if let Some(code) = dto.code.as_ref().filter(|c| !c.trim().is_empty()) {
            self.base.code = code.trim().to_string();
        }
        self.base.description = dto.description.trim().to_string();
        self.base.set_comment(dto.comment.clone());
        self.customer_id = dto.customer_id.clone().filter(|c| !c.is_empty());
        self.address = dto.address.trim().to_string();
        self.city = dto.city.trim().to_string();
        self.country = dto.country.trim().to_uppercase();
        self.timezone = dto.timezone.trim().to_string();
        self.currency = dto.currency.trim().to_uppercase();
        self.star_rating = dto.star_rating;
    }

    pub fn validate(&self) -> Result<(), String> {
        self.base.validate_base(Self::element_name())?;

        if !self.country.is_empty() && !is_letters(&self.country, 2) {
            return Err("Country must be a 2-letter ISO code".into());
        }
        if !is_letters(&self.currency, 3) {
            return Err("Currency must be a 3-letter ISO code".into());
        }
        if let Some(stars) = self.star_rating {
            if !(1..=5).contains(&stars) {
                return Err("Star rating must be between 1 and 5".into());
            }
        }
        Ok(())
    }

    /// Single line for pickers: "Seaside Inn (Lisbon)"
    pub fn display_label(&self) -> String {
        if self.city.is_empty() {
            self.base.description.clone()
        } else {
            format!("{} ({})", self.base.description, self.city)
        }
    }
}

pub(crate) fn is_letters(value: &str, len: usize) -> bool {
    value.chars().count() == len && value.chars().all(|c| c.is_ascii_alphabetic())
}

impl AggregateRoot for Property {
    type Id = PropertyId;

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
        "a001"
    }

    fn collection_name() -> &'static str {
        "property"
    }

    fn element_name() -> &'static str {
        "Property"
    }

    fn list_name() -> &'static str {
        "Properties"
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// Create/update form. `id == None` creates a new property.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PropertyDto {
    pub id: Option<String>,
    pub code: Option<String>,
    pub description: String,
    pub comment: Option<String>,
    pub customer_id: Option<String>,
    pub address: String,
    pub city: String,
    pub country: String,
    pub timezone: String,
    pub currency: String,
    pub star_rating: Option<i32>,
}

impl From<&Property> for PropertyDto {
    fn from(p: &Property) -> Self {
        Self {
            id: Some(p.to_string_id()),
            code: Some(p.base.code.clone()),
            description: p.base.description.clone(),
            comment: p.base.comment.clone(),
            customer_id: p.customer_id.clone(),
            address: p.address.clone(),
            city: p.city.clone(),
            country: p.country.clone(),
            timezone: p.timezone.clone(),
            currency: p.currency.clone(),
            star_rating: p.star_rating,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dto() -> PropertyDto {
        PropertyDto {
            code: Some("PRP-001".into()),
            description: "Seaside Inn".into(),
            city: "Lisbon".into(),
            country: "pt".into(),
            timezone: "Europe/Lisbon".into(),
            currency: "eur".into(),
            star_rating: Some(4),
            ..Default::default()
        }
    }

    #[test]
    fn test_new_normalizes_codes() {
        let property = Property::new_for_insert(&dto());
        assert_eq!(property.country, "PT");
        assert_eq!(property.currency, "EUR");
        assert_eq!(property.base.code, "PRP-001");
        assert!(property.validate().is_ok());
        assert_eq!(property.display_label(), "Seaside Inn (Lisbon)");
    }

    #[test]
    fn test_validation_errors() {
        let mut d = dto();
        d.description = "  ".into();
        assert!(Property::new_for_insert(&d).validate().is_err());

        let mut d = dto();
        d.country = "PRT".into();
        assert!(Property::new_for_insert(&d).validate().is_err());

        let mut d = dto();
        d.currency = "E1R".into();
        assert!(Property::new_for_insert(&d).validate().is_err());

        let mut d = dto();
        d.star_rating = Some(6);
        assert!(Property::new_for_insert(&d).validate().is_err());
    }

    #[test]
    fn test_empty_country_is_allowed() {
        let mut d = dto();
        d.country.clear();
        d.star_rating = None;
        assert!(Property::new_for_insert(&d).validate().is_ok());
    }

    #[test]
    fn test_table_name() {
        assert_eq!(Property::full_name(), "a001_property");
    }
}

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::shared::codes::coded_enum;
use crate::shared::patch::{CreatePlan, FieldError, PatchField, PatchPlan, UniqueClaim, UniqueField};
use crate::shared::validation::Violations;

pub const NAME_MAX: usize = 100;
pub const CODE_MAX: usize = 50;
pub const ROOM_NUMBER_MAX: usize = 20;
pub const ADDRESS_MAX: usize = 255;

coded_enum! {
    pub enum PropertyStatus {
        PendingReview = 0,
        Available = 1,
        Reserved = 2,
        Rented = 3,
        UnderMaintenance = 4,
        Disabled = 5,
    }
}

coded_enum! {
    pub enum LeaseType {
        WholeRent = 0,
        SharedRent = 1,
        ShortTerm = 2,
        LongTerm = 3,
    }
}

coded_enum! {
    pub enum LeaseTerm {
        Monthly = 0,
        Quarterly = 1,
        HalfYearly = 2,
        Yearly = 3,
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    pub id: i32,
    pub region_id: Option<i32>,
    pub approved_by: Option<i32>,
    pub property_name: String,
    pub property_code: String,
    pub room_number: Option<String>,
    pub address: String,
    pub description: Option<String>,
    pub area: Decimal,
    pub bedrooms: i32,
    pub bathrooms: i32,
    pub max_tenants: i32,
    pub rent_price: Decimal,
    pub rent_deposit: Decimal,
    pub property_fee: Decimal,
    pub latitude: Decimal,
    pub longitude: Decimal,
    pub status: PropertyStatus,
    pub lease_type: LeaseType,
    pub lease_term: LeaseTerm,
    pub available_date: Option<DateTime<Utc>>,
    pub approved_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
    pub is_deleted: bool,
    pub deleted_at: Option<DateTime<Utc>>,
}

//
// ──────────────────────────────────────────────────────────
// Field rules (shared by create and patch)
// ──────────────────────────────────────────────────────────
//

fn check_text(v: &mut Violations, field: &str, value: &str, max: usize) {
    if v.required(field, value) {
        v.max_chars(field, value, max);
    }
}

fn check_non_negative(v: &mut Violations, field: &str, value: Decimal) {
    v.check(value >= Decimal::ZERO, field, "must not be negative");
}

fn check_count(v: &mut Violations, field: &str, value: i32, min: i32) {
    if value < min {
        v.push(field, format!("must be at least {min}"));
    }
}

fn check_range(v: &mut Violations, field: &str, value: Decimal, bound: i64) {
    let bound = Decimal::from(bound);
    if value < -bound || value > bound {
        v.push(field, format!("must be between -{bound} and {bound}"));
    }
}

fn clean(value: Option<String>) -> Option<String> {
    value.map(|s| s.trim().to_string()).filter(|s| !s.is_empty())
}

//
// ──────────────────────────────────────────────────────────
// Create
// ──────────────────────────────────────────────────────────
//

/// A new listing. Status always starts at `PendingReview`.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProperty {
    pub region_id: Option<i32>,
    pub approved_by: Option<i32>,
    pub property_name: String,
    pub property_code: String,
    pub room_number: Option<String>,
    pub address: String,
    pub description: Option<String>,
    pub area: Decimal,
    pub bedrooms: i32,
    pub bathrooms: i32,
    pub max_tenants: i32,
    pub rent_price: Decimal,
    pub rent_deposit: Decimal,
    pub property_fee: Decimal,
    pub latitude: Decimal,
    pub longitude: Decimal,
    pub lease_type: LeaseType,
    pub lease_term: LeaseTerm,
    pub available_date: Option<DateTime<Utc>>,
}

impl NewProperty {
    pub fn normalized(self) -> Self {
        Self {
            property_name: self.property_name.trim().to_string(),
            property_code: self.property_code.trim().to_string(),
            address: self.address.trim().to_string(),
            room_number: clean(self.room_number),
            description: clean(self.description),
            ..self
        }
    }
}

impl CreatePlan for NewProperty {
    fn validate(&self) -> Vec<FieldError> {
        let mut v = Violations::new();

        check_text(&mut v, "propertyName", &self.property_name, NAME_MAX);
        check_text(&mut v, "propertyCode", &self.property_code, CODE_MAX);
        check_text(&mut v, "address", &self.address, ADDRESS_MAX);
        if let Some(room) = &self.room_number {
            v.max_chars("roomNumber", room, ROOM_NUMBER_MAX);
        }

        check_non_negative(&mut v, "area", self.area);
        check_count(&mut v, "bedrooms", self.bedrooms, 0);
        check_count(&mut v, "bathrooms", self.bathrooms, 0);
        check_count(&mut v, "maxTenants", self.max_tenants, 1);
        check_non_negative(&mut v, "rentPrice", self.rent_price);
        check_non_negative(&mut v, "rentDeposit", self.rent_deposit);
        check_non_negative(&mut v, "propertyFee", self.property_fee);
        check_range(&mut v, "latitude", self.latitude, 90);
        check_range(&mut v, "longitude", self.longitude, 180);

        v.into_vec()
    }

    fn unique_claims(&self) -> Vec<UniqueClaim> {
        vec![UniqueClaim::new(
            UniqueField::PropertyCode,
            self.property_code.clone(),
        )]
    }
}

//
// ──────────────────────────────────────────────────────────
// Patch
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PropertyPatch {
    pub region_id: PatchField<i32>,
    pub approved_by: PatchField<i32>,
    pub property_name: PatchField<String>,
    pub property_code: PatchField<String>,
    pub room_number: PatchField<String>,
    pub address: PatchField<String>,
    pub description: PatchField<String>,
    pub area: PatchField<Decimal>,
    pub bedrooms: PatchField<i32>,
    pub bathrooms: PatchField<i32>,
    pub max_tenants: PatchField<i32>,
    pub rent_price: PatchField<Decimal>,
    pub rent_deposit: PatchField<Decimal>,
    pub property_fee: PatchField<Decimal>,
    pub latitude: PatchField<Decimal>,
    pub longitude: PatchField<Decimal>,
    pub status: PatchField<PropertyStatus>,
    pub lease_type: PatchField<LeaseType>,
    pub lease_term: PatchField<LeaseTerm>,
    pub available_date: PatchField<DateTime<Utc>>,
    /// Write time; becomes `updated_at`, and `approved_at` when an approver is set.
    pub stamped_at: Option<DateTime<Utc>>,
}

impl PropertyPatch {
    pub fn stamped(self, now: DateTime<Utc>) -> Self {
        Self {
            stamped_at: Some(now),
            ..self
        }
    }
}

impl PatchPlan<Property> for PropertyPatch {
    fn normalize(self) -> Self {
        Self {
            property_name: self.property_name.blank_as_unset(),
            property_code: self.property_code.blank_as_unset(),
            room_number: self.room_number.blank_as_unset(),
            address: self.address.blank_as_unset(),
            description: self.description.blank_as_unset(),
            ..self
        }
    }

    fn present_fields(&self) -> Vec<&'static str> {
        let mut fields = Vec::new();
        self.region_id.mark("regionId", &mut fields);
        self.approved_by.mark("approvedBy", &mut fields);
        self.property_name.mark("propertyName", &mut fields);
        self.property_code.mark("propertyCode", &mut fields);
        self.room_number.mark("roomNumber", &mut fields);
        self.address.mark("address", &mut fields);
        self.description.mark("description", &mut fields);
        self.area.mark("area", &mut fields);
        self.bedrooms.mark("bedrooms", &mut fields);
        self.bathrooms.mark("bathrooms", &mut fields);
        self.max_tenants.mark("maxTenants", &mut fields);
        self.rent_price.mark("rentPrice", &mut fields);
        self.rent_deposit.mark("rentDeposit", &mut fields);
        self.property_fee.mark("propertyFee", &mut fields);
        self.latitude.mark("latitude", &mut fields);
        self.longitude.mark("longitude", &mut fields);
        self.status.mark("status", &mut fields);
        self.lease_type.mark("leaseType", &mut fields);
        self.lease_term.mark("leaseTerm", &mut fields);
        self.available_date.mark("availableDate", &mut fields);
        fields
    }

    fn validate(&self, _current: &Property) -> Vec<FieldError> {
        let mut v = Violations::new();

        v.not_null("propertyName", &self.property_name);
        v.not_null("propertyCode", &self.property_code);
        v.not_null("address", &self.address);
        v.not_null("area", &self.area);
        v.not_null("bedrooms", &self.bedrooms);
        v.not_null("bathrooms", &self.bathrooms);
        v.not_null("maxTenants", &self.max_tenants);
        v.not_null("rentPrice", &self.rent_price);
        v.not_null("rentDeposit", &self.rent_deposit);
        v.not_null("propertyFee", &self.property_fee);
        v.not_null("latitude", &self.latitude);
        v.not_null("longitude", &self.longitude);
        v.not_null("status", &self.status);
        v.not_null("leaseType", &self.lease_type);
        v.not_null("leaseTerm", &self.lease_term);

        if let Some(name) = self.property_name.as_value() {
            v.max_chars("propertyName", name, NAME_MAX);
        }
        if let Some(code) = self.property_code.as_value() {
            v.max_chars("propertyCode", code, CODE_MAX);
        }
        if let Some(room) = self.room_number.as_value() {
            v.max_chars("roomNumber", room, ROOM_NUMBER_MAX);
        }
        if let Some(address) = self.address.as_value() {
            v.max_chars("address", address, ADDRESS_MAX);
        }
        if let Some(area) = self.area.as_value() {
            check_non_negative(&mut v, "area", *area);
        }
        if let Some(bedrooms) = self.bedrooms.as_value() {
            check_count(&mut v, "bedrooms", *bedrooms, 0);
        }
        if let Some(bathrooms) = self.bathrooms.as_value() {
            check_count(&mut v, "bathrooms", *bathrooms, 0);
        }
        if let Some(max_tenants) = self.max_tenants.as_value() {
            check_count(&mut v, "maxTenants", *max_tenants, 1);
        }
        if let Some(price) = self.rent_price.as_value() {
            check_non_negative(&mut v, "rentPrice", *price);
        }
        if let Some(deposit) = self.rent_deposit.as_value() {
            check_non_negative(&mut v, "rentDeposit", *deposit);
        }
        if let Some(fee) = self.property_fee.as_value() {
            check_non_negative(&mut v, "propertyFee", *fee);
        }
        if let Some(latitude) = self.latitude.as_value() {
            check_range(&mut v, "latitude", *latitude, 90);
        }
        if let Some(longitude) = self.longitude.as_value() {
            check_range(&mut v, "longitude", *longitude, 180);
        }

        v.into_vec()
    }

    fn unique_claims(&self) -> Vec<UniqueClaim> {
        self.property_code
            .as_value()
            .map(|code| vec![UniqueClaim::new(UniqueField::PropertyCode, code.clone())])
            .unwrap_or_default()
    }

    fn apply_to(&self, row: &mut Property) {
        self.region_id.apply_nullable(&mut row.region_id);
        self.approved_by.apply_nullable(&mut row.approved_by);
        self.property_name.apply(&mut row.property_name);
        self.property_code.apply(&mut row.property_code);
        self.room_number.apply_nullable(&mut row.room_number);
        self.address.apply(&mut row.address);
        self.description.apply_nullable(&mut row.description);
        self.area.apply(&mut row.area);
        self.bedrooms.apply(&mut row.bedrooms);
        self.bathrooms.apply(&mut row.bathrooms);
        self.max_tenants.apply(&mut row.max_tenants);
        self.rent_price.apply(&mut row.rent_price);
        self.rent_deposit.apply(&mut row.rent_deposit);
        self.property_fee.apply(&mut row.property_fee);
        self.latitude.apply(&mut row.latitude);
        self.longitude.apply(&mut row.longitude);
        self.status.apply(&mut row.status);
        self.lease_type.apply(&mut row.lease_type);
        self.lease_term.apply(&mut row.lease_term);
        self.available_date.apply_nullable(&mut row.available_date);

        if let Some(now) = self.stamped_at {
            row.updated_at = Some(now);
            match self.approved_by {
                PatchField::Value(_) => row.approved_at = Some(now),
                PatchField::Null => row.approved_at = None,
                PatchField::Unset => {}
            }
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Search
// ──────────────────────────────────────────────────────────
//

/// `keyword` matches name, address or code case-insensitively; every supplied filter must hold.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PropertyFilter {
    pub keyword: Option<String>,
    pub status: Option<PropertyStatus>,
    pub lease_type: Option<LeaseType>,
    pub lease_term: Option<LeaseTerm>,
    pub region_id: Option<i32>,
    pub min_rent: Option<Decimal>,
    pub max_rent: Option<Decimal>,
    pub min_bedrooms: Option<i32>,
}

impl PropertyFilter {
    pub fn normalized(self) -> Self {
        Self {
            keyword: clean(self.keyword),
            ..self
        }
    }

    pub fn matches(&self, p: &Property) -> bool {
        let keyword_hit = self.keyword.as_deref().is_none_or(|k| {
            let k = k.to_lowercase();
            [&p.property_name, &p.address, &p.property_code]
                .iter()
                .any(|s| s.to_lowercase().contains(&k))
        });

        keyword_hit
            && self.status.is_none_or(|s| p.status == s)
            && self.lease_type.is_none_or(|t| p.lease_type == t)
            && self.lease_term.is_none_or(|t| p.lease_term == t)
            && self.region_id.is_none_or(|r| p.region_id == Some(r))
            && self.min_rent.is_none_or(|min| p.rent_price >= min)
            && self.max_rent.is_none_or(|max| p.rent_price <= max)
            && self.min_bedrooms.is_none_or(|min| p.bedrooms >= min)
    }
}

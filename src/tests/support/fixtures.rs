use chrono::{Duration, Utc};
use rust_decimal::Decimal;

use crate::modules::announcement::application::domain::entities::{
    Announcement, AnnouncementStatus, AnnouncementType,
};
use crate::modules::appointment::application::domain::entities::{
    Appointment, AppointmentStatus, NewAppointment,
};
use crate::modules::property::application::domain::entities::{
    LeaseTerm, LeaseType, NewProperty, Property, PropertyStatus,
};
use crate::modules::user::application::domain::entities::{Gender, NewUser, User};

pub fn new_user(username: &str) -> NewUser {
    new_user_with_id_card(username, "110101199001011234")
}

pub fn new_user_with_id_card(username: &str, id_card: &str) -> NewUser {
    NewUser {
        username: username.to_string(),
        password: "secret123".to_string(),
        email: format!("{}@example.com", username.to_lowercase()),
        phone: "13800138000".to_string(),
        real_name: "Test Tenant".to_string(),
        id_card: id_card.to_string(),
        gender: "女".to_string(),
        avatar_url: None,
    }
}

/// A stored user; `insert_user` assigns the id.
pub fn seeded_user(username: &str, id_card: &str) -> User {
    let now = Utc::now();
    User {
        id: 0,
        username: username.to_string(),
        password_hash: "hashed:secret123".to_string(),
        email: Some(format!("{}@example.com", username.to_lowercase())),
        phone: Some("13800138000".to_string()),
        real_name: Some("Test Tenant".to_string()),
        id_card: Some(id_card.to_string()),
        gender: Some(Gender::Female),
        avatar_url: Some("https://cdn.example.com/avatar.png".to_string()),
        status: false,
        created_at: now,
        updated_at: now,
    }
}

pub fn new_property(code: &str) -> NewProperty {
    NewProperty {
        region_id: Some(1),
        approved_by: None,
        property_name: "Tianhe Garden 2B".to_string(),
        property_code: code.to_string(),
        room_number: Some("2B".to_string()),
        address: "88 Tianhe Road, Guangzhou".to_string(),
        description: None,
        area: Decimal::new(685, 1),
        bedrooms: 2,
        bathrooms: 1,
        max_tenants: 3,
        rent_price: Decimal::from(3200),
        rent_deposit: Decimal::from(6400),
        property_fee: Decimal::new(12050, 2),
        latitude: Decimal::new(231291, 4),
        longitude: Decimal::new(1132644, 4),
        lease_type: LeaseType::WholeRent,
        lease_term: LeaseTerm::Yearly,
        available_date: None,
    }
}

/// A stored, live listing awaiting review.
pub fn seeded_property(code: &str) -> Property {
    let input = new_property(code);
    Property {
        id: 0,
        region_id: input.region_id,
        approved_by: None,
        property_name: input.property_name,
        property_code: input.property_code,
        room_number: input.room_number,
        address: input.address,
        description: input.description,
        area: input.area,
        bedrooms: input.bedrooms,
        bathrooms: input.bathrooms,
        max_tenants: input.max_tenants,
        rent_price: input.rent_price,
        rent_deposit: input.rent_deposit,
        property_fee: input.property_fee,
        latitude: input.latitude,
        longitude: input.longitude,
        status: PropertyStatus::PendingReview,
        lease_type: input.lease_type,
        lease_term: input.lease_term,
        available_date: None,
        approved_at: None,
        created_at: Utc::now(),
        updated_at: None,
        is_deleted: false,
        deleted_at: None,
    }
}

pub fn new_appointment(user_id: i32, property_id: i32) -> NewAppointment {
    let start = Utc::now() + Duration::days(1);
    NewAppointment {
        user_id,
        property_id,
        assigned_staff_id: None,
        remarks: None,
        appointment_time: Some(start),
        appointment_end_time: Some(start + Duration::hours(1)),
    }
}

pub fn seeded_appointment(user_id: i32, property_id: i32) -> Appointment {
    let input = new_appointment(user_id, property_id);
    Appointment {
        id: 0,
        user_id,
        property_id,
        assigned_staff_id: None,
        remarks: None,
        cancel_reason: None,
        status: AppointmentStatus::Pending,
        appointment_time: input.appointment_time,
        appointment_end_time: input.appointment_end_time,
        assignment_time: None,
        created_at: Utc::now(),
        is_deleted: false,
        deleted_at: None,
    }
}

/// A live, published notice that expires in a week.
pub fn seeded_announcement(title: &str) -> Announcement {
    let now = Utc::now();
    Announcement {
        id: 0,
        title: title.to_string(),
        content: format!("{title}: details inside."),
        kind: AnnouncementType::Maintenance,
        status: AnnouncementStatus::Published,
        publish_time: Some(now),
        expire_time: Some(now + Duration::days(7)),
        is_deleted: false,
    }
}

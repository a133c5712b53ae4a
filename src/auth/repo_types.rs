use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use time::OffsetDateTime;
use uuid::Uuid;

use super::jwt::Role;

/// Delivery address, embedded in the user record and denormalized onto orders.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub country: String,
}

/// User record in the database.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String, // stored lowercased, unique
    #[serde(skip_serializing)]
    pub password_hash: String, // Argon2 hash, not exposed in JSON
    pub phone: String,
    pub role: Role,
    pub addresses: Json<Vec<Address>>,
    pub created_at: OffsetDateTime,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn password_hash_never_serialized() {
        let user = User {
            id: Uuid::new_v4(),
            name: "Alice".into(),
            email: "alice@example.com".into(),
            password_hash: "$argon2id$v=19$secret".into(),
            phone: "555-0100".into(),
            role: Role::User,
            addresses: Json(vec![]),
            created_at: OffsetDateTime::now_utc(),
        };
        let json = serde_json::to_string(&user).unwrap();
        assert!(!json.contains("argon2"));
        assert!(!json.contains("password_hash"));
        assert!(json.contains("alice@example.com"));
    }

    #[test]
    fn address_uses_camel_case_on_the_wire() {
        let addr = Address {
            street: "1 Main St".into(),
            city: "Springfield".into(),
            state: "IL".into(),
            zip_code: "62701".into(),
            country: "USA".into(),
        };
        let json = serde_json::to_string(&addr).unwrap();
        assert!(json.contains("zipCode"));
        assert!(!json.contains("zip_code"));
    }
}

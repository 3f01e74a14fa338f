//! Usuário HubSpot (`users`, tipo padrão `0-115`)

pub const INTERNAL_NAME: &str = "users";
pub const OBJECT_TYPE_ID: &str = "0-115";

pub const PROPERTY_INTERNAL_USER_ID: &str = "hs_internal_user_id";
pub const PROPERTY_OWNER_ID: &str = "hubspot_owner_id";

crm_projection!(
    /// Usuário da conta; liga o id interno (OAuth) ao owner do CRM
    User
);

impl User {
    /// Mesmo id retornado como `user_id` na introspecção do refresh token
    pub fn internal_user_id(&self) -> &str {
        self.0.property(PROPERTY_INTERNAL_USER_ID)
    }

    pub fn owner_id(&self) -> &str {
        self.0.property(PROPERTY_OWNER_ID)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crm::object::CrmObject;
    use serde_json::json;

    #[test]
    fn test_user_getters() {
        let object: CrmObject = serde_json::from_value(json!({
            "id": "9",
            "properties": {"hs_internal_user_id": "555", "hubspot_owner_id": "77"}
        }))
        .unwrap();

        let user = User::from(object);
        assert_eq!(user.internal_user_id(), "555");
        assert_eq!(user.owner_id(), "77");
        assert_eq!(user.clone().into_inner().id(), "9");
    }
}

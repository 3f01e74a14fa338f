//! Contato (`contacts`, tipo padrão `0-1`)

use crate::crm::object::AssociationLink;

pub const INTERNAL_NAME: &str = "contacts";
pub const OBJECT_TYPE_ID: &str = "0-1";

pub const PROPERTY_EMAIL: &str = "email";
pub const PROPERTY_FIRST_NAME: &str = "firstname";
pub const PROPERTY_LAST_NAME: &str = "lastname";
pub const PROPERTY_PHONE: &str = "phone";
pub const PROPERTY_ADDRESS: &str = "address";
pub const PROPERTY_CITY: &str = "city";
pub const PROPERTY_ZIP: &str = "zip";
pub const PROPERTY_CATEGORY: &str = "categorie";
pub const PROPERTY_WEDA_ID: &str = "user_id_new";
pub const PROPERTY_SPECIALITY: &str = "specialite";

/// Todas as propriedades lidas pelos getters, para montar `ObjectQuery`
pub const PROPERTIES: &[&str] = &[
    PROPERTY_EMAIL,
    PROPERTY_FIRST_NAME,
    PROPERTY_LAST_NAME,
    PROPERTY_PHONE,
    PROPERTY_ADDRESS,
    PROPERTY_CITY,
    PROPERTY_ZIP,
    PROPERTY_CATEGORY,
    PROPERTY_WEDA_ID,
    PROPERTY_SPECIALITY,
];

crm_projection!(
    /// Contato (profissional atendido pelas formações)
    Contact
);

impl Contact {
    pub fn email(&self) -> &str {
        self.0.property(PROPERTY_EMAIL)
    }

    pub fn first_name(&self) -> &str {
        self.0.property(PROPERTY_FIRST_NAME)
    }

    pub fn last_name(&self) -> &str {
        self.0.property(PROPERTY_LAST_NAME)
    }

    pub fn phone(&self) -> &str {
        self.0.property(PROPERTY_PHONE)
    }

    pub fn address(&self) -> &str {
        self.0.property(PROPERTY_ADDRESS)
    }

    pub fn city(&self) -> &str {
        self.0.property(PROPERTY_CITY)
    }

    pub fn zip(&self) -> &str {
        self.0.property(PROPERTY_ZIP)
    }

    pub fn category(&self) -> &str {
        self.0.property(PROPERTY_CATEGORY)
    }

    /// Identificador do contato no sistema Weda
    pub fn weda_id(&self) -> &str {
        self.0.property(PROPERTY_WEDA_ID)
    }

    pub fn speciality(&self) -> &str {
        self.0.property(PROPERTY_SPECIALITY)
    }

    pub fn training_associations(&self, account_id: &str) -> &[AssociationLink] {
        self.0.associations(account_id, super::training::INTERNAL_NAME)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crm::object::CrmObject;
    use serde_json::json;

    #[test]
    fn test_contact_getters() {
        let object: CrmObject = serde_json::from_value(json!({
            "id": "123",
            "properties": {
                "email": "jane@example.com",
                "firstname": "Jane",
                "lastname": null,
                "categorie": "Médecin",
                "user_id_new": "W-77",
                "specialite": "Cardiologie"
            }
        }))
        .unwrap();

        let contact = Contact::from(object);
        assert_eq!(contact.email(), "jane@example.com");
        assert_eq!(contact.first_name(), "Jane");
        assert_eq!(contact.last_name(), "");
        assert_eq!(contact.phone(), "");
        assert_eq!(contact.category(), "Médecin");
        assert_eq!(contact.weda_id(), "W-77");
        assert_eq!(contact.speciality(), "Cardiologie");
    }

    #[test]
    fn test_new_contact_carries_type() {
        let mut contact = Contact::new();
        contact
            .as_object_mut()
            .set_property(PROPERTY_CITY, Some("Lyon".to_string()));

        assert_eq!(contact.as_object().object_type_id(), OBJECT_TYPE_ID);
        assert_eq!(contact.as_object().internal_name(), INTERNAL_NAME);
        assert_eq!(contact.city(), "Lyon");
        assert_eq!(PROPERTIES.len(), 10);
    }
}

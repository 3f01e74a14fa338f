//! Empresa (`companies`, tipo padrão `0-2`)

use crate::crm::object::AssociationLink;

pub const INTERNAL_NAME: &str = "companies";
pub const OBJECT_TYPE_ID: &str = "0-2";

pub const PROPERTY_NAME: &str = "name";

crm_projection!(
    /// Empresa cliente
    Company
);

impl Company {
    pub fn name(&self) -> &str {
        self.0.property(PROPERTY_NAME)
    }

    /// Formações associadas à empresa
    pub fn training_associations(&self, account_id: &str) -> &[AssociationLink] {
        self.0.associations(account_id, super::training::INTERNAL_NAME)
    }
}

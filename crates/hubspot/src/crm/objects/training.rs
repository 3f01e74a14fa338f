//! Formação (objeto customizado `trainings`)

use crate::crm::object::{AssociationInput, AssociationLink, AssociationSpec};

pub const INTERNAL_NAME: &str = "trainings";
pub const OBJECT_TYPE_ID: &str = "2-141027445";

pub const TO_SESSION: AssociationSpec = AssociationSpec::user_defined(290);
pub const TO_CONTACT: AssociationSpec = AssociationSpec::user_defined(288);

pub const PROPERTY_NAME: &str = "training_name";
pub const PROPERTY_TRAINER: &str = "trainer";
pub const PROPERTY_TIME_SPENT: &str = "time_spent";
pub const PROPERTY_PIPELINE_STAGE: &str = "hs_pipeline_stage";

crm_projection!(
    /// Formação contratada por um contato, composta por sessões
    Training
);

impl Training {
    pub fn name(&self) -> &str {
        self.0.property(PROPERTY_NAME)
    }

    pub fn trainer(&self) -> &str {
        self.0.property(PROPERTY_TRAINER)
    }

    pub fn time_spent(&self) -> &str {
        self.0.property(PROPERTY_TIME_SPENT)
    }

    /// Id bruto do estágio do pipeline
    pub fn pipeline_stage(&self) -> &str {
        self.0.property(PROPERTY_PIPELINE_STAGE)
    }

    pub fn pipeline_stage_label(&self) -> &'static str {
        pipeline_stage_label(self.pipeline_stage())
    }

    pub fn session_associations(&self, account_id: &str) -> &[AssociationLink] {
        self.0.associations(account_id, super::session::INTERNAL_NAME)
    }

    pub fn contact_associations(&self, account_id: &str) -> &[AssociationLink] {
        self.0.associations(account_id, super::contact::INTERNAL_NAME)
    }
}

/// Associação formação → sessão, usada na criação
pub fn associate_session(session_id: impl Into<String>) -> AssociationInput {
    AssociationInput::new(session_id, TO_SESSION)
}

/// Associação formação → contato, usada na criação
pub fn associate_contact(contact_id: impl Into<String>) -> AssociationInput {
    AssociationInput::new(contact_id, TO_CONTACT)
}

/// Rótulo legível de um estágio do pipeline de formações
pub fn pipeline_stage_label(stage_id: &str) -> &'static str {
    match stage_id {
        "2767825099" => "Contrat Weda OK",
        "2031944925" => "Contrat Toutoléron ok",
        "2031944926" => "Compte actif",
        "2031944932" => "Formation programmée",
        "2031944933" => "En cours / programmation à faire",
        "2031944934" => "En cours / programmée",
        "2031944935" => "À facturer",
        "3129890016" => "Facturée",
        "" => "Non renseigné",
        _ => "Inconnu",
    }
}

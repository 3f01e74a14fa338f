//! Sessão de formação (objeto customizado `sessions`)

use crate::crm::object::{AssociationInput, AssociationLink, AssociationSpec};

pub const INTERNAL_NAME: &str = "sessions";
pub const OBJECT_TYPE_ID: &str = "2-141027484";

pub const TO_TRAINING: AssociationSpec = AssociationSpec::user_defined(291);

pub const PROPERTY_NAME: &str = "hour";
pub const PROPERTY_COMMENT: &str = "comment";
pub const PROPERTY_TRAINER: &str = "trainer";
pub const PROPERTY_START_TIME: &str = "start_time";
pub const PROPERTY_END_TIME: &str = "end_time";
pub const PROPERTY_VALIDATED: &str = "validated";
pub const PROPERTY_TRAINING_STAGE: &str = "training_stage";

crm_projection!(
    /// Sessão (aula) de uma formação
    Session
);

impl Session {
    pub fn name(&self) -> &str {
        self.0.property(PROPERTY_NAME)
    }

    pub fn comment(&self) -> &str {
        self.0.property(PROPERTY_COMMENT)
    }

    pub fn trainer(&self) -> &str {
        self.0.property(PROPERTY_TRAINER)
    }

    pub fn start_time(&self) -> &str {
        self.0.property(PROPERTY_START_TIME)
    }

    pub fn end_time(&self) -> &str {
        self.0.property(PROPERTY_END_TIME)
    }

    pub fn validated(&self) -> &str {
        self.0.property(PROPERTY_VALIDATED)
    }

    pub fn training_stage(&self) -> &str {
        self.0.property(PROPERTY_TRAINING_STAGE)
    }

    pub fn training_associations(&self, account_id: &str) -> &[AssociationLink] {
        self.0.associations(account_id, super::training::INTERNAL_NAME)
    }
}

/// Associação sessão → formação, usada na criação
pub fn associate_training(training_id: impl Into<String>) -> AssociationInput {
    AssociationInput::new(training_id, TO_TRAINING)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crm::object::CrmObject;
    use serde_json::json;

    #[test]
    fn test_session_getters() {
        let object: CrmObject = serde_json::from_value(json!({
            "id": "8",
            "properties": {
                "hour": "Session 1",
                "start_time": "2024-03-01T09:00:00Z",
                "end_time": "2024-03-01T12:00:00Z",
                "validated": "true",
                "comment": null
            },
            "associations": {
                "p42_trainings": {"results": [{"id": "501", "type": "session_to_training"}]}
            }
        }))
        .unwrap();

        let session = Session::from(object);
        assert_eq!(session.name(), "Session 1");
        assert_eq!(session.start_time(), "2024-03-01T09:00:00Z");
        assert_eq!(session.end_time(), "2024-03-01T12:00:00Z");
        assert_eq!(session.validated(), "true");
        assert_eq!(session.comment(), "");
        assert_eq!(session.training_stage(), "");
        assert_eq!(session.training_associations("42")[0].id, "501");
    }

    #[test]
    fn test_associate_training() {
        assert_eq!(associate_training("501").types[0].association_type_id, 291);
    }
}

use serde::{Deserialize, Serialize};

/// Owner (usuário responsável) retornado por `/owners/{id}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Owner {
    pub id: String,

    #[serde(default)]
    pub email: Option<String>,

    #[serde(default)]
    pub first_name: Option<String>,

    #[serde(default)]
    pub last_name: Option<String>,

    #[serde(default)]
    pub user_id: Option<i64>,

    #[serde(default)]
    pub archived: bool,
}

impl Owner {
    /// Nome completo, ignorando partes ausentes
    pub fn full_name(&self) -> String {
        [self.first_name.as_deref(), self.last_name.as_deref()]
            .into_iter()
            .flatten()
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_owner_decoding() {
        let owner: Owner = serde_json::from_value(json!({
            "id": "77",
            "email": "trainer@example.com",
            "firstName": "Marie",
            "lastName": "Curie",
            "userId": 9001,
            "archived": false,
            "createdAt": "2024-01-01T00:00:00Z"
        }))
        .unwrap();

        assert_eq!(owner.id, "77");
        assert_eq!(owner.user_id, Some(9001));
        assert_eq!(owner.full_name(), "Marie Curie");
    }

    #[test]
    fn test_owner_minimal() {
        let owner: Owner = serde_json::from_value(json!({"id": "1", "lastName": "Solo"})).unwrap();
        assert_eq!(owner.email, None);
        assert!(!owner.archived);
        assert_eq!(owner.full_name(), "Solo");
    }
}

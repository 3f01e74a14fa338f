//! Modelo genérico de objeto CRM
//!
//! Um objeto remoto (contato, empresa, formação...) é representado por um id,
//! propriedades opcionais e associações com namespace por conta.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Objeto CRM genérico
///
/// O `id` é a chave primária emitida pela plataforma: vazio antes da criação e
/// imutável depois de buscado (não há setter público).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CrmObject {
    #[serde(skip)]
    internal_name: String,

    #[serde(skip)]
    object_type_id: String,

    #[serde(default)]
    id: String,

    /// `None` = chave presente com valor null; chave ausente = propriedade não retornada
    #[serde(default)]
    properties: HashMap<String, Option<String>>,

    #[serde(default)]
    associations: HashMap<String, ObjectAssociations>,
}

/// Lista de associações de uma relação
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectAssociations {
    #[serde(default)]
    pub results: Vec<AssociationLink>,
}

/// Link para um objeto relacionado
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssociationLink {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
}

impl AssociationLink {
    pub fn new(id: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind: kind.into(),
        }
    }
}

/// Monta a chave de associação: `p<account_id>_<relação>`
pub fn association_key(account_id: &str, relation: &str) -> String {
    format!("p{}_{}", account_id, relation)
}

impl CrmObject {
    /// Cria um objeto local ainda não persistido (id vazio)
    pub fn new(internal_name: impl Into<String>, object_type_id: impl Into<String>) -> Self {
        Self {
            internal_name: internal_name.into(),
            object_type_id: object_type_id.into(),
            ..Self::default()
        }
    }

    pub(crate) fn with_type(mut self, internal_name: &str, object_type_id: &str) -> Self {
        self.internal_name = internal_name.to_string();
        self.object_type_id = object_type_id.to_string();
        self
    }

    pub fn internal_name(&self) -> &str {
        &self.internal_name
    }

    pub fn object_type_id(&self) -> &str {
        &self.object_type_id
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Mapa bruto, preservando a distinção entre null e ausente
    pub fn properties(&self) -> &HashMap<String, Option<String>> {
        &self.properties
    }

    /// Valor de uma propriedade; ausente e null retornam `""`
    pub fn property(&self, key: &str) -> &str {
        self.properties
            .get(key)
            .and_then(|value| value.as_deref())
            .unwrap_or("")
    }

    /// Define (ou anula, com `None`) uma propriedade local
    pub fn set_property(&mut self, key: impl Into<String>, value: Option<String>) {
        self.properties.insert(key.into(), value);
    }

    /// Associações de uma relação dentro do namespace da conta
    pub fn associations(&self, account_id: &str, relation: &str) -> &[AssociationLink] {
        self.associations
            .get(&association_key(account_id, relation))
            .map(|assoc| assoc.results.as_slice())
            .unwrap_or(&[])
    }

    pub fn all_associations(&self) -> &HashMap<String, ObjectAssociations> {
        &self.associations
    }

    /// Propriedades no formato do corpo de update (`null` preservado).
    /// Associações nunca fazem parte do update.
    pub fn properties_for_update(&self) -> HashMap<String, Value> {
        self.properties
            .iter()
            .map(|(key, value)| {
                let value = match value {
                    Some(v) => Value::String(v.clone()),
                    None => Value::Null,
                };
                (key.clone(), value)
            })
            .collect()
    }
}

/// Associação enviada na criação de um objeto
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssociationInput {
    pub to: AssociationTarget,
    pub types: Vec<AssociationSpec>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssociationTarget {
    pub id: String,
}

/// Categoria + id numérico do tipo de associação
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssociationSpec {
    pub association_category: AssociationCategory,
    pub association_type_id: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AssociationCategory {
    HubspotDefined,
    UserDefined,
    IntegratorDefined,
}

impl AssociationInput {
    pub fn new(to_id: impl Into<String>, spec: AssociationSpec) -> Self {
        Self {
            to: AssociationTarget { id: to_id.into() },
            types: vec![spec],
        }
    }
}

impl AssociationSpec {
    pub const fn user_defined(association_type_id: u32) -> Self {
        Self {
            association_category: AssociationCategory::UserDefined,
            association_type_id,
        }
    }
}

//! Cliente HTTP para a API CRM v3 do HubSpot

use std::collections::HashMap;

use reqwest::{Client as HttpClient, StatusCode};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::crm::auth::{bearer_header, resolve_bearer};
use crate::crm::config::CrmConfig;
use crate::crm::object::{AssociationInput, CrmObject};
use crate::crm::objects::known_internal_name;
use crate::crm::owner::Owner;
use crate::error::{HubSpotError, Result};
use crate::transport::{self, segment};

/// Parâmetros opcionais de `find_object`
///
/// Listas presentes são enviadas separadas por vírgula, mesmo vazias.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ObjectQuery {
    pub id_property: Option<String>,
    pub properties: Option<Vec<String>>,
    pub associations: Option<Vec<String>>,
}

impl ObjectQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Busca por uma propriedade única em vez do id (ex: `email`)
    pub fn id_property(mut self, id_property: impl Into<String>) -> Self {
        self.id_property = Some(id_property.into());
        self
    }

    pub fn properties<I, S>(mut self, properties: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.properties = Some(properties.into_iter().map(Into::into).collect());
        self
    }

    pub fn associations<I, S>(mut self, associations: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.associations = Some(associations.into_iter().map(Into::into).collect());
        self
    }

    pub(crate) fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();

        if let Some(id_property) = self.id_property.as_deref().filter(|p| !p.is_empty()) {
            pairs.push(("idProperty", id_property.to_string()));
        }
        if let Some(associations) = &self.associations {
            pairs.push(("associations", associations.join(",")));
        }
        if let Some(properties) = &self.properties {
            pairs.push(("properties", properties.join(",")));
        }

        pairs
    }
}

#[derive(Serialize)]
struct BatchReadRequest<'a> {
    properties: &'a [String],
    inputs: Vec<BatchInput<'a>>,
}

#[derive(Serialize)]
struct BatchInput<'a> {
    id: &'a str,
}

#[derive(Deserialize)]
struct BatchReadResponse {
    #[serde(default)]
    results: Vec<CrmObject>,
}

#[derive(Serialize)]
struct CreateObjectRequest<'a> {
    properties: &'a HashMap<String, Value>,
    associations: &'a [AssociationInput],
}

#[derive(Serialize)]
struct UpdateObjectRequest<'a> {
    properties: &'a HashMap<String, Value>,
}

/// Cliente para os endpoints `/objects` e `/owners`
///
/// Sem estado mutável: pode ser clonado e compartilhado entre tasks.
#[derive(Debug, Clone)]
pub struct CrmClient {
    http_client: HttpClient,
    config: CrmConfig,
}

impl CrmClient {
    /// Cria um novo cliente CRM a partir de uma configuração validada
    ///
    /// # Timeouts
    ///
    /// - Total: 30s
    /// - Connect: 5s
    pub fn new(config: CrmConfig) -> Result<Self> {
        let http_client = transport::default_http_client()?;
        Self::with_http_client(config, http_client)
    }

    /// Cria o cliente com um `reqwest::Client` fornecido pelo chamador
    pub fn with_http_client(config: CrmConfig, http_client: HttpClient) -> Result<Self> {
        let config = config.validate()?;
        Ok(Self { http_client, config })
    }

    pub fn account_id(&self) -> &str {
        &self.config.account_id
    }

    pub fn config(&self) -> &CrmConfig {
        &self.config
    }

    fn bearer(&self, access_token: Option<&str>) -> Result<String> {
        let token = resolve_bearer(self.config.static_token.as_deref(), access_token)?;
        Ok(bearer_header(token))
    }

    fn object_url(&self, object_type_id: &str, id: &str) -> String {
        format!(
            "{}/{}/{}",
            self.config.objects_url(),
            segment(object_type_id),
            segment(id)
        )
    }

    /// Busca um objeto por id (ou por `idProperty`)
    ///
    /// # Exemplo
    ///
    /// ```ignore
    /// let query = ObjectQuery::new()
    ///     .properties(["email", "firstname"])
    ///     .associations(["trainings"]);
    /// let contact = client.find_object(Some(&token), "0-1", "123", &query).await?;
    /// ```
    pub async fn find_object(
        &self,
        access_token: Option<&str>,
        object_type_id: &str,
        id: &str,
        query: &ObjectQuery,
    ) -> Result<CrmObject> {
        let authorization = self.bearer(access_token)?;
        let endpoint = self.object_url(object_type_id, id);

        let request = self
            .http_client
            .get(&endpoint)
            .header("Authorization", authorization)
            .query(&query.to_query_pairs());

        let response = transport::send(&endpoint, "GET", request)
            .await?
            .expect_status(StatusCode::OK)?;

        let object: CrmObject = response.json()?;
        Ok(tag_object(object, object_type_id))
    }

    /// Busca vários objetos do mesmo tipo em uma única chamada
    ///
    /// O retorno segue a ordem de `ids`. Se a plataforma devolver uma contagem
    /// diferente da pedida, ou omitir algum id, o resultado é um `ApiError` 404.
    pub async fn find_batch(
        &self,
        access_token: Option<&str>,
        object_type_id: &str,
        ids: &[String],
        properties: &[String],
    ) -> Result<Vec<CrmObject>> {
        if ids.is_empty() {
            return Err(HubSpotError::validation_error("objects must not be empty"));
        }

        let authorization = self.bearer(access_token)?;
        let endpoint = format!(
            "{}/{}/batch/read",
            self.config.objects_url(),
            segment(object_type_id)
        );

        let body = BatchReadRequest {
            properties,
            inputs: ids.iter().map(|id| BatchInput { id }).collect(),
        };

        let request = self
            .http_client
            .post(&endpoint)
            .header("Authorization", authorization)
            .json(&body);

        let response = transport::send(&endpoint, "POST", request)
            .await?
            .expect_status(StatusCode::OK)?;

        let batch: BatchReadResponse = response.json()?;

        if batch.results.len() != ids.len() {
            tracing::warn!(
                "Batch read returned {} objects, expected {} {{endpoint={}}}",
                batch.results.len(),
                ids.len(),
                endpoint
            );
            return Err(HubSpotError::ApiError {
                endpoint,
                status: StatusCode::NOT_FOUND.as_u16(),
                body: format!(
                    "expected {} objects but got {}",
                    ids.len(),
                    batch.results.len()
                ),
            });
        }

        let by_id: HashMap<&str, &CrmObject> = batch
            .results
            .iter()
            .map(|object| (object.id(), object))
            .collect();

        let mut objects = Vec::with_capacity(ids.len());
        for id in ids {
            let object = by_id.get(id.as_str()).ok_or_else(|| HubSpotError::ApiError {
                endpoint: endpoint.clone(),
                status: StatusCode::NOT_FOUND.as_u16(),
                body: format!("object {} missing from batch response", id),
            })?;
            objects.push(tag_object((*object).clone(), object_type_id));
        }

        Ok(objects)
    }

    /// Busca o owner de um objeto
    pub async fn find_object_owner(&self, access_token: Option<&str>, owner_id: &str) -> Result<Owner> {
        let authorization = self.bearer(access_token)?;
        let endpoint = format!("{}/{}", self.config.owners_url(), segment(owner_id));

        let request = self
            .http_client
            .get(&endpoint)
            .header("Authorization", authorization);

        let response = transport::send(&endpoint, "GET", request)
            .await?
            .expect_status(StatusCode::OK)?;

        response.json()
    }

    /// Cria um objeto com suas associações
    ///
    /// Apenas 201 é sucesso; qualquer outro status (inclusive 200) é `ApiError`.
    pub async fn create_object(
        &self,
        access_token: Option<&str>,
        object_type_id: &str,
        properties: &HashMap<String, Value>,
        associations: &[AssociationInput],
    ) -> Result<()> {
        let authorization = self.bearer(access_token)?;
        let endpoint = format!("{}/{}", self.config.objects_url(), segment(object_type_id));

        let body = CreateObjectRequest {
            properties,
            associations,
        };

        let request = self
            .http_client
            .post(&endpoint)
            .header("Authorization", authorization)
            .json(&body);

        transport::send(&endpoint, "POST", request)
            .await?
            .expect_status(StatusCode::CREATED)?;

        tracing::info!("Created {} object {{endpoint={}}}", object_type_id, endpoint);
        Ok(())
    }

    /// Atualiza as propriedades de um objeto
    ///
    /// O corpo contém somente `properties`; associações não são alteradas aqui.
    pub async fn update_object(
        &self,
        access_token: Option<&str>,
        object_type_id: &str,
        id: &str,
        id_property: Option<&str>,
        properties: &HashMap<String, Value>,
    ) -> Result<()> {
        let authorization = self.bearer(access_token)?;
        let endpoint = self.object_url(object_type_id, id);

        let mut request = self
            .http_client
            .patch(&endpoint)
            .header("Authorization", authorization)
            .json(&UpdateObjectRequest { properties });

        if let Some(id_property) = id_property.filter(|p| !p.is_empty()) {
            request = request.query(&[("idProperty", id_property)]);
        }

        transport::send(&endpoint, "PATCH", request)
            .await?
            .expect_status(StatusCode::OK)?;

        tracing::debug!("Updated {} object {}", object_type_id, id);
        Ok(())
    }
}

fn tag_object(object: CrmObject, object_type_id: &str) -> CrmObject {
    let internal_name = known_internal_name(object_type_id).unwrap_or_default();
    object.with_type(internal_name, object_type_id)
}

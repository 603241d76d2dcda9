use crate::error::SourceError;
use crate::store::DocumentStore;
use anime_sync_models::CanonicalDoc;
use async_trait::async_trait;
use chrono::{SecondsFormat, Utc};
use reqwest::{Client, StatusCode};
use serde_json::{json, Map, Value};
use tracing::debug;

const FIRESTORE_BASE: &str = "https://firestore.googleapis.com/v1";

/// Firestore REST client for the canonical-document collection. Consumes an
/// already-resolved project id and OAuth access token; token minting happens
/// outside this binary.
pub struct FirestoreStore {
    http: Client,
    project_id: String,
    collection: String,
    access_token: String,
}

impl FirestoreStore {
    pub fn new(
        project_id: impl Into<String>,
        collection: impl Into<String>,
        access_token: impl Into<String>,
    ) -> Result<Self, SourceError> {
        Ok(Self {
            http: Client::builder().build()?,
            project_id: project_id.into(),
            collection: collection.into(),
            access_token: access_token.into(),
        })
    }

    fn doc_url(&self, id: &str) -> String {
        format!(
            "{FIRESTORE_BASE}/projects/{}/databases/(default)/documents/{}/{}",
            self.project_id, self.collection, id
        )
    }
}

#[async_trait]
impl DocumentStore for FirestoreStore {
    async fn exists(&self, id: &str) -> Result<bool, SourceError> {
        let response = self
            .http
            .get(self.doc_url(id))
            .bearer_auth(&self.access_token)
            .send()
            .await?;

        match response.status() {
            StatusCode::OK => Ok(true),
            StatusCode::NOT_FOUND => Ok(false),
            StatusCode::TOO_MANY_REQUESTS => Err(SourceError::RateLimited { attempts: 1 }),
            status => {
                let body = response.text().await.unwrap_or_default();
                Err(SourceError::Http {
                    status: status.as_u16(),
                    body,
                })
            }
        }
    }

    async fn upsert(&self, id: &str, doc: &CanonicalDoc) -> Result<(), SourceError> {
        let plain = serde_json::to_value(doc)?;
        let fields = match &plain {
            Value::Object(map) => map,
            _ => return Err(SourceError::Api("document did not serialize to an object".into())),
        };

        let mut encoded = match encode_fields(fields) {
            Value::Object(map) => map,
            _ => unreachable!("encode_fields maps objects to objects"),
        };
        // The write timestamp is stamped here, typed as a Firestore
        // timestamp rather than a string.
        let now = Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true);
        encoded.insert("updatedAt".to_string(), json!({ "timestampValue": now }));

        // PATCH with an explicit update mask gives set-with-merge semantics:
        // unlisted fields on an existing document survive the write.
        let mut request = self
            .http
            .patch(self.doc_url(id))
            .bearer_auth(&self.access_token);
        for field in encoded.keys() {
            request = request.query(&[("updateMask.fieldPaths", field.as_str())]);
        }

        let body = json!({ "fields": encoded });
        let response = request.json(&body).send().await?;
        let status = response.status();

        if status == StatusCode::TOO_MANY_REQUESTS {
            return Err(SourceError::RateLimited { attempts: 1 });
        }
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(SourceError::Http {
                status: status.as_u16(),
                body: text,
            });
        }

        debug!(id, "upserted canonical document");
        Ok(())
    }
}

fn encode_fields(map: &Map<String, Value>) -> Value {
    let fields: Map<String, Value> = map
        .iter()
        .map(|(k, v)| (k.clone(), encode_value(v)))
        .collect();
    Value::Object(fields)
}

/// Translate plain JSON into Firestore's typed value representation.
fn encode_value(value: &Value) -> Value {
    match value {
        Value::Null => json!({ "nullValue": null }),
        Value::Bool(b) => json!({ "booleanValue": b }),
        Value::Number(n) => {
            if n.is_i64() || n.is_u64() {
                json!({ "integerValue": n.to_string() })
            } else {
                json!({ "doubleValue": n })
            }
        }
        Value::String(s) => json!({ "stringValue": s }),
        Value::Array(items) => {
            let values: Vec<Value> = items.iter().map(encode_value).collect();
            json!({ "arrayValue": { "values": values } })
        }
        Value::Object(map) => json!({ "mapValue": { "fields": encode_fields(map) } }),
    }
}

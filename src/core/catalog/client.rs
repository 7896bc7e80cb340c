use std::marker::PhantomData;

use super::models::{CatalogFields, CatalogItem, ItemId};
use crate::core::auth::AuthorizedClient;
use crate::core::error::ApiError;
use crate::core::http::{ApiRequest, ApiResponse, HttpClient};
use crate::core::session::SessionStore;

/// Decode a collection record by record; records that do not decode are
/// logged and skipped so one bad row does not hide the whole catalog.
fn decode_list<T: CatalogItem>(response: &ApiResponse) -> Result<Vec<T>, ApiError> {
    let records: Vec<serde_json::Value> = response.json()?;
    Ok(records
        .into_iter()
        .filter_map(|record| match serde_json::from_value::<T>(record) {
            Ok(item) => Some(item),
            Err(e) => {
                let resource = T::RESOURCE;
                tracing::warn!(%resource, "skipping undecodable record: {}", e);
                None
            }
        })
        .collect())
}

/// Admin-side fetcher for one catalog; every call carries the session token.
#[derive(Debug, Clone)]
pub struct CatalogClient<T, H, S> {
    auth: AuthorizedClient<H, S>,
    _item: PhantomData<fn() -> T>,
}

impl<T: CatalogItem, H: HttpClient, S: SessionStore> CatalogClient<T, H, S> {
    pub fn new(http: H, store: S) -> Self {
        Self {
            auth: AuthorizedClient::new(http, store),
            _item: PhantomData,
        }
    }

    pub async fn list(&self) -> Result<Vec<T>, ApiError> {
        let response = self
            .auth
            .send(ApiRequest::get(T::RESOURCE.collection_path()))
            .await?;
        decode_list(&response)
    }

    pub async fn create(&self, fields: T::Fields) -> Result<T, ApiError> {
        fields.validate()?;
        let request =
            ApiRequest::post(T::RESOURCE.collection_path()).multipart(fields.into_parts());
        self.auth.send(request).await?.json()
    }

    pub async fn update(&self, id: ItemId, fields: T::Fields) -> Result<T, ApiError> {
        fields.validate()?;
        let request = ApiRequest::put(T::RESOURCE.item_path(id)).multipart(fields.into_parts());
        self.auth.send(request).await?.json()
    }

    pub async fn delete(&self, id: ItemId) -> Result<(), ApiError> {
        self.auth
            .send(ApiRequest::delete(T::RESOURCE.item_path(id)))
            .await?;
        Ok(())
    }
}

/// Anonymous fetcher used by the public catalog pages
#[derive(Debug, Clone)]
pub struct PublicCatalog<T, H> {
    http: H,
    _item: PhantomData<fn() -> T>,
}

impl<T: CatalogItem, H: HttpClient> PublicCatalog<T, H> {
    pub fn new(http: H) -> Self {
        Self {
            http,
            _item: PhantomData,
        }
    }

    pub async fn list(&self) -> Result<Vec<T>, ApiError> {
        let response = self
            .http
            .send(ApiRequest::get(T::RESOURCE.collection_path()))
            .await?
            .into_result()?;
        decode_list(&response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog::{Piercing, PiercingFields, Tattoo};
    use crate::core::http::{Body, Method};
    use crate::core::session::{MemorySessionStore, Session};
    use crate::core::test_support::ScriptedHttp;
    use serde_json::json;

    const PIERCINGS: &str = "/api/piercs/piercings/";

    fn store() -> MemorySessionStore {
        MemorySessionStore::new(Session::authenticated("tok".into(), Some("ref".into())))
    }

    #[tokio::test]
    async fn test_list_sends_bearer_and_decodes() {
        let http = ScriptedHttp::new().reply_json(
            200,
            json!([
                { "id": 1, "name": "Septum", "description": "", "price": "20.00", "image": null },
                { "id": 2, "name": "Helix", "description": "", "price": 15, "image": null }
            ]),
        );
        let store = store();
        let client: CatalogClient<Piercing, _, _> = CatalogClient::new(&http, &store);

        let items = client.list().await.unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[1].name, "Helix");
        assert_eq!(http.requests()[0].bearer.as_deref(), Some("tok"));
    }

    #[tokio::test]
    async fn test_create_posts_multipart() {
        let http = ScriptedHttp::new().reply_json(
            201,
            json!({ "id": 9, "name": "Tragus", "description": "d", "price": "18.00" }),
        );
        let store = store();
        let client: CatalogClient<Piercing, _, _> = CatalogClient::new(&http, &store);

        let created = client
            .create(PiercingFields {
                name: "Tragus".into(),
                description: "d".into(),
                price: "18".into(),
                image: None,
            })
            .await
            .unwrap();
        assert_eq!(created.id, ItemId(9));

        let request = &http.requests()[0];
        assert_eq!(request.method, Method::Post);
        assert_eq!(request.path, PIERCINGS);
        assert!(matches!(&request.body, Body::Multipart(parts) if parts.len() == 3));
    }

    #[tokio::test]
    async fn test_invalid_fields_are_rejected_locally() {
        let http = ScriptedHttp::new();
        let store = store();
        let client: CatalogClient<Piercing, _, _> = CatalogClient::new(&http, &store);

        let result = client.update(ItemId(1), PiercingFields::default()).await;
        assert!(matches!(result, Err(ApiError::Validation(_))));
        assert!(http.requests().is_empty());
    }

    #[tokio::test]
    async fn test_update_puts_item_path() {
        let http = ScriptedHttp::new().reply_json(
            200,
            json!({ "id": 4, "name": "Ancla", "description": "", "date": "2024-01-02" }),
        );
        let store = store();
        let client: CatalogClient<Tattoo, _, _> = CatalogClient::new(&http, &store);

        let fields = crate::core::catalog::TattooFields::draft(
            chrono::NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
        );
        let updated = client.update(ItemId(4), fields).await.unwrap();
        assert_eq!(updated.name, "Ancla");
        assert_eq!(http.count(Method::Put, "/api/tatts/tattoos/4/"), 1);
    }

    #[tokio::test]
    async fn test_delete_not_found_surfaces_error() {
        let http = ScriptedHttp::new().reply(404, "");
        let store = store();
        let client: CatalogClient<Tattoo, _, _> = CatalogClient::new(&http, &store);

        assert_eq!(client.delete(ItemId(77)).await, Err(ApiError::NotFound));
        assert_eq!(http.count(Method::Delete, "/api/tatts/tattoos/77/"), 1);
    }

    #[tokio::test]
    async fn test_public_list_is_anonymous() {
        let http = ScriptedHttp::new().reply_json(200, json!([]));
        let catalog: PublicCatalog<Tattoo, _> = PublicCatalog::new(&http);

        assert_eq!(catalog.list().await.unwrap(), Vec::<Tattoo>::new());
        assert_eq!(http.requests()[0].bearer, None);
    }

    #[tokio::test]
    async fn test_public_list_skips_bad_records() {
        let http = ScriptedHttp::new().reply_json(
            200,
            json!([
                { "id": 1, "name": "Rosa", "date": "2024-05-01" },
                { "id": 2, "name": "Sin fecha", "date": null },
                { "id": 3, "name": "Lobo", "date": "2024-06-02T12:00:00Z" }
            ]),
        );
        let catalog: PublicCatalog<Tattoo, _> = PublicCatalog::new(&http);

        let ids: Vec<_> = catalog.list().await.unwrap().iter().map(|t| t.id).collect();
        assert_eq!(ids, [ItemId(1), ItemId(3)]);
    }

    #[tokio::test]
    async fn test_list_with_non_array_body_is_decode_error() {
        let http = ScriptedHttp::new().reply_json(200, json!({ "detail": "oops" }));
        let store = store();
        let client: CatalogClient<Piercing, _, _> = CatalogClient::new(&http, &store);
        assert!(matches!(client.list().await, Err(ApiError::Decode(_))));
    }

    #[tokio::test]
    async fn test_public_list_error_status() {
        let http = ScriptedHttp::new().reply(500, "");
        let catalog: PublicCatalog<Piercing, _> = PublicCatalog::new(&http);
        assert_eq!(catalog.list().await, Err(ApiError::Server(500)));
    }
}

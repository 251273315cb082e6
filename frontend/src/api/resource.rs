use reqwest::Method;
use serde::{de::DeserializeOwned, Serialize};

use super::{
    client::ApiClient,
    types::{ApiError, Paginated},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyEncoding {
    Json,
    /// `multipart/form-data`, for viewsets that accept file uploads.
    Multipart,
}

/// A DRF viewset: collection path with trailing slash, items at `<path><id>/`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resource {
    pub path: &'static str,
    pub encoding: BodyEncoding,
}

impl Resource {
    pub const fn json(path: &'static str) -> Self {
        Self {
            path,
            encoding: BodyEncoding::Json,
        }
    }

    pub const fn multipart(path: &'static str) -> Self {
        Self {
            path,
            encoding: BodyEncoding::Multipart,
        }
    }

    pub fn item_path(&self, id: i64) -> String {
        format!("{}{}/", self.path, id)
    }
}

pub const CUSTOMERS: Resource = Resource::multipart("/api/customers/");
pub const EMPLOYEES: Resource = Resource::multipart("/api/employees/");
pub const VEHICLES: Resource = Resource::multipart("/api/vehicles/");
pub const GARAGES: Resource = Resource::json("/api/garages/");
pub const SERVICES: Resource = Resource::json("/api/services/");
pub const APPOINTMENTS: Resource = Resource::json("/api/appointments/");
pub const CATEGORIES: Resource = Resource::json("/api/categories/");
pub const SUPPLIERS: Resource = Resource::json("/api/suppliers/");
pub const PARTS: Resource = Resource::json("/api/inventory/parts/");

impl ApiClient {
    async fn write_resource<B, T>(
        &self,
        method: Method,
        resource: Resource,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        match resource.encoding {
            BodyEncoding::Json => self.send_json(method, path, body).await,
            BodyEncoding::Multipart => self.send_multipart(method, path, body).await,
        }
    }

    pub(crate) async fn list_resource<T, Q>(
        &self,
        resource: Resource,
        query: &Q,
    ) -> Result<Paginated<T>, ApiError>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        self.get_json_with_query(resource.path, query).await
    }

    pub(crate) async fn create_resource<B, T>(&self, resource: Resource, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.write_resource(Method::POST, resource, resource.path, body).await
    }

    pub(crate) async fn retrieve_resource<T: DeserializeOwned>(
        &self,
        resource: Resource,
        id: i64,
    ) -> Result<T, ApiError> {
        self.get_json(&resource.item_path(id)).await
    }

    pub(crate) async fn update_resource<B, T>(
        &self,
        resource: Resource,
        id: i64,
        body: &B,
    ) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.write_resource(Method::PUT, resource, &resource.item_path(id), body)
            .await
    }

    pub(crate) async fn delete_resource(&self, resource: Resource, id: i64) -> Result<(), ApiError> {
        self.delete(&resource.item_path(id)).await
    }
}

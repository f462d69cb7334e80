//! # Generic Client
//!
//! This module defines the generic client for one resource collection.

use crate::entity::ApiEntity;
use crate::envelope::unwrap_list;
use crate::error::{ApiError, DecodeError};
use crate::message::{ApiRequest, Method};
use crate::transport::Transport;
use serde::Serialize;
use serde_json::Value;
use std::fmt::Debug;
use std::marker::PhantomData;
use std::sync::Arc;
use tracing::debug;

/// ## ResourceClient
///
/// The `ResourceClient<T>` provides a type-safe, async CRUD API over the
/// collection of `T: ApiEntity`. Each call builds one [`ApiRequest`], hands it to
/// the shared [`Transport`] and decodes the answer into `T`.
///
/// Entity-returning calls yield `Ok(None)` when a success response carries no
/// JSON body: the request went through, there is just nothing to decode.
///
/// * **Cloneable** – holds only an `Arc` to the transport.
/// * **Stateless** – nothing is cached between calls; every call re-fetches.
/// * **Generic** – works with any entity that implements `ApiEntity`.
pub struct ResourceClient<T: ApiEntity> {
    transport: Arc<dyn Transport>,
    _entity: PhantomData<fn() -> T>,
}

impl<T: ApiEntity> Clone for ResourceClient<T> {
    fn clone(&self) -> Self {
        Self {
            transport: Arc::clone(&self.transport),
            _entity: PhantomData,
        }
    }
}

impl<T: ApiEntity> ResourceClient<T> {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self {
            transport,
            _entity: PhantomData,
        }
    }

    /// Base URL of the underlying transport.
    pub fn base_url(&self) -> &str {
        self.transport.base_url()
    }

    /// `GET {collection}/`, accepting a bare array or a `results` envelope.
    pub async fn list(&self) -> Result<Vec<T>, ApiError> {
        let body = self
            .transport
            .send(ApiRequest::new(Method::GET, T::collection_path()))
            .await?;
        let items = unwrap_list(body)?;
        debug!(entity = T::NAME, count = items.len(), "Listed");
        Ok(items)
    }

    /// `GET {collection}/{id}/`.
    pub async fn get(&self, id: T::Id) -> Result<Option<T>, ApiError> {
        let body = self
            .transport
            .send(ApiRequest::new(Method::GET, T::item_path(id)))
            .await?;
        decode_entity(body)
    }

    /// `POST {collection}/` with `payload` as the JSON body.
    pub async fn create<P>(&self, payload: &P) -> Result<Option<T>, ApiError>
    where
        P: Serialize + Debug + Sync + ?Sized,
    {
        let request =
            ApiRequest::new(Method::POST, T::collection_path()).with_body(encode(payload)?);
        decode_entity(self.transport.send(request).await?)
    }

    /// `PATCH {collection}/{id}/` with a partial `update` body.
    pub async fn update<P>(&self, id: T::Id, update: &P) -> Result<Option<T>, ApiError>
    where
        P: Serialize + Debug + Sync + ?Sized,
    {
        let request = ApiRequest::new(Method::PATCH, T::item_path(id)).with_body(encode(update)?);
        decode_entity(self.transport.send(request).await?)
    }

    /// `DELETE {collection}/{id}/`. Any response body is ignored.
    pub async fn delete(&self, id: T::Id) -> Result<(), ApiError> {
        self.transport
            .send(ApiRequest::new(Method::DELETE, T::item_path(id)))
            .await?;
        Ok(())
    }
}

fn encode<P: Serialize + ?Sized>(payload: &P) -> Result<Value, ApiError> {
    serde_json::to_value(payload).map_err(|e| DecodeError::Payload(e).into())
}

fn decode_entity<T: ApiEntity>(body: Option<Value>) -> Result<Option<T>, ApiError> {
    match body {
        Some(body) => Ok(Some(
            serde_json::from_value(body).map_err(DecodeError::Payload)?,
        )),
        None => {
            debug!(entity = T::NAME, "Success without a body");
            Ok(None)
        }
    }
}

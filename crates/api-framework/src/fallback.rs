//! # Fallback Resolution
//!
//! Read views never show a hard failure when a bundled dataset exists for the
//! resource. After a read call completes, a [`FallbackPolicy`] decides what the
//! caller should display:
//!
//! | Live result | Bundled dataset | Displayed | [`DataSource`] |
//! |-------------|-----------------|-----------|----------------|
//! | non-empty | any | live items (optionally sorted) | `Live` |
//! | empty | non-empty | bundled dataset, in full | `Fallback` |
//! | empty | empty | nothing | `Live` |
//! | error | non-empty | bundled dataset, in full | `Fallback` |
//! | error | empty | nothing | `Unavailable` |
//!
//! Live and bundled data are never merged. The policy only accepts read results;
//! write calls return their [`ApiError`] to the caller untouched.

use crate::error::ApiError;
use std::cmp::Ordering;
use tracing::warn;

/// Where the data of a [`Resolution`] came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataSource {
    /// Returned by the API.
    Live,
    /// Substituted from the bundled dataset.
    Fallback,
    /// The call failed and nothing could be substituted.
    Unavailable,
}

/// The outcome of resolving one read call.
#[derive(Debug)]
pub struct Resolution<D> {
    pub data: D,
    pub source: DataSource,
    /// The error that was suppressed or left the view unavailable.
    pub error: Option<ApiError>,
}

impl<D> Resolution<D> {
    /// True when the view should offer a retry instead of content.
    pub fn needs_retry(&self) -> bool {
        self.source == DataSource::Unavailable
    }

    pub fn is_live(&self) -> bool {
        self.source == DataSource::Live
    }

    /// Transforms the data, keeping source and error.
    pub fn map<E>(self, f: impl FnOnce(D) -> E) -> Resolution<E> {
        Resolution {
            data: f(self.data),
            source: self.source,
            error: self.error,
        }
    }
}

/// The fallback rule for one resource, parameterized by its bundled dataset.
#[derive(Debug, Clone)]
pub struct FallbackPolicy<T> {
    resource: &'static str,
    dataset: Vec<T>,
    live_order: Option<fn(&T, &T) -> Ordering>,
}

impl<T: Clone> FallbackPolicy<T> {
    /// A policy substituting `dataset` for empty or failed reads of `resource`.
    pub fn new(resource: &'static str, dataset: Vec<T>) -> Self {
        Self {
            resource,
            dataset,
            live_order: None,
        }
    }

    /// A policy with nothing to substitute; failures leave the view unavailable.
    pub fn none(resource: &'static str) -> Self {
        Self::new(resource, Vec::new())
    }

    /// Stable-sorts non-empty live results with `order` before display.
    ///
    /// The bundled dataset is always shown in its own order.
    pub fn sort_live_by(mut self, order: fn(&T, &T) -> Ordering) -> Self {
        self.live_order = Some(order);
        self
    }

    pub fn dataset(&self) -> &[T] {
        &self.dataset
    }

    /// Resolves a list read.
    pub fn resolve(&self, result: Result<Vec<T>, ApiError>) -> Resolution<Vec<T>> {
        match result {
            Ok(mut items) if !items.is_empty() => {
                if let Some(order) = self.live_order {
                    items.sort_by(order);
                }
                Resolution {
                    data: items,
                    source: DataSource::Live,
                    error: None,
                }
            }
            Ok(items) if self.dataset.is_empty() => Resolution {
                data: items,
                source: DataSource::Live,
                error: None,
            },
            Ok(_) => {
                warn!(resource = self.resource, "Empty response, using bundled data");
                self.substitute(None)
            }
            Err(e) if self.dataset.is_empty() => {
                warn!(resource = self.resource, error = %e, "Read failed, no bundled data");
                Resolution {
                    data: Vec::new(),
                    source: DataSource::Unavailable,
                    error: Some(e),
                }
            }
            Err(e) => {
                warn!(resource = self.resource, error = %e, "Read failed, using bundled data");
                self.substitute(Some(e))
            }
        }
    }

    /// Resolves a single-item read, falling back to the bundled item selected by `matches`.
    ///
    /// A success without an entity is treated like an empty list: the bundled
    /// item is shown if there is one, otherwise nothing, without an error.
    pub fn resolve_one(
        &self,
        result: Result<Option<T>, ApiError>,
        matches: impl Fn(&T) -> bool,
    ) -> Resolution<Option<T>> {
        let error = match result {
            Ok(Some(item)) => {
                return Resolution {
                    data: Some(item),
                    source: DataSource::Live,
                    error: None,
                }
            }
            Ok(None) => None,
            Err(e) => Some(e),
        };
        let bundled = self.dataset.iter().find(|&item| matches(item));
        match (bundled, error) {
            (Some(item), error) => {
                match &error {
                    Some(e) => {
                        warn!(resource = self.resource, error = %e, "Read failed, using bundled item")
                    }
                    None => warn!(resource = self.resource, "Empty response, using bundled item"),
                }
                Resolution {
                    data: Some(item.clone()),
                    source: DataSource::Fallback,
                    error,
                }
            }
            (None, None) => Resolution {
                data: None,
                source: DataSource::Live,
                error: None,
            },
            (None, Some(e)) => {
                warn!(resource = self.resource, error = %e, "Read failed, no bundled item");
                Resolution {
                    data: None,
                    source: DataSource::Unavailable,
                    error: Some(e),
                }
            }
        }
    }

    fn substitute(&self, error: Option<ApiError>) -> Resolution<Vec<T>> {
        Resolution {
            data: self.dataset.clone(),
            source: DataSource::Fallback,
            error,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Post {
        id: u32,
        day: u32,
    }

    fn post(id: u32, day: u32) -> Post {
        Post { id, day }
    }

    fn newest_first(a: &Post, b: &Post) -> Ordering {
        b.day.cmp(&a.day)
    }

    fn policy() -> FallbackPolicy<Post> {
        FallbackPolicy::new("posts", vec![post(100, 1), post(101, 9), post(102, 5)])
            .sort_live_by(newest_first)
    }

    #[test]
    fn live_data_is_sorted_stably() {
        let live = vec![post(1, 3), post(2, 7), post(3, 3), post(4, 7), post(5, 1)];
        let resolved = policy().resolve(Ok(live));

        assert_eq!(resolved.source, DataSource::Live);
        let ids: Vec<u32> = resolved.data.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![2, 4, 1, 3, 5]);
        assert!(resolved.error.is_none());
    }

    #[test]
    fn empty_live_result_uses_bundled_data_in_order() {
        let resolved = policy().resolve(Ok(Vec::new()));
        assert_eq!(resolved.source, DataSource::Fallback);
        assert_eq!(resolved.data, policy().dataset().to_vec());
        assert!(!resolved.needs_retry());
    }

    #[test]
    fn failure_uses_bundled_data_and_keeps_error() {
        let resolved = policy().resolve(Err(ApiError::Timeout));
        assert_eq!(resolved.source, DataSource::Fallback);
        assert_eq!(resolved.data, policy().dataset().to_vec());
        assert!(matches!(resolved.error, Some(ApiError::Timeout)));
    }

    #[test]
    fn failure_without_bundled_data_needs_retry() {
        let resolved = FallbackPolicy::<Post>::none("posts").resolve(Err(ApiError::Timeout));
        assert_eq!(resolved.source, DataSource::Unavailable);
        assert!(resolved.data.is_empty());
        assert!(resolved.needs_retry());
    }

    #[test]
    fn empty_result_without_bundled_data_is_live() {
        let resolved = FallbackPolicy::<Post>::none("posts").resolve(Ok(Vec::new()));
        assert!(resolved.is_live());
        assert!(resolved.data.is_empty());
    }

    #[test]
    fn single_item_falls_back_by_predicate() {
        let resolved = policy().resolve_one(Err(ApiError::Timeout), |p| p.id == 102);
        assert_eq!(resolved.source, DataSource::Fallback);
        assert_eq!(resolved.data, Some(post(102, 5)));

        let missing = policy().resolve_one(Err(ApiError::Timeout), |p| p.id == 7);
        assert!(missing.needs_retry());
        assert_eq!(missing.data, None);

        let live = policy().resolve_one(Ok(Some(post(7, 2))), |p| p.id == 7);
        assert!(live.is_live());
        assert_eq!(live.data, Some(post(7, 2)));
    }

    #[test]
    fn single_item_without_body_uses_bundled_item_silently() {
        let resolved = policy().resolve_one(Ok(None), |p| p.id == 101);
        assert_eq!(resolved.source, DataSource::Fallback);
        assert!(resolved.error.is_none());
        assert_eq!(resolved.data, Some(post(101, 9)));

        let nothing = policy().resolve_one(Ok(None), |p| p.id == 7);
        assert!(nothing.is_live());
        assert_eq!(nothing.data, None);
    }

    #[test]
    fn map_keeps_source() {
        let resolved = policy()
            .resolve(Err(ApiError::Timeout))
            .map(|posts| posts.into_iter().next());
        assert_eq!(resolved.source, DataSource::Fallback);
        assert_eq!(resolved.data, Some(post(100, 1)));
    }
}

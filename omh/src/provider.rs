//! Backend provider trait and the runtime provider registry.
//!
//! An application talks to exactly one [`MapProvider`] at a time, obtained
//! from a [`ProviderRegistry`] by its provider path - a reverse-DNS string
//! identifying the backend implementation. Backends register a constructor
//! under their path; resolving a path nobody registered yields
//! [`OmhError::InvalidProvider`], which lets the application probe which
//! backends its build actually carries.

use std::collections::HashMap;

use parking_lot::RwLock;

use crate::error::OmhError;
use crate::styles::{OmhMarkerOptions, OmhPolygonOptions, OmhPolylineOptions};

/// Identifier of an entity (marker, polyline, polygon) added to a provider.
///
/// Ids are assigned by the provider that created the entity and are only
/// meaningful within it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityId(u64);

impl EntityId {
    /// Creates an id from its raw value.
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Raw value of the id.
    pub fn value(&self) -> u64 {
        self.0
    }
}

/// A map backend the common API delegates to.
///
/// Implementations translate the common option records into their native
/// styling primitives and own the resulting entities until removal.
pub trait MapProvider {
    /// Human-readable name of the backend.
    fn provider_name(&self) -> &str;

    /// Adds a marker described by the given options.
    fn add_marker(&mut self, options: &OmhMarkerOptions) -> Result<EntityId, OmhError>;

    /// Adds a polyline described by the given options.
    fn add_polyline(&mut self, options: &OmhPolylineOptions) -> Result<EntityId, OmhError>;

    /// Adds a polygon described by the given options.
    fn add_polygon(&mut self, options: &OmhPolygonOptions) -> Result<EntityId, OmhError>;

    /// Removes a previously added entity. Returns false if the id is not
    /// known to this provider.
    fn remove_entity(&mut self, id: EntityId) -> bool;

    /// Number of entities currently owned by the provider.
    fn entity_count(&self) -> usize;

    /// Removes all entities.
    fn clear(&mut self);
}

type ProviderConstructor = Box<dyn Fn() -> Box<dyn MapProvider> + Send + Sync>;

/// Registry resolving provider paths to backend constructors.
///
/// The runtime equivalent of probing the classpath: a backend is
/// "available" exactly when something registered a constructor under its
/// path.
#[derive(Default)]
pub struct ProviderRegistry {
    constructors: RwLock<HashMap<String, ProviderConstructor>>,
}

impl ProviderRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a backend constructor under the given provider path,
    /// replacing a previous registration for the same path.
    pub fn register(
        &self,
        path: impl Into<String>,
        constructor: impl Fn() -> Box<dyn MapProvider> + Send + Sync + 'static,
    ) {
        let path = path.into();
        log::debug!("registering map provider {path}");
        self.constructors
            .write()
            .insert(path, Box::new(constructor));
    }

    /// Returns true if a backend is registered under the given path.
    pub fn is_available(&self, path: &str) -> bool {
        self.constructors.read().contains_key(path)
    }

    /// Paths of all registered backends, sorted.
    pub fn available_paths(&self) -> Vec<String> {
        let mut paths: Vec<_> = self.constructors.read().keys().cloned().collect();
        paths.sort();
        paths
    }

    /// Constructs the backend registered under the given path.
    pub fn resolve(&self, path: &str) -> Result<Box<dyn MapProvider>, OmhError> {
        let constructors = self.constructors.read();
        match constructors.get(path) {
            Some(constructor) => Ok(constructor()),
            None => {
                log::warn!("map provider {path} is not present in this build");
                Err(OmhError::InvalidProvider(path.to_string()))
            }
        }
    }
}

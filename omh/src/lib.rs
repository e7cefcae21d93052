//! OMH Maps lets an application target one common map API while the actual
//! realisation is delegated to one of several pluggable backends selected
//! at runtime.
//!
//! # Quick start
//!
//! Register the backends present in your build, then resolve one by its
//! provider path:
//!
//! ```no_run
//! use omh::provider::ProviderRegistry;
//! use omh::styles::OmhMarkerOptions;
//! use omh_types::latlon;
//!
//! let registry = ProviderRegistry::new();
//! // backend crates expose a `register` helper each
//! // omh_geojson::register(&registry);
//!
//! let mut map = registry
//!     .resolve("com.omh.maps.geojson.GeoJsonMapProvider")
//!     .expect("backend not registered");
//!
//! let marker = OmhMarkerOptions::at(latlon!(52.23, 21.01)).with_title("Warsaw");
//! map.add_marker(&marker).expect("marker rejected");
//! ```
//!
//! # Main components
//!
//! * [`styles`] — the common option records ([`styles::OmhMarkerOptions`],
//!   [`styles::OmhPolylineOptions`], [`styles::OmhPolygonOptions`]) and the
//!   closed stroke vocabulary (pattern items, caps, joints) every backend
//!   understands.
//! * [`provider`] — the [`provider::MapProvider`] trait backends implement,
//!   and the [`provider::ProviderRegistry`] resolving provider path strings
//!   to backend constructors. Paths that no registered backend claims
//!   produce [`error::OmhError::InvalidProvider`].
//! * [`location`] — location fix arbitration and the one-shot
//!   current-location acquisition flow. Fixes are pushed into this module
//!   by an external [`location::FixSource`]; this crate never talks to
//!   positioning hardware itself.
//!
//! Geometry value types (coordinates, anchors, pixel vectors) live in the
//! [`omh_types`] crate and are re-exported here for convenience.

mod color;
pub mod error;
pub mod location;
pub mod provider;
pub mod styles;

pub use color::Color;
pub use error::OmhError;

// Reexport omh_types
pub use omh_types;

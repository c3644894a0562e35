pub mod client;
pub mod discovery;
pub mod error;
pub mod geocode;
pub mod normalize;
pub mod query;
mod retry;
pub mod session;
pub mod simulated;
pub mod types;

pub use client::ClientSettings;
pub use discovery::PlaceDiscovery;
pub use error::OsmError;
pub use geocode::LocationResolver;
pub use query::{MoodTemplate, OverpassQuery, QueryOptions, TagFilter};
pub use session::{DiscoverySession, RefreshOutcome};
pub use simulated::{FixedMetadata, MetadataSimulator, RandomMetadata, SimulatedMetadata};

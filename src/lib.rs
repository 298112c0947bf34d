// In: src/lib.rs

//! Pokédex Client
//!
//! An aggregating client for the public Pokémon REST API. A single lookup
//! fans out to every sub-resource an entity references and comes back as one
//! denormalized, localized record, with failed parts replaced by documented
//! fallbacks. Also keeps a small favorites list in a local key-value store.

// --- MODULE DECLARATIONS ---
// This declares the module hierarchy for the crate.
pub mod api;
pub mod config;
pub mod errors;
pub mod favorites;
pub mod locale;
pub mod mcp_interface;
pub mod service;

// --- PUBLIC API RE-EXPORTS ---
// This section defines the public-facing API of the `pokedex-client` crate,
// making it easy for users to import the most important types directly.

// --- From the `schema` crate ---
// Re-export the view records every consumer works with.
pub use schema::{
    // Core Records
    AbilityRecord,
    DegradedPart,
    EncounterDetail,
    EncounterRecord,
    EntityRecord,
    EvolutionNode,
    FavoriteEntry,
    SpeciesRecord,
    SpeciesValue,
    // Supporting Types & Enums
    SpriteKind,
    SpriteSet,
    StatFamily,
    StatRecord,
    VersionEncounters,
};

// --- From this crate's modules (`src/`) ---

// The aggregation service and its configuration.
pub use config::{ClientConfig, LocalePreference, MemberFailurePolicy};
pub use service::{Fetched, PokedexService};

// Transport seam, for plugging in something other than HTTP.
pub use api::{HttpTransport, Transport};

// Favorites persistence.
pub use favorites::{FavoritesStore, FileStore, KeyValueStore, MemoryStore};

// Crate-specific error and result types.
pub use errors::{
    ClientError, ClientResult, FetchError, FetchResult, StoreError, StoreResult, TransportError,
};

//! Client for the mediastack news API (`/v1/news`).
//!
//! Options go through [`query::validate_params`] before they reach the wire:
//! keys the endpoint does not know are dropped, enumerated filters are
//! whitelisted, and defaults are filled in per [`DefaultsMode`].

mod client;
mod errors;
pub mod query;
pub mod types;
pub use self::client::Client;
pub use self::errors::Error;
pub use self::query::{
    validate_params, DefaultsMode, NewsQuery, OptionValue, Query, QueryOptions, SanitizedParams,
};

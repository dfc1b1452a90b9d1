//! Backend Context
//!
//! Backend settings are provided once by `App`; components build their
//! client from them.

use leptos::prelude::*;
use supatodo_core::{BackendConfig, SupabaseClient};

pub fn provide_backend(config: BackendConfig) {
    provide_context(config);
}

/// Client for the configured project
pub fn use_backend() -> SupabaseClient {
    SupabaseClient::new(expect_context::<BackendConfig>())
}

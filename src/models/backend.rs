// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

use std::env;

/// Search index backend selection.
///
/// Meilisearch is the production backend. The in-memory backend evaluates
/// filters over a catalog loaded at startup and exists for local
/// development and integration testing, where running a full index server
/// is not worth it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexBackend {
    /// External Meilisearch index reached over HTTP
    Meilisearch,
    /// Process-local catalog, no external collaborator
    Memory,
}

impl IndexBackend {
    /// Parse the backend from the INDEX_BACKEND environment variable.
    /// Panics if the variable is not set or has an invalid value.
    pub fn from_env() -> Self {
        let backend =
            env::var("INDEX_BACKEND").expect("INDEX_BACKEND environment variable must be set");
        Self::parse(&backend)
    }

    /// Parse the backend from a string.
    /// Panics if the value is invalid.
    fn parse(backend: &str) -> Self {
        match backend {
            "meilisearch" => IndexBackend::Meilisearch,
            "memory" => IndexBackend::Memory,
            _ => panic!(
                "INDEX_BACKEND must be 'meilisearch' or 'memory', got: {}",
                backend
            ),
        }
    }

    /// Check whether this backend requires an external index server.
    pub fn is_external(&self) -> bool {
        matches!(self, IndexBackend::Meilisearch)
    }
}

impl std::fmt::Display for IndexBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IndexBackend::Meilisearch => write!(f, "meilisearch"),
            IndexBackend::Memory => write!(f, "memory"),
        }
    }
}

// Copyright 2022 VMware, Inc.
// SPDX-License-Identifier: MIT
pub mod admission;
pub mod apis;
pub mod manifest;
pub mod service_binding;


#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Failed to read manifest {0}: {1}")]
    ReadManifestFailed(String, #[source] std::io::Error),
    #[error("Failed to parse manifest: {0}")]
    ParseManifestFailed(#[source] serde_yaml::Error),
    #[error("UnexpectedResource: {0}")]
    UnexpectedResource(String),
}

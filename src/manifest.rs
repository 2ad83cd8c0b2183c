// Copyright 2022 VMware, Inc.
// SPDX-License-Identifier: MIT
use crate::service_binding::types::{ServiceBinding, GROUP_NAME, VERSION};
use crate::Error;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::*;

/// Reads every `ServiceBinding` document of a (possibly multi-document) YAML
/// manifest. Empty documents are skipped.
pub fn parse_manifest(input: &str) -> Result<Vec<ServiceBinding>, Error> {
    let expected_api_version = format!("{}/{}", GROUP_NAME, VERSION);
    let mut bindings = Vec::new();
    for document in serde_yaml::Deserializer::from_str(input) {
        let value = serde_yaml::Value::deserialize(document).map_err(Error::ParseManifestFailed)?;
        if value.is_null() {
            continue;
        }
        let api_version = value.get("apiVersion").and_then(serde_yaml::Value::as_str);
        let kind = value.get("kind").and_then(serde_yaml::Value::as_str);
        if api_version != Some(expected_api_version.as_str()) || kind != Some("ServiceBinding") {
            return Err(Error::UnexpectedResource(format!(
                "{}/{}",
                api_version.unwrap_or("<none>"),
                kind.unwrap_or("<none>")
            )));
        }
        let binding: ServiceBinding =
            serde_yaml::from_value(value).map_err(Error::ParseManifestFailed)?;
        bindings.push(binding);
    }
    debug!("parsed {} service binding(s)", bindings.len());
    Ok(bindings)
}

pub fn load_manifest(path: &Path) -> Result<Vec<ServiceBinding>, Error> {
    info!("Loading manifest: {}", path.display());
    let input = fs::read_to_string(path)
        .map_err(|e| Error::ReadManifestFailed(path.display().to_string(), e))?;
    parse_manifest(&input)
}

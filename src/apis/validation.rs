// Copyright 2022 VMware, Inc.
// SPDX-License-Identifier: MIT

//! Name shape checks shared by object references.
//!
//! Each check returns `Err` with a human readable explanation, which callers
//! attach as details of an invalid-value violation.

use kube::core::GroupVersion;

pub const DNS1123_LABEL_MAX_LENGTH: usize = 63;
pub const DNS1123_SUBDOMAIN_MAX_LENGTH: usize = 253;

const DNS1123_LABEL_ERR: &str = "a lowercase RFC 1123 label must consist of lower case alphanumeric characters or '-', and must start and end with an alphanumeric character";
const DNS1123_SUBDOMAIN_ERR: &str = "a lowercase RFC 1123 subdomain must consist of lower case alphanumeric characters, '-' or '.', and must start and end with an alphanumeric character";
const C_IDENTIFIER_ERR: &str = "a valid C identifier must start with alphabetic character or '_', followed by a string of alphanumeric characters or '_'";

fn is_label_shaped(value: &str) -> bool {
    let bytes = value.as_bytes();
    match (bytes.first(), bytes.last()) {
        (Some(first), Some(last)) => {
            first.is_ascii_alphanumeric()
                && last.is_ascii_alphanumeric()
                && bytes
                    .iter()
                    .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || *b == b'-')
        }
        _ => false,
    }
}

pub fn is_dns1123_label(value: &str) -> Result<(), String> {
    if value.len() > DNS1123_LABEL_MAX_LENGTH {
        return Err(format!(
            "must be no more than {} characters",
            DNS1123_LABEL_MAX_LENGTH
        ));
    }
    if !is_label_shaped(value) {
        return Err(DNS1123_LABEL_ERR.to_string());
    }
    Ok(())
}

pub fn is_dns1123_subdomain(value: &str) -> Result<(), String> {
    if value.len() > DNS1123_SUBDOMAIN_MAX_LENGTH {
        return Err(format!(
            "must be no more than {} characters",
            DNS1123_SUBDOMAIN_MAX_LENGTH
        ));
    }
    if !value.split('.').all(is_label_shaped) {
        return Err(DNS1123_SUBDOMAIN_ERR.to_string());
    }
    Ok(())
}

pub fn is_c_identifier(value: &str) -> Result<(), String> {
    let mut chars = value.chars();
    let head_ok = chars
        .next()
        .map_or(false, |c| c.is_ascii_alphabetic() || c == '_');
    if head_ok && chars.all(|c| c.is_ascii_alphanumeric() || c == '_') {
        Ok(())
    } else {
        Err(C_IDENTIFIER_ERR.to_string())
    }
}

/// Parses `group/version` or a bare core `version`.
///
/// The group, when present, must be a DNS-1123 subdomain and the version a
/// DNS-1123 label.
pub fn parse_api_version(api_version: &str) -> Result<GroupVersion, String> {
    let gv: GroupVersion = api_version.parse().map_err(|e| format!("{}", e))?;
    if !gv.group.is_empty() {
        is_dns1123_subdomain(&gv.group).map_err(|msg| format!("group: {}", msg))?;
    }
    is_dns1123_label(&gv.version).map_err(|msg| format!("version: {}", msg))?;
    Ok(gv)
}

// Copyright 2022 VMware, Inc.
// SPDX-License-Identifier: MIT
use crate::apis::validation::*;

#[test]
pub fn test_dns1123_label() {
    assert!(is_dns1123_label("default").is_ok());
    assert!(is_dns1123_label("kube-system").is_ok());
    assert!(is_dns1123_label("0abc").is_ok());
    assert!(is_dns1123_label("").is_err());
    assert!(is_dns1123_label("-abc").is_err());
    assert!(is_dns1123_label("abc-").is_err());
    assert!(is_dns1123_label("Abc").is_err());
    assert!(is_dns1123_label("a.b").is_err());
    assert!(is_dns1123_label(&"a".repeat(63)).is_ok());
    assert!(is_dns1123_label(&"a".repeat(64)).is_err());
}

#[test]
pub fn test_dns1123_subdomain() {
    assert!(is_dns1123_subdomain("my-secret").is_ok());
    assert!(is_dns1123_subdomain("apps.example.com").is_ok());
    assert!(is_dns1123_subdomain("a..b").is_err());
    assert!(is_dns1123_subdomain(".a").is_err());
    assert!(is_dns1123_subdomain("My_App").is_err());
    assert!(is_dns1123_subdomain(&"a".repeat(254)).is_err());
}

#[test]
pub fn test_c_identifier() {
    assert!(is_c_identifier("Deployment").is_ok());
    assert!(is_c_identifier("_private1").is_ok());
    assert!(is_c_identifier("1st").is_err());
    assert!(is_c_identifier("Stateful-Set").is_err());
    assert!(is_c_identifier("").is_err());
}

#[test]
pub fn test_parse_api_version() {
    let core = parse_api_version("v1").unwrap();
    assert_eq!(core.group, "");
    assert_eq!(core.version, "v1");

    let apps = parse_api_version("apps/v1").unwrap();
    assert_eq!(apps.group, "apps");
    assert_eq!(apps.version, "v1");

    assert!(parse_api_version("Apps/v1").is_err());
    assert!(parse_api_version("apps/v1/extra").is_err());
    assert!(parse_api_version("apps/").is_err());
}

// Copyright 2022 VMware, Inc.
// SPDX-License-Identifier: MIT
use crate::apis::field_error::*;
use crate::apis::reference::*;
use crate::apis::{Validatable, ValidationContext};
use k8s_openapi::apimachinery::pkg::apis::meta::v1::{LabelSelector, LabelSelectorRequirement};
use std::collections::BTreeMap;

fn deployment(name: &str) -> Reference {
    Reference {
        api_version: Some("apps/v1".to_string()),
        kind: Some("Deployment".to_string()),
        namespace: Some("default".to_string()),
        name: Some(name.to_string()),
        selector: None,
    }
}

fn violation(kind: ViolationKind, paths: &[&str]) -> Violation {
    Violation {
        kind,
        paths: paths.iter().map(|p| p.to_string()).collect(),
        details: None,
    }
}

fn kinds_and_paths(errs: &FieldError) -> Vec<(ViolationKind, Vec<String>)> {
    errs.violations()
        .iter()
        .map(|v| (v.kind.clone(), v.paths.clone()))
        .collect()
}

#[test]
pub fn test_valid_reference() {
    let errs = deployment("my-app").validate(&ValidationContext::default());
    assert!(errs.is_empty(), "{}", errs);
}

#[test]
pub fn test_empty_reference() {
    let errs = Reference::default().validate(&ValidationContext::default());
    assert_eq!(
        errs.violations(),
        &[
            violation(ViolationKind::MissingField, &["kind"]),
            violation(ViolationKind::MissingField, &["apiVersion"]),
            violation(ViolationKind::MissingField, &["namespace"]),
            violation(ViolationKind::MissingOneOf, &["selector", "name"]),
        ]
    );
}

#[test]
pub fn test_empty_strings_count_as_missing() {
    let reference = Reference {
        kind: Some(String::new()),
        name: Some(String::new()),
        ..deployment("ignored")
    };
    let errs = reference.validate(&ValidationContext::default());
    assert_eq!(
        kinds_and_paths(&errs),
        vec![
            (ViolationKind::MissingField, vec!["kind".to_string()]),
            (
                ViolationKind::MissingOneOf,
                vec!["selector".to_string(), "name".to_string()]
            ),
        ]
    );
}

#[test]
pub fn test_invalid_shapes() {
    let reference = Reference {
        api_version: Some("Apps/v1".to_string()),
        kind: Some("Deploy-ment".to_string()),
        namespace: Some("Default".to_string()),
        name: Some("My_App".to_string()),
        selector: None,
    };
    let errs = reference.validate(&ValidationContext::default());
    assert_eq!(
        kinds_and_paths(&errs),
        vec![
            (
                ViolationKind::InvalidValue("Deploy-ment".to_string()),
                vec!["kind".to_string()]
            ),
            (
                ViolationKind::InvalidValue("Apps/v1".to_string()),
                vec!["apiVersion".to_string()]
            ),
            (
                ViolationKind::InvalidValue("Default".to_string()),
                vec!["namespace".to_string()]
            ),
            (
                ViolationKind::InvalidValue("My_App".to_string()),
                vec!["name".to_string()]
            ),
        ]
    );
    assert!(errs.violations().iter().all(|v| v.details.is_some()));
}

#[test]
pub fn test_name_and_selector() {
    let reference = Reference {
        selector: Some(LabelSelector {
            match_labels: Some(BTreeMap::from([("app".to_string(), "web".to_string())])),
            ..Default::default()
        }),
        ..deployment("my-app")
    };
    let errs = reference.validate(&ValidationContext::default());
    assert_eq!(
        errs.violations(),
        &[violation(ViolationKind::MultipleOneOf, &["selector", "name"])]
    );
}

#[test]
pub fn test_selector_only() {
    let reference = Reference {
        name: None,
        selector: Some(LabelSelector {
            match_labels: Some(BTreeMap::from([("app".to_string(), "web".to_string())])),
            match_expressions: Some(vec![LabelSelectorRequirement {
                key: "tier".to_string(),
                operator: "Exists".to_string(),
                values: None,
            }]),
        }),
        ..deployment("ignored")
    };
    let errs = reference.validate(&ValidationContext::default());
    assert!(errs.is_empty(), "{}", errs);
}

#[test]
pub fn test_malformed_selector() {
    let reference = Reference {
        name: None,
        selector: Some(LabelSelector {
            match_labels: None,
            match_expressions: Some(vec![
                LabelSelectorRequirement {
                    key: "tier".to_string(),
                    operator: "In".to_string(),
                    values: Some(vec![]),
                },
                LabelSelectorRequirement {
                    key: String::new(),
                    operator: "Near".to_string(),
                    values: None,
                },
                LabelSelectorRequirement {
                    key: "tier".to_string(),
                    operator: "DoesNotExist".to_string(),
                    values: Some(vec!["web".to_string()]),
                },
            ]),
        }),
        ..deployment("ignored")
    };
    let errs = reference.validate(&ValidationContext::default());
    assert_eq!(
        errs.paths().collect::<Vec<_>>(),
        vec![
            "selector.matchExpressions[0].values",
            "selector.matchExpressions[1].key",
            "selector.matchExpressions[1].operator",
            "selector.matchExpressions[2].values",
        ]
    );
}

#[test]
pub fn test_application_reference_delegates() {
    let application = ApplicationReference {
        reference: Reference {
            kind: None,
            ..deployment("my-app")
        },
        containers: None,
    };
    let errs = application.validate(&ValidationContext::default());
    assert_eq!(
        errs.violations(),
        &[violation(ViolationKind::MissingField, &["kind"])]
    );
}

#[test]
pub fn test_application_reference_serde() {
    let application: ApplicationReference = serde_json::from_value(serde_json::json!({
        "apiVersion": "apps/v1",
        "kind": "Deployment",
        "name": "my-app",
        "containers": ["web", 1],
    }))
    .unwrap();
    assert_eq!(application.reference.name.as_deref(), Some("my-app"));
    assert_eq!(application.containers.as_ref().map(Vec::len), Some(2));
    assert!(!application.reference.has_namespace());
}

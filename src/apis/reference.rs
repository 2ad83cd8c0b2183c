// Copyright 2022 VMware, Inc.
// SPDX-License-Identifier: MIT
use crate::apis::field_error::FieldError;
use crate::apis::validation::{
    is_c_identifier, is_dns1123_label, is_dns1123_subdomain, parse_api_version,
};
use crate::apis::{Validatable, ValidationContext};
use k8s_openapi::apimachinery::pkg::apis::meta::v1::{LabelSelector, LabelSelectorRequirement};
use k8s_openapi::apimachinery::pkg::util::intstr::IntOrString;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A pointer to another object, either by name or by label selector.
#[derive(Default, Debug, Clone, Deserialize, Serialize, JsonSchema, PartialEq)]
pub struct Reference {
    #[serde(rename = "apiVersion", skip_serializing_if = "Option::is_none")]
    pub api_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selector: Option<LabelSelector>,
}

pub(crate) fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

fn shape_error(check: Result<(), String>, value: &str, path: &str) -> FieldError {
    match check {
        Ok(()) => FieldError::default(),
        Err(msg) => FieldError::invalid_value(value, path).with_details(msg),
    }
}

impl Reference {
    pub fn has_namespace(&self) -> bool {
        non_empty(&self.namespace).is_some()
    }

    fn validate_kind(&self) -> FieldError {
        match non_empty(&self.kind) {
            None => FieldError::missing_field("kind"),
            Some(kind) => shape_error(is_c_identifier(kind), kind, "kind"),
        }
    }

    fn validate_api_version(&self) -> FieldError {
        match non_empty(&self.api_version) {
            None => FieldError::missing_field("apiVersion"),
            Some(api_version) => shape_error(
                parse_api_version(api_version).map(|_| ()),
                api_version,
                "apiVersion",
            ),
        }
    }

    fn validate_namespace(&self) -> FieldError {
        match non_empty(&self.namespace) {
            None => FieldError::missing_field("namespace"),
            Some(namespace) => shape_error(is_dns1123_label(namespace), namespace, "namespace"),
        }
    }

    fn validate_target(&self) -> FieldError {
        match (non_empty(&self.name), &self.selector) {
            (Some(_), Some(_)) => FieldError::multiple_one_of(["selector", "name"]),
            (None, Some(selector)) => validate_selector(selector).via_field("selector"),
            (Some(name), None) => shape_error(is_dns1123_subdomain(name), name, "name"),
            (None, None) => FieldError::missing_one_of(["selector", "name"]),
        }
    }
}

impl Validatable for Reference {
    fn validate(&self, _ctx: &ValidationContext) -> FieldError {
        self.validate_kind()
            .also(self.validate_api_version())
            .also(self.validate_namespace())
            .also(self.validate_target())
    }
}

impl AsRef<Reference> for Reference {
    fn as_ref(&self) -> &Reference {
        self
    }
}

impl AsMut<Reference> for Reference {
    fn as_mut(&mut self) -> &mut Reference {
        self
    }
}

fn validate_selector(selector: &LabelSelector) -> FieldError {
    let labels: FieldError = selector
        .match_labels
        .iter()
        .flatten()
        .filter(|(key, _)| key.is_empty())
        .map(|(key, _)| FieldError::invalid_value(format!("{:?}", key), "matchLabels"))
        .collect();
    let expressions: FieldError = selector
        .match_expressions
        .iter()
        .flatten()
        .enumerate()
        .map(|(i, requirement)| {
            validate_requirement(requirement).via_field_index("matchExpressions", i)
        })
        .collect();
    labels.also(expressions)
}

fn validate_requirement(requirement: &LabelSelectorRequirement) -> FieldError {
    let key = if requirement.key.is_empty() {
        FieldError::missing_field("key")
    } else {
        FieldError::default()
    };
    let has_values = requirement.values.as_ref().map_or(false, |v| !v.is_empty());
    let operator = match (requirement.operator.as_str(), has_values) {
        ("In" | "NotIn", false) => FieldError::missing_field("values")
            .with_details("values must be specified for the In and NotIn operators"),
        ("Exists" | "DoesNotExist", true) => FieldError::disallowed_field("values")
            .with_details("values must be empty for the Exists and DoesNotExist operators"),
        ("In" | "NotIn" | "Exists" | "DoesNotExist", _) => FieldError::default(),
        (operator, _) => FieldError::invalid_value(operator, "operator"),
    };
    key.also(operator)
}

/// A reference to the workload a binding is injected into.
#[derive(Default, Debug, Clone, Deserialize, Serialize, JsonSchema, PartialEq)]
pub struct ApplicationReference {
    #[serde(flatten)]
    pub reference: Reference,
    /// Containers to inject into, by name or index. All containers when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub containers: Option<Vec<IntOrString>>,
}

impl Validatable for ApplicationReference {
    fn validate(&self, ctx: &ValidationContext) -> FieldError {
        self.reference.validate(ctx)
    }
}

impl AsRef<Reference> for ApplicationReference {
    fn as_ref(&self) -> &Reference {
        &self.reference
    }
}

impl AsMut<Reference> for ApplicationReference {
    fn as_mut(&mut self) -> &mut Reference {
        &mut self.reference
    }
}

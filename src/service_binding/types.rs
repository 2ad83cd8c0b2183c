// Copyright 2022 VMware, Inc.
// SPDX-License-Identifier: MIT
use crate::apis::field_error::FieldError;
use crate::apis::reference::{ApplicationReference, Reference};
use crate::apis::status::Status;
use crate::apis::{Validatable, ValidationContext};
use k8s_openapi::api::core::v1::LocalObjectReference;
use kube::core::ObjectList;
use kube::CustomResource;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

pub const GROUP_NAME: &str = "service.binding";
pub const VERSION: &str = "v1alpha2";
pub const SERVICE_BINDING_ANNOTATION_KEY: &str = "service.binding/service-binding";

// The binding secret of `service` is projected into `application`, both of
// which live in the binding's own namespace.
#[derive(
    CustomResource, Default, Debug, Clone, Deserialize, Serialize, JsonSchema, PartialEq,
)]
#[kube(group = "service.binding", version = "v1alpha2", kind = "ServiceBinding")]
#[kube(shortname = "sb", namespaced)]
#[kube(status = "ServiceBindingStatus")]
#[kube(derive = "PartialEq")]
pub struct ServiceBindingSpec {
    /// Name of the binding on disk, defaults to this resource's name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Exposed as `type` in the mounted binding
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub type_: Option<String>,
    /// Exposed as `provider` in the mounted binding
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub application: Option<ApplicationReference>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service: Option<Reference>,
    /// Keys of the binding secret projected as environment variables
    #[serde(skip_serializing_if = "Option::is_none")]
    pub env: Option<Vec<EnvVar>>,
    /// New binding secret keys, literal or templated from existing keys
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mappings: Option<Vec<Mapping>>,
}

impl Default for ServiceBinding {
    fn default() -> Self {
        Self {
            metadata: k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta::default(),
            spec: ServiceBindingSpec::default(),
            status: None,
        }
    }
}

pub type ServiceBindingList = ObjectList<ServiceBinding>;

#[derive(
    Clone, Debug, Default, Deserialize, Serialize, JsonSchema, PartialEq,
)]
pub struct ServiceBindingStatus {
    #[serde(flatten)]
    pub status: Status,
    /// The secret holding the projected binding
    #[serde(skip_serializing_if = "Option::is_none")]
    pub binding: Option<LocalObjectReference>,
}

/// Projects the binding secret entry `key` into the variable `name`.
#[derive(Clone, Debug, Default, Deserialize, Serialize, JsonSchema, PartialEq)]
pub struct EnvVar {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub key: String,
}

impl Validatable for EnvVar {
    fn validate(&self, _ctx: &ValidationContext) -> FieldError {
        let name = if self.name.is_empty() {
            FieldError::missing_field("name")
        } else {
            FieldError::default()
        };
        let key = if self.key.is_empty() {
            FieldError::missing_field("key")
        } else {
            FieldError::default()
        };
        name.also(key)
    }
}

#[derive(Clone, Debug, Default, Deserialize, Serialize, JsonSchema, PartialEq)]
pub struct Mapping {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub value: String,
}

impl Validatable for Mapping {
    fn validate(&self, _ctx: &ValidationContext) -> FieldError {
        if self.name.is_empty() {
            FieldError::missing_field("name")
        } else {
            FieldError::default()
        }
    }
}

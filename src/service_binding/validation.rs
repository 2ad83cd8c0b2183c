// Copyright 2022 VMware, Inc.
// SPDX-License-Identifier: MIT
use crate::apis::field_error::FieldError;
use crate::apis::reference::Reference;
use crate::apis::{Validatable, ValidationContext};
use crate::service_binding::types::*;
use indexmap::IndexMap;
use tracing::debug;

/// Stands in for the namespace a reference is not allowed to carry, so the
/// reference's own rules can run without reporting it as missing.
pub const PLACEHOLDER_NAMESPACE: &str = "fake";

/// List items whose names must be unique within their list.
pub trait Named {
    fn name(&self) -> &str;
}

impl Named for EnvVar {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Named for Mapping {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Validatable for ServiceBinding {
    fn validate(&self, ctx: &ValidationContext) -> FieldError {
        debug!(
            "validating service binding {:?} for {:?}",
            self.metadata.name, ctx.operation
        );
        let spec = &self.spec;

        let application = match &spec.application {
            None => FieldError::missing_field("spec.application"),
            Some(application) => validate_local_reference(application, "spec.application", ctx),
        };

        let service = match &spec.service {
            None => FieldError::missing_field("spec.service"),
            Some(service) => {
                let name = if service.name.as_deref().map_or(true, str::is_empty) {
                    FieldError::missing_field("spec.service.name")
                } else {
                    FieldError::default()
                };
                validate_local_reference(service, "spec.service", ctx).also(name)
            }
        };

        let env = spec.env.as_deref().unwrap_or_default();
        let env = validate_items(env, "env", ctx)
            .also(duplicate_names(env, "env"))
            .via_field("spec");

        let mappings = spec.mappings.as_deref().unwrap_or_default();
        let mappings = validate_items(mappings, "mappings", ctx)
            .also(duplicate_names(mappings, "mappings"))
            .via_field("spec");

        let status = match &self.status {
            Some(status) if status.status.has_annotations() => {
                FieldError::disallowed_field("status.annotations")
            }
            _ => FieldError::default(),
        };

        application
            .also(service)
            .also(env)
            .also(mappings)
            .also(status)
    }
}

/// Validates a reference that must resolve in the referrer's own namespace.
///
/// The reference is checked with a placeholder namespace, then a namespace the
/// caller actually set is reported as disallowed.
pub fn validate_local_reference<R>(reference: &R, path: &str, ctx: &ValidationContext) -> FieldError
where
    R: Validatable + Clone + AsRef<Reference> + AsMut<Reference>,
{
    let mut placeholder = reference.clone();
    placeholder.as_mut().namespace = Some(PLACEHOLDER_NAMESPACE.to_string());
    let errs = placeholder.validate(ctx).via_field(path);
    if reference.as_ref().has_namespace() {
        errs.also(FieldError::disallowed_field(format!("{}.namespace", path)))
    } else {
        errs
    }
}

fn validate_items<T: Validatable>(items: &[T], field: &str, ctx: &ValidationContext) -> FieldError {
    items
        .iter()
        .enumerate()
        .map(|(i, item)| item.validate(ctx).via_field_index(field, i))
        .collect()
}

/// Reports each name held by more than one item of `items`, with one path per
/// holder, relative to the parent of `field`.
pub fn duplicate_names<T: Named>(items: &[T], field: &str) -> FieldError {
    let mut positions: IndexMap<&str, Vec<usize>> = IndexMap::new();
    for (i, item) in items.iter().enumerate() {
        positions.entry(item.name()).or_default().push(i);
    }
    positions
        .values()
        .filter(|holders| holders.len() > 1)
        .map(|holders| {
            FieldError::multiple_one_of(holders.iter().map(|i| format!("[{}].name", i)))
                .via_field(field)
        })
        .collect()
}

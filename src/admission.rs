// Copyright 2022 VMware, Inc.
// SPDX-License-Identifier: MIT
use crate::apis::field_error::FieldError;
use crate::apis::{Defaultable, Operation, Validatable, ValidationContext};
use crate::service_binding::types::ServiceBinding;
use kube::ResourceExt;
use tracing::*;

/// Defaults then validates `binding` once, as done on every create or update.
///
/// On `Ok` the binding holds its defaulted form. On `Err` every violation
/// found is reported together.
pub fn admit(binding: &mut ServiceBinding, operation: Operation) -> Result<(), FieldError> {
    let ctx = ValidationContext::new(operation);
    binding.set_defaults(&ctx);
    let name = binding.name_any();
    match binding.validate(&ctx).into_result() {
        Ok(()) => {
            info!("accepted: {:?} on resource {}", operation, name);
            Ok(())
        }
        Err(errs) => {
            warn!("denied: {:?} on {} ({})", operation, name, errs);
            Err(errs)
        }
    }
}

// Copyright 2022 VMware, Inc.
// SPDX-License-Identifier: MIT
use crate::apis::{Defaultable, ValidationContext};
use crate::service_binding::types::ServiceBinding;

impl Defaultable for ServiceBinding {
    // Only the on-disk name is ever defaulted.
    fn set_defaults(&mut self, _ctx: &ValidationContext) {
        if self.spec.name.as_deref().map_or(true, str::is_empty) {
            if let Some(name) = &self.metadata.name {
                self.spec.name = Some(name.clone());
            }
        }
    }
}

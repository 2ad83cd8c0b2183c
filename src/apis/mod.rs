// Copyright 2022 VMware, Inc.
// SPDX-License-Identifier: MIT
pub mod field_error;
pub mod reference;
pub mod status;
pub mod validation;

use crate::apis::field_error::FieldError;

/// The admission operation a resource is being checked for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Operation {
    #[default]
    Create,
    Update,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ValidationContext {
    pub operation: Operation,
}

impl ValidationContext {
    pub fn new(operation: Operation) -> ValidationContext {
        ValidationContext { operation }
    }
}

/// Types that can report every violation of their own shape rules.
pub trait Validatable {
    fn validate(&self, ctx: &ValidationContext) -> FieldError;
}

/// Types that can fill in their unset fields before validation.
pub trait Defaultable {
    fn set_defaults(&mut self, ctx: &ValidationContext);
}

// Copyright 2022 VMware, Inc.
// SPDX-License-Identifier: MIT
pub mod defaults;
pub mod types;
pub mod validation;

// Copyright 2022 VMware, Inc.
// SPDX-License-Identifier: MIT
use anyhow::{bail, Result};
use kube::{CustomResourceExt, ResourceExt};
use service_bindings::admission::admit;
use service_bindings::apis::Operation;
use service_bindings::manifest::load_manifest;
use service_bindings::service_binding::types::ServiceBinding;
use std::env;
use std::path::Path;
use tracing::*;

fn check(paths: &[String]) -> Result<()> {
    let mut denied = 0;
    for path in paths {
        for mut binding in load_manifest(Path::new(path))? {
            match admit(&mut binding, Operation::Create) {
                Ok(()) => println!("{}", serde_yaml::to_string(&binding)?),
                Err(errs) => {
                    denied += 1;
                    eprintln!("{} ({}):\n{}", binding.name_any(), path, errs);
                }
            }
        }
    }
    if denied > 0 {
        bail!("{} service binding(s) denied", denied);
    }
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let args: Vec<String> = env::args().collect();
    match args.get(1).map(String::as_str) {
        Some("export") => {
            info!("exporting custom resource definition");
            println!("{}", serde_yaml::to_string(&ServiceBinding::crd())?);
        }
        Some("check") if args.len() > 2 => {
            info!("checking {} manifest(s)", args.len() - 2);
            check(&args[2..])?;
        }
        _ => {
            warn!("wrong command; please use \"export\" or \"check <manifest>...\"");
        }
    }
    Ok(())
}

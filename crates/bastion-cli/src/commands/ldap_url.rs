//! check-ldap-url command - normalize a single LDAP URL

use super::CommandContext;
use anyhow::Result;
use bastion_core::StructValidator;
use serde::Serialize;

#[derive(Serialize)]
struct UrlReport {
    input: String,
    normalized: Option<String>,
    errors: Vec<String>,
}

pub fn execute(ctx: &CommandContext, url: &str) -> Result<bool> {
    let mut validator = StructValidator::new();
    let normalized = bastion_auth::validate_ldap_url(url, &mut validator);
    let errors = validator.messages();
    let valid = errors.is_empty();

    if ctx.is_json() {
        ctx.print_json(&UrlReport {
            input: url.to_string(),
            normalized: valid.then_some(normalized),
            errors,
        })?;
    } else if valid {
        println!("{}", normalized);
    } else {
        ctx.print_errors(&errors);
    }

    Ok(valid)
}

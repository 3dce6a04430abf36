//! Check command - Validate a status change without applying it

use serde::Serialize;

use crate::domain::{allowed_next, validate_transition, TransitionContext};
use crate::errors::{KoiError, Result};
use crate::schemas::{EntityKind, EntityStore, Role};

use super::{current_status, print_json, Workspace};

#[derive(Debug, Serialize)]
pub struct CheckReport {
    pub kind: EntityKind,
    pub id: i64,
    pub from: String,
    pub to: String,
    pub actor: Option<Role>,
    pub allowed: bool,
    pub reason: Option<String>,
    pub allowed_next: Vec<&'static str>,
}

/// Run the transition validator against the loaded store
pub fn check_transition(
    store: &EntityStore,
    kind: EntityKind,
    id: i64,
    status: &str,
    actor: Option<Role>,
) -> Result<CheckReport> {
    let from = current_status(store, kind, id)?;
    let ctx = TransitionContext {
        actor,
        ..TransitionContext::for_transition(store, kind, id, status)?
    };
    let decision = validate_transition(kind, &from, status, &ctx)?;

    Ok(CheckReport {
        kind,
        id,
        allowed_next: allowed_next(kind, &from)?,
        from,
        to: status.to_string(),
        actor,
        allowed: decision.is_allowed(),
        reason: decision.reason().map(str::to_string),
    })
}

pub async fn run(
    ws: &Workspace,
    kind: EntityKind,
    id: i64,
    status: &str,
    actor: Option<Role>,
    json: bool,
) -> Result<()> {
    let store = ws.load_store().await?;
    let report = check_transition(&store, kind, id, status, actor)?;

    if json {
        print_json(&report)?;
    } else if report.allowed {
        println!("{} {}: {} -> {} allowed", kind, id, report.from, report.to);
    } else {
        println!("{} {}: {} -> {} denied", kind, id, report.from, report.to);
        if !report.allowed_next.is_empty() {
            println!("  next possible: {}", report.allowed_next.join(", "));
        }
    }

    match report.reason {
        Some(reason) => Err(KoiError::Denied(reason)),
        None => Ok(()),
    }
}

//! Statuses command - Print the status registry

use serde::Serialize;

use crate::domain::{allowed_next, is_terminal, roles_allowed, statuses};
use crate::errors::Result;
use crate::schemas::{EntityKind, Role};

use super::print_json;

#[derive(Debug, Serialize)]
pub struct StatusRow {
    pub kind: EntityKind,
    pub status: &'static str,
    pub terminal: bool,
    pub next: Vec<&'static str>,
    pub roles: Vec<Role>,
}

/// Registry rows for one kind, or all kinds
pub fn registry_rows(kind: Option<EntityKind>) -> Result<Vec<StatusRow>> {
    let kinds: Vec<EntityKind> = match kind {
        Some(kind) => vec![kind],
        None => EntityKind::ALL.to_vec(),
    };

    let mut rows = Vec::new();
    for kind in kinds {
        for &status in statuses(kind) {
            rows.push(StatusRow {
                kind,
                status,
                terminal: is_terminal(kind, status)?,
                next: allowed_next(kind, status)?,
                roles: roles_allowed(kind, status)?.to_vec(),
            });
        }
    }
    Ok(rows)
}

pub async fn run(kind: Option<EntityKind>, json: bool) -> Result<()> {
    let rows = registry_rows(kind)?;

    if json {
        return print_json(&rows);
    }

    let mut last_kind = None;
    for row in &rows {
        if last_kind != Some(row.kind) {
            println!("{}:", row.kind);
            last_kind = Some(row.kind);
        }
        let next = if row.terminal {
            "(terminal)".to_string()
        } else {
            row.next.join(", ")
        };
        let roles: Vec<&str> = row.roles.iter().map(|r| r.label()).collect();
        println!(
            "  {:<18} -> {:<32} set by: {}",
            row.status,
            next,
            roles.join(", ")
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_rows_single_kind() {
        let rows = registry_rows(Some(EntityKind::FishOrder)).unwrap();
        assert_eq!(rows.len(), 5);
        assert_eq!(rows[0].status, "Deposited");
        assert_eq!(rows[0].next, vec!["In Transit", "Canceled"]);
        assert!(rows[4].terminal);
        assert!(rows[4].next.is_empty());
    }

    #[test]
    fn test_registry_rows_all_kinds() {
        let rows = registry_rows(None).unwrap();
        assert_eq!(rows.len(), 8 + 5 + 5);
        assert!(rows.iter().all(|r| r.roles.contains(&Role::Manager)));
    }
}

//! MCP tool annotations derived from HTTP method semantics.

use crate::catalog::ToolDescriptor;
use reqwest::Method;
use rmcp::model::ToolAnnotations;

/// Generate MCP tool annotations for a catalog entry.
///
/// Notes:
/// - `openWorldHint` is always `true`: every tool talks to the remote shipping API.
/// - GET tools are read-only and idempotent.
/// - POST tools create or change records; the descriptor decides whether they are destructive.
#[must_use]
pub fn annotations_for(tool: &ToolDescriptor) -> ToolAnnotations {
    let open_world_hint = Some(true);

    if tool.method == Method::GET {
        return ToolAnnotations {
            title: None,
            read_only_hint: Some(true),
            destructive_hint: Some(false),
            idempotent_hint: Some(true),
            open_world_hint,
        };
    }

    ToolAnnotations {
        title: None,
        read_only_hint: Some(false),
        destructive_hint: Some(tool.destructive),
        // Cancelling or deleting the same record twice has no further effect.
        idempotent_hint: Some(tool.destructive),
        open_world_hint,
    }
}

#[cfg(test)]
mod tests {
    use super::annotations_for;
    use crate::catalog::{self, CATALOG};

    #[test]
    fn annotations_set_open_world_for_all_tools() {
        for tool in CATALOG {
            assert_eq!(annotations_for(tool).open_world_hint, Some(true));
        }
    }

    #[test]
    fn annotations_get_is_readonly_and_idempotent() {
        let a = annotations_for(catalog::find("track_shipment").expect("tool"));
        assert_eq!(a.read_only_hint, Some(true));
        assert_eq!(a.destructive_hint, Some(false));
        assert_eq!(a.idempotent_hint, Some(true));
    }

    #[test]
    fn annotations_create_is_a_non_idempotent_write() {
        let a = annotations_for(catalog::find("create_shipment").expect("tool"));
        assert_eq!(a.read_only_hint, Some(false));
        assert_eq!(a.destructive_hint, Some(false));
        assert_eq!(a.idempotent_hint, Some(false));
    }

    #[test]
    fn annotations_delete_is_destructive() {
        for name in ["cancel_shipment", "delete_address"] {
            let a = annotations_for(catalog::find(name).expect("tool"));
            assert_eq!(a.destructive_hint, Some(true), "{name}");
        }
    }
}

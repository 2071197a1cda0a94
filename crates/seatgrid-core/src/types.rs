//! Request types shared by the API and the CLI.

use serde::{Deserialize, Serialize};

/// Guest identifier. Names must be unique within one request; equal names
/// are treated as the same guest.
pub type Guest = String;

/// Guests that must share a table.
pub type Group = Vec<Guest>;

/// Body of a planning request.
///
/// `groups` and `tables_config` default to empty lists when absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanRequest {
    pub guests: Vec<Guest>,
    #[serde(default)]
    pub groups: Vec<Group>,
    #[serde(default)]
    pub tables_config: Vec<u32>,
}

impl PlanRequest {
    /// Reject requests that can never produce a plan, before the allocator
    /// runs. Returns the client-facing message.
    pub fn precheck(&self) -> Result<(), &'static str> {
        if self.guests.is_empty() {
            return Err("No guests provided");
        }
        if self.tables_config.is_empty() {
            return Err("No table configuration provided");
        }
        Ok(())
    }

    pub fn from_json_file(path: &std::path::Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn optional_fields_default_to_empty() {
        let req: PlanRequest = serde_json::from_str(r#"{"guests": ["A", "B"]}"#).unwrap();
        assert_eq!(req.guests, vec!["A", "B"]);
        assert!(req.groups.is_empty());
        assert!(req.tables_config.is_empty());
    }

    #[test]
    fn missing_guests_is_a_parse_error() {
        let res: Result<PlanRequest, _> = serde_json::from_str(r#"{"tables_config": [2]}"#);
        assert!(res.is_err());
    }

    #[test]
    fn negative_capacity_is_a_parse_error() {
        let res: Result<PlanRequest, _> =
            serde_json::from_str(r#"{"guests": ["A"], "tables_config": [-1]}"#);
        assert!(res.is_err());
    }

    #[test]
    fn precheck_rejects_empty_guests() {
        let req = PlanRequest {
            guests: vec![],
            groups: vec![],
            tables_config: vec![4],
        };
        assert_eq!(req.precheck(), Err("No guests provided"));
    }

    #[test]
    fn precheck_rejects_empty_tables() {
        let req = PlanRequest {
            guests: vec!["A".to_string()],
            groups: vec![],
            tables_config: vec![],
        };
        assert_eq!(req.precheck(), Err("No table configuration provided"));
    }

    #[test]
    fn precheck_accepts_zero_capacity_table() {
        let req = PlanRequest {
            guests: vec!["A".to_string()],
            groups: vec![],
            tables_config: vec![0, 1],
        };
        assert!(req.precheck().is_ok());
    }

    #[test]
    fn reads_request_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("request.json");
        std::fs::write(
            &path,
            r#"{"guests": ["A", "B", "C"], "groups": [["A", "B"]], "tables_config": [2, 2]}"#,
        )
        .unwrap();

        let req = PlanRequest::from_json_file(&path).unwrap();
        assert_eq!(req.groups, vec![vec!["A".to_string(), "B".to_string()]]);
        assert_eq!(req.tables_config, vec![2, 2]);
    }
}

//! Bridges `seatgrid_core::PlanRequest` to the allocator.

use seatgrid_core::PlanRequest;

use crate::allocator::Allocator;
use crate::error::PlanResult;
use crate::plan::{Plan, PlanOutcome};
use crate::validate::Validation;

/// Run `allocator` over the lists carried by `req`.
pub fn plan_for_request(allocator: &dyn Allocator, req: &PlanRequest) -> PlanResult<Plan> {
    allocator.generate_plan(&req.guests, &req.groups, &req.tables_config)
}

/// Like [`plan_for_request`], in the `seating_plan` / `error` wire shape.
pub fn outcome_for_request(allocator: &dyn Allocator, req: &PlanRequest) -> PlanOutcome {
    plan_for_request(allocator, req).into()
}

pub fn validate_request(allocator: &dyn Allocator, req: &PlanRequest) -> Validation {
    allocator.validate(&req.guests, &req.groups, &req.tables_config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::allocator::GreedyFirstFit;

    fn sample_request() -> PlanRequest {
        serde_json::from_str(
            r#"{
                "guests": ["A", "B", "C", "D", "E"],
                "groups": [["A", "B", "C"]],
                "tables_config": [2, 3]
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn request_lists_reach_the_allocator() {
        let plan = plan_for_request(&GreedyFirstFit, &sample_request()).unwrap();
        assert_eq!(plan.table_of("A"), Some(2));
        assert_eq!(plan.table_of("E"), Some(1));
    }

    #[test]
    fn outcome_serializes_to_wire_shape() {
        let outcome = outcome_for_request(&GreedyFirstFit, &sample_request());
        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["seating_plan"][1]["guests"], serde_json::json!(["A", "B", "C"]));
        assert_eq!(json["seating_plan"][1]["empty_seats"], 0);
    }

    #[test]
    fn failed_request_becomes_error_outcome() {
        let mut req = sample_request();
        req.tables_config = vec![2];
        let outcome = outcome_for_request(&GreedyFirstFit, &req);
        assert_eq!(
            outcome,
            PlanOutcome::error("Not enough seats. Need 5 seats but only have 2.")
        );
        assert!(!validate_request(&GreedyFirstFit, &req).ok);
    }
}

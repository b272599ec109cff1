//! Plan DTO

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::Plan;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
pub struct PlanDto {
    #[serde(default)]
    pub plan_id: i32,
    #[validate(range(min = 1, message = "product id must be greater than 0"))]
    pub product_id: i32,
    #[validate(range(min = 1, message = "validity days must be greater than 0"))]
    pub validity_days: i32,
}

impl PlanDto {
    pub fn new(product_id: i32, validity_days: i32) -> Self {
        Self {
            plan_id: 0,
            product_id,
            validity_days,
        }
    }
}

impl From<Plan> for PlanDto {
    fn from(p: Plan) -> Self {
        Self {
            plan_id: p.plan_id,
            product_id: p.product_id,
            validity_days: p.validity_days,
        }
    }
}

impl From<&PlanDto> for Plan {
    fn from(dto: &PlanDto) -> Self {
        let mut plan = Plan::new(dto.product_id, dto.validity_days);
        plan.plan_id = dto.plan_id;
        plan
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::validation_message;

    #[test]
    fn failing_fields_are_reported_in_field_order() {
        let err = PlanDto::new(0, -3).validate().unwrap_err();
        assert_eq!(
            validation_message(&err),
            "product id must be greater than 0; validity days must be greater than 0"
        );
        assert!(PlanDto::new(1, 1).validate().is_ok());
    }
}

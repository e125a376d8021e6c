pub mod engine;
pub mod rules;

pub use engine::{calculate_points, PointsResult, RuleContribution};
pub use rules::Rule;

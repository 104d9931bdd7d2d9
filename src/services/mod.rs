//! Analysis and execution services.
//!
//! The six category analyzers (`capacity`, `flow`, `safety`, `layout`,
//! `technology`, `revenue`) are pure functions over a zone snapshot and the
//! analysis policy. `recommender` orchestrates them across a venue;
//! `scorer`, `roi` and `planner` derive secondary artifacts; `executor`
//! applies actions back through the repository.

pub mod capacity;
pub mod error;
pub mod executor;
pub mod flow;
pub mod layout;
pub mod planner;
pub mod policy;
pub mod recommender;
pub mod revenue;
pub mod roi;
pub mod safety;
pub mod scorer;
pub mod technology;

pub use error::{EngineError, EngineResult};
pub use executor::{action_history, apply_action};
pub use policy::AnalysisPolicy;
pub use recommender::{
    generate_recommendations, GenerationRequest, OptimizationFilter, PriorityFilter,
};

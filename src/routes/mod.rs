pub mod actions;
pub mod plans;
pub mod recommendations;
pub mod roi;
pub mod scores;

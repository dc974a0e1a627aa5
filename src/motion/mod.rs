pub mod spring;
pub mod transition;

pub use spring::Spring;
pub use transition::{Transition, transition_list};

pub mod machine;

pub use machine::{BehaviorState, StateMachine, Transient};

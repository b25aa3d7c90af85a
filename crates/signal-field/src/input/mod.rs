pub mod hover;
pub mod queue;

pub mod hierarchy;

pub use hierarchy::{GenerateHierarchyUseCase, HierarchyReport};

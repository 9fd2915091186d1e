pub mod generate_hierarchy;

pub use generate_hierarchy::{GenerateHierarchyUseCase, HierarchyReport};

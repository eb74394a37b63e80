// Modules
pub mod classifier;
pub mod constants;
pub mod data;
pub mod errors;
pub mod metrics;
pub mod node;
pub mod splitter;
pub mod tree;

// Individual classes, and functions
pub use classifier::DecisionTreeClassifier;
pub use data::Dataset;
pub use tree::Tree;

//! 图核心模块
//!
//! 定义节点与无向加权图容器

mod graph;
mod node;

pub use graph::WeightedGraph;
pub use node::Node;

//! WGraph - 内存无向加权图容器
//!
//! 以键值 arena 统一持有节点的无向加权图，支持：
//! - 节点/边的插入、删除与查询
//! - 结构变更计数（mod_count），供调用方做快速失败检测
//! - 深拷贝与结构相等性比较
//!
//! 遍历与最短路径等算法不在本库范围内，由外部消费方基于
//! `nodes` / `neighbors_of` / `edge_weight` 查询接口实现。

pub mod error;
pub mod graph;
pub mod metrics;
pub mod types;

// 重导出常用类型
pub use error::{Error, Result};
pub use graph::{Node, WeightedGraph};
pub use types::{NodeKey, Weight, DEFAULT_INFO, NO_EDGE};

/// 库版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

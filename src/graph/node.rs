//! 节点定义
//!
//! 无向加权图的节点：键、标注信息、算法暂存值和邻接表

use crate::types::{NodeKey, Weight, DEFAULT_INFO};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// 节点
///
/// 邻接关系以「邻居键 → 边权重」存放。节点由图统一持有，
/// 节点之间不互相持有引用，邻居只记录键。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Node {
    /// 节点键（创建后不可变）
    key: NodeKey,
    /// 标注信息
    info: String,
    /// 算法暂存值（如距离、访问标记）
    tag: f64,
    /// 邻居键到边权重的映射
    adjacency: HashMap<NodeKey, Weight>,
}

impl Node {
    /// 创建新节点
    pub(crate) fn new(key: NodeKey) -> Self {
        Self {
            key,
            info: DEFAULT_INFO.to_string(),
            tag: 0.0,
            adjacency: HashMap::new(),
        }
    }

    /// 复制键/info/tag，不复制邻接表（深拷贝第一阶段使用）
    pub(crate) fn detached_copy(&self) -> Self {
        Self {
            key: self.key,
            info: self.info.clone(),
            tag: self.tag,
            adjacency: HashMap::new(),
        }
    }

    /// 获取节点键
    pub fn key(&self) -> NodeKey {
        self.key
    }

    /// 获取标注信息
    pub fn info(&self) -> &str {
        &self.info
    }

    /// 设置标注信息（非结构性修改，不计入 mod_count）
    pub fn set_info(&mut self, info: impl Into<String>) {
        self.info = info.into();
    }

    /// 获取暂存值
    pub fn tag(&self) -> f64 {
        self.tag
    }

    /// 设置暂存值（非结构性修改，不计入 mod_count）
    pub fn set_tag(&mut self, tag: f64) {
        self.tag = tag;
    }

    /// 检查是否与给定键相邻
    pub fn has_neighbor(&self, key: NodeKey) -> bool {
        self.adjacency.contains_key(&key)
    }

    /// 邻居键迭代器（顺序不保证）
    pub fn neighbor_keys(&self) -> impl Iterator<Item = NodeKey> + '_ {
        self.adjacency.keys().copied()
    }

    /// 节点度数
    pub fn degree(&self) -> usize {
        self.adjacency.len()
    }

    /// 获取到指定邻居的边权重；不相邻返回 None
    pub fn edge_weight(&self, key: NodeKey) -> Option<Weight> {
        self.adjacency.get(&key).copied()
    }

    /// 单侧写入邻接项；对称性由图在两个端点各调用一次来维护
    pub(crate) fn add_neighbor(&mut self, key: NodeKey, weight: Weight) {
        self.adjacency.insert(key, weight);
    }

    /// 单侧移除邻接项；键不存在时无操作
    pub(crate) fn remove_neighbor(&mut self, key: NodeKey) {
        self.adjacency.remove(&key);
    }
}

/// 节点相等性：键相同，且右侧节点的每个邻居都以相同权重出现在左侧。
/// 覆盖范围不对称：左侧独有的邻居不参与比较。图相等性会先比较两侧的
/// 节点数和边数，整体语义由此补全。
impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        if self.key != other.key {
            return false;
        }
        other
            .adjacency
            .iter()
            .all(|(key, weight)| self.adjacency.get(key) == Some(weight))
    }
}

//! 无向加权图容器
//!
//! 图以「键 → 节点」的 arena 统一持有全部节点，邻接关系记录为键索引，
//! 对称不变式由 connect / remove_edge / remove_node 维护。

use super::node::Node;
use crate::error::{Error, Result};
use crate::metrics;
use crate::types::{NodeKey, Weight, NO_EDGE};
use std::collections::HashMap;
use tracing::{debug, trace};

/// 无向加权图
///
/// 读操作返回内部状态的引用，不做快照；结构性修改要求 &mut self，
/// 并发使用时由调用方独占串行化。
#[derive(Debug)]
pub struct WeightedGraph {
    /// 全部节点（键 → 节点）
    nodes: HashMap<NodeKey, Node>,
    /// 无向边数量
    edge_count: usize,
    /// 结构变更计数器（单调不减；tag/info 写入不计）
    mod_count: u64,
}

impl WeightedGraph {
    /// 创建空图
    pub fn new() -> Self {
        Self {
            nodes: HashMap::new(),
            edge_count: 0,
            mod_count: 0,
        }
    }

    /// 从节点键列表和边列表构建图
    ///
    /// 与增量修改接口的静默忽略不同，这里对非法输入逐条报错：
    /// 自环、负权重、端点不在节点列表中、重复边。
    pub fn from_edges(
        nodes: impl IntoIterator<Item = NodeKey>,
        edges: impl IntoIterator<Item = (NodeKey, NodeKey, Weight)>,
    ) -> Result<Self> {
        let mut graph = Self::new();
        for key in nodes {
            graph.add_node(key);
        }
        for (u, v, weight) in edges {
            if u == v {
                return Err(Error::SelfLoop(u));
            }
            if weight < 0.0 {
                return Err(Error::NegativeWeight(weight));
            }
            if !graph.nodes.contains_key(&u) {
                return Err(Error::NodeNotFound(u));
            }
            if !graph.nodes.contains_key(&v) {
                return Err(Error::NodeNotFound(v));
            }
            if graph.has_edge(u, v) {
                return Err(Error::DuplicateEdge(u, v));
            }
            graph.connect(u, v, weight);
        }
        debug!(
            nodes = graph.node_count(),
            edges = graph.edge_count,
            "批量构建完成"
        );
        Ok(graph)
    }

    // ==================== 节点操作 ====================

    /// 添加节点；键已存在时无操作
    pub fn add_node(&mut self, key: NodeKey) {
        if !self.nodes.contains_key(&key) {
            self.nodes.insert(key, Node::new(key));
            self.mod_count += 1;
            metrics::global_metrics().record_node_insert();
            trace!(key = key.as_i64(), mod_count = self.mod_count, "添加节点");
        }
    }

    /// 按键获取节点
    pub fn node(&self, key: NodeKey) -> Option<&Node> {
        self.nodes.get(&key)
    }

    /// 按键获取可变节点
    ///
    /// 用于写 tag/info 暂存字段；邻接表的修改入口不在节点上公开，
    /// 持有 &mut Node 不会破坏对称不变式。
    pub fn node_mut(&mut self, key: NodeKey) -> Option<&mut Node> {
        self.nodes.get_mut(&key)
    }

    /// 移除节点并断开其全部关联边，返回被移除的节点
    pub fn remove_node(&mut self, key: NodeKey) -> Option<Node> {
        let removed = self.nodes.remove(&key)?;
        // 逐个清除邻居侧的反向表项；被移除节点整体丢弃，无需清理它自己的邻接表
        for neighbor_key in removed.neighbor_keys() {
            if let Some(neighbor) = self.nodes.get_mut(&neighbor_key) {
                neighbor.remove_neighbor(key);
            }
        }
        let degree = removed.degree();
        self.edge_count -= degree;
        self.mod_count += 1;
        let m = metrics::global_metrics();
        m.record_node_remove();
        m.record_edges_removed(degree as u64);
        trace!(
            key = key.as_i64(),
            degree,
            mod_count = self.mod_count,
            "移除节点"
        );
        Some(removed)
    }

    /// 节点数量
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// 全部节点的迭代器（顺序不保证，返回内部引用）
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.values()
    }

    // ==================== 边操作 ====================

    /// 检查两点之间是否有边
    ///
    /// 相同键恒返回 true（退化自环约定），图中并不会存储自环边。
    pub fn has_edge(&self, u: NodeKey, v: NodeKey) -> bool {
        if u == v {
            return true;
        }
        match self.nodes.get(&u) {
            Some(node) => self.nodes.contains_key(&v) && node.has_neighbor(v),
            None => false,
        }
    }

    /// 获取边权重；无边时返回 NO_EDGE 哨兵
    ///
    /// u == v 时 has_edge 按约定为真，但没有对应的存储权重，同样返回 NO_EDGE。
    pub fn edge_weight(&self, u: NodeKey, v: NodeKey) -> Weight {
        if !self.has_edge(u, v) {
            return NO_EDGE;
        }
        self.nodes
            .get(&u)
            .and_then(|node| node.edge_weight(v))
            .unwrap_or(NO_EDGE)
    }

    /// 连接两个节点
    ///
    /// u == v、任一端点不存在、或两点之间已有边时均无操作；
    /// 已有边的权重不会被更新。权重按约定非负，此处不做检查。
    pub fn connect(&mut self, u: NodeKey, v: NodeKey, weight: Weight) {
        if u == v || self.has_edge(u, v) {
            return;
        }
        if !self.nodes.contains_key(&u) || !self.nodes.contains_key(&v) {
            return;
        }
        // 两侧各写入一次，维持对称不变式
        if let Some(node) = self.nodes.get_mut(&u) {
            node.add_neighbor(v, weight);
        }
        if let Some(node) = self.nodes.get_mut(&v) {
            node.add_neighbor(u, weight);
        }
        self.edge_count += 1;
        self.mod_count += 1;
        metrics::global_metrics().record_edge_insert();
        trace!(
            u = u.as_i64(),
            v = v.as_i64(),
            weight,
            mod_count = self.mod_count,
            "添加边"
        );
    }

    /// 移除两点之间的边；u == v 或边不存在时无操作
    pub fn remove_edge(&mut self, u: NodeKey, v: NodeKey) {
        if u == v || !self.has_edge(u, v) {
            return;
        }
        if let Some(node) = self.nodes.get_mut(&u) {
            node.remove_neighbor(v);
        }
        if let Some(node) = self.nodes.get_mut(&v) {
            node.remove_neighbor(u);
        }
        self.edge_count -= 1;
        self.mod_count += 1;
        metrics::global_metrics().record_edge_remove();
        trace!(
            u = u.as_i64(),
            v = v.as_i64(),
            mod_count = self.mod_count,
            "移除边"
        );
    }

    /// 边数量
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// 结构变更计数
    pub fn mod_count(&self) -> u64 {
        self.mod_count
    }

    // ==================== 邻居查询 ====================

    /// 获取节点全部邻居的迭代器（返回内部引用）；键不存在返回 None
    pub fn neighbors_of(&self, key: NodeKey) -> Option<impl Iterator<Item = &Node> + '_> {
        let node = self.nodes.get(&key)?;
        Some(node.neighbor_keys().filter_map(move |k| self.nodes.get(&k)))
    }

    // ==================== 不变式检查 ====================

    /// 校验对称不变式与边数恒等式
    ///
    /// 每条邻接项都要求反向表项存在且权重一致，边数等于度数和的一半。
    pub fn check_invariants(&self) -> bool {
        let mut degree_sum = 0usize;
        for node in self.nodes.values() {
            degree_sum += node.degree();
            for neighbor_key in node.neighbor_keys() {
                let Some(neighbor) = self.nodes.get(&neighbor_key) else {
                    return false;
                };
                if neighbor.edge_weight(node.key()) != node.edge_weight(neighbor_key) {
                    return false;
                }
            }
        }
        degree_sum % 2 == 0 && degree_sum / 2 == self.edge_count
    }
}

impl Default for WeightedGraph {
    fn default() -> Self {
        Self::new()
    }
}

/// 深拷贝：先复制全部节点（键/info/tag，不带邻接表），再按源图的邻接
/// 关系重建每条边，最后原样覆盖 mod_count 与 edge_count —— 副本的
/// 计数字段反映源图的历史，而非重建过程。
impl Clone for WeightedGraph {
    fn clone(&self) -> Self {
        let mut copy = Self::new();
        for (key, node) in &self.nodes {
            copy.nodes.insert(*key, node.detached_copy());
        }
        for node in self.nodes.values() {
            for neighbor_key in node.neighbor_keys() {
                // 反方向的 connect 会因边已存在而被忽略
                if let Some(weight) = node.edge_weight(neighbor_key) {
                    copy.connect(node.key(), neighbor_key, weight);
                }
            }
        }
        copy.mod_count = self.mod_count;
        copy.edge_count = self.edge_count;
        debug!(
            nodes = copy.node_count(),
            edges = copy.edge_count,
            "深拷贝完成"
        );
        copy
    }
}

/// 图相等性：节点数与边数相同，且右侧图的每个节点在左侧图的相同键位上
/// 存在相等（按节点相等性）的节点。
impl PartialEq for WeightedGraph {
    fn eq(&self, other: &Self) -> bool {
        if self.node_count() != other.node_count() || self.edge_count != other.edge_count {
            return false;
        }
        other.nodes.values().all(|n| match self.nodes.get(&n.key()) {
            Some(mine) => n == mine,
            None => false,
        })
    }
}

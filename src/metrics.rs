//! 操作指标收集模块
//!
//! 进程级别的图操作计数器，供调用方观测图的使用情况

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// 图操作统计
#[derive(Debug)]
pub struct Metrics {
    /// 节点插入数
    nodes_inserted: AtomicU64,
    /// 节点移除数
    nodes_removed: AtomicU64,
    /// 边插入数
    edges_inserted: AtomicU64,
    /// 边移除数（含移除节点时顺带断开的边）
    edges_removed: AtomicU64,
}

/// 可导出的指标快照
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricsSnapshot {
    pub nodes_inserted: u64,
    pub nodes_removed: u64,
    pub edges_inserted: u64,
    pub edges_removed: u64,
}

impl Metrics {
    /// 创建新的指标收集器
    pub fn new() -> Self {
        Self {
            nodes_inserted: AtomicU64::new(0),
            nodes_removed: AtomicU64::new(0),
            edges_inserted: AtomicU64::new(0),
            edges_removed: AtomicU64::new(0),
        }
    }

    /// 记录节点插入
    pub fn record_node_insert(&self) {
        self.nodes_inserted.fetch_add(1, Ordering::Relaxed);
    }

    /// 记录节点移除
    pub fn record_node_remove(&self) {
        self.nodes_removed.fetch_add(1, Ordering::Relaxed);
    }

    /// 记录边插入
    pub fn record_edge_insert(&self) {
        self.edges_inserted.fetch_add(1, Ordering::Relaxed);
    }

    /// 记录边移除
    pub fn record_edge_remove(&self) {
        self.edges_removed.fetch_add(1, Ordering::Relaxed);
    }

    /// 批量记录边移除（移除节点时按度数一次记入）
    pub fn record_edges_removed(&self, n: u64) {
        self.edges_removed.fetch_add(n, Ordering::Relaxed);
    }

    /// 获取指标快照
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            nodes_inserted: self.nodes_inserted.load(Ordering::Relaxed),
            nodes_removed: self.nodes_removed.load(Ordering::Relaxed),
            edges_inserted: self.edges_inserted.load(Ordering::Relaxed),
            edges_removed: self.edges_removed.load(Ordering::Relaxed),
        }
    }

    /// 重置所有指标
    pub fn reset(&self) {
        self.nodes_inserted.store(0, Ordering::Relaxed);
        self.nodes_removed.store(0, Ordering::Relaxed);
        self.edges_inserted.store(0, Ordering::Relaxed);
        self.edges_removed.store(0, Ordering::Relaxed);
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

/// 全局指标实例
static METRICS: once_cell::sync::Lazy<Arc<Metrics>> =
    once_cell::sync::Lazy::new(|| Arc::new(Metrics::new()));

/// 获取全局指标实例
pub fn global_metrics() -> Arc<Metrics> {
    METRICS.clone()
}

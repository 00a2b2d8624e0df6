//! 图通用类型定义

use serde::{Deserialize, Serialize};
use std::fmt;

/// 节点键（全局唯一整数标识）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeKey(pub i64);

impl NodeKey {
    pub fn new(key: i64) -> Self {
        Self(key)
    }

    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl From<i64> for NodeKey {
    fn from(key: i64) -> Self {
        Self(key)
    }
}

impl fmt::Display for NodeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 边权重（约定非负）
pub type Weight = f64;

/// “无边”哨兵值；权重域非负，-1 不会与真实权重冲突
pub const NO_EDGE: Weight = -1.0;

/// 节点 info 字段的默认值
pub const DEFAULT_INFO: &str = "blue";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_key() {
        let key = NodeKey::new(42);
        assert_eq!(key.as_i64(), 42);
        assert_eq!(NodeKey::from(42), key);
        assert_eq!(key.to_string(), "42");
    }
}

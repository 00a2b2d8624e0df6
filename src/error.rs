//! 错误类型定义

use crate::types::NodeKey;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("节点不存在: {0}")]
    NodeNotFound(NodeKey),

    #[error("不允许自环边: {0}")]
    SelfLoop(NodeKey),

    #[error("边权重不能为负: {0}")]
    NegativeWeight(f64),

    #[error("重复的边: {0} - {1}")]
    DuplicateEdge(NodeKey, NodeKey),
}

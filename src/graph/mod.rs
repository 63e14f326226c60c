//! 图核心模块
//!
//! 定义边、图接口和基于边列表的加权图实现

mod edge;
mod graph;
mod rep;

pub use edge::Edge;
pub use graph::WeightedGraph;
pub use rep::min_vertices;

use std::collections::{HashMap, HashSet};
use std::fmt::Debug;
use std::hash::Hash;

/// 边权重。正数为有效权重，0 表示无边，负数非法
pub type Weight = i64;

/// 顶点标签：按值比较、可哈希、可克隆
///
/// 要求 `Debug` 以便在日志中记录边的端点。
pub trait Label: Clone + Eq + Hash + Debug {}

impl<T: Clone + Eq + Hash + Debug> Label for T {}

/// 加权有向图接口
///
/// 顶点为客户端提供的标签，边为带正整数权重的有向连接，
/// 每个有序顶点对最多一条边。
pub trait Graph<L: Label> {
    /// 添加顶点，新加入时返回 true，已存在时返回 false
    fn add(&mut self, vertex: L) -> bool;

    /// 设置、修改或删除一条边
    ///
    /// 权重为正时添加缺失的端点并创建或替换边；权重为 0 时删除边（端点保留）。
    /// 返回调用前该边的权重，不存在时为 0。负权重返回 [`crate::Error::InvalidWeight`]
    /// 且不修改图。
    fn set(&mut self, source: L, target: L, weight: Weight) -> crate::Result<Weight>;

    /// 删除顶点及与其相连的所有边，顶点存在时返回 true
    fn remove(&mut self, vertex: &L) -> bool;

    /// 顶点集合的快照
    fn vertices(&self) -> HashSet<L>;

    /// 所有指向 `target` 的边：源顶点到权重的映射
    fn sources(&self, target: &L) -> HashMap<L, Weight>;

    /// 所有从 `source` 出发的边：目标顶点到权重的映射
    fn targets(&self, source: &L) -> HashMap<L, Weight>;
}

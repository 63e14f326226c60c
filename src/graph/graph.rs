//! 图数据结构
//!
//! 顶点集合 + 边列表的加权有向图

use super::edge::Edge;
use super::rep;
use super::{Graph, Label, Weight};
use crate::error::{Error, Result};
use indexmap::IndexSet;
use std::collections::{HashMap, HashSet};
use std::fmt;
use tracing::{debug, warn};

/// 加权有向图
///
/// 不变量：
/// - 每条边的端点都在顶点集合中
/// - 每个有序顶点对 `(source, target)` 最多一条边
/// - 边权重恒为正，权重 0 以“无边”表示
/// - 顶点数不少于 `min_vertices` 对边所连无序顶点对数量的要求
///
/// 顶点按插入顺序保存，只用于稳定的调试输出。
#[derive(Debug, Clone)]
pub struct WeightedGraph<L> {
    /// 顶点集合
    vertices: IndexSet<L>,
    /// 边列表
    edges: Vec<Edge<L>>,
}

impl<L: Label> WeightedGraph<L> {
    /// 创建空图
    pub fn new() -> Self {
        Self {
            vertices: IndexSet::new(),
            edges: Vec::new(),
        }
    }

    /// 获取顶点数量
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// 获取边数量
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// 顶点是否存在
    pub fn contains_vertex(&self, vertex: &L) -> bool {
        self.vertices.contains(vertex)
    }

    /// 获取边的权重，无边时返回 None
    pub fn weight(&self, source: &L, target: &L) -> Option<Weight> {
        self.find_edge_index(source, target)
            .map(|i| self.edges[i].weight())
    }

    /// 遍历所有边
    pub fn edges(&self) -> impl Iterator<Item = &Edge<L>> {
        self.edges.iter()
    }

    /// 线性扫描查找 `(source, target)` 对应边的位置
    fn find_edge_index(&self, source: &L, target: &L) -> Option<usize> {
        self.edges.iter().position(|e| e.connects(source, target))
    }

    fn check_rep(&self) {
        if cfg!(debug_assertions) {
            rep::check(&self.vertices, &self.edges);
        }
    }
}

impl<L: Label> Default for WeightedGraph<L> {
    fn default() -> Self {
        Self::new()
    }
}

impl<L: Label> Graph<L> for WeightedGraph<L> {
    fn add(&mut self, vertex: L) -> bool {
        if self.vertices.contains(&vertex) {
            return false;
        }
        debug!(?vertex, "添加顶点");
        self.vertices.insert(vertex);
        self.check_rep();
        true
    }

    fn set(&mut self, source: L, target: L, weight: Weight) -> Result<Weight> {
        if weight < 0 {
            warn!(?source, ?target, weight, "拒绝负权重");
            return Err(Error::InvalidWeight(weight));
        }

        let previous = match (self.find_edge_index(&source, &target), weight) {
            (None, 0) => 0,
            (None, _) => {
                let edge = Edge::new(source.clone(), target.clone(), weight)?;
                debug!(?source, ?target, weight, "新增边");
                self.vertices.insert(source);
                self.vertices.insert(target);
                self.edges.push(edge);
                0
            }
            (Some(i), 0) => {
                let removed = self.edges.remove(i);
                debug!(?source, ?target, previous = removed.weight(), "删除边");
                removed.weight()
            }
            (Some(i), _) => {
                let replacement = self.edges[i].with_weight(weight)?;
                let replaced = std::mem::replace(&mut self.edges[i], replacement);
                debug!(?source, ?target, previous = replaced.weight(), weight, "更新边权重");
                replaced.weight()
            }
        };

        self.check_rep();
        Ok(previous)
    }

    fn remove(&mut self, vertex: &L) -> bool {
        if !self.vertices.shift_remove(vertex) {
            return false;
        }

        // 删除相关的边
        let before = self.edges.len();
        self.edges.retain(|e| !e.touches(vertex));
        debug!(?vertex, removed_edges = before - self.edges.len(), "删除顶点");

        self.check_rep();
        true
    }

    fn vertices(&self) -> HashSet<L> {
        self.vertices.iter().cloned().collect()
    }

    fn sources(&self, target: &L) -> HashMap<L, Weight> {
        self.edges
            .iter()
            .filter(|e| e.target() == target)
            .map(|e| (e.source().clone(), e.weight()))
            .collect()
    }

    fn targets(&self, source: &L) -> HashMap<L, Weight> {
        self.edges
            .iter()
            .filter(|e| e.source() == source)
            .map(|e| (e.target().clone(), e.weight()))
            .collect()
    }
}

impl<L: Label + fmt::Display> fmt::Display for WeightedGraph<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "vertices: [")?;
        for (i, vertex) in self.vertices.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", vertex)?;
        }
        writeln!(f, "]")?;
        write!(f, "edges:")?;
        for edge in &self.edges {
            write!(f, "\n  {}", edge)?;
        }
        Ok(())
    }
}

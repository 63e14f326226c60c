//! 边定义
//!
//! 不可变的有向加权边：修改权重会产生一条新边替换旧边

use super::{Label, Weight};
use crate::error::{Error, Result};
use std::fmt;

/// 边
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge<L> {
    /// 源顶点
    source: L,
    /// 目标顶点
    target: L,
    /// 权重（恒为正）
    weight: Weight,
}

impl<L: Label> Edge<L> {
    /// 创建新边，权重必须为正
    pub fn new(source: L, target: L, weight: Weight) -> Result<Self> {
        if weight <= 0 {
            return Err(Error::InvalidWeight(weight));
        }
        Ok(Self {
            source,
            target,
            weight,
        })
    }

    /// 以新权重生成替换边，端点不变
    pub fn with_weight(&self, weight: Weight) -> Result<Self> {
        Self::new(self.source.clone(), self.target.clone(), weight)
    }

    /// 获取源顶点
    pub fn source(&self) -> &L {
        &self.source
    }

    /// 获取目标顶点
    pub fn target(&self) -> &L {
        &self.target
    }

    /// 获取权重
    pub fn weight(&self) -> Weight {
        self.weight
    }

    /// 是否连接给定的有序顶点对
    pub fn connects(&self, source: &L, target: &L) -> bool {
        self.source == *source && self.target == *target
    }

    /// 是否以给定顶点为端点
    pub fn touches(&self, vertex: &L) -> bool {
        self.source == *vertex || self.target == *vertex
    }
}

impl<L: fmt::Display> fmt::Display for Edge<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {} ({})", self.source, self.target, self.weight)
    }
}

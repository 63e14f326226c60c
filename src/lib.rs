//! EdgeGraph - 内存加权有向图
//!
//! 以顶点集合加边列表表示的泛型图抽象数据类型：
//! - 添加、删除顶点
//! - 设置、清除有向边的权重（权重 0 表示无边）
//! - 查询顶点集合以及某顶点的入边、出边
//!
//! 所有查询返回独立副本，修改返回值不会影响图本身。

pub mod error;
pub mod graph;

// 重导出常用类型
pub use error::{Error, Result};
pub use graph::{min_vertices, Edge, Graph, Label, Weight, WeightedGraph};

/// 库版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

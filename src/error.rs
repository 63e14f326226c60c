//! 错误类型定义

use crate::graph::Weight;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("无效的边权重: {0}")]
    InvalidWeight(Weight),
}

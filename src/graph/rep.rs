//! 表示不变量检查
//!
//! 顶点集合与边列表之间必须满足的结构约束

use super::{Edge, Label};
use indexmap::IndexSet;
use std::collections::HashSet;

/// 支撑 `pairs` 个互不相同的无序顶点对所需的最少顶点数
///
/// n 个顶点最多构成 n(n-1)/2 个无序对，由此得到
/// `ceil(sqrt(2 * pairs) + 0.5)`；`pairs` 为 0 时无约束。
pub fn min_vertices(pairs: usize) -> usize {
    if pairs == 0 {
        return 0;
    }
    ((2.0 * pairs as f64).sqrt() + 0.5).ceil() as usize
}

/// 统计边列表中互不相同的无序非自环顶点对数量
///
/// `(a, b)` 与 `(b, a)` 算作同一对，自环不计入。
pub(super) fn unordered_pair_count<L: Label>(edges: &[Edge<L>]) -> usize {
    let ordered: HashSet<(&L, &L)> = edges.iter().map(|e| (e.source(), e.target())).collect();

    let mut non_loop = 0;
    let mut reciprocal = 0;
    for edge in edges.iter().filter(|e| e.source() != e.target()) {
        non_loop += 1;
        if ordered.contains(&(edge.target(), edge.source())) {
            reciprocal += 1;
        }
    }
    // 每个双向对被计了两次
    non_loop - reciprocal / 2
}

/// 校验表示不变量，失败即说明变更逻辑有缺陷，直接 panic
pub(super) fn check<L: Label>(vertices: &IndexSet<L>, edges: &[Edge<L>]) {
    let mut seen = HashSet::with_capacity(edges.len());
    for edge in edges {
        assert!(edge.weight() > 0, "边权重必须为正: {:?}", edge);
        assert!(
            vertices.contains(edge.source()) && vertices.contains(edge.target()),
            "边的端点不在顶点集合中: {:?}",
            edge
        );
        assert!(
            seen.insert((edge.source(), edge.target())),
            "同一有序顶点对存在多条边: {:?}",
            edge
        );
    }

    let required = min_vertices(unordered_pair_count(edges));
    assert!(
        vertices.len() >= required,
        "顶点数 {} 不足以支撑 {} 条边（至少需要 {}）",
        vertices.len(),
        edges.len(),
        required
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn edge(s: &'static str, t: &'static str) -> Edge<&'static str> {
        Edge::new(s, t, 1).unwrap()
    }

    #[test]
    fn test_min_vertices() {
        assert_eq!(min_vertices(0), 0);
        assert_eq!(min_vertices(1), 2);
        assert_eq!(min_vertices(2), 3);
        assert_eq!(min_vertices(3), 3);
        assert_eq!(min_vertices(5), 4);
        assert_eq!(min_vertices(6), 4);
        assert_eq!(min_vertices(10), 5);
    }

    #[test]
    fn test_min_vertices_tight_for_complete_graphs() {
        for n in 2..200usize {
            assert_eq!(min_vertices(n * (n - 1) / 2), n);
        }
    }

    #[test]
    fn test_unordered_pair_count() {
        assert_eq!(unordered_pair_count::<&str>(&[]), 0);
        assert_eq!(unordered_pair_count(&[edge("a", "b"), edge("b", "a")]), 1);
        assert_eq!(unordered_pair_count(&[edge("a", "a")]), 0);
        assert_eq!(
            unordered_pair_count(&[edge("a", "b"), edge("b", "c"), edge("c", "b")]),
            2
        );
    }

    #[test]
    fn test_check_accepts_valid_rep() {
        let vertices: IndexSet<&str> = ["a", "b"].into_iter().collect();
        check(&vertices, &[edge("a", "b"), edge("b", "a"), edge("a", "a")]);
    }

    #[test]
    #[should_panic(expected = "端点不在顶点集合中")]
    fn test_check_rejects_dangling_edge() {
        let vertices: IndexSet<&str> = ["a"].into_iter().collect();
        check(&vertices, &[edge("a", "b")]);
    }

    #[test]
    #[should_panic(expected = "多条边")]
    fn test_check_rejects_duplicate_pair() {
        let vertices: IndexSet<&str> = ["a", "b"].into_iter().collect();
        check(&vertices, &[edge("a", "b"), edge("a", "b")]);
    }
}

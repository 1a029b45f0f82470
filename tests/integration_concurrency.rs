//! 并发渲染集成测试
//!
//! 测试范围:
//! - 多线程共享同一棵查询树渲染
//! - rayon 并行渲染结果一致

mod common;

use common::data_fixtures::{friends_of_adults, prop};
use cypherdsl::prelude::*;
use rayon::prelude::*;
use std::sync::Arc;
use std::thread;

const THREAD_COUNT: usize = 8;

// ==================== 线程共享 ====================

#[test]
fn test_shared_query_renders_identically() {
    let query = Arc::new(friends_of_adults().limit(25));
    let expected = query.to_text();

    let handles: Vec<_> = (0..THREAD_COUNT)
        .map(|_| {
            let query = Arc::clone(&query);
            thread::spawn(move || query.to_text())
        })
        .collect();

    for handle in handles {
        let text = handle.join().expect("渲染线程不应崩溃");
        assert_eq!(text, expected);
    }
}

#[test]
fn test_threads_with_different_options() {
    let query = Arc::new(Query::new().returns([literal("it's")]));

    let single = {
        let query = Arc::clone(&query);
        thread::spawn(move || query.to_text())
    };
    let double = {
        let query = Arc::clone(&query);
        thread::spawn(move || {
            query.render_with(&RenderOptions::default().with_quote_style(QuoteStyle::Double))
        })
    };

    assert_eq!(single.join().expect("线程结束"), "RETURN 'it\\'s'");
    assert_eq!(double.join().expect("线程结束"), "RETURN \"it's\"");
}

// ==================== 并行渲染 ====================

#[test]
fn test_parallel_render_matches_sequential() {
    let queries: Vec<Query> = (0..64u32)
        .map(|i| {
            Query::new()
                .returns([prop("n", "name")])
                .order_by([prop("n", "age").desc()])
                .skip(i)
                .limit(10)
        })
        .collect();

    let sequential: Vec<String> = queries.iter().map(|q| q.to_text()).collect();
    let parallel: Vec<String> = queries.par_iter().map(|q| q.to_text()).collect();

    assert_eq!(sequential, parallel);
    assert_eq!(parallel[3], "RETURN n.name ORDER BY n.age DESC SKIP 3 LIMIT 10");
}

#[test]
fn test_parallel_render_of_shared_tree() {
    let query = friends_of_adults();
    let expected = query.to_text();
    let all_equal = (0..256).into_par_iter().all(|_| query.to_text() == expected);
    assert!(all_equal);
}

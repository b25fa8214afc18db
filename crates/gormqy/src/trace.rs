//! `tracing` events emitted while assembling clauses.
//!
//! Events go to the `gormqy.condition` and `gormqy.query` targets. No
//! subscriber is installed here.

/// Clauses longer than this (in bytes) are truncated in events.
const MAX_EXPR_LENGTH: usize = 200;

fn truncate_expr_bytes(expr: &str, max_bytes: usize) -> &str {
    if expr.len() <= max_bytes {
        return expr;
    }
    let mut end = max_bytes;
    while end > 0 && !expr.is_char_boundary(end) {
        end -= 1;
    }
    &expr[..end]
}

fn display_expr(expr: &str) -> String {
    if expr.len() > MAX_EXPR_LENGTH {
        format!("{}...", truncate_expr_bytes(expr, MAX_EXPR_LENGTH))
    } else {
        expr.to_string()
    }
}

pub(crate) fn group_flushed(expr: &str, value_count: usize) {
    tracing::trace!(
        target: "gormqy.condition",
        value_count,
        expr = %display_expr(expr),
        "condition group flushed"
    );
}

pub(crate) fn unbalanced_group(expr: &str, depth: isize) {
    tracing::warn!(
        target: "gormqy.condition",
        depth,
        expr = %display_expr(expr),
        "condition group has unbalanced brackets"
    );
}

pub(crate) fn regrouped(expr: &str, fragment_count: usize) {
    tracing::trace!(
        target: "gormqy.query",
        fragment_count,
        expr = %display_expr(expr),
        "conditions regrouped"
    );
}

/**
 * 加法组件（adder）
 *
 * 说明
 * - 提供无状态的 Adder，以及等价的自由函数 sum
 * - 溢出行为沿用 i32 原生加法：debug 构建 panic，release 构建回绕
 */

/// 无状态的加法器，先实例化再调用。
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Adder;

impl Adder {
    pub fn new() -> Self {
        Adder
    }

    /// Returns `a + b`.
    pub fn sum(&self, a: i32, b: i32) -> i32 {
        tracing::trace!(a, b, "sum");
        a + b
    }
}

pub fn sum(a: i32, b: i32) -> i32 {
    Adder::new().sum(a, b)
}

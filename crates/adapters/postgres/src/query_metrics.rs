//! 查询指标

use kasir_errors::AppResult;
use metrics::{counter, histogram};
use std::future::Future;
use std::time::Instant;

/// 慢查询阈值（毫秒）
const SLOW_QUERY_MS: u128 = 100;

/// 用于计时的守卫结构
pub struct QueryTimer {
    start: Instant,
    table: &'static str,
    operation: &'static str,
}

impl QueryTimer {
    pub fn new(table: &'static str, operation: &'static str) -> Self {
        Self {
            start: Instant::now(),
            table,
            operation,
        }
    }

    /// 结束计时，按结果记录成功或失败
    pub fn observe<T, E>(self, result: &Result<T, E>) {
        if result.is_err() {
            counter!(
                "db_query_errors_total",
                "table" => self.table,
                "operation" => self.operation
            )
            .increment(1);
        }
        self.finish();
    }

    pub fn finish(self) {
        let duration_ms = self.start.elapsed().as_millis();

        histogram!(
            "db_query_duration_ms",
            "table" => self.table,
            "operation" => self.operation
        )
        .record(duration_ms as f64);

        counter!(
            "db_queries_total",
            "table" => self.table,
            "operation" => self.operation
        )
        .increment(1);

        if duration_ms > SLOW_QUERY_MS {
            tracing::warn!(
                table = %self.table,
                operation = %self.operation,
                duration_ms = %duration_ms,
                "Slow query detected"
            );
        }
    }
}

/// 对一次仓储操作计时并记录结果
pub async fn timed<T, F>(table: &'static str, operation: &'static str, fut: F) -> AppResult<T>
where
    F: Future<Output = AppResult<T>>,
{
    let timer = QueryTimer::new(table, operation);
    let result = fut.await;
    timer.observe(&result);
    result
}

use thiserror::Error;

/// 流水线错误
#[derive(Error, Debug, Clone, Eq, PartialEq)]
pub enum StreamErr {
    /// 流水线已经被终端操作消费，不能再次求值。
    #[error("[Reuse] Stream has already been operated upon or consumed, unable to run terminal op `{op}`")]
    AlreadyConsumed { op: &'static str },
}

/// 终端操作的结果
pub type StreamRes<T> = Result<T, StreamErr>;

impl StreamErr {
    pub(crate) fn already_consumed(op: &'static str) -> StreamErr {
        #[cfg(feature = "tracing")]
        tracing::event!(tracing::Level::WARN, event = "rstream.reuse", op = op, "rstream.reuse");
        StreamErr::AlreadyConsumed { op }
    }

    /// 尝试执行的终端操作名称
    pub fn op(&self) -> &'static str {
        match self {
            StreamErr::AlreadyConsumed { op } => op,
        }
    }
}

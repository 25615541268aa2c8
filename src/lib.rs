//! 惰性、单次消费、可组合的流式数据处理库。
//!
//! 数据源 → 中间操作（惰性，被拉取时才求值）→ 终端操作（驱动整条流水线）→ 收集器（可选）。
//!
//! ```
//! use rstream::Stream;
//! use rstream::collectors::{grouping_by_with, summing_i64};
//!
//! let numbers = vec![1, 4, 7, 6, 2, 9, 7, 8];
//! assert_eq!(Stream::from_collection(numbers.clone()).filter(|n| *n > 5).count(), Ok(5));
//! assert_eq!(Stream::from_collection(numbers.clone()).distinct().to_list(), Ok(vec![1, 4, 7, 6, 2, 9, 8]));
//!
//! let totals = Stream::of(vec![("a", 3i64), ("b", 4), ("a", 5)])
//!     .collect(grouping_by_with(|p: &(&'static str, i64)| p.0, summing_i64(|p: &(&str, i64)| p.1)))
//!     .unwrap();
//! assert_eq!(totals["a"], 8);
//!
//! // 终端操作只能执行一次
//! let mut stream = Stream::from_collection(numbers);
//! assert!(stream.count().is_ok());
//! assert!(stream.count().is_err());
//! ```

mod config;
mod err;
mod numeric;
mod op;
mod pipe;
mod source;
mod stream;
mod terminal;

pub mod collectors;
pub mod comparator;

pub use collectors::{Collector, JoinInfo, Partition};
pub use config::{Characteristic, Characteristics};
pub use err::{StreamErr, StreamRes};
pub use numeric::{Numeric, SummaryStatistics};
pub use pipe::Pipe;
pub use stream::Stream;

use crate::config::{Characteristic, Characteristics, after_map};
use crate::err::{StreamErr, StreamRes};
use crate::op::Op;
use crate::pipe::Pipe;
use itertools::Itertools;
use std::cmp::Ordering;
use std::fmt;
use std::hash::Hash;

/// 惰性、单次消费的流水线。
///
/// 中间操作按值消费流水线并返回新的流水线，不会拉取任何元素；
/// 终端操作驱动整条流水线求值，之后流水线被标记为已消费，再次执行任意终端操作都会返回
/// [`StreamErr::AlreadyConsumed`]。
pub struct Stream<T> {
    /// 为`None`时表示已被终端操作消费
    pub(crate) pipe: Option<Pipe<T>>,
    pub(crate) stages: Vec<String>,
    pub(crate) characteristics: Characteristics,
}

impl<T: 'static> Stream<T> {
    pub(crate) fn from_source(
        name: impl Into<String>,
        iter: impl Iterator<Item = T> + 'static,
        characteristics: Characteristics,
    ) -> Stream<T> {
        Stream { pipe: Some(Pipe::new(iter)), stages: vec![name.into()], characteristics }
    }

    /// 取出管道并将流水线标记为已消费，检查与标记在同一步完成。
    pub(crate) fn consume(&mut self, op: &'static str) -> StreamRes<Pipe<T>> {
        match self.pipe.take() {
            Some(pipe) => {
                #[cfg(feature = "tracing")]
                tracing::event!(
                    tracing::Level::DEBUG,
                    event = "rstream.terminal",
                    op = op,
                    stages = %self.stages.iter().join(" -> "),
                    "rstream.terminal"
                );
                Ok(pipe)
            }
            None => Err(StreamErr::already_consumed(op)),
        }
    }

    fn transform<U: 'static>(
        self,
        stage: String,
        characteristics: Characteristics,
        f: impl FnOnce(Pipe<T>) -> Pipe<U>,
    ) -> Stream<U> {
        let Stream { pipe, mut stages, .. } = self;
        stages.push(stage);
        Stream { pipe: pipe.map(f), stages, characteristics }
    }

    fn push_op(self, op: Op<T>, characteristics: Characteristics) -> Stream<T> {
        self.transform(format!("{op:?}"), characteristics, |pipe| op.wrap(pipe))
    }

    /// 是否已被终端操作消费
    pub fn is_consumed(&self) -> bool {
        self.pipe.is_none()
    }

    pub fn characteristics(&self) -> Characteristics {
        self.characteristics
    }

    /// 数据源与已追加的各阶段描述，按追加顺序排列。
    pub fn stages(&self) -> &[String] {
        &self.stages
    }

    /* **************************************** 访问 **************************************** */

    /// 每个元素经过时调用`observer`，元素原样传递，主要用于调试。
    pub fn peek(self, observer: impl FnMut(&T) + 'static) -> Stream<T> {
        let characteristics = self.characteristics;
        self.push_op(Op::Peek(Box::new(observer)), characteristics)
    }

    /* **************************************** 转换 **************************************** */

    /// 一对一转换。
    pub fn map<U: 'static>(self, f: impl FnMut(T) -> U + 'static) -> Stream<U> {
        let characteristics = after_map(self.characteristics);
        self.transform("map".to_owned(), characteristics, |pipe| pipe.op_map(f))
    }

    /// 一对多转换，依次输出每个子序列的全部元素后再拉取下一个上游元素，空子序列不输出任何元素。
    pub fn flat_map<I>(self, f: impl FnMut(T) -> I + 'static) -> Stream<I::Item>
    where
        I: IntoIterator + 'static,
        I::IntoIter: 'static,
        I::Item: 'static,
    {
        let characteristics = after_map(self.characteristics);
        self.transform("flat_map".to_owned(), characteristics, |pipe| pipe.op_flat_map(f))
    }

    /* **************************************** 减少 **************************************** */

    pub fn filter(self, predicate: impl FnMut(&T) -> bool + 'static) -> Stream<T> {
        let characteristics = self.characteristics;
        self.push_op(Op::Filter(Box::new(predicate)), characteristics)
    }

    /// 最多输出`count`个元素，达到数量后不再从上游拉取，可用于无限数据源。
    pub fn limit(self, count: usize) -> Stream<T> {
        let characteristics = self.characteristics;
        self.push_op(Op::Limit(count), characteristics)
    }

    pub fn skip(self, count: usize) -> Stream<T> {
        let characteristics = self.characteristics;
        self.push_op(Op::Skip(count), characteristics)
    }

    /// 去重，按值相等判定，保留首次出现的元素及其顺序。
    ///
    /// 已知元素互不相等时（例如基于集合的数据源）不追加任何阶段。
    pub fn distinct(self) -> Stream<T>
    where
        T: Eq + Hash + Clone,
    {
        if self.characteristics.contains(Characteristic::Distinct) {
            return self;
        }
        let characteristics = self.characteristics.with(Characteristic::Distinct);
        self.push_op(Op::new_distinct(), characteristics)
    }

    pub fn take_while(self, predicate: impl FnMut(&T) -> bool + 'static) -> Stream<T> {
        let characteristics = self.characteristics;
        self.push_op(Op::TakeWhile(Box::new(predicate)), characteristics)
    }

    pub fn drop_while(self, predicate: impl FnMut(&T) -> bool + 'static) -> Stream<T> {
        let characteristics = self.characteristics;
        self.push_op(Op::DropWhile(Box::new(predicate)), characteristics)
    }

    /* **************************************** 调整位置 **************************************** */

    /// 按自然顺序稳定排序，已按自然顺序排序时不追加任何阶段。
    ///
    /// 排序是完整屏障：首次拉取时读取全部上游元素，因此不能用于无限数据源。
    pub fn sorted(self) -> Stream<T>
    where
        T: Ord,
    {
        if self.characteristics.contains(Characteristic::Sorted) {
            return self;
        }
        let characteristics =
            self.characteristics.with(Characteristic::Sorted).with(Characteristic::Ordered);
        self.push_op(Op::new_sorted(|a: &T, b: &T| a.cmp(b)), characteristics)
    }

    /// 按比较器稳定排序。
    pub fn sorted_by(self, cmp: impl FnMut(&T, &T) -> Ordering + 'static) -> Stream<T> {
        let characteristics =
            self.characteristics.without(Characteristic::Sorted).with(Characteristic::Ordered);
        self.push_op(Op::new_sorted(cmp), characteristics)
    }

    pub fn sorted_by_key<K: Ord>(self, mut key: impl FnMut(&T) -> K + 'static) -> Stream<T> {
        self.sorted_by(move |a, b| key(a).cmp(&key(b)))
    }

    /// 放弃遭遇顺序保证，不追加任何阶段。
    pub fn unordered(mut self) -> Stream<T> {
        self.characteristics = self.characteristics.without(Characteristic::Ordered);
        self
    }
}

impl<T> fmt::Debug for Stream<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Stream")
            .field("stages", &self.stages.iter().join(" -> "))
            .field("characteristics", &self.characteristics)
            .field("consumed", &self.pipe.is_none())
            .finish()
    }
}

use crate::collectors::Collector;
use crate::err::StreamRes;
use crate::numeric::{Numeric, SummaryStatistics};
use crate::pipe::Pipe;
use crate::stream::Stream;
use std::cmp::Ordering;

/// 终端操作
///
/// 每个终端操作在拉取第一个元素之前就将流水线标记为已消费，对已消费的流水线执行任意终端操作都会返回
/// [`StreamErr::AlreadyConsumed`](crate::StreamErr::AlreadyConsumed)。
/// 调用方提供的函数发生panic时直接向外传播，流水线保持已消费状态。
impl<T: 'static> Stream<T> {
    pub fn count(&mut self) -> StreamRes<usize> {
        Ok(self.consume("count")?.count())
    }

    /// 相等的最大值有多个时返回最后一个。
    pub fn max_by(&mut self, cmp: impl FnMut(&T, &T) -> Ordering) -> StreamRes<Option<T>> {
        Ok(self.consume("max_by")?.max_by(cmp))
    }

    /// 相等的最小值有多个时返回第一个。
    pub fn min_by(&mut self, cmp: impl FnMut(&T, &T) -> Ordering) -> StreamRes<Option<T>> {
        Ok(self.consume("min_by")?.min_by(cmp))
    }

    pub fn max_by_key<K: Ord>(&mut self, key: impl FnMut(&T) -> K) -> StreamRes<Option<T>> {
        Ok(self.consume("max_by_key")?.max_by_key(key))
    }

    pub fn min_by_key<K: Ord>(&mut self, key: impl FnMut(&T) -> K) -> StreamRes<Option<T>> {
        Ok(self.consume("min_by_key")?.min_by_key(key))
    }

    /// 以第一个元素为初始值从左向右归约，没有元素时为`None`。
    pub fn reduce(&mut self, accumulator: impl FnMut(T, T) -> T) -> StreamRes<Option<T>> {
        Ok(self.consume("reduce")?.reduce(accumulator))
    }

    /// 以`identity`为初始值从左向右归约，没有元素时返回`identity`。
    pub fn reduce_with(&mut self, identity: T, accumulator: impl FnMut(T, T) -> T) -> StreamRes<T> {
        Ok(self.consume("reduce_with")?.fold(identity, accumulator))
    }

    /// 归约为其他类型。
    pub fn fold<U>(&mut self, identity: U, accumulator: impl FnMut(U, T) -> U) -> StreamRes<U> {
        Ok(self.consume("fold")?.fold(identity, accumulator))
    }

    /// 最多拉取一个元素。
    pub fn find_first(&mut self) -> StreamRes<Option<T>> {
        Ok(self.consume("find_first")?.next())
    }

    /// 顺序求值时与[`find_first`](Stream::find_first)相同。
    pub fn find_any(&mut self) -> StreamRes<Option<T>> {
        Ok(self.consume("find_any")?.next())
    }

    /// 遇到第一个满足条件的元素即停止拉取，没有元素时为`false`。
    pub fn any_match(&mut self, predicate: impl FnMut(T) -> bool) -> StreamRes<bool> {
        Ok(self.consume("any_match")?.any(predicate))
    }

    /// 遇到第一个不满足条件的元素即停止拉取，没有元素时为`true`。
    pub fn all_match(&mut self, predicate: impl FnMut(T) -> bool) -> StreamRes<bool> {
        Ok(self.consume("all_match")?.all(predicate))
    }

    /// 遇到第一个满足条件的元素即停止拉取，没有元素时为`true`。
    pub fn none_match(&mut self, mut predicate: impl FnMut(T) -> bool) -> StreamRes<bool> {
        Ok(!self.consume("none_match")?.any(|item| predicate(item)))
    }

    pub fn for_each(&mut self, consumer: impl FnMut(T)) -> StreamRes<()> {
        self.consume("for_each")?.for_each(consumer);
        Ok(())
    }

    /// 使用收集器归约：为收集器创建新的累加容器，逐个累加元素后执行收尾函数。
    pub fn collect<C: Collector<T>>(&mut self, mut collector: C) -> StreamRes<C::Output> {
        let pipe = self.consume("collect")?;
        let mut acc = collector.supply();
        for item in pipe {
            collector.accumulate(&mut acc, item);
        }
        Ok(collector.finish(acc))
    }

    pub fn to_array(&mut self) -> StreamRes<Box<[T]>> {
        Ok(self.consume("to_array")?.collect())
    }

    pub fn to_list(&mut self) -> StreamRes<Vec<T>> {
        Ok(self.consume("to_list")?.collect())
    }

    /// 以普通迭代器的形式取出流水线，元素仍按需拉取。
    pub fn iterator(&mut self) -> StreamRes<Pipe<T>> {
        self.consume("iterator")
    }
}

impl<T: Ord + 'static> Stream<T> {
    /// 相等的最大值有多个时返回最后一个。
    pub fn max(&mut self) -> StreamRes<Option<T>> {
        Ok(self.consume("max")?.max())
    }

    /// 相等的最小值有多个时返回第一个。
    pub fn min(&mut self) -> StreamRes<Option<T>> {
        Ok(self.consume("min")?.min())
    }
}

impl<T: Numeric> Stream<T> {
    /// 没有元素时为0
    pub fn sum(&mut self) -> StreamRes<T> {
        Ok(self.consume("sum")?.fold(T::default(), |acc, item| acc + item))
    }

    /// 以`f64`累加求平均值，没有元素时为`None`
    pub fn average(&mut self) -> StreamRes<Option<f64>> {
        let (sum, count) = self
            .consume("average")?
            .fold((0.0, 0usize), |(sum, count), item| (sum + item.to_f64(), count + 1));
        Ok(if count == 0 { None } else { Some(sum / count as f64) })
    }

    /// 总和以更宽的[`Numeric::Sum`]累加。
    pub fn summary_statistics(&mut self) -> StreamRes<SummaryStatistics<T>> {
        let mut stats = SummaryStatistics::default();
        stats.extend(self.consume("summary_statistics")?);
        Ok(stats)
    }
}

use crate::config::{Characteristic, Characteristics};
use crate::stream::Stream;
use itertools::Itertools;
use std::iter::{from_fn, repeat, repeat_n, repeat_with};
use std::ops::{Range, RangeInclusive};

/// 数据源
impl<T: 'static> Stream<T> {
    /// 从有序集合创建流水线，保持集合的遍历顺序。
    ///
    /// 只持有集合的迭代器，不复制元素。
    pub fn from_collection<C>(collection: C) -> Stream<T>
    where
        C: IntoIterator<Item = T>,
        C::IntoIter: 'static,
    {
        Stream::from_source("from_collection", collection.into_iter(), Characteristics::ORDERED)
    }

    /// 从无序且元素互不相等的集合（例如`HashSet`）创建流水线。
    pub fn from_unordered<C>(collection: C) -> Stream<T>
    where
        C: IntoIterator<Item = T>,
        C::IntoIter: 'static,
    {
        let characteristics = Characteristics::of(&[Characteristic::Distinct]);
        Stream::from_source("from_unordered", collection.into_iter(), characteristics)
    }

    /// 从按自然顺序排序且元素互不相等的集合（例如`BTreeSet`）创建流水线。
    pub fn from_sorted_set<C>(collection: C) -> Stream<T>
    where
        C: IntoIterator<Item = T>,
        C::IntoIter: 'static,
    {
        let characteristics =
            Characteristics::of(&[Characteristic::Ordered, Characteristic::Distinct, Characteristic::Sorted]);
        Stream::from_source("from_sorted_set", collection.into_iter(), characteristics)
    }

    /// 使用直接字面值作为数据源。
    pub fn of<C>(values: C) -> Stream<T>
    where
        C: IntoIterator<Item = T>,
        C::IntoIter: 'static,
    {
        Stream::from_source("of", values.into_iter(), Characteristics::ORDERED)
    }

    pub fn of_one(value: T) -> Stream<T> {
        Stream::from_source("of", std::iter::once(value), Characteristics::ORDERED)
    }

    pub fn empty() -> Stream<T> {
        let characteristics =
            Characteristics::of(&[Characteristic::Ordered, Characteristic::Distinct, Characteristic::Sorted]);
        Stream::from_source("empty", std::iter::empty(), characteristics)
    }

    /// 拼接两个流水线：先输出`first`的全部元素，再输出`second`的全部元素。
    ///
    /// 任一流水线已被消费时，拼接结果同样是已消费的流水线。
    pub fn concat(first: Stream<T>, second: Stream<T>) -> Stream<T> {
        let stage = format!("concat[{} | {}]", first.stages.iter().join(" -> "), second.stages.iter().join(" -> "));
        let characteristics = first
            .characteristics
            .intersect(second.characteristics)
            .without(Characteristic::Distinct)
            .without(Characteristic::Sorted);
        let pipe = match (first.pipe, second.pipe) {
            (Some(first), Some(second)) => Some(first.op_chain(second)),
            _ => None,
        };
        Stream { pipe, stages: vec![stage], characteristics }
    }

    /// 无限序列：`seed`, `f(seed)`, `f(f(seed))`, ...
    ///
    /// 每次拉取时才计算下一个元素，`f`只作用于已经输出过的元素。
    pub fn iterate(seed: T, mut f: impl FnMut(&T) -> T + 'static) -> Stream<T>
    where
        T: Clone,
    {
        let mut seed = Some(seed);
        let mut prev: Option<T> = None;
        let iter = from_fn(move || {
            let value = match seed.take() {
                Some(seed) => seed,
                None => f(prev.as_ref()?),
            };
            prev = Some(value.clone());
            Some(value)
        });
        Stream::from_source("iterate", iter, Characteristics::ORDERED)
    }

    /// 有限序列：从`seed`开始依次应用`next`，直到`has_next`首次不满足。
    ///
    /// 只有上一个元素满足`has_next`后才会调用`next`。
    pub fn iterate_while(
        seed: T,
        mut has_next: impl FnMut(&T) -> bool + 'static,
        mut next: impl FnMut(&T) -> T + 'static,
    ) -> Stream<T>
    where
        T: Clone,
    {
        let mut seed = Some(seed);
        let mut prev: Option<T> = None;
        let iter = from_fn(move || {
            let value = match seed.take() {
                Some(seed) => seed,
                None => next(prev.take().as_ref()?),
            };
            if !has_next(&value) {
                return None;
            }
            prev = Some(value.clone());
            Some(value)
        });
        Stream::from_source("iterate_while", iter, Characteristics::ORDERED)
    }

    /// 无限序列，每个元素由`supplier`生成。
    pub fn generate(supplier: impl FnMut() -> T + 'static) -> Stream<T> {
        Stream::from_source("generate", repeat_with(supplier), Characteristics::NONE)
    }

    /// 重复值作为数据源，`count`未指定时重复无限次。
    pub fn repeat(value: T, count: Option<usize>) -> Stream<T>
    where
        T: Clone,
    {
        match count {
            Some(count) => Stream::from_source("repeat", repeat_n(value, count), Characteristics::ORDERED),
            None => Stream::from_source("repeat", repeat(value), Characteristics::ORDERED),
        }
    }

    /// 半开区间`[start, end)`，如果`start >= end`则没有元素。
    pub fn range(start: T, end: T) -> Stream<T>
    where
        Range<T>: Iterator<Item = T> + 'static,
    {
        Stream::from_source("range", start..end, sorted_range())
    }

    /// 闭区间`[start, end]`，如果`start > end`则没有元素。
    pub fn range_closed(start: T, end: T) -> Stream<T>
    where
        RangeInclusive<T>: Iterator<Item = T> + 'static,
    {
        Stream::from_source("range_closed", start..=end, sorted_range())
    }
}

fn sorted_range() -> Characteristics {
    Characteristics::of(&[Characteristic::Ordered, Characteristic::Distinct, Characteristic::Sorted])
}

//! 收集器：可插拔的归约策略，供[`Stream::collect`](crate::Stream::collect)使用。
//!
//! 任何收集器都可以作为下游收集器嵌套在[`grouping_by_with`]、[`partitioning_by_with`]、[`mapping`]等之中。

mod grouping;
mod summary;

pub use grouping::*;
pub use summary::*;

use rustc_hash::{FxHashMap, FxHashSet};
use std::cmp::Ordering;
use std::fmt::Display;
use std::hash::Hash;

/// 收集器
///
/// 由三部分组成：创建累加容器、累加单个元素、收尾。只支持顺序求值，因此不需要合并函数。
pub trait Collector<T> {
    /// 累加容器
    type Acc;
    /// 收尾后的结果
    type Output;

    fn supply(&mut self) -> Self::Acc;

    fn accumulate(&mut self, acc: &mut Self::Acc, item: T);

    fn finish(&mut self, acc: Self::Acc) -> Self::Output;

    /// 对收尾结果再执行一次转换。
    fn and_then<F>(self, finisher: F) -> AndThen<Self, F>
    where
        Self: Sized,
    {
        AndThen { collector: self, finisher }
    }
}

/* **************************************** 容器 **************************************** */

#[derive(Debug, Clone, Copy, Default)]
pub struct ToList;

impl<T> Collector<T> for ToList {
    type Acc = Vec<T>;
    type Output = Vec<T>;

    fn supply(&mut self) -> Vec<T> {
        Vec::new()
    }

    fn accumulate(&mut self, acc: &mut Vec<T>, item: T) {
        acc.push(item);
    }

    fn finish(&mut self, acc: Vec<T>) -> Vec<T> {
        acc
    }
}

pub fn to_list() -> ToList {
    ToList
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ToSet;

impl<T: Eq + Hash> Collector<T> for ToSet {
    type Acc = FxHashSet<T>;
    type Output = FxHashSet<T>;

    fn supply(&mut self) -> FxHashSet<T> {
        FxHashSet::default()
    }

    fn accumulate(&mut self, acc: &mut FxHashSet<T>, item: T) {
        acc.insert(item);
    }

    fn finish(&mut self, acc: FxHashSet<T>) -> FxHashSet<T> {
        acc
    }
}

pub fn to_set() -> ToSet {
    ToSet
}

pub struct ToCollection<F>(F);

impl<T, C, F> Collector<T> for ToCollection<F>
where
    C: Extend<T>,
    F: FnMut() -> C,
{
    type Acc = C;
    type Output = C;

    fn supply(&mut self) -> C {
        (self.0)()
    }

    fn accumulate(&mut self, acc: &mut C, item: T) {
        acc.extend(std::iter::once(item));
    }

    fn finish(&mut self, acc: C) -> C {
        acc
    }
}

/// 收集到`factory`创建的容器中，例如`BTreeSet::new`、`VecDeque::new`。
pub fn to_collection<C, F: FnMut() -> C>(factory: F) -> ToCollection<F> {
    ToCollection(factory)
}

pub struct ToMap<K, V, M> {
    key: K,
    value: V,
    merge: M,
}

impl<T, Key, Val, K, V, M> Collector<T> for ToMap<K, V, M>
where
    Key: Eq + Hash,
    K: FnMut(&T) -> Key,
    V: FnMut(T) -> Val,
    M: FnMut(Val, Val) -> Val,
{
    type Acc = FxHashMap<Key, Val>;
    type Output = FxHashMap<Key, Val>;

    fn supply(&mut self) -> Self::Acc {
        FxHashMap::default()
    }

    fn accumulate(&mut self, acc: &mut Self::Acc, item: T) {
        let key = (self.key)(&item);
        let value = (self.value)(item);
        let value = match acc.remove(&key) {
            Some(prev) => (self.merge)(prev, value),
            None => value,
        };
        acc.insert(key, value);
    }

    fn finish(&mut self, acc: Self::Acc) -> Self::Output {
        acc
    }
}

/// 收集为键值映射，键重复时使用`merge`合并已有值与新值。
pub fn to_map<T, Key, Val, K, V, M>(key: K, value: V, merge: M) -> ToMap<K, V, M>
where
    K: FnMut(&T) -> Key,
    V: FnMut(T) -> Val,
    M: FnMut(Val, Val) -> Val,
{
    ToMap { key, value, merge }
}

/// 合并信息
#[derive(Debug, PartialEq, Default, Clone)]
pub struct JoinInfo {
    pub delimiter: String,
    pub prefix: String,
    pub postfix: String,
}

impl JoinInfo {
    pub fn new(delimiter: impl Into<String>, prefix: impl Into<String>, postfix: impl Into<String>) -> JoinInfo {
        JoinInfo { delimiter: delimiter.into(), prefix: prefix.into(), postfix: postfix.into() }
    }
}

pub struct Joining(JoinInfo);

impl<T: Display> Collector<T> for Joining {
    type Acc = Vec<String>;
    type Output = String;

    fn supply(&mut self) -> Vec<String> {
        Vec::new()
    }

    fn accumulate(&mut self, acc: &mut Vec<String>, item: T) {
        acc.push(item.to_string());
    }

    fn finish(&mut self, acc: Vec<String>) -> String {
        format!("{}{}{}", self.0.prefix, acc.join(&self.0.delimiter), self.0.postfix)
    }
}

/// 将元素格式化后合并为一个字符串。
pub fn joining(join_info: JoinInfo) -> Joining {
    Joining(join_info)
}

pub fn joining_with(delimiter: impl Into<String>) -> Joining {
    Joining(JoinInfo { delimiter: delimiter.into(), ..JoinInfo::default() })
}

/* **************************************** 归约 **************************************** */

#[derive(Debug, Clone, Copy, Default)]
pub struct Counting;

impl<T> Collector<T> for Counting {
    type Acc = usize;
    type Output = usize;

    fn supply(&mut self) -> usize {
        0
    }

    fn accumulate(&mut self, acc: &mut usize, _item: T) {
        *acc += 1;
    }

    fn finish(&mut self, acc: usize) -> usize {
        acc
    }
}

pub fn counting() -> Counting {
    Counting
}

pub struct Reducing<T, F> {
    identity: T,
    op: F,
}

impl<T: Clone, F: FnMut(T, T) -> T> Collector<T> for Reducing<T, F> {
    type Acc = Option<T>;
    type Output = T;

    fn supply(&mut self) -> Option<T> {
        Some(self.identity.clone())
    }

    fn accumulate(&mut self, acc: &mut Option<T>, item: T) {
        *acc = acc.take().map(|prev| (self.op)(prev, item));
    }

    fn finish(&mut self, acc: Option<T>) -> T {
        acc.unwrap_or_else(|| self.identity.clone())
    }
}

/// 以`identity`为初始值归约，每个分组都从`identity`的副本开始。
pub fn reducing<T: Clone, F: FnMut(T, T) -> T>(identity: T, op: F) -> Reducing<T, F> {
    Reducing { identity, op }
}

pub struct ReducingOpt<F>(F);

impl<T, F: FnMut(T, T) -> T> Collector<T> for ReducingOpt<F> {
    type Acc = Option<T>;
    type Output = Option<T>;

    fn supply(&mut self) -> Option<T> {
        None
    }

    fn accumulate(&mut self, acc: &mut Option<T>, item: T) {
        *acc = Some(match acc.take() {
            Some(prev) => (self.0)(prev, item),
            None => item,
        });
    }

    fn finish(&mut self, acc: Option<T>) -> Option<T> {
        acc
    }
}

/// 以第一个元素为初始值归约，没有元素时为`None`。
pub fn reducing_opt<T, F: FnMut(T, T) -> T>(op: F) -> ReducingOpt<F> {
    ReducingOpt(op)
}

pub struct MaxBy<F>(F);

impl<T, F: FnMut(&T, &T) -> Ordering> Collector<T> for MaxBy<F> {
    type Acc = Option<T>;
    type Output = Option<T>;

    fn supply(&mut self) -> Option<T> {
        None
    }

    fn accumulate(&mut self, acc: &mut Option<T>, item: T) {
        // 相等时取后者，与`Iterator::max_by`一致
        if acc.as_ref().is_none_or(|max| (self.0)(&item, max) != Ordering::Less) {
            *acc = Some(item);
        }
    }

    fn finish(&mut self, acc: Option<T>) -> Option<T> {
        acc
    }
}

pub fn max_by<T, F: FnMut(&T, &T) -> Ordering>(cmp: F) -> MaxBy<F> {
    MaxBy(cmp)
}

pub struct MinBy<F>(F);

impl<T, F: FnMut(&T, &T) -> Ordering> Collector<T> for MinBy<F> {
    type Acc = Option<T>;
    type Output = Option<T>;

    fn supply(&mut self) -> Option<T> {
        None
    }

    fn accumulate(&mut self, acc: &mut Option<T>, item: T) {
        // 相等时保留前者，与`Iterator::min_by`一致
        if acc.as_ref().is_none_or(|min| (self.0)(&item, min) == Ordering::Less) {
            *acc = Some(item);
        }
    }

    fn finish(&mut self, acc: Option<T>) -> Option<T> {
        acc
    }
}

pub fn min_by<T, F: FnMut(&T, &T) -> Ordering>(cmp: F) -> MinBy<F> {
    MinBy(cmp)
}

/* **************************************** 组合 **************************************** */

pub struct AndThen<C, F> {
    collector: C,
    finisher: F,
}

impl<T, R, C, F> Collector<T> for AndThen<C, F>
where
    C: Collector<T>,
    F: FnMut(C::Output) -> R,
{
    type Acc = C::Acc;
    type Output = R;

    fn supply(&mut self) -> C::Acc {
        self.collector.supply()
    }

    fn accumulate(&mut self, acc: &mut C::Acc, item: T) {
        self.collector.accumulate(acc, item);
    }

    fn finish(&mut self, acc: C::Acc) -> R {
        (self.finisher)(self.collector.finish(acc))
    }
}

pub fn collecting_and_then<C, F>(collector: C, finisher: F) -> AndThen<C, F> {
    AndThen { collector, finisher }
}

pub struct Mapping<F, D> {
    mapper: F,
    downstream: D,
}

impl<T, U, F, D> Collector<T> for Mapping<F, D>
where
    F: FnMut(T) -> U,
    D: Collector<U>,
{
    type Acc = D::Acc;
    type Output = D::Output;

    fn supply(&mut self) -> D::Acc {
        self.downstream.supply()
    }

    fn accumulate(&mut self, acc: &mut D::Acc, item: T) {
        self.downstream.accumulate(acc, (self.mapper)(item));
    }

    fn finish(&mut self, acc: D::Acc) -> D::Output {
        self.downstream.finish(acc)
    }
}

/// 先转换元素再交给下游收集器。
pub fn mapping<T, U, F, D>(mapper: F, downstream: D) -> Mapping<F, D>
where
    F: FnMut(T) -> U,
    D: Collector<U>,
{
    Mapping { mapper, downstream }
}

pub struct Filtering<P, D> {
    predicate: P,
    downstream: D,
}

impl<T, P, D> Collector<T> for Filtering<P, D>
where
    P: FnMut(&T) -> bool,
    D: Collector<T>,
{
    type Acc = D::Acc;
    type Output = D::Output;

    fn supply(&mut self) -> D::Acc {
        self.downstream.supply()
    }

    fn accumulate(&mut self, acc: &mut D::Acc, item: T) {
        if (self.predicate)(&item) {
            self.downstream.accumulate(acc, item);
        }
    }

    fn finish(&mut self, acc: D::Acc) -> D::Output {
        self.downstream.finish(acc)
    }
}

/// 只将满足条件的元素交给下游收集器，分组后即使没有元素满足条件，分组也会保留。
pub fn filtering<T, P, D>(predicate: P, downstream: D) -> Filtering<P, D>
where
    P: FnMut(&T) -> bool,
    D: Collector<T>,
{
    Filtering { predicate, downstream }
}

pub struct FlatMapping<F, D> {
    mapper: F,
    downstream: D,
}

impl<T, I, F, D> Collector<T> for FlatMapping<F, D>
where
    I: IntoIterator,
    F: FnMut(T) -> I,
    D: Collector<I::Item>,
{
    type Acc = D::Acc;
    type Output = D::Output;

    fn supply(&mut self) -> D::Acc {
        self.downstream.supply()
    }

    fn accumulate(&mut self, acc: &mut D::Acc, item: T) {
        for sub in (self.mapper)(item) {
            self.downstream.accumulate(acc, sub);
        }
    }

    fn finish(&mut self, acc: D::Acc) -> D::Output {
        self.downstream.finish(acc)
    }
}

/// 将元素展开为子序列，子序列中的每个元素都交给下游收集器。
pub fn flat_mapping<T, I, F, D>(mapper: F, downstream: D) -> FlatMapping<F, D>
where
    I: IntoIterator,
    F: FnMut(T) -> I,
    D: Collector<I::Item>,
{
    FlatMapping { mapper, downstream }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::comparator::comparing;
    use crate::stream::Stream;
    use std::collections::{BTreeSet, VecDeque};

    fn words() -> Stream<&'static str> {
        Stream::of(vec!["apple", "bob", "cat", "apple", "dove"])
    }

    #[test]
    fn test_containers() {
        assert_eq!(words().collect(to_list()).unwrap(), vec!["apple", "bob", "cat", "apple", "dove"]);
        let set = words().collect(to_set()).unwrap();
        assert_eq!(set.len(), 4);
        assert!(set.contains("dove"));
        assert_eq!(
            words().collect(to_collection(BTreeSet::new)).unwrap().into_iter().collect::<Vec<_>>(),
            vec!["apple", "bob", "cat", "dove"]
        );
        assert_eq!(words().limit(2).collect(to_collection(VecDeque::new)).unwrap(), VecDeque::from(["apple", "bob"]));
    }

    #[test]
    fn test_to_map_merges_duplicates() {
        let merge = |a: String, b: String| a + "," + &b;
        let map = words().collect(to_map(|w: &&str| w.len(), |w: &str| w.to_string(), merge)).unwrap();
        assert_eq!(map.len(), 3);
        assert_eq!(map[&5], "apple,apple");
        assert_eq!(map[&3], "bob,cat");
        assert_eq!(map[&4], "dove");
    }

    #[test]
    fn test_joining() {
        assert_eq!(Stream::range(1, 4).collect(joining_with(", ")).unwrap(), "1, 2, 3");
        assert_eq!(Stream::range(1, 4).collect(joining(JoinInfo::new(",", "[", "]"))).unwrap(), "[1,2,3]");
        assert_eq!(Stream::<i32>::empty().collect(joining(JoinInfo::new(",", "[", "]"))).unwrap(), "[]");
    }

    #[test]
    fn test_counting_and_reducing() {
        assert_eq!(words().collect(counting()), Ok(5));
        assert_eq!(Stream::<i32>::empty().collect(counting()), Ok(0));
        assert_eq!(Stream::range(1, 5).collect(reducing(0, |a, b| a + b)), Ok(10));
        assert_eq!(Stream::<i32>::empty().collect(reducing(7, |a, b| a * b)), Ok(7));
        assert_eq!(Stream::range(1, 5).collect(reducing_opt(|a, b| a * b)), Ok(Some(24)));
        assert_eq!(Stream::<i32>::empty().collect(reducing_opt(|a: i32, b| a * b)), Ok(None));
    }

    #[test]
    fn test_max_by_and_min_by() {
        let by_len = || comparing(|w: &&str| w.len());
        assert_eq!(words().collect(max_by(by_len())), Ok(Some("apple")));
        assert_eq!(words().collect(min_by(by_len())), Ok(Some("bob")));
        assert_eq!(Stream::<&str>::empty().collect(max_by(by_len())), Ok(None));
    }

    #[test]
    fn test_adapters() {
        assert_eq!(words().collect(mapping(|w: &str| w.len(), to_list())), Ok(vec![5, 3, 3, 5, 4]));
        assert_eq!(words().collect(filtering(|w: &&str| w.len() == 3, counting())), Ok(2));
        assert_eq!(
            Stream::of(vec!["ab", "", "c"]).collect(flat_mapping(|w: &'static str| w.chars(), to_list())),
            Ok(vec!['a', 'b', 'c'])
        );
        assert_eq!(words().collect(collecting_and_then(to_list(), |v: Vec<&str>| v.len())), Ok(5));
        assert_eq!(words().collect(Collector::<&str>::and_then(counting(), |n: usize| n * 10)), Ok(50));
    }
}

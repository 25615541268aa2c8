use crate::collectors::{Collector, ToList};
use rustc_hash::FxHashMap;
use std::hash::Hash;
use std::ops::Index;

/* **************************************** 分组 **************************************** */

/// 分组过程中的累加容器，按键首次出现的顺序保存每个分组的下游累加容器。
#[derive(Debug)]
pub struct Groups<K, A> {
    index: FxHashMap<K, usize>,
    entries: Vec<(K, A)>,
}

pub struct GroupingBy<F, D, M> {
    classifier: F,
    downstream: D,
    map_factory: M,
}

impl<T, K, Map, F, D, M> Collector<T> for GroupingBy<F, D, M>
where
    K: Eq + Hash + Clone,
    F: FnMut(&T) -> K,
    D: Collector<T>,
    M: FnMut() -> Map,
    Map: Extend<(K, D::Output)>,
{
    type Acc = Groups<K, D::Acc>;
    type Output = Map;

    fn supply(&mut self) -> Self::Acc {
        Groups { index: FxHashMap::default(), entries: Vec::new() }
    }

    fn accumulate(&mut self, acc: &mut Self::Acc, item: T) {
        let key = (self.classifier)(&item);
        let slot = match acc.index.get(&key) {
            Some(&slot) => slot,
            None => {
                let slot = acc.entries.len();
                acc.entries.push((key.clone(), self.downstream.supply()));
                acc.index.insert(key, slot);
                slot
            }
        };
        self.downstream.accumulate(&mut acc.entries[slot].1, item);
    }

    fn finish(&mut self, acc: Self::Acc) -> Map {
        let mut map = (self.map_factory)();
        let downstream = &mut self.downstream;
        map.extend(acc.entries.into_iter().map(|(key, group)| (key, downstream.finish(group))));
        map
    }
}

/// 按`classifier`的结果分组，每组收集为`Vec`。
pub fn grouping_by<T, K, F>(classifier: F) -> GroupingBy<F, ToList, fn() -> FxHashMap<K, Vec<T>>>
where
    K: Eq + Hash + Clone,
    F: FnMut(&T) -> K,
{
    GroupingBy { classifier, downstream: ToList, map_factory: FxHashMap::default }
}

/// 按`classifier`的结果分组，每组由下游收集器独立归约。
pub fn grouping_by_with<T, K, F, D>(classifier: F, downstream: D) -> GroupingBy<F, D, fn() -> FxHashMap<K, D::Output>>
where
    K: Eq + Hash + Clone,
    F: FnMut(&T) -> K,
    D: Collector<T>,
{
    GroupingBy { classifier, downstream, map_factory: FxHashMap::default }
}

/// 按`classifier`的结果分组，结果写入`map_factory`创建的映射。
///
/// 分组按键首次出现的顺序写入映射，因此保持插入顺序的映射会按遭遇顺序遍历各分组。
pub fn grouping_by_into<T, K, F, D, M, Map>(classifier: F, map_factory: M, downstream: D) -> GroupingBy<F, D, M>
where
    K: Eq + Hash + Clone,
    F: FnMut(&T) -> K,
    D: Collector<T>,
    M: FnMut() -> Map,
    Map: Extend<(K, D::Output)>,
{
    GroupingBy { classifier, downstream, map_factory }
}

/* **************************************** 分区 **************************************** */

/// 分区结果，总是同时包含`true`与`false`两个键。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Partition<R> {
    /// 满足条件的部分，对应键`true`
    pub matched: R,
    /// 不满足条件的部分，对应键`false`
    pub unmatched: R,
}

impl<R> Partition<R> {
    pub fn get(&self, key: bool) -> &R {
        if key { &self.matched } else { &self.unmatched }
    }

    pub fn get_mut(&mut self, key: bool) -> &mut R {
        if key { &mut self.matched } else { &mut self.unmatched }
    }

    /// 键的数量，恒为2
    pub const fn len(&self) -> usize {
        2
    }

    pub const fn is_empty(&self) -> bool {
        false
    }

    /// 依次为`false`、`true`两个分区。
    pub fn iter(&self) -> std::array::IntoIter<(bool, &R), 2> {
        [(false, &self.unmatched), (true, &self.matched)].into_iter()
    }

    pub fn map<U>(self, mut f: impl FnMut(R) -> U) -> Partition<U> {
        Partition { matched: f(self.matched), unmatched: f(self.unmatched) }
    }
}

impl<R> Index<bool> for Partition<R> {
    type Output = R;

    fn index(&self, key: bool) -> &R {
        self.get(key)
    }
}

impl<R> IntoIterator for Partition<R> {
    type Item = (bool, R);
    type IntoIter = std::array::IntoIter<(bool, R), 2>;

    fn into_iter(self) -> Self::IntoIter {
        [(false, self.unmatched), (true, self.matched)].into_iter()
    }
}

pub struct PartitioningBy<P, D> {
    predicate: P,
    downstream: D,
}

impl<T, P, D> Collector<T> for PartitioningBy<P, D>
where
    P: FnMut(&T) -> bool,
    D: Collector<T>,
{
    type Acc = Partition<D::Acc>;
    type Output = Partition<D::Output>;

    fn supply(&mut self) -> Self::Acc {
        Partition { matched: self.downstream.supply(), unmatched: self.downstream.supply() }
    }

    fn accumulate(&mut self, acc: &mut Self::Acc, item: T) {
        let key = (self.predicate)(&item);
        self.downstream.accumulate(acc.get_mut(key), item);
    }

    fn finish(&mut self, acc: Self::Acc) -> Self::Output {
        acc.map(|part| self.downstream.finish(part))
    }
}

/// 按条件分为两部分，每部分收集为`Vec`，没有元素的部分为空`Vec`。
pub fn partitioning_by<T, P: FnMut(&T) -> bool>(predicate: P) -> PartitioningBy<P, ToList> {
    PartitioningBy { predicate, downstream: ToList }
}

/// 按条件分为两部分，每部分由下游收集器独立归约。
pub fn partitioning_by_with<T, P, D>(predicate: P, downstream: D) -> PartitioningBy<P, D>
where
    P: FnMut(&T) -> bool,
    D: Collector<T>,
{
    PartitioningBy { predicate, downstream }
}

use crate::pipe::Pipe;
use itertools::Itertools;
use rustc_hash::FxHashSet;
use std::cmp::Ordering;
use std::fmt;
use std::hash::Hash;

pub(crate) type Predicate<T> = Box<dyn FnMut(&T) -> bool>;
pub(crate) type Comparator<T> = Box<dyn FnMut(&T, &T) -> Ordering>;

/// 不改变元素类型的中间操作。
///
/// `map`与`flat_map`会改变元素类型，由`Stream`直接包装管道，不在此枚举中。
pub(crate) enum Op<T> {
    /* **************************************** 访问 **************************************** */
    /// 对每个元素执行观察函数后原样传递。
    Peek(Box<dyn FnMut(&T)>),
    /* **************************************** 减少 **************************************** */
    /// 仅保留满足条件的元素。
    Filter(Predicate<T>),
    /// 最多保留前N个元素，之后不再从上游拉取。
    Limit(usize),
    /// 丢弃前N个元素。
    Skip(usize),
    /// 去重，保留首次出现的元素，判定函数持有已出现元素的集合。
    Distinct(Predicate<T>),
    /// 持续保留元素，直到条件首次不满足。
    TakeWhile(Predicate<T>),
    /// 持续丢弃元素，直到条件首次不满足。
    DropWhile(Predicate<T>),
    /* **************************************** 调整位置 **************************************** */
    /// 排序，首次拉取时读取全部上游元素，稳定排序后逐个输出。
    Sorted(Comparator<T>),
}

impl<T: 'static> Op<T> {
    pub(crate) fn new_distinct() -> Op<T>
    where
        T: Eq + Hash + Clone,
    {
        let mut seen = FxHashSet::default();
        Op::Distinct(Box::new(move |item: &T| {
            // 已出现过的元素不再克隆
            if seen.contains(item) { false } else { seen.insert(item.clone()) }
        }))
    }

    pub(crate) fn new_sorted(cmp: impl FnMut(&T, &T) -> Ordering + 'static) -> Op<T> {
        Op::Sorted(Box::new(cmp))
    }

    pub(crate) fn wrap(self, pipe: Pipe<T>) -> Pipe<T> {
        match self {
            Op::Peek(f) => pipe.op_inspect(f),
            Op::Filter(p) => pipe.op_filter(p),
            Op::Limit(count) => Pipe::new(pipe.take(count)),
            Op::Skip(count) => Pipe::new(pipe.skip(count)),
            Op::Distinct(first_seen) => pipe.op_filter(first_seen),
            Op::TakeWhile(p) => Pipe::new(pipe.take_while(p)),
            Op::DropWhile(p) => Pipe::new(pipe.skip_while(p)),
            Op::Sorted(cmp) => Pipe::new(SortedIter { source: Some(pipe), cmp, sorted: None }),
        }
    }
}

impl<T> fmt::Debug for Op<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Op::Peek(_) => write!(f, "peek"),
            Op::Filter(_) => write!(f, "filter"),
            Op::Limit(count) => write!(f, "limit({count})"),
            Op::Skip(count) => write!(f, "skip({count})"),
            Op::Distinct(_) => write!(f, "distinct"),
            Op::TakeWhile(_) => write!(f, "take_while"),
            Op::DropWhile(_) => write!(f, "drop_while"),
            Op::Sorted(_) => write!(f, "sorted"),
        }
    }
}

/// 排序屏障，构造时不拉取，首次`next`时才读取全部上游数据。
struct SortedIter<T> {
    source: Option<Pipe<T>>,
    cmp: Comparator<T>,
    sorted: Option<std::vec::IntoIter<T>>,
}

impl<T: 'static> Iterator for SortedIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(source) = self.source.take() {
            let cmp = &mut self.cmp;
            self.sorted = Some(source.sorted_by(|a, b| cmp(a, b)));
        }
        self.sorted.as_mut()?.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match (&self.source, &self.sorted) {
            (Some(source), _) => source.size_hint(),
            (None, Some(sorted)) => sorted.size_hint(),
            (None, None) => (0, Some(0)),
        }
    }
}

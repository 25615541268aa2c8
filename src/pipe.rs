use std::fmt;

/// 按需拉取元素的管道，每个阶段都包装上一个阶段的管道。
pub struct Pipe<T> {
    pub(crate) iter: Box<dyn Iterator<Item = T>>,
}

impl<T> Iterator for Pipe<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.iter.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<T> fmt::Debug for Pipe<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pipe").finish_non_exhaustive()
    }
}

impl<T: 'static> Pipe<T> {
    pub(crate) fn new(iter: impl Iterator<Item = T> + 'static) -> Pipe<T> {
        Pipe { iter: Box::new(iter) }
    }

    pub(crate) fn op_map<U: 'static>(self, f: impl FnMut(T) -> U + 'static) -> Pipe<U> {
        Pipe { iter: Box::new(self.map(f)) }
    }

    pub(crate) fn op_flat_map<I>(self, f: impl FnMut(T) -> I + 'static) -> Pipe<I::Item>
    where
        I: IntoIterator + 'static,
        I::IntoIter: 'static,
        I::Item: 'static,
    {
        Pipe { iter: Box::new(self.flat_map(f)) }
    }

    pub(crate) fn op_filter(self, f: impl FnMut(&T) -> bool + 'static) -> Pipe<T> {
        Pipe { iter: Box::new(self.filter(f)) }
    }

    pub(crate) fn op_inspect(self, f: impl FnMut(&T) + 'static) -> Pipe<T> {
        Pipe { iter: Box::new(self.inspect(f)) }
    }

    pub(crate) fn op_chain(self, other: Pipe<T>) -> Pipe<T> {
        Pipe { iter: Box::new(self.chain(other)) }
    }
}

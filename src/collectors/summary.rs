use crate::collectors::Collector;
use crate::numeric::{Numeric, SummaryStatistics};

pub struct Summing<F>(F);

impl<T, N, F> Collector<T> for Summing<F>
where
    N: Numeric,
    F: FnMut(&T) -> N,
{
    type Acc = N;
    type Output = N;

    fn supply(&mut self) -> N {
        N::default()
    }

    fn accumulate(&mut self, acc: &mut N, item: T) {
        *acc = *acc + (self.0)(&item);
    }

    fn finish(&mut self, acc: N) -> N {
        acc
    }
}

/// 累加提取的数值，没有元素时为0。
pub fn summing<T, N: Numeric, F: FnMut(&T) -> N>(extractor: F) -> Summing<F> {
    Summing(extractor)
}

pub fn summing_i32<T, F: FnMut(&T) -> i32>(extractor: F) -> Summing<F> {
    Summing(extractor)
}

pub fn summing_i64<T, F: FnMut(&T) -> i64>(extractor: F) -> Summing<F> {
    Summing(extractor)
}

pub fn summing_f64<T, F: FnMut(&T) -> f64>(extractor: F) -> Summing<F> {
    Summing(extractor)
}

pub struct Averaging<F>(F);

impl<T, N, F> Collector<T> for Averaging<F>
where
    N: Numeric,
    F: FnMut(&T) -> N,
{
    /// 总和与数量
    type Acc = (f64, usize);
    type Output = f64;

    fn supply(&mut self) -> (f64, usize) {
        (0.0, 0)
    }

    fn accumulate(&mut self, acc: &mut (f64, usize), item: T) {
        acc.0 += (self.0)(&item).to_f64();
        acc.1 += 1;
    }

    fn finish(&mut self, (sum, count): (f64, usize)) -> f64 {
        if count == 0 { 0.0 } else { sum / count as f64 }
    }
}

/// 提取数值的算术平均值，结果总是浮点数，没有元素时为0.0。
pub fn averaging<T, N: Numeric, F: FnMut(&T) -> N>(extractor: F) -> Averaging<F> {
    Averaging(extractor)
}

pub fn averaging_i32<T, F: FnMut(&T) -> i32>(extractor: F) -> Averaging<F> {
    Averaging(extractor)
}

pub fn averaging_i64<T, F: FnMut(&T) -> i64>(extractor: F) -> Averaging<F> {
    Averaging(extractor)
}

pub fn averaging_f64<T, F: FnMut(&T) -> f64>(extractor: F) -> Averaging<F> {
    Averaging(extractor)
}

pub struct Summarizing<F>(F);

impl<T, N, F> Collector<T> for Summarizing<F>
where
    N: Numeric,
    F: FnMut(&T) -> N,
{
    type Acc = SummaryStatistics<N>;
    type Output = SummaryStatistics<N>;

    fn supply(&mut self) -> SummaryStatistics<N> {
        SummaryStatistics::default()
    }

    fn accumulate(&mut self, acc: &mut SummaryStatistics<N>, item: T) {
        acc.accept((self.0)(&item));
    }

    fn finish(&mut self, acc: SummaryStatistics<N>) -> SummaryStatistics<N> {
        acc
    }
}

/// 统计提取数值的数量、总和、最小值、最大值与平均值。
pub fn summarizing<T, N: Numeric, F: FnMut(&T) -> N>(extractor: F) -> Summarizing<F> {
    Summarizing(extractor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stream::Stream;

    fn prices() -> Stream<(&'static str, i32)> {
        Stream::of(vec![("pen", 3), ("book", 12), ("bag", 30), ("cup", 5)])
    }

    #[test]
    fn test_summing() {
        assert_eq!(prices().collect(summing_i32(|p: &(&str, i32)| p.1)), Ok(50));
        assert_eq!(prices().collect(summing_i64(|p: &(&str, i32)| p.1 as i64 * 1_000_000_000)), Ok(50_000_000_000));
        assert_eq!(Stream::of(vec![0.5, 0.25]).collect(summing_f64(|x: &f64| *x)), Ok(0.75));
        assert_eq!(Stream::<u8>::empty().collect(summing(|x: &u8| *x as u32)), Ok(0));
    }

    #[test]
    fn test_averaging() {
        assert_eq!(prices().collect(averaging_i32(|p: &(&str, i32)| p.1)), Ok(12.5));
        assert_eq!(Stream::of(vec![1i64, 2]).collect(averaging_i64(|x: &i64| *x)), Ok(1.5));
        assert_eq!(Stream::of(vec![1.0, 2.0, 4.5]).collect(averaging_f64(|x: &f64| *x)), Ok(2.5));
        assert_eq!(Stream::<i32>::empty().collect(averaging(|x: &i32| *x)), Ok(0.0));
    }

    #[test]
    fn test_summarizing() {
        let stats = prices().collect(summarizing(|p: &(&str, i32)| p.1)).unwrap();
        assert_eq!(stats.count(), 4);
        assert_eq!(stats.sum(), 50);
        assert_eq!(stats.min(), Some(3));
        assert_eq!(stats.max(), Some(30));
        assert_eq!(stats.average(), 12.5);
    }
}

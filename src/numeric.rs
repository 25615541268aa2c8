use std::ops::Add;

/// 可累加、可求平均值的数值类型
pub trait Numeric: Copy + PartialOrd + Default + Add<Output = Self> + 'static {
    /// 统计总和时使用的更宽类型
    ///
    /// 128位整数没有更宽的类型，总和仍可能溢出。
    type Sum: Numeric;

    fn to_f64(self) -> f64;

    fn widen(self) -> Self::Sum;
}

macro_rules! impl_numeric {
    ($($t:ty => $sum:ty),*) => {
        $(
            impl Numeric for $t {
                type Sum = $sum;

                #[inline]
                fn to_f64(self) -> f64 {
                    self as f64
                }

                #[inline]
                fn widen(self) -> $sum {
                    self as $sum
                }
            }
        )*
    };
}

impl_numeric!(
    i8 => i64, i16 => i64, i32 => i64, i64 => i128, i128 => i128, isize => i128,
    u8 => u64, u16 => u64, u32 => u64, u64 => u128, u128 => u128, usize => u128,
    f32 => f64, f64 => f64
);

/// 数值统计：数量、总和、最小值、最大值、平均值。
///
/// 总和以[`Numeric::Sum`]累加，例如`i32`的总和为`i64`。
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SummaryStatistics<N: Numeric> {
    count: usize,
    sum: N::Sum,
    min: Option<N>,
    max: Option<N>,
}

impl<N: Numeric> SummaryStatistics<N> {
    pub fn accept(&mut self, value: N) {
        self.count += 1;
        self.sum = self.sum + value.widen();
        if self.min.is_none_or(|min| value < min) {
            self.min = Some(value);
        }
        if self.max.is_none_or(|max| value > max) {
            self.max = Some(value);
        }
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn sum(&self) -> N::Sum {
        self.sum
    }

    /// 没有数据时为`None`
    pub fn min(&self) -> Option<N> {
        self.min
    }

    /// 没有数据时为`None`
    pub fn max(&self) -> Option<N> {
        self.max
    }

    /// 没有数据时为0.0
    pub fn average(&self) -> f64 {
        if self.count == 0 { 0.0 } else { self.sum.to_f64() / self.count as f64 }
    }
}

impl<N: Numeric> Extend<N> for SummaryStatistics<N> {
    fn extend<I: IntoIterator<Item = N>>(&mut self, iter: I) {
        iter.into_iter().for_each(|value| self.accept(value));
    }
}

//! 比较器构造工具，可直接用于`sorted_by`、`max_by`、`min_by`以及`collectors::max_by`等。

use ordered_float::OrderedFloat;
use std::cmp::Ordering;
use unicase::UniCase;

/// 自然顺序
pub fn natural_order<T: Ord>() -> impl Fn(&T, &T) -> Ordering + Copy {
    |a: &T, b: &T| a.cmp(b)
}

/// 自然顺序的逆序
pub fn reverse_order<T: Ord>() -> impl Fn(&T, &T) -> Ordering + Copy {
    |a: &T, b: &T| b.cmp(a)
}

/// 按提取的键比较
pub fn comparing<T, K: Ord>(key: impl Fn(&T) -> K) -> impl Fn(&T, &T) -> Ordering {
    move |a: &T, b: &T| key(a).cmp(&key(b))
}

/// 按提取的浮点数键比较，使用全序：`NaN`大于所有其他值。
pub fn comparing_f64<T>(key: impl Fn(&T) -> f64) -> impl Fn(&T, &T) -> Ordering {
    move |a: &T, b: &T| OrderedFloat(key(a)).cmp(&OrderedFloat(key(b)))
}

/// 按提取的字符串键忽略大小写比较
pub fn case_insensitive<T, S: AsRef<str>>(key: impl Fn(&T) -> S) -> impl Fn(&T, &T) -> Ordering {
    move |a: &T, b: &T| {
        let (left, right) = (key(a), key(b));
        UniCase::new(left.as_ref()).cmp(&UniCase::new(right.as_ref()))
    }
}

pub fn reversed<T>(cmp: impl Fn(&T, &T) -> Ordering) -> impl Fn(&T, &T) -> Ordering {
    move |a: &T, b: &T| cmp(b, a)
}

/// 先按`first`比较，相等时再按`second`比较。
pub fn then_comparing<T>(
    first: impl Fn(&T, &T) -> Ordering,
    second: impl Fn(&T, &T) -> Ordering,
) -> impl Fn(&T, &T) -> Ordering {
    move |a: &T, b: &T| first(a, b).then_with(|| second(a, b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_natural_and_reverse() {
        let mut v = vec![3, 1, 2];
        v.sort_by(natural_order());
        assert_eq!(v, vec![1, 2, 3]);
        v.sort_by(reverse_order());
        assert_eq!(v, vec![3, 2, 1]);
    }

    #[test]
    fn test_comparing_and_then_comparing() {
        let mut v = vec![('b', 2), ('a', 2), ('c', 1)];
        v.sort_by(then_comparing(comparing(|p: &(char, i32)| p.1), comparing(|p: &(char, i32)| p.0)));
        assert_eq!(v, vec![('c', 1), ('a', 2), ('b', 2)]);
        v.sort_by(reversed(comparing(|p: &(char, i32)| p.0)));
        assert_eq!(v, vec![('c', 1), ('b', 2), ('a', 2)]);
    }

    #[test]
    fn test_comparing_f64() {
        let mut v = vec![2.5, f64::NAN, -1.0, 0.0];
        v.sort_by(comparing_f64(|x: &f64| *x));
        assert_eq!(&v[..3], &[-1.0, 0.0, 2.5]);
        assert!(v[3].is_nan());
    }

    #[test]
    fn test_case_insensitive() {
        let mut v = vec!["banana", "Apple", "cherry", "apple"];
        v.sort_by(case_insensitive(|s: &&'static str| *s));
        assert_eq!(v, vec!["Apple", "apple", "banana", "cherry"]);
    }
}

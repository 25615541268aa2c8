use std::fmt;

/// 流水线特征，由数据源设置，由中间操作更新。
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Characteristic {
    /// 保持遭遇顺序，基于序列的数据源默认具备。
    Ordered,
    /// 元素两两不等，基于集合的数据源默认具备。
    Distinct,
    /// 已按自然顺序排序。
    Sorted,
}

impl Characteristic {
    const fn bit(self) -> u8 {
        match self {
            Characteristic::Ordered => 0b001,
            Characteristic::Distinct => 0b010,
            Characteristic::Sorted => 0b100,
        }
    }
}

/// 特征集合
#[derive(Clone, Copy, Default, Eq, PartialEq)]
pub struct Characteristics(u8);

impl Characteristics {
    pub const NONE: Characteristics = Characteristics(0);
    pub const ORDERED: Characteristics = Characteristics(0b001);

    pub fn of(characteristics: &[Characteristic]) -> Characteristics {
        characteristics.iter().fold(Characteristics::NONE, |acc, c| acc.with(*c))
    }

    #[inline]
    pub fn contains(&self, characteristic: Characteristic) -> bool {
        self.0 & characteristic.bit() != 0
    }

    #[must_use]
    pub fn with(self, characteristic: Characteristic) -> Characteristics {
        Characteristics(self.0 | characteristic.bit())
    }

    #[must_use]
    pub fn without(self, characteristic: Characteristic) -> Characteristics {
        Characteristics(self.0 & !characteristic.bit())
    }

    /// 两个特征集合的交集，用于拼接数据源。
    #[must_use]
    pub fn intersect(self, other: Characteristics) -> Characteristics {
        Characteristics(self.0 & other.0)
    }
}

impl fmt::Debug for Characteristics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let all = [Characteristic::Ordered, Characteristic::Distinct, Characteristic::Sorted];
        f.debug_set().entries(all.iter().filter(|c| self.contains(**c))).finish()
    }
}

/// 映射后元素值发生变化，去重与排序特征不再成立。
#[inline]
pub(crate) fn after_map(characteristics: Characteristics) -> Characteristics {
    characteristics.without(Characteristic::Distinct).without(Characteristic::Sorted)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_and_without() {
        let c = Characteristics::of(&[Characteristic::Ordered, Characteristic::Sorted]);
        assert!(c.contains(Characteristic::Ordered));
        assert!(!c.contains(Characteristic::Distinct));
        assert!(c.contains(Characteristic::Sorted));
        let c = c.without(Characteristic::Sorted).with(Characteristic::Distinct);
        assert!(!c.contains(Characteristic::Sorted));
        assert!(c.contains(Characteristic::Distinct));
        assert_eq!(Characteristics::NONE.with(Characteristic::Ordered), Characteristics::ORDERED);
    }

    #[test]
    fn test_after_map_and_intersect() {
        let all = Characteristics::of(&[Characteristic::Ordered, Characteristic::Distinct, Characteristic::Sorted]);
        assert_eq!(after_map(all), Characteristics::ORDERED);
        let unordered = Characteristics::of(&[Characteristic::Distinct]);
        assert_eq!(all.intersect(unordered), unordered);
        assert_eq!(format!("{:?}", all), "{Ordered, Distinct, Sorted}");
    }
}

use crate::domain::model::{Color, Product, Size};
use crate::domain::ports::Specification;
use std::ops::BitAnd;

pub struct ColorSpecification {
    color: Color,
}

impl ColorSpecification {
    pub fn new(color: Color) -> Self {
        Self { color }
    }
}

impl Specification<Product> for ColorSpecification {
    fn is_satisfied(&self, item: &Product) -> bool {
        item.color == self.color
    }
}

pub struct SizeSpecification {
    size: Size,
}

impl SizeSpecification {
    pub fn new(size: Size) -> Self {
        Self { size }
    }
}

impl Specification<Product> for SizeSpecification {
    fn is_satisfied(&self, item: &Product) -> bool {
        item.size == self.size
    }
}

/// 名稱比對不分大小寫
pub struct NameSpecification {
    name: String,
}

impl NameSpecification {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into().to_lowercase(),
        }
    }
}

impl Specification<Product> for NameSpecification {
    fn is_satisfied(&self, item: &Product) -> bool {
        item.name.to_lowercase() == self.name
    }
}

/// 所有子條件都成立才成立；沒有子條件時一律成立
pub struct AndSpecification<T> {
    specs: Vec<Box<dyn Specification<T>>>,
}

impl<T> AndSpecification<T> {
    pub fn new() -> Self {
        Self { specs: Vec::new() }
    }

    pub fn with<S>(mut self, spec: S) -> Self
    where
        S: Specification<T> + 'static,
    {
        self.specs.push(Box::new(spec));
        self
    }

    pub fn len(&self) -> usize {
        self.specs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }
}

impl<T> Default for AndSpecification<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Specification<T> for AndSpecification<T> {
    fn is_satisfied(&self, item: &T) -> bool {
        self.specs.iter().all(|spec| spec.is_satisfied(item))
    }

    // 串接時直接加到同一層，不再往下包
    fn and_with<S>(self, other: S) -> AndSpecification<T>
    where
        Self: Sized + 'static,
        S: Specification<T> + 'static,
    {
        self.with(other)
    }
}

/// 反例：只能接兩個條件，三個以上就得一層一層包起來
pub struct BinaryAndSpecification<A, B> {
    first: A,
    second: B,
}

impl<A, B> BinaryAndSpecification<A, B> {
    pub fn new(first: A, second: B) -> Self {
        Self { first, second }
    }
}

impl<T, A, B> Specification<T> for BinaryAndSpecification<A, B>
where
    A: Specification<T>,
    B: Specification<T>,
{
    fn is_satisfied(&self, item: &T) -> bool {
        self.first.is_satisfied(item) && self.second.is_satisfied(item)
    }
}

// `large & blue` 形式的語法糖，等同於 `and_with`
macro_rules! impl_bitand_for_product_spec {
    ($($spec:ty),* $(,)?) => {
        $(
            impl<S> BitAnd<S> for $spec
            where
                S: Specification<Product> + 'static,
            {
                type Output = AndSpecification<Product>;

                fn bitand(self, rhs: S) -> Self::Output {
                    self.and_with(rhs)
                }
            }
        )*
    };
}

impl_bitand_for_product_spec!(
    ColorSpecification,
    SizeSpecification,
    NameSpecification,
    AndSpecification<Product>,
);

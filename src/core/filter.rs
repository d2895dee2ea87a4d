use crate::domain::model::{Color, Product, Size};
use crate::domain::ports::{Filter, Specification};

/// 依任意 [`Specification`] 過濾。新增條件只需要新的 Specification 型別，這裡不用改。
#[derive(Debug, Default, Clone, Copy)]
pub struct SpecFilter;

impl<T> Filter<T> for SpecFilter {
    fn filter<'a, I, S>(&self, items: I, spec: &'a S) -> impl Iterator<Item = &'a T> + 'a
    where
        T: 'a,
        I: IntoIterator<Item = &'a T>,
        I::IntoIter: 'a,
        S: Specification<T> + ?Sized,
    {
        items.into_iter().filter(move |item| spec.is_satisfied(item))
    }
}

/// 反例：每多一種條件組合就得多一個方法
#[derive(Debug, Default, Clone, Copy)]
pub struct ProductFilter;

impl ProductFilter {
    pub fn filter_by_color<'a>(
        &self,
        products: &'a [Product],
        color: Color,
    ) -> impl Iterator<Item = &'a Product> + 'a {
        products.iter().filter(move |p| p.color == color)
    }

    pub fn filter_by_size<'a>(
        &self,
        products: &'a [Product],
        size: Size,
    ) -> impl Iterator<Item = &'a Product> + 'a {
        products.iter().filter(move |p| p.size == size)
    }

    pub fn filter_by_size_and_color<'a>(
        &self,
        products: &'a [Product],
        size: Size,
        color: Color,
    ) -> impl Iterator<Item = &'a Product> + 'a {
        products
            .iter()
            .filter(move |p| p.size == size && p.color == color)
    }
}

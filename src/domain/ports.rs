use crate::core::specification::AndSpecification;
use crate::domain::model::Document;
use crate::utils::error::Result;
use std::io::Write;

/// 判斷單一項目是否符合條件
pub trait Specification<T> {
    fn is_satisfied(&self, item: &T) -> bool;

    /// 與另一個條件組合成 AND
    fn and_with<S>(self, other: S) -> AndSpecification<T>
    where
        Self: Sized + 'static,
        S: Specification<T> + 'static,
    {
        AndSpecification::new().with(self).with(other)
    }
}

/// 取出符合條件的項目，保留原本順序，惰性求值
pub trait Filter<T> {
    fn filter<'a, I, S>(&self, items: I, spec: &'a S) -> impl Iterator<Item = &'a T> + 'a
    where
        T: 'a,
        I: IntoIterator<Item = &'a T>,
        I::IntoIter: 'a,
        S: Specification<T> + ?Sized;
}

pub trait Printer {
    fn print(&self, document: &Document);
}

pub trait Scanner {
    fn scan(&self, document: &Document);
}

pub trait Fax {
    fn fax(&self, document: &Document);
}

/// 同時具備列印和掃描能力的裝置
pub trait MultiFunctionDevice: Printer + Scanner {}

impl<D: Printer + Scanner> MultiFunctionDevice for D {}

/// 給高層用的介面：呼叫端看不到邊是怎麼存的
pub trait RelationshipBrowser {
    fn find_all_children_of<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a str> + 'a;
}

pub trait Demo {
    fn name(&self) -> &'static str;
    fn principle(&self) -> &'static str;
    fn run(&self, out: &mut dyn Write) -> Result<()>;
}

use crate::core::filter::{ProductFilter, SpecFilter};
use crate::core::specification::{
    BinaryAndSpecification, ColorSpecification, NameSpecification, SizeSpecification,
};
use crate::core::{Color, Demo, Filter, Product, Size, Specification};
use crate::utils::error::Result;
use std::io::Write;

pub struct OcpDemo {
    products: Vec<Product>,
}

impl OcpDemo {
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    fn write_matches<S>(&self, out: &mut dyn Write, spec: &S, suffix: &str) -> Result<()>
    where
        S: Specification<Product> + ?Sized,
    {
        for p in SpecFilter.filter(&self.products, spec) {
            writeln!(out, " - {} is {}", p.name, suffix)?;
        }
        Ok(())
    }
}

impl Demo for OcpDemo {
    fn name(&self) -> &'static str {
        "ocp"
    }

    fn principle(&self) -> &'static str {
        "Open/closed"
    }

    fn run(&self, out: &mut dyn Write) -> Result<()> {
        // 舊做法：每種條件一個方法
        writeln!(out, "Green products (old):")?;
        for p in ProductFilter.filter_by_color(&self.products, Color::Green) {
            writeln!(out, " - {} is green", p.name)?;
        }

        writeln!(out, "Green products (new):")?;
        self.write_matches(out, &ColorSpecification::new(Color::Green), "green")?;

        writeln!(out, "Large products:")?;
        self.write_matches(out, &SizeSpecification::new(Size::Large), "large")?;

        writeln!(out, "Large blue items:")?;
        let large_blue =
            SizeSpecification::new(Size::Large).and_with(ColorSpecification::new(Color::Blue));
        self.write_matches(out, &large_blue, "large and blue")?;

        let large_blue_binary = BinaryAndSpecification::new(
            SizeSpecification::new(Size::Large),
            ColorSpecification::new(Color::Blue),
        );
        self.write_matches(out, &large_blue_binary, "large and blue (binary combinator)")?;

        writeln!(out, "Large blue house items:")?;
        let large_blue_house = large_blue & NameSpecification::new("house");
        self.write_matches(out, &large_blue_house, "a large blue house")?;

        let large_blue_house_binary =
            BinaryAndSpecification::new(large_blue_binary, NameSpecification::new("house"));
        self.write_matches(
            out,
            &large_blue_house_binary,
            "a large blue house (binary combinator)",
        )?;

        Ok(())
    }
}

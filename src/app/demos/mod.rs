pub mod dip;
pub mod isp;
pub mod ocp;
pub mod srp;

pub use dip::DipDemo;
pub use isp::IspDemo;
pub use ocp::OcpDemo;
pub use srp::SrpDemo;

use crate::config::{DemoConfig, DemoKind};
use crate::core::Demo;

/// 依照選擇建立示範，`All` 會展開成全部四個
pub fn build_demos(selection: &[DemoKind], config: &DemoConfig) -> Vec<Box<dyn Demo>> {
    DemoKind::expand(selection)
        .into_iter()
        .filter_map(|kind| build_demo(kind, config))
        .collect()
}

fn build_demo(kind: DemoKind, config: &DemoConfig) -> Option<Box<dyn Demo>> {
    let demo: Box<dyn Demo> = match kind {
        DemoKind::Srp => Box::new(SrpDemo::new(config.shopping_list.clone())),
        DemoKind::Ocp => Box::new(OcpDemo::new(config.products.clone())),
        DemoKind::Isp => Box::new(IspDemo::new(config.devices.clone())),
        DemoKind::Dip => Box::new(DipDemo::new(config.family.clone())),
        // expand() 已經展開過
        DemoKind::All => return None,
    };
    Some(demo)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_all_demos_in_order() {
        let demos = build_demos(&[DemoKind::All], &DemoConfig::default());
        let names: Vec<&str> = demos.iter().map(|d| d.name()).collect();
        assert_eq!(names, vec!["srp", "ocp", "isp", "dip"]);
    }

    #[test]
    fn test_build_selected_demo() {
        let demos = build_demos(&[DemoKind::Dip], &DemoConfig::default());
        assert_eq!(demos.len(), 1);
        assert_eq!(demos[0].principle(), "Dependency inversion");
    }
}

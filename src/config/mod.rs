pub mod toml_config;

pub use toml_config::DemoConfig;

#[cfg(feature = "cli")]
use clap::{Parser, ValueEnum};

/// 可以執行的示範
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(ValueEnum))]
pub enum DemoKind {
    /// Single responsibility: shopping list + persistence
    Srp,
    /// Open/closed: specification filters
    Ocp,
    /// Interface segregation: printers and scanners
    Isp,
    /// Dependency inversion: relationship research
    Dip,
    /// Every demo, in order
    All,
}

impl DemoKind {
    pub const ORDERED: [DemoKind; 4] = [DemoKind::Srp, DemoKind::Ocp, DemoKind::Isp, DemoKind::Dip];

    /// 展開 `All` 並去除重複，保留第一次出現的順序
    pub fn expand(selection: &[DemoKind]) -> Vec<DemoKind> {
        if selection.is_empty() {
            return Self::ORDERED.to_vec();
        }

        let mut expanded = Vec::new();
        for kind in selection {
            let kinds: &[DemoKind] = match kind {
                DemoKind::All => &Self::ORDERED,
                other => std::slice::from_ref(other),
            };
            for k in kinds {
                if !expanded.contains(k) {
                    expanded.push(*k);
                }
            }
        }
        expanded
    }
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "solid-demos")]
#[command(about = "Runnable demonstrations of SRP, OCP, ISP and DIP")]
pub struct CliConfig {
    /// Demos to run (default: all)
    #[arg(value_enum)]
    pub demos: Vec<DemoKind>,

    /// Path to a TOML file with the demo data
    #[arg(short, long)]
    pub config: Option<String>,

    /// Where the SRP demo saves the shopping list
    #[arg(long)]
    pub output_path: Option<String>,

    /// List the available demos and exit
    #[arg(long)]
    pub list: bool,

    /// Emit logs as JSON
    #[arg(long)]
    pub json_logs: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// 載入 TOML（若有指定）並套用命令列覆蓋設定
    pub fn load_demo_config(&self) -> crate::utils::error::Result<DemoConfig> {
        let mut config = match &self.config {
            Some(path) => DemoConfig::from_file(path)?,
            None => DemoConfig::default(),
        };

        if let Some(output_path) = &self.output_path {
            config.shopping_list.output_path = output_path.clone();
        }

        Ok(config)
    }
}

use crate::adapters::persistence::PersistenceManager;
use crate::config::toml_config::ShoppingListConfig;
use crate::core::shopping_list::ShoppingList;
use crate::core::Demo;
use crate::utils::error::Result;
use std::io::Write;

pub struct SrpDemo {
    config: ShoppingListConfig,
}

impl SrpDemo {
    pub fn new(config: ShoppingListConfig) -> Self {
        Self { config }
    }
}

impl Demo for SrpDemo {
    fn name(&self) -> &'static str {
        "srp"
    }

    fn principle(&self) -> &'static str {
        "Single responsibility"
    }

    fn run(&self, out: &mut dyn Write) -> Result<()> {
        let mut shopping_list = ShoppingList::new();
        for entry in &self.config.entries {
            shopping_list.add_entry(entry.as_str());
        }
        writeln!(out, "Shopping List entries:\n{}\n", shopping_list)?;

        // 存檔交給獨立的 PersistenceManager
        let path = &self.config.output_path;
        PersistenceManager::save_to_file(&shopping_list, path)?;

        let saved = std::fs::read_to_string(path)?;
        writeln!(out, "Saved to {}:\n{}", path, saved)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_srp_demo_writes_file_and_output() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("list.txt");
        let demo = SrpDemo::new(ShoppingListConfig {
            entries: vec!["bread".to_string(), "phone".to_string()],
            output_path: path.to_string_lossy().into_owned(),
        });

        let mut out = Vec::new();
        demo.run(&mut out).unwrap();

        let output = String::from_utf8(out).unwrap();
        assert!(output.starts_with("Shopping List entries:\n0: bread\n1: phone\n"));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "0: bread\n1: phone");
    }
}

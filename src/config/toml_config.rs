use crate::domain::model::{Color, Product, Size};
use crate::utils::error::{Result, SolidError};
use crate::utils::validation::{
    validate_each_non_empty, validate_non_empty_string, validate_path, Validate,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// 所有示範的資料；每個區段都可省略，省略時使用預設的示範資料
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    pub shopping_list: ShoppingListConfig,
    pub products: Vec<Product>,
    pub family: FamilyConfig,
    pub devices: DevicesConfig,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            shopping_list: ShoppingListConfig::default(),
            products: default_products(),
            family: FamilyConfig::default(),
            devices: DevicesConfig::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShoppingListConfig {
    pub entries: Vec<String>,
    pub output_path: String,
}

impl Default for ShoppingListConfig {
    fn default() -> Self {
        Self {
            entries: vec!["bread".to_string(), "phone".to_string()],
            output_path: std::env::temp_dir()
                .join("shopping-list.txt")
                .to_string_lossy()
                .into_owned(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FamilyConfig {
    pub parent: String,
    pub children: Vec<String>,
    /// 要查詢誰的孩子；沒設定時查詢 `parent`
    pub query: Option<String>,
}

impl FamilyConfig {
    pub fn query_name(&self) -> &str {
        self.query.as_deref().unwrap_or(&self.parent)
    }
}

impl Default for FamilyConfig {
    fn default() -> Self {
        Self {
            parent: "John".to_string(),
            children: vec!["Chris".to_string(), "Matt".to_string()],
            query: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DevicesConfig {
    pub document: String,
}

impl Default for DevicesConfig {
    fn default() -> Self {
        Self {
            document: "123".to_string(),
        }
    }
}

pub fn default_products() -> Vec<Product> {
    vec![
        Product::new("Apple", Color::Green, Size::Small),
        Product::new("Tree", Color::Green, Size::Large),
        Product::new("House", Color::Blue, Size::Large),
    ]
}

impl DemoConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(SolidError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| SolidError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${OUTPUT_DIR})，找不到的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| SolidError::ConfigError {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.into_owned())
    }
}

impl Validate for DemoConfig {
    fn validate(&self) -> Result<()> {
        validate_path("shopping_list.output_path", &self.shopping_list.output_path)?;
        validate_each_non_empty("shopping_list.entries", &self.shopping_list.entries)?;

        for (i, product) in self.products.iter().enumerate() {
            validate_non_empty_string(&format!("products[{}].name", i), &product.name)?;
        }

        validate_non_empty_string("family.parent", &self.family.parent)?;
        validate_each_non_empty("family.children", &self.family.children)?;
        if let Some(query) = &self.family.query {
            validate_non_empty_string("family.query", query)?;
        }

        if self.family.children.contains(&self.family.parent) {
            return Err(SolidError::InvalidConfigValueError {
                field: "family.children".to_string(),
                value: self.family.parent.clone(),
                reason: "A person cannot be their own child".to_string(),
            });
        }

        Ok(())
    }
}

use crate::utils::error::Result;
use std::fmt::Display;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// 存檔邏輯獨立出來；之後要加權限檢查等功能，也不會讓清單型別越長越大
#[derive(Debug, Default, Clone, Copy)]
pub struct PersistenceManager;

impl PersistenceManager {
    /// 以 `Display` 的輸出覆寫目標檔案。檔案在離開函式時關閉，寫入失敗也一樣。
    pub fn save_to_file<R, P>(renderable: &R, path: P) -> Result<()>
    where
        R: Display + ?Sized,
        P: AsRef<Path>,
    {
        let path = path.as_ref();
        tracing::debug!("Saving to {}", path.display());

        let mut file = File::create(path)?;
        file.write_all(renderable.to_string().as_bytes())?;
        file.flush()?;

        tracing::info!("💾 Saved to {}", path.display());
        Ok(())
    }
}

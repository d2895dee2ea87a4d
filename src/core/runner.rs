use crate::core::Demo;
use crate::utils::error::Result;
use std::io::Write;

pub struct DemoRunner {
    demos: Vec<Box<dyn Demo>>,
}

impl DemoRunner {
    pub fn new(demos: Vec<Box<dyn Demo>>) -> Self {
        Self { demos }
    }

    pub fn demos(&self) -> &[Box<dyn Demo>] {
        &self.demos
    }

    /// 依序執行每個示範；任一個失敗就停下來回傳錯誤
    pub fn run(&self, out: &mut dyn Write) -> Result<usize> {
        tracing::info!("Running {} demo(s)", self.demos.len());

        for (i, demo) in self.demos.iter().enumerate() {
            if i > 0 {
                writeln!(out)?;
            }
            writeln!(out, "=== {} ({}) ===", demo.principle(), demo.name())?;

            tracing::debug!("Starting demo '{}'", demo.name());
            demo.run(out)?;
            tracing::info!("✅ Demo '{}' finished", demo.name());
        }

        out.flush()?;
        Ok(self.demos.len())
    }
}

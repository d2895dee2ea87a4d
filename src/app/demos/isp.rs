use crate::config::toml_config::DevicesConfig;
use crate::core::devices::legacy::{Machine, OldFashionedPrinter};
use crate::core::devices::{FaxMachine, MultiFunctionMachine, MyPrinter, Photocopier};
use crate::core::{Demo, Document, Fax, MultiFunctionDevice, Printer, Scanner};
use crate::utils::error::Result;
use std::cell::RefCell;
use std::io::Write;

pub struct IspDemo {
    config: DevicesConfig,
}

impl IspDemo {
    pub fn new(config: DevicesConfig) -> Self {
        Self { config }
    }

    fn run_legacy(&self, out: &mut dyn Write, document: &Document) -> Result<()> {
        let printer = OldFashionedPrinter;

        printer.print(document)?;
        writeln!(out, "old-fashioned printer: print works")?;

        printer.fax(document)?;
        writeln!(out, "old-fashioned printer: fax returned Ok but did nothing")?;

        match printer.scan(document) {
            Ok(()) => writeln!(out, "old-fashioned printer: scan works")?,
            Err(e) => {
                tracing::warn!("⚠️ {}", e);
                writeln!(out, "old-fashioned printer: scan failed at runtime: {}", e)?;
            }
        }
        Ok(())
    }
}

/// 轉交給內部裝置，並記下實際發生的呼叫
struct Narrated<'n, D> {
    label: &'static str,
    device: D,
    calls: &'n RefCell<Vec<String>>,
}

impl<'n, D> Narrated<'n, D> {
    fn new(label: &'static str, device: D, calls: &'n RefCell<Vec<String>>) -> Self {
        Self {
            label,
            device,
            calls,
        }
    }

    fn record(&self, operation: &str) {
        self.calls
            .borrow_mut()
            .push(format!("{}: {}", self.label, operation));
    }
}

impl<D: Printer> Printer for Narrated<'_, D> {
    fn print(&self, document: &Document) {
        self.device.print(document);
        self.record("print");
    }
}

impl<D: Scanner> Scanner for Narrated<'_, D> {
    fn scan(&self, document: &Document) {
        self.device.scan(document);
        self.record("scan");
    }
}

impl<D: Fax> Fax for Narrated<'_, D> {
    fn fax(&self, document: &Document) {
        self.device.fax(document);
        self.record("fax");
    }
}

fn copy_and_archive(device: &impl MultiFunctionDevice, document: &Document) {
    device.scan(document);
    device.print(document);
}

/// 把記下的呼叫寫到輸出，並清空
fn drain_calls(out: &mut dyn Write, calls: &RefCell<Vec<String>>) -> Result<()> {
    for call in calls.borrow_mut().drain(..) {
        writeln!(out, "  {}", call)?;
    }
    Ok(())
}

impl Demo for IspDemo {
    fn name(&self) -> &'static str {
        "isp"
    }

    fn principle(&self) -> &'static str {
        "Interface segregation"
    }

    fn run(&self, out: &mut dyn Write) -> Result<()> {
        let document = Document::new(self.config.document.as_str());
        let calls = RefCell::new(Vec::new());

        writeln!(out, "Broad interface:")?;
        self.run_legacy(out, &document)?;

        // 每個裝置只實作自己有的能力；MyPrinter 根本沒有 scan 可以呼叫
        writeln!(out, "Segregated interfaces:")?;
        Narrated::new("my printer", MyPrinter, &calls).print(&document);
        copy_and_archive(&Narrated::new("photocopier", Photocopier, &calls), &document);
        Narrated::new("fax machine", FaxMachine, &calls).fax(&document);
        drain_calls(out, &calls)?;

        writeln!(out, "Multi-function machine delegates:")?;
        let machine = MultiFunctionMachine::new(
            Narrated::new("my printer", MyPrinter, &calls),
            Narrated::new("photocopier", Photocopier, &calls),
        );
        copy_and_archive(&machine, &document);
        drain_calls(out, &calls)?;

        Ok(())
    }
}

use crate::domain::model::Document;
use crate::domain::ports::{Fax, Printer, Scanner};

/// 只會列印
#[derive(Debug, Default)]
pub struct MyPrinter;

impl Printer for MyPrinter {
    fn print(&self, document: &Document) {
        tracing::info!("🖨️ MyPrinter printed '{}'", document);
    }
}

/// 可以列印也可以掃描
#[derive(Debug, Default)]
pub struct Photocopier;

impl Printer for Photocopier {
    fn print(&self, document: &Document) {
        tracing::info!("🖨️ Photocopier printed '{}'", document);
    }
}

impl Scanner for Photocopier {
    fn scan(&self, document: &Document) {
        tracing::info!("📠 Photocopier scanned '{}'", document);
    }
}

#[derive(Debug, Default)]
pub struct FaxMachine;

impl Fax for FaxMachine {
    fn fax(&self, document: &Document) {
        tracing::info!("📠 Faxing '{}'", document);
    }
}

/// 把列印與掃描分別轉交給各自的裝置
pub struct MultiFunctionMachine<P: Printer, S: Scanner> {
    printer: P,
    scanner: S,
}

impl<P: Printer, S: Scanner> MultiFunctionMachine<P, S> {
    pub fn new(printer: P, scanner: S) -> Self {
        Self { printer, scanner }
    }
}

impl<P: Printer, S: Scanner> Printer for MultiFunctionMachine<P, S> {
    fn print(&self, document: &Document) {
        self.printer.print(document);
    }
}

impl<P: Printer, S: Scanner> Scanner for MultiFunctionMachine<P, S> {
    fn scan(&self, document: &Document) {
        self.scanner.scan(document);
    }
}

/// 反例：一個介面塞進所有能力，實作者被迫提供用不到的方法
pub mod legacy {
    use crate::domain::model::Document;
    use crate::utils::error::{Result, SolidError};

    pub trait Machine {
        fn print(&self, document: &Document) -> Result<()>;
        fn fax(&self, document: &Document) -> Result<()>;
        fn scan(&self, document: &Document) -> Result<()>;
    }

    #[derive(Debug, Default)]
    pub struct MultiFunctionPrinter;

    impl Machine for MultiFunctionPrinter {
        fn print(&self, document: &Document) -> Result<()> {
            tracing::info!("🖨️ MultiFunctionPrinter printing '{}'", document);
            Ok(())
        }

        fn fax(&self, document: &Document) -> Result<()> {
            tracing::info!("📠 MultiFunctionPrinter faxing '{}'", document);
            Ok(())
        }

        fn scan(&self, document: &Document) -> Result<()> {
            tracing::info!("📠 MultiFunctionPrinter scanning '{}'", document);
            Ok(())
        }
    }

    #[derive(Debug, Default)]
    pub struct OldFashionedPrinter;

    impl Machine for OldFashionedPrinter {
        fn print(&self, document: &Document) -> Result<()> {
            tracing::info!("🖨️ Old-fashioned printer printing '{}'", document);
            Ok(())
        }

        // 看起來成功，其實什麼都沒做
        fn fax(&self, _document: &Document) -> Result<()> {
            Ok(())
        }

        fn scan(&self, _document: &Document) -> Result<()> {
            Err(SolidError::Unsupported {
                device: "old-fashioned printer",
                operation: "scan",
            })
        }
    }
}

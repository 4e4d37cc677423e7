mod scan;

use anyhow::Result;

use crate::scan::{ContextWindow, ScanConfig};

const BUNDLE_PATH: &str = "composeApp/build/dist/js/productionExecutable/composeApp.js";
const SNIPPET_PATH: &str = "tmp/koin_snippet.txt";
// Marker emitted by the Koin runtime when it is linked into the bundle.
const NEEDLE: &str = "KoinApplication";

fn main() -> Result<()> {
    let config = ScanConfig {
        bundle: BUNDLE_PATH.into(),
        snippet: SNIPPET_PATH.into(),
        needle: NEEDLE.into(),
        window: ContextWindow::default(),
    };

    scan::run(&config)?;

    Ok(())
}

use crate::types::Package;
use anyhow::{Context, Result, bail};
use once_cell::sync::Lazy;
use std::fs;
use std::path::Path;

/// Sample packages mimicking what the wristband firmware emits.
pub static DEMO_PACKAGES: Lazy<Vec<Package>> = Lazy::new(|| {
    vec![
        Package::new("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]),
        Package::new("RUN", &[15000.0, 1.0, 75.0]),
        Package::new("WLK", &[9000.0, 1.0, 75.0, 180.0]),
    ]
});

/// Load packages from a JSON file: an array of `{"code", "data"}` objects.
pub fn load_packages(path: &Path) -> Result<Vec<Package>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading packages file: {}", path.display()))?;

    let packages: Vec<Package> = serde_json::from_str(&text)
        .with_context(|| format!("parsing packages file: {}", path.display()))?;

    if packages.is_empty() {
        bail!(
            "No packages found in {}. Expected a JSON array of {{\"code\", \"data\"}} objects.",
            path.display()
        );
    }

    Ok(packages)
}

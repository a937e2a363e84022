/// Asset library naming audit entry point.
mod discovery;
mod report;

use report::AuditReport;
use std::env;
use std::path::Path;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();
    if args.len() < 2 || args.len() > 3 {
        eprintln!("Usage: {} <asset-dir> [report.json]", args[0]);
        std::process::exit(1);
    }

    let asset_dir = Path::new(&args[1]);
    let report_path = args
        .get(2)
        .map(String::as_str)
        .unwrap_or("audit_report.json");

    let paths = discovery::discover_asset_paths(asset_dir)?;
    println!("Found {} asset files", paths.len());

    let report = AuditReport::build(&paths);
    report.write(Path::new(report_path))?;
    report.print_summary();

    Ok(())
}

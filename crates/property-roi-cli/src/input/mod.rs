pub mod file;
pub mod stdin;

use property_roi_core::property_roi::InvestmentParams;

/// `--input` value that selects stdin instead of a file.
pub const STDIN_PATH: &str = "-";

/// Resolve calculation parameters.
///
/// Without `--input` the built-in reference scenario is used and stdin is
/// never touched. `--input -` reads a JSON document from piped stdin; any
/// other value names a JSON file. Documents may be partial; omitted fields
/// keep their defaults.
pub fn load_params(path: Option<&str>) -> Result<InvestmentParams, Box<dyn std::error::Error>> {
    match path {
        None => Ok(InvestmentParams::default()),
        Some(STDIN_PATH) => {
            let data = stdin::read_stdin()?
                .ok_or("--input - expects a JSON document piped on stdin")?;
            Ok(serde_json::from_str(&data)
                .map_err(|e| format!("Failed to parse parameters from stdin: {}", e))?)
        }
        Some(path) => file::read_json(path),
    }
}

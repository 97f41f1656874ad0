pub mod decode;
pub mod fetch;
pub mod normalize;
pub mod sheet;

pub use decode::{decode_profile, decode_profiles};
pub use fetch::{HttpSheetFetcher, SheetFetcher};
pub use normalize::{rows_to_records, SheetRecord};
pub use sheet::parse_sheet;

use alumnet_common::{AlumnetError, Profile};

/// Fetch, parse, and decode the full directory in one pass. The only failure
/// modes are the fetch itself and a structurally unreadable CSV body;
/// per-row anomalies degrade to empty fields on that record.
pub async fn load_directory(fetcher: &dyn SheetFetcher) -> Result<Vec<Profile>, AlumnetError> {
    let csv_text = fetcher.fetch_csv().await?;
    let rows = parse_sheet(&csv_text)?;
    Ok(decode_profiles(&rows))
}

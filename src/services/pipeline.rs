use tracing::{error, info, warn};

use crate::clients::PlacesClient;
use crate::config::Settings;
use crate::error::Result;
use crate::models::{PlaceDetail, PlaceRecord};
use crate::storage::CsvSink;

/// Counts reported back to the caller after a run.
#[derive(Debug, Clone, Copy)]
pub struct RunSummary {
    pub found: usize,
    pub written: usize,
}

/// Drives one run: search, then one details lookup, mapping, and CSV write
/// per result, strictly in sequence. A search failure aborts the run; a
/// details or write failure for one place is logged and the loop moves on.
pub struct Pipeline {
    client: PlacesClient,
    settings: Settings,
}

impl Pipeline {
    pub fn new(client: PlacesClient, settings: Settings) -> Self {
        Self { client, settings }
    }

    pub async fn run(&self) -> Result<RunSummary> {
        self.settings.validate()?;

        let search = self
            .client
            .search(
                &self.settings.name,
                &self.settings.location,
                &self.settings.radius,
            )
            .await?;

        info!(
            status = %search.status,
            results = search.results.len(),
            keyword = %self.settings.name,
            "Search complete"
        );

        if search.results.is_empty() {
            return Ok(RunSummary {
                found: 0,
                written: 0,
            });
        }

        let mut sink = CsvSink::open(&self.settings.output)?;

        let total = search.results.len();
        for (index, result) in search.results.iter().enumerate() {
            info!(
                place = %result.name,
                place_index = index + 1,
                places_count = total,
                "Processing place"
            );

            let detail = match self.client.details(&result.place_id).await {
                Ok(response) => response.result,
                Err(e) => {
                    warn!(
                        error = %e,
                        place_id = %result.place_id,
                        "Details lookup failed, continuing with zero rating"
                    );
                    PlaceDetail::default()
                }
            };

            let record = PlaceRecord::from_parts(result, &detail);
            if let Err(e) = sink.write(&record) {
                error!(
                    error = %e,
                    place = %record.name,
                    "Error writing record to file"
                );
            }
        }

        Ok(RunSummary {
            found: total,
            written: sink.count(),
        })
    }
}

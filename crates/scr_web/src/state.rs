use scr_sources::ReportAggregator;

pub struct AppState {
    pub aggregator: ReportAggregator,
}

impl AppState {
    pub fn new(aggregator: ReportAggregator) -> Self {
        Self { aggregator }
    }
}

use insight_core::{ChartData, ChartRow, DataFault, Effect};
use insight_engine::{AggregateError, Aggregation, LoaderHandle};
use insight_logging::insight_info;

/// Executes core effects against the loader.
pub(crate) fn run_effects(loader: &LoaderHandle, effects: Vec<Effect>) {
    for effect in effects {
        match effect {
            Effect::ReloadData => {
                insight_info!("rebuild requested; scheduling a fresh data pass");
                loader.reload();
            }
        }
    }
}

/// Maps an engine aggregation outcome into the core's chart input, the same
/// way engine events are mirrored into core messages.
pub(crate) fn map_outcome(
    result: Result<Aggregation, AggregateError>,
) -> Result<ChartData, DataFault> {
    match result {
        Ok(aggregation) => {
            let rows = aggregation
                .labels
                .into_iter()
                .zip(aggregation.word_counts)
                .zip(aggregation.tip_counts)
                .map(|((label, words), tips)| ChartRow { label, words, tips })
                .collect();
            Ok(ChartData::new(rows))
        }
        Err(AggregateError::DataNotFound) => Err(DataFault::Missing),
        Err(AggregateError::NoItems) => Err(DataFault::Empty),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_aggregation_into_rows() {
        let aggregation = Aggregation {
            labels: vec!["A".to_string(), "B".to_string()],
            word_counts: vec![3, 0],
            tip_counts: vec![2, 1],
        };

        let data = map_outcome(Ok(aggregation)).unwrap();

        assert_eq!(
            data.rows(),
            &[
                ChartRow {
                    label: "A".to_string(),
                    words: 3,
                    tips: 2,
                },
                ChartRow {
                    label: "B".to_string(),
                    words: 0,
                    tips: 1,
                },
            ]
        );
        assert_eq!(data.max_value(), 3);
    }

    #[test]
    fn maps_errors_onto_faults() {
        assert_eq!(
            map_outcome(Err(AggregateError::DataNotFound)),
            Err(DataFault::Missing)
        );
        assert_eq!(
            map_outcome(Err(AggregateError::NoItems)),
            Err(DataFault::Empty)
        );
    }
}

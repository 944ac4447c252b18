// src/services/chart.rs
use chrono::NaiveDate;
use log::debug;

use crate::error::ChartError;
use crate::models::{ChartData, ChartSpec, DailyRecord, Dataset, SeriesInput, TitleOptions};

pub const DEFAULT_KIND: &str = "bar";
pub const AXIS_DATE_FORMAT: &str = "%d/%m/%Y";
pub const CONFIRMED_LABEL: &str = "Confirmados";
pub const RECOVERED_LABEL: &str = "Recuperados";

/// One dataset per series, labelled positionally.
pub fn build_dataset(series: SeriesInput, labels: &[String]) -> Result<Vec<Dataset>, ChartError> {
    let label_at = |index: usize| {
        labels
            .get(index)
            .cloned()
            .ok_or(ChartError::MissingLabel { index })
    };

    match series {
        SeriesInput::Single(data) => Ok(vec![Dataset {
            label: label_at(0)?,
            data,
        }]),
        SeriesInput::Multi(all) => all
            .into_iter()
            .enumerate()
            .map(|(index, data)| -> Result<Dataset, ChartError> {
                Ok(Dataset {
                    label: label_at(index)?,
                    data,
                })
            })
            .collect(),
    }
}

/// An empty title hides the title block.
pub fn build_title_options(title: &str) -> TitleOptions {
    TitleOptions {
        title: title.to_string(),
        display: !title.is_empty(),
    }
}

pub fn build_chart_spec(
    x_labels: Vec<String>,
    series: SeriesInput,
    series_labels: &[String],
    kind: &str,
    title: &str,
) -> Result<ChartSpec, ChartError> {
    Ok(ChartSpec {
        kind: kind.to_string(),
        data: ChartData {
            labels: x_labels,
            datasets: build_dataset(series, series_labels)?,
        },
        options: build_title_options(title),
    })
}

/// Every `stride`-th record, starting with the first one.
pub fn downsample(records: &[DailyRecord], stride: usize) -> Vec<&DailyRecord> {
    records.iter().step_by(stride.max(1)).collect()
}

pub fn format_axis_date(date: NaiveDate) -> String {
    date.format(AXIS_DATE_FORMAT).to_string()
}

/// The confirmed vs recovered chart drawn at the end of a run.
pub fn confirmed_vs_recovered(
    records: &[DailyRecord],
    stride: usize,
    title: &str,
) -> Result<ChartSpec, ChartError> {
    let sampled = downsample(records, stride);
    debug!("Sampled {} of {} records (stride {})", sampled.len(), records.len(), stride);

    let x_labels = sampled.iter().map(|r| format_axis_date(r.date)).collect();
    let confirmed = sampled.iter().map(|r| r.confirmed).collect();
    let recovered = sampled.iter().map(|r| r.recovered).collect();
    let labels = [CONFIRMED_LABEL.to_string(), RECOVERED_LABEL.to_string()];

    build_chart_spec(
        x_labels,
        SeriesInput::Multi(vec![confirmed, recovered]),
        &labels,
        DEFAULT_KIND,
        title,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    fn month_of_records(days: u32) -> Vec<DailyRecord> {
        (1..=days)
            .map(|day| DailyRecord {
                confirmed: day as u64 * 100,
                deaths: day as u64,
                recovered: day as u64 * 10,
                active: day as u64 * 89,
                date: NaiveDate::from_ymd_opt(2020, 3, day).unwrap(),
            })
            .collect()
    }

    #[test]
    fn single_series_uses_first_label() {
        let datasets = build_dataset(SeriesInput::Single(vec![1, 2, 3]), &labels(&["A"])).unwrap();
        assert_eq!(
            datasets,
            vec![Dataset {
                label: "A".into(),
                data: vec![1, 2, 3]
            }]
        );
    }

    #[test]
    fn multi_series_pairs_labels_positionally() {
        let datasets = build_dataset(
            SeriesInput::Multi(vec![vec![1, 2], vec![3, 4]]),
            &labels(&["A", "B"]),
        )
        .unwrap();
        assert_eq!(datasets.len(), 2);
        assert_eq!(datasets[0].label, "A");
        assert_eq!(datasets[0].data, vec![1, 2]);
        assert_eq!(datasets[1].label, "B");
        assert_eq!(datasets[1].data, vec![3, 4]);
    }

    #[test]
    fn short_label_list_is_an_error() {
        let err = build_dataset(
            SeriesInput::Multi(vec![vec![1], vec![2]]),
            &labels(&["A"]),
        )
        .unwrap_err();
        assert_eq!(err, ChartError::MissingLabel { index: 1 });
    }

    #[test]
    fn title_visibility_follows_emptiness() {
        assert_eq!(
            build_title_options(""),
            TitleOptions { title: "".into(), display: false }
        );
        assert_eq!(
            build_title_options("X"),
            TitleOptions { title: "X".into(), display: true }
        );
    }

    #[test]
    fn spec_serializes_to_quickchart_shape() {
        let spec = build_chart_spec(
            labels(&["01/03/2020"]),
            SeriesInput::Single(vec![5]),
            &labels(&["Confirmados"]),
            DEFAULT_KIND,
            "",
        )
        .unwrap();
        let value = serde_json::to_value(&spec).unwrap();
        assert_eq!(value["type"], "bar");
        assert_eq!(value["data"]["labels"][0], "01/03/2020");
        assert_eq!(value["data"]["datasets"][0]["label"], "Confirmados");
        assert_eq!(value["options"]["display"], false);
        assert_eq!(value["data"]["datasets"][0]["data"].to_string(), "[5]");
    }

    #[test]
    fn thirty_days_downsample_to_three_points() {
        let records = month_of_records(30);
        let sampled = downsample(&records, 10);
        let days: Vec<u32> = sampled.iter().map(|r| chrono::Datelike::day(&r.date)).collect();
        assert_eq!(days, vec![1, 11, 21]);
    }

    #[test]
    fn thirty_one_days_keep_the_last_day() {
        let records = month_of_records(31);
        let sampled = downsample(&records, 10);
        let days: Vec<u32> = sampled.iter().map(|r| chrono::Datelike::day(&r.date)).collect();
        assert_eq!(days, vec![1, 11, 21, 31]);
    }

    #[test]
    fn confirmed_vs_recovered_chart() {
        let records = month_of_records(31);
        let spec = confirmed_vs_recovered(&records, 10, "T").unwrap();

        assert_eq!(spec.kind, "bar");
        assert_eq!(spec.data.labels, labels(&["01/03/2020", "11/03/2020", "21/03/2020", "31/03/2020"]));
        assert_eq!(spec.data.datasets.len(), 2);
        assert_eq!(spec.data.datasets[0].label, CONFIRMED_LABEL);
        assert_eq!(spec.data.datasets[0].data, vec![100, 1100, 2100, 3100]);
        assert_eq!(spec.data.datasets[1].label, RECOVERED_LABEL);
        assert_eq!(spec.data.datasets[1].data, vec![10, 110, 210, 310]);
        assert!(spec.options.display);
    }

    #[test]
    fn empty_input_yields_empty_chart() {
        let spec = confirmed_vs_recovered(&[], 10, "").unwrap();
        assert!(spec.data.labels.is_empty());
        assert!(spec.data.datasets.iter().all(|d| d.data.is_empty()));
    }
}

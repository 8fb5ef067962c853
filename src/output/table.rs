use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use crate::harness::{format_size, DataPoint};

pub fn build_table(data: &[DataPoint]) -> Table {
    let methods: Vec<_> = data
        .first()
        .map(|dp| dp.results.iter().map(|r| r.method).collect())
        .unwrap_or_default();

    let mut header = vec![
        Cell::new("Size").add_attribute(Attribute::Bold),
        Cell::new("Workers").add_attribute(Attribute::Bold),
    ];
    header.extend(
        methods
            .iter()
            .map(|m| Cell::new(format!("{m} (ms)")).add_attribute(Attribute::Bold)),
    );
    header.push(Cell::new("Speedup").add_attribute(Attribute::Bold));
    header.push(Cell::new("CV%").add_attribute(Attribute::Bold));

    let mut table = Table::new();
    table
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(header);

    for dp in data {
        let mut row = vec![
            Cell::new(format_size(dp.size)).set_alignment(CellAlignment::Right),
            Cell::new(dp.workers).set_alignment(CellAlignment::Right),
        ];
        for &method in &methods {
            let ms = dp
                .result(method)
                .map(|r| format!("{:.3}", r.stats.mean))
                .unwrap_or_else(|| "-".to_string());
            row.push(Cell::new(ms).set_alignment(CellAlignment::Right));
        }

        let speedup_str = format!("{:.2}x", dp.speedup);
        let speedup_cell = if dp.speedup >= 2.0 {
            Cell::new(speedup_str).fg(Color::Green)
        } else if dp.speedup >= 1.0 {
            Cell::new(speedup_str).fg(Color::Yellow)
        } else {
            Cell::new(speedup_str).fg(Color::Red)
        };
        row.push(speedup_cell.set_alignment(CellAlignment::Right));

        let cv = dp
            .results
            .iter()
            .map(|r| r.stats.cv_percent)
            .fold(0.0_f64, f64::max);
        row.push(Cell::new(format!("{cv:.1}")).set_alignment(CellAlignment::Right));

        table.add_row(row);
    }

    table
}

pub fn render_table(data: &[DataPoint]) {
    if data.is_empty() {
        println!("No results to display.");
        return;
    }
    println!("{}", build_table(data));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::harness::{summarize, Method, MethodResult};
    use crate::stats::Stats;

    #[test]
    fn test_table_has_row_per_size() {
        let point = |size| {
            let result = |method, mean| MethodResult {
                method,
                average: 49.5,
                stats: Stats {
                    mean,
                    ..Stats::default()
                },
            };
            summarize(
                size,
                4,
                vec![
                    result(Method::StandardAverage, 2.0),
                    result(Method::MapReduceAverage, 1.0),
                ],
                true,
            )
        };
        let table = build_table(&[point(1_000_000), point(10_000_000)]);
        assert_eq!(table.row_iter().count(), 2);
        let rendered = table.to_string();
        assert!(rendered.contains("MapReduceAverage (ms)"));
        assert!(rendered.contains("10M"));
        assert!(rendered.contains("2.00x"));
    }
}

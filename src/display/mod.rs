use std::fmt::{self, Display, Formatter};

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL;
use comfy_table::*;

use crate::generate::Generated;
use crate::hypothesis::{TestResult, Verdict};

fn styled(table: &mut Table) -> &mut Table {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
}

fn number(value: f64) -> String {
    if value.is_infinite() {
        if value > 0.0 { "∞".to_string() } else { "-∞".to_string() }
    } else if value.abs() > 999_999.0 {
        format!("{value:.3e}")
    } else {
        format!("{value:.4}")
    }
}

impl TestResult {
    /// Renders the result as a title banner, a metric table and the
    /// explanation lines.
    pub fn display(&self) -> String {
        let verdict = match self.verdict {
            Verdict::Accept => "🟢 H₀ accepted",
            Verdict::Reject => "🔴 H₀ rejected",
        };

        let mut title_table = Table::new();
        styled(&mut title_table).add_row(vec![
            Cell::new(&self.title).set_alignment(CellAlignment::Center),
        ]);

        let mut table = Table::new();
        styled(&mut table).set_header(vec![
            Cell::new("Metric").set_alignment(CellAlignment::Center),
            Cell::new("Value").set_alignment(CellAlignment::Center),
            Cell::new("Interpretation").set_alignment(CellAlignment::Center),
        ]);

        table
            .add_row(vec![
                Cell::new(format!("Statistic {}", self.statistic_name)),
                Cell::new(number(self.statistic)).set_alignment(CellAlignment::Right),
                Cell::new(&self.solution),
            ])
            .add_row(vec![
                Cell::new("Critical value"),
                Cell::new(number(self.critical_value.value)).set_alignment(CellAlignment::Right),
                Cell::new(format!("{:?}", self.critical_value.source).to_lowercase()),
            ]);
        for (name, value) in &self.extra {
            table.add_row(vec![
                Cell::new(*name),
                Cell::new(number(*value)).set_alignment(CellAlignment::Right),
                Cell::new(""),
            ]);
        }
        table.add_row(vec![
            Cell::new("Verdict"),
            Cell::new(verdict).set_alignment(CellAlignment::Right),
            Cell::new(&self.hypothesis),
        ]);

        let details: String = self.details.iter().map(|d| format!("  • {d}\n")).collect();
        format!("{title_table}\n{table}\n{details}")
    }
}

impl Display for TestResult {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

impl Generated {
    /// One row per field with the generated values joined by commas, so each
    /// row can be pasted straight back as a sample.
    pub fn display(&self) -> String {
        let mut table = Table::new();
        styled(&mut table).set_header(vec![
            Cell::new("Field").set_alignment(CellAlignment::Center),
            Cell::new("n").set_alignment(CellAlignment::Center),
            Cell::new("Values").set_alignment(CellAlignment::Center),
        ]);
        for (name, values) in &self.fields {
            let joined: Vec<String> = values.iter().map(ToString::to_string).collect();
            table.add_row(vec![
                Cell::new(name),
                Cell::new(values.len()).set_alignment(CellAlignment::Right),
                Cell::new(joined.join(", ")),
            ]);
        }
        format!("{}\n{table}", self.criterion.title())
    }
}

impl Display for Generated {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

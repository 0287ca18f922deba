use serde::Serialize;

use netfit_shared::error::FitError;
use netfit_shared::schema::StatSchema;

/// One (network, draw) row. `values` follow the table's schema order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatisticRow {
    pub network_id: usize,
    pub network_size: usize,
    pub draw_index: usize,
    pub values: Vec<f64>,
}

impl StatisticRow {
    #[inline]
    pub fn is_observed(&self) -> bool {
        self.draw_index == 0
    }
}

/// Read-only partition of the table by draw index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum View {
    /// `draw_index == 0`
    Observed,
    /// `draw_index > 0`
    Simulated,
}

impl View {
    #[inline]
    pub fn contains(self, row: &StatisticRow) -> bool {
        match self {
            View::Observed => row.is_observed(),
            View::Simulated => !row.is_observed(),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            View::Observed => "observed",
            View::Simulated => "simulated",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatisticTable {
    schema: StatSchema,
    rows: Vec<StatisticRow>,
}

impl StatisticTable {
    pub fn new(schema: StatSchema) -> Self {
        Self {
            schema,
            rows: Vec::new(),
        }
    }

    pub fn schema(&self) -> &StatSchema {
        &self.schema
    }

    pub fn rows(&self) -> &[StatisticRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Appends the rows of one network. Rows are never modified afterwards.
    pub fn append(&mut self, block: Vec<StatisticRow>) {
        debug_assert!(block.iter().all(|r| r.values.len() == self.schema.len()));
        debug_assert!(block
            .windows(2)
            .all(|w| w[0].network_id == w[1].network_id && w[0].network_size == w[1].network_size));
        self.rows.extend(block);
    }

    pub fn column(&self, label: &str) -> Result<usize, FitError> {
        self.schema.column(label)
    }

    pub fn view(&self, view: View) -> impl Iterator<Item = &StatisticRow> {
        self.rows.iter().filter(move |row| view.contains(row))
    }

    /// `(network_id, network_size)` for every network, in table order.
    pub fn networks(&self) -> Vec<(usize, usize)> {
        let mut out: Vec<(usize, usize)> = Vec::new();
        for row in &self.rows {
            if out.last().map(|&(id, _)| id) != Some(row.network_id) {
                out.push((row.network_id, row.network_size));
            }
        }
        out
    }

    pub fn total_nodes(&self) -> usize {
        self.networks().iter().map(|&(_, size)| size).sum()
    }
}

use std::time::Duration;

use netfit_engine::aggregate::describe;
use netfit_engine::table::{StatisticTable, View};
use netfit_shared::config::{FitConfig, Section};
use netfit_shared::result::{FitReport, MixingCounts, MixingShares};

fn num(value: f64, width: usize, precision: usize) -> String {
    if value.is_nan() {
        format!("{:>width$}", "n/a", width = width)
    } else {
        format!("{:>width$.precision$}", value, width = width, precision = precision)
    }
}

fn share(pct: f64, count: f64) -> String {
    format!("{}% ({})", num(pct, 4, 0), num(count, 5, 1))
}

pub fn print_report(report: &FitReport, elapsed: Duration) {
    println!("\n========================================");
    println!("  Networks:        {}", report.n_networks);
    println!("  Simulated draws: {}", report.n_simulated_draws);
    println!("  Nodes:           {}", report.total_nodes);
    println!("  Time:            {:.2}s", elapsed.as_secs_f64());
    println!("========================================");

    for (section, title) in [
        (Section::Structure, "Selected moments"),
        (Section::Mixing, "Mixing patterns"),
    ] {
        println!("\n{:<28} {:>17} {:>8}", title, "Model (median)", "Data");
        for m in report.section(section) {
            println!(
                "  {:<26} {} ({}) {}",
                m.label,
                num(m.model_mean, 7, 3),
                num(m.model_median, 7, 3),
                num(m.data, 8, 3),
            );
        }
    }

    let mixing = &report.mixing;
    println!("\nMixing matrix, row % (weighted count); model left, data right");
    println!(
        "  {:<11} {:>14} {:>14}   {:>14} {:>14}",
        "", "Smoker", "Nonsmoker", "Smoker", "Nonsmoker"
    );
    for (label, member) in [("Smoker", true), ("Nonsmoker", false)] {
        print_mixing_row(
            label,
            mixing_row(&mixing.model, &mixing.model_shares, member),
            mixing_row(&mixing.data, &mixing.data_shares, member),
        );
    }
}

fn mixing_row(counts: &MixingCounts, shares: &MixingShares, member: bool) -> [String; 2] {
    if member {
        [share(shares.ss, counts.ss), share(shares.sn, counts.sn)]
    } else {
        [share(shares.ns, counts.ns), share(shares.nn, counts.nn)]
    }
}

fn print_mixing_row(label: &str, model: [String; 2], data: [String; 2]) {
    println!(
        "  {:<11} {:>14} {:>14}   {:>14} {:>14}",
        label, model[0], model[1], data[0], data[1]
    );
}

pub fn print_describe(table: &StatisticTable, config: &FitConfig) -> anyhow::Result<()> {
    for spec in &config.moments {
        let column = table.column(&spec.column)?;
        println!("\n{} (simulated draws)", spec.label);
        println!(
            "  {:>5} {:>6} {:>6} {:>9} {:>9} {:>9} {:>9} {:>9}",
            "net", "size", "count", "mean", "std", "min", "median", "max"
        );
        for d in describe(table, View::Simulated, column) {
            println!(
                "  {:>5} {:>6} {:>6} {} {} {} {} {}",
                d.network_id,
                d.network_size,
                d.count,
                num(d.mean, 9, 3),
                num(d.std, 9, 3),
                num(d.min, 9, 3),
                num(d.median, 9, 3),
                num(d.max, 9, 3),
            );
        }
    }
    Ok(())
}

pub fn print_json(report: &FitReport) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(report)?);
    Ok(())
}

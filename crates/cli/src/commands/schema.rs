use netfit_extractor::{NetStats, StatisticExtractor};

pub fn run() -> anyhow::Result<()> {
    let extractor = NetStats::new();
    for (idx, label) in extractor.schema().labels().iter().enumerate() {
        println!("{:>3}  {}", idx, label);
    }
    Ok(())
}

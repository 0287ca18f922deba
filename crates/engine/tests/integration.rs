use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64;

use netfit_engine::runner::{run_fit, summarize};
use netfit_engine::walker::walk;
use netfit_extractor::{FnExtractor, NetStats};
use netfit_shared::config::{FitConfig, MomentSpec, Section};
use netfit_shared::error::{ExtractError, FitError};
use netfit_shared::network::{Ensemble, EnsembleEntry, NetworkInstance};
use netfit_shared::result::FitReport;
use netfit_shared::schema::StatSchema;

fn close(a: f64, b: f64, tol: f64) -> bool {
    (a.is_nan() && b.is_nan()) || (a - b).abs() <= tol * a.abs().max(b.abs()).max(1.0)
}

fn assert_reports_match(a: &FitReport, b: &FitReport, tol: f64) {
    assert_eq!(a.n_networks, b.n_networks);
    assert_eq!(a.n_simulated_draws, b.n_simulated_draws);
    assert_eq!(a.total_nodes, b.total_nodes);
    for (x, y) in a.moments.iter().zip(&b.moments) {
        assert_eq!(x.column, y.column);
        assert!(close(x.model_mean, y.model_mean, tol), "{}: {} vs {}", x.column, x.model_mean, y.model_mean);
        assert!(close(x.model_median, y.model_median, tol), "{}: {} vs {}", x.column, x.model_median, y.model_median);
        assert!(close(x.data, y.data, tol), "{}: {} vs {}", x.column, x.data, y.data);
    }
    let (m, n) = (&a.mixing, &b.mixing);
    for (x, y) in [
        (m.model.ss, n.model.ss),
        (m.model.sn, n.model.sn),
        (m.model.ns, n.model.ns),
        (m.model.nn, n.model.nn),
        (m.data.ss, n.data.ss),
        (m.data.nn, n.data.nn),
    ] {
        assert!(close(x, y, tol), "mixing: {} vs {}", x, y);
    }
}

fn random_network(rng: &mut Pcg64, n: usize, p_member: f64, p_link: f64) -> NetworkInstance {
    let attributes: Vec<u8> = (0..n).map(|_| rng.gen_bool(p_member) as u8).collect();
    let adjacency: Vec<Vec<u8>> = (0..n)
        .map(|i| (0..n).map(|j| (i != j && rng.gen_bool(p_link)) as u8).collect())
        .collect();
    NetworkInstance::new(adjacency, attributes).unwrap()
}

fn random_ensemble(seed: u64, sizes: &[usize], n_sims: usize) -> Ensemble {
    let mut rng = Pcg64::seed_from_u64(seed);
    let networks = sizes
        .iter()
        .map(|&n| {
            let observed = random_network(&mut rng, n, 0.3, 0.15);
            let simulated = (0..n_sims).map(|_| random_network(&mut rng, n, 0.3, 0.15)).collect();
            EnsembleEntry::new(observed, simulated)
        })
        .collect();
    Ensemble::new(networks)
}

// Encodes a scalar as a link count so fixtures can carry exact values.
fn links_per_hundred(net: &NetworkInstance) -> Result<Vec<f64>, ExtractError> {
    let n = net.size();
    let links = (0..n)
        .flat_map(|i| (0..n).map(move |j| (i, j)))
        .filter(|&(i, j)| net.link(i, j))
        .count();
    Ok(vec![links as f64 / 100.0])
}

fn density_without_mixing(net: &NetworkInstance) -> Result<Vec<f64>, ExtractError> {
    let density = links_per_hundred(net)?[0];
    Ok(vec![density, 0.0, 0.0, 0.0, 0.0])
}

fn with_links(n: usize, links: usize) -> NetworkInstance {
    let edges: Vec<(usize, usize)> = (0..n)
        .flat_map(|i| (0..n).filter(move |&j| j != i).map(move |j| (i, j)))
        .take(links)
        .collect();
    NetworkInstance::from_edges(vec![0; n], &edges).unwrap()
}

fn density_config() -> FitConfig {
    FitConfig {
        moments: vec![MomentSpec::new("density", "Density", Section::Structure)],
        ..FitConfig::default()
    }
}

#[test]
fn test_two_network_density_scenario() {
    let ensemble = Ensemble::new(vec![
        EnsembleEntry::new(with_links(10, 25), vec![with_links(10, 20), with_links(10, 40)]),
        EnsembleEntry::new(with_links(20, 45), vec![with_links(20, 50)]),
    ]);
    let extractor = FnExtractor::new(
        StatSchema::new(["density", "nn", "ns", "sn", "ss"]),
        density_without_mixing,
    );
    let report = run_fit(&ensemble, &extractor, &density_config()).unwrap();
    let density = report.moment("density").unwrap();

    assert!((density.model_mean - 13.0 / 30.0).abs() < 1e-12);
    assert!((density.data - 11.5 / 30.0).abs() < 1e-12);
    // per-network medians coincide with the means here
    assert!((density.model_median - 13.0 / 30.0).abs() < 1e-12);
    assert_eq!(report.n_networks, 2);
    assert_eq!(report.n_simulated_draws, 3);
    assert_eq!(report.total_nodes, 30);
}

#[test]
fn test_order_invariance() {
    let ensemble = random_ensemble(11, &[12, 30, 18, 25, 9], 6);
    let extractor = NetStats::new();
    let config = FitConfig::default();
    let reference = run_fit(&ensemble, &extractor, &config).unwrap();

    let mut rng = Pcg64::seed_from_u64(99);
    for _ in 0..5 {
        let mut shuffled = ensemble.clone();
        shuffled.networks.shuffle(&mut rng);
        let report = run_fit(&shuffled, &extractor, &config).unwrap();
        assert_reports_match(&reference, &report, 1e-12);
    }
}

#[test]
fn test_aggregation_is_idempotent() {
    let ensemble = random_ensemble(3, &[15, 22, 40], 4);
    let table = walk(&ensemble, &NetStats::new()).unwrap();
    let config = FitConfig::default();
    let first = summarize(&table, &config).unwrap();
    let second = summarize(&table, &config).unwrap();
    assert_reports_match(&first, &second, 0.0);
}

#[test]
fn test_null_network_is_excluded_with_its_weight() {
    let mut rng = Pcg64::seed_from_u64(5);
    let a = random_network(&mut rng, 20, 0.5, 0.2);
    let b = random_network(&mut rng, 30, 0.5, 0.2);
    // no attribute members, so the homophily index is undefined
    let c = NetworkInstance::from_edges(vec![0; 25], &[(0, 1), (2, 3)]).unwrap();

    let full = Ensemble::new(vec![
        EnsembleEntry::new(a.clone(), vec![a.clone()]),
        EnsembleEntry::new(c.clone(), vec![c]),
        EnsembleEntry::new(b.clone(), vec![b.clone()]),
    ]);
    let reduced = Ensemble::new(vec![
        EnsembleEntry::new(a.clone(), vec![a]),
        EnsembleEntry::new(b.clone(), vec![b]),
    ]);

    let config = FitConfig::default();
    let full = run_fit(&full, &NetStats::new(), &config).unwrap();
    let reduced = run_fit(&reduced, &NetStats::new(), &config).unwrap();
    let (x, y) = (full.moment("hi").unwrap(), reduced.moment("hi").unwrap());
    assert!(!x.data.is_nan());
    assert!((x.data - y.data).abs() < 1e-12);
    assert!((x.model_mean - y.model_mean).abs() < 1e-12);
}

#[test]
fn test_mixing_rows_sum_to_hundred() {
    let ensemble = random_ensemble(21, &[30, 45, 26], 5);
    let report = run_fit(&ensemble, &NetStats::new(), &FitConfig::default()).unwrap();
    for shares in [report.mixing.model_shares, report.mixing.data_shares] {
        assert!((shares.ss + shares.sn - 100.0).abs() < 1e-9);
        assert!((shares.ns + shares.nn - 100.0).abs() < 1e-9);
    }
}

#[test]
fn test_observed_only_entries_leave_model_undefined() {
    let mut rng = Pcg64::seed_from_u64(8);
    let net = random_network(&mut rng, 10, 0.5, 0.3);
    let ensemble = Ensemble::new(vec![EnsembleEntry::new(net, vec![])]);
    let report = run_fit(&ensemble, &NetStats::new(), &FitConfig::default()).unwrap();
    let prev = report.moment("prev").unwrap();
    assert!(prev.model_mean.is_nan());
    assert!(prev.model_median.is_nan());
    assert!(!prev.data.is_nan());
}

#[test]
fn test_missing_draw_aborts_run() {
    let mut ensemble = random_ensemble(1, &[10, 12], 2);
    ensemble.networks[1].draws.clear();
    let err = run_fit(&ensemble, &NetStats::new(), &FitConfig::default()).unwrap_err();
    assert_eq!(
        err.downcast_ref::<FitError>(),
        Some(&FitError::MissingDraw { network_id: 2 })
    );
}

#[test]
fn test_unknown_moment_is_reported() {
    let ensemble = random_ensemble(2, &[10], 1);
    let config = FitConfig {
        moments: vec![MomentSpec::new("diameter", "Diameter", Section::Structure)],
        ..FitConfig::default()
    };
    let err = run_fit(&ensemble, &NetStats::new(), &config).unwrap_err();
    assert_eq!(
        err.downcast_ref::<FitError>(),
        Some(&FitError::UnknownStatistic {
            label: "diameter".to_string()
        })
    );
}

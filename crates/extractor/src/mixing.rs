use netfit_shared::network::NetworkInstance;
use netfit_shared::result::MixingCounts;

/// Directed link counts by (nominator, nominee) attribute.
pub fn mixing_counts(net: &NetworkInstance) -> MixingCounts {
    let n = net.size();
    let mut counts = [[0usize; 2]; 2];
    for i in 0..n {
        for j in 0..n {
            if net.link(i, j) {
                counts[net.member(i) as usize][net.member(j) as usize] += 1;
            }
        }
    }
    MixingCounts {
        nn: counts[0][0] as f64,
        ns: counts[0][1] as f64,
        sn: counts[1][0] as f64,
        ss: counts[1][1] as f64,
    }
}

use netfit_shared::network::NetworkInstance;

/// Homophily indices of the attribute group (a = 1). Undefined ratios are `NaN`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Homophily {
    /// Share of the group's nominations that stay inside the group.
    pub hi: f64,
    /// `hi` relative to the group's population share (inbreeding homophily).
    pub chi: f64,
    /// One minus observed over expected cross-group links (Freeman segregation).
    pub fsi: f64,
}

impl Homophily {
    pub fn values(&self) -> [f64; 3] {
        [self.hi, self.chi, self.fsi]
    }
}

#[inline]
fn ratio(num: f64, den: f64) -> f64 {
    if den == 0.0 {
        f64::NAN
    } else {
        num / den
    }
}

pub fn homophily(net: &NetworkInstance) -> Homophily {
    let n = net.size();
    let nf = n as f64;
    let members = (0..n).filter(|&i| net.member(i)).count() as f64;

    let mut same = 0usize;
    let mut other = 0usize;
    let mut links = 0usize;
    let mut cross = 0usize;
    for i in 0..n {
        for j in 0..n {
            if !net.link(i, j) {
                continue;
            }
            links += 1;
            if net.member(i) != net.member(j) {
                cross += 1;
            }
            if net.member(i) {
                if net.member(j) {
                    same += 1;
                } else {
                    other += 1;
                }
            }
        }
    }

    let hi = ratio(same as f64, (same + other) as f64);
    let w = ratio(members, nf);
    let chi = ratio(hi - w, 1.0 - w);
    let expected_cross = ratio(links as f64 * 2.0 * members * (nf - members), nf * (nf - 1.0));
    let fsi = 1.0 - ratio(cross as f64, expected_cross);

    Homophily { hi, chi, fsi }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-12;

    #[test]
    fn test_mixed_triad() {
        let net =
            NetworkInstance::from_edges(vec![1, 1, 0], &[(0, 1), (1, 0), (1, 2), (2, 0)]).unwrap();
        let h = homophily(&net);
        assert!((h.hi - 2.0 / 3.0).abs() < EPS);
        assert!(h.chi.abs() < EPS);
        assert!((h.fsi - 0.25).abs() < EPS);
    }

    #[test]
    fn test_no_members_is_undefined() {
        let net = NetworkInstance::from_edges(vec![0, 0, 0], &[(0, 1), (2, 1)]).unwrap();
        let h = homophily(&net);
        assert!(h.hi.is_nan());
        assert!(h.chi.is_nan());
        assert!(h.fsi.is_nan());
    }

    #[test]
    fn test_perfect_segregation() {
        let net = NetworkInstance::from_edges(vec![1, 1, 0, 0], &[(0, 1), (2, 3)]).unwrap();
        let h = homophily(&net);
        assert_eq!(h.hi, 1.0);
        assert_eq!(h.chi, 1.0);
        assert_eq!(h.fsi, 1.0);
    }
}

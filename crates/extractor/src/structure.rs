use netfit_shared::network::NetworkInstance;

/// Structural moments of one draw. Per-node counts are normalized by `n`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Structure {
    pub prev: f64,
    pub density: f64,
    pub avg_deg: f64,
    pub min_deg: f64,
    pub max_deg: f64,
    pub aga: f64,
    pub iagia: f64,
    pub two_paths: f64,
    pub tri: f64,
}

impl Structure {
    pub fn values(&self) -> [f64; 9] {
        [
            self.prev,
            self.density,
            self.avg_deg,
            self.min_deg,
            self.max_deg,
            self.aga,
            self.iagia,
            self.two_paths,
            self.tri,
        ]
    }
}

/// Undirected neighbor lists: i ~ j when either nominates the other.
pub(crate) fn symmetrize(net: &NetworkInstance) -> Vec<Vec<bool>> {
    let n = net.size();
    let mut u = vec![vec![false; n]; n];
    for i in 0..n {
        for j in 0..n {
            if net.link(i, j) {
                u[i][j] = true;
                u[j][i] = true;
            }
        }
    }
    u
}

/// Expects a non-empty network.
pub fn structure(net: &NetworkInstance) -> Structure {
    let n = net.size();
    let nf = n as f64;

    let mut members = 0usize;
    let mut links = 0usize;
    let mut min_deg = usize::MAX;
    let mut max_deg = 0usize;
    let mut aga = 0usize;
    let mut iagia = 0usize;
    for i in 0..n {
        if net.member(i) {
            members += 1;
        }
        let mut deg = 0usize;
        for j in 0..n {
            if !net.link(i, j) {
                continue;
            }
            deg += 1;
            match (net.member(i), net.member(j)) {
                (true, true) => aga += 1,
                (false, false) => iagia += 1,
                _ => {}
            }
        }
        links += deg;
        min_deg = min_deg.min(deg);
        max_deg = max_deg.max(deg);
    }

    let u = symmetrize(net);
    let mut two_paths = 0usize;
    let mut triangles = 0usize;
    for i in 0..n {
        let neighbors: Vec<usize> = (0..n).filter(|&j| u[i][j]).collect();
        for (a, &j) in neighbors.iter().enumerate() {
            for &l in &neighbors[a + 1..] {
                if u[j][l] {
                    if i < j {
                        triangles += 1;
                    }
                } else {
                    two_paths += 1;
                }
            }
        }
    }

    let pairs = nf * (nf - 1.0);
    Structure {
        prev: members as f64 / nf,
        density: if pairs > 0.0 { links as f64 / pairs } else { f64::NAN },
        avg_deg: links as f64 / nf,
        min_deg: min_deg as f64,
        max_deg: max_deg as f64,
        aga: aga as f64 / nf,
        iagia: iagia as f64 / nf,
        two_paths: two_paths as f64 / nf,
        tri: triangles as f64 / nf,
    }
}

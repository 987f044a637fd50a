use crate::fingerprint::Fingerprint;

/// Distances fall into `NUM_BINS` bins of width 0.05, the last one holding
/// only a distance of exactly 1.0.
pub const NUM_BINS: usize = 21;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DistanceMeasure {
    Tanimoto,
    Tversky { alpha: f64, beta: f64 },
}

impl DistanceMeasure {
    pub fn distance(&self, query: &Fingerprint, target: &Fingerprint) -> f64 {
        match *self {
            DistanceMeasure::Tanimoto => query.tanimoto_distance(target),
            DistanceMeasure::Tversky { alpha, beta } => query.tversky_distance(target, alpha, beta),
        }
    }
}

pub fn distance_bin(distance: f64) -> usize {
    ((20.0 * distance) as usize).min(NUM_BINS - 1)
}

/// Running sum, over queries, of the fraction of targets in each distance bin.
#[derive(Debug, Clone)]
pub struct DistanceHistogram {
    measure: DistanceMeasure,
    fractions: [f64; NUM_BINS],
    queries: usize,
}

impl DistanceHistogram {
    pub fn new(measure: DistanceMeasure) -> Self {
        DistanceHistogram {
            measure,
            fractions: [0.0; NUM_BINS],
            queries: 0,
        }
    }

    pub fn add_query(&mut self, query: &Fingerprint, targets: &[Fingerprint]) {
        self.queries += 1;
        if targets.is_empty() {
            return;
        }

        let mut counts = [0usize; NUM_BINS];
        for target in targets {
            counts[distance_bin(self.measure.distance(query, target))] += 1;
        }

        for (fraction, count) in self.fractions.iter_mut().zip(counts) {
            *fraction += count as f64 / targets.len() as f64;
        }
    }

    pub fn fractions(&self) -> &[f64; NUM_BINS] {
        &self.fractions
    }

    /// Equals the number of queries added, as long as there were targets.
    pub fn total(&self) -> f64 {
        self.fractions.iter().sum()
    }

    pub fn queries(&self) -> usize {
        self.queries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fp(bits: &str) -> Fingerprint {
        Fingerprint(bits.chars().map(|c| c == '1').collect())
    }

    #[test]
    fn test_distance_bin() {
        assert_eq!(distance_bin(0.0), 0);
        assert_eq!(distance_bin(0.049), 0);
        assert_eq!(distance_bin(0.05), 1);
        assert_eq!(distance_bin(0.5), 10);
        assert_eq!(distance_bin(0.99), 19);
        assert_eq!(distance_bin(1.0), 20);
    }

    #[test]
    fn test_histogram_accumulates() {
        let targets = vec![fp("1100"), fp("0011"), fp("1000"), fp("1100")];
        let mut hist = DistanceHistogram::new(DistanceMeasure::Tanimoto);

        hist.add_query(&fp("1100"), &targets);
        let fracs = hist.fractions();
        assert_eq!(fracs[0], 0.5);
        assert_eq!(fracs[10], 0.25);
        assert_eq!(fracs[20], 0.25);

        hist.add_query(&fp("0011"), &targets);
        let fracs = hist.fractions();
        assert_eq!(fracs[0], 0.75);
        assert_eq!(fracs[20], 1.0);
        assert_eq!(hist.queries(), 2);
        assert!((hist.total() - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_tversky_measure() {
        let measure = DistanceMeasure::Tversky {
            alpha: 1.0,
            beta: 0.0,
        };
        // every query bit is in the target, extra target bits are ignored
        assert_eq!(measure.distance(&fp("1000"), &fp("1111")), 0.0);
        assert_eq!(measure.distance(&fp("1111"), &fp("1000")), 0.75);
    }

    #[test]
    fn test_no_targets() {
        let mut hist = DistanceHistogram::new(DistanceMeasure::Tanimoto);
        hist.add_query(&fp("1"), &[]);

        assert_eq!(hist.queries(), 1);
        assert_eq!(hist.total(), 0.0);
    }
}

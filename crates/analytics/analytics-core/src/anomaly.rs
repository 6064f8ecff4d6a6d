//! Isolation-forest anomaly detection.
//!
//! Unsupervised outlier scoring over the revenue values: an ensemble of
//! randomly split isolation trees, where points that isolate in few splits
//! score high. The top `contamination` fraction of scores is flagged. All
//! randomness comes from a seeded RNG, so identical input and configuration
//! always produce identical flags.

use analytics_api::AnomalyConfig;
use analytics_spi::{AnalyticsError, AnomalyDetector, AnomalyResult, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const EULER_MASCHERONI: f64 = 0.577_215_664_901_532_9;

/// Expected path length of an unsuccessful BST search over `n` points;
/// normalizes raw path lengths into the ensemble score.
fn expected_path_length(n: usize) -> f64 {
    if n <= 1 {
        return 0.0;
    }
    let h = (n - 1) as f64;
    2.0 * (h.ln() + EULER_MASCHERONI) - 2.0 * h / n as f64
}

enum Node {
    Leaf {
        size: usize,
    },
    Split {
        value: f64,
        left: Box<Node>,
        right: Box<Node>,
    },
}

struct IsolationTree {
    root: Node,
}

impl IsolationTree {
    fn grow(values: &[f64], depth: usize, max_depth: usize, rng: &mut StdRng) -> Node {
        let min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        if values.len() <= 1 || depth >= max_depth || max - min <= 0.0 {
            return Node::Leaf {
                size: values.len(),
            };
        }

        let split = rng.gen_range(min..max);
        let (left, right): (Vec<f64>, Vec<f64>) =
            values.iter().copied().partition(|&v| v < split);

        Node::Split {
            value: split,
            left: Box::new(Self::grow(&left, depth + 1, max_depth, rng)),
            right: Box::new(Self::grow(&right, depth + 1, max_depth, rng)),
        }
    }

    fn path_length(&self, x: f64) -> f64 {
        let mut node = &self.root;
        let mut depth = 0.0;
        loop {
            match node {
                Node::Leaf { size } => return depth + expected_path_length(*size),
                Node::Split { value, left, right } => {
                    node = if x < *value { left } else { right };
                    depth += 1.0;
                }
            }
        }
    }
}

/// Isolation-forest detector over a univariate series.
///
/// Construction validates the configuration (`contamination` must lie in
/// `(0, 0.5]`). A constant-valued series produces no flags: every point
/// scores the same and no score spread exists to rank by.
pub struct IsolationForestDetector {
    config: AnomalyConfig,
    trees: Vec<IsolationTree>,
    sample_size: usize,
    fitted: bool,
}

impl IsolationForestDetector {
    /// Create a detector, validating the configuration.
    pub fn new(config: AnomalyConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            trees: Vec::new(),
            sample_size: 0,
            fitted: false,
        })
    }
}

impl AnomalyDetector for IsolationForestDetector {
    fn fit(&mut self, data: &[f64]) -> Result<()> {
        if data.len() < 2 {
            return Err(AnalyticsError::InsufficientData {
                required: 2,
                actual: data.len(),
            });
        }

        let sample_size = self.config.sample_size.min(data.len());
        let max_depth = (sample_size as f64).log2().ceil() as usize;
        let mut rng = StdRng::seed_from_u64(self.config.seed);

        let mut trees = Vec::with_capacity(self.config.trees);
        for _ in 0..self.config.trees {
            let sample: Vec<f64> = if sample_size == data.len() {
                data.to_vec()
            } else {
                (0..sample_size)
                    .map(|_| data[rng.gen_range(0..data.len())])
                    .collect()
            };
            trees.push(IsolationTree {
                root: IsolationTree::grow(&sample, 0, max_depth, &mut rng),
            });
        }

        self.trees = trees;
        self.sample_size = sample_size;
        self.fitted = true;
        Ok(())
    }

    fn detect(&self, data: &[f64]) -> Result<AnomalyResult> {
        let scores = self.score(data)?;
        let n = data.len();

        let spread = {
            let min = scores.iter().copied().fold(f64::INFINITY, f64::min);
            let max = scores.iter().copied().fold(f64::NEG_INFINITY, f64::max);
            max - min
        };

        let k = (self.config.contamination * n as f64).round() as usize;
        let mut is_anomaly = vec![false; n];
        let mut threshold = f64::INFINITY;

        if k > 0 && spread > 1e-9 {
            let mut order: Vec<usize> = (0..n).collect();
            order.sort_by(|&a, &b| {
                scores[b]
                    .total_cmp(&scores[a])
                    .then_with(|| a.cmp(&b))
            });
            for &i in order.iter().take(k) {
                is_anomaly[i] = true;
            }
            threshold = scores[order[k - 1]];
        }

        Ok(AnomalyResult::new(is_anomaly, scores, threshold))
    }

    fn score(&self, data: &[f64]) -> Result<Vec<f64>> {
        if !self.fitted {
            return Err(AnalyticsError::NotFitted);
        }

        let normalizer = expected_path_length(self.sample_size);
        Ok(data
            .iter()
            .map(|&x| {
                let mean_path = self
                    .trees
                    .iter()
                    .map(|tree| tree.path_length(x))
                    .sum::<f64>()
                    / self.trees.len() as f64;
                if normalizer > 0.0 {
                    2.0_f64.powf(-mean_path / normalizer)
                } else {
                    0.5
                }
            })
            .collect())
    }

    fn is_fitted(&self) -> bool {
        self.fitted
    }
}

/// Fit and detect in one call over the same series.
pub fn detect_anomalies(values: &[f64], config: &AnomalyConfig) -> Result<AnomalyResult> {
    let mut detector = IsolationForestDetector::new(config.clone())?;
    detector.fit(values)?;
    detector.detect(values)
}

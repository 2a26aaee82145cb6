use super::domain::{Feature, FeatureVector, SpoilageStatus, TrainingSample};
use tracing::info;

const MAX_DEPTH: usize = 5;
const MIN_SAMPLES_SPLIT: usize = 2;

/// Statuses in lexical label order; leaf majority ties resolve to the
/// first entry with the winning count.
const TIE_BREAK_ORDER: [SpoilageStatus; 3] = [
    SpoilageStatus::Caution,
    SpoilageStatus::Reject,
    SpoilageStatus::Safe,
];

/// Binary decision tree node. Children are exclusively owned, so every
/// traversal terminates at a leaf without any null checks.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Node {
    Leaf {
        prediction: SpoilageStatus,
        avg_risk: f64,
    },
    Internal {
        feature: Feature,
        threshold: f64,
        left: Box<Node>,
        right: Box<Node>,
    },
}

/// Label plus leaf-average risk resolved for one feature vector.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Prediction {
    pub(crate) label: SpoilageStatus,
    pub(crate) risk: f64,
}

struct Split {
    feature: Feature,
    threshold: f64,
    left: Vec<TrainingSample>,
    right: Vec<TrainingSample>,
}

/// CART-style classifier over the three spoilage features.
///
/// Trained exactly once; prediction is a read-only walk, so a trained
/// classifier can be shared freely across concurrent requests.
#[derive(Debug, Clone)]
pub(crate) struct SpoilageClassifier {
    root: Node,
}

impl SpoilageClassifier {
    pub(crate) fn train(samples: &[TrainingSample]) -> Self {
        if samples.is_empty() {
            // Degrade to the defined default rather than fail.
            return Self {
                root: Node::Leaf {
                    prediction: SpoilageStatus::Caution,
                    avg_risk: 50.0,
                },
            };
        }

        info!(samples = samples.len(), "training spoilage decision tree");
        let root = build_tree(samples, 0);
        info!("model training complete");
        Self { root }
    }

    pub(crate) fn predict(&self, features: &FeatureVector) -> Prediction {
        let mut node = &self.root;
        loop {
            match node {
                Node::Leaf {
                    prediction,
                    avg_risk,
                } => {
                    return Prediction {
                        label: *prediction,
                        risk: *avg_risk,
                    }
                }
                Node::Internal {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    node = if features.value(*feature) <= *threshold {
                        left
                    } else {
                        right
                    };
                }
            }
        }
    }

    #[cfg(test)]
    pub(crate) fn root(&self) -> &Node {
        &self.root
    }
}

/// Gini impurity of a sample set: 0 for a pure set, approaching 1 as
/// labels mix.
pub(crate) fn gini(samples: &[TrainingSample]) -> f64 {
    if samples.is_empty() {
        return 0.0;
    }

    let total = samples.len() as f64;
    let mut impurity = 1.0;
    for status in TIE_BREAK_ORDER {
        let count = samples.iter().filter(|s| s.label == status).count();
        let probability = count as f64 / total;
        impurity -= probability * probability;
    }
    impurity
}

fn majority_label(samples: &[TrainingSample]) -> SpoilageStatus {
    let mut winner: Option<(SpoilageStatus, usize)> = None;
    for status in TIE_BREAK_ORDER {
        let count = samples.iter().filter(|s| s.label == status).count();
        if count > 0 && winner.map_or(true, |(_, best)| count > best) {
            winner = Some((status, count));
        }
    }
    winner.map_or(SpoilageStatus::Caution, |(status, _)| status)
}

fn leaf(samples: &[TrainingSample]) -> Node {
    let total: f64 = samples.iter().map(|s| f64::from(s.risk_score)).sum();
    Node::Leaf {
        prediction: majority_label(samples),
        avg_risk: total / samples.len() as f64,
    }
}

fn distinct_label_count(samples: &[TrainingSample]) -> usize {
    TIE_BREAK_ORDER
        .iter()
        .filter(|status| samples.iter().any(|s| s.label == **status))
        .count()
}

/// Exhaustive best-split search: every distinct value of every feature is
/// a candidate threshold, scored by weighted Gini impurity of the `<=` /
/// `>` partition. The first candidate to reach the minimum wins ties.
fn best_split(samples: &[TrainingSample]) -> Option<Split> {
    let mut best_gini = f64::INFINITY;
    let mut best: Option<Split> = None;

    for feature in Feature::ALL {
        let mut thresholds: Vec<f64> = Vec::new();
        for sample in samples {
            let value = sample.feature(feature);
            if !thresholds.contains(&value) {
                thresholds.push(value);
            }
        }

        for threshold in thresholds {
            let (left, right): (Vec<TrainingSample>, Vec<TrainingSample>) = samples
                .iter()
                .copied()
                .partition(|sample| sample.feature(feature) <= threshold);

            if left.is_empty() || right.is_empty() {
                continue;
            }

            let weighted = (left.len() as f64 * gini(&left) + right.len() as f64 * gini(&right))
                / samples.len() as f64;

            if weighted < best_gini {
                best_gini = weighted;
                best = Some(Split {
                    feature,
                    threshold,
                    left,
                    right,
                });
            }
        }
    }

    best
}

fn build_tree(samples: &[TrainingSample], depth: usize) -> Node {
    // Stop on a pure node, the depth cap, or too few samples to split.
    if distinct_label_count(samples) == 1
        || depth >= MAX_DEPTH
        || samples.len() < MIN_SAMPLES_SPLIT
    {
        return leaf(samples);
    }

    match best_split(samples) {
        // Every candidate left one side empty, e.g. identical feature rows.
        None => leaf(samples),
        Some(split) => Node::Internal {
            feature: split.feature,
            threshold: split.threshold,
            left: Box::new(build_tree(&split.left, depth + 1)),
            right: Box::new(build_tree(&split.right, depth + 1)),
        },
    }
}

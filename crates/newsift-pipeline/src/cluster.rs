//! Average-linkage agglomerative clustering over cosine distance.
//!
//! No fixed cluster count: merging continues while the smallest average
//! inter-cluster distance stays below the threshold. Input sizes here are
//! one fetch batch (hundreds of articles at most), so the quadratic
//! distance matrix and the cubic merge loop are fine.

/// Cosine similarity in `[-1, 1]`. Zero-norm vectors compare as 0.
pub(crate) fn cosine_similarity(a: &[f32], b: &[f32]) -> f64 {
    let mut dot = 0.0f64;
    let mut norm_a = 0.0f64;
    let mut norm_b = 0.0f64;
    for (x, y) in a.iter().zip(b.iter()) {
        dot += f64::from(*x) * f64::from(*y);
        norm_a += f64::from(*x) * f64::from(*x);
        norm_b += f64::from(*y) * f64::from(*y);
    }
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    dot / (norm_a.sqrt() * norm_b.sqrt())
}

/// Cluster labels for each embedding, merging while the average pairwise
/// cosine distance between two clusters is strictly below
/// `distance_threshold`.
///
/// Labels are arbitrary but consistent: two indices share a label exactly
/// when they ended up in the same cluster.
pub(crate) fn agglomerative_labels(embeddings: &[Vec<f32>], distance_threshold: f64) -> Vec<usize> {
    let n = embeddings.len();
    if n == 0 {
        return Vec::new();
    }
    if n == 1 {
        return vec![0];
    }

    // Condensed pairwise cosine-distance matrix.
    let mut distance = vec![vec![0.0f64; n]; n];
    for i in 0..n {
        for j in (i + 1)..n {
            let d = 1.0 - cosine_similarity(&embeddings[i], &embeddings[j]);
            distance[i][j] = d;
            distance[j][i] = d;
        }
    }

    let mut clusters: Vec<Vec<usize>> = (0..n).map(|i| vec![i]).collect();

    loop {
        let mut best: Option<(usize, usize, f64)> = None;

        for a in 0..clusters.len() {
            for b in (a + 1)..clusters.len() {
                let d = average_distance(&distance, &clusters[a], &clusters[b]);
                if best.is_none_or(|(_, _, best_d)| d < best_d) {
                    best = Some((a, b, d));
                }
            }
        }

        match best {
            Some((a, b, d)) if d < distance_threshold => {
                let merged = clusters.remove(b);
                clusters[a].extend(merged);
            }
            _ => break,
        }
    }

    let mut labels = vec![0usize; n];
    for (label, members) in clusters.iter().enumerate() {
        for &idx in members {
            labels[idx] = label;
        }
    }
    labels
}

/// Average linkage: mean pairwise distance between all member pairs.
fn average_distance(distance: &[Vec<f64>], a: &[usize], b: &[usize]) -> f64 {
    let mut sum = 0.0f64;
    for &i in a {
        for &j in b {
            sum += distance[i][j];
        }
    }
    #[allow(clippy::cast_precision_loss)]
    let pairs = (a.len() * b.len()) as f64;
    sum / pairs
}

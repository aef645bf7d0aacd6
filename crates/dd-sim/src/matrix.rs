//! Distance matrices: random generation and CSV loading.
//!
//! # Generated neighbourhoods
//!
//! A ring `0 - 1 - ... - (n-1) - 0` with random distances guarantees every
//! node is reachable.  Extra symmetric shortcuts are then added between any
//! two distinct nodes with probability `connectivity`.  All distances are in
//! (EPSILON, 1].
//!
//! # CSV format
//!
//! No header, one row per source node, one `f64` per target node:
//!
//! ```csv
//! 0.0, 0.4, 0.0
//! 0.4, 0.0, 0.9
//! 0.0, 0.9, 0.0
//! ```

use std::fmt;
use std::io::Read;
use std::path::Path;

use dd_core::{DayRng, DdError};
use dd_graph::{EPSILON, Graph, GraphResult};

use crate::{SimError, SimResult};

/// Square matrix of non-negative distances; `0.0` means "no edge".
#[derive(Clone, Debug, PartialEq)]
pub struct DistanceMatrix(pub Vec<Vec<f64>>);

impl DistanceMatrix {
    /// Number of rows.
    pub fn size(&self) -> usize {
        self.0.len()
    }

    pub fn rows(&self) -> &[Vec<f64>] {
        &self.0
    }

    pub fn to_graph(&self) -> GraphResult<Graph> {
        Graph::from_matrix(&self.0)
    }
}

impl fmt::Display for DistanceMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Matrix:")?;
        for row in &self.0 {
            for d in row {
                write!(f, " {d:.2} ")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Random symmetric neighbourhood of `size` nodes, reproducible per `seed`.
///
/// `connectivity` must be a probability in [0, 1].
pub fn generate_distance_matrix(
    size: usize,
    connectivity: f64,
    seed: u64,
) -> SimResult<DistanceMatrix> {
    if !(0.0..=1.0).contains(&connectivity) {
        return Err(DdError::Config(format!(
            "connectivity must be in [0, 1], got {connectivity}"
        ))
        .into());
    }

    let mut rng = DayRng::new(seed);
    let mut m = vec![vec![0.0; size]; size];

    if size >= 2 {
        for i in 0..size {
            let j = (i + 1) % size;
            let d = random_distance(&mut rng);
            m[i][j] = d;
            m[j][i] = d;
        }
    }

    for i in 0..size {
        for j in 0..size {
            if i != j && rng.gen_bool(connectivity) {
                let d = random_distance(&mut rng);
                m[i][j] = d;
                m[j][i] = d;
            }
        }
    }

    Ok(DistanceMatrix(m))
}

/// In (EPSILON, 1], so a generated edge is never mistaken for "no edge".
fn random_distance(rng: &mut DayRng) -> f64 {
    EPSILON + (1.0 - EPSILON) * (1.0 - rng.random::<f64>())
}

/// Load a distance matrix from a headerless CSV file.
pub fn load_matrix_csv(path: &Path) -> SimResult<DistanceMatrix> {
    let file = std::fs::File::open(path)?;
    load_matrix_reader(file)
}

/// Like [`load_matrix_csv`] but accepts any `Read` source.
///
/// Rows may differ in length here; squareness is checked when the graph is
/// built.
pub fn load_matrix_reader<R: Read>(reader: R) -> SimResult<DistanceMatrix> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let rows = csv_reader
        .deserialize::<Vec<f64>>()
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| SimError::Parse(e.to_string()))?;
    Ok(DistanceMatrix(rows))
}

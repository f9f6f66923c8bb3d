use crate::id::RegionId;
use serde::{Deserialize, Serialize};

/// Matrix value meaning "no direct route". Never a valid edge weight.
pub const NO_ROUTE: u32 = u32::MAX;

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// Errors that can occur during route graph operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    #[error("region {region:?} out of range (graph holds {num_regions} regions)")]
    RegionOutOfRange { region: RegionId, num_regions: usize },
    #[error("weight {0} is reserved for \"no route\"")]
    ReservedWeight(u32),
    #[error("matrix for {num_regions} regions needs {expected} weights, got {actual}")]
    MatrixSize {
        num_regions: usize,
        expected: usize,
        actual: usize,
    },
    #[error("route {a:?} <-> {b:?} has different weights in each direction")]
    Asymmetric { a: RegionId, b: RegionId },
}

// ---------------------------------------------------------------------------
// RouteGraph
// ---------------------------------------------------------------------------

/// Symmetric adjacency matrix of routes between regions.
///
/// Every cell starts at [`NO_ROUTE`], the diagonal included. The allocation
/// engine never reads it; it is kept for transport-aware allocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RouteGraphData", into = "RouteGraphData")]
pub struct RouteGraph {
    num_regions: usize,
    /// Row-major `num_regions * num_regions` weights.
    weights: Vec<u32>,
}

/// Serialized form of a [`RouteGraph`], checked on the way back in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteGraphData {
    pub num_regions: usize,
    pub weights: Vec<u32>,
}

impl TryFrom<RouteGraphData> for RouteGraph {
    type Error = GraphError;

    fn try_from(data: RouteGraphData) -> Result<Self, Self::Error> {
        let n = data.num_regions;
        let expected = n
            .checked_mul(n)
            .ok_or(GraphError::MatrixSize {
                num_regions: n,
                expected: usize::MAX,
                actual: data.weights.len(),
            })?;
        if data.weights.len() != expected {
            return Err(GraphError::MatrixSize {
                num_regions: n,
                expected,
                actual: data.weights.len(),
            });
        }
        for i in 0..n {
            for j in (i + 1)..n {
                if data.weights[i * n + j] != data.weights[j * n + i] {
                    return Err(GraphError::Asymmetric {
                        a: RegionId(i as u32),
                        b: RegionId(j as u32),
                    });
                }
            }
        }
        Ok(Self {
            num_regions: n,
            weights: data.weights,
        })
    }
}

impl From<RouteGraph> for RouteGraphData {
    fn from(graph: RouteGraph) -> Self {
        Self {
            num_regions: graph.num_regions,
            weights: graph.weights,
        }
    }
}

impl RouteGraph {
    /// A graph over `num_regions` regions with no routes.
    pub fn new(num_regions: usize) -> Self {
        Self {
            num_regions,
            weights: vec![NO_ROUTE; num_regions * num_regions],
        }
    }

    pub fn num_regions(&self) -> usize {
        self.num_regions
    }

    /// Add a bidirectional route, overwriting any existing weight.
    pub fn add_edge(&mut self, src: RegionId, dest: RegionId, weight: u32) -> Result<(), GraphError> {
        if weight == NO_ROUTE {
            return Err(GraphError::ReservedWeight(weight));
        }
        let a = self.cell(src, dest)?;
        let b = self.cell(dest, src)?;
        self.weights[a] = weight;
        self.weights[b] = weight;
        Ok(())
    }

    /// Weight of the direct route between two regions, if any.
    pub fn weight(&self, a: RegionId, b: RegionId) -> Option<u32> {
        let cell = self.cell(a, b).ok()?;
        match self.weights[cell] {
            NO_ROUTE => None,
            w => Some(w),
        }
    }

    pub fn has_route(&self, a: RegionId, b: RegionId) -> bool {
        self.weight(a, b).is_some()
    }

    /// Regions directly reachable from `region`, in ascending id order.
    pub fn neighbors(&self, region: RegionId) -> impl Iterator<Item = (RegionId, u32)> + '_ {
        let row = if region.index() < self.num_regions {
            let start = region.index() * self.num_regions;
            &self.weights[start..start + self.num_regions]
        } else {
            &[][..]
        };
        row.iter()
            .enumerate()
            .filter(|&(_, &w)| w != NO_ROUTE)
            .map(|(j, &w)| (RegionId(j as u32), w))
    }

    /// Number of distinct undirected routes (self-routes count once).
    pub fn edge_count(&self) -> usize {
        let n = self.num_regions;
        (0..n)
            .flat_map(|i| (i..n).map(move |j| (i, j)))
            .filter(|&(i, j)| self.weights[i * n + j] != NO_ROUTE)
            .count()
    }

    /// Extend the matrix to cover `num_regions` regions. Existing routes are
    /// kept and new cells start at [`NO_ROUTE`]. Never shrinks.
    pub(crate) fn grow_to(&mut self, num_regions: usize) {
        if num_regions <= self.num_regions {
            return;
        }
        let mut grown = RouteGraph::new(num_regions);
        for i in 0..self.num_regions {
            let old = i * self.num_regions;
            let new = i * num_regions;
            grown.weights[new..new + self.num_regions]
                .copy_from_slice(&self.weights[old..old + self.num_regions]);
        }
        *self = grown;
    }

    fn cell(&self, a: RegionId, b: RegionId) -> Result<usize, GraphError> {
        for region in [a, b] {
            if region.index() >= self.num_regions {
                return Err(GraphError::RegionOutOfRange {
                    region,
                    num_regions: self.num_regions,
                });
            }
        }
        Ok(a.index() * self.num_regions + b.index())
    }
}

//! Grouping of line segments into intersection-connected clusters.
//!
//! Two segments are adjacent when they cross transversally
//! ([`LineSegment::intersects`]). Clusters are the connected components of
//! that graph. A cluster is created when its lowest-indexed segment is
//! reached, so clusters come out ordered by their smallest input index, and
//! the dominant cluster is the largest one with ties going to the one
//! created first.

use crate::RectifyError;
use log::debug;
use nalgebra::Point2;
use sheet_rectify_core::LineSegment;

/// A maximal set of mutually reachable segments.
#[derive(Clone, Debug, PartialEq)]
pub struct SegmentCluster {
    /// Input positions of the members, ascending.
    pub indices: Vec<usize>,
    /// Members, in the same order as `indices`.
    pub segments: Vec<LineSegment>,
}

impl SegmentCluster {
    #[inline]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Both endpoints of every member (duplicates kept).
    pub fn endpoints(&self) -> Vec<Point2<f64>> {
        self.segments.iter().flat_map(|s| s.endpoints()).collect()
    }
}

fn intersection_graph(segments: &[LineSegment]) -> Vec<Vec<usize>> {
    let mut neighbors = vec![Vec::new(); segments.len()];
    for i in 0..segments.len() {
        for j in (i + 1)..segments.len() {
            if segments[i].intersects(&segments[j]) {
                neighbors[i].push(j);
                neighbors[j].push(i);
            }
        }
    }
    neighbors
}

/// Partition `segments` into connected clusters, in creation order.
pub fn cluster_segments(segments: &[LineSegment]) -> Vec<SegmentCluster> {
    let neighbors = intersection_graph(segments);
    let mut visited = vec![false; segments.len()];
    let mut clusters = Vec::new();

    for start in 0..segments.len() {
        if visited[start] {
            continue;
        }

        let mut members = Vec::new();
        let mut stack = vec![start];

        while let Some(node) = stack.pop() {
            if visited[node] {
                continue;
            }
            visited[node] = true;
            members.push(node);

            for &next in &neighbors[node] {
                if !visited[next] {
                    stack.push(next);
                }
            }
        }

        members.sort_unstable();
        clusters.push(SegmentCluster {
            segments: members.iter().map(|&i| segments[i]).collect(),
            indices: members,
        });
    }

    clusters
}

/// Pick the largest cluster; on equal sizes the earliest one wins.
pub fn select_dominant(clusters: Vec<SegmentCluster>) -> Option<SegmentCluster> {
    let mut best: Option<SegmentCluster> = None;
    for cluster in clusters {
        match &best {
            Some(b) if cluster.len() <= b.len() => {}
            _ => best = Some(cluster),
        }
    }
    best
}

/// Cluster `segments` and return the dominant cluster.
pub fn dominant_cluster(segments: &[LineSegment]) -> Result<SegmentCluster, RectifyError> {
    if segments.is_empty() {
        return Err(RectifyError::InsufficientSegments);
    }
    let clusters = cluster_segments(segments);
    let count = clusters.len();
    let best = select_dominant(clusters).ok_or(RectifyError::InsufficientSegments)?;
    debug!(
        "{} segments form {} clusters; dominant has {} (first index {})",
        segments.len(),
        count,
        best.len(),
        best.indices[0]
    );
    Ok(best)
}

//! Exhaustive enumeration of temporally-constrained simple paths.
//!
//! [`PathSearch::determine`] walks every simple path (no vertex repeated) from a
//! start vertex to an end vertex. The walk is an explicit-stack depth-first
//! search: a stack of [`SearchFrame`]s holds the remaining sibling candidates of
//! each level, and two parallel stacks hold the edges of the current path and
//! the vertices it visits. Each hop is gated by an [`ExtensionRule`], which also
//! decides how the valid-time window is carried from one hop to the next.

use ahash::AHashMap;

use crate::{
    errors::TemporalMetricError,
    graph::{TemporalEdge, TimeWindow, VertexId},
};

/// Edge-compatibility predicate plus window propagation for one path hop.
pub trait ExtensionRule {
    /// Window of a path consisting of the single seed edge `edge`.
    fn open(&self, edge: &TemporalEdge) -> TimeWindow {
        edge.interval()
    }

    /// Window of the path prefix once `edge` is appended to a prefix with `window`.
    fn advance(&self, window: &TimeWindow, edge: &TemporalEdge) -> TimeWindow;

    /// Whether `candidate` may follow `last` on a prefix whose window is `window`.
    fn admits(&self, window: &TimeWindow, last: &TemporalEdge, candidate: &TemporalEdge) -> bool;
}

/// Consecutive edges must coexist: every hop overlaps the window so far, and the
/// window shrinks to the intersection of all intervals on the path.
#[derive(Clone, Copy, Debug, Default)]
pub struct OverlapRule;

impl ExtensionRule for OverlapRule {
    fn advance(&self, window: &TimeWindow, edge: &TemporalEdge) -> TimeWindow {
        window.intersect(&edge.interval())
    }

    fn admits(&self, window: &TimeWindow, _last: &TemporalEdge, candidate: &TemporalEdge) -> bool {
        candidate.valid_from < window.to && candidate.valid_to > window.from
    }
}

/// Consecutive edges must be time-ordered: a hop starts no earlier than the
/// previous hop ends. The window spans from the first edge's start to the last
/// edge's end.
#[derive(Clone, Copy, Debug, Default)]
pub struct SuccessionRule;

impl ExtensionRule for SuccessionRule {
    fn advance(&self, window: &TimeWindow, edge: &TemporalEdge) -> TimeWindow {
        TimeWindow {
            from: window.from,
            to: edge.valid_to,
        }
    }

    fn admits(&self, _window: &TimeWindow, last: &TemporalEdge, candidate: &TemporalEdge) -> bool {
        candidate.valid_from >= last.valid_to
    }
}

/// A completed path handed to the `determine` callback.
#[derive(Clone, Copy, Debug)]
pub struct PathView<'p, 'a> {
    edges: &'p [&'a TemporalEdge],
    vertices: &'p [VertexId],
    windows: &'p [TimeWindow],
}

impl<'p, 'a> PathView<'p, 'a> {
    pub fn edges(&self) -> &'p [&'a TemporalEdge] {
        self.edges
    }

    /// Vertices in visiting order, start vertex first.
    pub fn vertices(&self) -> &'p [VertexId] {
        self.vertices
    }

    /// Window of every prefix, one entry per hop.
    pub fn hop_windows(&self) -> &'p [TimeWindow] {
        self.windows
    }

    /// Window of the whole path.
    pub fn window(&self) -> TimeWindow {
        self.windows[self.windows.len() - 1]
    }

    pub fn first(&self) -> &'a TemporalEdge {
        self.edges[0]
    }

    pub fn last(&self) -> &'a TemporalEdge {
        self.edges[self.edges.len() - 1]
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    pub fn visits(&self, vertex: VertexId) -> bool {
        self.vertices.contains(&vertex)
    }

    pub fn edge_ids(&self) -> Vec<i64> {
        self.edges.iter().map(|edge| edge.id).collect()
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchSummary {
    pub paths: usize,
    pub max_depth: usize,
}

/// One level of the explicit DFS stack.
#[derive(Debug)]
struct SearchFrame<'a> {
    candidates: Vec<&'a TemporalEdge>,
    cursor: usize,
    window: TimeWindow,
}

impl<'a> SearchFrame<'a> {
    fn new(candidates: Vec<&'a TemporalEdge>, window: TimeWindow) -> Self {
        Self {
            candidates,
            cursor: 0,
            window,
        }
    }

    fn current(&self) -> Option<&'a TemporalEdge> {
        self.candidates.get(self.cursor).copied()
    }

    fn advance(&mut self) -> Option<&'a TemporalEdge> {
        self.cursor += 1;
        self.current()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum SearchAction {
    /// The top of the path stack was just pushed and has not been expanded.
    Descend,
    /// The top of the path stack is finished; move to its next sibling.
    Backtrack,
    Done,
}

pub struct PathSearch<'a, R> {
    outgoing: AHashMap<VertexId, Vec<&'a TemporalEdge>>,
    rule: R,
}

impl<'a, R> PathSearch<'a, R>
where
    R: ExtensionRule,
{
    pub fn new(edges: &'a [TemporalEdge], rule: R) -> Self {
        let mut outgoing: AHashMap<VertexId, Vec<&'a TemporalEdge>> = AHashMap::new();
        for edge in edges {
            outgoing.entry(edge.source).or_default().push(edge);
        }
        Self { outgoing, rule }
    }

    /// Calls `on_path` for every simple path from `start` to `end`.
    ///
    /// A start vertex without outgoing edges yields zero paths. An error returned
    /// by `on_path` aborts the search and is propagated.
    pub fn determine<F>(
        &self,
        start: VertexId,
        end: VertexId,
        mut on_path: F,
    ) -> Result<SearchSummary, TemporalMetricError>
    where
        F: FnMut(&PathView<'_, 'a>) -> Result<(), TemporalMetricError>,
    {
        if start == end {
            return Err(TemporalMetricError::invalid_argument(format!(
                "start and end vertex must differ ({start})"
            )));
        }
        let mut summary = SearchSummary::default();
        let seed: Vec<&'a TemporalEdge> = self
            .successors(start)
            .filter(|edge| edge.target != start)
            .collect();
        let Some(first) = seed.first().copied() else {
            return Ok(summary);
        };

        let mut frames = vec![SearchFrame::new(seed, TimeWindow::UNBOUNDED)];
        let mut path: Vec<&'a TemporalEdge> = vec![first];
        let mut visited: Vec<VertexId> = vec![start, first.target];
        let mut windows: Vec<TimeWindow> = Vec::new();
        let mut action = SearchAction::Descend;

        while action != SearchAction::Done {
            action = match action {
                SearchAction::Descend => {
                    debug_assert_eq!(frames.len(), path.len());
                    debug_assert_eq!(visited.len(), path.len() + 1);
                    debug_assert_eq!(windows.len() + 1, path.len());
                    let edge = path[path.len() - 1];
                    let window = match frames.len() {
                        1 => self.rule.open(edge),
                        _ => self.rule.advance(&frames[frames.len() - 1].window, edge),
                    };
                    debug_assert!(!window.is_empty(), "admitted window collapsed");
                    windows.push(window);
                    summary.max_depth = summary.max_depth.max(path.len());

                    if edge.target == end {
                        summary.paths += 1;
                        on_path(&PathView {
                            edges: &path,
                            vertices: &visited,
                            windows: &windows,
                        })?;
                        SearchAction::Backtrack
                    } else {
                        let next: Vec<&'a TemporalEdge> = self
                            .successors(edge.target)
                            .filter(|candidate| !visited.contains(&candidate.target))
                            .filter(|candidate| self.rule.admits(&window, edge, candidate))
                            .collect();
                        match next.first().copied() {
                            Some(step) => {
                                frames.push(SearchFrame::new(next, window));
                                path.push(step);
                                visited.push(step.target);
                                SearchAction::Descend
                            }
                            None => SearchAction::Backtrack,
                        }
                    }
                }
                SearchAction::Backtrack => {
                    Self::backtrack(&mut frames, &mut path, &mut visited, &mut windows)
                }
                SearchAction::Done => SearchAction::Done,
            };
        }
        debug_assert!(path.is_empty() && windows.is_empty());
        log::debug!(
            "path search {start} -> {end}: {} paths, max depth {}",
            summary.paths,
            summary.max_depth
        );
        Ok(summary)
    }

    fn backtrack(
        frames: &mut Vec<SearchFrame<'a>>,
        path: &mut Vec<&'a TemporalEdge>,
        visited: &mut Vec<VertexId>,
        windows: &mut Vec<TimeWindow>,
    ) -> SearchAction {
        loop {
            path.pop();
            visited.pop();
            windows.pop();
            let Some(frame) = frames.last_mut() else {
                return SearchAction::Done;
            };
            if let Some(sibling) = frame.advance() {
                path.push(sibling);
                visited.push(sibling.target);
                return SearchAction::Descend;
            }
            frames.pop();
            if frames.is_empty() {
                return SearchAction::Done;
            }
        }
    }

    fn successors(&self, vertex: VertexId) -> impl Iterator<Item = &'a TemporalEdge> + '_ {
        self.outgoing
            .get(&vertex)
            .into_iter()
            .flat_map(|edges| edges.iter().copied())
    }
}

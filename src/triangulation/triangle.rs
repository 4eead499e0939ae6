//! Triangle and edge handles.
//!
//! Vertices are identified by their index in the point slice handed to the
//! triangulator, never by coordinates. Two points with equal coordinates are
//! still distinct vertices.

/// A triangle represented by indices into a point array.
///
/// The three slots are ordered; edges are generated as `(a, b)`, `(b, c)`,
/// `(c, a)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Triangle {
    /// First vertex index
    pub a: usize,
    /// Second vertex index
    pub b: usize,
    /// Third vertex index
    pub c: usize,
}

impl Triangle {
    /// Creates a new triangle from vertex indices.
    #[inline]
    pub fn new(a: usize, b: usize, c: usize) -> Self {
        Self { a, b, c }
    }

    /// Returns the vertex indices in slot order.
    #[inline]
    pub fn vertices(&self) -> [usize; 3] {
        [self.a, self.b, self.c]
    }

    /// Returns the vertex indices sorted ascending.
    ///
    /// Two triangles over the same vertices compare equal under this key
    /// regardless of slot order.
    #[inline]
    pub fn sorted_vertices(&self) -> [usize; 3] {
        let mut v = self.vertices();
        v.sort_unstable();
        v
    }

    /// Returns the three edges of this triangle.
    #[inline]
    pub fn edges(&self) -> [Edge; 3] {
        [
            Edge::new(self.a, self.b),
            Edge::new(self.b, self.c),
            Edge::new(self.c, self.a),
        ]
    }

    /// Checks if the triangle contains a specific vertex index.
    #[inline]
    pub fn contains_vertex(&self, v: usize) -> bool {
        self.a == v || self.b == v || self.c == v
    }

    /// Checks if the two triangles have at least one vertex in common.
    #[inline]
    pub fn shares_vertex(&self, other: &Triangle) -> bool {
        other.vertices().iter().any(|&v| self.contains_vertex(v))
    }

    /// Checks if the two triangles have an edge in common.
    pub fn shares_edge(&self, other: &Triangle) -> bool {
        self.edges()
            .iter()
            .any(|e| other.edges().iter().any(|o| e.connects(o)))
    }
}

/// An undirected edge between two vertex indices.
///
/// Slot order is kept as constructed so that fan triangles inherit the
/// winding of the triangle the edge came from. Use [`Edge::connects`] for
/// comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Edge {
    pub a: usize,
    pub b: usize,
}

impl Edge {
    #[inline]
    pub fn new(a: usize, b: usize) -> Self {
        Self { a, b }
    }

    /// True if both edges join the same two vertices, in either direction.
    #[inline]
    pub fn connects(&self, other: &Edge) -> bool {
        (self.a == other.a && self.b == other.b) || (self.a == other.b && self.b == other.a)
    }
}

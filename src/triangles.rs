use crate::{
    error::{Buffer, Error},
    shape::Triangle,
    Result,
};

#[derive(Debug, Hash, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct TriangleId(usize);

impl TriangleId {
    pub fn as_usize(&self) -> usize {
        self.0
    }
}

/// Triangle store with a hard capacity.
// Note: For n vertexes, there will be around 2n triangles including the ones
//       touching the super triangle, so space complexity is O(n).
#[derive(Debug, Clone)]
pub struct Triangles {
    triangles: Vec<Triangle>,
    capacity: usize,
}

impl Triangles {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            triangles: Vec::with_capacity(capacity.min(1024)),
            capacity,
        }
    }

    /// insert a new triangle, fails when the store is full
    pub fn insert(&mut self, triangle: Triangle) -> Result<TriangleId> {
        if self.triangles.len() == self.capacity {
            tracing::warn!(capacity = self.capacity, "triangle capacity reached");
            return Err(Error::CapacityExceeded {
                buffer: Buffer::Triangles,
                capacity: self.capacity,
            });
        }

        let id = TriangleId(self.triangles.len());
        self.triangles.push(triangle);
        Ok(id)
    }

    pub fn get(&self, id: TriangleId) -> Option<&Triangle> {
        self.triangles.get(id.0)
    }

    pub fn len(&self) -> usize {
        self.triangles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn iter(&self) -> impl Iterator<Item = (TriangleId, &Triangle)> {
        self.triangles
            .iter()
            .enumerate()
            .map(|(idx, t)| (TriangleId(idx), t))
    }

    /// Split into triangles matching `pred` and the rest, both keep order.
    /// The store keeps its capacity and holds the rest afterwards.
    pub(crate) fn drain_where(&mut self, mut pred: impl FnMut(&Triangle) -> bool) -> Vec<Triangle> {
        let mut matched = vec![];
        self.triangles.retain(|t| {
            if pred(t) {
                matched.push(*t);
                false
            } else {
                true
            }
        });
        matched
    }

    /// remove all triangles matching `pred`, returns how many were removed
    pub(crate) fn remove_where(&mut self, pred: impl FnMut(&Triangle) -> bool) -> usize {
        self.drain_where(pred).len()
    }
}

use std::fmt;

/// Bounded scratch buffers used during generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Buffer {
    Triangles,
    Edges,
}

impl fmt::Display for Buffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Buffer::Triangles => f.write_str("triangle"),
            Buffer::Edges => f.write_str("edge"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A fixed size buffer is full; retry with a larger capacity factor.
    #[error("{buffer} capacity exceeded (capacity {capacity})")]
    CapacityExceeded { buffer: Buffer, capacity: usize },

    #[error("invalid map dimensions {width}x{height}, both must be positive")]
    InvalidDimensions { width: usize, height: usize },

    #[error("spacing must be at least 1")]
    InvalidSpacing,

    #[error("max points must be at least 1")]
    InvalidMaxPoints,

    #[error("border {border} leaves no room to sample points in a {width}x{height} map")]
    BorderTooWide {
        border: usize,
        width: usize,
        height: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = Error::CapacityExceeded {
            buffer: Buffer::Edges,
            capacity: 27,
        };
        assert_eq!(err.to_string(), "edge capacity exceeded (capacity 27)");

        let err = Error::BorderTooWide {
            border: 12,
            width: 10,
            height: 40,
        };
        assert_eq!(
            err.to_string(),
            "border 12 leaves no room to sample points in a 10x40 map"
        );
    }
}

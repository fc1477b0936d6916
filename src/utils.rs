use crate::shape::Point;

#[derive(Debug, PartialEq, Eq)]
pub enum Orientation {
    /// Clock Wise
    ///
    ///  a     b
    ///             c
    ///
    CW,
    /// Counter Clock Wise
    ///             c
    ///  a     b
    CCW,
    /// Collinear
    ///  a     b    c
    Collinear,
}

impl Orientation {
    pub fn is_cw(&self) -> bool {
        matches!(self, Self::CW)
    }

    pub fn is_ccw(&self) -> bool {
        matches!(self, Self::CCW)
    }

    pub fn is_collinear(&self) -> bool {
        matches!(self, Self::Collinear)
    }
}

pub fn orient_2d(a: Point, b: Point, c: Point) -> Orientation {
    let detleft = (a.x - c.x) * (b.y - c.y);
    let detright = (a.y - c.y) * (b.x - c.x);
    let val = detleft - detright;

    if val == 0. {
        Orientation::Collinear
    } else if val > 0. {
        Orientation::CCW
    } else {
        Orientation::CW
    }
}

/// check whether `pd` is strictly inside the circle defined by pa, pb, pc.
/// requirements: pa, pb, pc is counter-clockwise, the determinant's sign
/// flips with the winding. Points on the circle are not inside.
pub fn in_circle(pa: Point, pb: Point, pc: Point, pd: Point) -> bool {
    let adx = pa.x - pd.x;
    let ady = pa.y - pd.y;
    let bdx = pb.x - pd.x;
    let bdy = pb.y - pd.y;
    let cdx = pc.x - pd.x;
    let cdy = pc.y - pd.y;

    let alift = adx * adx + ady * ady;
    let blift = bdx * bdx + bdy * bdy;
    let clift = cdx * cdx + cdy * cdy;

    let det = alift * (bdx * cdy - cdx * bdy) - blift * (adx * cdy - cdx * ady)
        + clift * (adx * bdy - bdx * ady);

    det > 0.
}

/// Snap `value` down to a multiple of `spacing`, floor is correct for
/// negative values too.
pub fn snap(value: f64, spacing: usize) -> f64 {
    let spacing = spacing as f64;
    (value / spacing).floor() * spacing
}

use std::f32::consts::{FRAC_PI_2, PI};

use bytemuck::{Pod, Zeroable};

use crate::coords::{CornerRadii, Rect, Vec2};

use super::ShapeFamily;

/// Upper bound on the subdivisions of one quarter arc when flattening.
const MAX_ARC_STEPS: usize = 256;

/// Circular arc parameters, angles in radians.
///
/// Angle `0` points to +X and grows toward +Y, so a positive `sweep` runs
/// clockwise on screen.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ArcSegment {
    pub center: Vec2,
    pub radius: f32,
    pub start_angle: f32,
    pub sweep: f32,
}

impl ArcSegment {
    #[inline]
    pub fn point_at(&self, angle: f32) -> Vec2 {
        Vec2::new(
            self.center.x + self.radius * angle.cos(),
            self.center.y + self.radius * angle.sin(),
        )
    }
}

/// One edge of a [`ClosedPath`]; each segment starts where the previous one ended.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum PathSegment {
    Line { to: Vec2, stroked: bool },
    Arc { to: Vec2, arc: ArcSegment, stroked: bool },
}

impl PathSegment {
    #[inline]
    pub fn end(&self) -> Vec2 {
        match *self {
            PathSegment::Line { to, .. } | PathSegment::Arc { to, .. } => to,
        }
    }

    #[inline]
    pub fn is_stroked(&self) -> bool {
        match *self {
            PathSegment::Line { stroked, .. } | PathSegment::Arc { stroked, .. } => stroked,
        }
    }
}

/// GPU-ready outline vertex.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct PathVertex {
    pub pos: [f32; 2],
}

impl PathVertex {
    /// Raw bytes of a vertex slice, ready for a vertex buffer upload.
    #[inline]
    pub fn as_bytes(vertices: &[PathVertex]) -> &[u8] {
        bytemuck::cast_slice(vertices)
    }
}

impl From<Vec2> for PathVertex {
    #[inline]
    fn from(v: Vec2) -> Self {
        Self { pos: [v.x, v.y] }
    }
}

/// A single closed figure.
///
/// The last segment always ends at `start`. An empty path (no segments) is
/// what degenerate bounds produce.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ClosedPath {
    start: Vec2,
    segments: Vec<PathSegment>,
    filled: bool,
}

impl ClosedPath {
    #[inline]
    pub fn empty() -> Self {
        Self::default()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    #[inline]
    pub fn start(&self) -> Vec2 {
        self.start
    }

    #[inline]
    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    #[inline]
    pub fn is_filled(&self) -> bool {
        self.filled
    }

    pub fn line_count(&self) -> usize {
        self.segments.iter().filter(|s| matches!(s, PathSegment::Line { .. })).count()
    }

    pub fn arc_count(&self) -> usize {
        self.segments.iter().filter(|s| matches!(s, PathSegment::Arc { .. })).count()
    }

    /// Segment endpoints in traversal order, starting with `start`.
    ///
    /// The closing endpoint (equal to `start`) is not repeated.
    pub fn vertices(&self) -> Vec<Vec2> {
        if self.segments.is_empty() {
            return Vec::new();
        }
        let mut out = Vec::with_capacity(self.segments.len());
        out.push(self.start);
        out.extend(self.segments[..self.segments.len() - 1].iter().map(PathSegment::end));
        out
    }

    /// Number of distinct corners of the outline.
    ///
    /// Consecutive coincident vertices (zero-length chamfers or zero-radius
    /// arcs) count once.
    pub fn vertex_count(&self) -> usize {
        let v = self.vertices();
        if v.is_empty() {
            return 0;
        }
        let same = |a: Vec2, b: Vec2| a.distance(b) <= 1e-4;
        let mut count = v.windows(2).filter(|w| !same(w[0], w[1])).count() + 1;
        if v.len() > 1 && same(v[0], v[v.len() - 1]) {
            count -= 1;
        }
        count
    }

    /// Polyline approximation with at most `tolerance` deviation from arcs.
    ///
    /// The closing point is not repeated.
    pub fn flatten(&self, tolerance: f32) -> Vec<PathVertex> {
        if self.segments.is_empty() {
            return Vec::new();
        }
        let tolerance = tolerance.max(1e-3);
        let mut out: Vec<PathVertex> = Vec::with_capacity(self.segments.len() * 4);
        out.push(self.start.into());

        for seg in &self.segments {
            match *seg {
                PathSegment::Line { to, .. } => out.push(to.into()),
                PathSegment::Arc { to, arc, .. } => {
                    if arc.radius > tolerance {
                        let step = 2.0 * (1.0 - tolerance / arc.radius).acos();
                        let n = ((arc.sweep.abs() / step).ceil() as usize).clamp(1, MAX_ARC_STEPS);
                        for i in 1..n {
                            let a = arc.start_angle + arc.sweep * (i as f32 / n as f32);
                            out.push(arc.point_at(a).into());
                        }
                    }
                    out.push(to.into());
                }
            }
        }

        out.pop();
        out
    }

    /// Even-odd hit test against the flattened outline.
    pub fn contains(&self, p: Vec2) -> bool {
        let poly = self.flatten(0.25);
        if poly.len() < 3 {
            return false;
        }
        let mut inside = false;
        let mut j = poly.len() - 1;
        for i in 0..poly.len() {
            let [xi, yi] = poly[i].pos;
            let [xj, yj] = poly[j].pos;
            if (yi > p.y) != (yj > p.y) && p.x < (xj - xi) * (p.y - yi) / (yj - yi) + xi {
                inside = !inside;
            }
            j = i;
        }
        inside
    }
}

struct Builder {
    path: ClosedPath,
    stroked: bool,
}

impl Builder {
    fn new(start: Vec2, filled: bool, stroked: bool) -> Self {
        Self {
            path: ClosedPath { start, segments: Vec::with_capacity(8), filled },
            stroked,
        }
    }

    fn line_to(&mut self, to: Vec2) {
        self.path.segments.push(PathSegment::Line { to, stroked: self.stroked });
    }

    /// Quarter turn clockwise around `center`, starting at `start_angle`.
    fn quarter_arc(&mut self, center: Vec2, radius: f32, start_angle: f32, to: Vec2) {
        let arc = ArcSegment { center, radius, start_angle, sweep: FRAC_PI_2 };
        self.path.segments.push(PathSegment::Arc { to, arc, stroked: self.stroked });
    }
}

/// Builds the outline of `bounds` with per-corner `radii`.
///
/// `radii` must already be clamped to the half-minor dimension of `bounds`
/// (see [`from_style`](super::from_style) / [`clamp_override`](super::clamp_override)).
/// The figure starts just after the top-left corner and runs clockwise.
///
/// - [`ShapeFamily::Rounded`]: four edges and four quarter arcs.
/// - [`ShapeFamily::Cut`]: four edges and four chamfers whose legs equal the
///   corner radius.
///
/// `is_filled` / `is_stroked` only tag the output; vertex positions are the
/// same either way. Empty bounds produce an empty path.
pub fn build_path(
    family: ShapeFamily,
    bounds: Rect,
    radii: CornerRadii,
    is_filled: bool,
    is_stroked: bool,
) -> ClosedPath {
    if bounds.is_empty() || !bounds.is_finite() {
        return ClosedPath::empty();
    }

    let Rect { origin: Vec2 { x, y }, size: Vec2 { x: w, y: h } } = bounds;
    let (right, bottom) = (x + w, y + h);
    let CornerRadii { top_left: tl, top_right: tr, bottom_right: br, bottom_left: bl } = radii;

    let mut b = Builder::new(Vec2::new(x + tl, y), is_filled, is_stroked);

    match family {
        ShapeFamily::Rounded => {
            b.line_to(Vec2::new(right - tr, y));
            b.quarter_arc(Vec2::new(right - tr, y + tr), tr, -FRAC_PI_2, Vec2::new(right, y + tr));
            b.line_to(Vec2::new(right, bottom - br));
            b.quarter_arc(Vec2::new(right - br, bottom - br), br, 0.0, Vec2::new(right - br, bottom));
            b.line_to(Vec2::new(x + bl, bottom));
            b.quarter_arc(Vec2::new(x + bl, bottom - bl), bl, FRAC_PI_2, Vec2::new(x, bottom - bl));
            b.line_to(Vec2::new(x, y + tl));
            b.quarter_arc(Vec2::new(x + tl, y + tl), tl, PI, Vec2::new(x + tl, y));
        }
        ShapeFamily::Cut => {
            b.line_to(Vec2::new(right - tr, y));
            b.line_to(Vec2::new(right, y + tr));
            b.line_to(Vec2::new(right, bottom - br));
            b.line_to(Vec2::new(right - br, bottom));
            b.line_to(Vec2::new(x + bl, bottom));
            b.line_to(Vec2::new(x, bottom - bl));
            b.line_to(Vec2::new(x, y + tl));
            b.line_to(Vec2::new(x + tl, y));
        }
    }

    b.path
}

//! # Winding Normalizer
//!
//! Repairs self-intersections and enforces the canonical winding
//! convention (outer contours CCW, holes CW) on a profile path.
//!
//! ## Algorithm
//!
//! A direct orientation-fix pass cannot resolve self-intersecting or
//! overlapping input, so the work is routed through the polygon clipper:
//!
//! 1. Snap all contours onto an integer lattice and drop duplicate points
//!    and degenerate contours
//! 2. Expand the bounding box of the input by a fixed margin on all four
//!    sides, guaranteeing a strict superset of the geometry
//! 3. Intersect the contours against that oversized rectangle; the
//!    clipper's canonicalization resolves intersections and overlap for
//!    free, and its output orientation is forced to the convention
//!
//! The lattice scale is applied symmetrically on the way in and out.

use crate::path::Path;
use config::constants::{CLIP_BOUNDS_MARGIN, CLIP_COORDINATE_SCALE};
use geo::orient::Direction;
use geo::{
    BooleanOps, BoundingRect, Contains, Coord, LineString, MultiPolygon, Orient, Point, Polygon,
    Rect,
};
use glam::DVec2;


/// Normalizes contour winding, resolving self-intersections and overlaps.
///
/// Returns a path whose outer contours wind CCW and hole contours CW.
/// An empty input produces an empty path; this is not an error.
pub fn normalize_winding(path: &Path) -> Path {
    let polygons = to_clip_polygons(path);
    if polygons.0.is_empty() {
        return Path::new();
    }

    let Some(bounds) = polygons.bounding_rect() else {
        return Path::new();
    };
    let margin = CLIP_BOUNDS_MARGIN as f64;
    let clip_rect = Rect::new(
        Coord {
            x: bounds.min().x - margin,
            y: bounds.min().y - margin,
        },
        Coord {
            x: bounds.max().x + margin,
            y: bounds.max().y + margin,
        },
    );
    let clip = MultiPolygon::new(vec![clip_rect.to_polygon()]);

    let wound = polygons.intersection(&clip).orient(Direction::Default);
    from_clip_polygons(&wound)
}

/// Converts a path onto the clip lattice as polygons-with-holes.
fn to_clip_polygons(path: &Path) -> MultiPolygon<f64> {
    let mut rings: Vec<Vec<DVec2>> = Vec::new();
    for contour in path.contours() {
        let ring = clean_contour(&contour);
        if ring.len() >= 3 {
            rings.push(ring);
        }
    }

    let polygons = group_rings(rings)
        .into_iter()
        .map(|(outer, holes)| {
            Polygon::new(
                ring_to_line_string(&outer),
                holes.iter().map(|hole| ring_to_line_string(hole)).collect(),
            )
        })
        .collect();
    // the clipper wants a consistently wound subject even before clipping
    MultiPolygon::new(polygons).orient(Direction::Default)
}

/// Snaps a contour onto the lattice, dropping consecutive duplicates.
fn clean_contour(contour: &[DVec2]) -> Vec<DVec2> {
    let mut ring: Vec<DVec2> = Vec::with_capacity(contour.len());
    for point in contour {
        let snapped = DVec2::new(
            (point.x * CLIP_COORDINATE_SCALE).round(),
            (point.y * CLIP_COORDINATE_SCALE).round(),
        );
        if ring.last() != Some(&snapped) {
            ring.push(snapped);
        }
    }
    while ring.len() > 1 && ring.first() == ring.last() {
        ring.pop();
    }
    ring
}

/// Scales clipper output back out of the lattice into a path.
fn from_clip_polygons(polygons: &MultiPolygon<f64>) -> Path {
    let mut contours: Vec<Vec<DVec2>> = Vec::new();
    for polygon in &polygons.0 {
        contours.push(line_string_to_contour(polygon.exterior()));
        for interior in polygon.interiors() {
            contours.push(line_string_to_contour(interior));
        }
    }
    contours.retain(|contour| contour.len() >= 3);
    Path::from_contours(&contours)
}

fn line_string_to_contour(ring: &LineString<f64>) -> Vec<DVec2> {
    let mut contour: Vec<DVec2> = ring
        .coords()
        .map(|coord| {
            DVec2::new(
                coord.x / CLIP_COORDINATE_SCALE,
                coord.y / CLIP_COORDINATE_SCALE,
            )
        })
        .collect();
    while contour.len() > 1 && contour.first() == contour.last() {
        contour.pop();
    }
    contour
}

pub(crate) fn ring_to_line_string(ring: &[DVec2]) -> LineString<f64> {
    LineString::new(
        ring.iter()
            .map(|point| Coord {
                x: point.x,
                y: point.y,
            })
            .collect(),
    )
}

/// Groups loose rings into (outer, holes) regions by even-odd nesting.
///
/// A ring enclosed by an odd number of other rings is a hole of its
/// innermost enclosing ring, regardless of how it is wound. This matches
/// the even-odd fill convention of the upstream path representation.
/// Zero-area rings are not rejected here; self-intersecting rings can
/// have zero net area and still enclose material, and truly collinear
/// rings fall out of the clipper and tessellator on their own.
pub(crate) fn group_rings(rings: Vec<Vec<DVec2>>) -> Vec<(Vec<DVec2>, Vec<Vec<DVec2>>)> {
    let mut kept: Vec<(Vec<DVec2>, Polygon<f64>)> = Vec::new();
    for ring in rings {
        if ring.len() < 3 {
            continue;
        }
        let polygon = Polygon::new(ring_to_line_string(&ring), Vec::new());
        kept.push((ring, polygon));
    }

    let enclosers: Vec<Vec<usize>> = (0..kept.len())
        .map(|i| {
            let probe = Point::new(kept[i].0[0].x, kept[i].0[0].y);
            (0..kept.len())
                .filter(|&j| j != i && kept[j].1.contains(&probe))
                .collect()
        })
        .collect();

    let mut outers: Vec<usize> = Vec::new();
    let mut hole_lists: Vec<Vec<usize>> = vec![Vec::new(); kept.len()];
    for i in 0..kept.len() {
        if enclosers[i].len() % 2 == 0 {
            outers.push(i);
            continue;
        }
        // the innermost encloser is the one enclosed most often itself
        let parent = enclosers[i]
            .iter()
            .copied()
            .max_by_key(|&j| enclosers[j].len());
        match parent {
            Some(parent) => hole_lists[parent].push(i),
            None => outers.push(i),
        }
    }

    outers
        .into_iter()
        .map(|i| {
            let holes = hole_lists[i]
                .iter()
                .map(|&hole| kept[hole].0.clone())
                .collect();
            (kept[i].0.clone(), holes)
        })
        .collect()
}

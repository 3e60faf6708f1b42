//! # Vector Paths
//!
//! Command-stream representation of 2D profiles: one or more closed
//! contours described by `MoveTo`/`LineTo`/`Stop` commands. Multiple
//! `MoveTo` occurrences start new contours (outer boundaries and holes).

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// A single path command.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PathCommand {
    /// Start a new contour at the given point
    MoveTo(DVec2),
    /// Extend the current contour with a straight segment
    LineTo(DVec2),
    /// End the command stream
    Stop,
}

/// An ordered, restartable sequence of path commands.
///
/// Paths are plain data: building one never fails, and consumers iterate
/// the command slice as many times as they need.
///
/// # Example
///
/// ```rust
/// use pathsolid_mesh::Path;
/// use glam::DVec2;
///
/// let mut path = Path::new();
/// path.move_to(DVec2::new(0.0, 0.0));
/// path.line_to(DVec2::new(1.0, 0.0));
/// path.line_to(DVec2::new(1.0, 1.0));
/// path.line_to(DVec2::new(0.0, 0.0));
/// assert_eq!(path.contours().len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Path {
    commands: Vec<PathCommand>,
}

impl Path {
    /// Creates an empty path.
    pub fn new() -> Self {
        Self {
            commands: Vec::new(),
        }
    }

    /// Starts a new contour at `point`.
    pub fn move_to(&mut self, point: DVec2) {
        self.commands.push(PathCommand::MoveTo(point));
    }

    /// Extends the current contour to `point`.
    pub fn line_to(&mut self, point: DVec2) {
        self.commands.push(PathCommand::LineTo(point));
    }

    /// Terminates the command stream.
    pub fn stop(&mut self) {
        self.commands.push(PathCommand::Stop);
    }

    /// Returns the command sequence.
    #[inline]
    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    /// Returns true if the path holds no commands.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Builds a path from closed contours.
    ///
    /// Each contour becomes `MoveTo p0, LineTo p1 .. LineTo p(n-1),
    /// LineTo p0`: the closing segment is emitted explicitly so that
    /// segment-walking consumers (revolve strips) cover every edge.
    pub fn from_contours(contours: &[Vec<DVec2>]) -> Path {
        let mut path = Path::new();
        for contour in contours {
            let mut points = contour.iter();
            let Some(&first) = points.next() else {
                continue;
            };
            path.move_to(first);
            for &point in points {
                path.line_to(point);
            }
            path.line_to(first);
        }
        path
    }

    /// Splits the path into contours, one point list per `MoveTo` run.
    ///
    /// A leading `LineTo` opens a contour implicitly; an explicit closing
    /// point equal to the contour start is dropped; `Stop` ends the scan.
    pub fn contours(&self) -> Vec<Vec<DVec2>> {
        let mut contours: Vec<Vec<DVec2>> = Vec::new();
        let mut current: Vec<DVec2> = Vec::new();

        for command in &self.commands {
            match *command {
                PathCommand::Stop => break,
                PathCommand::MoveTo(point) => {
                    if !current.is_empty() {
                        contours.push(std::mem::take(&mut current));
                    }
                    current.push(point);
                }
                PathCommand::LineTo(point) => {
                    current.push(point);
                }
            }
        }
        if !current.is_empty() {
            contours.push(current);
        }

        for contour in &mut contours {
            while contour.len() > 1 && contour.first() == contour.last() {
                contour.pop();
            }
        }
        contours
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> Vec<DVec2> {
        vec![
            DVec2::new(0.0, 0.0),
            DVec2::new(1.0, 0.0),
            DVec2::new(1.0, 1.0),
            DVec2::new(0.0, 1.0),
        ]
    }

    #[test]
    fn test_from_contours_emits_closing_segment() {
        let path = Path::from_contours(&[square()]);
        // MoveTo + 3 LineTo + closing LineTo
        assert_eq!(path.commands().len(), 5);
        assert_eq!(
            path.commands().last(),
            Some(&PathCommand::LineTo(DVec2::new(0.0, 0.0)))
        );
    }

    #[test]
    fn test_contours_round_trip() {
        let path = Path::from_contours(&[square()]);
        assert_eq!(path.contours(), vec![square()]);
    }

    #[test]
    fn test_contours_split_on_move_to() {
        let hole = vec![
            DVec2::new(0.25, 0.25),
            DVec2::new(0.75, 0.25),
            DVec2::new(0.75, 0.75),
            DVec2::new(0.25, 0.75),
        ];
        let path = Path::from_contours(&[square(), hole.clone()]);
        let contours = path.contours();
        assert_eq!(contours.len(), 2);
        assert_eq!(contours[0], square());
        assert_eq!(contours[1], hole);
    }

    #[test]
    fn test_contours_tolerate_leading_line_to() {
        let mut path = Path::new();
        path.line_to(DVec2::new(0.0, 0.0));
        path.line_to(DVec2::new(1.0, 0.0));
        path.line_to(DVec2::new(0.0, 1.0));
        let contours = path.contours();
        assert_eq!(contours.len(), 1);
        assert_eq!(contours[0].len(), 3);
    }

    #[test]
    fn test_contours_stop_ends_scan() {
        let mut path = Path::new();
        path.move_to(DVec2::new(0.0, 0.0));
        path.line_to(DVec2::new(1.0, 0.0));
        path.stop();
        path.line_to(DVec2::new(9.0, 9.0));
        let contours = path.contours();
        assert_eq!(contours.len(), 1);
        assert_eq!(contours[0].len(), 2);
    }

    #[test]
    fn test_empty_path() {
        let path = Path::new();
        assert!(path.is_empty());
        assert!(path.contours().is_empty());
    }
}

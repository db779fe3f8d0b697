use crate::error::Error;
use crate::point::Point;
use crate::triangle::Triangle;
use log::debug;
use std::collections::HashSet;
use voronator::delaunator;

/// Delaunay triangulation of `points`, with index triples resolved back to the sampled points.
pub fn triangulate(points: &[Point]) -> Result<Vec<Triangle>, Error> {
    let invalid = || Error::InvalidPointSet {
        points: points.len(),
    };

    // voronator panics on fewer than three distinct sites
    if points.iter().collect::<HashSet<_>>().len() < 3 {
        return Err(invalid());
    }

    let coords = points
        .iter()
        .map(delaunator::Point::from)
        .collect::<Vec<_>>();

    let triangulation = delaunator::triangulate(&coords).ok_or_else(invalid)?;

    let triangles = triangulation
        .triangles
        .chunks_exact(3)
        .map(|t| Triangle::new(points[t[0]], points[t[1]], points[t[2]]))
        .collect::<Vec<_>>();

    debug!("{} points, {} triangles", points.len(), triangles.len());

    if triangles.is_empty() {
        return Err(invalid());
    }

    Ok(triangles)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn square_gives_two_triangles() {
        let points = vec![
            Point::new(0, 0),
            Point::new(3, 0),
            Point::new(3, 3),
            Point::new(0, 3),
        ];

        let triangles = triangulate(&points).unwrap();
        assert_eq!(triangles.len(), 2);

        let area = triangles.iter().map(|t| t.double_area().abs()).sum::<i64>();
        assert_eq!(area, 18);

        for t in &triangles {
            assert!(t.vertices.iter().all(|v| points.contains(v)));
        }
    }

    #[test]
    fn too_few_points() {
        let points = vec![Point::new(0, 0), Point::new(3, 0)];

        assert_eq!(
            triangulate(&points),
            Err(Error::InvalidPointSet { points: 2 })
        );
    }

    #[test]
    fn repeated_point() {
        let points = vec![Point::new(0, 0); 3];

        assert_eq!(
            triangulate(&points),
            Err(Error::InvalidPointSet { points: 3 })
        );

        let mut points = vec![Point::new(4, 1); 10];
        points.push(Point::new(0, 2));

        assert_eq!(
            triangulate(&points),
            Err(Error::InvalidPointSet { points: 11 })
        );
    }

    #[test]
    fn duplicates_next_to_a_valid_triangle() {
        let points = vec![
            Point::new(0, 0),
            Point::new(0, 0),
            Point::new(5, 0),
            Point::new(0, 5),
            Point::new(5, 0),
        ];

        let triangles = triangulate(&points).unwrap();
        assert_eq!(triangles.len(), 1);
        assert_eq!(triangles[0].double_area().abs(), 25);
    }

    #[test]
    fn collinear_points() {
        let points = (0..5).map(|i| Point::new(i, 2 * i)).collect::<Vec<_>>();

        assert_eq!(
            triangulate(&points),
            Err(Error::InvalidPointSet { points: 5 })
        );
    }
}

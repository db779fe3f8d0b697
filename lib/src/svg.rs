use crate::{Facet, Point};
use svg::node::element::{Circle, Polygon};
use svg::Document;

fn draw_facet(document: Document, facet: &Facet) -> Document {
    let points = facet
        .triangle
        .vertices
        .iter()
        .map(|p| format!("{},{}", p.x, p.y))
        .collect::<Vec<_>>()
        .join(" ");

    let [r, g, b] = facet.color.0;
    let fill = format!("rgb({},{},{})", r, g, b);

    let polygon = Polygon::new()
        .set("fill", fill.clone())
        .set("stroke", fill)
        .set("stroke-width", "0.5")
        .set("points", points);

    document.add(polygon)
}

fn draw_points(document: Document, points: &[Point], color: &str) -> Document {
    let mut document = document;

    for point in points {
        document = document.add(
            Circle::new()
                .set("fill", color)
                .set("cx", point.x)
                .set("cy", point.y)
                .set("r", 1.0),
        );
    }

    document
}

/// SVG with one polygon per facet in drawing order, and the given points as dots on top.
pub fn document(
    facets: &[Facet],
    points: &[Point],
    point_color: &str,
    width: u32,
    height: u32,
) -> Document {
    let mut document = Document::new().set("viewBox", (0, 0, width, height));

    for facet in facets {
        document = draw_facet(document, facet);
    }

    draw_points(document, points, point_color)
}

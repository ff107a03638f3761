use super::layout::NODE_RADIUS;

/// Length of the arrowhead, and the gap the edge segment leaves for it in
/// front of the target circle.
pub const ARROW_MARGIN: f64 = 10.0;

const ARROW_HALF_WIDTH: f64 = ARROW_MARGIN * 0.5;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
	pub x: f64,
	pub y: f64,
}

impl Point {
	pub fn new(x: f64, y: f64) -> Self {
		Self { x, y }
	}
}

#[derive(Clone, Debug, PartialEq)]
pub struct EdgeGeometry {
	pub start: Point,
	pub end: Point,
	pub label_anchor: Point,
	pub arrow: [Point; 3],
}

/// Clip an edge to the node boundaries and place its arrowhead and label.
/// Returns `None` when the endpoints coincide, so degenerate input never
/// turns into NaN coordinates downstream.
pub fn edge_geometry(source: Point, target: Point) -> Option<EdgeGeometry> {
	let dx = target.x - source.x;
	let dy = target.y - source.y;
	let distance = dx.hypot(dy);
	if distance < 0.001 {
		return None;
	}
	let (ux, uy) = (dx / distance, dy / distance);

	let start = Point::new(source.x + ux * NODE_RADIUS, source.y + uy * NODE_RADIUS);
	let end = Point::new(
		target.x - ux * (NODE_RADIUS + ARROW_MARGIN),
		target.y - uy * (NODE_RADIUS + ARROW_MARGIN),
	);
	let label_anchor = Point::new((start.x + end.x) / 2.0, (start.y + end.y) / 2.0);

	// Tip touches the target circle, barbs flank the end of the segment.
	let tip = Point::new(target.x - ux * NODE_RADIUS, target.y - uy * NODE_RADIUS);
	let (px, py) = (-uy * ARROW_HALF_WIDTH, ux * ARROW_HALF_WIDTH);
	let arrow = [
		tip,
		Point::new(end.x + px, end.y + py),
		Point::new(end.x - px, end.y - py),
	];

	Some(EdgeGeometry {
		start,
		end,
		label_anchor,
		arrow,
	})
}

#[cfg(test)]
mod tests {
	use super::*;

	const EPS: f64 = 1e-9;

	fn assert_close(actual: f64, expected: f64) {
		assert!(
			(actual - expected).abs() < EPS,
			"expected {expected}, got {actual}"
		);
	}

	#[test]
	fn coincident_endpoints_are_rejected() {
		let p = Point::new(120.0, 80.0);
		assert_eq!(edge_geometry(p, p), None);
		let q = Point::new(120.0 + 0.0005, 80.0);
		assert_eq!(edge_geometry(p, q), None);
	}

	#[test]
	fn horizontal_edge_clips_to_both_node_boundaries() {
		let geom = edge_geometry(Point::new(0.0, 0.0), Point::new(200.0, 0.0)).unwrap();
		assert_close(geom.start.x, NODE_RADIUS);
		assert_close(geom.start.y, 0.0);
		assert_close(geom.end.x, 200.0 - NODE_RADIUS - ARROW_MARGIN);
		assert_close(geom.end.y, 0.0);
	}

	#[test]
	fn arrow_tip_touches_the_target_circle() {
		let geom = edge_geometry(Point::new(0.0, 0.0), Point::new(0.0, 300.0)).unwrap();
		assert_close(geom.arrow[0].x, 0.0);
		assert_close(geom.arrow[0].y, 300.0 - NODE_RADIUS);
		// Barbs sit level with the segment end, mirrored across the shaft.
		assert_close(geom.arrow[1].y, geom.end.y);
		assert_close(geom.arrow[2].y, geom.end.y);
		assert_close(geom.arrow[1].x, -geom.arrow[2].x);
	}

	#[test]
	fn label_anchor_is_the_segment_midpoint() {
		let geom = edge_geometry(Point::new(0.0, 0.0), Point::new(100.0, 100.0)).unwrap();
		assert_close(geom.label_anchor.x, (geom.start.x + geom.end.x) / 2.0);
		assert_close(geom.label_anchor.y, (geom.start.y + geom.end.y) / 2.0);
	}

	#[test]
	fn diagonal_edge_keeps_the_unit_direction() {
		// Direction (60, 80) normalizes to (0.6, 0.8).
		let geom = edge_geometry(Point::new(10.0, 20.0), Point::new(70.0, 100.0)).unwrap();
		assert_close(geom.start.x, 10.0 + 0.6 * NODE_RADIUS);
		assert_close(geom.start.y, 20.0 + 0.8 * NODE_RADIUS);
		assert_close(geom.end.x, 70.0 - 0.6 * (NODE_RADIUS + ARROW_MARGIN));
		assert_close(geom.end.y, 100.0 - 0.8 * (NODE_RADIUS + ARROW_MARGIN));
	}
}

pub const MIN_ZOOM: f64 = 0.5;
pub const MAX_ZOOM: f64 = 2.0;
pub const ZOOM_STEP: f64 = 0.2;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum DragPhase {
	#[default]
	Idle,
	/// Pointer offset captured at drag start so pan tracks the cursor 1:1.
	Dragging { anchor_x: f64, anchor_y: f64 },
}

/// Zoom, pan and drag state for one graph canvas. Owned by the component,
/// discarded with it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewState {
	pub zoom: f64,
	pub pan_x: f64,
	pub pan_y: f64,
	pub drag: DragPhase,
}

impl Default for ViewState {
	fn default() -> Self {
		Self {
			zoom: 1.0,
			pan_x: 0.0,
			pan_y: 0.0,
			drag: DragPhase::Idle,
		}
	}
}

impl ViewState {
	pub fn zoom_in(&mut self) {
		self.zoom = (self.zoom + ZOOM_STEP).min(MAX_ZOOM);
	}

	pub fn zoom_out(&mut self) {
		self.zoom = (self.zoom - ZOOM_STEP).max(MIN_ZOOM);
	}

	/// Restore zoom and pan in one step. Resetting either alone would leave
	/// the view half-recovered.
	pub fn reset_view(&mut self) {
		self.zoom = 1.0;
		self.pan_x = 0.0;
		self.pan_y = 0.0;
	}

	pub fn begin_drag(&mut self, pointer_x: f64, pointer_y: f64) {
		self.drag = DragPhase::Dragging {
			anchor_x: pointer_x - self.pan_x,
			anchor_y: pointer_y - self.pan_y,
		};
	}

	/// Follow the pointer while a drag is active. A move without a preceding
	/// down is a no-op.
	pub fn drag_to(&mut self, pointer_x: f64, pointer_y: f64) {
		if let DragPhase::Dragging { anchor_x, anchor_y } = self.drag {
			self.pan_x = pointer_x - anchor_x;
			self.pan_y = pointer_y - anchor_y;
		}
	}

	/// Pointer-up and pointer-leave both land here, so a drag can never stay
	/// stuck active after the cursor is gone.
	pub fn end_drag(&mut self) {
		self.drag = DragPhase::Idle;
	}

	pub fn is_dragging(&self) -> bool {
		matches!(self.drag, DragPhase::Dragging { .. })
	}

	/// Pan plus center-anchored zoom as one SVG transform. Translation is
	/// adjusted by `c * (1 - k)` so scaling pivots on the canvas center
	/// rather than the SVG origin.
	pub fn svg_transform(&self, width: f64, height: f64) -> String {
		let tx = self.pan_x + (width / 2.0) * (1.0 - self.zoom);
		let ty = self.pan_y + (height / 2.0) * (1.0 - self.zoom);
		format!("translate({tx} {ty}) scale({})", self.zoom)
	}
}

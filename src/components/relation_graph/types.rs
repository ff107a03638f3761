/// Neutral fallback color for asset kinds outside the known palette.
pub const NEUTRAL_COLOR: &str = "#64748b";

#[derive(Clone, Debug, PartialEq)]
pub struct GraphNode {
	pub id: String,
	pub name: String,
	pub kind: AssetKind,
	pub risk_score: Option<f32>,
	pub finding_count: Option<u32>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct GraphEdge {
	pub id: String,
	pub source: String,
	pub target: String,
	pub kind: RelationKind,
	pub impact_weight: u8,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct RelationshipGraph {
	pub nodes: Vec<GraphNode>,
	pub edges: Vec<GraphEdge>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AssetKind {
	Repository,
	CrownJewel,
	Identity,
	Service,
	DataStore,
	Unknown(String),
}

impl AssetKind {
	/// Parse a wire tag. Unrecognized tags are carried as-is rather than
	/// rejected, so new inventory kinds never break the view.
	pub fn from_tag(tag: &str) -> Self {
		match tag {
			"repository" => Self::Repository,
			"crown_jewel" => Self::CrownJewel,
			"identity" => Self::Identity,
			"service" => Self::Service,
			"data_store" => Self::DataStore,
			_ => Self::Unknown(tag.to_string()),
		}
	}

	pub fn color(&self) -> &'static str {
		match self {
			Self::Repository => "#3b82f6",
			Self::CrownJewel => "#eab308",
			Self::Identity => "#8b5cf6",
			Self::Service => "#10b981",
			Self::DataStore => "#06b6d4",
			Self::Unknown(_) => NEUTRAL_COLOR,
		}
	}

	pub fn label(&self) -> &str {
		match self {
			Self::Repository => "Repository",
			Self::CrownJewel => "Crown jewel",
			Self::Identity => "Identity",
			Self::Service => "Service",
			Self::DataStore => "Data store",
			Self::Unknown(tag) => tag,
		}
	}
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RelationKind {
	DependsOn,
	Contains,
	CanAccess,
	DeploysTo,
	Protects,
	Unknown(String),
}

impl RelationKind {
	pub fn from_tag(tag: &str) -> Self {
		match tag {
			"depends_on" => Self::DependsOn,
			"contains" => Self::Contains,
			"can_access" => Self::CanAccess,
			"deploys_to" => Self::DeploysTo,
			"protects" => Self::Protects,
			_ => Self::Unknown(tag.to_string()),
		}
	}

	/// Label drawn along the edge, read in source to target direction.
	pub fn forward_label(&self) -> &str {
		match self {
			Self::DependsOn => "depends on",
			Self::Contains => "contains",
			Self::CanAccess => "can access",
			Self::DeploysTo => "deploys to",
			Self::Protects => "protects",
			Self::Unknown(tag) => tag,
		}
	}

	/// The same relation described from the target's side.
	pub fn reverse_label(&self) -> &str {
		match self {
			Self::DependsOn => "required by",
			Self::Contains => "part of",
			Self::CanAccess => "accessed by",
			Self::DeploysTo => "deployed from",
			Self::Protects => "protected by",
			Self::Unknown(tag) => tag,
		}
	}
}

/// Impact-weight color band. Weights of 8 and above are high, 5 to 7 are
/// medium, everything else stays neutral.
pub fn impact_color(weight: u8) -> &'static str {
	if weight >= 8 {
		"#ef4444"
	} else if weight >= 5 {
		"#f59e0b"
	} else {
		"#94a3b8"
	}
}

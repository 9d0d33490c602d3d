//! Item kinds, player sizes, alliance-city levels and placement blueprints.

use serde::{Deserialize, Serialize};

use crate::error::PlacementError;
use crate::grid::{Cell, Footprint, GridSpace};

/// Building subtypes known to the chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BuildingKind {
    AllianceCityLv3,
    AllianceCityLv4,
    RssTile,
    Warehouse,
    DeadSpot,
}

impl BuildingKind {
    pub const ALL: [BuildingKind; 5] = [
        BuildingKind::AllianceCityLv3,
        BuildingKind::AllianceCityLv4,
        BuildingKind::RssTile,
        BuildingKind::Warehouse,
        BuildingKind::DeadSpot,
    ];

    /// Human-readable name shown on the chart.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            BuildingKind::AllianceCityLv3 => "Alliance City Lv3",
            BuildingKind::AllianceCityLv4 => "Alliance City Lv4",
            BuildingKind::RssTile => "RSS Tile",
            BuildingKind::Warehouse => "Warehouse",
            BuildingKind::DeadSpot => "Dead Spot",
        }
    }

    /// Stable kebab-case identifier (`"rss-tile"`, `"alliance-city-lv4"`, ...).
    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            BuildingKind::AllianceCityLv3 => "alliance-city-lv3",
            BuildingKind::AllianceCityLv4 => "alliance-city-lv4",
            BuildingKind::RssTile => "rss-tile",
            BuildingKind::Warehouse => "warehouse",
            BuildingKind::DeadSpot => "dead-spot",
        }
    }

    #[must_use]
    pub const fn is_alliance_city(self) -> bool {
        matches!(
            self,
            BuildingKind::AllianceCityLv3 | BuildingKind::AllianceCityLv4
        )
    }

    /// Subtypes capped at a single placed instance.
    #[must_use]
    pub const fn is_singleton(self) -> bool {
        matches!(self, BuildingKind::RssTile | BuildingKind::Warehouse)
    }

    /// Default `(width, height)` when the caller does not pick a size.
    #[must_use]
    pub const fn default_size(self) -> (u32, u32) {
        match self {
            BuildingKind::AllianceCityLv3 => (2, 2),
            BuildingKind::AllianceCityLv4 => (4, 4),
            BuildingKind::RssTile | BuildingKind::Warehouse => (2, 2),
            BuildingKind::DeadSpot => (1, 1),
        }
    }

    /// Side length of the influence ring drawn around the building, if any.
    #[must_use]
    pub const fn ring_size(self) -> Option<u32> {
        match self {
            BuildingKind::AllianceCityLv3 => Some(16),
            BuildingKind::AllianceCityLv4 => Some(20),
            _ => None,
        }
    }
}

impl std::fmt::Display for BuildingKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

/// What a placed item is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    Player,
    Building(BuildingKind),
}

impl ItemKind {
    #[must_use]
    pub const fn is_player(self) -> bool {
        matches!(self, ItemKind::Player)
    }

    /// The building subtype, or `None` for players.
    #[must_use]
    pub const fn building(self) -> Option<BuildingKind> {
        match self {
            ItemKind::Player => None,
            ItemKind::Building(kind) => Some(kind),
        }
    }
}

/// A player's keep size.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerSize {
    #[default]
    #[serde(rename = "2x2")]
    Small,
    #[serde(rename = "3x3")]
    Large,
}

impl PlayerSize {
    #[must_use]
    pub const fn side(self) -> u32 {
        match self {
            PlayerSize::Small => 2,
            PlayerSize::Large => 3,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            PlayerSize::Small => "2x2",
            PlayerSize::Large => "3x3",
        }
    }

    /// Interprets a free-form "keep size" cell from an imported roster.
    ///
    /// Anything mentioning a 3 is a 3x3 keep, everything else (including an
    /// empty cell) is 2x2.
    #[must_use]
    pub fn from_keep_size(text: &str) -> Self {
        if text.contains('3') {
            PlayerSize::Large
        } else {
            PlayerSize::Small
        }
    }

    /// The player size matching a square footprint side, if any.
    #[must_use]
    pub const fn from_side(side: u32) -> Option<Self> {
        match side {
            2 => Some(PlayerSize::Small),
            3 => Some(PlayerSize::Large),
            _ => None,
        }
    }
}

impl std::fmt::Display for PlayerSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Alliance-city levels offered by the configuration selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AllianceCityLevel {
    Lv3,
    Lv4,
}

impl AllianceCityLevel {
    #[must_use]
    pub const fn building_kind(self) -> BuildingKind {
        match self {
            AllianceCityLevel::Lv3 => BuildingKind::AllianceCityLv3,
            AllianceCityLevel::Lv4 => BuildingKind::AllianceCityLv4,
        }
    }

    /// The city's footprint centred on `grid`.
    #[must_use]
    pub const fn footprint_in(self, grid: &GridSpace) -> Footprint {
        let (width, height) = self.building_kind().default_size();
        let row = grid.side().saturating_sub(height) / 2;
        let col = grid.side().saturating_sub(width) / 2;
        Footprint::at(row as i32, col as i32, width, height)
    }

    /// Footprint on the standard 30x30 grid: `(14, 14)` 2x2 for level 3,
    /// `(13, 13)` 4x4 for level 4.
    #[must_use]
    pub const fn footprint(self) -> Footprint {
        self.footprint_in(&GridSpace::new(GridSpace::DEFAULT_SIDE))
    }

    #[must_use]
    pub fn blueprint(self) -> Blueprint {
        Blueprint::building(self.building_kind())
    }

    /// Parses the selector value: `"none"`, `"lv3"` or `"lv4"`.
    #[must_use]
    pub fn parse_selection(value: &str) -> Option<Option<Self>> {
        match value.trim().to_ascii_lowercase().as_str() {
            "none" | "" => Some(None),
            "lv3" => Some(Some(AllianceCityLevel::Lv3)),
            "lv4" => Some(Some(AllianceCityLevel::Lv4)),
            _ => None,
        }
    }
}

/// Everything a placement needs besides its origin cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Blueprint {
    pub name: String,
    pub kind: ItemKind,
    pub width: u32,
    pub height: u32,
    /// Side of the concentric influence ring, for ring-bearing buildings.
    pub ring_size: Option<u32>,
    /// Fixed items cannot be dragged or removed through the generic paths.
    pub fixed: bool,
}

impl Blueprint {
    #[must_use]
    pub fn player(name: impl Into<String>, size: PlayerSize) -> Self {
        Self {
            name: name.into(),
            kind: ItemKind::Player,
            width: size.side(),
            height: size.side(),
            ring_size: None,
            fixed: false,
        }
    }

    /// A building with its default size, ring and display name. Alliance
    /// cities are always fixed.
    #[must_use]
    pub fn building(kind: BuildingKind) -> Self {
        let (width, height) = kind.default_size();
        Self {
            name: kind.display_name().to_string(),
            kind: ItemKind::Building(kind),
            width,
            height,
            ring_size: kind.ring_size(),
            fixed: kind.is_alliance_city(),
        }
    }

    /// Override the footprint size.
    #[must_use]
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    #[must_use]
    pub fn footprint_at(&self, origin: Cell) -> Footprint {
        Footprint::new(origin, self.width, self.height)
    }

    /// Checks structural preconditions that do not depend on grid state.
    ///
    /// # Errors
    ///
    /// Returns [`PlacementError::InvalidArgument`] for a zero-sized
    /// footprint, a fixed item that is not an alliance city, a non-square
    /// ring-bearing footprint, or a ring narrower than the footprint it
    /// surrounds.
    pub fn validate(&self) -> Result<(), PlacementError> {
        if self.width == 0 || self.height == 0 {
            return Err(PlacementError::InvalidArgument(format!(
                "'{}' must be at least 1x1, got {}x{}",
                self.name, self.width, self.height
            )));
        }
        if self.fixed && !self.kind.building().is_some_and(BuildingKind::is_alliance_city) {
            return Err(PlacementError::InvalidArgument(format!(
                "only alliance cities can be fixed, not '{}'",
                self.name
            )));
        }
        if let Some(ring) = self.ring_size {
            if self.width != self.height {
                return Err(PlacementError::InvalidArgument(format!(
                    "ring-bearing '{}' must be square, got {}x{}",
                    self.name, self.width, self.height
                )));
            }
            if ring < self.width {
                return Err(PlacementError::InvalidArgument(format!(
                    "ring {ring} is narrower than '{}' ({} wide)",
                    self.name, self.width
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_building_blueprint_defaults() {
        let city = Blueprint::building(BuildingKind::AllianceCityLv4);
        assert_eq!((city.width, city.height), (4, 4));
        assert_eq!(city.ring_size, Some(20));
        assert!(city.fixed);
        assert_eq!(city.name, "Alliance City Lv4");

        let tile = Blueprint::building(BuildingKind::RssTile);
        assert!(!tile.fixed);
        assert_eq!(tile.ring_size, None);
    }

    #[test]
    fn test_player_blueprint() {
        let bp = Blueprint::player("Aria", PlayerSize::Large);
        assert_eq!((bp.width, bp.height), (3, 3));
        assert!(bp.kind.is_player());
        assert!(bp.validate().is_ok());
    }

    #[test]
    fn test_keep_size_parsing() {
        assert_eq!(PlayerSize::from_keep_size("3x3"), PlayerSize::Large);
        assert_eq!(PlayerSize::from_keep_size("keep 3"), PlayerSize::Large);
        assert_eq!(PlayerSize::from_keep_size("2x2"), PlayerSize::Small);
        assert_eq!(PlayerSize::from_keep_size(""), PlayerSize::Small);
    }

    #[test]
    fn test_validate_rejects_bad_shapes() {
        let zero = Blueprint::player("x", PlayerSize::Small).with_size(0, 2);
        assert!(matches!(zero.validate(), Err(PlacementError::InvalidArgument(_))));

        let oblong = Blueprint::building(BuildingKind::AllianceCityLv3).with_size(2, 3);
        assert!(matches!(oblong.validate(), Err(PlacementError::InvalidArgument(_))));

        let mut narrow = Blueprint::building(BuildingKind::AllianceCityLv3);
        narrow.ring_size = Some(1);
        assert!(matches!(narrow.validate(), Err(PlacementError::InvalidArgument(_))));

        let mut pinned = Blueprint::player("y", PlayerSize::Small);
        pinned.fixed = true;
        assert!(matches!(pinned.validate(), Err(PlacementError::InvalidArgument(_))));
    }

    #[test]
    fn test_alliance_city_selection() {
        assert_eq!(AllianceCityLevel::parse_selection("none"), Some(None));
        assert_eq!(
            AllianceCityLevel::parse_selection("LV4"),
            Some(Some(AllianceCityLevel::Lv4))
        );
        assert_eq!(AllianceCityLevel::parse_selection("lv9"), None);
        assert_eq!(AllianceCityLevel::Lv3.footprint(), Footprint::at(14, 14, 2, 2));
        assert_eq!(AllianceCityLevel::Lv4.footprint(), Footprint::at(13, 13, 4, 4));
        assert_eq!(
            AllianceCityLevel::Lv4.footprint_in(&GridSpace::new(10)),
            Footprint::at(3, 3, 4, 4)
        );
    }

    #[test]
    fn test_kind_serialization() {
        let json = serde_json::to_string(&ItemKind::Building(BuildingKind::RssTile)).unwrap();
        assert_eq!(json, r#"{"building":"rss-tile"}"#);
        let size: PlayerSize = serde_json::from_str(r#""3x3""#).unwrap();
        assert_eq!(size, PlayerSize::Large);
    }
}

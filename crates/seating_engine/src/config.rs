//! Layout configuration.

use seating_core::GridSpace;
use seating_geometry::CoordinateMapper;
use serde::{Deserialize, Serialize};

/// A configuration the engine cannot represent.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("grid side must be between 1 and {max}, got {side}", max = LayoutConfig::MAX_SIDE)]
    Side { side: u32 },

    /// Some cell would map outside the `i32` game coordinate range.
    #[error("game origin x:{x_min} y:{y_min} leaves no room for a {side}x{side} grid")]
    Origin { x_min: i32, y_min: i32, side: u32 },
}

/// Grid size and the game coordinates of its bottom-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Grid side length in cells.
    pub side: u32,
    /// Game X of grid column 0.
    pub x_min: i32,
    /// Game Y of the bottom grid row.
    pub y_min: i32,
}

impl LayoutConfig {
    /// Largest grid side accepted by [`validate`](Self::validate).
    pub const MAX_SIDE: u32 = 1024;

    #[must_use]
    pub fn new() -> Self {
        Self {
            side: GridSpace::DEFAULT_SIDE,
            x_min: CoordinateMapper::DEFAULT_X_MIN,
            y_min: CoordinateMapper::DEFAULT_Y_MIN,
        }
    }

    /// Override the grid side length.
    #[must_use]
    pub fn with_side(mut self, side: u32) -> Self {
        self.side = side;
        self
    }

    /// Override the game coordinates of the bottom-left cell.
    #[must_use]
    pub fn with_game_origin(mut self, x_min: i32, y_min: i32) -> Self {
        self.x_min = x_min;
        self.y_min = y_min;
        self
    }

    /// Checks that the grid is non-empty and every cell has game
    /// coordinates within `i32`.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Side`] or [`ConfigError::Origin`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.side == 0 || self.side > Self::MAX_SIDE {
            return Err(ConfigError::Side { side: self.side });
        }
        let far = i64::from(self.side) - 1;
        let fits = |origin: i32| i64::from(origin) + far <= i64::from(i32::MAX);
        if !fits(self.x_min) || !fits(self.y_min) {
            return Err(ConfigError::Origin {
                x_min: self.x_min,
                y_min: self.y_min,
                side: self.side,
            });
        }
        Ok(())
    }

    #[must_use]
    pub fn grid(&self) -> GridSpace {
        GridSpace::new(self.side)
    }

    #[must_use]
    pub fn mapper(&self) -> CoordinateMapper {
        CoordinateMapper::new(self.x_min, self.y_min, self.grid())
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = LayoutConfig::default();
        assert_eq!(config.side, 30);
        assert_eq!((config.x_min, config.y_min), (545, 624));
    }

    #[test]
    fn test_partial_json_falls_back_to_defaults() {
        let config: LayoutConfig = serde_json::from_str(r#"{"x_min": 100}"#).unwrap();
        assert_eq!(config, LayoutConfig::default().with_game_origin(100, 624));
    }

    #[test]
    fn test_validate() {
        assert_eq!(LayoutConfig::default().validate(), Ok(()));
        assert_eq!(
            LayoutConfig::new().with_side(0).validate(),
            Err(ConfigError::Side { side: 0 })
        );
        assert!(LayoutConfig::new().with_side(4096).validate().is_err());

        let edge = LayoutConfig::new().with_game_origin(i32::MAX - 29, 0);
        assert_eq!(edge.validate(), Ok(()));
        let over = LayoutConfig::new().with_game_origin(i32::MAX, 0);
        assert!(matches!(over.validate(), Err(ConfigError::Origin { .. })));
        let low = LayoutConfig::new().with_game_origin(0, i32::MIN);
        assert_eq!(low.validate(), Ok(()));
    }

    #[test]
    fn test_builder() {
        let config = LayoutConfig::new().with_side(12).with_game_origin(0, 0);
        assert_eq!(config.grid().side(), 12);
        assert_eq!(config.mapper().side, 12);
    }
}

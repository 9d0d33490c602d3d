//! Render plans: what to draw in each grid cell.
//!
//! A [`RenderPlan`] is a flat, row-major list of [`CellView`]s plus one
//! [`Label`] per item. Class names follow the chart's stylesheet:
//!
//! | part | classes |
//! |---|---|
//! | fill | `player-2x2`, `player-3x3`, `alliance-city-lv3`, `alliance-city-lv4`, `rss-tile`, `warehouse`, `dead-spot` |
//! | perimeter | `item-border-top`, `item-border-bottom`, `item-border-left`, `item-border-right` |
//! | standard ring | `alliance-city-border-lv3` with `border-top`, ... |
//! | wide ring | `alliance-city-border-lv4` with `border-top-lv4`, ... |

use seating_core::{Cell, Item, ItemId, ItemKind};
use seating_engine::Layout;
use seating_geometry::{CoordinateMapper, Edges, RingVariant};
use serde::{Deserialize, Serialize};
use tracing::trace;

/// Knobs for building a plan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderOptions {
    /// Attach `x:{x} y:{y}` game coordinates to each label.
    pub show_coordinates: bool,
}

/// Everything drawn in one grid cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellView {
    pub cell: Cell,
    /// Item whose footprint covers this cell.
    pub occupant: Option<ItemId>,
    /// Fill class of the occupant.
    pub fill: Option<String>,
    /// Set when an influence ring passes through this cell.
    pub ring: Option<RingVariant>,
    /// Every class, fill first.
    pub classes: Vec<String>,
}

impl CellView {
    fn empty(cell: Cell) -> Self {
        Self {
            cell,
            occupant: None,
            fill: None,
            ring: None,
            classes: Vec::new(),
        }
    }

    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }
}

/// Name tag anchored at an item's top-left cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Label {
    pub item: ItemId,
    pub name: String,
    pub cell: Cell,
    /// `size-{w}x{h}`, used to scale the text.
    pub size_class: String,
    pub coordinates: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderPlan {
    pub side: u32,
    pub cells: Vec<CellView>,
    pub labels: Vec<Label>,
}

impl RenderPlan {
    /// Projects the current layout.
    #[must_use]
    pub fn build(layout: &Layout, options: RenderOptions) -> Self {
        let grid = *layout.grid();
        let side = grid.side();
        let mut plan = Self {
            side,
            cells: (0..side as i32)
                .flat_map(|row| (0..side as i32).map(move |col| CellView::empty(Cell::new(row, col))))
                .collect(),
            labels: Vec::new(),
        };

        for item in layout.all_items() {
            let fill = fill_class(item);
            for cell in item.footprint.cells() {
                if let Some(view) = plan.cell_mut(cell) {
                    view.occupant = Some(item.id);
                    view.fill = Some(fill.clone());
                    view.classes.insert(0, fill.clone());
                }
            }

            let borders = layout.compute_borders(item);
            for outline in &borders.perimeter {
                if let Some(view) = plan.cell_mut(outline.cell) {
                    view.classes
                        .extend(outline.edges.names().map(|edge| format!("item-border-{edge}")));
                }
            }
            for ring in &borders.ring {
                if let Some(view) = plan.cell_mut(ring.cell) {
                    view.ring = Some(ring.variant);
                    view.classes.extend(ring_classes(ring.variant, ring.edges));
                }
            }

            plan.labels.push(Label {
                item: item.id,
                name: item.name.clone(),
                cell: item.origin(),
                size_class: format!("size-{}", item.size_label()),
                coordinates: options
                    .show_coordinates
                    .then(|| CoordinateMapper::label(layout.to_game_coordinates(item))),
            });
        }

        trace!(
            cells = plan.cells.len(),
            labels = plan.labels.len(),
            "render plan built"
        );
        plan
    }

    /// The view of `(row, col)`, if it is on the grid.
    #[must_use]
    pub fn get(&self, row: i32, col: i32) -> Option<&CellView> {
        self.position(Cell::new(row, col))
            .and_then(|index| self.cells.get(index))
    }

    /// Rows of cell views, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[CellView]> {
        self.cells.chunks(self.side.max(1) as usize)
    }

    fn cell_mut(&mut self, cell: Cell) -> Option<&mut CellView> {
        self.position(cell).and_then(|index| self.cells.get_mut(index))
    }

    fn position(&self, cell: Cell) -> Option<usize> {
        let side = self.side as i32;
        if cell.row < 0 || cell.col < 0 || cell.row >= side || cell.col >= side {
            return None;
        }
        Some((cell.row * side + cell.col) as usize)
    }
}

fn fill_class(item: &Item) -> String {
    match item.kind {
        ItemKind::Player => format!("player-{}", item.size_label()),
        ItemKind::Building(kind) => kind.slug().to_string(),
    }
}

fn ring_classes(variant: RingVariant, edges: Edges) -> Vec<String> {
    let (outline, suffix) = match variant {
        RingVariant::Standard => ("alliance-city-border-lv3", ""),
        RingVariant::Wide => ("alliance-city-border-lv4", "-lv4"),
    };
    std::iter::once(outline.to_string())
        .chain(edges.names().map(|edge| format!("border-{edge}{suffix}")))
        .collect()
}

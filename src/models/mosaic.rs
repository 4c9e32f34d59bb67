// src/models/mosaic.rs
//
// A MosaicGrid is the full set of cubes for one mask.
// MosaicSet holds the built grids in creation order, keyed by id.

use super::cell::{Cell, MaterialKind};

#[derive(Debug, Clone)]
pub struct MosaicGrid {
    pub id: String,
    pub width: u32,
    pub height: u32,
    pub material: MaterialKind,
    pub cells: Vec<Cell>,
}

impl MosaicGrid {
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    pub fn set_scale(&mut self, scale: f32) {
        for cell in self.cells.iter_mut() {
            cell.scale = scale;
        }
    }

    pub fn all_scaled_to(&self, scale: f32) -> bool {
        self.cells.iter().all(|c| c.scale == scale)
    }
}

#[derive(Debug, Default)]
pub struct MosaicSet {
    grids: Vec<MosaicGrid>,
}

impl MosaicSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a grid; a grid with the same id replaces the old one.
    pub fn insert(&mut self, grid: MosaicGrid) {
        if let Some(existing) = self.grids.iter_mut().find(|g| g.id == grid.id) {
            *existing = grid;
        } else {
            self.grids.push(grid);
        }
    }

    pub fn get(&self, id: &str) -> Option<&MosaicGrid> {
        self.grids.iter().find(|g| g.id == id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut MosaicGrid> {
        self.grids.iter_mut().find(|g| g.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &MosaicGrid> {
        self.grids.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut MosaicGrid> {
        self.grids.iter_mut()
    }

    pub fn len(&self) -> usize {
        self.grids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.grids.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty_grid(id: &str, width: u32) -> MosaicGrid {
        MosaicGrid {
            id: id.to_string(),
            width,
            height: width,
            material: MaterialKind::Textured,
            cells: Vec::new(),
        }
    }

    #[test]
    fn test_insert_and_lookup() {
        let mut set = MosaicSet::new();
        set.insert(empty_grid("heart", 4));
        set.insert(empty_grid("smile", 4));
        assert_eq!(set.len(), 2);
        assert!(set.get("heart").is_some());
        assert!(set.get("codrops").is_none());
        assert_eq!(
            set.iter().map(|g| g.id.as_str()).collect::<Vec<_>>(),
            vec!["heart", "smile"]
        );
    }

    #[test]
    fn test_insert_same_id_replaces() {
        let mut set = MosaicSet::new();
        set.insert(empty_grid("heart", 4));
        set.insert(empty_grid("heart", 8));
        assert_eq!(set.len(), 1);
        assert_eq!(set.get("heart").unwrap().width, 8);
    }
}

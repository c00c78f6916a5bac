//! Placement of list slots along a horizontal strip

use std::fmt;

use serde::Serialize;
use tracing::warn;

use crate::constants::layout::{CAMERA_LEAD_X, CAMERA_LEAD_Y, NULL_LABEL, PITCH};
use crate::core::{ListInput, Point};

/// What a slot displays
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum SlotLabel {
    Value(i64),
    Null,
}

impl fmt::Display for SlotLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SlotLabel::Value(value) => write!(f, "{value}"),
            SlotLabel::Null => f.write_str(NULL_LABEL),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LayoutSlot {
    pub position: Point,
    pub label: SlotLabel,
}

/// Positions of every list slot, plus the synthetic null slot for acyclic lists
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Layout {
    slots: Vec<LayoutSlot>,
    node_count: usize,
    cycle_target: Option<usize>,
}

impl Layout {
    /// Lay out `values`; a cycle index outside the list is dropped with a
    /// warning, matching how the chain builder treats it
    pub fn new(values: &[i64], cycle: Option<usize>) -> Self {
        let cycle = match cycle {
            Some(index) if index >= values.len() => {
                warn!(
                    index,
                    len = values.len(),
                    "cycle index out of range, laying out an acyclic list"
                );
                None
            }
            other => other,
        };

        let mut slots: Vec<LayoutSlot> = values
            .iter()
            .enumerate()
            .map(|(i, &value)| LayoutSlot {
                position: Self::position_of(i),
                label: SlotLabel::Value(value),
            })
            .collect();

        if cycle.is_none() {
            slots.push(LayoutSlot {
                position: Self::position_of(values.len()),
                label: SlotLabel::Null,
            });
        }

        Self {
            slots,
            node_count: values.len(),
            cycle_target: cycle,
        }
    }

    /// Anchor of slot `index`; one pitch apart on x, all on the same row
    pub fn position_of(index: usize) -> Point {
        Point::new((index + 1) as f32 * PITCH, PITCH)
    }

    /// Camera position that puts `anchor` at the focus point of the view
    pub fn camera_focus(anchor: Point) -> Point {
        anchor - Point::new(CAMERA_LEAD_X, CAMERA_LEAD_Y)
    }

    /// Camera position at the start of the list
    pub fn start_camera() -> Point {
        Self::camera_focus(Self::position_of(0))
    }

    pub fn slots(&self) -> &[LayoutSlot] {
        &self.slots
    }

    pub fn anchor(&self, index: usize) -> Option<Point> {
        self.slots.get(index).map(|slot| slot.position)
    }

    /// Number of real (non-null) slots
    pub fn node_count(&self) -> usize {
        self.node_count
    }

    pub fn last_node_index(&self) -> Option<usize> {
        self.node_count.checked_sub(1)
    }

    pub fn cycle_target(&self) -> Option<usize> {
        self.cycle_target
    }

    pub fn has_null_slot(&self) -> bool {
        self.slots.len() > self.node_count
    }
}

impl From<&ListInput> for Layout {
    fn from(input: &ListInput) -> Self {
        Layout::new(input.values(), input.cycle())
    }
}

/// Lay out `values` on the strip
pub fn layout(values: &[i64], cycle: Option<usize>) -> Layout {
    Layout::new(values, cycle)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_acyclic_layout_appends_null_slot() {
        let layout = layout(&[10, 20, 30], None);
        let slots = layout.slots();

        assert_eq!(slots.len(), 4);
        assert_eq!(slots[3].label, SlotLabel::Null);
        for pair in slots.windows(2) {
            assert_eq!(pair[1].position.x - pair[0].position.x, PITCH);
            assert_eq!(pair[1].position.y, pair[0].position.y);
        }
    }

    #[test]
    fn test_cyclic_layout_has_no_null_slot() {
        let layout = layout(&[3, 2, 0, -4], Some(1));

        assert_eq!(layout.slots().len(), 4);
        assert!(!layout.has_null_slot());
        assert_eq!(layout.cycle_target(), Some(1));
        assert_eq!(layout.last_node_index(), Some(3));
    }

    #[test]
    fn test_out_of_range_cycle_lays_out_acyclic() {
        let layout = layout(&[1, 2], Some(5));

        assert_eq!(layout.slots().len(), 3);
        assert!(layout.has_null_slot());
        assert_eq!(layout.cycle_target(), None);
        assert_eq!(layout.slots()[2].label, SlotLabel::Null);
    }

    #[test]
    fn test_empty_layout() {
        let layout = layout(&[], None);

        assert_eq!(layout.slots().len(), 1);
        assert_eq!(layout.node_count(), 0);
        assert_eq!(layout.last_node_index(), None);
    }

    #[test]
    fn test_start_camera() {
        assert_eq!(Layout::start_camera(), Point::new(-PITCH, 0.0));
    }

    #[test]
    fn test_slot_label_display() {
        assert_eq!(SlotLabel::Value(-4).to_string(), "-4");
        assert_eq!(SlotLabel::Null.to_string(), "None");
    }
}

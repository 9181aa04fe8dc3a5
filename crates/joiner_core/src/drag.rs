/// Tracks a single in-progress drag gesture over the pending-file list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragTracker {
    #[default]
    Idle,
    Dragging { index: usize },
}

impl DragTracker {
    pub fn dragged_index(&self) -> Option<usize> {
        match self {
            DragTracker::Idle => None,
            DragTracker::Dragging { index } => Some(*index),
        }
    }

    pub fn start(&mut self, index: usize) {
        *self = DragTracker::Dragging { index };
    }

    /// Returns the `(from, to)` move implied by hovering over `target`, and
    /// follows the dragged item to its new position.
    pub fn over(&mut self, target: usize) -> Option<(usize, usize)> {
        match *self {
            DragTracker::Dragging { index } if index != target => {
                *self = DragTracker::Dragging { index: target };
                Some((index, target))
            }
            _ => None,
        }
    }

    pub fn end(&mut self) {
        *self = DragTracker::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::DragTracker;

    #[test]
    fn over_without_start_is_ignored() {
        let mut tracker = DragTracker::default();
        assert_eq!(tracker.over(2), None);
        assert_eq!(tracker, DragTracker::Idle);
    }

    #[test]
    fn tracker_follows_the_dragged_item() {
        let mut tracker = DragTracker::default();
        tracker.start(0);
        assert_eq!(tracker.over(0), None);
        assert_eq!(tracker.over(2), Some((0, 2)));
        assert_eq!(tracker.dragged_index(), Some(2));
        assert_eq!(tracker.over(1), Some((2, 1)));
        tracker.end();
        assert_eq!(tracker.dragged_index(), None);
        assert_eq!(tracker.over(0), None);
    }
}

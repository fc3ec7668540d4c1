#![forbid(unsafe_code)]

//! Grouped carousel navigator.
//!
//! Shows one large selected image above a window of G thumbnails. The item
//! list is split into `ceil(N / G)` groups; selection moves within the
//! current group and wraps into the next/previous group at the edges. The
//! last group is padded by reusing items from the front of the list, so a
//! full row of thumbnails always renders.
//!
//! # Example
//!
//! ```rust
//! use vitrine_widgets::gallery::GalleryState;
//!
//! let mut state = GalleryState::new(10, 4);
//! assert_eq!(state.selected_index(), 0);
//!
//! state.advance();
//! assert_eq!(state.selected_index(), 1);
//! state.retreat();
//! assert_eq!(state.selected_index(), 0);
//! ```

use vitrine_core::breakpoint::GroupSizePolicy;

/// An item in the gallery: an image-source reference with optional alt text.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GalleryItem {
    pub src: String,
    pub alt: Option<String>,
}

impl GalleryItem {
    /// Create an item from an image source.
    #[must_use]
    pub fn new(src: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            alt: None,
        }
    }

    /// Attach alt text.
    #[must_use]
    pub fn alt(mut self, alt: impl Into<String>) -> Self {
        self.alt = Some(alt.into());
        self
    }
}

/// Navigation state for the grouped carousel.
///
/// All derived indices are total for `len >= 1` and `group_size >= 1`:
/// every read normalizes through modulo arithmetic against the current
/// list length, so no interleaving of transitions and group-size changes
/// can produce an out-of-range index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryState {
    len: usize,
    group_size: usize,
    group_index: usize,
    selected_in_group: usize,
}

impl GalleryState {
    /// Create state for `item_count` items shown `group_size` at a time,
    /// starting at the first item of the first group.
    ///
    /// # Panics
    ///
    /// Panics if `item_count` or `group_size` is zero. An empty gallery
    /// has no selection; this is a precondition of use, not a runtime
    /// failure mode.
    #[must_use]
    pub fn new(item_count: usize, group_size: usize) -> Self {
        assert!(item_count >= 1, "gallery requires at least one item");
        assert!(group_size >= 1, "group size must be >= 1");
        Self {
            len: item_count,
            group_size,
            group_index: 0,
            selected_in_group: 0,
        }
    }

    /// Number of items in the list.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Always false; construction requires at least one item.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Current visible-group size.
    #[must_use]
    pub fn group_size(&self) -> usize {
        self.group_size
    }

    /// Index of the currently displayed group.
    #[must_use]
    pub fn group_index(&self) -> usize {
        self.group_index
    }

    /// Position of the selected item within the current group.
    #[must_use]
    pub fn selected_in_group(&self) -> usize {
        self.selected_in_group
    }

    /// Number of groups: `ceil(len / group_size)`.
    #[must_use]
    pub fn group_count(&self) -> usize {
        self.len.div_ceil(self.group_size)
    }

    /// Absolute index of the selected item.
    #[must_use]
    pub fn selected_index(&self) -> usize {
        (self.group_index * self.group_size + self.selected_in_group) % self.len
    }

    /// Absolute item index shown in thumbnail slot `k` of the current group.
    ///
    /// Wrap-padding: when the last group has fewer than `group_size` items
    /// remaining, trailing slots reuse items from the front of the list.
    #[must_use]
    pub fn thumbnail_index(&self, k: usize) -> usize {
        (self.group_index * self.group_size + k) % self.len
    }

    /// Step the selection forward one slot, wrapping into the next group
    /// past the last slot.
    pub fn advance(&mut self) {
        self.selected_in_group += 1;
        if self.selected_in_group >= self.group_size {
            self.selected_in_group = 0;
            self.group_index = (self.group_index + 1) % self.group_count();
        }
        self.trace_transition("advance");
    }

    /// Step the selection backward one slot, wrapping into the previous
    /// group before the first slot.
    pub fn retreat(&mut self) {
        if self.selected_in_group == 0 {
            self.selected_in_group = self.group_size - 1;
            let groups = self.group_count();
            self.group_index = (self.group_index + groups - 1) % groups;
        } else {
            self.selected_in_group -= 1;
        }
        self.trace_transition("retreat");
    }

    /// Select thumbnail slot `i` within the current group. The group does
    /// not change.
    pub fn select_in_group(&mut self, i: usize) {
        debug_assert!(i < self.group_size, "slot {i} out of group range");
        self.selected_in_group = i;
        self.trace_transition("select_in_group");
    }

    /// Change the visible-group size (responsive breakpoint crossed).
    ///
    /// The stored `group_index` and `selected_in_group` are deliberately
    /// not re-clamped: derived indices normalize through modulo arithmetic
    /// against the current length, and the next transition rewrites the
    /// stored fields. A stale `selected_in_group >= group_size` therefore
    /// never produces an out-of-range read.
    ///
    /// # Panics
    ///
    /// Panics if `group_size` is zero.
    pub fn set_group_size(&mut self, group_size: usize) {
        assert!(group_size >= 1, "group size must be >= 1");
        self.group_size = group_size;
        self.trace_transition("set_group_size");
    }

    /// Resolve a [`GroupSizePolicy`] against a viewport width and apply it.
    pub fn apply_viewport(&mut self, width: f32, policy: &GroupSizePolicy) {
        self.set_group_size(policy.resolve(width));
    }

    #[allow(unused_variables)]
    fn trace_transition(&self, op: &'static str) {
        #[cfg(feature = "tracing")]
        tracing::trace!(
            op,
            group_index = self.group_index,
            selected_in_group = self.selected_in_group,
            selected = self.selected_index(),
            "gallery transition"
        );
    }
}

/// The grouped carousel widget, borrowing its item list.
#[derive(Debug, Clone)]
pub struct Gallery<'a> {
    items: &'a [GalleryItem],
}

impl<'a> Gallery<'a> {
    /// Create a gallery over a non-empty item list.
    ///
    /// # Panics
    ///
    /// Panics if `items` is empty.
    #[must_use]
    pub fn new(items: &'a [GalleryItem]) -> Self {
        assert!(!items.is_empty(), "gallery requires at least one item");
        Self { items }
    }

    /// The borrowed item list.
    #[must_use]
    pub fn items(&self) -> &'a [GalleryItem] {
        self.items
    }

    /// Fresh navigation state for this gallery.
    #[must_use]
    pub fn state(&self, group_size: usize) -> GalleryState {
        GalleryState::new(self.items.len(), group_size)
    }

    /// Derive the render model for the current state.
    ///
    /// The state's `len` must match this gallery's item count.
    #[must_use]
    pub fn view(&self, state: &GalleryState) -> GalleryView<'a> {
        debug_assert_eq!(state.len(), self.items.len(), "state/items length mismatch");
        let selected_index = state.selected_index();
        let thumbnails = (0..state.group_size())
            .map(|k| {
                let index = state.thumbnail_index(k);
                GalleryThumb {
                    item: &self.items[index],
                    index,
                    active: k == state.selected_in_group() % state.group_size(),
                }
            })
            .collect();
        GalleryView {
            selected: &self.items[selected_index],
            selected_index,
            thumbnails,
        }
    }
}

/// One thumbnail slot in the current group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryThumb<'a> {
    /// The item shown in this slot.
    pub item: &'a GalleryItem,
    /// Absolute index of the item.
    pub index: usize,
    /// Whether this slot holds the selected item.
    pub active: bool,
}

/// Render model for the grouped carousel: the large image plus exactly
/// `group_size` wrap-padded thumbnails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryView<'a> {
    pub selected: &'a GalleryItem,
    pub selected_index: usize,
    pub thumbnails: Vec<GalleryThumb<'a>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use vitrine_core::breakpoint::Breakpoints;

    fn items(n: usize) -> Vec<GalleryItem> {
        (0..n)
            .map(|i| GalleryItem::new(format!("cat-{i}.png")))
            .collect()
    }

    // --- construction ---

    #[test]
    fn initial_state() {
        let state = GalleryState::new(10, 4);
        assert_eq!(state.group_index(), 0);
        assert_eq!(state.selected_in_group(), 0);
        assert_eq!(state.selected_index(), 0);
        assert_eq!(state.group_count(), 3);
    }

    #[test]
    #[should_panic(expected = "at least one item")]
    fn zero_items_panics() {
        let _ = GalleryState::new(0, 4);
    }

    #[test]
    #[should_panic(expected = "group size must be >= 1")]
    fn zero_group_size_panics() {
        let _ = GalleryState::new(10, 0);
    }

    #[test]
    fn group_count_rounds_up() {
        assert_eq!(GalleryState::new(10, 4).group_count(), 3);
        assert_eq!(GalleryState::new(8, 4).group_count(), 2);
        assert_eq!(GalleryState::new(1, 4).group_count(), 1);
        assert_eq!(GalleryState::new(5, 1).group_count(), 5);
    }

    // --- advance / retreat ---

    #[test]
    fn advance_within_group() {
        let mut state = GalleryState::new(10, 4);
        state.advance();
        assert_eq!(state.group_index(), 0);
        assert_eq!(state.selected_in_group(), 1);
        assert_eq!(state.selected_index(), 1);
    }

    #[test]
    fn advance_wraps_into_next_group() {
        let mut state = GalleryState::new(10, 4);
        for _ in 0..4 {
            state.advance();
        }
        assert_eq!(state.group_index(), 1);
        assert_eq!(state.selected_in_group(), 0);
        assert_eq!(state.selected_index(), 4);
    }

    #[test]
    fn advance_from_last_group_wraps_to_first() {
        // Worked example: N=10, G=4, state (2, 3) => selected 11 % 10 = 1.
        let mut state = GalleryState::new(10, 4);
        state.group_index = 2;
        state.selected_in_group = 3;
        assert_eq!(state.selected_index(), 1);

        state.advance();
        assert_eq!(state.group_index(), 0);
        assert_eq!(state.selected_in_group(), 0);
        assert_eq!(state.selected_index(), 0);
    }

    #[test]
    fn retreat_within_group() {
        let mut state = GalleryState::new(10, 4);
        state.advance();
        state.advance();
        state.retreat();
        assert_eq!(state.selected_in_group(), 1);
        assert_eq!(state.group_index(), 0);
    }

    #[test]
    fn retreat_from_origin_wraps_to_last_group() {
        let mut state = GalleryState::new(10, 4);
        state.retreat();
        assert_eq!(state.group_index(), 2);
        assert_eq!(state.selected_in_group(), 3);
        // (2 * 4 + 3) % 10 = 1
        assert_eq!(state.selected_index(), 1);
    }

    #[test]
    fn advance_then_retreat_is_identity() {
        let mut state = GalleryState::new(7, 3);
        state.advance();
        state.advance();
        let before = state.clone();
        state.advance();
        state.retreat();
        assert_eq!(state, before);
        state.retreat();
        state.advance();
        assert_eq!(state, before);
    }

    #[test]
    fn full_cycle_returns_to_start() {
        let mut state = GalleryState::new(10, 4);
        state.advance();
        let start = state.clone();
        for _ in 0..(state.group_size() * state.group_count()) {
            state.advance();
        }
        assert_eq!(state, start);
    }

    #[test]
    fn single_item_gallery_is_stable() {
        let mut state = GalleryState::new(1, 4);
        state.advance();
        assert_eq!(state.selected_index(), 0);
        state.retreat();
        assert_eq!(state.selected_index(), 0);
    }

    // --- select_in_group ---

    #[test]
    fn select_in_group_keeps_group() {
        let mut state = GalleryState::new(10, 4);
        for _ in 0..4 {
            state.advance();
        }
        assert_eq!(state.group_index(), 1);
        state.select_in_group(3);
        assert_eq!(state.group_index(), 1);
        assert_eq!(state.selected_in_group(), 3);
        assert_eq!(state.selected_index(), 7);
    }

    // --- wrap-padding ---

    #[test]
    fn last_group_thumbnails_wrap_pad() {
        // N=7, G=4, last group holds indices [4, 5, 6, 0].
        let mut state = GalleryState::new(7, 4);
        for _ in 0..4 {
            state.advance();
        }
        assert_eq!(state.group_index(), 1);
        let slots: Vec<usize> = (0..4).map(|k| state.thumbnail_index(k)).collect();
        assert_eq!(slots, vec![4, 5, 6, 0]);
    }

    // --- responsive group-size change ---

    #[test]
    fn shrinking_group_size_keeps_indices_valid() {
        let mut state = GalleryState::new(10, 4);
        state.select_in_group(3);
        state.set_group_size(2);
        // selected_in_group is stale (3 >= 2) but reads stay in range.
        assert!(state.selected_index() < 10);
        for k in 0..state.group_size() {
            assert!(state.thumbnail_index(k) < 10);
        }
        // The next transition normalizes the stored fields.
        state.advance();
        assert!(state.selected_in_group() < state.group_size());
    }

    #[test]
    fn growing_group_size_recomputes_group_count() {
        let mut state = GalleryState::new(10, 2);
        assert_eq!(state.group_count(), 5);
        state.set_group_size(4);
        assert_eq!(state.group_count(), 3);
    }

    #[test]
    fn apply_viewport_resolves_policy() {
        let mut state = GalleryState::new(10, 4);
        let policy = GroupSizePolicy::Responsive(Breakpoints::default());
        state.apply_viewport(375.0, &policy);
        assert_eq!(state.group_size(), 2);
        state.apply_viewport(1440.0, &policy);
        assert_eq!(state.group_size(), 4);
    }

    // --- view derivation ---

    #[test]
    fn view_selected_and_thumbnails() {
        let items = items(7);
        let gallery = Gallery::new(&items);
        let mut state = gallery.state(4);
        for _ in 0..4 {
            state.advance();
        }
        let view = gallery.view(&state);
        assert_eq!(view.selected_index, 4);
        assert_eq!(view.selected.src, "cat-4.png");
        assert_eq!(view.thumbnails.len(), 4);
        let indices: Vec<usize> = view.thumbnails.iter().map(|t| t.index).collect();
        assert_eq!(indices, vec![4, 5, 6, 0]);
        assert!(view.thumbnails[0].active);
        assert!(!view.thumbnails[1].active);
    }

    #[test]
    fn view_active_slot_tracks_selection() {
        let items = items(10);
        let gallery = Gallery::new(&items);
        let mut state = gallery.state(4);
        state.select_in_group(2);
        let view = gallery.view(&state);
        let active: Vec<bool> = view.thumbnails.iter().map(|t| t.active).collect();
        assert_eq!(active, vec![false, false, true, false]);
    }

    #[test]
    fn view_is_total_with_stale_group_size() {
        let items = items(5);
        let gallery = Gallery::new(&items);
        let mut state = gallery.state(4);
        state.select_in_group(3);
        state.set_group_size(2);
        // Must not index out of range despite the stale selection slot.
        let view = gallery.view(&state);
        assert_eq!(view.thumbnails.len(), 2);
        assert!(view.selected_index < 5);
    }

    #[test]
    #[should_panic(expected = "at least one item")]
    fn empty_gallery_panics() {
        let _ = Gallery::new(&[]);
    }

    #[test]
    fn item_builder() {
        let item = GalleryItem::new("a.png").alt("A cat");
        assert_eq!(item.src, "a.png");
        assert_eq!(item.alt.as_deref(), Some("A cat"));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn item_round_trips_through_json() {
        let item = GalleryItem::new("a.png").alt("A cat");
        let json = serde_json::to_string(&item).unwrap();
        let back: GalleryItem = serde_json::from_str(&json).unwrap();
        assert_eq!(item, back);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        #[derive(Debug, Clone)]
        enum Op {
            Advance,
            Retreat,
            Select(usize),
            Resize(usize),
        }

        fn op_strategy() -> impl Strategy<Value = Op> {
            prop_oneof![
                Just(Op::Advance),
                Just(Op::Retreat),
                (0usize..8).prop_map(Op::Select),
                (1usize..8).prop_map(Op::Resize),
            ]
        }

        proptest! {
            #[test]
            fn selected_index_always_in_range(
                len in 1usize..40,
                group in 1usize..8,
                ops in proptest::collection::vec(op_strategy(), 0..64),
            ) {
                let mut state = GalleryState::new(len, group);
                for op in ops {
                    match op {
                        Op::Advance => state.advance(),
                        Op::Retreat => state.retreat(),
                        Op::Select(i) => state.select_in_group(i % state.group_size()),
                        Op::Resize(g) => state.set_group_size(g),
                    }
                    prop_assert!(state.selected_index() < len);
                    for k in 0..state.group_size() {
                        prop_assert!(state.thumbnail_index(k) < len);
                    }
                }
            }

            #[test]
            fn advance_and_retreat_are_inverse(
                len in 1usize..40,
                group in 1usize..8,
                steps in 0usize..32,
            ) {
                let mut state = GalleryState::new(len, group);
                for _ in 0..steps {
                    state.advance();
                }
                let before = state.clone();
                state.advance();
                state.retreat();
                prop_assert_eq!(&state, &before);
                state.retreat();
                state.advance();
                prop_assert_eq!(&state, &before);
            }

            #[test]
            fn full_cycle_closure(len in 1usize..40, group in 1usize..8) {
                let mut state = GalleryState::new(len, group);
                let start = state.clone();
                for _ in 0..(group * state.group_count()) {
                    state.advance();
                }
                prop_assert_eq!(state, start);
            }

            #[test]
            fn select_never_changes_group(
                len in 1usize..40,
                group in 1usize..8,
                slot in 0usize..8,
            ) {
                let mut state = GalleryState::new(len, group);
                state.advance();
                let group_before = state.group_index();
                state.select_in_group(slot % group);
                prop_assert_eq!(state.group_index(), group_before);
            }
        }
    }
}

// web_app/model/selection.rs - Single-selection state for detail viewers
//
// - Selection: exactly one selected record (feature tabs, video player,
//   testimonial spotlight)
// - Accordion: zero-or-one expanded record (FAQ)
// - Carousel: index into a fixed-length list (success stories, home quotes)

/// Exactly one selected id, defaulting to the first record
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Selection<Id> {
    selected: Id,
}

impl<Id: Copy + PartialEq> Selection<Id> {
    pub fn new(initial: Id) -> Self {
        Self { selected: initial }
    }

    /// Start on the first record of `items`; `None` for an empty list
    pub fn first_of<T>(items: &[T], id_of: impl Fn(&T) -> Id) -> Option<Self> {
        items.first().map(|item| Self::new(id_of(item)))
    }

    pub fn selected(&self) -> Id {
        self.selected
    }

    pub fn is_selected(&self, id: Id) -> bool {
        self.selected == id
    }

    pub fn select(&mut self, id: Id) {
        self.selected = id;
    }

    /// Resolve the selected record in `items`
    pub fn find<'a, T>(&self, items: &'a [T], id_of: impl Fn(&T) -> Id) -> Option<&'a T> {
        items.iter().find(|item| id_of(item) == self.selected)
    }
}

/// Zero-or-one expanded entry; toggling the open entry collapses it
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Accordion<Id> {
    expanded: Option<Id>,
}

impl<Id> Default for Accordion<Id> {
    fn default() -> Self {
        Self { expanded: None }
    }
}

impl<Id: Copy + PartialEq> Accordion<Id> {
    pub fn expanded(&self) -> Option<Id> {
        self.expanded
    }

    pub fn is_expanded(&self, id: Id) -> bool {
        self.expanded == Some(id)
    }

    pub fn toggle(&mut self, id: Id) {
        self.expanded = if self.is_expanded(id) { None } else { Some(id) };
    }

    pub fn collapse(&mut self) {
        self.expanded = None;
    }
}

/// Position within a fixed number of slides
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Carousel {
    index: usize,
    len: usize,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn has_prev(&self) -> bool {
        self.index > 0
    }

    pub fn has_next(&self) -> bool {
        self.index + 1 < self.len
    }

    /// Step back, stopping at the first slide
    pub fn prev(&mut self) {
        self.index = self.index.saturating_sub(1);
    }

    /// Step forward, stopping at the last slide
    pub fn next(&mut self) {
        if self.has_next() {
            self.index += 1;
        }
    }

    /// Step forward, wrapping to the first slide (auto-rotation)
    pub fn advance(&mut self) {
        if self.len > 0 {
            self.index = (self.index + 1) % self.len;
        }
    }

    pub fn go_to(&mut self, index: usize) {
        if index < self.len {
            self.index = index;
        }
    }
}

//! Extractor state machine.
//!
//! [`ExtractorState::step`] is a pure reducer: it takes the state and one
//! event and returns the next state. Every operation finishes on the event
//! that triggered it, so single transitions can be tested without a page.
//!
//! The tree under construction is owned by the state. Open sibling lists are
//! addressed by index paths from the forest root rather than by references,
//! which keeps ownership with the forest while the cursor moves.

use sdf_core::{Forest, Node, TagEvent};

use super::helpers::{clean_description, split_label};
use crate::layout::PageLayout;

/// Where the walk is relative to the capture window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Window {
    /// No window container seen yet.
    Before,
    /// Inside the window; `base` is the container level it was opened at.
    Open { base: usize },
    /// The first window has closed. Later windows are ignored.
    Closed,
}

/// Open region on the label axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelField {
    Idle,
    Name,
    /// The type hint sits inside the name label on real pages; `in_name`
    /// records where to return when it closes.
    TypeHint { in_name: bool },
}

/// Open region on the column axis. `level` is the container level the
/// column opened at; it closes when nesting returns there.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnField {
    Idle,
    Details { level: usize },
    Description { level: usize },
}

#[derive(Debug, Clone, Default)]
struct Buffers {
    name: String,
    type_hint: String,
    details: String,
    description: String,
}

/// Cursor and accumulators for one page.
#[derive(Debug, Clone)]
pub struct ExtractorState<'a> {
    layout: &'a PageLayout,
    forest: Forest,
    /// Paths of the nodes whose children are the open sibling lists. The
    /// bottom entry is the empty path (the forest root list) and is never
    /// popped.
    stack: Vec<Vec<usize>>,
    current: Option<Vec<usize>>,
    container_level: usize,
    window: Window,
    label: LabelField,
    column: ColumnField,
    buffers: Buffers,
}

impl<'a> ExtractorState<'a> {
    #[must_use]
    pub fn new(layout: &'a PageLayout) -> Self {
        Self {
            layout,
            forest: Vec::new(),
            stack: vec![Vec::new()],
            current: None,
            container_level: 0,
            window: Window::Before,
            label: LabelField::Idle,
            column: ColumnField::Idle,
            buffers: Buffers::default(),
        }
    }

    /// Consume one event and return the next state.
    #[must_use]
    pub fn step(mut self, event: &TagEvent) -> Self {
        self.apply(event);
        self
    }

    /// In-place form of [`Self::step`].
    pub fn apply(&mut self, event: &TagEvent) {
        match event {
            TagEvent::Start { name, .. } => self.on_start(name, event),
            TagEvent::End { name } => self.on_end(name),
            TagEvent::Text(text) => self.on_text(text),
        }
    }

    /// Hand over the forest built so far.
    #[must_use]
    pub fn finish(self) -> Forest {
        tracing::debug!(
            roots = self.forest.len(),
            nodes = sdf_core::node::forest_size(&self.forest),
            window = ?self.window,
            "extraction finished"
        );
        self.forest
    }

    #[must_use]
    pub const fn window(&self) -> Window {
        self.window
    }

    #[must_use]
    pub const fn is_capturing(&self) -> bool {
        matches!(self.window, Window::Open { .. })
    }

    #[must_use]
    pub const fn label(&self) -> LabelField {
        self.label
    }

    #[must_use]
    pub const fn column(&self) -> ColumnField {
        self.column
    }

    /// Number of open sibling lists, the root list included.
    #[must_use]
    pub fn list_depth(&self) -> usize {
        self.stack.len()
    }

    #[must_use]
    pub const fn container_level(&self) -> usize {
        self.container_level
    }

    #[must_use]
    pub fn forest(&self) -> &Forest {
        &self.forest
    }

    // ── transitions ────────────────────────────────────────────────

    fn on_start(&mut self, tag: &str, event: &TagEvent) {
        let layout = self.layout;

        if tag == layout.container_tag {
            self.open_container(event);
            return;
        }
        if !self.is_capturing() {
            return;
        }

        if tag == layout.item_tag {
            self.open_item();
        } else if tag == layout.list_tag {
            self.open_list();
        } else if tag == layout.type_hint_tag {
            self.label = LabelField::TypeHint {
                in_name: self.label == LabelField::Name,
            };
            self.buffers.type_hint.clear();
        } else if tag == layout.name_tag && self.label == LabelField::Idle {
            self.label = LabelField::Name;
            self.buffers.name.clear();
        }
    }

    fn on_end(&mut self, tag: &str) {
        let layout = self.layout;

        if tag == layout.container_tag {
            self.close_container();
            return;
        }
        if !self.is_capturing() {
            return;
        }

        if tag == layout.list_tag {
            // The root list is never popped; surplus closes are dropped.
            if self.stack.len() > 1 {
                self.stack.pop();
            }
        } else if tag == layout.item_tag {
            self.close_item();
        } else if tag == layout.type_hint_tag {
            if let LabelField::TypeHint { in_name } = self.label {
                self.label = if in_name {
                    LabelField::Name
                } else {
                    LabelField::Idle
                };
            }
        } else if tag == layout.name_tag && self.label != LabelField::Idle {
            self.label = LabelField::Idle;
            self.close_name();
        }
    }

    fn on_text(&mut self, text: &str) {
        if !self.is_capturing() {
            return;
        }
        match self.label {
            LabelField::Name => self.buffers.name.push_str(text),
            LabelField::TypeHint { .. } => self.buffers.type_hint.push_str(text),
            LabelField::Idle => {}
        }
        match self.column {
            // Fragments are space-separated so `<b>Type:</b>double` stays
            // readable for the details parser.
            ColumnField::Details { .. } => {
                self.buffers.details.push_str(text);
                self.buffers.details.push(' ');
            }
            ColumnField::Description { .. } => self.buffers.description.push_str(text),
            ColumnField::Idle => {}
        }
    }

    fn open_container(&mut self, event: &TagEvent) {
        let layout = self.layout;
        let level = self.container_level;

        if self.window == Window::Before && event.has_classes(&layout.window_classes) {
            tracing::debug!(level, "entered capture window");
            self.window = Window::Open { base: level };
        } else if self.is_capturing() && self.column == ColumnField::Idle {
            if event.has_classes(&layout.details_classes) {
                self.column = ColumnField::Details { level };
                self.buffers.details.clear();
            } else if event.has_classes(&layout.description_classes) {
                self.column = ColumnField::Description { level };
                self.buffers.description.clear();
            }
        }

        self.container_level += 1;
    }

    fn close_container(&mut self) {
        self.container_level = self.container_level.saturating_sub(1);
        let level = self.container_level;

        match self.column {
            ColumnField::Details { level: opened } if opened == level => {
                self.column = ColumnField::Idle;
                let raw = std::mem::take(&mut self.buffers.details);
                if let Some(node) = self.current_node() {
                    node.details_raw = raw;
                }
            }
            ColumnField::Description { level: opened } if opened == level => {
                self.column = ColumnField::Idle;
                let layout = self.layout;
                let description =
                    clean_description(&self.buffers.description, &layout.description_label);
                self.buffers.description.clear();
                if let Some(node) = self.current_node() {
                    node.description = description;
                }
            }
            _ => {}
        }

        if let Window::Open { base } = self.window {
            if level == base {
                tracing::debug!(level, "left capture window");
                self.window = Window::Closed;
                self.label = LabelField::Idle;
                self.column = ColumnField::Idle;
            }
        }
    }

    fn open_item(&mut self) {
        let top = self.stack.last().cloned().unwrap_or_default();
        let Some(list) = list_at_mut(&mut self.forest, &top) else {
            return;
        };
        list.push(Node::default());
        let mut path = top;
        path.push(list.len() - 1);
        self.current = Some(path);
        self.buffers = Buffers::default();
    }

    /// A closed item hands the cursor back to the item owning its list, so
    /// fields or lists that follow a nested list land on the right node.
    fn close_item(&mut self) {
        let Some(top) = self.stack.last() else {
            return;
        };
        let closes_top_level = self
            .current
            .as_deref()
            .and_then(|path| path.split_last())
            .is_some_and(|(_, parent)| parent == top.as_slice());
        if closes_top_level {
            self.current = (!top.is_empty()).then(|| top.clone());
        }
    }

    fn open_list(&mut self) {
        // A list only nests under an open item; stray lists are ignored.
        if let Some(path) = &self.current {
            self.stack.push(path.clone());
        }
    }

    fn close_name(&mut self) {
        let layout = self.layout;
        let (name, kind) = split_label(
            &self.buffers.name,
            &self.buffers.type_hint,
            layout.attribute_sigil,
            &layout.decoration,
        );
        if let Some(node) = self.current_node() {
            tracing::trace!(%name, ?kind, "closed node label");
            node.name = name;
            node.node_type = kind;
        }
    }

    fn current_node(&mut self) -> Option<&mut Node> {
        let path = self.current.as_deref()?;
        node_at_mut(&mut self.forest, path)
    }
}

fn node_at_mut<'f>(forest: &'f mut [Node], path: &[usize]) -> Option<&'f mut Node> {
    let (first, rest) = path.split_first()?;
    let mut node = forest.get_mut(*first)?;
    for &index in rest {
        node = node.children.get_mut(index)?;
    }
    Some(node)
}

fn list_at_mut<'f>(forest: &'f mut Vec<Node>, path: &[usize]) -> Option<&'f mut Vec<Node>> {
    if path.is_empty() {
        return Some(forest);
    }
    node_at_mut(forest, path).map(|node| &mut node.children)
}

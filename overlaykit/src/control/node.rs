use super::{ControlId, Panel, Widget};
use crate::layout::{Grid, GridPlacement, Rect, Size};
use crate::types::{
    Edges, HorizontalAlignment, HoverPolicy, LayoutStrategy, Style, VerticalAlignment,
};

/// Settings for a plain (non-grid) container.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ContainerLayout {
    pub strategy: LayoutStrategy,
    /// Gap between stacked children and the slack added by auto-size.
    /// `None` uses the tree's configured spacing.
    pub spacing: Option<f32>,
    /// Resize to the bounding box of the visible children.
    pub auto_size: bool,
}

/// What a control can do with children.
#[derive(Debug, Clone)]
pub enum NodeKind {
    Leaf,
    Container(ContainerLayout),
    Grid(Grid),
}

impl NodeKind {
    pub fn hosts_children(&self) -> bool {
        !matches!(self, Self::Leaf)
    }

    /// A plain container that sizes itself to its children.
    pub fn is_auto_sized(&self) -> bool {
        matches!(self, Self::Container(layout) if layout.auto_size)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InteractionState {
    #[default]
    Idle,
    Hovered,
    Pressed,
}

/// A control description, consumed by [`ControlTree::insert`](crate::ControlTree::insert).
pub struct Control {
    pub(crate) widget: Box<dyn Widget>,
    pub(crate) kind: NodeKind,
    pub(crate) bounds: Rect,
    pub(crate) visible: bool,
    pub(crate) enabled: bool,
    pub(crate) focusable: bool,
    pub(crate) style: Style,
    pub(crate) margin: Edges,
    pub(crate) padding: Edges,
    pub(crate) placement: GridPlacement,
    pub(crate) horizontal: HorizontalAlignment,
    pub(crate) vertical: VerticalAlignment,
    pub(crate) hover_policy: Option<HoverPolicy>,
}

impl Control {
    fn with_kind(widget: Box<dyn Widget>, kind: NodeKind) -> Self {
        Self {
            widget,
            kind,
            bounds: Rect::default(),
            visible: true,
            enabled: true,
            focusable: false,
            style: Style::default(),
            margin: Edges::ZERO,
            padding: Edges::ZERO,
            placement: GridPlacement::default(),
            horizontal: HorizontalAlignment::default(),
            vertical: VerticalAlignment::default(),
            hover_policy: None,
        }
    }

    pub fn leaf(widget: impl Widget + 'static) -> Self {
        Self::with_kind(Box::new(widget), NodeKind::Leaf)
    }

    pub fn container(widget: impl Widget + 'static) -> Self {
        Self::with_kind(
            Box::new(widget),
            NodeKind::Container(ContainerLayout::default()),
        )
    }

    pub fn grid(widget: impl Widget + 'static, grid: Grid) -> Self {
        Self::with_kind(Box::new(widget), NodeKind::Grid(grid))
    }

    /// A container drawn by [`Panel`].
    pub fn panel() -> Self {
        Self::container(Panel)
    }

    pub fn position(mut self, x: f32, y: f32) -> Self {
        self.bounds.x = x;
        self.bounds.y = y;
        self
    }

    pub fn size(mut self, width: f32, height: f32) -> Self {
        self.bounds.width = width.max(0.0);
        self.bounds.height = height.max(0.0);
        self
    }

    pub fn bounds(self, bounds: Rect) -> Self {
        self.position(bounds.x, bounds.y)
            .size(bounds.width, bounds.height)
    }

    pub fn visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn focusable(mut self, focusable: bool) -> Self {
        self.focusable = focusable;
        self
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn margin(mut self, margin: Edges) -> Self {
        self.margin = margin;
        self
    }

    pub fn padding(mut self, padding: Edges) -> Self {
        self.padding = padding;
        self
    }

    /// Grid cell. Only meaningful for children of a grid.
    pub fn cell(mut self, column: usize, row: usize) -> Self {
        self.placement.column = column;
        self.placement.row = row;
        self
    }

    pub fn span(mut self, column_span: usize, row_span: usize) -> Self {
        self.placement = self.placement.span(column_span, row_span);
        self
    }

    pub fn placement(mut self, placement: GridPlacement) -> Self {
        self.placement = placement.span(placement.column_span, placement.row_span);
        self
    }

    pub fn align(mut self, horizontal: HorizontalAlignment, vertical: VerticalAlignment) -> Self {
        self.horizontal = horizontal;
        self.vertical = vertical;
        self
    }

    pub fn hover_policy(mut self, policy: HoverPolicy) -> Self {
        self.hover_policy = Some(policy);
        self
    }

    /// Layout strategy for plain containers; ignored by leaves and grids.
    pub fn strategy(mut self, strategy: LayoutStrategy) -> Self {
        if let NodeKind::Container(layout) = &mut self.kind {
            layout.strategy = strategy;
        }
        self
    }

    pub fn spacing(mut self, spacing: f32) -> Self {
        if let NodeKind::Container(layout) = &mut self.kind {
            layout.spacing = Some(spacing.max(0.0));
        }
        self
    }

    pub fn auto_size(mut self, auto_size: bool) -> Self {
        if let NodeKind::Container(layout) = &mut self.kind {
            layout.auto_size = auto_size;
        }
        self
    }
}

/// A control as stored in the tree's arena.
pub(crate) struct ControlNode {
    pub widget: Box<dyn Widget>,
    pub kind: NodeKind,
    pub parent: Option<ControlId>,
    pub children: Vec<ControlId>,
    /// Parent-relative bounds as last set or arranged.
    pub bounds: Rect,
    /// Size the application asked for. Arrange may override `bounds` but never this.
    pub preferred: Size,
    /// Result of the last measure pass.
    pub desired: Size,
    pub visible: bool,
    pub enabled: bool,
    pub focusable: bool,
    pub style: Style,
    pub margin: Edges,
    pub padding: Edges,
    pub placement: GridPlacement,
    pub horizontal: HorizontalAlignment,
    pub vertical: VerticalAlignment,
    pub hover_policy: HoverPolicy,
    pub hovered: bool,
    pub pressed: bool,
}

impl ControlNode {
    pub fn new(control: Control, default_policy: HoverPolicy) -> Self {
        Self {
            widget: control.widget,
            kind: control.kind,
            parent: None,
            children: Vec::new(),
            bounds: control.bounds,
            preferred: control.bounds.size(),
            desired: control.bounds.size(),
            visible: control.visible,
            enabled: control.enabled,
            focusable: control.focusable,
            style: control.style,
            margin: control.margin,
            padding: control.padding,
            placement: control.placement,
            horizontal: control.horizontal,
            vertical: control.vertical,
            hover_policy: control.hover_policy.unwrap_or(default_policy),
            hovered: false,
            pressed: false,
        }
    }

    pub fn interaction(&self) -> InteractionState {
        if self.pressed {
            InteractionState::Pressed
        } else if self.hovered {
            InteractionState::Hovered
        } else {
            InteractionState::Idle
        }
    }

    pub fn is_live(&self) -> bool {
        self.visible && self.enabled
    }

    pub fn grid_mut(&mut self) -> Option<&mut Grid> {
        match &mut self.kind {
            NodeKind::Grid(grid) => Some(grid),
            _ => None,
        }
    }
}

use crate::widget_id::WidgetId;
use thiserror::Error;

/// Rejected structural operation. The tree is left unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TreeError {
    #[error("{0} does not exist in this tree")]
    Missing(WidgetId),

    #[error("{0} is not a container")]
    NotContainer(WidgetId),

    #[error("{child} is already a child of {parent}")]
    DuplicateChild { child: WidgetId, parent: WidgetId },

    #[error("{child} already has parent {parent}")]
    AlreadyParented { child: WidgetId, parent: WidgetId },

    #[error("{0} is a top-level container and cannot be reparented or destroyed")]
    TopLevel(WidgetId),

    #[error("adding {child} to {parent} would create a cycle")]
    Cycle { child: WidgetId, parent: WidgetId },
}

pub mod use_card_actions;
pub mod use_drag;
pub mod use_query;

pub use use_card_actions::{use_card_actions, BoardActions, RouterNavigator};
pub use use_drag::{
    provide_drag_context, use_drag_context, DragContext, DragSessionProvider, DraggableHandle,
    DROPPABLE_ATTR,
};
pub use use_query::{provide_query_client, use_query, use_query_client, QueryClient, QueryState};

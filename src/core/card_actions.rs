//! Operations behind a task card's interactions.
//!
//! The UI layer supplies the collaborators (router, task store, query cache,
//! toasts); everything here is plain async Rust so it can be driven in tests.

use crate::core::menu::CardAction;
use crate::core::query_cache::QueryKey;
use crate::core::routing::{TaskPanel, ViewContext};
use crate::error::ApiError;
use crate::models::{ProjectDetail, TaskStatus, User};

pub trait Navigator {
    fn navigate(&self, target: &str);
}

pub trait Notifier {
    fn notify_success(&self, message: &str);
    fn notify_error(&self, message: &str);
}

pub trait CacheInvalidator {
    fn invalidate(&self, key: &QueryKey);
}

/// Remote task store. Mutations resolve to a human-readable message.
#[allow(async_fn_in_trait)]
pub trait TaskApi {
    async fn get_project(&self, project_id: &str) -> Result<ProjectDetail, ApiError>;

    async fn get_user(&self) -> Result<User, ApiError>;

    async fn delete_task(&self, project_id: &str, task_id: &str) -> Result<String, ApiError>;

    async fn update_task_status(
        &self,
        project_id: &str,
        task_id: &str,
        status: TaskStatus,
    ) -> Result<String, ApiError>;

    async fn update_task(
        &self,
        project_id: &str,
        task_id: &str,
        name: &str,
        description: &str,
    ) -> Result<String, ApiError>;
}

#[derive(Debug, Clone)]
pub struct CardActions<N, A, C, T> {
    pub navigator: N,
    pub api: A,
    pub cache: C,
    pub notifier: T,
}

impl<N, A, C, T> CardActions<N, A, C, T>
where
    N: Navigator,
    A: TaskApi,
    C: CacheInvalidator,
    T: Notifier,
{
    pub fn open_view(&self, ctx: &ViewContext, task_id: &str) {
        self.navigator.navigate(&ctx.task_target(TaskPanel::View, task_id));
    }

    pub fn open_edit(&self, ctx: &ViewContext, task_id: &str) {
        self.navigator.navigate(&ctx.task_target(TaskPanel::Edit, task_id));
    }

    pub fn close_panel(&self, ctx: &ViewContext) {
        self.navigator.navigate(ctx.board_target());
    }

    /// Runs the operation behind a card menu entry.
    pub async fn perform(&self, ctx: &ViewContext, task_id: &str, action: CardAction) {
        match action {
            CardAction::View => self.open_view(ctx, task_id),
            CardAction::Edit => self.open_edit(ctx, task_id),
            CardAction::Delete => self.delete(ctx, task_id).await,
        }
    }

    /// Deletes the task. The outcome is reported through the notifier; the
    /// project detail is invalidated only on success. No retry.
    pub async fn delete(&self, ctx: &ViewContext, task_id: &str) {
        tracing::debug!(project_id = %ctx.project_id, task_id, "deleting task");
        let result = self.api.delete_task(&ctx.project_id, task_id).await;
        self.report(ctx, result);
    }

    /// Moves the task to another status column.
    pub async fn move_to(&self, ctx: &ViewContext, task_id: &str, status: TaskStatus) {
        tracing::debug!(project_id = %ctx.project_id, task_id, status = status.key(), "moving task");
        let result = self.api.update_task_status(&ctx.project_id, task_id, status).await;
        self.report(ctx, result);
    }

    /// Saves edits and closes the edit panel on success.
    pub async fn save_edits(&self, ctx: &ViewContext, task_id: &str, name: &str, description: &str) {
        let result = self.api.update_task(&ctx.project_id, task_id, name, description).await;
        if self.report(ctx, result) {
            self.close_panel(ctx);
        }
    }

    /// Surfaces the outcome of a mutation. Returns whether it succeeded.
    fn report(&self, ctx: &ViewContext, result: Result<String, ApiError>) -> bool {
        match result {
            Ok(message) => {
                self.notifier.notify_success(&message);
                self.cache.invalidate(&QueryKey::edit_project(&ctx.project_id));
                true
            }
            Err(e) => {
                tracing::warn!(project_id = %ctx.project_id, error = %e, "task request failed");
                self.notifier.notify_error(&e.to_string());
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use std::cell::RefCell;

    #[derive(Default)]
    struct Recorder {
        navigations: RefCell<Vec<String>>,
        successes: RefCell<Vec<String>>,
        errors: RefCell<Vec<String>>,
        invalidations: RefCell<Vec<QueryKey>>,
        calls: RefCell<Vec<(String, String)>>,
    }

    impl Navigator for &Recorder {
        fn navigate(&self, target: &str) {
            self.navigations.borrow_mut().push(target.to_string());
        }
    }

    impl Notifier for &Recorder {
        fn notify_success(&self, message: &str) {
            self.successes.borrow_mut().push(message.to_string());
        }

        fn notify_error(&self, message: &str) {
            self.errors.borrow_mut().push(message.to_string());
        }
    }

    impl CacheInvalidator for &Recorder {
        fn invalidate(&self, key: &QueryKey) {
            self.invalidations.borrow_mut().push(key.clone());
        }
    }

    struct FakeApi<'a> {
        recorder: &'a Recorder,
        outcome: Result<String, ApiError>,
    }

    impl TaskApi for FakeApi<'_> {
        async fn get_project(&self, _project_id: &str) -> Result<ProjectDetail, ApiError> {
            Err(ApiError::Unavailable("not used".into()))
        }

        async fn get_user(&self) -> Result<User, ApiError> {
            Err(ApiError::Unavailable("not used".into()))
        }

        async fn delete_task(&self, project_id: &str, task_id: &str) -> Result<String, ApiError> {
            self.recorder
                .calls
                .borrow_mut()
                .push((project_id.to_string(), task_id.to_string()));
            self.outcome.clone()
        }

        async fn update_task_status(
            &self,
            project_id: &str,
            task_id: &str,
            status: TaskStatus,
        ) -> Result<String, ApiError> {
            self.recorder
                .calls
                .borrow_mut()
                .push((project_id.to_string(), format!("{task_id}:{}", status.key())));
            self.outcome.clone()
        }

        async fn update_task(
            &self,
            project_id: &str,
            task_id: &str,
            name: &str,
            _description: &str,
        ) -> Result<String, ApiError> {
            self.recorder
                .calls
                .borrow_mut()
                .push((project_id.to_string(), format!("{task_id}:{name}")));
            self.outcome.clone()
        }
    }

    fn ctx() -> ViewContext {
        ViewContext { project_id: "p1".into(), current_path: "/projects/p1".into() }
    }

    fn actions<'a>(
        recorder: &'a Recorder,
        outcome: Result<String, ApiError>,
    ) -> CardActions<&'a Recorder, FakeApi<'a>, &'a Recorder, &'a Recorder> {
        CardActions {
            navigator: recorder,
            api: FakeApi { recorder, outcome },
            cache: recorder,
            notifier: recorder,
        }
    }

    #[test]
    fn test_view_and_edit_navigate_with_query() {
        let recorder = Recorder::default();
        let actions = actions(&recorder, Ok(String::new()));
        actions.open_view(&ctx(), "t1");
        actions.open_edit(&ctx(), "t1");
        assert_eq!(
            *recorder.navigations.borrow(),
            ["/projects/p1?viewTask=t1", "/projects/p1?editTask=t1"]
        );
    }

    #[test]
    fn test_delete_success_notifies_and_invalidates_once() {
        let recorder = Recorder::default();
        let actions = actions(&recorder, Ok("Task removed".into()));

        block_on(actions.delete(&ctx(), "t1"));

        assert_eq!(*recorder.calls.borrow(), [("p1".to_string(), "t1".to_string())]);
        assert_eq!(*recorder.successes.borrow(), ["Task removed"]);
        assert!(recorder.errors.borrow().is_empty());
        assert_eq!(*recorder.invalidations.borrow(), [QueryKey::edit_project("p1")]);
    }

    #[test]
    fn test_delete_failure_notifies_without_invalidation() {
        let recorder = Recorder::default();
        let actions = actions(&recorder, Err(ApiError::Rejected("Network error".into())));

        block_on(actions.delete(&ctx(), "t1"));

        assert_eq!(recorder.calls.borrow().len(), 1);
        assert_eq!(*recorder.errors.borrow(), ["Network error"]);
        assert!(recorder.successes.borrow().is_empty());
        assert!(recorder.invalidations.borrow().is_empty());
    }

    #[test]
    fn test_each_delete_click_issues_one_request() {
        let recorder = Recorder::default();
        let actions = actions(&recorder, Ok("Task removed".into()));
        block_on(actions.delete(&ctx(), "t1"));
        block_on(actions.delete(&ctx(), "t1"));
        assert_eq!(recorder.calls.borrow().len(), 2);
        assert_eq!(recorder.invalidations.borrow().len(), 2);
    }

    #[test]
    fn test_move_invalidates_project() {
        let recorder = Recorder::default();
        let actions = actions(&recorder, Ok("Status updated".into()));
        block_on(actions.move_to(&ctx(), "t1", TaskStatus::Completed));
        assert_eq!(*recorder.calls.borrow(), [("p1".to_string(), "t1:completed".to_string())]);
        assert_eq!(*recorder.invalidations.borrow(), [QueryKey::edit_project("p1")]);
    }

    #[test]
    fn test_save_edits_closes_panel_only_on_success() {
        let recorder = Recorder::default();
        block_on(actions(&recorder, Ok("Task updated".into())).save_edits(&ctx(), "t1", "New", ""));
        assert_eq!(*recorder.navigations.borrow(), ["/projects/p1"]);

        let recorder = Recorder::default();
        let failed = actions(&recorder, Err(ApiError::Rejected("Name required".into())));
        block_on(failed.save_edits(&ctx(), "t1", "", ""));
        assert!(recorder.navigations.borrow().is_empty());
        assert_eq!(*recorder.errors.borrow(), ["Name required"]);
    }

    #[test]
    fn test_menu_view_and_edit_open_their_panels() {
        let recorder = Recorder::default();
        let actions = actions(&recorder, Ok(String::new()));
        block_on(actions.perform(&ctx(), "t1", CardAction::View));
        block_on(actions.perform(&ctx(), "t1", CardAction::Edit));

        assert_eq!(
            *recorder.navigations.borrow(),
            ["/projects/p1?viewTask=t1", "/projects/p1?editTask=t1"]
        );
        assert!(recorder.calls.borrow().is_empty());
    }

    #[test]
    fn test_menu_delete_calls_store_without_navigating() {
        let recorder = Recorder::default();
        let actions = actions(&recorder, Ok("Task removed".into()));
        block_on(actions.perform(&ctx(), "t7", CardAction::Delete));

        assert_eq!(*recorder.calls.borrow(), [("p1".to_string(), "t7".to_string())]);
        assert!(recorder.navigations.borrow().is_empty());
        assert_eq!(*recorder.successes.borrow(), ["Task removed"]);
        assert_eq!(*recorder.invalidations.borrow(), [QueryKey::edit_project("p1")]);
    }
}

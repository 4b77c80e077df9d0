// SPDX-License-Identifier: MPL-2.0
//! Loading toasts that settle into a success, action or error toast.
//!
//! [`Store::promise`] wraps a future. Hosts whose executors need `Send`
//! futures (the store handle is not `Send`) use the split form instead:
//! [`Store::begin_promise`] before spawning the work, then
//! [`PendingPromise::settle`] with the result once it comes back.

use super::notification::{ToastId, ToastState};
use super::options::ToastOptions;
use super::store::Store;
use std::fmt;
use std::future::Future;

/// Options for one outcome: fixed, or computed from the settled value.
pub enum PromiseStep<T> {
    Static(ToastOptions),
    Computed(Box<dyn Fn(&T) -> ToastOptions>),
}

impl<T> PromiseStep<T> {
    pub fn computed(build: impl Fn(&T) -> ToastOptions + 'static) -> Self {
        PromiseStep::Computed(Box::new(build))
    }

    fn resolve(&self, value: &T) -> ToastOptions {
        match self {
            PromiseStep::Static(options) => options.clone(),
            PromiseStep::Computed(build) => build(value),
        }
    }
}

impl<T> From<ToastOptions> for PromiseStep<T> {
    fn from(options: ToastOptions) -> Self {
        PromiseStep::Static(options)
    }
}

impl<T> fmt::Debug for PromiseStep<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PromiseStep::Static(options) => f.debug_tuple("Static").field(options).finish(),
            PromiseStep::Computed(_) => f.write_str("Computed(..)"),
        }
    }
}

/// What to show while pending and once settled.
///
/// When `action` is set it replaces `success` for resolved values.
#[derive(Debug)]
pub struct PromiseOptions<T, E> {
    pub loading: ToastOptions,
    pub success: PromiseStep<T>,
    pub error: PromiseStep<E>,
    pub action: Option<PromiseStep<T>>,
}

impl<T, E> PromiseOptions<T, E> {
    pub fn new(
        loading: ToastOptions,
        success: impl Into<PromiseStep<T>>,
        error: impl Into<PromiseStep<E>>,
    ) -> Self {
        Self {
            loading,
            success: success.into(),
            error: error.into(),
            action: None,
        }
    }

    #[must_use]
    pub fn action(mut self, action: impl Into<PromiseStep<T>>) -> Self {
        self.action = Some(action.into());
        self
    }
}

/// A loading toast waiting for its result.
#[derive(Debug)]
#[must_use = "a pending promise toast stays loading until settled"]
pub struct PendingPromise<T, E> {
    id: ToastId,
    success: PromiseStep<T>,
    error: PromiseStep<E>,
    action: Option<PromiseStep<T>>,
}

impl<T, E> PendingPromise<T, E> {
    #[must_use]
    pub fn id(&self) -> ToastId {
        self.id
    }

    /// Replaces the loading toast with the toast for `result`.
    ///
    /// The content comes from the matching step alone. Placement and
    /// appearance (position, fill, roundness, styles, tap behaviour) carry
    /// over from the loading toast unless the step sets them.
    ///
    /// Does nothing if the loading toast was dismissed in the meantime.
    pub fn settle(self, store: &Store, result: &Result<T, E>) {
        let Some(loading) = store.get(self.id).filter(|record| record.is_live()) else {
            tracing::debug!(id = %self.id, "promise settled after its toast was dismissed");
            return;
        };

        let options = match (result, &self.action) {
            (Ok(value), Some(action)) => action.resolve(value).state(ToastState::Action),
            (Ok(value), None) => self.success.resolve(value).state(ToastState::Success),
            (Err(error), _) => self.error.resolve(error).state(ToastState::Error),
        };
        let carried = ToastOptions {
            position: Some(loading.position),
            fill: loading.options.fill,
            roundness: loading.options.roundness,
            styles: loading.options.styles,
            dismiss_on_tap: loading.options.dismiss_on_tap,
            ..ToastOptions::default()
        };
        store.create(carried.merge(&options).id(self.id));
    }
}

impl Store {
    /// Shows the loading toast of `options` and returns the handle that
    /// settles it.
    pub fn begin_promise<T, E>(&self, options: PromiseOptions<T, E>) -> PendingPromise<T, E> {
        let id = self.create(
            options
                .loading
                .state(ToastState::Loading)
                .persistent(),
        );
        PendingPromise {
            id,
            success: options.success,
            error: options.error,
            action: options.action,
        }
    }

    /// Shows a loading toast until `future` completes, then settles it.
    ///
    /// The returned future yields the original result unchanged.
    pub fn promise<F, T, E>(
        &self,
        future: F,
        options: PromiseOptions<T, E>,
    ) -> (ToastId, impl Future<Output = Result<T, E>>)
    where
        F: Future<Output = Result<T, E>>,
    {
        let store = self.clone();
        let pending = self.begin_promise(options);
        let id = pending.id();

        (id, async move {
            let result = future.await;
            pending.settle(&store, &result);
            result
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;
    use crate::ui::notifications::{Description, Position, StoreDefaults, ToastDuration};
    use iced::Color;
    use std::time::Instant;

    fn store() -> Store {
        Store::with_clock(StoreDefaults::default(), Instant::now())
    }

    fn upload_options() -> PromiseOptions<u32, String> {
        PromiseOptions::new(
            ToastOptions::new().title("Uploading"),
            PromiseStep::computed(|count: &u32| {
                ToastOptions::new()
                    .title("Uploaded")
                    .description(format!("{count} files"))
            }),
            PromiseStep::computed(|error: &String| {
                ToastOptions::new().title("Failed").description(error.clone())
            }),
        )
    }

    #[tokio::test]
    async fn loading_toast_is_shown_immediately_and_persists() {
        let store = store();
        let (id, future) = store.promise(
            std::future::pending::<Result<u32, String>>(),
            upload_options(),
        );
        drop(future);

        let record = store.get(id).expect("loading toast");
        assert_eq!(record.state(), ToastState::Loading);
        assert_eq!(record.duration, ToastDuration::Persistent);
        assert!(record.autopilot.is_none());
    }

    #[tokio::test]
    async fn resolution_replaces_loading_toast_in_place() {
        let store = store();
        let (id, future) = store.promise(
            async {
                tokio::task::yield_now().await;
                Ok::<u32, String>(3)
            },
            upload_options(),
        );
        let loading = store.get(id).map(|record| record.instance);

        assert_eq!(future.await, Ok(3));
        let record = store.get(id).expect("settled toast");
        assert_eq!(store.records().len(), 1);
        assert_eq!(record.state(), ToastState::Success);
        assert_eq!(record.view.title, "Uploaded");
        assert_eq!(
            record.view.description,
            Some(Description::from("3 files"))
        );
        assert_ne!(Some(record.instance), loading);
        assert_eq!(record.duration, ToastDuration::default());
    }

    #[tokio::test]
    async fn rejection_is_shown_and_returned_unchanged() {
        let store = store();
        let (id, future) = store.promise(
            async { Err::<u32, String>("disk full".to_string()) },
            upload_options(),
        );

        assert_eq!(future.await, Err("disk full".to_string()));
        let record = store.get(id).expect("settled toast");
        assert_eq!(record.state(), ToastState::Error);
        assert_eq!(record.view.title, "Failed");
        assert_eq!(
            record.view.description.map(|d| d.plain_text()),
            Some("disk full".to_string())
        );
    }

    #[tokio::test]
    async fn action_step_takes_precedence_on_success() {
        let store = store();
        let options = upload_options().action(ToastOptions::new().title("Open folder"));
        let (id, future) = store.promise(async { Ok::<u32, String>(1) }, options);

        assert_eq!(future.await, Ok(1));
        let record = store.get(id).expect("settled toast");
        assert_eq!(record.state(), ToastState::Action);
        assert_eq!(record.view.title, "Open folder");
    }

    #[test]
    fn split_form_settles_with_a_result_from_elsewhere() {
        let store = store();
        let pending = store.begin_promise(upload_options());
        let id = pending.id();
        assert_eq!(store.get(id).map(|record| record.state()), Some(ToastState::Loading));

        pending.settle(&store, &Ok(7));
        assert_eq!(store.get(id).map(|record| record.state()), Some(ToastState::Success));
    }

    #[test]
    fn settling_a_dismissed_promise_does_nothing() {
        let store = store();
        let pending = store.begin_promise(upload_options());
        let id = pending.id();
        store.dismiss(id);

        pending.settle(&store, &Err("late".to_string()));
        let record = store.get(id).expect("exiting toast");
        assert!(record.exiting);
        assert_eq!(record.state(), ToastState::Loading);
    }

    #[test]
    fn settled_toast_keeps_the_loading_placement_and_look() {
        let store = store();
        let pending = store.begin_promise(PromiseOptions::<u32, String>::new(
            ToastOptions::new()
                .title("Exporting")
                .icon("⏳")
                .position(Position::BottomLeft)
                .fill(Color::BLACK)
                .roundness(4.0),
            ToastOptions::new().title("Exported"),
            ToastOptions::new().title("Export failed"),
        ));
        let id = pending.id();

        pending.settle(&store, &Ok(1));
        let record = store.get(id).expect("settled toast");
        assert_eq!(record.position, Position::BottomLeft);
        assert_eq!(record.view.fill, Color::BLACK);
        assert_abs_diff_eq!(record.view.roundness, 4.0);
        assert_eq!(record.view.title, "Exported");
        assert_eq!(record.view.icon, ToastState::Success.icon());
    }

    #[test]
    fn settle_step_can_still_move_the_toast() {
        let store = store();
        let pending = store.begin_promise(PromiseOptions::<u32, String>::new(
            ToastOptions::new().position(Position::BottomLeft),
            ToastOptions::new().position(Position::TopCenter),
            ToastOptions::new(),
        ));
        let id = pending.id();

        pending.settle(&store, &Ok(1));
        assert_eq!(
            store.get(id).map(|record| record.position),
            Some(Position::TopCenter)
        );
    }

    #[test]
    fn explicit_loading_id_is_kept() {
        let store = store();
        let id = ToastId::from_key("sync");
        let pending = store.begin_promise(PromiseOptions::<(), ()>::new(
            ToastOptions::new().id(id),
            ToastOptions::new().title("Synced"),
            ToastOptions::new().title("Sync failed"),
        ));
        assert_eq!(pending.id(), id);

        pending.settle(&store, &Err(()));
        assert_eq!(
            store.get(id).map(|record| record.view.title),
            Some("Sync failed".to_string())
        );
    }
}

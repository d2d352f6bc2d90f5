//! Controller Tests
//!
//! Drive the controller against a scripted API and a recording surface.

use std::cell::{Cell, RefCell};

use async_trait::async_trait;
use futures::channel::oneshot;

use super::*;
use crate::api::{ApiError, ApiResult};

// ========================
// Fakes
// ========================

#[derive(Debug, Clone, PartialEq)]
enum Request {
    List(Filter),
    Create { title: String, description: String },
    Update(TaskId, serde_json::Value),
    Delete(TaskId),
}

#[derive(Default)]
struct FakeApi {
    requests: RefCell<Vec<Request>>,
    tasks: RefCell<Vec<Task>>,
    fail_list: Cell<bool>,
    fail_mutations: Cell<bool>,
    /// First delete waits on this before answering
    delete_gate: RefCell<Option<oneshot::Receiver<()>>>,
}

impl FakeApi {
    fn with_tasks(tasks: Vec<Task>) -> Self {
        let api = Self::default();
        *api.tasks.borrow_mut() = tasks;
        api
    }

    fn failing() -> Self {
        let api = Self::default();
        api.fail_mutations.set(true);
        api
    }

    fn requests(&self) -> Vec<Request> {
        self.requests.borrow().clone()
    }

    fn clear(&self) {
        self.requests.borrow_mut().clear();
    }

    fn record(&self, request: Request) {
        self.requests.borrow_mut().push(request);
    }

    fn mutation_result(&self) -> ApiResult<()> {
        if self.fail_mutations.get() {
            Err(ApiError::Status(500))
        } else {
            Ok(())
        }
    }
}

#[async_trait(?Send)]
impl TaskApi for FakeApi {
    async fn list_tasks(&self, filter: Filter) -> ApiResult<Vec<Task>> {
        self.record(Request::List(filter));
        if self.fail_list.get() {
            return Err(ApiError::Status(503));
        }
        Ok(self.tasks.borrow().clone())
    }

    async fn create_task(&self, args: &CreateTaskArgs<'_>) -> ApiResult<()> {
        self.record(Request::Create {
            title: args.title.to_string(),
            description: args.description.to_string(),
        });
        self.mutation_result()
    }

    async fn update_task(&self, id: TaskId, args: &UpdateTaskArgs<'_>) -> ApiResult<()> {
        self.record(Request::Update(id, serde_json::to_value(args).unwrap()));
        self.mutation_result()
    }

    async fn delete_task(&self, id: TaskId) -> ApiResult<()> {
        self.record(Request::Delete(id));
        let gate = self.delete_gate.borrow_mut().take();
        if let Some(gate) = gate {
            let _ = gate.await;
        }
        self.mutation_result()
    }
}

#[derive(Debug, Clone, PartialEq)]
enum Event {
    BeginLoading,
    EndLoading,
    Show(ListView),
    ActiveFilter(Filter),
    ResetForm,
    FillEdit(String, String),
    OpenModal,
    CloseModal,
    Confirm(String),
    Notify(String, ToastKind),
}

struct RecordingSurface {
    events: RefCell<Vec<Event>>,
    confirm_answer: Cell<bool>,
}

impl Default for RecordingSurface {
    fn default() -> Self {
        Self { events: RefCell::new(Vec::new()), confirm_answer: Cell::new(true) }
    }
}

impl RecordingSurface {
    fn push(&self, event: Event) {
        self.events.borrow_mut().push(event);
    }

    fn events(&self) -> Vec<Event> {
        self.events.borrow().clone()
    }

    fn has(&self, event: &Event) -> bool {
        self.events.borrow().contains(event)
    }

    fn notifications(&self) -> Vec<(String, ToastKind)> {
        self.events
            .borrow()
            .iter()
            .filter_map(|e| match e {
                Event::Notify(message, kind) => Some((message.clone(), *kind)),
                _ => None,
            })
            .collect()
    }

    fn last_shown(&self) -> Option<ListView> {
        self.events.borrow().iter().rev().find_map(|e| match e {
            Event::Show(view) => Some(view.clone()),
            _ => None,
        })
    }

    fn clear(&self) {
        self.events.borrow_mut().clear();
    }
}

impl Surface for RecordingSurface {
    fn begin_loading(&self) {
        self.push(Event::BeginLoading);
    }

    fn end_loading(&self) {
        self.push(Event::EndLoading);
    }

    fn show_tasks(&self, view: ListView) {
        self.push(Event::Show(view));
    }

    fn mark_active_filter(&self, filter: Filter) {
        self.push(Event::ActiveFilter(filter));
    }

    fn reset_new_task_form(&self) {
        self.push(Event::ResetForm);
    }

    fn fill_edit_form(&self, title: &str, description: &str) {
        self.push(Event::FillEdit(title.to_string(), description.to_string()));
    }

    fn open_edit_modal(&self) {
        self.push(Event::OpenModal);
    }

    fn close_edit_modal(&self) {
        self.push(Event::CloseModal);
    }

    fn confirm(&self, message: &str) -> bool {
        self.push(Event::Confirm(message.to_string()));
        self.confirm_answer.get()
    }

    fn notify(&self, message: &str, kind: ToastKind) {
        self.push(Event::Notify(message.to_string(), kind));
    }
}

type TestController = TaskListController<FakeApi, RecordingSurface>;

fn controller(api: FakeApi) -> TestController {
    TaskListController::new(api, RecordingSurface::default())
}

fn make_task(id: TaskId, title: &str, completed: bool) -> Task {
    Task {
        id,
        title: title.to_string(),
        description: None,
        completed,
        created_at: "2025-01-31T10:00:00Z".to_string(),
    }
}

// ========================
// Create
// ========================

#[tokio::test]
async fn test_create_trims_and_reloads_once() {
    let ctl = controller(FakeApi::default());

    ctl.create("  Write report \n", "  by Friday ").await;

    assert_eq!(
        ctl.api.requests(),
        vec![
            Request::Create { title: "Write report".into(), description: "by Friday".into() },
            Request::List(Filter::All),
        ]
    );
}

#[tokio::test]
async fn test_create_buy_milk_end_to_end() {
    let ctl = controller(FakeApi::with_tasks(vec![make_task(1, "Buy milk", false)]));
    ctl.set_filter(Filter::Active).await;
    ctl.api.clear();
    ctl.surface.clear();

    ctl.create("Buy milk", "").await;

    assert_eq!(
        ctl.api.requests(),
        vec![
            Request::Create { title: "Buy milk".into(), description: "".into() },
            Request::List(Filter::Active),
        ]
    );
    assert!(ctl.surface.has(&Event::ResetForm));
    let notes = ctl.surface.notifications();
    assert_eq!(notes.len(), 1);
    assert!(notes[0].0.contains("added"));
    assert_eq!(notes[0].1, ToastKind::Success);
}

#[tokio::test]
async fn test_create_rejects_blank_title() {
    for title in ["", "   ", "\t\n"] {
        let ctl = controller(FakeApi::default());
        ctl.create(title, "some description").await;

        assert!(ctl.api.requests().is_empty());
        assert_eq!(
            ctl.surface.notifications(),
            vec![(MSG_TITLE_REQUIRED.to_string(), ToastKind::Error)]
        );
    }
}

#[tokio::test]
async fn test_create_failure_keeps_form() {
    let ctl = controller(FakeApi::failing());

    ctl.create("Buy milk", "").await;

    assert_eq!(ctl.api.requests().len(), 1);
    assert!(!ctl.surface.has(&Event::ResetForm));
    assert_eq!(
        ctl.surface.notifications(),
        vec![(MSG_ADD_FAILED.to_string(), ToastKind::Error)]
    );
}

// ========================
// Completion & Delete
// ========================

#[tokio::test]
async fn test_complete_task() {
    let ctl = controller(FakeApi::default());

    ctl.set_completion(3, true).await;

    assert_eq!(
        ctl.api.requests(),
        vec![
            Request::Update(3, serde_json::json!({"completed": true})),
            Request::List(Filter::All),
        ]
    );
    let notes = ctl.surface.notifications();
    assert_eq!(notes.len(), 1);
    assert!(notes[0].0.contains("completed"));
}

#[tokio::test]
async fn test_uncomplete_task_wording() {
    let ctl = controller(FakeApi::default());

    ctl.set_completion(3, false).await;

    assert_eq!(
        ctl.surface.notifications(),
        vec![(MSG_PENDING.to_string(), ToastKind::Success)]
    );
}

#[tokio::test]
async fn test_completion_failure_skips_reload() {
    let ctl = controller(FakeApi::failing());

    ctl.set_completion(3, true).await;

    assert_eq!(ctl.api.requests().len(), 1);
    assert_eq!(
        ctl.surface.notifications(),
        vec![(MSG_UPDATE_FAILED.to_string(), ToastKind::Error)]
    );
}

#[tokio::test]
async fn test_declined_delete_does_nothing() {
    let ctl = controller(FakeApi::default());
    ctl.surface.confirm_answer.set(false);

    ctl.delete(4).await;

    assert!(ctl.api.requests().is_empty());
    assert!(ctl.surface.notifications().is_empty());
    assert_eq!(ctl.surface.events(), vec![Event::Confirm(MSG_CONFIRM_DELETE.to_string())]);
}

#[tokio::test]
async fn test_confirmed_delete() {
    let ctl = controller(FakeApi::default());

    ctl.delete(4).await;

    assert_eq!(ctl.api.requests(), vec![Request::Delete(4), Request::List(Filter::All)]);
    assert_eq!(
        ctl.surface.notifications(),
        vec![(MSG_DELETED.to_string(), ToastKind::Success)]
    );
}

#[tokio::test]
async fn test_delete_failure() {
    let ctl = controller(FakeApi::failing());

    ctl.delete(4).await;

    assert_eq!(ctl.api.requests(), vec![Request::Delete(4)]);
    assert_eq!(
        ctl.surface.notifications(),
        vec![(MSG_DELETE_FAILED.to_string(), ToastKind::Error)]
    );
}

// ========================
// Edit Sessions
// ========================

#[tokio::test]
async fn test_begin_edit_fills_form() {
    let ctl = controller(FakeApi::default());
    let task = make_task(8, "Call Bob", false);

    ctl.begin_edit(&task);

    assert_eq!(ctl.editing_task_id.get(), Some(8));
    assert_eq!(
        ctl.surface.events(),
        vec![Event::FillEdit("Call Bob".into(), "".into()), Event::OpenModal]
    );
    assert!(ctl.api.requests().is_empty());
}

#[tokio::test]
async fn test_commit_edit_success() {
    let ctl = controller(FakeApi::default());
    let mut task = make_task(8, "Call Bob", false);
    task.description = Some("about lunch".into());
    ctl.begin_edit(&task);

    ctl.commit_edit(" Call Bob back ", " about dinner ").await;

    assert_eq!(
        ctl.api.requests(),
        vec![
            Request::Update(8, serde_json::json!({"title": "Call Bob back", "description": "about dinner"})),
            Request::List(Filter::All),
        ]
    );
    assert!(ctl.surface.has(&Event::CloseModal));
    assert_eq!(ctl.editing_task_id.get(), None);
    assert_eq!(
        ctl.surface.notifications(),
        vec![(MSG_UPDATED.to_string(), ToastKind::Success)]
    );
}

#[tokio::test]
async fn test_commit_edit_rejects_blank_title() {
    let ctl = controller(FakeApi::default());
    ctl.begin_edit(&make_task(8, "Call Bob", false));

    ctl.commit_edit("   ", "whatever").await;

    assert!(ctl.api.requests().is_empty());
    assert!(!ctl.surface.has(&Event::CloseModal));
    assert_eq!(ctl.editing_task_id.get(), Some(8));
    assert_eq!(
        ctl.surface.notifications(),
        vec![(MSG_TITLE_REQUIRED.to_string(), ToastKind::Error)]
    );
}

#[tokio::test]
async fn test_commit_edit_failure_keeps_modal_open() {
    let ctl = controller(FakeApi::failing());
    ctl.begin_edit(&make_task(8, "Call Bob", false));

    ctl.commit_edit("Call Bob back", "").await;

    assert_eq!(ctl.api.requests().len(), 1);
    assert!(!ctl.surface.has(&Event::CloseModal));
    assert_eq!(ctl.editing_task_id.get(), Some(8));
    assert_eq!(
        ctl.surface.notifications(),
        vec![(MSG_UPDATE_FAILED.to_string(), ToastKind::Error)]
    );
}

#[tokio::test]
async fn test_cancelled_edit_leaves_no_stale_target() {
    let ctl = controller(FakeApi::default());
    ctl.begin_edit(&make_task(8, "Call Bob", false));

    ctl.cancel_edit();
    assert_eq!(ctl.editing_task_id.get(), None);
    assert!(ctl.surface.has(&Event::CloseModal));

    ctl.commit_edit("Call Bob back", "").await;
    assert!(ctl.api.requests().is_empty());
    assert_eq!(
        ctl.surface.notifications(),
        vec![(MSG_NO_EDIT_TARGET.to_string(), ToastKind::Error)]
    );
}

#[tokio::test]
async fn test_new_edit_session_replaces_target() {
    let ctl = controller(FakeApi::default());
    ctl.begin_edit(&make_task(8, "Call Bob", false));
    ctl.begin_edit(&make_task(9, "Pay rent", false));

    ctl.commit_edit("Pay rent today", "").await;

    assert_eq!(
        ctl.api.requests()[0],
        Request::Update(9, serde_json::json!({"title": "Pay rent today", "description": ""}))
    );
}

// ========================
// Filter, Load & Render
// ========================

#[tokio::test]
async fn test_set_filter_marks_and_reloads() {
    let ctl = controller(FakeApi::default());

    ctl.set_filter(Filter::Completed).await;

    assert_eq!(ctl.current_filter.get(), Filter::Completed);
    assert_eq!(ctl.api.requests(), vec![Request::List(Filter::Completed)]);
    let marked: Vec<_> = ctl
        .surface
        .events()
        .into_iter()
        .filter(|e| matches!(e, Event::ActiveFilter(_)))
        .collect();
    assert_eq!(marked, vec![Event::ActiveFilter(Filter::Completed)]);
}

#[tokio::test]
async fn test_load_renders_in_server_order() {
    let tasks = vec![
        make_task(5, "Newest", false),
        make_task(1, "<script>alert(1)</script>", true),
        make_task(3, "Middle", false),
    ];
    let ctl = controller(FakeApi::with_tasks(tasks));

    ctl.list().await;

    let view = ctl.surface.last_shown().expect("list rendered");
    assert!(!view.shows_placeholder());
    let titles: Vec<_> = view.cards().iter().map(|c| c.task.title.as_str()).collect();
    assert_eq!(titles, vec!["Newest", "<script>alert(1)</script>", "Middle"]);
}

#[tokio::test]
async fn test_load_empty_shows_placeholder() {
    let ctl = controller(FakeApi::default());

    ctl.list().await;

    assert_eq!(ctl.surface.last_shown(), Some(ListView::Empty));
}

#[tokio::test]
async fn test_loading_cleared_on_success_and_failure() {
    let ctl = controller(FakeApi::with_tasks(vec![make_task(1, "One", false)]));
    ctl.list().await;
    let events = ctl.surface.events();
    assert_eq!(events.first(), Some(&Event::BeginLoading));
    assert_eq!(events.last(), Some(&Event::EndLoading));

    ctl.surface.clear();
    ctl.api.fail_list.set(true);
    ctl.list().await;
    assert_eq!(
        ctl.surface.events(),
        vec![
            Event::BeginLoading,
            Event::Notify(MSG_LOAD_FAILED.to_string(), ToastKind::Error),
            Event::EndLoading,
        ]
    );
}

#[tokio::test]
async fn test_init_runs_once() {
    let ctl = controller(FakeApi::default());

    ctl.init().await;
    ctl.init().await;

    assert_eq!(ctl.api.requests(), vec![Request::List(Filter::All)]);
    assert!(ctl.surface.has(&Event::ActiveFilter(Filter::All)));
}

// ========================
// Overlapping Operations
// ========================

#[tokio::test]
async fn test_overlapping_operations_run_one_at_a_time() {
    let (release, gate) = oneshot::channel();
    let api = FakeApi::default();
    *api.delete_gate.borrow_mut() = Some(gate);
    let ctl = controller(api);

    let watcher = async {
        // second delete is queued behind the first
        assert_eq!(ctl.api.requests(), vec![Request::Delete(1)]);
        release.send(()).unwrap();
    };
    futures::join!(ctl.delete(1), ctl.delete(2), watcher);

    assert_eq!(
        ctl.api.requests(),
        vec![
            Request::Delete(1),
            Request::List(Filter::All),
            Request::Delete(2),
            Request::List(Filter::All),
        ]
    );
    assert_eq!(ctl.surface.notifications().len(), 2);
}

//! Composition scenarios: owners declaring slots, resolution order,
//! replacement, deferral and stacks.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

use spark_subviews::prelude::*;
use spark_subviews::{
    advance_transitions, compute_layout, reset_transitions, resolve_slots, Enclosed, Frame,
    LifecycleEvent, SlotError,
};

type Log = Rc<RefCell<Vec<String>>>;

fn log() -> Log {
    Rc::new(RefCell::new(Vec::new()))
}

fn push(log: &Log, entry: impl Into<String>) {
    log.borrow_mut().push(entry.into());
}

fn names(views: &[View]) -> Vec<String> {
    views.iter().map(|v| v.name().to_string()).collect()
}

// =============================================================================
// Label and button
// =============================================================================

struct LabelButton {
    view: View,
    label: Subview<LabelButton, View>,
    button: Subview<LabelButton, View>,
}

impl SuperviewContainer for LabelButton {
    type Superview = View;

    fn default_superview(&self) -> View {
        self.view.clone()
    }
}

impl Enclosing for LabelButton {
    fn declare<'a>(&'a self, slots: &mut SlotRegistry<'a>) {
        slots.slot(&self.label).slot(&self.button);
    }
}

#[test]
fn test_label_and_button_attach_once_in_order() {
    let configured = log();
    let (a, b) = (configured.clone(), configured.clone());

    let owner = enclose(LabelButton {
        view: View::named("owner"),
        label: Subview::new(View::named("label"))
            .layout(LayoutOption::pin())
            .configure_value(move |v| push(&a, v.name())),
        button: Subview::with(|_: &LabelButton| View::named("button"))
            .layout(LayoutOption::pin())
            .configure_value(move |v| push(&b, v.name())),
    });
    resolve_all(&*owner);

    assert_eq!(names(&owner.view.subviews()), ["label", "button"]);
    assert_eq!(*configured.borrow(), ["label", "button"]);
}

#[test]
fn test_pinned_label_fills_owner() {
    let owner = enclose(LabelButton {
        view: View::named("owner"),
        label: Subview::new(View::named("label")).layout(LayoutOption::pin_inset(2.0)),
        button: Subview::new(View::named("button")).layout(LayoutOption::all([
            LayoutOption::pin_top(0.0),
            LayoutOption::pin_leading(0.0),
            LayoutOption::size(10.0, 4.0),
        ])),
    });
    LayoutOption::size(40.0, 20.0).apply(&owner.view);

    let layout = compute_layout(&owner.view, 40.0, 20.0).unwrap();

    assert_eq!(
        layout.frame(&owner.label.get()).unwrap(),
        Frame { x: 2.0, y: 2.0, width: 36.0, height: 16.0 }
    );
    assert_eq!(layout.frame(&owner.button.get()).unwrap().width, 10.0);
}

// =============================================================================
// Single materialization and deferral
// =============================================================================

#[test]
fn test_factory_runs_once_across_passes() {
    let calls = Rc::new(Cell::new(0));
    let calls_clone = calls.clone();

    let owner = enclose(LabelButton {
        view: View::new(),
        label: Subview::with(move |_: &LabelButton| {
            calls_clone.set(calls_clone.get() + 1);
            View::new()
        }),
        button: Subview::new(View::new()),
    });
    for _ in 0..3 {
        resolve_all(&*owner);
    }

    assert_eq!(calls.get(), 1);
    assert_eq!(owner.view.subview_count(), 2);
}

#[test]
fn test_deferred_factory_retries_on_next_pass() {
    let ready = Rc::new(Cell::new(false));
    let ready_clone = ready.clone();

    let owner = enclose(LabelButton {
        view: View::new(),
        label: Subview::lazy(move |_: &LabelButton| ready_clone.get().then(|| View::named("label"))),
        button: Subview::new(View::named("button")),
    });
    assert_eq!(names(&owner.view.subviews()), ["button"]);
    assert!(!owner.label.is_resolved());

    ready.set(true);
    resolve_all(&*owner);
    assert_eq!(names(&owner.view.subviews()), ["button", "label"]);

    resolve_all(&*owner);
    assert_eq!(owner.view.subview_count(), 2);
}

#[test]
#[should_panic(expected = "before it was resolved")]
fn test_reading_unresolved_slot_panics() {
    let owner = LabelButton {
        view: View::new(),
        label: Subview::deferred().named("label"),
        button: Subview::new(View::new()),
    };
    let _ = owner.label.get();
}

#[test]
#[should_panic(expected = "trying to access slot `label` before it was resolved")]
fn test_reading_eager_slot_before_resolution_panics() {
    let owner = LabelButton {
        view: View::new(),
        label: Subview::new(View::named("label")).named("label"),
        button: Subview::new(View::new()),
    };
    assert_eq!(owner.view.subview_count(), 0);
    let _ = owner.label.get();
}

#[test]
fn test_try_get_reports_slot_name() {
    let owner = enclose(LabelButton {
        view: View::new(),
        label: Subview::deferred().named("label"),
        button: Subview::new(View::new()),
    });

    let err = owner.label.try_get().unwrap_err();
    assert_eq!(err, SlotError::Unresolved { slot: "label".into() });
    assert_eq!(err.to_string(), "trying to access slot `label` before it was resolved");
}

#[test]
fn test_resolve_slots_takes_an_explicit_list() {
    let owner = LabelButton {
        view: View::new(),
        label: Subview::new(View::named("label")),
        button: Subview::new(View::named("button")),
    };

    resolve_slots(&owner, &[&owner.button as &dyn Enclosed]);

    assert_eq!(names(&owner.view.subviews()), ["button"]);
}

// =============================================================================
// Nested composites
// =============================================================================

struct Panel {
    view: View,
    inner: Subview<Panel, View>,
}

impl SuperviewContainer for Panel {
    type Superview = View;

    fn default_superview(&self) -> View {
        self.view.clone()
    }
}

impl Enclosing for Panel {
    fn declare<'a>(&'a self, slots: &mut SlotRegistry<'a>) {
        slots.slot(&self.inner);
    }
}

impl ViewLike for Panel {
    fn view(&self) -> &View {
        &self.view
    }

    fn enclosing(&self) -> Option<&dyn Enclosing> {
        Some(self)
    }
}

fn panel(name: &str, inner: &str, log: &Log) -> Rc<Panel> {
    let log = log.clone();
    Rc::new(Panel {
        view: View::named(name),
        inner: Subview::new(View::named(inner)).configure_value(move |v| push(&log, v.name())),
    })
}

struct Page {
    view: View,
    a: Subview<Page, View>,
    b: Subview<Page, Rc<Panel>>,
    d: Subview<Page, View>,
}

impl SuperviewContainer for Page {
    type Superview = View;

    fn default_superview(&self) -> View {
        self.view.clone()
    }
}

impl Enclosing for Page {
    fn declare<'a>(&'a self, slots: &mut SlotRegistry<'a>) {
        slots.slot(&self.a).slot(&self.b).slot(&self.d);
    }
}

fn logged<V: ViewLike + Clone + 'static>(slot: Subview<Page, V>, log: &Log) -> Subview<Page, V> {
    let log = log.clone();
    slot.configure_value(move |v| push(&log, v.view().name()))
}

fn page(log: &Log) -> Rc<Page> {
    enclose(Page {
        view: View::named("page"),
        a: logged(Subview::new(View::named("a")), log),
        b: logged(Subview::new(panel("b", "c", log)), log),
        d: logged(Subview::new(View::named("d")), log),
    })
}

#[test]
fn test_nested_slots_resolve_depth_first() {
    let order = log();
    let page = page(&order);

    assert_eq!(*order.borrow(), ["a", "b", "c", "d"]);
    assert_eq!(names(&page.view.subviews()), ["a", "b", "d"]);
    assert_eq!(names(&page.b.get().view.subviews()), ["c"]);
}

#[test]
fn test_replacement_runs_old_then_attach_then_new() {
    let order = log();
    let page = page(&order);
    order.borrow_mut().clear();

    let old = page.b.get();
    let events = order.clone();
    let page_view = page.view.clone();
    let behavior = ReplaceBehavior::new(
        {
            let events = events.clone();
            let page_view = page_view.clone();
            move |new: &Rc<Panel>| {
                assert!(new.view.is_descendant_of(&page_view));
                assert!(new.inner.get().is_descendant_of(&new.view));
                push(&events, "new effect");
            }
        },
        {
            let events = events.clone();
            move |old: &Rc<Panel>| {
                assert!(old.view.is_descendant_of(&page_view));
                old.detach();
                push(&events, "old effect");
            }
        },
    );

    page.b.replace(panel("b2", "c2", &order), &page, &behavior);

    assert_eq!(*order.borrow(), ["old effect", "b2", "c2", "new effect"]);
    assert!(old.view.superview().is_none());
    assert_eq!(names(&page.view.subviews()), ["a", "d", "b2"]);
}

// =============================================================================
// Inherited slots
// =============================================================================

struct Base {
    view: View,
    footer: Subview<Base, View>,
}

impl SuperviewContainer for Base {
    type Superview = View;

    fn default_superview(&self) -> View {
        self.view.clone()
    }
}

impl Enclosing for Base {
    fn declare<'a>(&'a self, slots: &mut SlotRegistry<'a>) {
        slots.slot(&self.footer);
    }
}

struct Derived {
    base: Base,
    title: Subview<Derived, View>,
}

impl SuperviewContainer for Derived {
    type Superview = View;

    fn default_superview(&self) -> View {
        self.base.view.clone()
    }
}

impl Enclosing for Derived {
    fn declare<'a>(&'a self, slots: &mut SlotRegistry<'a>) {
        slots.inherit(&self.base).slot(&self.title);
    }
}

#[test]
fn test_own_slots_resolve_before_inherited() {
    let derived = enclose(Derived {
        base: Base {
            view: View::named("root"),
            footer: Subview::new(View::named("footer")).named("footer"),
        },
        title: Subview::new(View::named("title")).named("title"),
    });

    assert_eq!(names(&derived.base.view.subviews()), ["title", "footer"]);
    assert_eq!(SlotRegistry::collect(&*derived).names(), ["title", "footer"]);
}

// =============================================================================
// Stacks
// =============================================================================

struct BoldLabel {
    view: View,
    text: String,
    label: Subview<BoldLabel, View>,
}

impl BoldLabel {
    fn new(text: &str) -> Rc<Self> {
        Rc::new(Self {
            view: View::named(format!("bold-{text}")),
            text: text.to_string(),
            label: Subview::with(|bold: &BoldLabel| View::named(bold.text.clone()))
                .layout(LayoutOption::pin()),
        })
    }
}

impl SuperviewContainer for BoldLabel {
    type Superview = View;

    fn default_superview(&self) -> View {
        self.view.clone()
    }
}

impl Enclosing for BoldLabel {
    fn declare<'a>(&'a self, slots: &mut SlotRegistry<'a>) {
        slots.slot(&self.label);
    }
}

impl ViewLike for BoldLabel {
    fn view(&self) -> &View {
        &self.view
    }

    fn enclosing(&self) -> Option<&dyn Enclosing> {
        Some(self)
    }
}

struct BoldStack {
    view: View,
    line1: String,
    line2: String,
    stack: Subview<BoldStack, StackView>,
    line1_label: ArrangedSubview<BoldStack, Rc<BoldLabel>>,
    line2_label: ArrangedSubview<BoldStack, Rc<BoldLabel>>,
}

impl BoldStack {
    fn new(line1: &str, line2: &str) -> Rc<Self> {
        enclose(Self {
            view: View::named("bold-stack"),
            line1: line1.to_string(),
            line2: line2.to_string(),
            stack: Subview::new(StackView::vertical()).layout(LayoutOption::pin()),
            line1_label: ArrangedSubview::with(|owner: &BoldStack| BoldLabel::new(&owner.line1))
                .of(|owner: &BoldStack| owner.stack.get()),
            line2_label: ArrangedSubview::with(|owner: &BoldStack| BoldLabel::new(&owner.line2))
                .of(|owner: &BoldStack| owner.stack.get()),
        })
    }
}

impl SuperviewContainer for BoldStack {
    type Superview = View;

    fn default_superview(&self) -> View {
        self.view.clone()
    }
}

impl Enclosing for BoldStack {
    fn declare<'a>(&'a self, slots: &mut SlotRegistry<'a>) {
        slots.slot(&self.stack).slot(&self.line1_label).slot(&self.line2_label);
    }
}

#[test]
fn test_stack_arranges_two_lines() {
    let bold = BoldStack::new("first", "second");
    let stack = bold.stack.get();

    assert_eq!(names(&stack.arranged_subviews()), ["bold-first", "bold-second"]);
    assert_eq!(bold.line1_label.get().label.get().name(), "first");
    assert_eq!(bold.line2_label.get().label.get().name(), "second");
}

#[test]
fn test_overwriting_arranged_slot_keeps_count() {
    let bold = BoldStack::new("first", "second");

    let result = bold.line1_label.set(BoldLabel::new("other"), &bold);

    assert!(matches!(result, Err(SlotError::ArrangedReplace { .. })));
    assert_eq!(bold.stack.get().arranged_count(), 2);
    assert_eq!(bold.line1_label.get().text, "first");
}

struct Lines {
    view: View,
    lines: Vec<String>,
    stack: Subview<Lines, StackView>,
}

impl SuperviewContainer for Lines {
    type Superview = View;

    fn default_superview(&self) -> View {
        self.view.clone()
    }
}

impl Enclosing for Lines {
    fn declare<'a>(&'a self, slots: &mut SlotRegistry<'a>) {
        slots.slot(&self.stack);
    }
}

#[test]
fn test_stack_factory_slot() {
    let lines = enclose(Lines {
        view: View::new(),
        lines: vec!["x".into(), "y".into(), "z".into()],
        stack: Subview::with(horizontal_stack(|lines: &Lines| {
            lines.lines.iter().map(View::named).collect()
        })),
    });

    let stack = lines.stack.get();
    assert_eq!(stack.axis(), Axis::Horizontal);
    assert_eq!(names(&stack.arranged_subviews()), ["x", "y", "z"]);
    assert!(stack.as_view().is_descendant_of(&lines.view));
}

// =============================================================================
// Child controllers
// =============================================================================

struct Detail {
    controller: Controller,
    body: Subview<Detail, View>,
}

impl AsController for Detail {
    fn controller(&self) -> &Controller {
        &self.controller
    }
}

impl SuperviewContainer for Detail {
    type Superview = View;

    fn default_superview(&self) -> View {
        self.controller.root_view().clone()
    }
}

impl Enclosing for Detail {
    fn declare<'a>(&'a self, slots: &mut SlotRegistry<'a>) {
        slots.slot(&self.body);
    }
}

impl ViewLike for Detail {
    fn view(&self) -> &View {
        self.controller.root_view()
    }

    fn detach(&self) {
        self.controller.detach_from_parent();
    }

    fn enclosing(&self) -> Option<&dyn Enclosing> {
        Some(self)
    }
}

struct Screen {
    controller: Controller,
    detail: Child<Screen, Rc<Detail>>,
}

impl AsController for Screen {
    fn controller(&self) -> &Controller {
        &self.controller
    }
}

impl SuperviewContainer for Screen {
    type Superview = View;

    fn default_superview(&self) -> View {
        self.controller.root_view().clone()
    }
}

impl Enclosing for Screen {
    fn declare<'a>(&'a self, slots: &mut SlotRegistry<'a>) {
        slots.slot(&self.detail);
    }
}

fn detail(name: &str) -> Rc<Detail> {
    Rc::new(Detail {
        controller: Controller::named(name),
        body: Subview::new(View::named(format!("{name}-body"))),
    })
}

fn record(controller: &Controller) -> Rc<RefCell<Vec<LifecycleEvent>>> {
    let events = Rc::new(RefCell::new(Vec::new()));
    let events_clone = events.clone();
    controller.on_lifecycle(move |_, event| events_clone.borrow_mut().push(event));
    events
}

#[test]
fn test_child_controller_composite() {
    let first = detail("first");
    let events = record(&first.controller);

    let screen = enclose(Screen {
        controller: Controller::named("screen"),
        detail: Child::new(first.clone()),
    });

    let parent = Some(screen.controller.id());
    assert_eq!(
        *events.borrow(),
        [
            LifecycleEvent::WillMoveToParent(parent),
            LifecycleEvent::DidMoveToParent(parent),
        ]
    );
    assert_eq!(first.controller.parent(), Some(screen.controller.clone()));
    assert_eq!(names(&first.controller.root_view().subviews()), ["first-body"]);
}

#[test]
fn test_child_replacement_moves_controllers() {
    let screen = enclose(Screen {
        controller: Controller::named("screen"),
        detail: Child::new(detail("first")),
    });
    let first = screen.detail.get();
    let second = detail("second");

    screen.detail.set(second.clone(), &screen);

    assert!(first.controller.parent().is_none());
    assert_eq!(screen.controller.children(), vec![second.controller.clone()]);
    assert_eq!(names(&screen.controller.root_view().subviews()), ["second"]);
    assert!(second.body.is_resolved());
}

// =============================================================================
// Timed replacement
// =============================================================================

#[test]
fn test_cross_fade_replacement_detaches_after_fade() {
    reset_transitions();
    let owner = enclose(LabelButton {
        view: View::new(),
        label: Subview::new(View::named("old")).on_replace(ReplaceBehavior::cross_fade()),
        button: Subview::new(View::new()),
    });
    let old = owner.label.get();

    owner.label.set(View::named("new"), &owner);
    let new = owner.label.get();

    assert_eq!(new.alpha(), 0.0);
    assert!(old.superview().is_some());

    advance_transitions(Duration::from_millis(200));
    assert!(new.alpha() > 0.0 && new.alpha() < 1.0);

    advance_transitions(Duration::from_millis(200));
    assert!(old.superview().is_none());
    assert_eq!(new.alpha(), 1.0);
}

#[test]
fn test_hide_replacement_keeps_old_hidden() {
    let owner = enclose(LabelButton {
        view: View::new(),
        label: Subview::new(View::named("old")).on_replace(ReplaceBehavior::hide()),
        button: Subview::new(View::new()),
    });
    let old = owner.label.get();

    owner.label.set(View::named("new"), &owner);

    assert!(old.is_hidden());
    assert!(!owner.label.get().is_hidden());
    assert_eq!(owner.view.subview_count(), 3);
}

//! Interaction tests
//!
//! Pointer and keyboard events are dispatched to the mounted `ToolboxGrid`
//! through the Dioxus runtime, then the re-rendered markup is inspected.

use std::any::Any;
use std::rc::Rc;

use cloudfolio_core::{Portfolio, ToolboxEntry};
use cloudfolio_ui::{ToolboxGrid, ToolboxGridProps};
use dioxus::dioxus_core::{ElementId, Event, Mutation, Mutations};
use dioxus::prelude::*;
use dioxus_html::{
    PlatformEventData, SerializedHtmlEventConverter, SerializedKeyboardData, SerializedMouseData,
};

// ============================================================================
// Test Utilities
// ============================================================================

/// A mounted dom plus the element ids of every `click`/`keydown` listener,
/// in creation order.
struct Harness {
    dom: VirtualDom,
    clicks: Vec<ElementId>,
    keydowns: Vec<ElementId>,
}

impl Harness {
    fn mount(mut dom: VirtualDom) -> Self {
        dioxus_html::set_event_converter(Box::new(SerializedHtmlEventConverter));

        let mutations = dom.rebuild_to_vec();
        let mut harness = Self {
            dom,
            clicks: Vec::new(),
            keydowns: Vec::new(),
        };
        harness.collect(mutations);
        harness
    }

    fn canonical_grid() -> Self {
        Self::mount(VirtualDom::new_with_props(
            ToolboxGrid,
            ToolboxGridProps {
                entries: Portfolio::canonical().toolbox,
            },
        ))
    }

    fn collect(&mut self, mutations: Mutations) {
        for edit in mutations.edits {
            if let Mutation::NewEventListener { name, id } = edit {
                match name.as_str() {
                    "click" => self.clicks.push(id),
                    "keydown" => self.keydowns.push(id),
                    _ => {}
                }
            }
        }
    }

    /// Dispatch one event and re-render. Returns whether the default action
    /// is still enabled afterwards.
    fn dispatch(&mut self, name: &str, data: PlatformEventData, target: ElementId) -> bool {
        let event = Event::new(Rc::new(data) as Rc<dyn Any>, true);
        self.dom.runtime().handle_event(name, event.clone(), target);

        let mutations = self.dom.render_immediate_to_vec();
        self.collect(mutations);
        event.default_action_enabled()
    }

    fn click(&mut self, listener: usize) -> bool {
        let target = self.clicks[listener];
        let data = PlatformEventData::new(Box::<SerializedMouseData>::default());
        self.dispatch("click", data, target)
    }

    fn press(&mut self, listener: usize, key: Key, code: Code) -> bool {
        let target = self.keydowns[listener];
        let data = PlatformEventData::new(Box::new(SerializedKeyboardData::new(
            key,
            code,
            Location::Standard,
            false,
            Modifiers::empty(),
            false,
        )));
        self.dispatch("keydown", data, target)
    }

    /// `aria-pressed` of every card, in document order
    fn pressed(&self) -> Vec<bool> {
        let html = dioxus_ssr::render(&self.dom);
        html.split(r#"aria-pressed=""#)
            .skip(1)
            .map(|rest| rest.starts_with("true"))
            .collect()
    }

    fn pressed_indexes(&self) -> Vec<usize> {
        self.pressed()
            .iter()
            .enumerate()
            .filter(|(_, pressed)| **pressed)
            .map(|(index, _)| index)
            .collect()
    }
}

fn space() -> Key {
    Key::Character(" ".to_string())
}

// ============================================================================
// Pointer Tests
// ============================================================================

#[test]
fn every_card_listens_for_click_and_keydown() {
    let harness = Harness::canonical_grid();
    assert_eq!(harness.clicks.len(), 7);
    assert_eq!(harness.keydowns.len(), 7);
    assert_eq!(harness.pressed(), vec![false; 7]);
}

#[test]
fn click_flips_only_that_card() {
    let mut harness = Harness::canonical_grid();

    harness.click(2);
    assert_eq!(harness.pressed_indexes(), vec![2]);

    harness.click(5);
    assert_eq!(harness.pressed_indexes(), vec![2, 5]);

    harness.click(2);
    assert_eq!(harness.pressed_indexes(), vec![5]);
}

// ============================================================================
// Keyboard Tests
// ============================================================================

#[test]
fn enter_and_space_act_like_click() {
    let mut harness = Harness::canonical_grid();
    harness.click(2);

    harness.press(4, space(), Code::Space);
    assert_eq!(harness.pressed_indexes(), vec![2, 4]);

    harness.press(4, Key::Enter, Code::Enter);
    assert_eq!(harness.pressed_indexes(), vec![2]);

    harness.press(6, Key::Character("Spacebar".to_string()), Code::Space);
    assert_eq!(harness.pressed_indexes(), vec![2, 6]);
}

#[test]
fn other_keys_are_ignored() {
    let mut harness = Harness::canonical_grid();

    harness.press(0, Key::Character("a".to_string()), Code::KeyA);
    harness.press(0, Key::Tab, Code::Tab);
    assert!(harness.pressed_indexes().is_empty());
}

#[test]
fn space_suppresses_the_page_scroll() {
    let mut harness = Harness::canonical_grid();

    assert!(!harness.press(1, space(), Code::Space));
    assert!(harness.press(1, Key::Enter, Code::Enter));
    assert!(harness.press(1, Key::Character("a".to_string()), Code::KeyA));
}

// ============================================================================
// Changing Entries
// ============================================================================

/// Toolbox grid followed by a button that appends one entry
fn growing_toolbox() -> Element {
    let mut entries = use_signal(|| Portfolio::canonical().toolbox);

    rsx! {
        ToolboxGrid { entries: entries() }
        button {
            onclick: move |_| {
                entries.write().push(ToolboxEntry::new("+", "Extra", "Added later", "bg-sky-50"));
            },
            "Add"
        }
    }
}

#[test]
fn cards_added_after_mount_flip() {
    let mut harness = Harness::mount(VirtualDom::new(growing_toolbox));
    assert_eq!(harness.clicks.len(), 8);

    // Listener 7 is the button; the new card's listener lands after it
    harness.click(7);
    assert_eq!(harness.pressed().len(), 8);
    assert_eq!(harness.clicks.len(), 9);

    harness.click(8);
    assert_eq!(harness.pressed_indexes(), vec![7]);

    harness.click(0);
    assert_eq!(harness.pressed_indexes(), vec![0, 7]);
}

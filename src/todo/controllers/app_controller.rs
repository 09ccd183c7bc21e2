//! # Application Controller
//!
//! Owns the terminal streams and the todo controller. Reads key presses,
//! turns them into element events on the focused element, lets the todo
//! controller handle them and repaints the page after every interaction.

use super::key_bindings::{map_key, KeyAction};
use super::todo_controller::TodoController;
use crate::todo::dom::{Document, DomEvent, ElementId, ElementKind, FocusKey, Key, Role};
use crate::todo::io::{EventStream, RenderStream};
use crate::todo::models::{parse_seed, TodoModel};
use crate::todo::views::{TerminalConfirm, TerminalRenderer, ViewRenderer};
use crate::{cmd_args::CommandLineArgs, config};
use anyhow::{Context, Result};
use crossterm::event::{Event, KeyEvent};
use std::time::Duration;

const POLL_INTERVAL: Duration = Duration::from_millis(100);

pub struct AppController<ES: EventStream, RS: RenderStream> {
    todo: TodoController,
    view_renderer: TerminalRenderer<RS>,
    event_stream: ES,
    should_quit: bool,
}

impl<ES: EventStream, RS: RenderStream> AppController<ES, RS> {
    /// Create the application with injected I/O streams
    pub fn with_io_streams(
        cmd_args: CommandLineArgs,
        event_stream: ES,
        render_stream: RS,
    ) -> Result<Self> {
        let seed_json = config::get_seed_json(cmd_args.seed());
        let seed = parse_seed(&seed_json)?;
        tracing::debug!("Seeding list with {} items", seed.len());

        let mut todo = TodoController::new(TodoModel::from_seed(seed))?;
        let input = todo.view().handles().new_item_input;
        todo.document_mut().focus(input)?;

        let view_renderer = TerminalRenderer::with_render_stream(render_stream)?;

        Ok(Self {
            todo,
            view_renderer,
            event_stream,
            should_quit: false,
        })
    }

    pub fn todo(&self) -> &TodoController {
        &self.todo
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Run until the user quits or the event stream runs dry
    pub fn run(&mut self) -> Result<()> {
        self.view_renderer.initialize()?;
        let result = self.event_loop();
        let cleanup = self.view_renderer.cleanup();
        result.and(cleanup)
    }

    fn event_loop(&mut self) -> Result<()> {
        self.render()?;

        while !self.should_quit {
            if self.event_stream.poll(POLL_INTERVAL)? {
                let event = self.event_stream.read()?;
                self.handle_event(event)?;
            } else if self.event_stream.is_exhausted() {
                tracing::debug!("Event stream exhausted, leaving event loop");
                break;
            }
        }
        Ok(())
    }

    fn render(&mut self) -> Result<()> {
        let counts = self.todo.model().count_items();
        self.view_renderer.render_full(self.todo.document(), counts)
    }

    /// Process one terminal event and repaint
    pub fn handle_event(&mut self, event: Event) -> Result<()> {
        match event {
            Event::Key(key_event) => {
                tracing::debug!("Received key event: {:?}", key_event);
                self.handle_key(key_event);
            }
            Event::Resize(width, height) => {
                self.view_renderer.update_size(width, height);
            }
            _ => return Ok(()),
        }

        if !self.should_quit {
            self.render()?;
        }
        Ok(())
    }

    fn focused_kind(&self) -> Option<ElementKind> {
        let document = self.todo.document();
        document
            .focused()
            .and_then(|id| document.get(id))
            .map(|element| element.kind())
    }

    fn handle_key(&mut self, key_event: KeyEvent) {
        let action = map_key(&key_event, self.focused_kind());
        let focused = self.todo.document().focused();

        let result = match (action, focused) {
            (KeyAction::Quit, _) => {
                tracing::info!("Quit requested");
                self.should_quit = true;
                Ok(())
            }
            (KeyAction::FocusNext, _) => self.move_focus(true),
            (KeyAction::FocusPrevious, _) => self.move_focus(false),
            (KeyAction::Activate, Some(target)) => self.activate(target),
            (KeyAction::InsertChar(c), Some(target)) => self.edit_text(target, Key::Char(c)),
            (KeyAction::DeleteChar, Some(target)) => self.edit_text(target, Key::Backspace),
            (KeyAction::KeyUp(key), Some(target)) => {
                self.dispatch_keeping_focus(DomEvent::key_up(target, key))
            }
            _ => Ok(()),
        };

        if let Err(e) = result {
            tracing::warn!("Failed to handle {:?}: {:#}", action, e);
        }
    }

    fn dispatch(&mut self, event: DomEvent) -> Result<()> {
        let mut confirm = TerminalConfirm::new(&mut self.event_stream, &mut self.view_renderer);
        self.todo.dispatch(&event, &mut confirm)
    }

    /// Dispatch an event, then put focus back where the user expects it
    /// if the re-render removed the focused element
    fn dispatch_keeping_focus(&mut self, event: DomEvent) -> Result<()> {
        let document = self.todo.document();
        let previous = document.focused();
        let key = previous.and_then(|id| document.focus_key(id));
        let position = previous.and_then(|id| document.focusable().iter().position(|f| *f == id));

        let result = self.dispatch(event);
        if !self.todo.document().focused().is_some_and(|id| self.todo.document().is_displayed(id))
        {
            restore_focus(self.todo.document_mut(), key, position);
        }
        result
    }

    fn activate(&mut self, target: ElementId) -> Result<()> {
        let document = self.todo.document_mut();
        let element = document.element_mut(target)?;
        let event = match element.kind() {
            ElementKind::Checkbox => {
                let checked = element.is_checked();
                element.set_checked(!checked);
                DomEvent::change(target)
            }
            _ => DomEvent::click(target),
        };
        self.dispatch_keeping_focus(event)
    }

    fn edit_text(&mut self, target: ElementId, key: Key) -> Result<()> {
        let text = self
            .todo
            .document_mut()
            .element_mut(target)
            .context("Focused input vanished")?
            .text_mut();
        match key {
            Key::Char(c) => text.push(c),
            Key::Backspace => {
                text.pop();
            }
            _ => {}
        }

        self.dispatch_keeping_focus(DomEvent::input(target))?;
        if self.todo.document().get(target).is_some() {
            self.dispatch_keeping_focus(DomEvent::key_up(target, key))?;
        }
        Ok(())
    }

    /// Move focus along the focusable elements, wrapping at the ends.
    /// The element being left receives a focus-out first.
    fn move_focus(&mut self, forward: bool) -> Result<()> {
        let document = self.todo.document();
        let order = document.focusable();
        if order.is_empty() {
            return Ok(());
        }
        let current = document.focused();
        let next = match current.and_then(|id| order.iter().position(|f| *f == id)) {
            Some(pos) if forward => (pos + 1) % order.len(),
            Some(pos) => (pos + order.len() - 1) % order.len(),
            None if forward => 0,
            None => order.len() - 1,
        };
        let target_key = document.focus_key(order[next]);

        let result = match current {
            Some(leaving) => self.dispatch(DomEvent::focus_out(leaving)),
            None => Ok(()),
        };

        let document = self.todo.document_mut();
        document.blur();
        restore_focus(document, target_key, Some(next));
        result
    }
}

/// Focus `key` if it is still displayed. Otherwise fall back to the label
/// of the same item, then to whatever now sits at `position`.
fn restore_focus(document: &mut Document, key: Option<FocusKey>, position: Option<usize>) {
    let by_key = key.and_then(|key| document.find_by_key(key));
    let by_item = key
        .filter(|key| key.item_id.is_some())
        .and_then(|key| {
            document.find_by_key(FocusKey {
                role: Role::ItemLabel,
                item_id: key.item_id,
            })
        });
    let by_position = || {
        let order = document.focusable();
        let last = order.len().checked_sub(1)?;
        Some(order[position.unwrap_or(0).min(last)])
    };

    match by_key.or(by_item).or_else(by_position) {
        Some(id) => {
            if let Err(e) = document.focus(id) {
                tracing::warn!("Failed to restore focus: {}", e);
            }
        }
        None => document.blur(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::todo::io::{MockEventStream, MockRenderStream};
    use crossterm::event::{KeyCode, KeyModifiers};

    const SEED: &str = r#"[
        { "name": "first", "done": true },
        { "name": "second", "done": false }
    ]"#;

    fn app() -> AppController<MockEventStream, MockRenderStream> {
        let args = CommandLineArgs::parse_from(["tickline", "--seed", SEED]);
        AppController::with_io_streams(args, MockEventStream::empty(), MockRenderStream::new())
            .unwrap()
    }

    fn key(app: &mut AppController<MockEventStream, MockRenderStream>, code: KeyCode) {
        app.handle_event(Event::Key(KeyEvent::new(code, KeyModifiers::NONE)))
            .unwrap();
    }

    fn type_text(app: &mut AppController<MockEventStream, MockRenderStream>, text: &str) {
        for c in text.chars() {
            key(app, KeyCode::Char(c));
        }
    }

    fn focused_role(app: &AppController<MockEventStream, MockRenderStream>) -> Option<Role> {
        let document = app.todo().document();
        document
            .focused()
            .and_then(|id| document.get(id))
            .map(|element| element.role())
    }

    fn focus_role(app: &mut AppController<MockEventStream, MockRenderStream>, role: Role) {
        for _ in 0..32 {
            if focused_role(app) == Some(role) {
                return;
            }
            key(app, KeyCode::Tab);
        }
        panic!("{:?} never received focus", role);
    }

    #[test]
    fn should_start_focused_on_new_item_input() {
        let app = app();
        assert_eq!(focused_role(&app), Some(Role::NewItemInput));
    }

    #[test]
    fn invalid_seed_should_fail_construction() {
        let args = CommandLineArgs::parse_from(["tickline", "--seed", "not json"]);
        let result =
            AppController::with_io_streams(args, MockEventStream::empty(), MockRenderStream::new());
        assert!(result.is_err());
    }

    #[test]
    fn typing_and_enter_should_create_item() {
        let mut app = app();

        type_text(&mut app, "buy milk");
        key(&mut app, KeyCode::Enter);

        let model = app.todo().model();
        assert_eq!(model.len(), 3);
        assert_eq!(model.item(2).unwrap().name(), "buy milk");
        assert_eq!(focused_role(&app), Some(Role::NewItemInput));
    }

    #[test]
    fn typing_should_reveal_create_button_and_backspace_hide_it() {
        let mut app = app();
        let button = app.todo().view().handles().create_button;

        type_text(&mut app, "x");
        assert!(app.todo().document().is_displayed(button));

        key(&mut app, KeyCode::Backspace);
        assert!(!app.todo().document().is_displayed(button));
    }

    #[test]
    fn tab_order_should_follow_page_layout() {
        let mut app = app();

        let mut roles = Vec::new();
        for _ in 0..10 {
            key(&mut app, KeyCode::Tab);
            roles.push(focused_role(&app).unwrap());
        }

        assert_eq!(
            roles,
            vec![
                Role::ToggleAll,
                Role::DeleteAll,
                Role::ItemToggle,
                Role::ItemLabel,
                Role::ItemDelete,
                Role::ItemToggle,
                Role::ItemLabel,
                Role::ItemDelete,
                Role::NewItemInput,
                Role::ToggleAll,
            ]
        );
    }

    #[test]
    fn space_on_checkbox_should_toggle_and_keep_focus() {
        let mut app = app();
        focus_role(&mut app, Role::ItemToggle);

        key(&mut app, KeyCode::Char(' '));

        assert!(!app.todo().model().item(0).unwrap().is_done());
        assert_eq!(focused_role(&app), Some(Role::ItemToggle));
        let focused = app.todo().document().focused().unwrap();
        assert_eq!(
            app.todo().document().item_id_of(focused),
            Some(app.todo().model().item(0).unwrap().id())
        );
    }

    #[test]
    fn edit_then_enter_should_rename_and_return_to_label() {
        let mut app = app();
        focus_role(&mut app, Role::ItemLabel);

        key(&mut app, KeyCode::Enter);
        assert_eq!(focused_role(&app), Some(Role::ItemInput));

        type_text(&mut app, "!");
        key(&mut app, KeyCode::Enter);

        assert_eq!(app.todo().model().item(0).unwrap().name(), "first!");
        assert_eq!(focused_role(&app), Some(Role::ItemLabel));
    }

    #[test]
    fn escape_should_discard_edit() {
        let mut app = app();
        focus_role(&mut app, Role::ItemLabel);
        key(&mut app, KeyCode::Enter);

        type_text(&mut app, "zzz");
        key(&mut app, KeyCode::Esc);

        assert_eq!(app.todo().model().item(0).unwrap().name(), "first");
        assert_eq!(focused_role(&app), Some(Role::ItemLabel));
    }

    #[test]
    fn tabbing_away_from_cleared_input_should_delete_item() {
        let mut app = app();
        focus_role(&mut app, Role::ItemLabel);
        key(&mut app, KeyCode::Enter);

        for _ in 0.."first".len() {
            key(&mut app, KeyCode::Backspace);
        }
        key(&mut app, KeyCode::Tab);

        let model = app.todo().model();
        assert_eq!(model.len(), 1);
        assert_eq!(model.item(0).unwrap().name(), "second");
        assert!(focused_role(&app).is_some());
    }

    #[test]
    fn delete_button_should_remove_item_and_move_focus_on() {
        let mut app = app();
        focus_role(&mut app, Role::ItemDelete);

        key(&mut app, KeyCode::Enter);

        assert_eq!(app.todo().model().len(), 1);
        assert_eq!(app.todo().model().item(0).unwrap().name(), "second");
        assert!(focused_role(&app).is_some());
    }

    #[test]
    fn ctrl_c_should_quit() {
        let mut app = app();

        app.handle_event(Event::Key(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL,
        )))
        .unwrap();

        assert!(app.should_quit());
    }

    #[test]
    fn resize_should_repaint_at_new_size() {
        let render = MockRenderStream::with_size((80, 24));
        let args = CommandLineArgs::parse_from(["tickline", "--seed", SEED]);
        let mut app =
            AppController::with_io_streams(args, MockEventStream::empty(), render.clone()).unwrap();

        app.handle_event(Event::Resize(80, 12)).unwrap();

        assert!(render.screen_lines()[11].contains("2 items, 1 done"));
    }
}

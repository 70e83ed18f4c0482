use crate::content::Content;
use crate::filter::{ExperiencePopover, FavoritesFilter};
use crate::images::ImageHost;
use crate::logger::Logger;
use crate::store::{SelectionKey, SelectionStore};
use crate::ui::components::{
    DialogComponent, ExperienceListComponent, ExperiencePopoverComponent, FavoritesGridComponent,
    HeadlineComponent, SelectionDialogComponent, StatusBar,
};
use crate::ui::core::{
    actions::{Action, DialogType, View},
    event_handler::EventType,
    Component,
};
use crate::ui::layout::LayoutManager;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent};
use ratatui::{layout::Rect, Frame};
use std::rc::Rc;

/// Startup options for the app component
#[derive(Debug, Clone)]
pub struct AppOptions {
    pub start_view: View,
    pub headline_prefix: String,
}

pub struct AppComponent {
    // Component composition
    headline: HeadlineComponent,
    favorites: FavoritesGridComponent,
    experience: ExperienceListComponent,
    selection_dialog: SelectionDialogComponent,
    popover: ExperiencePopoverComponent,
    dialog: DialogComponent,

    // Shared state
    store: SelectionStore,
    logger: Logger,

    // Simple UI state
    view: View,
    should_quit: bool,
}

impl AppComponent {
    pub fn new(
        content: &Content,
        store: SelectionStore,
        host: Rc<dyn ImageHost>,
        logger: Logger,
        options: AppOptions,
    ) -> Self {
        let filter = FavoritesFilter::new(Rc::clone(&content.favorites), &store);

        Self {
            headline: HeadlineComponent::new(&store, options.headline_prefix),
            favorites: FavoritesGridComponent::new(filter, host),
            experience: ExperienceListComponent::new(Rc::clone(&content.experience)),
            selection_dialog: SelectionDialogComponent::new(store.clone()),
            popover: ExperiencePopoverComponent::new(ExperiencePopover::from_entries(&content.experience)),
            dialog: DialogComponent::new(logger.clone()),
            store,
            logger,
            view: options.start_view,
            should_quit: false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn view(&self) -> View {
        self.view
    }

    pub fn store(&self) -> &SelectionStore {
        &self.store
    }

    pub fn headline(&self) -> &HeadlineComponent {
        &self.headline
    }

    pub fn favorites(&self) -> &FavoritesGridComponent {
        &self.favorites
    }

    pub fn experience(&self) -> &ExperienceListComponent {
        &self.experience
    }

    pub fn selection_dialog(&self) -> &SelectionDialogComponent {
        &self.selection_dialog
    }

    pub fn popover(&self) -> &ExperiencePopoverComponent {
        &self.popover
    }

    pub fn dialog(&self) -> &DialogComponent {
        &self.dialog
    }

    /// Handle global keyboard shortcuts that aren't component-specific
    fn handle_global_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('q') => {
                self.logger.log("Global key: 'q' - quitting application".to_string());
                Action::Quit
            }
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.logger.log("Global key: Ctrl+C - quitting application".to_string());
                Action::Quit
            }
            KeyCode::Char('?') => Action::ShowDialog(DialogType::Help),
            KeyCode::Char('G') => Action::ShowDialog(DialogType::Logs),
            KeyCode::Tab => Action::NextView,
            KeyCode::Char('t') if self.view == View::Favorites => Action::OpenSelection(SelectionKey::SelectedType),
            KeyCode::Char('y') if self.view == View::Favorites => Action::OpenSelection(SelectionKey::SelectedYear),
            KeyCode::Char('f') if self.view == View::Experience => Action::OpenFilters,
            _ => Action::None,
        }
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) -> Action {
        if self.has_modal() || self.view != View::Favorites {
            return Action::None;
        }
        self.headline.handle_mouse(mouse)
    }

    fn has_modal(&self) -> bool {
        self.dialog.is_visible() || self.selection_dialog.is_visible() || self.popover.is_visible()
    }

    fn route_key(&mut self, key: KeyEvent) -> Action {
        // Ctrl+C always quits, even from text input
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Action::Quit;
        }

        if self.dialog.is_visible() {
            return self.dialog.handle_key_events(key);
        }
        if self.selection_dialog.is_visible() {
            return self.selection_dialog.handle_key_events(key);
        }
        if self.popover.is_visible() {
            return self.popover.handle_key_events(key);
        }

        let global = self.handle_global_key(key);
        if !matches!(global, Action::None) {
            return global;
        }

        match self.view {
            View::Favorites => self.favorites.handle_key_events(key),
            View::Experience => self.experience.handle_key_events(key),
        }
    }

    /// Handle actions that survived the component hierarchy
    pub fn handle_app_action(&mut self, action: Action) -> Action {
        match action {
            Action::Quit => {
                self.should_quit = true;
                Action::None
            }
            Action::SelectionMade { key, value } => {
                self.logger.log(format!("Selection: {} = {}", key, value));
                Action::None
            }
            Action::NextView => {
                self.view = self.view.next();
                log::info!("Switched to {} view", self.view.title());
                Action::None
            }
            other => other,
        }
    }

    /// Process an event through the component hierarchy
    pub fn handle_event(&mut self, event_type: EventType) -> anyhow::Result<()> {
        let action = match event_type {
            EventType::Key(key) => self.route_key(key),
            EventType::Mouse(mouse) => self.handle_mouse(mouse),
            EventType::Resize(_, _) | EventType::Tick | EventType::Other => Action::None,
        };

        let action = self.update(action);
        self.handle_app_action(action);
        Ok(())
    }
}

impl Component for AppComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        self.route_key(key)
    }

    fn update(&mut self, action: Action) -> Action {
        // Process through component hierarchy
        let action = self.dialog.update(action);
        let action = self.selection_dialog.update(action);
        let action = self.popover.update(action);
        let action = self.favorites.update(action);
        self.experience.update(action)
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let chunks = LayoutManager::main_layout(rect);

        self.headline.render(f, chunks[0]);
        match self.view {
            View::Favorites => self.favorites.render(f, chunks[1]),
            View::Experience => self.experience.render(f, chunks[1]),
        }
        StatusBar::render(f, chunks[2], self.view);

        // Overlays on top, in stacking order
        self.popover.render(f, chunks[1]);
        self.selection_dialog.render(f, rect);
        if self.dialog.is_visible() {
            self.dialog.render(f, rect);
        }
    }
}

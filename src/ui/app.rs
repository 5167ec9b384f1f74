use crate::catalog::{CatalogItem, ItemId};
use crate::config::Config;
use crate::ui::browse::{BrowseIntent, BrowseReducer, BrowseState};
use crate::ui::confirm::{ConfirmIntent, ConfirmReducer, ConfirmState};
use crate::ui::editor::{EditorIntent, EditorReducer, EditorState, SaveTicket};
use crate::ui::mvi::Reducer;
use crate::ui::notify::Notifications;
use crate::ui::page::Page;
use crate::ui::views::ProfileTab;
use crate::ui::worker::{StoreEvent, UiCommand, UiCommandSender};

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

pub struct App {
    should_quit: bool,
    page: Page,
    /// Last list received from the store. Replaced wholesale on every fetch.
    items: Vec<CatalogItem>,
    /// True until the first fetch completes, successfully or not.
    loading: bool,
    catalog: BrowseState,
    admin: BrowseState,
    editor: EditorState,
    confirm: ConfirmState,
    notifications: Notifications,
    profile_tab: ProfileTab,
    /// Next ticket handed to an editor save.
    next_save: SaveTicket,
    command_sender: Option<UiCommandSender>,
}

impl App {
    pub fn new(config: &Config) -> Self {
        Self {
            should_quit: false,
            page: config.ui.start_page,
            items: Vec::new(),
            loading: true,
            catalog: BrowseState::default(),
            admin: BrowseState::default(),
            editor: EditorState::default(),
            confirm: ConfirmState::default(),
            notifications: Notifications::new(config.ui.notification_ticks),
            profile_tab: ProfileTab::default(),
            next_save: 1,
            command_sender: None,
        }
    }

    /// Connect the store worker. A list page shown at startup fetches now.
    pub fn attach_store(&mut self, sender: UiCommandSender) {
        self.command_sender = Some(sender);
        if self.page.shows_items() {
            self.request_fetch();
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn page(&self) -> Page {
        self.page
    }

    /// Switch pages. Entering the catalog or admin page re-fetches the list.
    pub fn navigate(&mut self, page: Page) {
        if self.page == page {
            return;
        }
        self.page = page;
        if page.shows_items() {
            self.request_fetch();
        }
    }

    pub fn items(&self) -> &[CatalogItem] {
        &self.items
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn notifications(&self) -> &Notifications {
        &self.notifications
    }

    pub fn dismiss_notification(&mut self) {
        self.notifications.dismiss_latest();
    }

    pub fn on_tick(&mut self) {
        self.notifications.tick();
    }

    // ========================================================================
    // List browsing (MVI pattern, one state per list page)
    // ========================================================================

    pub fn browse(&self, page: Page) -> &BrowseState {
        match page {
            Page::Admin => &self.admin,
            _ => &self.catalog,
        }
    }

    /// Filtered and sorted list as shown on `page`.
    pub fn visible_items(&self, page: Page) -> Vec<CatalogItem> {
        self.browse(page).filter.apply(&self.items)
    }

    pub fn selected_item(&self, page: Page) -> Option<CatalogItem> {
        let selected = self.browse(page).selected;
        self.visible_items(page).into_iter().nth(selected)
    }

    /// Dispatch to the browse state of the current page.
    pub fn dispatch_browse(&mut self, intent: BrowseIntent) {
        match self.page {
            Page::Admin => {
                dispatch_mvi!(self, admin, BrowseReducer, intent);
            }
            _ => {
                dispatch_mvi!(self, catalog, BrowseReducer, intent);
            }
        }
    }

    pub fn move_selection(&mut self, down: bool) {
        let visible = self.visible_items(self.page).len();
        if down {
            self.dispatch_browse(BrowseIntent::MoveDown { visible });
        } else {
            self.dispatch_browse(BrowseIntent::MoveUp { visible });
        }
    }

    pub fn is_searching(&self) -> bool {
        self.page.shows_items() && self.browse(self.page).searching
    }

    // ========================================================================
    // Editor dialog (MVI pattern)
    // ========================================================================

    pub fn editor(&self) -> &EditorState {
        &self.editor
    }

    pub fn dispatch_editor(&mut self, intent: EditorIntent) {
        dispatch_mvi!(self, editor, EditorReducer, intent);
    }

    pub fn open_create(&mut self) {
        self.dispatch_editor(EditorIntent::OpenCreate);
    }

    pub fn open_edit_selected(&mut self) {
        if let Some(item) = self.selected_item(Page::Admin) {
            self.dispatch_editor(EditorIntent::OpenEdit { item });
        }
    }

    /// Validate the form and send a create or update.
    ///
    /// The dialog stays open until the store accepts the mutation. Only one
    /// save per dialog session is in flight at a time.
    pub fn submit_editor(&mut self) -> bool {
        if self.editor.is_saving() {
            return false;
        }
        let Some(form) = self.editor.form() else {
            return false;
        };
        let draft = match form.to_draft() {
            Ok(draft) => draft,
            Err(err) => {
                self.notifications.warning(err.to_string());
                return false;
            }
        };
        let ticket = self.next_save;
        let command = match self.editor.editing_id() {
            Some(id) => UiCommand::UpdateItem {
                item: draft.with_id(id),
                ticket,
            },
            None => UiCommand::CreateItem { draft, ticket },
        };
        if !self.send_command(command) {
            return false;
        }
        self.next_save += 1;
        self.dispatch_editor(EditorIntent::Saving { ticket });
        true
    }

    // ========================================================================
    // Delete confirmation (MVI pattern)
    // ========================================================================

    pub fn confirm(&self) -> &ConfirmState {
        &self.confirm
    }

    pub fn dispatch_confirm(&mut self, intent: ConfirmIntent) {
        dispatch_mvi!(self, confirm, ConfirmReducer, intent);
    }

    /// Ask before deleting the selected admin row. Sends nothing.
    pub fn ask_delete_selected(&mut self) {
        if let Some(item) = self.selected_item(Page::Admin) {
            self.ask_delete(item.id, item.name);
        }
    }

    pub fn ask_delete(&mut self, id: ItemId, name: String) {
        self.dispatch_confirm(ConfirmIntent::Ask { id, name });
    }

    /// The only path that issues a delete.
    pub fn accept_delete(&mut self) -> bool {
        let Some(id) = self.confirm.pending_id() else {
            return false;
        };
        self.dispatch_confirm(ConfirmIntent::Accept);
        self.send_command(UiCommand::DeleteItem(id))
    }

    pub fn cancel_delete(&mut self) {
        self.dispatch_confirm(ConfirmIntent::Cancel);
    }

    // ========================================================================
    // Profile
    // ========================================================================

    pub fn profile_tab(&self) -> ProfileTab {
        self.profile_tab
    }

    pub fn cycle_profile_tab(&mut self, forward: bool) {
        self.profile_tab = if forward {
            self.profile_tab.next()
        } else {
            self.profile_tab.prev()
        };
    }

    // ========================================================================
    // Store round-trips
    // ========================================================================

    pub fn request_fetch(&mut self) -> bool {
        self.send_command(UiCommand::FetchItems)
    }

    pub fn on_store_event(&mut self, event: StoreEvent) {
        match event {
            StoreEvent::ItemsLoaded(items) => {
                self.items = items;
                self.loading = false;
                let visible = self.visible_items(Page::Catalog).len();
                dispatch_mvi!(self, catalog, BrowseReducer, BrowseIntent::Clamp { visible });
                let visible = self.visible_items(Page::Admin).len();
                dispatch_mvi!(self, admin, BrowseReducer, BrowseIntent::Clamp { visible });
            }
            StoreEvent::FetchFailed(message) => {
                self.loading = false;
                self.notifications
                    .error(format!("Failed to load skins: {message}"));
            }
            StoreEvent::MutationSucceeded(mutation) => {
                if let Some(ticket) = mutation.ticket() {
                    self.dispatch_editor(EditorIntent::Saved { ticket });
                }
                self.notifications.success(mutation.success_message());
                self.request_fetch();
            }
            StoreEvent::MutationFailed { mutation, message } => {
                if let Some(ticket) = mutation.ticket() {
                    self.dispatch_editor(EditorIntent::SaveFailed { ticket });
                }
                self.notifications
                    .error(format!("{}: {message}", mutation.failure_message()));
            }
        }
    }

    fn send_command(&mut self, command: UiCommand) -> bool {
        let Some(sender) = &self.command_sender else {
            return false;
        };

        match sender.try_send(command) {
            Ok(()) => true,
            Err(err) => {
                tracing::warn!(error = %err, "Store command not sent");
                self.notifications.error("Request queue is busy, try again");
                false
            }
        }
    }
}

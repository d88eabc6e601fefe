use super::state::CrudState;
use crate::shared::api_client::CrudApi;
use contracts::domain::common::CatalogEntity;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// How long a banner stays on screen
pub const MESSAGE_TIMEOUT_MS: u32 = 4000;

/// Reactive CRUD state plus the commands that talk to the backend
pub struct CrudHandle<T: 'static> {
    pub state: RwSignal<CrudState<T>>,
    pub api: CrudApi<T>,
}

impl<T: 'static> Clone for CrudHandle<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: 'static> Copy for CrudHandle<T> {}

/// Create the state for a list page and start the first load
pub fn use_crud<T>(api: CrudApi<T>) -> CrudHandle<T>
where
    T: CatalogEntity + Send + Sync,
{
    let handle = CrudHandle {
        state: RwSignal::new(CrudState::new()),
        api,
    };
    handle.load(false);
    handle
}

/// Read-only list of a referenced catalog (selects, name lookups).
///
/// Failures are logged by the api client and leave the list empty.
pub fn use_catalog<T>(api: CrudApi<T>) -> RwSignal<Vec<T>>
where
    T: CatalogEntity + Send + Sync,
{
    let items = RwSignal::new(Vec::new());
    spawn_local(async move {
        if let Ok(loaded) = api.list(false).await {
            log::debug!("Loaded {} {} for lookups", loaded.len(), T::collection_name());
            let _ = items.try_set(loaded);
        }
    });
    items
}

impl<T> CrudHandle<T>
where
    T: CatalogEntity + Send + Sync,
{
    /// Clear message `id` after the timeout unless another one replaced it
    fn schedule_dismiss(&self, id: u64) {
        let state = self.state;
        spawn_local(async move {
            TimeoutFuture::new(MESSAGE_TIMEOUT_MS).await;
            state.try_update(|s| s.dismiss(id));
        });
    }

    fn show(&self, id: Option<u64>) {
        if let Some(id) = id {
            self.schedule_dismiss(id);
        }
    }

    pub fn load(&self, force: bool) {
        let this = *self;
        this.state.update(|s| s.begin_load());
        spawn_local(async move {
            match this.api.list(force).await {
                Ok(items) => {
                    log::info!("Loaded {} {}", items.len(), T::collection_name());
                    this.state.try_update(|s| s.loaded(items));
                }
                Err(e) => {
                    let id = this.state.try_update(|s| s.failed(&e));
                    this.show(id);
                }
            }
        });
    }

    /// Persist an already validated item
    pub fn save(&self, item: T) {
        let this = *self;
        let created = item.id().is_none();
        this.state.update(|s| s.begin_save());
        spawn_local(async move {
            let id = match this.api.save(&item).await {
                Ok(saved) => {
                    log::info!("Saved {} {:?}", T::element_name(), saved.id());
                    this.state.try_update(|s| s.saved(saved, created))
                }
                Err(e) => this.state.try_update(|s| s.save_failed(&e)),
            };
            this.show(id);
        });
    }

    /// Run the baja lógica of the item awaiting confirmation
    pub fn confirm_delete(&self) {
        let Some(id) = self.state.try_update(|s| s.begin_delete()).flatten() else {
            return;
        };
        let this = *self;
        spawn_local(async move {
            let result = match this.api.deactivate(id).await {
                Ok(()) => {
                    log::info!("Deactivated {} {}", T::element_name(), id);
                    this.state.try_update(|s| s.deleted(id))
                }
                Err(e) => this.state.try_update(|s| s.delete_failed(&e)),
            };
            this.show(result);
        });
    }

    pub fn reactivate(&self, id: i64) {
        let Some(mut item) = self.state.with_untracked(|s| s.find(id).cloned()) else {
            return;
        };
        item.set_active(true);
        let this = *self;
        spawn_local(async move {
            let result = match this.api.update(&item).await {
                Ok(saved) => this.state.try_update(|s| s.reactivated(saved)),
                Err(e) => this
                    .state
                    .try_update(|s| s.notify_error(format!("No se pudo reactivar: {}", e))),
            };
            this.show(result);
        });
    }

    /// Replace an item changed by a custom action (e.g. promotion)
    pub fn updated(&self, item: T, message: String) {
        let id = self.state.try_update(|s| {
            s.upsert(item);
            s.notify_success(message)
        });
        self.show(id);
    }

    pub fn notify_error(&self, message: String) {
        let id = self.state.try_update(|s| s.notify_error(message));
        self.show(id);
    }

    pub fn dismiss(&self, id: u64) {
        self.state.update(|s| s.dismiss(id));
    }

    pub fn open_create(&self, template: T) {
        self.state.update(|s| s.open_create(template));
    }

    pub fn open_edit(&self, id: i64) {
        self.state.update(|s| s.open_edit(id));
    }

    pub fn close_form(&self) {
        if self.state.with_untracked(|s| s.form_open) {
            self.state.update(|s| s.close_form());
        }
    }

    pub fn request_delete(&self, id: i64) {
        self.state.update(|s| s.request_delete(id));
    }

    pub fn cancel_delete(&self) {
        self.state.update(|s| s.cancel_delete());
    }

    pub fn toggle_inactive(&self) {
        self.state.update(|s| s.toggle_inactive());
    }

    pub fn visible_items(&self) -> Signal<Vec<T>> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.visible_items()))
    }

    pub fn loading(&self) -> Signal<bool> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.loading))
    }

    pub fn deleting(&self) -> Signal<bool> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.deleting))
    }
}

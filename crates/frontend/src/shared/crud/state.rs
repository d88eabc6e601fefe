//! Pure CRUD page state. Every transition is a plain method so the page
//! logic can be tested without a browser; [`super::hook`] wraps it in a
//! signal and adds the HTTP calls.

use contracts::domain::common::CatalogEntity;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Success,
    Error,
}

/// Transient banner
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub id: u64,
    pub kind: MessageKind,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CrudState<T> {
    pub items: Vec<T>,
    pub loading: bool,
    /// Item shown in the form; `id == None` while creating
    pub editing: Option<T>,
    pub form_open: bool,
    /// Save request in flight
    pub saving: bool,
    pub pending_delete: Option<T>,
    /// Baja request in flight
    pub deleting: bool,
    pub message: Option<Message>,
    pub show_inactive: bool,
    next_message_id: u64,
}

impl<T> Default for CrudState<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            loading: false,
            editing: None,
            form_open: false,
            saving: false,
            pending_delete: None,
            deleting: false,
            message: None,
            show_inactive: false,
            next_message_id: 1,
        }
    }
}

impl<T: CatalogEntity> CrudState<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin_load(&mut self) {
        self.loading = true;
    }

    pub fn loaded(&mut self, items: Vec<T>) {
        self.items = items;
        self.loading = false;
    }

    /// Load failure keeps the previous items on screen
    pub fn failed(&mut self, error: &str) -> u64 {
        self.loading = false;
        self.notify_error(format!("No se pudo cargar {}: {}", T::list_name().to_lowercase(), error))
    }

    pub fn open_create(&mut self, template: T) {
        self.editing = Some(template);
        self.form_open = true;
    }

    pub fn open_edit(&mut self, id: i64) {
        if let Some(item) = self.find(id).cloned() {
            self.editing = Some(item);
            self.form_open = true;
        }
    }

    pub fn close_form(&mut self) {
        self.form_open = false;
        self.editing = None;
        self.saving = false;
    }

    pub fn begin_save(&mut self) {
        self.saving = true;
    }

    /// Upsert the stored item by id and close the form.
    ///
    /// `created` comes from the request (no id yet), not from the form,
    /// which may have been closed while the request was in flight.
    pub fn saved(&mut self, item: T, created: bool) -> u64 {
        let name = item.display_name();
        self.upsert(item);
        self.close_form();
        let outcome = if created { "alta registrada" } else { "cambios guardados" };
        self.notify_success(format!("{} '{}': {}", T::element_name(), name, outcome))
    }

    /// Save failure keeps the form open with the typed values
    pub fn save_failed(&mut self, error: &str) -> u64 {
        self.saving = false;
        self.notify_error(format!("No se pudo guardar: {}", error))
    }

    pub fn upsert(&mut self, item: T) {
        match self.items.iter_mut().find(|i| i.id().is_some() && i.id() == item.id()) {
            Some(existing) => *existing = item,
            None => self.items.push(item),
        }
    }

    pub fn request_delete(&mut self, id: i64) {
        self.pending_delete = self.find(id).cloned();
    }

    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    /// Id to deactivate, or `None` when nothing is pending or a baja is
    /// already in flight
    pub fn begin_delete(&mut self) -> Option<i64> {
        if self.deleting {
            return None;
        }
        let id = self.pending_delete.as_ref().and_then(|i| i.id())?;
        self.deleting = true;
        Some(id)
    }

    /// Backend confirmed the baja lógica
    pub fn deleted(&mut self, id: i64) -> u64 {
        self.pending_delete = None;
        self.deleting = false;
        let name = match self.items.iter_mut().find(|i| i.id() == Some(id)) {
            Some(item) => {
                item.set_active(false);
                item.display_name()
            }
            None => format!("#{}", id),
        };
        self.notify_success(format!("{} '{}': baja registrada", T::element_name(), name))
    }

    pub fn delete_failed(&mut self, error: &str) -> u64 {
        self.pending_delete = None;
        self.deleting = false;
        self.notify_error(format!("No se pudo dar de baja: {}", error))
    }

    pub fn reactivated(&mut self, item: T) -> u64 {
        let name = item.display_name();
        self.upsert(item);
        self.notify_success(format!("{} '{}': reactivación registrada", T::element_name(), name))
    }

    pub fn notify_success(&mut self, text: impl Into<String>) -> u64 {
        self.notify(MessageKind::Success, text.into())
    }

    pub fn notify_error(&mut self, text: impl Into<String>) -> u64 {
        self.notify(MessageKind::Error, text.into())
    }

    fn notify(&mut self, kind: MessageKind, text: String) -> u64 {
        let id = self.next_message_id;
        self.next_message_id += 1;
        self.message = Some(Message { id, kind, text });
        id
    }

    /// Drop the banner only if it is still message `id`
    pub fn dismiss(&mut self, id: u64) {
        if self.message.as_ref().map(|m| m.id) == Some(id) {
            self.message = None;
        }
    }

    pub fn toggle_inactive(&mut self) {
        self.show_inactive = !self.show_inactive;
    }

    pub fn find(&self, id: i64) -> Option<&T> {
        self.items.iter().find(|i| i.id() == Some(id))
    }

    /// Items to list: active only unless `show_inactive`
    pub fn visible_items(&self) -> Vec<T> {
        self.items
            .iter()
            .filter(|i| self.show_inactive || i.is_active())
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a004_zona::Zona;

    fn zona(id: i64, nombre: &str) -> Zona {
        Zona {
            id: Some(id),
            nombre: nombre.into(),
            distancia_km: 100.0,
            ..Default::default()
        }
    }

    fn loaded_state() -> CrudState<Zona> {
        let mut state = CrudState::new();
        state.begin_load();
        assert!(state.loading);
        state.loaded(vec![zona(1, "Norte"), zona(2, "Sur")]);
        state
    }

    #[test]
    fn test_load() {
        let state = loaded_state();
        assert!(!state.loading);
        assert_eq!(state.visible_items().len(), 2);
    }

    #[test]
    fn test_failed_load_keeps_items() {
        let mut state = loaded_state();
        state.begin_load();
        state.failed("HTTP 500");
        assert!(!state.loading);
        assert_eq!(state.items.len(), 2);
        let message = state.message.clone().unwrap();
        assert_eq!(message.kind, MessageKind::Error);
        assert_eq!(message.text, "No se pudo cargar zonas: HTTP 500");
    }

    #[test]
    fn test_create_flow() {
        let mut state = loaded_state();
        state.open_create(Zona::default());
        assert!(state.form_open);
        assert_eq!(state.editing.as_ref().and_then(|z| z.id), None);

        state.begin_save();
        state.saved(zona(3, "Cuyo"), true);
        assert!(!state.form_open);
        assert!(state.editing.is_none());
        assert!(!state.saving);
        assert_eq!(state.items.len(), 3);
        assert_eq!(state.message.as_ref().unwrap().text, "Zona 'Cuyo': alta registrada");
    }

    #[test]
    fn test_edit_flow_replaces_item() {
        let mut state = loaded_state();
        state.open_edit(2);
        assert_eq!(state.editing.as_ref().map(|z| z.nombre.as_str()), Some("Sur"));
        state.saved(zona(2, "Patagonia"), false);
        assert_eq!(state.items.len(), 2);
        assert_eq!(state.find(2).unwrap().nombre, "Patagonia");
        assert_eq!(state.message.as_ref().unwrap().text, "Zona 'Patagonia': cambios guardados");
    }

    #[test]
    fn test_open_edit_unknown_id_is_noop() {
        let mut state = loaded_state();
        state.open_edit(99);
        assert!(!state.form_open);
        assert!(state.editing.is_none());
    }

    #[test]
    fn test_save_failure_keeps_form() {
        let mut state = loaded_state();
        state.open_edit(1);
        state.begin_save();
        state.save_failed("HTTP 400: nombre duplicado");
        assert!(state.form_open);
        assert!(!state.saving);
        assert!(state.editing.is_some());
        assert_eq!(state.message.as_ref().unwrap().kind, MessageKind::Error);
    }

    #[test]
    fn test_delete_marks_inactive() {
        let mut state = loaded_state();
        state.request_delete(1);
        assert_eq!(state.pending_delete.as_ref().and_then(|z| z.id), Some(1));
        assert_eq!(state.begin_delete(), Some(1));
        state.deleted(1);
        assert!(state.pending_delete.is_none());
        assert!(!state.deleting);
        assert!(!state.find(1).unwrap().activo);
        assert_eq!(state.visible_items().len(), 1);

        state.toggle_inactive();
        assert_eq!(state.visible_items().len(), 2);

        let mut back = state.find(1).cloned().unwrap();
        back.activo = true;
        state.reactivated(back);
        assert!(state.find(1).unwrap().activo);
        assert_eq!(state.message.as_ref().unwrap().text, "Zona 'Norte': reactivación registrada");
    }

    #[test]
    fn test_cancel_delete() {
        let mut state = loaded_state();
        state.request_delete(2);
        state.cancel_delete();
        assert!(state.pending_delete.is_none());
        assert!(state.find(2).unwrap().activo);
    }

    #[test]
    fn test_dismiss_only_current_message() {
        let mut state = loaded_state();
        let first = state.notify_success("uno");
        let second = state.notify_error("dos");
        assert_ne!(first, second);

        state.dismiss(first);
        assert_eq!(state.message.as_ref().map(|m| m.id), Some(second));

        state.dismiss(second);
        assert!(state.message.is_none());
    }

    #[test]
    fn test_second_confirm_while_deleting_is_ignored() {
        let mut state = loaded_state();
        state.request_delete(2);
        assert_eq!(state.begin_delete(), Some(2));
        assert!(state.deleting);
        assert_eq!(state.begin_delete(), None);

        state.deleted(2);
        assert!(!state.deleting);
        assert_eq!(state.message.as_ref().unwrap().kind, MessageKind::Success);
        assert_eq!(state.begin_delete(), None);
    }

    #[test]
    fn test_failed_delete_allows_retry() {
        let mut state = loaded_state();
        state.request_delete(1);
        assert_eq!(state.begin_delete(), Some(1));
        state.delete_failed("HTTP 409");
        assert!(!state.deleting);
        assert!(state.find(1).unwrap().activo);

        state.request_delete(1);
        assert_eq!(state.begin_delete(), Some(1));
    }

    #[test]
    fn test_create_finished_after_form_closed() {
        let mut state = loaded_state();
        state.open_create(Zona::default());
        state.begin_save();
        state.close_form();
        state.saved(zona(3, "Cuyo"), true);
        assert_eq!(state.items.len(), 3);
        assert_eq!(state.message.as_ref().unwrap().text, "Zona 'Cuyo': alta registrada");
    }
}

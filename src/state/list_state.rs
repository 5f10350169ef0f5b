// ============================================================================
// LIST STATE - Estado de una colección paginada con su ciclo de carga
// ============================================================================
// Cada pantalla del panel tiene su propia instancia; nada se comparte.
// Las cargas llevan un ticket de secuencia: si mientras tanto se pidió otra
// página, la respuesta vieja se descarta entera en vez de pisar a la nueva.
// ============================================================================

use crate::models::Page;

/// Ticket que identifica una carga concreta
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket(u64);

/// Qué recarga toca después de cada tipo de mutación
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationKind {
    Create,
    Update,
    Delete,
    StatusToggle,
}

impl MutationKind {
    /// Página a recargar al completarse la mutación; None = sin recarga
    pub fn refetch_page(&self, current: u32) -> Option<u32> {
        match self {
            MutationKind::Create => Some(0),
            MutationKind::Update | MutationKind::Delete => Some(current),
            MutationKind::StatusToggle => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ListState<T> {
    items: Vec<T>,
    page: u32,
    total_pages: u32,
    total_elements: u64,
    last: bool,
    loading: bool,
    loading_more: bool,
    error: Option<String>,
    seq: u64,
}

impl<T> ListState<T> {
    /// Arranca en loading: la primera carga llega con el montaje de la pantalla
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            page: 0,
            total_pages: 0,
            total_elements: 0,
            last: true,
            loading: true,
            loading_more: false,
            error: None,
            seq: 0,
        }
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn total_pages(&self) -> u32 {
        self.total_pages
    }

    pub fn total_elements(&self) -> u64 {
        self.total_elements
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_loading_more(&self) -> bool {
        self.loading_more
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// ¿Quedan páginas por anexar?
    pub fn has_more(&self) -> bool {
        !self.last
    }

    /// Lista vacía SIN error: el estado "no hay datos", distinto de un fallo
    pub fn is_empty_success(&self) -> bool {
        !self.loading && self.error.is_none() && self.items.is_empty()
    }

    /// Empieza una carga que reemplaza la página visible
    pub fn begin_load(&mut self, page: u32) -> LoadTicket {
        self.seq += 1;
        self.page = page;
        self.loading = true;
        self.error = None;
        LoadTicket(self.seq)
    }

    /// Aplica el resultado de una carga. Devuelve false si el ticket ya no es
    /// el vigente (llegó tarde) y no se tocó nada.
    pub fn finish_load(&mut self, ticket: LoadTicket, outcome: Result<Page<T>, String>) -> bool {
        if ticket.0 != self.seq {
            return false;
        }
        self.loading = false;
        match outcome {
            Ok(page) => {
                // Reemplazo total, nunca se mezclan páginas
                self.items = page.content;
                self.total_pages = page.total_pages;
                self.total_elements = page.total_elements;
                self.last = page.last;
                self.error = None;
            }
            Err(message) => {
                // Los items anteriores siguen visibles
                self.error = Some(message);
            }
        }
        true
    }

    /// Empieza una carga por anexado (historiales). None si ya hay una en
    /// vuelo o no quedan páginas: invocarlo dos veces seguidas es inocuo.
    pub fn begin_more(&mut self) -> Option<(LoadTicket, u32)> {
        if self.loading || self.loading_more || self.last {
            return None;
        }
        self.seq += 1;
        self.loading_more = true;
        Some((LoadTicket(self.seq), self.page + 1))
    }

    pub fn finish_more(&mut self, ticket: LoadTicket, outcome: Result<Page<T>, String>) -> bool {
        if ticket.0 != self.seq {
            return false;
        }
        self.loading_more = false;
        match outcome {
            Ok(page) => {
                self.page += 1;
                self.items.extend(page.content);
                self.total_pages = page.total_pages;
                self.total_elements = page.total_elements;
                self.last = page.last;
                self.error = None;
            }
            Err(message) => {
                self.error = Some(message);
            }
        }
        true
    }

    /// Voltea en sitio los items que cumplan el predicado (mutación optimista).
    /// Devuelve true si alguno cambió; repetir la llamada deshace el cambio.
    pub fn flip_where(
        &mut self,
        matches: impl Fn(&T) -> bool,
        flip: impl Fn(&mut T),
    ) -> bool {
        let mut hit = false;
        for item in self.items.iter_mut() {
            if matches(item) {
                flip(item);
                hit = true;
            }
        }
        hit
    }

    /// Quita filas sin recargar (aprobaciones que desaparecen de la cola)
    pub fn remove_where(&mut self, matches: impl Fn(&T) -> bool) -> bool {
        let before = self.items.len();
        self.items.retain(|item| !matches(item));
        self.items.len() != before
    }

    pub fn set_error(&mut self, message: String) {
        self.error = Some(message);
    }

    /// Vuelve al estado inicial avanzando la secuencia: cualquier respuesta
    /// en vuelo de antes del reset queda invalidada y se descarta.
    pub fn reset(&mut self) {
        let seq = self.seq;
        *self = Self::new();
        self.seq = seq + 1;
    }
}

impl<T> Default for ListState<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page_of(items: Vec<&str>, page_no: u32, total_pages: u32, last: bool) -> Page<String> {
        let content: Vec<String> = items.into_iter().map(String::from).collect();
        Page {
            total_elements: content.len() as u64,
            content,
            page_no,
            page_size: 10,
            total_pages,
            last,
        }
    }

    #[test]
    fn test_initial_state_is_loading() {
        let list: ListState<String> = ListState::new();
        assert!(list.is_loading());
        assert!(list.items().is_empty());
        assert!(list.error().is_none());
        assert!(!list.is_empty_success());
    }

    #[test]
    fn test_each_page_replaces_previous() {
        let mut list = ListState::new();
        let t0 = list.begin_load(0);
        list.finish_load(t0, Ok(page_of(vec!["a", "b"], 0, 3, false)));
        assert_eq!(list.items(), ["a".to_string(), "b".to_string()]);

        let t1 = list.begin_load(1);
        list.finish_load(t1, Ok(page_of(vec!["c"], 1, 3, false)));
        // Sin acumulación entre páginas
        assert_eq!(list.items(), ["c".to_string()]);
        assert_eq!(list.page(), 1);
        assert_eq!(list.total_pages(), 3);
    }

    #[test]
    fn test_failed_load_keeps_items() {
        let mut list = ListState::new();
        let t0 = list.begin_load(0);
        list.finish_load(t0, Ok(page_of(vec!["a", "b"], 0, 2, false)));

        let t1 = list.begin_load(1);
        list.finish_load(t1, Err("se cayó el backend".to_string()));

        assert_eq!(list.items(), ["a".to_string(), "b".to_string()]);
        assert_eq!(list.error(), Some("se cayó el backend"));
        assert!(!list.is_loading());
        assert!(!list.is_empty_success());
    }

    #[test]
    fn test_retry_clears_error() {
        let mut list: ListState<String> = ListState::new();
        let t0 = list.begin_load(0);
        list.finish_load(t0, Err("timeout".to_string()));
        assert!(list.error().is_some());

        list.begin_load(0);
        assert!(list.error().is_none());
        assert!(list.is_loading());
    }

    #[test]
    fn test_stale_response_is_discarded() {
        let mut list = ListState::new();
        let viejo = list.begin_load(0);
        let nuevo = list.begin_load(1);

        // La carga nueva termina primero
        assert!(list.finish_load(nuevo, Ok(page_of(vec!["nuevo"], 1, 2, true))));
        // La vieja llega después y no toca nada
        assert!(!list.finish_load(viejo, Ok(page_of(vec!["viejo"], 0, 2, false))));

        assert_eq!(list.items(), ["nuevo".to_string()]);
        assert_eq!(list.page(), 1);
    }

    #[test]
    fn test_stale_failure_is_discarded() {
        let mut list = ListState::new();
        let viejo = list.begin_load(0);
        let nuevo = list.begin_load(1);
        assert!(list.finish_load(nuevo, Ok(page_of(vec!["ok"], 1, 2, true))));
        assert!(!list.finish_load(viejo, Err("tarde y mal".to_string())));
        assert!(list.error().is_none());
    }

    #[test]
    fn test_load_more_appends_next_page() {
        let mut list = ListState::new();
        let t0 = list.begin_load(0);
        list.finish_load(t0, Ok(page_of(vec!["a"], 0, 3, false)));

        let (ticket, next) = list.begin_more().unwrap();
        assert_eq!(next, 1);
        list.finish_more(ticket, Ok(page_of(vec!["b", "c"], 1, 3, false)));

        assert_eq!(
            list.items(),
            ["a".to_string(), "b".to_string(), "c".to_string()]
        );
        assert_eq!(list.page(), 1);
        assert!(list.has_more());
    }

    #[test]
    fn test_double_load_more_fires_once() {
        let mut list = ListState::new();
        let t0 = list.begin_load(0);
        list.finish_load(t0, Ok(page_of(vec!["a"], 0, 2, false)));

        let primera = list.begin_more();
        assert!(primera.is_some());
        // Doble click en "cargar más"
        assert!(list.begin_more().is_none());
    }

    #[test]
    fn test_load_more_on_last_page_is_noop() {
        let mut list = ListState::new();
        let t0 = list.begin_load(0);
        list.finish_load(t0, Ok(page_of(vec!["a"], 0, 1, true)));
        assert!(list.begin_more().is_none());
    }

    #[test]
    fn test_failed_append_keeps_accumulated() {
        let mut list = ListState::new();
        let t0 = list.begin_load(0);
        list.finish_load(t0, Ok(page_of(vec!["a"], 0, 3, false)));

        let (ticket, _) = list.begin_more().unwrap();
        list.finish_more(ticket, Err("sin red".to_string()));

        assert_eq!(list.items(), ["a".to_string()]);
        assert_eq!(list.error(), Some("sin red"));
        assert!(!list.is_loading_more());
        // Se puede reintentar
        assert!(list.begin_more().is_some());
    }

    #[derive(Debug, Clone, PartialEq)]
    struct Fila {
        id: i64,
        enabled: bool,
    }

    #[test]
    fn test_optimistic_flip_reverts() {
        let mut list = ListState::new();
        let t0 = list.begin_load(0);
        list.finish_load(
            t0,
            Ok(Page::single(vec![
                Fila { id: 1, enabled: true },
                Fila { id: 2, enabled: false },
            ])),
        );

        // Ida
        assert!(list.flip_where(|f| f.id == 2, |f| f.enabled = !f.enabled));
        assert!(list.items()[1].enabled);
        // Vuelta (el backend dijo que no)
        assert!(list.flip_where(|f| f.id == 2, |f| f.enabled = !f.enabled));
        assert!(!list.items()[1].enabled);
        // El vecino nunca se tocó
        assert!(list.items()[0].enabled);
    }

    #[test]
    fn test_flip_missing_id_is_noop() {
        let mut list = ListState::new();
        let t0 = list.begin_load(0);
        list.finish_load(t0, Ok(Page::single(vec![Fila { id: 1, enabled: true }])));
        assert!(!list.flip_where(|f| f.id == 99, |f| f.enabled = !f.enabled));
    }

    #[test]
    fn test_remove_row_without_reload() {
        let mut list = ListState::new();
        let t0 = list.begin_load(0);
        list.finish_load(
            t0,
            Ok(Page::single(vec![
                Fila { id: 1, enabled: true },
                Fila { id: 2, enabled: true },
            ])),
        );
        assert!(list.remove_where(|f| f.id == 1));
        assert_eq!(list.items().len(), 1);
        assert_eq!(list.items()[0].id, 2);
    }

    #[test]
    fn test_empty_success_is_not_error() {
        let mut list: ListState<String> = ListState::new();
        let t0 = list.begin_load(0);
        list.finish_load(t0, Ok(page_of(vec![], 0, 0, true)));
        assert!(list.is_empty_success());
        assert!(list.error().is_none());

        let t1 = list.begin_load(0);
        list.finish_load(t1, Err("explotó".to_string()));
        assert!(!list.is_empty_success());
    }

    #[test]
    fn test_reset_invalidates_inflight_responses() {
        let mut list = ListState::new();
        let antiguo = list.begin_load(0);
        list.reset();
        // La respuesta de antes del reset ya no vale
        assert!(!list.finish_load(antiguo, Ok(page_of(vec!["fantasma"], 0, 1, true))));
        assert!(list.items().is_empty());

        // Una carga posterior al reset sigue funcionando con normalidad
        let nuevo = list.begin_load(0);
        assert!(list.finish_load(nuevo, Ok(page_of(vec!["real"], 0, 1, true))));
        assert_eq!(list.items(), ["real".to_string()]);
    }

    #[test]
    fn test_mutation_refetch_policy() {
        assert_eq!(MutationKind::Create.refetch_page(4), Some(0));
        assert_eq!(MutationKind::Update.refetch_page(4), Some(4));
        assert_eq!(MutationKind::Delete.refetch_page(4), Some(4));
        assert_eq!(MutationKind::StatusToggle.refetch_page(4), None);
    }
}

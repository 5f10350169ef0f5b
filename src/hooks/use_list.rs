// ============================================================================
// USE LIST HOOK - Controlador de listas paginadas para componentes Yew
// ============================================================================
// Envuelve un ListState en Rc<RefCell> para que los futuros en vuelo apliquen
// su resultado sobre el estado VIVO, no sobre una copia vieja capturada por el
// closure. El ticket de cada carga decide si la respuesta aún vale.
// ============================================================================

use std::cell::RefCell;
use std::future::Future;
use std::rc::Rc;

use yew::prelude::*;

use crate::models::Page;
use crate::state::{ListState, MutationKind};

pub struct UseListHandle<T: 'static> {
    state: Rc<RefCell<ListState<T>>>,
    redraw: UseForceUpdateHandle,
}

impl<T> Clone for UseListHandle<T> {
    fn clone(&self) -> Self {
        Self {
            state: self.state.clone(),
            redraw: self.redraw.clone(),
        }
    }
}

impl<T: 'static> UseListHandle<T> {
    /// Copia del estado actual para renderizar
    pub fn snapshot(&self) -> ListState<T>
    where
        T: Clone,
    {
        self.state.borrow().clone()
    }

    pub fn page(&self) -> u32 {
        self.state.borrow().page()
    }

    /// Carga la página indicada reemplazando la visible
    pub fn load<F>(&self, page: u32, request: F)
    where
        F: Future<Output = Result<Page<T>, String>> + 'static,
    {
        let ticket = self.state.borrow_mut().begin_load(page);
        self.redraw.force_update();

        let state = self.state.clone();
        let redraw = self.redraw.clone();
        wasm_bindgen_futures::spawn_local(async move {
            let outcome = request.await;
            if state.borrow_mut().finish_load(ticket, outcome) {
                redraw.force_update();
            } else {
                log::info!("⏭️ Respuesta de página descartada: ya se pidió otra");
            }
        });
    }

    /// Anexa la página siguiente (historiales). Inocuo si ya hay una en vuelo.
    pub fn load_more<B, F>(&self, request: B)
    where
        B: FnOnce(u32) -> F,
        F: Future<Output = Result<Page<T>, String>> + 'static,
    {
        let Some((ticket, next_page)) = self.state.borrow_mut().begin_more() else {
            return;
        };
        self.redraw.force_update();

        let fut = request(next_page);
        let state = self.state.clone();
        let redraw = self.redraw.clone();
        wasm_bindgen_futures::spawn_local(async move {
            let outcome = fut.await;
            if state.borrow_mut().finish_more(ticket, outcome) {
                redraw.force_update();
            } else {
                log::info!("⏭️ Anexado descartado: la lista se recargó mientras tanto");
            }
        });
    }

    /// Voltea las filas que cumplan el predicado, llama al backend y deshace
    /// el volteo si éste contesta con error.
    pub fn toggle<M, V, F>(&self, matches: M, flip: V, request: F)
    where
        M: Fn(&T) -> bool + 'static,
        V: Fn(&mut T) + 'static,
        F: Future<Output = Result<(), String>> + 'static,
    {
        if !self.state.borrow_mut().flip_where(&matches, &flip) {
            return;
        }
        self.redraw.force_update();

        let state = self.state.clone();
        let redraw = self.redraw.clone();
        wasm_bindgen_futures::spawn_local(async move {
            if let Err(message) = request.await {
                log::warn!("↩️ Cambio de estado rechazado, se revierte: {}", message);
                let mut list = state.borrow_mut();
                list.flip_where(&matches, &flip);
                list.set_error(message);
                drop(list);
                redraw.force_update();
            }
        });
    }

    /// Ejecuta una mutación y recarga la página que dicte su tipo.
    /// `after` se dispara con el resultado antes de la recarga, para que el
    /// componente cierre diálogos o muestre el error del formulario.
    pub fn mutate<Op, B, F>(
        &self,
        kind: MutationKind,
        operation: Op,
        reload: B,
        after: Callback<Result<(), String>>,
    ) where
        Op: Future<Output = Result<(), String>> + 'static,
        B: FnOnce(u32) -> F + 'static,
        F: Future<Output = Result<Page<T>, String>> + 'static,
    {
        let state = self.state.clone();
        let redraw = self.redraw.clone();
        wasm_bindgen_futures::spawn_local(async move {
            match operation.await {
                Ok(()) => {
                    after.emit(Ok(()));
                    let target = {
                        let current = state.borrow().page();
                        kind.refetch_page(current)
                    };
                    if let Some(page) = target {
                        let ticket = state.borrow_mut().begin_load(page);
                        redraw.force_update();
                        let outcome = reload(page).await;
                        if state.borrow_mut().finish_load(ticket, outcome) {
                            redraw.force_update();
                        }
                    }
                }
                Err(message) => {
                    after.emit(Err(message));
                }
            }
        });
    }

    /// Quita filas en sitio, sin recarga
    pub fn remove_row(&self, matches: impl Fn(&T) -> bool) {
        if self.state.borrow_mut().remove_where(matches) {
            self.redraw.force_update();
        }
    }

    pub fn set_error(&self, message: String) {
        self.state.borrow_mut().set_error(message);
        self.redraw.force_update();
    }

    /// Vuelve al estado inicial (cambio de padre seleccionado)
    pub fn reset(&self) {
        self.state.borrow_mut().reset();
        self.redraw.force_update();
    }
}

#[hook]
pub fn use_list<T: 'static>() -> UseListHandle<T> {
    let state = use_mut_ref(ListState::<T>::new);
    let redraw = use_force_update();
    UseListHandle { state, redraw }
}

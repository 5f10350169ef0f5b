// ============================================================================
// USE CHILDREN HOOK - Filas anidadas con caché por padre
// ============================================================================

use std::cell::RefCell;
use std::future::Future;
use std::rc::Rc;

use yew::prelude::*;

use crate::state::ChildrenCache;

pub struct UseChildrenHandle<C: 'static> {
    state: Rc<RefCell<ChildrenCache<C>>>,
    redraw: UseForceUpdateHandle,
}

impl<C> Clone for UseChildrenHandle<C> {
    fn clone(&self) -> Self {
        Self {
            state: self.state.clone(),
            redraw: self.redraw.clone(),
        }
    }
}

impl<C: 'static> UseChildrenHandle<C> {
    pub fn snapshot(&self) -> ChildrenCache<C>
    where
        C: Clone,
    {
        self.state.borrow().clone()
    }

    /// Abre o pliega un padre; al abrir pide los hijos solo si no están en
    /// caché. Plegar y reabrir no vuelve a pedir nada.
    pub fn toggle<F>(&self, parent: i64, request: F)
    where
        F: Future<Output = Result<Vec<C>, String>> + 'static,
    {
        let now_expanded = self.state.borrow_mut().toggle(parent);
        self.redraw.force_update();
        if now_expanded {
            self.fetch(parent, request);
        }
    }

    /// Pide los hijos de un padre si nadie los pidió ya
    pub fn fetch<F>(&self, parent: i64, request: F)
    where
        F: Future<Output = Result<Vec<C>, String>> + 'static,
    {
        if !self.state.borrow_mut().begin_fetch(parent) {
            return;
        }
        self.redraw.force_update();

        let state = self.state.clone();
        let redraw = self.redraw.clone();
        wasm_bindgen_futures::spawn_local(async move {
            let outcome = request.await;
            state.borrow_mut().store(parent, outcome);
            redraw.force_update();
        });
    }

    /// Descarta la caché de un padre y vuelve a pedir (tras crear o editar)
    pub fn refetch<F>(&self, parent: i64, request: F)
    where
        F: Future<Output = Result<Vec<C>, String>> + 'static,
    {
        self.state.borrow_mut().invalidate(parent);
        self.fetch(parent, request);
    }

    pub fn invalidate_all(&self) {
        self.state.borrow_mut().invalidate_all();
        self.redraw.force_update();
    }
}

#[hook]
pub fn use_children<C: 'static>() -> UseChildrenHandle<C> {
    let state = use_mut_ref(ChildrenCache::<C>::new);
    let redraw = use_force_update();
    UseChildrenHandle { state, redraw }
}

// ============================================================================
// CHILDREN STATE - Hijos anidados con caché por padre
// ============================================================================
// Expandir un padre dispara UNA sola petición de hijos; plegar y volver a
// abrir reutiliza lo cacheado hasta que alguien invalida ese padre.
// ============================================================================

use std::collections::{HashMap, HashSet};

#[derive(Debug, Clone, PartialEq)]
pub struct ChildrenCache<C> {
    children: HashMap<i64, Vec<C>>,
    expanded: HashSet<i64>,
    loading: HashSet<i64>,
    errors: HashMap<i64, String>,
}

impl<C> Default for ChildrenCache<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> ChildrenCache<C> {
    pub fn new() -> Self {
        Self {
            children: HashMap::new(),
            expanded: HashSet::new(),
            loading: HashSet::new(),
            errors: HashMap::new(),
        }
    }

    /// Abre o pliega un padre. Devuelve true si quedó expandido.
    pub fn toggle(&mut self, parent: i64) -> bool {
        if self.expanded.remove(&parent) {
            false
        } else {
            self.expanded.insert(parent);
            true
        }
    }

    /// Reclama la carga de hijos de un padre. Solo el primer reclamante
    /// recibe true; con caché o carga en vuelo no se vuelve a pedir.
    pub fn begin_fetch(&mut self, parent: i64) -> bool {
        if self.children.contains_key(&parent) || self.loading.contains(&parent) {
            return false;
        }
        self.loading.insert(parent);
        self.errors.remove(&parent);
        true
    }

    /// Guarda el resultado de la carga de un padre.
    /// Un fallo no se cachea: reabrir el padre reintenta.
    pub fn store(&mut self, parent: i64, outcome: Result<Vec<C>, String>) {
        self.loading.remove(&parent);
        match outcome {
            Ok(items) => {
                self.children.insert(parent, items);
                self.errors.remove(&parent);
            }
            Err(message) => {
                self.errors.insert(parent, message);
            }
        }
    }

    /// Tira la caché de un padre (tras crear o editar hijos)
    pub fn invalidate(&mut self, parent: i64) {
        self.children.remove(&parent);
        self.errors.remove(&parent);
    }

    pub fn invalidate_all(&mut self) {
        self.children.clear();
        self.errors.clear();
    }

    pub fn is_expanded(&self, parent: i64) -> bool {
        self.expanded.contains(&parent)
    }

    pub fn is_loading(&self, parent: i64) -> bool {
        self.loading.contains(&parent)
    }

    pub fn children_of(&self, parent: i64) -> Option<&[C]> {
        self.children.get(&parent).map(|v| v.as_slice())
    }

    pub fn error_of(&self, parent: i64) -> Option<&str> {
        self.errors.get(&parent).map(|s| s.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_fetches_children_only_once() {
        let mut cache: ChildrenCache<String> = ChildrenCache::new();

        assert!(cache.toggle(7));
        assert!(cache.begin_fetch(7));
        // Mientras carga, nadie más puede reclamarla
        assert!(!cache.begin_fetch(7));

        cache.store(7, Ok(vec!["hijo".to_string()]));

        // Plegar y reabrir usa la caché, sin segunda petición
        assert!(!cache.toggle(7));
        assert!(cache.toggle(7));
        assert!(!cache.begin_fetch(7));
        assert_eq!(cache.children_of(7).unwrap().len(), 1);
    }

    #[test]
    fn test_invalidate_forces_a_fresh_load() {
        let mut cache: ChildrenCache<String> = ChildrenCache::new();
        cache.toggle(3);
        assert!(cache.begin_fetch(3));
        cache.store(3, Ok(vec!["a".to_string()]));

        cache.invalidate(3);
        assert!(cache.children_of(3).is_none());
        assert!(cache.begin_fetch(3));
    }

    #[test]
    fn test_failure_is_not_cached() {
        let mut cache: ChildrenCache<String> = ChildrenCache::new();
        cache.toggle(5);
        assert!(cache.begin_fetch(5));
        cache.store(5, Err("sin permisos".to_string()));

        assert_eq!(cache.error_of(5), Some("sin permisos"));
        assert!(cache.children_of(5).is_none());
        // El reintento vuelve a pedir y limpia el error previo
        assert!(cache.begin_fetch(5));
        assert_eq!(cache.error_of(5), None);
    }

    #[test]
    fn test_each_parent_is_independent() {
        let mut cache: ChildrenCache<i32> = ChildrenCache::new();
        cache.toggle(1);
        cache.toggle(2);
        assert!(cache.begin_fetch(1));
        assert!(cache.begin_fetch(2));
        cache.store(1, Ok(vec![10]));
        cache.store(2, Ok(vec![20, 21]));

        assert_eq!(cache.children_of(1), Some(&[10][..]));
        assert_eq!(cache.children_of(2), Some(&[20, 21][..]));

        cache.invalidate(1);
        assert!(cache.begin_fetch(1));
        assert!(!cache.begin_fetch(2));
    }

    #[test]
    fn test_invalidate_all_clears_every_parent() {
        let mut cache: ChildrenCache<i32> = ChildrenCache::new();
        cache.toggle(1);
        cache.begin_fetch(1);
        cache.store(1, Ok(vec![1]));
        cache.toggle(2);
        cache.begin_fetch(2);
        cache.store(2, Ok(vec![2]));

        cache.invalidate_all();
        assert!(cache.begin_fetch(1));
        assert!(cache.begin_fetch(2));
        // Lo expandido sigue expandido, solo se tiró el contenido
        assert!(cache.is_expanded(1));
    }
}

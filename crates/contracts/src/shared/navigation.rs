//! Navegación maestro-detalle sin router.
//!
//! La vista de clientes baja a los campos de un cliente y de ahí a los lotes
//! de un campo. En lugar de rutas anidadas se lleva una pila explícita de
//! niveles tipados con push/pop, y cada nivel es dueño de su propio estado de
//! carga ([`RemoteData`]).

use crate::domain::common::EntityId;

/// Un nivel de la pila de navegación, con sus parámetros tipados.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrillLevel {
    Clients,
    ClientFields {
        client_id: EntityId,
    },
    FieldLots {
        client_id: EntityId,
        field_id: EntityId,
    },
}

/// Pila de navegación Clientes → Campos → Lotes.
///
/// El nivel base `Clients` nunca se saca. Una mutación en un nivel hijo (alta
/// o baja) marca al padre como desactualizado; `pop` devuelve ese flag para
/// que el nivel que vuelve a quedar al tope recargue su lista solo cuando
/// hace falta.
#[derive(Debug, Clone)]
pub struct DrillStack {
    levels: Vec<DrillLevel>,
    stale: Vec<bool>,
}

impl Default for DrillStack {
    fn default() -> Self {
        Self::new()
    }
}

impl DrillStack {
    pub fn new() -> Self {
        Self {
            levels: vec![DrillLevel::Clients],
            stale: vec![false],
        }
    }

    pub fn current(&self) -> DrillLevel {
        *self.levels.last().expect("stack always has a base level")
    }

    pub fn depth(&self) -> usize {
        self.levels.len()
    }

    /// Baja de la lista de clientes a los campos de `client_id`.
    pub fn push_client(&mut self, client_id: EntityId) -> Result<(), String> {
        match self.current() {
            DrillLevel::Clients => {
                self.levels.push(DrillLevel::ClientFields { client_id });
                self.stale.push(false);
                Ok(())
            }
            _ => Err("Solo se puede abrir un cliente desde la lista de clientes".to_string()),
        }
    }

    /// Baja de los campos de un cliente a los lotes de `field_id`.
    pub fn push_field(&mut self, field_id: EntityId) -> Result<(), String> {
        match self.current() {
            DrillLevel::ClientFields { client_id } => {
                self.levels.push(DrillLevel::FieldLots {
                    client_id,
                    field_id,
                });
                self.stale.push(false);
                Ok(())
            }
            _ => Err("Solo se puede abrir un campo desde la vista del cliente".to_string()),
        }
    }

    /// Marca el nivel padre como desactualizado (tras un alta/baja acá).
    pub fn mark_parent_stale(&mut self) {
        let len = self.stale.len();
        if len >= 2 {
            self.stale[len - 2] = true;
        }
    }

    /// Vuelve al nivel anterior. Devuelve `true` si ese nivel quedó
    /// desactualizado y debe recargar; el flag se consume.
    pub fn pop(&mut self) -> bool {
        if self.levels.len() <= 1 {
            return false;
        }
        self.levels.pop();
        self.stale.pop();
        let last = self.stale.len() - 1;
        std::mem::take(&mut self.stale[last])
    }
}

/// Ciclo de vida del dato remoto de un nivel de navegación.
///
/// `Deleting` retiene el dato cargado: si la baja falla, la vista vuelve a
/// `Loaded` con lo último conocido y el error se muestra como notificación,
/// sin mutación parcial local.
#[derive(Debug, Clone, PartialEq)]
pub enum RemoteData<T> {
    Idle,
    Loading,
    Loaded(T),
    Failed(String),
    Deleting(T),
}

impl<T> RemoteData<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, RemoteData::Loading)
    }

    pub fn is_busy(&self) -> bool {
        matches!(self, RemoteData::Loading | RemoteData::Deleting(_))
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            RemoteData::Loaded(data) | RemoteData::Deleting(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            RemoteData::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// Loaded → Deleting. En cualquier otro estado no hace nada.
    pub fn begin_delete(&mut self) {
        if matches!(self, RemoteData::Loaded(_)) {
            let prev = std::mem::replace(self, RemoteData::Idle);
            if let RemoteData::Loaded(data) = prev {
                *self = RemoteData::Deleting(data);
            }
        }
    }

    /// Deleting → Loaded, reteniendo el dato previo (la baja falló).
    pub fn delete_failed(&mut self) {
        if matches!(self, RemoteData::Deleting(_)) {
            let prev = std::mem::replace(self, RemoteData::Idle);
            if let RemoteData::Deleting(data) = prev {
                *self = RemoteData::Loaded(data);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stack_starts_at_clients() {
        let stack = DrillStack::new();
        assert_eq!(stack.current(), DrillLevel::Clients);
        assert_eq!(stack.depth(), 1);
    }

    #[test]
    fn drill_down_to_lots_carries_both_ids() {
        let mut stack = DrillStack::new();
        stack.push_client(7).unwrap();
        stack.push_field(42).unwrap();
        assert_eq!(
            stack.current(),
            DrillLevel::FieldLots {
                client_id: 7,
                field_id: 42
            }
        );
        assert_eq!(stack.depth(), 3);
    }

    #[test]
    fn push_field_requires_client_level() {
        let mut stack = DrillStack::new();
        assert!(stack.push_field(42).is_err());
    }

    #[test]
    fn push_client_only_from_base() {
        let mut stack = DrillStack::new();
        stack.push_client(7).unwrap();
        assert!(stack.push_client(8).is_err());
    }

    #[test]
    fn pop_without_mutation_does_not_force_reload() {
        let mut stack = DrillStack::new();
        stack.push_client(7).unwrap();
        assert!(!stack.pop());
        assert_eq!(stack.current(), DrillLevel::Clients);
    }

    #[test]
    fn pop_after_child_mutation_reloads_parent_once() {
        let mut stack = DrillStack::new();
        stack.push_client(7).unwrap();
        stack.push_field(42).unwrap();
        // Se borró un lote: el nivel de campos debe recargar al volver.
        stack.mark_parent_stale();
        assert!(stack.pop());
        // El flag se consume; volver a entrar y salir no recarga de nuevo.
        stack.push_field(42).unwrap();
        assert!(!stack.pop());
    }

    #[test]
    fn base_level_cannot_be_popped() {
        let mut stack = DrillStack::new();
        assert!(!stack.pop());
        assert_eq!(stack.depth(), 1);
    }

    #[test]
    fn remote_data_delete_failure_retains_data() {
        let mut state = RemoteData::Loaded(vec![1, 2, 3]);
        state.begin_delete();
        assert!(matches!(state, RemoteData::Deleting(_)));
        assert_eq!(state.data(), Some(&vec![1, 2, 3]));

        state.delete_failed();
        assert_eq!(state, RemoteData::Loaded(vec![1, 2, 3]));
    }

    #[test]
    fn begin_delete_ignored_outside_loaded() {
        let mut state: RemoteData<i32> = RemoteData::Loading;
        state.begin_delete();
        assert_eq!(state, RemoteData::Loading);
    }
}

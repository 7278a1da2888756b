//! Cadena de selección en cascada Cliente → Campo → Lotes.
//!
//! Mantiene consistentes las selecciones dependientes del formulario de
//! órdenes de trabajo: cambiar el cliente invalida el campo y los lotes ya
//! elegidos; cambiar el campo invalida los lotes. Cada mutación de un nivel
//! superior incrementa `generation`, y las respuestas de red despachadas para
//! una generación anterior se descartan con [`SelectionChain::is_current`].

use crate::domain::common::EntityId;

/// Valor reservado en los selectores que abre el alta de una nueva entidad
/// en lugar de escribir la cadena.
pub const CREATE_NEW: &str = "__nuevo__";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionChain {
    client_id: Option<EntityId>,
    field_id: Option<EntityId>,
    lot_ids: Vec<EntityId>,
    generation: u64,
}

impl Default for SelectionChain {
    fn default() -> Self {
        Self::new()
    }
}

impl SelectionChain {
    pub fn new() -> Self {
        Self {
            client_id: None,
            field_id: None,
            lot_ids: Vec::new(),
            generation: 0,
        }
    }

    pub fn client_id(&self) -> Option<EntityId> {
        self.client_id
    }

    pub fn field_id(&self) -> Option<EntityId> {
        self.field_id
    }

    pub fn lot_ids(&self) -> &[EntityId] {
        &self.lot_ids
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// ¿Sigue vigente una respuesta despachada en `generation`?
    pub fn is_current(&self, generation: u64) -> bool {
        self.generation == generation
    }

    /// Selecciona un cliente. Siempre resetea campo y lotes, incluso si se
    /// reselecciona el mismo cliente: una única regla de transición, sin
    /// caso especial.
    pub fn set_client(&mut self, id: EntityId) -> u64 {
        self.client_id = Some(id);
        self.reset_field_and_lots()
    }

    pub fn clear_client(&mut self) -> u64 {
        self.client_id = None;
        self.reset_field_and_lots()
    }

    /// Selecciona un campo. Requiere cliente; limpia los lotes elegidos.
    pub fn set_field(&mut self, id: EntityId) -> Result<u64, String> {
        if self.client_id.is_none() {
            return Err("Primero hay que seleccionar un cliente".to_string());
        }
        self.field_id = Some(id);
        Ok(self.reset_lots())
    }

    pub fn clear_field(&mut self) -> u64 {
        self.field_id = None;
        self.reset_lots()
    }

    /// El selector de campos está habilitado solo con un cliente elegido.
    pub fn fields_enabled(&self) -> bool {
        self.client_id.is_some()
    }

    /// El selector de lotes está habilitado solo con un campo elegido.
    pub fn lots_enabled(&self) -> bool {
        self.field_id.is_some()
    }

    /// Agrega o quita un lote de la selección múltiple.
    pub fn toggle_lot(&mut self, id: EntityId) -> Result<(), String> {
        if self.field_id.is_none() {
            return Err("Primero hay que seleccionar un campo".to_string());
        }
        if let Some(pos) = self.lot_ids.iter().position(|l| *l == id) {
            self.lot_ids.remove(pos);
        } else {
            self.lot_ids.push(id);
        }
        Ok(())
    }

    pub fn has_lots(&self) -> bool {
        !self.lot_ids.is_empty()
    }

    fn reset_field_and_lots(&mut self) -> u64 {
        self.field_id = None;
        self.lot_ids.clear();
        self.generation += 1;
        self.generation
    }

    fn reset_lots(&mut self) -> u64 {
        self.lot_ids.clear();
        self.generation += 1;
        self.generation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_chain_has_everything_disabled() {
        let chain = SelectionChain::new();
        assert_eq!(chain.client_id(), None);
        assert!(!chain.fields_enabled());
        assert!(!chain.lots_enabled());
    }

    #[test]
    fn selecting_client_resets_field_and_lots() {
        let mut chain = SelectionChain::new();
        chain.set_client(1);
        chain.set_field(10).unwrap();
        chain.toggle_lot(100).unwrap();

        chain.set_client(2);
        assert_eq!(chain.client_id(), Some(2));
        assert_eq!(chain.field_id(), None);
        assert!(chain.lot_ids().is_empty());
    }

    #[test]
    fn reselecting_same_client_still_cascades() {
        let mut chain = SelectionChain::new();
        chain.set_client(1);
        chain.set_field(10).unwrap();
        chain.toggle_lot(100).unwrap();

        // Misma regla para el mismo valor: sin caso especial.
        chain.set_client(1);
        assert_eq!(chain.field_id(), None);
        assert!(chain.lot_ids().is_empty());
    }

    #[test]
    fn selecting_field_keeps_client_and_clears_lots() {
        let mut chain = SelectionChain::new();
        chain.set_client(1);
        chain.set_field(10).unwrap();
        chain.toggle_lot(100).unwrap();
        chain.toggle_lot(101).unwrap();

        chain.set_field(11).unwrap();
        assert_eq!(chain.client_id(), Some(1));
        assert_eq!(chain.field_id(), Some(11));
        assert!(chain.lot_ids().is_empty());
    }

    #[test]
    fn field_selection_requires_client() {
        let mut chain = SelectionChain::new();
        assert!(chain.set_field(10).is_err());
    }

    #[test]
    fn lot_toggle_requires_field() {
        let mut chain = SelectionChain::new();
        chain.set_client(1);
        assert!(chain.toggle_lot(100).is_err());
    }

    #[test]
    fn lot_toggle_adds_and_removes() {
        let mut chain = SelectionChain::new();
        chain.set_client(1);
        chain.set_field(10).unwrap();
        chain.toggle_lot(100).unwrap();
        chain.toggle_lot(101).unwrap();
        assert_eq!(chain.lot_ids(), &[100, 101]);
        chain.toggle_lot(100).unwrap();
        assert_eq!(chain.lot_ids(), &[101]);
    }

    #[test]
    fn stale_generation_is_rejected() {
        let mut chain = SelectionChain::new();
        let gen_a = chain.set_client(1);
        // El usuario cambia a otro cliente antes de que llegue la respuesta
        // de campos del primero.
        let gen_b = chain.set_client(2);

        assert!(!chain.is_current(gen_a));
        assert!(chain.is_current(gen_b));
    }

    #[test]
    fn field_change_also_bumps_generation() {
        let mut chain = SelectionChain::new();
        chain.set_client(1);
        let gen_a = chain.set_field(10).unwrap();
        let gen_b = chain.set_field(11).unwrap();
        assert!(!chain.is_current(gen_a));
        assert!(chain.is_current(gen_b));
    }

    #[test]
    fn clearing_client_disables_fields() {
        let mut chain = SelectionChain::new();
        chain.set_client(1);
        chain.set_field(10).unwrap();
        chain.clear_client();
        assert!(!chain.fields_enabled());
        assert!(!chain.lots_enabled());
        assert_eq!(chain.field_id(), None);
    }
}

/// Identificador de entidad tal como lo entrega el backend REST.
pub type EntityId = i32;

/// Elementos que pueden ofrecerse en un selector (id + texto visible).
pub trait PickerItem {
    fn picker_id(&self) -> EntityId;
    fn picker_label(&self) -> String;
}

pub mod buttons;
pub mod checkbox_list;
pub mod dropdown;
pub mod item_picker;
pub mod radio_button_list;

pub use buttons::ButtonsDataListEditor;
pub use checkbox_list::CheckboxListDataListEditor;
pub use dropdown::DropdownListDataListEditor;
pub use item_picker::ItemPickerDataListEditor;
pub use radio_button_list::RadioButtonListDataListEditor;

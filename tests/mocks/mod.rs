pub mod memory_store;
pub mod scripted_ui;

#[allow(unused_imports)]
pub use memory_store::MemoryBookStore;
#[allow(unused_imports)]
pub use scripted_ui::ScriptedUi;

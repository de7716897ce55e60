//! UI-Komponenten: Menü, Feature-Liste, Status-Bar, Dialoge.

pub mod dialogs;
pub mod feature_list;
/// UI-Layer mit egui
///
/// Dieses Modul zeichnet den Zustand und liefert `AppIntent`s zurück.
/// Mutationen laufen ausschließlich über den Controller.
pub mod menu;
pub mod options_dialog;
pub mod status;

pub use dialogs::show_feature_dialog;
pub use feature_list::render_feature_list;
pub use menu::render_menu;
pub use options_dialog::show_options_dialog;
pub use status::render_status_bar;

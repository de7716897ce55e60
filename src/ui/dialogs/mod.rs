//! Modale Fenster: Feature-Dialoge und Fehlerhinweis.

mod feature_dialog;

pub use feature_dialog::show_feature_dialog;

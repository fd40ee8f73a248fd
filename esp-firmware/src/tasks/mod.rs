// Task-Modul: Enthält alle Embassy Tasks
//
// Die gesamte Strip-Logik läuft kooperativ in einem einzigen Task,
// es gibt keine geteilten Daten zwischen Tasks.

pub mod strip;

// Re-export Tasks für einfachen Import
pub use strip::{StripPeripherals, strip_task};
